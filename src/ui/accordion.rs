//! FAQ accordion built on native `<details>` elements

use leptos::prelude::*;

use crate::core::accordion::AccordionGroup;
use crate::ui::reveal::use_reveal;
use crate::ui::{Icon, icons};

/// One question and its answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FaqEntry {
    pub question: &'static str,
    pub answer: &'static str,
}

impl FaqEntry {
    pub const fn new(question: &'static str, answer: &'static str) -> Self {
        Self { question, answer }
    }
}

/// Exclusive accordion: at most one entry is open
#[component]
pub fn Accordion(entries: Vec<FaqEntry>) -> impl IntoView {
    let group = RwSignal::new(AccordionGroup::new(entries.len()));

    view! {
        <div class="accordion">
            {entries
                .into_iter()
                .enumerate()
                .map(|(index, entry)| view! { <AccordionItem index=index entry=entry group=group/> })
                .collect_view()}
        </div>
    }
}

#[component]
fn AccordionItem(index: usize, entry: FaqEntry, group: RwSignal<AccordionGroup>) -> impl IntoView {
    let reveal = use_reveal();
    let is_open = move || group.with(|g| g.is_open(index));

    view! {
        <details
            class="accordion__item"
            data-reveal-id=reveal.id
            style=move || reveal.style.get()
            prop:open=is_open
        >
            <summary
                class="accordion__header"
                on:click=move |ev| {
                    ev.prevent_default();
                    group.update(|g| g.toggle(index));
                }
            >
                <span class="accordion__question">{entry.question}</span>
                <Icon name=icons::CHEVRON_DOWN class="accordion__icon"/>
            </summary>
            <div class="accordion__content">
                <p>{entry.answer}</p>
            </div>
        </details>
    }
}
