//! In-page links that scroll smoothly to their target

use leptos::prelude::*;

use crate::core::scroll::anchor_target;

/// `<a>` that scrolls to `#id` targets instead of jumping
///
/// Hrefs that are not in-page anchors keep the browser's default behavior.
/// An anchor whose target is missing does nothing.
#[component]
pub fn AnchorLink(
    href: &'static str,
    #[prop(optional)]
    class: &'static str,
    children: Children,
) -> impl IntoView {
    let on_click = move |ev: leptos::ev::MouseEvent| {
        let Some(id) = anchor_target(href) else {
            return;
        };

        ev.prevent_default();

        #[cfg(not(feature = "ssr"))]
        {
            let Some(target) = web_sys::window()
                .and_then(|w| w.document())
                .and_then(|d| d.get_element_by_id(id))
            else {
                return;
            };

            let options = web_sys::ScrollIntoViewOptions::new();
            options.set_behavior(web_sys::ScrollBehavior::Smooth);
            options.set_block(web_sys::ScrollLogicalPosition::Start);
            target.scroll_into_view_with_scroll_into_view_options(&options);
        }
        #[cfg(feature = "ssr")]
        {
            let _ = id;
        }
    };

    view! {
        <a href=href class=class on:click=on_click>
            {children()}
        </a>
    }
}
