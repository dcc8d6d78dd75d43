//! Landing page for the free "Aprende a Programar" PDF
//!
//! Sections, top to bottom:
//! - Header with in-page navigation
//! - Hero with the main call to action
//! - Benefit cards
//! - Author profile
//! - FAQ accordion
//! - Download section with the lead form
//! - Footer
//!
//! Every `<section>` carries its name as first class; section view tracking
//! reports that name.

use leptos::prelude::*;
use leptos_meta::{Meta, Title};

use crate::ui::accordion::{Accordion, FaqEntry};
use crate::ui::icon::{Icon, icons};
use crate::ui::lead_form::LeadForm;
use crate::ui::reveal::{Reveal, use_reveal};
use crate::ui::smooth_scroll::AnchorLink;
use crate::ui::tracking::SectionViewTracker;

const PAGE_TITLE: &str = "Aprende a Programar desde Cero | Guía PDF Gratis";
const PAGE_DESCRIPTION: &str = "Descarga gratis la guía en PDF para aprender a programar desde cero: \
    fundamentos, ejercicios prácticos y un plan de estudio para tus primeros 30 días.";

const BENEFITS: [(&str, &str, &str); 3] = [
    (
        icons::BOOK,
        "Fundamentos claros",
        "Variables, condicionales, bucles y funciones explicados sin jerga y con ejemplos reales.",
    ),
    (
        icons::CODE,
        "Ejercicios prácticos",
        "Más de 40 ejercicios resueltos paso a paso para que escribas código desde el primer día.",
    ),
    (
        icons::ROCKET,
        "Plan de 30 días",
        "Una ruta de estudio diaria para pasar de cero a tu primer proyecto completo.",
    ),
];

const FAQ: [FaqEntry; 4] = [
    FaqEntry::new(
        "¿Necesito conocimientos previos?",
        "No. La guía empieza desde cero y explica cada concepto antes de usarlo.",
    ),
    FaqEntry::new(
        "¿De verdad es gratis?",
        "Sí. Solo te pedimos tu email para enviarte el PDF. Sin tarjetas ni pagos ocultos.",
    ),
    FaqEntry::new(
        "¿Qué lenguaje de programación se usa?",
        "Los ejemplos usan Python por su sintaxis sencilla, pero los conceptos sirven para cualquier lenguaje.",
    ),
    FaqEntry::new(
        "¿Cuánto tarda en llegar el PDF?",
        "Unos segundos. Si no lo ves, revisa la carpeta de spam o promociones.",
    ),
];

/// Landing page
#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />

        <div class="page">
            <Header />

            <main>
                <HeroSection />
                <BenefitsSection />
                <AuthorSection />
                <FaqSection />
                <DownloadSection />
            </main>

            <Footer />
        </div>

        <SectionViewTracker />
    }
}

/// Title, description and Open Graph tags
///
/// The canonical URL and `og:url` depend on the host configuration and are
/// rendered by the shell.
#[component]
fn SeoMeta() -> impl IntoView {
    view! {
        <Title text=PAGE_TITLE />

        <Meta name="description" content=PAGE_DESCRIPTION />
        <Meta name="keywords" content="aprender a programar, programación desde cero, guía pdf gratis, python para principiantes" />

        // Open Graph
        <Meta property="og:type" content="website" />
        <Meta property="og:title" content=PAGE_TITLE />
        <Meta property="og:description" content=PAGE_DESCRIPTION />
        <Meta property="og:locale" content="es_ES" />
    }
}

#[component]
fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div class="container header__inner">
                <a href="/" class="header__logo">"<AprendeAProgramar />"</a>
                <nav class="header__nav">
                    <AnchorLink href="#beneficios" class="header__link">"Beneficios"</AnchorLink>
                    <AnchorLink href="#faq" class="header__link">"Preguntas"</AnchorLink>
                    <AnchorLink href="#descarga" class="header__link btn btn--small">"Descargar"</AnchorLink>
                </nav>
            </div>
        </header>
    }
}

#[component]
fn HeroSection() -> impl IntoView {
    view! {
        <section class="hero">
            <div class="container hero__inner">
                <span class="hero__badge">"📘 Guía PDF gratuita"</span>
                <h1 class="hero__title">"Aprende a programar desde cero"</h1>
                <p class="hero__subtitle">
                    "La guía práctica para escribir tu primer programa, entender cómo piensa un ordenador \
                     y construir tu primer proyecto en 30 días."
                </p>
                <AnchorLink href="#descarga" class="btn btn--primary hero__cta">
                    "¡Quiero mi copia GRATIS!"
                </AnchorLink>
            </div>
        </section>
    }
}

#[component]
fn BenefitsSection() -> impl IntoView {
    view! {
        <section id="beneficios" class="benefits">
            <div class="container">
                <h2 class="section__title">"Qué vas a aprender"</h2>
                <div class="benefits__grid">
                    {BENEFITS
                        .into_iter()
                        .map(|(icon, title, text)| {
                            view! {
                                <Reveal class="card">
                                    <Icon name=icon class="card__icon" />
                                    <h3 class="card__title">{title}</h3>
                                    <p class="card__text">{text}</p>
                                </Reveal>
                            }
                        })
                        .collect_view()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn AuthorSection() -> impl IntoView {
    let reveal = use_reveal();

    view! {
        <section class="author">
            <div class="container">
                <div
                    class="author__profile"
                    data-reveal-id=reveal.id
                    style=move || reveal.style.get()
                >
                    <img class="author__avatar" src="/images/author.svg" alt="Foto del autor" loading="lazy" />
                    <div class="author__bio">
                        <h2 class="author__name">"Sobre el autor"</h2>
                        <p>
                            "Desarrollador de software con más de diez años de experiencia y profesor de \
                             programación. Ha ayudado a miles de personas a escribir su primera línea de código."
                        </p>
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn FaqSection() -> impl IntoView {
    view! {
        <section id="faq" class="faq">
            <div class="container">
                <h2 class="section__title">"Preguntas frecuentes"</h2>
                <Accordion entries=FAQ.to_vec() />
            </div>
        </section>
    }
}

#[component]
fn DownloadSection() -> impl IntoView {
    view! {
        <section id="descarga" class="download">
            <div class="container download__inner">
                <Icon name=icons::MAIL class="download__icon" />
                <h2 class="section__title">"Descarga tu guía gratis"</h2>
                <p class="download__text">
                    "Déjanos tu email y te enviaremos el PDF al instante."
                </p>
                <LeadForm />
            </div>
        </section>
    }
}

#[component]
fn Footer() -> impl IntoView {
    view! {
        <footer class="footer">
            <div class="container">
                <p>"© 2025 Aprende a Programar. Todos los derechos reservados."</p>
            </div>
        </footer>
    }
}
