use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, provide_meta_context};
use leptos_router::StaticSegment;
use leptos_router::components::{Route, Router, Routes};

use crate::ui::pages::{LandingPage, NotFoundPage};
use crate::ui::{KonamiEasterEgg, ViewportLogger, provide_reveal_context, provide_tracking};

pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="es">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone() />
                <HydrationScripts options/>
                <SiteHead/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

#[component]
pub fn App() -> impl IntoView {
    // Provides context that manages stylesheets, titles, meta tags, etc.
    provide_meta_context();

    provide_tracking();
    provide_reveal_context();

    view! {
        // injects a stylesheet into the document <head>
        // id=leptos means cargo-leptos will hot-reload this stylesheet
        <Stylesheet id="leptos" href="/pkg/leadpage.css"/>

        <KonamiEasterEgg/>
        <ViewportLogger/>

        <Router>
            <Routes fallback=NotFoundPage>
                <Route path=StaticSegment("") view=LandingPage/>
            </Routes>
        </Router>
    }
}

/// Canonical URL and analytics loaders, from the host configuration
#[cfg(feature = "ssr")]
#[component]
fn SiteHead() -> impl IntoView {
    use leptos_meta::Meta;

    use crate::core::config::Config;

    let config = use_context::<Config>().unwrap_or_default();
    let site_url = config.site_url().to_string();

    view! {
        <link rel="canonical" href=site_url.clone()/>
        <Meta property="og:url" content=site_url/>

        {config.gtag_id.map(|id| view! { <script inner_html=gtag_loader(&id)></script> })}

        {config.fb_pixel_id.map(|id| view! { <script inner_html=fb_pixel_loader(&id)></script> })}
    }
}

#[cfg(not(feature = "ssr"))]
#[component]
fn SiteHead() -> impl IntoView {}

#[cfg(feature = "ssr")]
const GTAG_LOADER: &str = "(function(d){var s=d.createElement('script');s.async=true;\
s.src='https://www.googletagmanager.com/gtag/js?id={ID}';\
d.head.appendChild(s);})(document);\
window.dataLayer = window.dataLayer || [];\
function gtag(){dataLayer.push(arguments);}\
gtag('js', new Date());\
gtag('config', '{ID}');";

#[cfg(feature = "ssr")]
const FB_PIXEL_LOADER: &str = "!function(f,b,e,v,n,t,s)\
{if(f.fbq)return;n=f.fbq=function(){n.callMethod?\
n.callMethod.apply(n,arguments):n.queue.push(arguments)};\
if(!f._fbq)f._fbq=n;n.push=n;n.loaded=!0;n.version='2.0';\
n.queue=[];t=b.createElement(e);t.async=!0;\
t.src=v;s=b.getElementsByTagName(e)[0];\
s.parentNode.insertBefore(t,s)}(window, document,'script',\
'https://connect.facebook.net/en_US/fbevents.js');\
fbq('init', '{ID}');\
fbq('track', 'PageView');";

/// Inline script defining `gtag` for a measurement id
///
/// Ids are checked by `Config` before they get here.
#[cfg(feature = "ssr")]
pub fn gtag_loader(id: &str) -> String {
    GTAG_LOADER.replace("{ID}", id)
}

/// Inline script defining `fbq` for a pixel id
#[cfg(feature = "ssr")]
pub fn fb_pixel_loader(id: &str) -> String {
    FB_PIXEL_LOADER.replace("{ID}", id)
}

#[cfg(all(test, feature = "ssr"))]
mod tests {
    use super::*;

    #[test]
    fn test_gtag_loader_configures_id() {
        let script = gtag_loader("G-TEST123");
        assert!(script.contains("gtag('config', 'G-TEST123');"));
        assert!(script.contains("gtag/js?id=G-TEST123"));
        assert!(!script.contains("{ID}"));
    }

    #[test]
    fn test_fb_pixel_loader_inits_id() {
        let script = fb_pixel_loader("123456");
        assert!(script.contains("fbq('init', '123456');"));
        assert!(script.contains("fbq('track', 'PageView');"));
    }

    #[tokio::test]
    async fn test_site_head_emits_canonical_and_og_url() {
        use any_spawner::Executor;
        use futures::StreamExt;
        use leptos_meta::ServerMetaContext;

        use crate::core::config::Config;

        _ = Executor::init_tokio();
        let owner = Owner::new();
        owner.set();

        let (meta, output) = ServerMetaContext::new();
        provide_context(meta);
        provide_context(Config {
            site_url: Some("https://example.com/guia".to_string()),
            ..Default::default()
        });

        let head = view! {
            <head>
                <SiteHead/>
                <MetaTags/>
            </head>
        }
        .to_html();
        let page = output
            .inject_meta_context(futures::stream::iter([head]))
            .await
            .collect::<String>()
            .await;

        assert!(page.contains(r#"rel="canonical""#));
        assert!(page.contains(r#"href="https://example.com/guia""#));
        assert!(page.contains(r#"property="og:url""#));
        assert!(page.contains(r#"content="https://example.com/guia""#));
        assert!(!page.contains("gtag("));
    }
}
