//! Server-rendered markup checks.

use leptos::prelude::*;

use crate::core::config::SiteConfig;
use crate::core::content::{FEATURES, NAV_ITEMS};
use crate::ui::LoadingScreen;
use crate::ui::sections::{About, Contribute, Download, Features, Hero, Navbar};

fn sample_config() -> SiteConfig {
    SiteConfig::new(
        "https://example.com/repo",
        "https://example.com/app.apk",
        "https://cdn.example.com",
    )
}

/// Render `view` to HTML with `config` provided through context
fn render<V, F>(config: SiteConfig, view: F) -> String
where
    F: FnOnce() -> V,
    V: IntoView,
{
    let owner = Owner::new();
    owner.with(|| {
        provide_context(config);
        view().into_view().to_html()
    })
}

/// Every value of `attr` in `html`, in document order
fn attr_values<'a>(html: &'a str, attr: &str) -> Vec<&'a str> {
    let needle = format!(" {attr}=\"");
    html.match_indices(&needle)
        .filter_map(|(at, _)| {
            let rest = &html[at + needle.len()..];
            rest.find('"').map(|end| &rest[..end])
        })
        .collect()
}

/// The markup of the element whose opening tag carries `id`, up to the next
/// element with an id from `stops` (or the end)
fn region<'a>(html: &'a str, id: &str, stops: &[&str]) -> &'a str {
    let start = html
        .find(&format!("id=\"{id}\""))
        .unwrap_or_else(|| panic!("no element with id {id}"));
    let rest = &html[start..];
    let end = stops
        .iter()
        .filter_map(|stop| rest.find(&format!("id=\"{stop}\"")))
        .min()
        .unwrap_or(rest.len());
    &rest[..end]
}

#[test]
fn test_download_link_uses_configured_apk() {
    let html = render(sample_config(), || view! { <Download /> });
    assert_eq!(attr_values(&html, "href"), ["https://example.com/app.apk"]);
    assert!(html.contains("target=\"_blank\""));
    assert!(html.contains("rel=\"noopener noreferrer\""));
}

#[test]
fn test_contribute_link_uses_configured_repo() {
    let html = render(sample_config(), || view! { <Contribute /> });
    let hrefs = attr_values(&html, "href");
    assert_eq!(hrefs, ["https://example.com/repo"]);
}

#[test]
fn test_about_images_come_from_cdn() {
    let html = render(sample_config(), || view! { <About /> });
    let sources = attr_values(&html, "src");
    assert!(!sources.is_empty());
    for src in sources {
        assert!(
            src.starts_with("https://cdn.example.com/images/"),
            "unexpected image source {src}"
        );
    }
}

#[test]
fn test_hero_images_are_bundled() {
    let html = render(sample_config(), || view! { <Hero /> });
    let sources = attr_values(&html, "src");
    assert_eq!(sources.iter().filter(|s| s.contains("cloud-")).count(), 4);
    assert!(sources.iter().all(|s| s.starts_with("/images/")));
}

#[test]
fn test_every_nav_item_once_per_menu() {
    let html = render(sample_config(), || view! { <Navbar /> });
    let desktop = region(&html, "desktop-nav", &["mobile-menu"]);
    let mobile = region(&html, "mobile-menu", &[]);

    for item in NAV_ITEMS {
        let href = item.href();
        let in_desktop = attr_values(desktop, "href").iter().filter(|h| **h == href).count();
        let in_mobile = attr_values(mobile, "href").iter().filter(|h| **h == href).count();
        assert_eq!(in_desktop, 1, "{} in desktop menu", item.label);
        assert_eq!(in_mobile, 1, "{} in mobile menu", item.label);
    }
}

#[test]
fn test_menu_starts_closed() {
    let html = render(sample_config(), || view! { <Navbar /> });
    assert!(html.contains("aria-label=\"Open menu\""));
    assert!(html.contains("aria-expanded=\"false\""));
    assert!(!html.contains("mobile-menu open"));
}

#[test]
fn test_features_render_in_order_with_their_paragraphs() {
    let html = render(sample_config(), || view! { <Features /> });

    let mut last = 0;
    for feature in FEATURES {
        let title = feature.title.replace('&', "&amp;");
        let at = html[last..]
            .find(&title)
            .map(|i| i + last)
            .unwrap_or_else(|| panic!("{} missing or out of order", feature.title));
        last = at;
    }

    let cards: Vec<&str> = html.split("data-card=\"").skip(1).collect();
    assert_eq!(cards.len(), FEATURES.len());
    for (card, feature) in cards.iter().zip(FEATURES) {
        assert!(card.starts_with(&format!("{}\"", feature.index)));
        assert_eq!(card.matches("data-title").count(), 1, "{}", feature.title);
        assert_eq!(card.matches("data-img").count(), 1, "{}", feature.title);
        assert_eq!(
            card.matches("data-text").count(),
            feature.paragraphs.len(),
            "{}",
            feature.title
        );
    }
}

#[test]
fn test_blank_config_still_renders() {
    let html = render(SiteConfig::default(), || view! { <Download /> });
    assert!(html.contains("src=\"/images/android-phone.webp\""));
}

#[test]
fn test_loading_screen_announces_itself() {
    let html = render(sample_config(), || view! { <LoadingScreen /> });
    assert!(html.contains("role=\"status\""));
    assert!(html.contains("Loading"));
}
