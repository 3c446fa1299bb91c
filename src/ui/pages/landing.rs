//! The landing page
//!
//! Navbar and hero are server-rendered. The story, features, download and
//! contribute sections follow once the page has hydrated.

use leptos::prelude::*;
use leptos_meta::{Link, Meta, Title};

use crate::core::config::use_site_config;
use crate::ui::deferred::Deferred;
use crate::ui::sections::{About, Contribute, Download, Features, Hero, Navbar};

#[component]
pub fn LandingPage() -> impl IntoView {
    view! {
        <SeoMeta />
        <PageBackground />

        <Navbar />
        <main>
            <Hero />
            <Deferred>
                <About />
                <Features />
                <Download />
                <Contribute />
            </Deferred>
        </main>
    }
}

/// `:root` rule pointing `--page-bg` at `url`.
///
/// The url is written as an escaped CSS string, so it can neither close the
/// string nor the surrounding `<style>` element.
fn background_rule(url: &str) -> String {
    let mut quoted = String::with_capacity(url.len());
    for c in url.chars() {
        match c {
            '"' | '\\' => {
                quoted.push('\\');
                quoted.push(c);
            }
            '<' | '\n' | '\r' | '\u{c}' => quoted.push_str(&format!("\\{:x} ", u32::from(c))),
            _ => quoted.push(c),
        }
    }
    format!(":root {{ --page-bg: url(\"{quoted}\"); }}")
}

/// Points the `--page-bg` custom property at the configured asset host
#[component]
fn PageBackground() -> impl IntoView {
    let css = background_rule(&use_site_config().background_url());
    view! { <style id="page-background" inner_html=css></style> }
}

#[component]
fn SeoMeta() -> impl IntoView {
    const DESCRIPTION: &str =
        "BunkMate tells you when you can skip class without risking attendance.";

    view! {
        <Title text="BunkMate - Can I bunk today?" />
        <Meta name="description" content=DESCRIPTION />
        <Meta name="theme-color" content="#fff8e7" />

        <Meta property="og:type" content="website" />
        <Meta property="og:title" content="BunkMate - Can I bunk today?" />
        <Meta property="og:description" content=DESCRIPTION />

        <Link rel="icon" href="/favicon.ico" />
    }
}
