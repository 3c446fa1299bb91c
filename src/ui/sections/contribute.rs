//! Open-source call to action and the page footer.

use leptos::html;
use leptos::prelude::*;

use crate::core::config::use_site_config;
use crate::core::content::{
    CONTRIBUTE_STEPS, CONTRIBUTE_SUBTITLE, CONTRIBUTE_TAGLINE, CONTRIBUTE_TITLE,
};
use crate::core::motion::{At, Ease, Pose, Scene, Target, Timeline, Trigger, TriggerStart};
use crate::ui::motion::use_scene;
use crate::ui::rich_text::Fragments;

const HEART_PATH: &str = "M1.24264 8.24264L8 15L14.7574 8.24264C15.553 7.44699 16 6.36786 16 5.24264V5.05234C16 2.8143 14.1857 1 11.9477 1C10.7166 1 9.55233 1.55959 8.78331 2.52086L8 3.5L7.21669 2.52086C6.44767 1.55959 5.28338 1 4.05234 1C1.8143 1 0 2.8143 0 5.05234V5.24264C0 6.36786 0.44699 7.44699 1.24264 8.24264Z";

pub fn scene() -> Scene {
    let cues = Timeline::new(Ease::Power3Out)
        .from(
            Target::all("[data-contribute-header]"),
            Pose::new().y(30.0).opacity(0.0),
            0.6,
            Ease::Power3Out,
            At::End,
        )
        .stagger(
            Target::each("[data-contribute-step]", CONTRIBUTE_STEPS.len()),
            Pose::new().x(-40.0).opacity(0.0),
            Pose::new(),
            0.5,
            0.15,
            Ease::Power2Out,
            At::Overlap(0.2),
        )
        .from(
            Target::all("[data-contribute-laptop]"),
            Pose::new().x(60.0).opacity(0.0),
            0.7,
            Ease::Power3Out,
            At::Overlap(0.5),
        )
        .from(
            Target::all("[data-contribute-cta]"),
            Pose::new().y(20.0).opacity(0.0),
            0.5,
            Ease::Power2Out,
            At::Overlap(0.2),
        )
        .into_cues(Trigger::scroll(Target::Scope, TriggerStart::top(70.0)));

    let mut scene = Scene::new();
    scene.extend(cues);
    scene
}

#[component]
pub fn Contribute() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let config = use_site_config();
    use_scene(section_ref, scene);

    let steps = CONTRIBUTE_STEPS
        .iter()
        .map(|step| {
            let last = step.lines.len() - 1;
            let lines = step
                .lines
                .iter()
                .enumerate()
                .map(|(i, line)| view! { {*line} {(i < last).then(|| view! { <br /> })} })
                .collect_view();
            view! {
                <div class="contribute-step" data-contribute-step="">
                    <img src=config.asset(step.icon) alt="" class="step-icon" />
                    <div class="step-content">
                        <span class="step-title">{step.title}</span>
                        <p class="step-desc">{lines}</p>
                    </div>
                </div>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section_ref id="contribute" class="contribute-section">
            <div class="container">
                <div class="contribute-header" data-contribute-header="">
                    <h2 class="contribute-title"><Fragments text=CONTRIBUTE_TITLE /></h2>
                    <p class="contribute-subtitle"><Fragments text=CONTRIBUTE_SUBTITLE /></p>
                </div>

                <div class="steps-area">
                    {steps}
                    <div class="laptop-wrapper" data-contribute-laptop="">
                        <img
                            src=config.asset("/images/github-laptop.webp")
                            alt="GitHub on laptop"
                            class="laptop-img"
                        />
                        <img src=config.asset("/images/star-2.webp") alt="" class="star-deco" />
                    </div>
                </div>

                <div class="cta-area" data-contribute-cta="">
                    <a
                        href=config.github_url.clone()
                        target="_blank"
                        rel="noopener noreferrer"
                        class="github-link"
                    >
                        <img
                            src=config.asset("/images/github-btn.webp")
                            alt="View on GitHub"
                            class="github-btn"
                        />
                    </a>
                    <p class="contribute-tagline">{CONTRIBUTE_TAGLINE}</p>
                </div>
            </div>

            <footer class="site-footer">
                <p class="footer-text">"Made Wid"</p>
                <span class="heart" aria-label="love">
                    <svg viewBox="0 0 16 16" fill="none" aria-hidden="true">
                        <path d=HEART_PATH fill="var(--accent-red)" />
                    </svg>
                </span>
                <p class="footer-text">"By Kichu"</p>
            </footer>
        </section>
    }
}
