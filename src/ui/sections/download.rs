//! Android download instructions and the APK link.

use leptos::html;
use leptos::prelude::*;

use crate::core::config::use_site_config;
use crate::core::content::{DOWNLOAD_STEPS, DOWNLOAD_VERSION_INFO};
use crate::core::motion::{At, Ease, Pose, Scene, Target, Timeline, Trigger, TriggerStart};
use crate::ui::motion::use_scene;
use crate::ui::rich_text::Fragments;

/// Phone from the left, instructions from the right, once the section is 70%
/// of the way up the viewport.
pub fn scene() -> Scene {
    let cues = Timeline::new(Ease::Power3Out)
        .from(
            Target::all("[data-download-phone]"),
            Pose::new().x(-50.0).opacity(0.0),
            0.8,
            Ease::Power3Out,
            At::End,
        )
        .from(
            Target::all("[data-download-content]"),
            Pose::new().x(50.0).opacity(0.0),
            0.8,
            Ease::Power3Out,
            At::Overlap(0.6),
        )
        .into_cues(Trigger::scroll(Target::Scope, TriggerStart::top(70.0)));

    let mut scene = Scene::new();
    scene.extend(cues);
    scene
}

#[component]
pub fn Download() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let config = use_site_config();
    use_scene(section_ref, scene);

    let steps = DOWNLOAD_STEPS
        .iter()
        .enumerate()
        .map(|(i, step)| {
            view! {
                <div class="download-step">
                    <span class="step-num">{i + 1}</span>
                    <p><Fragments text=*step /></p>
                </div>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section_ref id="download" class="download-section">
            <div class="container">
                <div class="download-wrapper">
                    <div class="download-image-side" data-download-phone="">
                        <div class="blob"></div>
                        <img
                            src=config.asset("/images/android-phone.webp")
                            alt="BunkMate app on Android"
                            class="download-phone-img"
                        />
                    </div>

                    <div class="download-content-side" data-download-content="">
                        <h2 class="download-title">"Get BunkMate for Android"</h2>
                        <div class="instructions">{steps}</div>

                        <a
                            href=config.apk_url.clone()
                            class="download-btn-wrapper"
                            target="_blank"
                            rel="noopener noreferrer"
                        >
                            <img
                                src=config.asset("/images/down-apk.webp")
                                alt="Download APK"
                                class="download-btn-img"
                            />
                        </a>

                        <p class="version-info">{DOWNLOAD_VERSION_INFO}</p>
                    </div>
                </div>
            </div>
        </section>
    }
}
