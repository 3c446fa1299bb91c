//! Opening section: the question, the sleepy student, and the phone.

use leptos::html;
use leptos::prelude::*;

use crate::core::layout::is_narrow;
use crate::core::motion::{At, Ease, Pose, Scene, Target, Timeline, Trigger};
use crate::ui::motion::use_scene;
use crate::ui::viewport::use_viewport_width;

const CLOUD: &str = "[data-hero-cloud]";
const CLOUD_COUNT: usize = 4;

/// Intro timeline played once on mount.
///
/// On narrow screens the arrow swings a quarter viewport to the left so it
/// still points at the phone stacked under the text.
pub fn scene(narrow: bool) -> Scene {
    let hidden = || Pose::new().opacity(0.0).y(30.0);
    let shown = Pose::shown;
    let arrow_x = if narrow { -25.0 } else { 0.0 };

    let cues = Timeline::new(Ease::Power3Out)
        .add(Target::all("[data-hero-title]"), hidden(), shown(), 0.7, At::End)
        .add(
            Target::all("[data-hero-illustration]"),
            hidden(),
            shown(),
            0.7,
            At::Overlap(0.35),
        )
        .add(
            Target::all("[data-hero-arrow]"),
            hidden().x_vw(0.0),
            Pose::new().opacity(0.85).y(0.0).x_vw(arrow_x),
            0.5,
            At::Overlap(0.25),
        )
        .add(Target::all("[data-hero-phone]"), hidden(), shown(), 0.7, At::Overlap(0.3))
        .add_eased(
            Target::all("[data-hero-danger]"),
            hidden(),
            shown().scale(1.0),
            0.4,
            Ease::back(1.7),
            At::Overlap(0.2),
        )
        .add(Target::all("[data-hero-desc]"), hidden(), shown(), 0.5, At::Overlap(0.2))
        .add(Target::all("[data-hero-buttons]"), hidden(), shown(), 0.5, At::Overlap(0.2))
        .stagger(
            Target::each(CLOUD, CLOUD_COUNT),
            Pose::new().opacity(0.0).scale(0.5),
            Pose::new().opacity(1.0).scale(1.0),
            0.8,
            0.1,
            Ease::elastic(1.0, 0.5),
            At::Overlap(0.6),
        )
        .into_cues(Trigger::Mount);

    let mut scene = Scene::new();
    scene.extend(cues);
    scene
}

#[component]
pub fn Hero() -> impl IntoView {
    let hero_ref = NodeRef::<html::Section>::new();
    let width = use_viewport_width();
    let narrow = Memo::new(move |_| is_narrow(width.get()));

    use_scene(hero_ref, move || scene(narrow.get()));

    let clouds = (1..=CLOUD_COUNT)
        .map(|n| {
            view! {
                <img
                    src=format!("/images/cloud-{n}.png")
                    alt=""
                    class=format!("hero-cloud hero-cloud-{n}")
                    data-hero-cloud=""
                />
            }
        })
        .collect_view();

    view! {
        <section node_ref=hero_ref id="hero" class="hero">
            <div class="hero-clouds">{clouds}</div>

            <div class="hero-content">
                <div class="hero-inner">
                    <div class="hero-left">
                        <h1 class="hero-title" data-hero-title="">"Can I bunk today?"</h1>

                        <div class="hero-illustration" data-hero-illustration="">
                            <img
                                src="/images/sleeping-guy.png"
                                alt="Student sleeping on desk with alarm clock and question marks"
                                class="sleeping-guy"
                            />
                        </div>

                        <p class="hero-description" data-hero-desc="">
                            "BunkMate tells you when\nyou can skip class\nwithout risking attendance."
                        </p>

                        <div class="hero-buttons" data-hero-buttons="">
                            <a href="#download" class="btn-download">
                                <img
                                    src="/images/drawn-download-btn.png"
                                    alt="Download App"
                                    class="btn-download-img"
                                />
                            </a>
                        </div>
                    </div>

                    <div class="arrow-container" data-hero-arrow="">
                        <img src="/images/arrow.png" alt="" class="arrow-img" />
                    </div>

                    <div class="hero-right">
                        <div class="phone-container" data-hero-phone="">
                            <img
                                src="/images/phone-img.png"
                                alt="BunkMate app showing 75% attendance - Safe to bunk!"
                                class="phone-img"
                            />
                            <img
                                src="/images/danger-zone.png"
                                alt="Danger Zone!"
                                class="danger-badge"
                                data-hero-danger=""
                            />
                        </div>
                    </div>
                </div>
            </div>
        </section>
    }
}
