//! Feature cards. Each card has its own entrance, plus a shared set of
//! reveals for the number, title, accent rule and highlights.

use leptos::html;
use leptos::prelude::*;

use crate::core::content::{FEATURES, FEATURES_TAGLINE, FeatureItem, Highlight};
use crate::core::motion::{Cue, Ease, Pose, Scene, Target, TriggerStart};
use crate::ui::motion::use_scene;
use crate::ui::rich_text::Fragments;
use crate::ui::wavy_divider::{DIVIDER, WavyDivider};

const HEADER: &str = "[data-features-header]";
const CARD: &str = "[data-card]";
const IMG: &str = "[data-img]";
const TEXT: &str = "[data-text]";
const TAGLINE: &str = "[data-features-tagline]";

const CARD_START: TriggerStart = TriggerStart::top(82.0);

pub const TITLE: &str = "What BunkMate actually does";
pub const SUBTITLE: &str = "No boxes. No tiles. Just features, explained the way a human would.";

/// The card-specific part of a feature's entrance
fn card_entrance(feature: &FeatureItem) -> Vec<Cue> {
    let card = Target::nth(CARD, feature.index);
    let img = card.clone().find(IMG);
    let texts = feature.paragraphs.len();
    let on_card = |cue: Cue| cue.when(card.clone(), CARD_START);

    match feature.index {
        // unfold from a point on the left edge, image irises open
        0 => vec![
            on_card(Cue::tween(
                card.clone(),
                Pose::new()
                    .opacity(0.0)
                    .scale(0.4)
                    .rotate_y(-40.0)
                    .perspective(1200.0)
                    .origin("left center"),
                Pose::new().opacity(1.0).scale(1.0).rotate_y(0.0),
                1.2,
                Ease::ExpoOut,
            )),
            on_card(
                Cue::tween(
                    img,
                    Pose::new().clip_circle(0.0),
                    Pose::new().clip_circle(75.0),
                    1.4,
                    Ease::Power3Out,
                )
                .delay(0.2),
            ),
        ],
        // image swings in from the left, text from the right
        1 => {
            let mut cues = vec![on_card(Cue::tween(
                img,
                Pose::new().opacity(0.0).x(-140.0).rotate(-15.0),
                Pose::shown().rotate(0.0),
                1.0,
                Ease::back(1.4),
            ))];
            cues.extend((0..texts).map(|ti| {
                on_card(
                    Cue::tween(
                        card.clone().find_nth(TEXT, ti),
                        Pose::new()
                            .opacity(0.0)
                            .x(100.0 + ti as f64 * 30.0)
                            .skew_x(8.0),
                        Pose::shown().skew_x(0.0),
                        0.8,
                        Ease::Power3Out,
                    )
                    .delay(ti as f64 * 0.15),
                )
            }));
            cues
        }
        // image spins in around its corner, text focuses up from below
        2 => {
            let mut cues = vec![on_card(Cue::tween(
                img,
                Pose::new()
                    .opacity(0.0)
                    .rotate(-90.0)
                    .scale(0.6)
                    .origin("top right"),
                Pose::new().opacity(1.0).rotate(0.0).scale(1.0),
                1.3,
                Ease::elastic(1.0, 0.6),
            ))];
            cues.extend((0..texts).map(|ti| {
                on_card(
                    Cue::tween(
                        card.clone().find_nth(TEXT, ti),
                        Pose::new().opacity(0.0).y(50.0).blur(6.0),
                        Pose::shown().blur(0.0),
                        0.7,
                        Ease::Power2Out,
                    )
                    .delay(0.3 + ti as f64 * 0.2),
                )
            }));
            cues
        }
        // card flips down from the top edge, image pops after
        3 => vec![
            on_card(Cue::tween(
                card.clone(),
                Pose::new()
                    .opacity(0.0)
                    .rotate_x(-60.0)
                    .y(-80.0)
                    .perspective(900.0)
                    .origin("top center"),
                Pose::shown().rotate_x(0.0),
                1.1,
                Ease::Power4Out,
            )),
            on_card(
                Cue::tween(
                    img,
                    Pose::new().scale(0.7).y(30.0),
                    Pose::new().scale(1.0).y(0.0),
                    0.9,
                    Ease::back(2.0),
                )
                .delay(0.4),
            ),
        ],
        // card zooms down out of a blur, image settles with a slight tilt
        _ => vec![
            on_card(Cue::tween(
                card.clone(),
                Pose::new().opacity(0.0).scale(2.5).blur(12.0),
                Pose::new().opacity(1.0).scale(1.0).blur(0.0),
                0.8,
                Ease::Power4Out,
            )),
            on_card(
                Cue::tween(
                    img,
                    Pose::new().rotate(15.0).y(40.0),
                    Pose::new().rotate(-2.0).y(0.0),
                    1.0,
                    Ease::elastic(1.2, 0.5),
                )
                .delay(0.3),
            ),
        ],
    }
}

/// Reveals every card shares
fn card_details(index: usize) -> Vec<Cue> {
    let card = Target::nth(CARD, index);
    let on_card = |cue: Cue| cue.when(card.clone(), CARD_START);

    vec![
        on_card(Cue::tween(
            card.clone().find("[data-num]"),
            Pose::new().opacity(0.0).y(40.0),
            Pose::shown(),
            0.6,
            Ease::Power2Out,
        )),
        on_card(
            Cue::tween(
                card.clone().find("[data-title]"),
                Pose::new().opacity(0.0).x(-30.0),
                Pose::shown(),
                0.7,
                Ease::Power3Out,
            )
            .delay(0.1),
        ),
        on_card(
            Cue::tween(
                card.clone().find("[data-accent]"),
                Pose::new().width(0.0),
                Pose::new().width(60.0),
                0.8,
                Ease::Power4Out,
            )
            .delay(0.5),
        ),
        on_card(
            Cue::tween(
                card.clone().find(Highlight::SELECTOR),
                Pose::new().sweep(0.0),
                Pose::new().sweep(100.0),
                0.6,
                Ease::Power2Out,
            )
            .delay(0.7),
        ),
    ]
}

pub fn scene() -> Scene {
    let mut scene = Scene::new();

    scene.push(
        Cue::tween(
            Target::all(HEADER),
            Pose::new().opacity(0.0).y(50.0),
            Pose::shown(),
            0.8,
            Ease::Power3Out,
        )
        .when_visible(TriggerStart::top(90.0)),
    );

    for feature in &FEATURES {
        scene.extend(card_entrance(feature));
        scene.extend(card_details(feature.index));
    }

    for i in 0..FEATURES.len() - 1 {
        scene.push(
            Cue::tween(
                Target::nth(DIVIDER, i).find("path"),
                Pose::new().dash_offset(1.0),
                Pose::new().dash_offset(0.0),
                1.4,
                Ease::Power2InOut,
            )
            .when(Target::nth(DIVIDER, i), TriggerStart::top(88.0)),
        );
    }

    scene.push(
        Cue::tween(
            Target::all(TAGLINE),
            Pose::new().opacity(0.0).scale(0.8).y(30.0),
            Pose::shown().scale(1.0),
            0.9,
            Ease::back(1.7),
        )
        .when_visible(TriggerStart::top(90.0)),
    );

    scene
}

#[component]
fn FeatureCard(feature: FeatureItem) -> impl IntoView {
    let paragraphs = feature
        .paragraphs
        .iter()
        .map(|para| view! { <p class="feature-desc" data-text=""><Fragments text=*para /></p> })
        .collect_view();

    view! {
        <div class="card" class:card-reverse=feature.is_reversed() data-card=feature.index.to_string()>
            <div class="text-side">
                <div class="feature-number" data-num="">{feature.number}</div>
                <h3 class="feature-title" data-title="">
                    {feature.title}
                    <span class="title-accent" data-accent=""></span>
                </h3>
                {paragraphs}
            </div>
            <div class="image-side">
                <div class="image-bg"></div>
                <img src=feature.image alt=feature.alt class="feature-image" data-img="" />
            </div>
        </div>
    }
}

#[component]
pub fn Features() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    use_scene(section_ref, scene);

    let cards = FEATURES
        .iter()
        .map(|feature| {
            let last = feature.index == FEATURES.len() - 1;
            view! {
                <div class="card-slot">
                    <FeatureCard feature=*feature />
                    {(!last).then(|| view! { <WavyDivider /> })}
                </div>
            }
        })
        .collect_view();

    view! {
        <section node_ref=section_ref id="features" class="features">
            <img src="/images/cloud-1.png" alt="" class="cloud-deco features-cloud-1" />
            <img src="/images/cloud-2.png" alt="" class="cloud-deco features-cloud-2" />

            <div class="section-header" data-features-header="">
                <h2 class="section-title">
                    <img src="/images/alarm.png" alt="" class="section-title-icon" />
                    {TITLE}
                </h2>
                <p class="section-subtitle">{SUBTITLE}</p>
            </div>

            <div class="cards-container">{cards}</div>

            <div class="bottom-tagline" data-features-tagline="">
                <p class="tagline-text"><Fragments text=FEATURES_TAGLINE /></p>
            </div>
        </section>
    }
}
