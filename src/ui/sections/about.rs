//! The story section. Every block has its own reveal, all of them reversible
//! when the reader scrolls back up.

use leptos::html;
use leptos::prelude::*;

use crate::core::config::use_site_config;
use crate::core::content::{
    ABOUT_CHECKLIST, ABOUT_HONEST_LINES, ABOUT_INTRO_LINES, ABOUT_REALITY_LINE,
    ABOUT_SO_I_DID_WORDS, ABOUT_WHY_LINES, Highlight, about_images,
};
use crate::core::motion::{
    At, Cue, Ease, Pose, Scene, Target, Timeline, Trigger, TriggerStart,
};
use crate::ui::motion::use_scene;
use crate::ui::rich_text::{Fragments, fragment_view};
use crate::ui::wavy_divider::{DIVIDER, WavyDivider};

const TITLE: &str = "[data-about-title]";
const INTRO_TEXT: &str = "[data-intro-text]";
const INTRO_LINE: &str = "[data-line]";
const INTRO_IMAGE: &str = "[data-intro-image]";
const SO_I_DID: &str = "[data-so-i-did]";
const WORD: &str = "[data-word]";
const WHY_TITLE: &str = "[data-why-title]";
const WHY_LINES: &str = "[data-why-lines]";
const WHY_LINE: &str = "[data-why-line]";
const DOES_TITLE: &str = "[data-does-title]";
const CHECK_LIST: &str = "[data-check-list]";
const CHECK_ITEM: &str = "[data-check-item]";
const PHONE: &str = "[data-about-phone]";
const HONEST_TITLE: &str = "[data-honest-title]";
const HONEST_TEXT: &str = "[data-honest-text]";
const HONEST_LINE: &str = "[data-h-line]";
const REALITY: &str = "[data-reality]";
const TAGLINE: &str = "[data-about-tagline]";

const DIVIDER_COUNT: usize = 3;

/// Keyframes (declared in the style sheet) that make the alarm icon ring
pub const ALARM_RING: &str = "alarm-ring";

fn highlight_sweep() -> (Pose, Pose) {
    (Pose::new().sweep(0.0), Pose::new().sweep(100.0))
}

/// Alternate sides for consecutive lines: even lines come from the left.
fn side(i: usize) -> f64 {
    if i % 2 == 0 { -1.0 } else { 1.0 }
}

pub fn scene() -> Scene {
    let mut scene = Scene::new();
    let top = TriggerStart::top;

    // title flips up on its bottom edge, then the underline draws
    scene.push(
        Cue::tween(
            Target::all(TITLE),
            Pose::new()
                .opacity(0.0)
                .rotate_x(90.0)
                .y(-60.0)
                .perspective(800.0)
                .origin("center bottom"),
            Pose::shown().rotate_x(0.0),
            1.2,
            Ease::elastic(1.0, 0.4),
        )
        .when_visible(top(88.0)),
    );
    scene.push(
        Cue::tween(
            Target::all(TITLE).find(".title-underline"),
            Pose::new().scale_x(0.0),
            Pose::new().scale_x(1.0),
            0.8,
            Ease::Power4Out,
        )
        .delay(0.6)
        .when(Target::all(TITLE), top(88.0)),
    );

    // intro lines slide in from alternating sides, out of focus
    for i in 0..ABOUT_INTRO_LINES.len() {
        let dir = side(i);
        scene.push(
            Cue::tween(
                Target::nth(INTRO_LINE, i),
                Pose::new()
                    .opacity(0.0)
                    .x(dir * 80.0)
                    .blur(8.0)
                    .rotate(dir * 4.0),
                Pose::shown().blur(0.0).rotate(0.0),
                0.9,
                Ease::Power3Out,
            )
            .delay(i as f64 * 0.15)
            .when(Target::all(INTRO_TEXT), top(82.0)),
        );
    }

    scene.push(
        Cue::tween(
            Target::all(INTRO_IMAGE),
            Pose::new().opacity(0.0).scale(0.3).rotate(-12.0).y(60.0),
            Pose::shown().scale(1.0).rotate(0.0),
            1.2,
            Ease::elastic(1.0, 0.5),
        )
        .when_visible(top(85.0)),
    );

    // "So I did." pops in word by word
    let words = (0..ABOUT_SO_I_DID_WORDS.len()).fold(Timeline::new(Ease::back(2.0)), |tl, i| {
        tl.add(
            Target::nth(WORD, i),
            Pose::new().opacity(0.0).y(20.0).scale(0.8),
            Pose::shown().scale(1.0),
            0.4,
            At::Time(i as f64 * 0.12),
        )
    });
    scene.extend(words.into_cues(Trigger::scroll(Target::all(SO_I_DID), top(82.0))));

    for i in 0..DIVIDER_COUNT {
        scene.push(
            Cue::tween(
                Target::nth(DIVIDER, i).find("path"),
                Pose::new().dash_offset(1.0),
                Pose::new().dash_offset(0.0),
                1.4,
                Ease::Power2InOut,
            )
            .when(Target::nth(DIVIDER, i), top(88.0)),
        );
    }

    // why: icon spins in, label skews in behind it
    scene.push(
        Cue::tween(
            Target::all(WHY_TITLE).find("img"),
            Pose::new().opacity(0.0).scale(0.0).rotate(-180.0),
            Pose::new().opacity(1.0).scale(1.0).rotate(0.0),
            0.9,
            Ease::elastic(1.2, 0.4),
        )
        .when(Target::all(WHY_TITLE), top(85.0)),
    );
    scene.push(
        Cue::tween(
            Target::all(WHY_TITLE).find("span"),
            Pose::new().opacity(0.0).x(-60.0).skew_x(-10.0),
            Pose::shown().skew_x(0.0),
            0.8,
            Ease::Power3Out,
        )
        .delay(0.3)
        .when(Target::all(WHY_TITLE), top(85.0)),
    );

    for i in 0..ABOUT_WHY_LINES.len() {
        let delay = i as f64 * 0.2;
        scene.push(
            Cue::tween(
                Target::nth(WHY_LINE, i),
                Pose::new().opacity(0.0).x(-50.0).y(20.0).blur(4.0),
                Pose::shown().blur(0.0),
                0.7,
                Ease::Power2Out,
            )
            .delay(delay)
            .when(Target::all(WHY_LINES), top(82.0)),
        );
        let (from, to) = highlight_sweep();
        scene.push(
            Cue::tween(
                Target::nth(WHY_LINE, i).find(Highlight::SELECTOR),
                from,
                to,
                0.6,
                Ease::Power2Out,
            )
            .delay(delay + 0.5)
            .when(Target::all(WHY_LINES), top(82.0)),
        );
    }

    scene.push(
        Cue::tween(
            Target::all(DOES_TITLE),
            Pose::new().opacity(0.0).y(60.0).scale(0.7),
            Pose::shown().scale(1.0),
            0.9,
            Ease::back(1.7),
        )
        .when_visible(top(85.0)),
    );

    for i in 0..ABOUT_CHECKLIST.len() {
        let delay = i as f64 * 0.25;
        let item = Target::nth(CHECK_ITEM, i);
        scene.push(
            Cue::tween(
                item.clone(),
                Pose::new().opacity(0.0).x(-40.0).y(15.0),
                Pose::shown(),
                0.6,
                Ease::Power3Out,
            )
            .delay(delay)
            .when(Target::all(CHECK_LIST), top(80.0)),
        );
        scene.push(
            Cue::tween(
                item.clone().find(".check-mark"),
                Pose::new().scale(0.0).rotate(-90.0),
                Pose::new().scale(1.0).rotate(0.0),
                0.5,
                Ease::elastic(1.5, 0.5),
            )
            .delay(delay + 0.3)
            .when(Target::all(CHECK_LIST), top(80.0)),
        );
        let (from, to) = highlight_sweep();
        scene.push(
            Cue::tween(item.find(Highlight::SELECTOR), from, to, 0.5, Ease::Power2Out)
                .delay(delay + 0.5)
                .when(Target::all(CHECK_LIST), top(80.0)),
        );
    }

    // phone swings in from the right with some depth
    scene.push(
        Cue::tween(
            Target::all(PHONE),
            Pose::new()
                .opacity(0.0)
                .x(120.0)
                .rotate_y(-25.0)
                .perspective(600.0),
            Pose::shown().rotate_y(0.0),
            1.1,
            Ease::Power3Out,
        )
        .when_visible(top(85.0)),
    );

    // honest part: alarm shakes in, then keeps ringing while on screen
    let alarm = Target::all(HONEST_TITLE).find("img");
    scene.push(
        Cue::tween(
            alarm.clone(),
            Pose::new().opacity(0.0).scale(0.0).rotate(30.0),
            Pose::new().opacity(1.0).scale(1.0).rotate(0.0),
            0.8,
            Ease::elastic(1.2, 0.35),
        )
        .when(Target::all(HONEST_TITLE), top(85.0)),
    );
    scene.push(
        Cue::looped(alarm, ALARM_RING, 0.15, Ease::Power1InOut)
            .delay(1.0)
            .when(Target::all(HONEST_TITLE), top(85.0)),
    );
    scene.push(
        Cue::tween(
            Target::all(HONEST_TITLE).find("span"),
            Pose::new().opacity(0.0).x(-50.0).skew_x(-8.0),
            Pose::shown().skew_x(0.0),
            0.8,
            Ease::Power3Out,
        )
        .delay(0.25)
        .when(Target::all(HONEST_TITLE), top(85.0)),
    );

    for i in 0..ABOUT_HONEST_LINES.len() {
        scene.push(
            Cue::tween(
                Target::nth(HONEST_LINE, i),
                Pose::new()
                    .opacity(0.0)
                    .y(30.0)
                    .x(side(i) * 30.0)
                    .blur(3.0),
                Pose::shown().blur(0.0),
                0.7,
                Ease::Power2Out,
            )
            .delay(i as f64 * 0.18)
            .when(Target::all(HONEST_TEXT), top(82.0)),
        );
    }

    // reality line stamps down
    scene.push(
        Cue::tween(
            Target::all(REALITY),
            Pose::new().opacity(0.0).scale(2.0).rotate(-8.0),
            Pose::new().opacity(1.0).scale(1.0).rotate(0.0),
            0.6,
            Ease::back(3.0),
        )
        .when_visible(top(85.0)),
    );

    scene.push(
        Cue::tween(
            Target::all(TAGLINE),
            Pose::new().opacity(0.0).scale(0.6).y(60.0).blur(10.0),
            Pose::shown().scale(1.0).blur(0.0),
            1.2,
            Ease::Power4Out,
        )
        .when_visible(top(85.0)),
    );

    scene
}

#[component]
pub fn About() -> impl IntoView {
    let section_ref = NodeRef::<html::Section>::new();
    let config = use_site_config();
    use_scene(section_ref, scene);

    let clouds = about_images::CLOUDS
        .iter()
        .enumerate()
        .map(|(i, path)| {
            view! {
                <img
                    src=config.asset(path)
                    alt=""
                    class=format!("cloud-deco cloud-deco-{}", i + 1)
                />
            }
        })
        .collect_view();

    let intro_lines = ABOUT_INTRO_LINES
        .iter()
        .map(|line| view! { <p class="intro-text" data-line="">{*line}</p> })
        .collect_view();

    let last_word = ABOUT_SO_I_DID_WORDS.len() - 1;
    let words = ABOUT_SO_I_DID_WORDS
        .iter()
        .enumerate()
        .map(|(i, word)| {
            view! {
                {(i == last_word).then(|| view! { <br /> })}
                <span data-word="">{fragment_view(*word)}</span>
                {(i != last_word).then_some(" ")}
            }
        })
        .collect_view();

    let why_lines = ABOUT_WHY_LINES
        .iter()
        .map(|line| view! { <p class="why-text" data-why-line=""><Fragments text=*line /></p> })
        .collect_view();

    let check_items = ABOUT_CHECKLIST
        .iter()
        .map(|item| {
            view! {
                <div class="check-item" data-check-item="">
                    <span class="check-mark">"✔"</span>
                    <span><Fragments text=*item /></span>
                </div>
            }
        })
        .collect_view();

    let honest_lines = ABOUT_HONEST_LINES
        .iter()
        .map(|line| view! { <p class="honest-text" data-h-line=""><Fragments text=*line /></p> })
        .collect_view();

    view! {
        <section node_ref=section_ref id="about" class="about">
            {clouds}

            <div class="about-inner">
                <h2 class="story-title" data-about-title="">
                    "The Story Behind BunkMate"
                    <span class="title-underline"></span>
                </h2>

                <div class="story-block intro-block">
                    <div data-intro-text="">{intro_lines}</div>
                    <div class="intro-image-wrapper" data-intro-image="">
                        <img
                            src=config.asset(about_images::INTRO)
                            alt="\"This system sucks... why not build my own?\""
                            class="intro-image"
                        />
                    </div>
                </div>

                <div class="story-block so-i-did-block" data-so-i-did="">
                    <p class="so-i-did">{words}</p>
                </div>

                <WavyDivider />

                <div class="story-block why-block">
                    <div class="block-title" data-why-title="">
                        <img src=config.asset(about_images::ALARM) alt="" class="block-title-icon" />
                        <span>"Why BunkMate Exists"</span>
                    </div>
                    <div data-why-lines="">{why_lines}</div>
                </div>

                <WavyDivider />

                <div class="story-block does-block">
                    <div class="does-left">
                        <h3 class="does-title" data-does-title="">"BunkMate does."</h3>
                        <div class="check-list" data-check-list="">{check_items}</div>
                    </div>
                    <div class="does-right" data-about-phone="">
                        <img
                            src=config.asset(about_images::PHONE)
                            alt="BunkMate app showing 75% attendance — Safe to bunk!"
                            class="phone-preview"
                        />
                    </div>
                </div>

                <WavyDivider />

                <div class="story-block honest-block">
                    <div class="block-title" data-honest-title="">
                        <img src=config.asset(about_images::ALARM) alt="" class="block-title-icon" />
                        <span>"The Honest Part"</span>
                    </div>
                    <div data-honest-text="">{honest_lines}</div>
                    <p class="reality-line" data-reality="">
                        <Fragments text=ABOUT_REALITY_LINE />
                    </p>
                </div>

                <div class="story-block tagline-block" data-about-tagline="">
                    <img
                        src=config.asset(about_images::TAGLINE)
                        alt="Bunk responsibly. Graduate safely."
                        class="tagline-image"
                    />
                </div>
            </div>
        </section>
    }
}
