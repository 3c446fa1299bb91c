//! Static copy and image metadata for every page section.
//!
//! Everything here is fixed at build time and rendered in declaration order.

use derive_more::Display;

/// Marker tone for highlighted words. Displays as the CSS class that paints it.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Display)]
pub enum Highlight {
    #[display("highlight")]
    Yellow,
    #[display("highlight-green")]
    Green,
    #[display("highlight-red")]
    Red,
}

impl Highlight {
    /// Selector matching every highlight tone, used by the sweep animations
    pub const SELECTOR: &'static str = ".highlight, .highlight-green, .highlight-red";
}

/// One piece of a rich-text paragraph.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fragment {
    Text(&'static str),
    Strong(&'static str),
    Em(&'static str),
    Mark(Highlight, &'static str),
    Break,
}

pub type RichText = &'static [Fragment];

use Fragment::{Break, Em, Mark, Strong, Text};
use Highlight::{Green, Red, Yellow};

// ============================================================================
// Navigation
// ============================================================================

/// In-page navigation entry
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    pub label: &'static str,
    pub anchor: &'static str,
}

impl NavItem {
    pub const fn new(label: &'static str, anchor: &'static str) -> Self {
        Self { label, anchor }
    }

    /// The `href` pointing at this item's section
    pub fn href(&self) -> String {
        format!("#{}", self.anchor)
    }

    /// Whether this item is rendered as the call-to-action button
    pub fn is_cta(&self) -> bool {
        self.anchor == "download"
    }
}

pub const NAV_ITEMS: [NavItem; 5] = [
    NavItem::new("Home", "hero"),
    NavItem::new("About", "about"),
    NavItem::new("Features", "features"),
    NavItem::new("Contribute", "contribute"),
    NavItem::new("Download", "download"),
];

// ============================================================================
// Features
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct FeatureItem {
    pub index: usize,
    pub number: &'static str,
    pub title: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub paragraphs: &'static [RichText],
}

impl FeatureItem {
    /// Odd cards mirror the layout (image on the left)
    pub fn is_reversed(&self) -> bool {
        self.index % 2 != 0
    }
}

pub const FEATURES: [FeatureItem; 5] = [
    FeatureItem {
        index: 0,
        number: "01",
        title: "Better Attendance UI",
        image: "/images/better-ui.png",
        alt: "BunkMate clean attendance interface showing 82% overall percentage",
        paragraphs: &[
            &[
                Text("Most attendance apps feel like spreadsheets pretending to be software. "),
                Strong("BunkMate doesn't."),
            ],
            &[
                Text("You get a clean, intuitive interface that makes checking your attendance feel "),
                Mark(Yellow, "effortless"),
                Text(" — not like work."),
            ],
        ],
    },
    FeatureItem {
        index: 1,
        number: "02",
        title: "Daily Course Attendance",
        image: "/images/daily-course-attendance.png",
        alt: "Calendar view showing per-day attendance history per course",
        paragraphs: &[
            &[Text("Attendance isn't just a number. "), Mark(Yellow, "It's a history.")],
            &[
                Text("BunkMate lets you view attendance per course, per day — so you always know "),
                Mark(Green, "what happened when"),
                Text("."),
            ],
        ],
    },
    FeatureItem {
        index: 2,
        number: "03",
        title: "Hourly Tracking",
        image: "/images/hourly-tracking.png",
        alt: "Phone showing exact hours 9 AM, 10 AM, 11 AM, 1 PM attendance",
        paragraphs: &[
            &[
                Text("Ever wondered "),
                Mark(Yellow, "\"which hour\""),
                Text(" your attendance was marked? Now you don't have to."),
            ],
            &[
                Text("BunkMate shows the "),
                Mark(Yellow, "exact hours"),
                Text(" attendance was recorded, giving you "),
                Mark(Green, "complete transparency"),
                Text("."),
            ],
        ],
    },
    FeatureItem {
        index: 3,
        number: "04",
        title: "Manual Marking & Conflict Resolution",
        image: "/images/manual-marking.png",
        alt: "Side-by-side YOURS vs OFFICIAL attendance clipboards",
        paragraphs: &[
            &[
                Text("Let's be real — teachers don't always update attendance on time. So BunkMate lets you mark attendance "),
                Mark(Yellow, "temporarily"),
                Text("."),
            ],
            &[
                Text("When official records arrive, any mismatch is "),
                Mark(Red, "flagged clearly"),
                Text(" so you can resolve it without stress."),
            ],
        ],
    },
    FeatureItem {
        index: 4,
        number: "05",
        title: "Smart Conflict Detection",
        image: "/images/conflict.png",
        alt: "Conflicting records between your marked and official attendance",
        paragraphs: &[
            &[Text("This is the "), Mark(Yellow, "safety net"), Text(" of BunkMate.")],
            &[
                Text("It compares your manual marks with official records and highlights every "),
                Mark(Red, "conflicting entry"),
                Text(" — so nothing slips through the cracks."),
            ],
        ],
    },
];

pub const FEATURES_TAGLINE: RichText = &[
    Text("BunkMate isn't about skipping more classes."),
    Break,
    Strong("It's about skipping smarter."),
];

// ============================================================================
// About
// ============================================================================

pub const ABOUT_INTRO_LINES: [&str; 4] = [
    "It started the same way it starts for every student.",
    "A college attendance portal.",
    "Outdated. Confusing.",
    "Updating once in a blue moon.",
];

/// Words revealed one by one in the "So I did." line. A break precedes the last word.
pub const ABOUT_SO_I_DID_WORDS: [Fragment; 9] = [
    Text("So"),
    Text("I"),
    Text("did."),
    Text("That"),
    Text("idea"),
    Text("became"),
    Strong("BunkMate"),
    Text("—"),
    Em("an app made by a hooman, for hoomans."),
];

pub const ABOUT_WHY_LINES: [RichText; 3] = [
    &[
        Text("Most college systems don't care about "),
        Mark(Yellow, "when"),
        Text(" attendance is updated."),
    ],
    &[Text("They don't care about panic at "), Mark(Red, "74.9%"), Text(".")],
    &[
        Text("They definitely don't care about mental math at "),
        Mark(Yellow, "2 AM"),
        Text("."),
    ],
];

pub const ABOUT_CHECKLIST: [RichText; 3] = [
    &[Text("track attendance in "), Mark(Yellow, "real time")],
    &[
        Text("know exactly how many classes you can "),
        Mark(Yellow, "safely bunk"),
    ],
    &[
        Text("calculate how many you need to "),
        Mark(Yellow, "attend to recover"),
    ],
];

pub const ABOUT_HONEST_LINES: [RichText; 2] = [
    &[Text("Teachers don't always update attendance regularly.")],
    &[
        Text("So BunkMate lets you mark attendance "),
        Mark(Yellow, "temporarily"),
        Text(" — and "),
        Mark(Yellow, "resolve"),
        Text(" conflicts cleanly once official data comes in."),
    ],
];

pub const ABOUT_REALITY_LINE: RichText = &[
    Text("Because students deserve tools that understand "),
    Strong("reality."),
];

/// Asset paths (relative to the asset host) used by the About section
pub mod about_images {
    pub const CLOUDS: [&str; 3] = [
        "/images/cloud-1.webp",
        "/images/cloud-2.webp",
        "/images/cloud-3.webp",
    ];
    pub const INTRO: &str = "/images/sys-why-no-me.webp";
    pub const ALARM: &str = "/images/alarm.webp";
    pub const PHONE: &str = "/images/phone-img.webp";
    pub const TAGLINE: &str = "/images/tagline-story.webp";
}

// ============================================================================
// Download
// ============================================================================

pub const DOWNLOAD_STEPS: [RichText; 4] = [
    &[Text("Click the "), Strong("Download APK"), Text(" button below")],
    &[Text("Open the file & tap "), Strong("Install")],
    &[Text("Allow "), Em("\"Unknown Sources\""), Text(" if asked")],
    &[Text("You're ready to "), Strong("Bunk!")],
];

pub const DOWNLOAD_VERSION_INFO: &str = "Version 2.0.1 • 95 MB • Android 8.0+";

// ============================================================================
// Contribute
// ============================================================================

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ContributeStep {
    pub icon: &'static str,
    pub title: &'static str,
    pub lines: &'static [&'static str],
}

pub const CONTRIBUTE_TITLE: RichText = &[
    Text("Built by a student."),
    Break,
    Text("Open to students."),
];

pub const CONTRIBUTE_SUBTITLE: RichText = &[
    Text("BunkMate is open source."),
    Break,
    Text("If it helped you, help it grow."),
];

pub const CONTRIBUTE_TAGLINE: &str = "Stars don't cost attendance percentage.";

pub const CONTRIBUTE_STEPS: [ContributeStep; 3] = [
    ContributeStep {
        icon: "/images/star-1.webp",
        title: "Star the Repository",
        lines: &[
            "If BunkMate saved your attendance once,",
            "a star helps it reach more students.",
        ],
    },
    ContributeStep {
        icon: "/images/fork.webp",
        title: "Fork & Build",
        lines: &[
            "Want your own version?",
            "Experiment. Improve.",
            "Break things responsibly.",
        ],
    },
    ContributeStep {
        icon: "/images/wrench.webp",
        title: "Contribute",
        lines: &["Fix bugs. Improve UI.", "Make the bunking math even smarter."],
    },
];

#[cfg(test)]
pub(crate) fn highlight_count(text: RichText) -> usize {
    text.iter()
        .filter(|fragment| matches!(fragment, Fragment::Mark(..)))
        .count()
}
