//! Matcher chains - per-field probe lists, ordered most-specific first
//!
//! A probe is one way to locate a field in the page. A chain is an
//! ordered slice of probes; [`first_hit`] tries them in order and the
//! first non-empty text wins. The chains are plain data, so a layout
//! change on the source site is an edit to a slice here, not to control
//! flow - and each probe is testable against a synthetic snapshot.

use crate::page::ProfilePage;

/// One way to locate a field's text in a page snapshot
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Probe {
    /// Elements of `tag` (or any text-bearing tag) whose class
    /// attribute carries every fragment in `classes`
    Classes {
        /// Tag name to scan, or None for any text-bearing tag
        tag: Option<&'static str>,
        /// Fragments the class attribute must carry, all of them
        classes: &'static [&'static str],
    },

    /// Same match, but only inside containers whose class attribute
    /// carries the `within` fragment
    Within {
        /// Class fragment identifying the container
        within: &'static str,
        /// Tag name to scan inside the container, or None for any
        tag: Option<&'static str>,
        /// Fragments the descendant's class attribute must carry
        classes: &'static [&'static str],
    },
}

impl Probe {
    /// All non-empty texts this probe finds, in scan order
    pub fn matches(&self, page: &ProfilePage) -> Vec<String> {
        match *self {
            Probe::Classes { tag, classes } => page.class_texts(tag, classes),
            Probe::Within {
                within,
                tag,
                classes,
            } => page.nested_texts(within, tag, classes),
        }
    }
}

/// First non-empty text across the chain, probes tried in order
pub(crate) fn first_hit(page: &ProfilePage, chain: &[Probe]) -> Option<String> {
    chain
        .iter()
        .find_map(|probe| probe.matches(page).into_iter().next())
}

/// Like [`first_hit`], but a candidate must also pass `accept`
pub(crate) fn first_hit_where(
    page: &ProfilePage,
    chain: &[Probe],
    accept: impl Fn(&str) -> bool,
) -> Option<String> {
    chain
        .iter()
        .find_map(|probe| probe.matches(page).into_iter().find(|t| accept(t)))
}

/// One way to locate the avatar image
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ImageProbe {
    /// First image whose own class carries the fragment
    SrcByClass(&'static str),
    /// First image inside a container whose class carries the fragment
    SrcWithin(&'static str),
    /// First image inside a button whose aria-label contains the text
    SrcInLabeledButton(&'static str),
}

impl ImageProbe {
    /// The image src this probe finds, if any
    pub fn find(&self, page: &ProfilePage) -> Option<String> {
        match *self {
            ImageProbe::SrcByClass(class) => page.image_src_by_class(class),
            ImageProbe::SrcWithin(class) => page.image_src_within(class),
            ImageProbe::SrcInLabeledButton(label) => page.image_src_in_labeled_button(label),
        }
    }
}

/// Name: profile headline h1, then progressively looser containers
pub(crate) const NAME_CHAIN: &[Probe] = &[
    Probe::Classes {
        tag: Some("h1"),
        classes: &["text-heading-xlarge"],
    },
    Probe::Classes {
        tag: Some("h1"),
        classes: &["inline"],
    },
    Probe::Within {
        within: "pv-text-details__left-panel",
        tag: Some("h1"),
        classes: &[],
    },
    Probe::Within {
        within: "ph5",
        tag: Some("h1"),
        classes: &[],
    },
];

/// Title / headline
pub(crate) const TITLE_CHAIN: &[Probe] = &[
    Probe::Classes {
        tag: None,
        classes: &["text-body-medium", "break-words"],
    },
    Probe::Within {
        within: "pv-text-details__left-panel",
        tag: None,
        classes: &["text-body-medium"],
    },
    Probe::Classes {
        tag: Some("div"),
        classes: &["headline"],
    },
    Probe::Within {
        within: "ph5",
        tag: None,
        classes: &["text-body-medium"],
    },
];

/// Location candidates; the extractor additionally requires a comma or
/// "Area" in the text before accepting one
pub(crate) const LOCATION_CHAIN: &[Probe] = &[
    Probe::Within {
        within: "pv-text-details__left-panel",
        tag: None,
        classes: &["text-body-small"],
    },
    Probe::Classes {
        tag: Some("span"),
        classes: &["location"],
    },
    Probe::Within {
        within: "ph5",
        tag: None,
        classes: &["text-body-small", "inline"],
    },
];

/// Connection degree badge
pub(crate) const DEGREE_CHAIN: &[Probe] = &[
    Probe::Classes {
        tag: None,
        classes: &["dist-value"],
    },
    Probe::Classes {
        tag: Some("span"),
        classes: &["distance-badge"],
    },
    Probe::Classes {
        tag: Some("span"),
        classes: &["dist-value"],
    },
];

/// Avatar image locations, most reliable first
pub(crate) const IMAGE_CHAIN: &[ImageProbe] = &[
    ImageProbe::SrcByClass("pv-top-card-profile-picture"),
    ImageProbe::SrcByClass("profile-photo-edit__preview"),
    ImageProbe::SrcWithin("pv-top-card--photo"),
    ImageProbe::SrcInLabeledButton("View"),
    ImageProbe::SrcWithin("pv-top-card__photo"),
];
