//! Pure mapping from a [`ProjectRecord`] to the detail view-model the
//! lightbox mounts.
//!
//! Nothing here touches a terminal or the filesystem. Every ordered field
//! of the record maps to a section in the same order, and empty sequences
//! map to absent sections rather than empty ones.

use serde::Serialize;

use crate::model::project::{MediaItem, ProjectRecord};

/// Text a host shows in place of an image whose asset does not resolve
pub const IMAGE_PLACEHOLDER: &str = "Visual loading\u{2026}";

/// Label of the call-to-action at the bottom of every detail view
pub const CALL_TO_ACTION: &str = "Need something like this?";

/// Notice shown when a video card without a link is activated
pub const COMING_SOON: &str = "Coming soon";

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DetailView {
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tags: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<Vec<StatView>>,
    /// Problem, solution and result, in that order, for those present
    #[serde(skip_serializing_if = "Option::is_none")]
    pub narrative: Option<Vec<NarrativeBlock>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub tech_stack: Option<Vec<TechView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub workflow: Option<Vec<WorkflowView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub media: Option<Vec<MediaView>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub features: Option<Vec<String>>,
    pub call_to_action: &'static str,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatView {
    pub value: String,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NarrativeBlock {
    pub heading: &'static str,
    pub body: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TechView {
    pub name: String,
    pub icon: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct WorkflowView {
    pub step: u32,
    pub title: String,
    pub description: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum MediaView {
    Image {
        src: String,
        alt: String,
        caption: String,
    },
    Video {
        title: String,
        description: String,
        link: VideoLink,
    },
}

/// What activating a video card does
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum VideoLink {
    /// Open this exact URL in a new browsing context
    External(String),
    /// No link yet: show a placeholder, navigate nowhere
    ComingSoon,
}

/// Map a record to its detail view. Order-preserving for every sequence.
pub fn render(record: &ProjectRecord) -> DetailView {
    let narrative: Vec<NarrativeBlock> = [
        ("The Challenge", &record.problem),
        ("The Solution", &record.solution),
        ("The Result", &record.result),
    ]
    .into_iter()
    .filter_map(|(heading, body)| {
        body.as_deref()
            .map(str::trim)
            .filter(|b| !b.is_empty())
            .map(|b| NarrativeBlock {
                heading,
                body: b.to_string(),
            })
    })
    .collect();

    DetailView {
        id: record.id.clone(),
        title: record.title.clone(),
        description: record.description.clone(),
        tags: section(&record.tags, Clone::clone),
        stats: section(&record.stats, |s| StatView {
            value: s.value.clone(),
            label: s.label.clone(),
        }),
        narrative: if narrative.is_empty() {
            None
        } else {
            Some(narrative)
        },
        tech_stack: section(&record.tech_stack, |t| TechView {
            name: t.name.clone(),
            icon: t.icon.clone(),
        }),
        workflow: section(&record.workflow, |w| WorkflowView {
            step: w.step,
            title: w.title.clone(),
            description: w.description.clone(),
        }),
        media: section(&record.media, render_media),
        features: section(&record.features, Clone::clone),
        call_to_action: CALL_TO_ACTION,
    }
}

fn render_media(item: &MediaItem) -> MediaView {
    match item {
        MediaItem::Image { src, alt, caption } => MediaView::Image {
            src: src.clone(),
            alt: if alt.is_empty() {
                caption.clone()
            } else {
                alt.clone()
            },
            caption: caption.clone(),
        },
        MediaItem::Video {
            title,
            description,
            url,
        } => MediaView::Video {
            title: title.clone(),
            description: description.clone(),
            link: match url.as_deref().map(str::trim) {
                Some(u) if !u.is_empty() => VideoLink::External(u.to_string()),
                _ => VideoLink::ComingSoon,
            },
        },
    }
}

/// Empty sequences render as an absent section
fn section<T, U>(items: &[T], f: impl Fn(&T) -> U) -> Option<Vec<U>> {
    if items.is_empty() {
        None
    } else {
        Some(items.iter().map(f).collect())
    }
}
