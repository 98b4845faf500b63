use serde::Serialize;

use crate::lightbox::{DetailView, MediaView, Pagination, VideoLink};
use crate::model::catalog::Catalog;
use crate::model::config::ThemeName;
use crate::util::unicode;

// ---------------------------------------------------------------------------
// JSON output structs
// ---------------------------------------------------------------------------

#[derive(Serialize)]
pub struct ProjectSummaryJson {
    pub position: usize,
    pub id: String,
    pub title: String,
    pub description: String,
    #[serde(skip_serializing_if = "Vec::is_empty")]
    pub tags: Vec<String>,
}

#[derive(Serialize)]
pub struct ProjectDetailJson<'a> {
    pub position: usize,
    pub total: usize,
    #[serde(flatten)]
    pub view: &'a DetailView,
}

#[derive(Serialize)]
pub struct ThemeJson {
    pub theme: ThemeName,
}

// ---------------------------------------------------------------------------
// Conversion helpers
// ---------------------------------------------------------------------------

pub fn catalog_to_json(catalog: &Catalog) -> Vec<ProjectSummaryJson> {
    catalog
        .records()
        .enumerate()
        .map(|(i, record)| ProjectSummaryJson {
            position: i + 1,
            id: record.id.clone(),
            title: record.title.clone(),
            description: record.description.clone(),
            tags: record.tags.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// Human-readable formatting
// ---------------------------------------------------------------------------

fn format_tags(tags: &[String]) -> String {
    tags.iter()
        .map(|t| format!("#{}", t))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Format the catalog as one line per project, ids aligned
pub fn format_catalog_lines(catalog: &Catalog) -> Vec<String> {
    let id_width = catalog
        .ids()
        .map(unicode::display_width)
        .max()
        .unwrap_or(0);
    catalog
        .records()
        .enumerate()
        .map(|(i, record)| {
            let pad = " ".repeat(unicode::fill_width(&record.id, id_width));
            let tags = if record.tags.is_empty() {
                String::new()
            } else {
                format!("  {}", format_tags(&record.tags))
            };
            format!("{:>3}  {}{}  {}{}", i + 1, record.id, pad, record.title, tags)
        })
        .collect()
}

/// Format a detail view as plain text, sections in lightbox order
pub fn format_detail_lines(view: &DetailView, pagination: Pagination) -> Vec<String> {
    let mut lines = Vec::new();

    // Header
    lines.push(format!(
        "{} [{}/{}]",
        view.title, pagination.position, pagination.total
    ));
    lines.push(format!("id: {}", view.id));
    if let Some(tags) = &view.tags {
        lines.push(format!("tags: {}", format_tags(tags)));
    }
    lines.push(String::new());
    lines.push(view.description.clone());

    if let Some(stats) = &view.stats {
        let value_width = stats
            .iter()
            .map(|s| unicode::display_width(&s.value))
            .max()
            .unwrap_or(0);
        lines.push(String::new());
        lines.push("stats:".to_string());
        for stat in stats {
            let pad = " ".repeat(unicode::fill_width(&stat.value, value_width));
            lines.push(format!("  {}{}  {}", stat.value, pad, stat.label));
        }
    }

    if let Some(narrative) = &view.narrative {
        for block in narrative {
            lines.push(String::new());
            lines.push(format!("{}:", block.heading));
            for line in block.body.lines() {
                lines.push(format!("  {}", line));
            }
        }
    }

    if let Some(tech) = &view.tech_stack {
        lines.push(String::new());
        lines.push(format!(
            "tech stack: {}",
            tech.iter()
                .map(|t| if t.icon.is_empty() {
                    t.name.clone()
                } else {
                    format!("{} ({})", t.name, t.icon)
                })
                .collect::<Vec<_>>()
                .join(", ")
        ));
    }

    if let Some(workflow) = &view.workflow {
        lines.push(String::new());
        lines.push("workflow:".to_string());
        for step in workflow {
            if step.description.is_empty() {
                lines.push(format!("  {}. {}", step.step, step.title));
            } else {
                lines.push(format!(
                    "  {}. {}: {}",
                    step.step, step.title, step.description
                ));
            }
        }
    }

    if let Some(media) = &view.media {
        lines.push(String::new());
        lines.push("media:".to_string());
        for (i, item) in media.iter().enumerate() {
            let n = i + 1;
            match item {
                MediaView::Image { src, alt, caption } => {
                    let label = if caption.is_empty() { alt } else { caption };
                    lines.push(format!("  [{}] image: {} ({})", n, label, src));
                }
                MediaView::Video { title, link, .. } => match link {
                    VideoLink::External(url) => {
                        lines.push(format!("  [{}] video: {} <{}>", n, title, url))
                    }
                    VideoLink::ComingSoon => {
                        lines.push(format!("  [{}] video: {} (coming soon)", n, title))
                    }
                },
            }
        }
    }

    if let Some(features) = &view.features {
        lines.push(String::new());
        lines.push("features:".to_string());
        for feature in features {
            lines.push(format!("  - {}", feature));
        }
    }

    lines.push(String::new());
    lines.push(format!("> {}", view.call_to_action));

    lines
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::render;
    use crate::model::fixtures::{five_catalog, full_record, record};
    use insta::assert_snapshot;
    use pretty_assertions::assert_eq;

    #[test]
    fn detail_text_full_record() {
        let view = render(&full_record("lead", "Lead Scoring"));
        let text = format_detail_lines(&view, Pagination::new(1, 3)).join("\n");
        assert_snapshot!(text, @r"
Lead Scoring [1/3]
id: lead
tags: #HubSpot #Zapier

Lead Scoring description

stats:
  -80%  Response Time
  95%   Lead Accuracy

The Challenge:
  Leads were qualified by hand.

The Solution:
  A scoring engine routes them.

The Result:
  Response time fell by 80%.

tech stack: HubSpot (hs), WhatsApp API (wa)

workflow:
  1. Capture: Form submission arrives
  2. Score: Budget and timeline weighed

media:
  [1] image: Lead Scoring Dashboard (assets/dashboard.webp)
  [2] video: Walkthrough <https://example.com/demo>
  [3] video: Deep dive (coming soon)

features:
  - Real-time lead scoring
  - WhatsApp notification

> Need something like this?
");
    }

    #[test]
    fn detail_text_omits_absent_sections() {
        let view = render(&record("bare", "Bare"));
        let lines = format_detail_lines(&view, Pagination::new(2, 2));
        assert_eq!(
            lines,
            vec![
                "Bare [2/2]",
                "id: bare",
                "",
                "Bare description",
                "",
                "> Need something like this?",
            ]
        );
    }

    #[test]
    fn catalog_lines_align_ids() {
        let mut records = vec![record("a", "Short id"), record("longer-id", "Long id")];
        records[0].tags = vec!["x".into()];
        let catalog = Catalog::from_records(records).unwrap();
        assert_eq!(
            format_catalog_lines(&catalog),
            vec!["  1  a          Short id  #x", "  2  longer-id  Long id"]
        );
    }

    #[test]
    fn catalog_json_positions() {
        let json = catalog_to_json(&five_catalog());
        assert_eq!(json.len(), 5);
        assert_eq!(json[0].position, 1);
        assert_eq!(json[4].id, "E");
        let value = serde_json::to_value(&json[2]).unwrap();
        assert_eq!(value["title"], "Charlie");
        assert!(value.get("tags").is_none());
    }
}
