use std::path::Path;

use serde::Serialize;

use crate::io::catalog_io::asset_path;
use crate::model::project::{MediaItem, ProjectRecord};
use crate::model::site::Site;

/// Structured result from `folio check`, suitable for --json output.
#[derive(Debug, Default, Serialize)]
pub struct CheckResult {
    pub valid: bool,
    pub errors: Vec<CheckError>,
    pub warnings: Vec<CheckWarning>,
}

/// A validation error (the project cannot be shown properly).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckError {
    /// A project id is empty or whitespace
    #[serde(rename = "empty_id")]
    EmptyId { title: String },
    /// A required display field is empty
    #[serde(rename = "missing_field")]
    MissingField {
        project_id: String,
        field: &'static str,
    },
}

/// A validation warning (shown, but probably not what was meant).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "type")]
pub enum CheckWarning {
    /// The catalog has no projects at all
    #[serde(rename = "empty_catalog")]
    EmptyCatalog,
    /// An image `src` does not exist under portfolio/; a placeholder is shown
    #[serde(rename = "broken_asset")]
    BrokenAsset { project_id: String, src: String },
    /// Workflow steps are not numbered 1, 2, 3, ...
    #[serde(rename = "workflow_sequence")]
    WorkflowSequence {
        project_id: String,
        expected: u32,
        found: u32,
    },
    /// A video link that is not an http(s) URL
    #[serde(rename = "suspicious_url")]
    SuspiciousUrl { project_id: String, url: String },
    /// A stat with an empty value or label
    #[serde(rename = "empty_stat")]
    EmptyStat { project_id: String, index: usize },
}

// ---------------------------------------------------------------------------
// Main check entry point
// ---------------------------------------------------------------------------

/// Validate a loaded site and return structured results.
///
/// Read-only. Duplicate ids never get this far: the loader rejects them.
///
/// Checks performed:
/// 1. Every project has a non-empty id, title and description
/// 2. Image assets exist on disk
/// 3. Workflow steps are sequential from 1
/// 4. Video links look like http(s) URLs
/// 5. Stats have both a value and a label
pub fn check_site(site: &Site) -> CheckResult {
    let mut result = CheckResult::default();

    if site.catalog.is_empty() {
        result.warnings.push(CheckWarning::EmptyCatalog);
    }

    for record in site.catalog.records() {
        check_record(record, &site.portfolio_dir, &mut result);
    }

    result.valid = result.errors.is_empty();
    result
}

fn check_record(record: &ProjectRecord, portfolio_dir: &Path, result: &mut CheckResult) {
    let id = record.id.as_str();

    if id.trim().is_empty() {
        result.errors.push(CheckError::EmptyId {
            title: record.title.clone(),
        });
    }
    for (field, value) in [("title", &record.title), ("description", &record.description)] {
        if value.trim().is_empty() {
            result.errors.push(CheckError::MissingField {
                project_id: id.to_string(),
                field,
            });
        }
    }

    for (i, stat) in record.stats.iter().enumerate() {
        if stat.value.trim().is_empty() || stat.label.trim().is_empty() {
            result.warnings.push(CheckWarning::EmptyStat {
                project_id: id.to_string(),
                index: i,
            });
        }
    }

    // Report only the first break in numbering; later steps are off by the same amount
    for (expected, step) in (1u32..).zip(&record.workflow) {
        if step.step != expected {
            result.warnings.push(CheckWarning::WorkflowSequence {
                project_id: id.to_string(),
                expected,
                found: step.step,
            });
            break;
        }
    }

    for item in &record.media {
        match item {
            MediaItem::Image { src, .. } => {
                if !asset_path(portfolio_dir, src).is_file() {
                    result.warnings.push(CheckWarning::BrokenAsset {
                        project_id: id.to_string(),
                        src: src.clone(),
                    });
                }
            }
            MediaItem::Video { url: Some(url), .. } => {
                let url = url.trim();
                if !url.is_empty() && !(url.starts_with("https://") || url.starts_with("http://")) {
                    result.warnings.push(CheckWarning::SuspiciousUrl {
                        project_id: id.to_string(),
                        url: url.to_string(),
                    });
                }
            }
            MediaItem::Video { url: None, .. } => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::catalog::Catalog;
    use crate::model::config::SiteConfig;
    use crate::model::fixtures::{full_record, record};
    use crate::model::project::{Stat, WorkflowStep};
    use std::fs;
    use tempfile::TempDir;

    fn site_at(root: &Path, records: Vec<ProjectRecord>) -> Site {
        let portfolio_dir = root.join("portfolio");
        fs::create_dir_all(&portfolio_dir).unwrap();
        Site {
            root: root.to_path_buf(),
            portfolio_dir,
            config: toml::from_str::<SiteConfig>("[site]\nname = \"T\"\n").unwrap(),
            catalog: Catalog::from_records(records).unwrap(),
        }
    }

    #[test]
    fn clean_catalog_is_valid() {
        let tmp = TempDir::new().unwrap();
        let site = site_at(tmp.path(), vec![record("a", "A"), record("b", "B")]);
        let result = check_site(&site);
        assert!(result.valid);
        assert!(result.errors.is_empty());
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn empty_catalog_warns() {
        let tmp = TempDir::new().unwrap();
        let result = check_site(&site_at(tmp.path(), vec![]));
        assert!(result.valid);
        assert_eq!(result.warnings, vec![CheckWarning::EmptyCatalog]);
    }

    #[test]
    fn missing_required_fields_are_errors() {
        let tmp = TempDir::new().unwrap();
        let mut rec = record("a", "A");
        rec.title = "  ".into();
        rec.description = String::new();
        let result = check_site(&site_at(tmp.path(), vec![rec, record(" ", "Blank")]));
        assert!(!result.valid);
        assert_eq!(
            result.errors,
            vec![
                CheckError::MissingField {
                    project_id: "a".into(),
                    field: "title",
                },
                CheckError::MissingField {
                    project_id: "a".into(),
                    field: "description",
                },
                CheckError::EmptyId {
                    title: "Blank".into(),
                },
            ]
        );
    }

    #[test]
    fn broken_assets_and_links_warn() {
        let tmp = TempDir::new().unwrap();
        let mut rec = full_record("x", "X");
        rec.media.push(MediaItem::Video {
            title: "v".into(),
            description: String::new(),
            url: Some("ftp://old".into()),
        });
        let result = check_site(&site_at(tmp.path(), vec![rec]));
        assert!(result.valid);
        assert_eq!(
            result.warnings,
            vec![
                CheckWarning::BrokenAsset {
                    project_id: "x".into(),
                    src: "assets/dashboard.webp".into(),
                },
                CheckWarning::SuspiciousUrl {
                    project_id: "x".into(),
                    url: "ftp://old".into(),
                },
            ]
        );
    }

    #[test]
    fn present_asset_is_fine() {
        let tmp = TempDir::new().unwrap();
        let site = site_at(tmp.path(), vec![full_record("x", "X")]);
        fs::create_dir_all(site.portfolio_dir.join("assets")).unwrap();
        fs::write(site.portfolio_dir.join("assets/dashboard.webp"), b"img").unwrap();
        let result = check_site(&site);
        assert!(result.warnings.is_empty());
    }

    #[test]
    fn workflow_gap_reported_once() {
        let tmp = TempDir::new().unwrap();
        let mut rec = record("a", "A");
        rec.workflow = [1, 3, 4]
            .iter()
            .map(|&step| WorkflowStep {
                step,
                title: format!("s{}", step),
                description: String::new(),
            })
            .collect();
        rec.stats = vec![Stat {
            value: "10x".into(),
            label: String::new(),
        }];
        let result = check_site(&site_at(tmp.path(), vec![rec]));
        assert_eq!(
            result.warnings,
            vec![
                CheckWarning::EmptyStat {
                    project_id: "a".into(),
                    index: 0,
                },
                CheckWarning::WorkflowSequence {
                    project_id: "a".into(),
                    expected: 2,
                    found: 3,
                },
            ]
        );
    }

    #[test]
    fn json_shape_is_tagged() {
        let tmp = TempDir::new().unwrap();
        let result = check_site(&site_at(tmp.path(), vec![]));
        let json = serde_json::to_value(&result).unwrap();
        assert_eq!(json["valid"], true);
        assert_eq!(json["warnings"][0]["type"], "empty_catalog");
    }
}
