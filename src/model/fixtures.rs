//! Sample records shared by unit tests across the crate.

use super::catalog::Catalog;
use super::project::{MediaItem, ProjectRecord, Stat, TechItem, WorkflowStep};

/// A record with only the required fields set
pub fn record(id: &str, title: &str) -> ProjectRecord {
    ProjectRecord {
        id: id.to_string(),
        title: title.to_string(),
        description: format!("{} description", title),
        tags: Vec::new(),
        problem: None,
        solution: None,
        result: None,
        stats: Vec::new(),
        tech_stack: Vec::new(),
        workflow: Vec::new(),
        media: Vec::new(),
        features: Vec::new(),
    }
}

/// A record with every section populated
pub fn full_record(id: &str, title: &str) -> ProjectRecord {
    ProjectRecord {
        tags: vec!["HubSpot".into(), "Zapier".into()],
        problem: Some("Leads were qualified by hand.".into()),
        solution: Some("A scoring engine routes them.".into()),
        result: Some("Response time fell by 80%.".into()),
        stats: vec![
            Stat {
                value: "-80%".into(),
                label: "Response Time".into(),
            },
            Stat {
                value: "95%".into(),
                label: "Lead Accuracy".into(),
            },
        ],
        tech_stack: vec![
            TechItem {
                name: "HubSpot".into(),
                icon: "hs".into(),
            },
            TechItem {
                name: "WhatsApp API".into(),
                icon: "wa".into(),
            },
        ],
        workflow: vec![
            WorkflowStep {
                step: 1,
                title: "Capture".into(),
                description: "Form submission arrives".into(),
            },
            WorkflowStep {
                step: 2,
                title: "Score".into(),
                description: "Budget and timeline weighed".into(),
            },
        ],
        media: vec![
            MediaItem::Image {
                src: "assets/dashboard.webp".into(),
                alt: "".into(),
                caption: "Lead Scoring Dashboard".into(),
            },
            MediaItem::Video {
                title: "Walkthrough".into(),
                description: "Five minute demo".into(),
                url: Some("https://example.com/demo".into()),
            },
            MediaItem::Video {
                title: "Deep dive".into(),
                description: "".into(),
                url: None,
            },
        ],
        features: vec![
            "Real-time lead scoring".into(),
            "WhatsApp notification".into(),
        ],
        ..record(id, title)
    }
}

/// Five minimal records in order A, B, C, D, E
pub fn five_catalog() -> Catalog {
    Catalog::from_records(vec![
        record("A", "Alpha"),
        record("B", "Bravo"),
        record("C", "Charlie"),
        record("D", "Delta"),
        record("E", "Echo"),
    ])
    .unwrap()
}
