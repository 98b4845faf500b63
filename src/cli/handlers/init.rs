use std::fs;
use std::path::Path;

use crate::cli::commands::InitArgs;
use crate::io::catalog_io::{discover_site, parse_catalog};

const SITE_TOML_TEMPLATE: &str = include_str!("templates/site.toml");
const PROJECTS_TOML_TEMPLATE: &str = include_str!("templates/projects.toml");

/// Infer a display name from a directory name: replace hyphens with spaces, title-case.
fn infer_name(dir_name: &str) -> String {
    dir_name
        .split(['-', '_'])
        .filter(|w| !w.is_empty())
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                None => String::new(),
                Some(c) => {
                    let upper: String = c.to_uppercase().collect();
                    upper + &chars.collect::<String>()
                }
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Escape `s` for a TOML basic string
fn escape_basic_string(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            '"' => out.push_str("\\\""),
            '\n' => out.push_str("\\n"),
            '\r' => out.push_str("\\r"),
            '\t' => out.push_str("\\t"),
            c if c.is_control() => out.push_str(&format!("\\u{:04X}", c as u32)),
            c => out.push(c),
        }
    }
    out
}

/// Render site.toml for `name`
fn render_site_toml(name: &str) -> String {
    SITE_TOML_TEMPLATE.replace("{name}", &escape_basic_string(name))
}

/// Write the sample site into `root/portfolio`. Returns the number of
/// sample projects written.
pub(crate) fn scaffold(root: &Path, name: &str, force: bool) -> Result<usize, Box<dyn std::error::Error>> {
    let portfolio_dir = root.join("portfolio");
    let site_toml = portfolio_dir.join("site.toml");

    if site_toml.exists() && !force {
        return Err("portfolio/site.toml already exists (use --force to overwrite)".into());
    }

    fs::create_dir_all(portfolio_dir.join("assets"))?;
    fs::write(&site_toml, render_site_toml(name))?;

    let projects_toml = portfolio_dir.join("projects.toml");
    if projects_toml.exists() && !force {
        log::info!("keeping existing {}", projects_toml.display());
        return Ok(0);
    }
    fs::write(&projects_toml, PROJECTS_TOML_TEMPLATE)?;

    Ok(parse_catalog(PROJECTS_TOML_TEMPLATE)?.len())
}

pub fn cmd_init(args: InitArgs, site_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let root = match site_dir {
        Some(dir) => Path::new(dir).to_path_buf(),
        None => std::env::current_dir()?,
    };

    // Check for an enclosing site and warn
    if let Some(parent) = root.parent()
        && let Ok(parent_root) = discover_site(parent)
    {
        eprintln!(
            "Note: enclosing site found at {}/portfolio/",
            parent_root.display()
        );
        eprintln!("Creating new site in {}/portfolio/", root.display());
    }

    let name = args.name.unwrap_or_else(|| {
        root.canonicalize()
            .ok()
            .as_deref()
            .and_then(Path::file_name)
            .and_then(|n| n.to_str())
            .map(infer_name)
            .unwrap_or_else(|| "My Portfolio".to_string())
    });

    let count = scaffold(&root, &name, args.force)?;

    println!("Initialized folio site: {}", name);
    if count > 0 {
        println!("  {} sample projects in portfolio/projects.toml", count);
    }
    println!("  run `folio` to browse, `folio check` to validate");

    Ok(())
}
