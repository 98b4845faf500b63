mod init;
pub use init::cmd_init;

use std::path::PathBuf;

use crate::cli::commands::*;
use crate::cli::output::*;
use crate::io::catalog_io::{self, CatalogError};
use crate::io::state::{UiState, effective_theme, write_ui_state};
use crate::lightbox::{Pagination, render};
use crate::model::config::ThemeName;
use crate::model::site::Site;
use crate::ops::check;

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

pub fn dispatch(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let json = cli.json;
    let site_dir = cli.site_dir.as_deref();

    match cli.command {
        None => crate::tui::run(site_dir),
        Some(cmd) => match cmd {
            // Init is handled before site discovery
            Commands::Init(args) => cmd_init(args, site_dir),

            // Read commands
            Commands::List => cmd_list(site_dir, json),
            Commands::Show(args) => cmd_show(args, site_dir, json),
            Commands::Check => cmd_check(site_dir, json),

            // Preferences
            Commands::Theme(args) => cmd_theme(args, site_dir, json),
        },
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_site_cwd(site_dir: Option<&str>) -> Result<Site, CatalogError> {
    let start = match site_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    let root = catalog_io::discover_site(&start)?;
    log::debug!("site root: {}", root.display());
    catalog_io::load_site(&root)
}

// ---------------------------------------------------------------------------
// Read command handlers
// ---------------------------------------------------------------------------

fn cmd_list(site_dir: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site_cwd(site_dir)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&catalog_to_json(&site.catalog))?);
    } else if site.catalog.is_empty() {
        println!("No projects. Add [[projects]] entries to portfolio/projects.toml");
    } else {
        for line in format_catalog_lines(&site.catalog) {
            println!("{}", line);
        }
    }
    Ok(())
}

fn cmd_show(args: ShowArgs, site_dir: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site_cwd(site_dir)?;

    let (Some(record), Some(index)) = (site.catalog.get(&args.id), site.catalog.index_of(&args.id))
    else {
        return Err(format!("project not found: {}", args.id).into());
    };
    let view = render(record);
    let pagination = Pagination::new(index + 1, site.catalog.len());

    if json {
        let detail = ProjectDetailJson {
            position: pagination.position,
            total: pagination.total,
            view: &view,
        };
        println!("{}", serde_json::to_string_pretty(&detail)?);
    } else {
        for line in format_detail_lines(&view, pagination) {
            println!("{}", line);
        }
        if let Some(email) = &site.config.contact.email {
            println!("  {}", email);
        }
    }
    Ok(())
}

fn cmd_check(site_dir: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site_cwd(site_dir)?;
    let result = check::check_site(&site);

    if json {
        println!("{}", serde_json::to_string_pretty(&result)?);
    } else {
        if !result.errors.is_empty() {
            println!("Errors:");
            for err in &result.errors {
                match err {
                    check::CheckError::EmptyId { title } => {
                        println!("  project \"{}\" has an empty id", title);
                    }
                    check::CheckError::MissingField { project_id, field } => {
                        println!("  [{}] missing {}", project_id, field);
                    }
                }
            }
        }
        if !result.warnings.is_empty() {
            if !result.errors.is_empty() {
                println!();
            }
            println!("Warnings:");
            for warn in &result.warnings {
                match warn {
                    check::CheckWarning::EmptyCatalog => {
                        println!("  catalog has no projects");
                    }
                    check::CheckWarning::BrokenAsset { project_id, src } => {
                        println!("  [{}] image not found: {} (placeholder shown)", project_id, src);
                    }
                    check::CheckWarning::WorkflowSequence {
                        project_id,
                        expected,
                        found,
                    } => {
                        println!(
                            "  [{}] workflow step {} found where {} was expected",
                            project_id, found, expected
                        );
                    }
                    check::CheckWarning::SuspiciousUrl { project_id, url } => {
                        println!("  [{}] video link is not an http(s) URL: {}", project_id, url);
                    }
                    check::CheckWarning::EmptyStat { project_id, index } => {
                        println!("  [{}] stat {} is missing a value or label", project_id, index + 1);
                    }
                }
            }
        }
        if result.valid {
            println!("\u{2713} site is valid ({} projects)", site.catalog.len());
        } else {
            println!("\u{2717} site has errors");
        }
    }

    if !result.valid {
        return Err(format!("{} error(s) found", result.errors.len()).into());
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Preference handlers
// ---------------------------------------------------------------------------

fn cmd_theme(args: ThemeArgs, site_dir: Option<&str>, json: bool) -> Result<(), Box<dyn std::error::Error>> {
    let site = load_site_cwd(site_dir)?;
    let current = effective_theme(&site.portfolio_dir, site.config.ui.theme);

    let theme = match args.action {
        None => current,
        Some(action) => {
            let next = match action {
                ThemeAction::Dark => ThemeName::Dark,
                ThemeAction::Light => ThemeName::Light,
                ThemeAction::Toggle => current.toggled(),
            };
            write_ui_state(&site.portfolio_dir, &UiState { theme: Some(next) })?;
            log::info!("theme {} -> {}", current, next);
            next
        }
    };

    if json {
        println!("{}", serde_json::to_string_pretty(&ThemeJson { theme })?);
    } else {
        println!("{}", theme);
    }
    Ok(())
}
