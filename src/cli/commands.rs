use clap::{Args, Parser, Subcommand, ValueEnum};

#[derive(Parser)]
#[command(name = "folio", about = concat!("\u{25C6} folio v", env!("CARGO_PKG_VERSION"), " - your portfolio in the terminal"), version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Output as JSON
    #[arg(long, global = true)]
    pub json: bool,

    /// Run against a different site directory
    #[arg(short = 'C', long = "site-dir", global = true)]
    pub site_dir: Option<String>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Scaffold a portfolio/ directory with a sample site
    Init(InitArgs),
    /// List projects in catalog order
    List,
    /// Show a project's detail view
    Show(ShowArgs),
    /// Validate the catalog and its assets
    Check,
    /// Print or change the theme preference
    Theme(ThemeArgs),
}

#[derive(Args)]
pub struct InitArgs {
    /// Site owner's name (defaults to the directory name)
    #[arg(long)]
    pub name: Option<String>,
    /// Overwrite an existing portfolio/site.toml
    #[arg(long)]
    pub force: bool,
}

#[derive(Args)]
pub struct ShowArgs {
    /// Project id
    pub id: String,
}

#[derive(Args)]
pub struct ThemeArgs {
    /// New theme; omit to print the current one
    #[arg(value_enum)]
    pub action: Option<ThemeAction>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum ThemeAction {
    Dark,
    Light,
    Toggle,
}
