use std::fs::File;

use clap::Parser;
use folio::cli::commands::{Cli, Commands};
use folio::cli::handlers;

/// Log to stderr for CLI runs. The TUI owns the terminal, so it logs to a
/// file instead; if that can't be created, logging stays off.
fn init_logging(tui: bool) {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::new().filter_or("FOLIO_LOG", "warn"));
    if tui {
        match File::create(folio::tui::app::log_file_path()) {
            Ok(file) => {
                builder.target(env_logger::Target::Pipe(Box::new(file)));
            }
            Err(_) => return,
        }
    }
    builder.init();
}

fn main() {
    let cli = Cli::parse();
    let site_dir = cli.site_dir.clone();
    init_logging(cli.command.is_none());

    match cli.command {
        None => {
            // No subcommand → launch TUI
            if let Err(e) = folio::tui::run(site_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(Commands::Init(args)) => {
            // Init is handled before site discovery
            if let Err(e) = handlers::cmd_init(args, site_dir.as_deref()) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
        Some(_) => {
            if let Err(e) = handlers::dispatch(cli) {
                eprintln!("error: {}", e);
                std::process::exit(1);
            }
        }
    }
}
