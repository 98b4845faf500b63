use std::path::Path;

use ratatui::Terminal;
use ratatui::backend::TestBackend;
use ratatui::layout::Rect;

use crate::model::fixtures::{five_catalog, full_record, record};
use crate::model::{Catalog, ThemeName};
use crate::tui::app::{App, test_site};
use crate::tui::host::TerminalHost;

pub const TERM_W: u16 = 80;
pub const TERM_H: u16 = 24;

/// Render into an in-memory buffer and return plain text (no styles).
pub fn render_to_string<F>(w: u16, h: u16, f: F) -> String
where
    F: FnOnce(&mut ratatui::Frame, Rect),
{
    let backend = TestBackend::new(w, h);
    let mut terminal = Terminal::new(backend).unwrap();
    terminal
        .draw(|frame| {
            let area = frame.area();
            f(frame, area);
        })
        .unwrap();

    let buf = terminal.backend().buffer().clone();
    let w = buf.area.width as usize;
    let lines: Vec<String> = buf
        .content
        .chunks(w)
        .map(|row| {
            let s: String = row.iter().map(|cell| cell.symbol()).collect();
            s.trim_end().to_string()
        })
        .collect();

    // Trim trailing blank lines
    let end = lines
        .iter()
        .rposition(|l| !l.is_empty())
        .map_or(0, |i| i + 1);
    lines[..end].join("\n")
}

const NO_SITE: &str = "/nonexistent-folio";

/// A host whose URL opener does nothing
pub fn stub_host() -> TerminalHost {
    TerminalHost::with_opener(Path::new(NO_SITE).join("portfolio"), Box::new(|_| Ok(())))
}

/// Build an App over `catalog` with no render delay.
pub fn app_with_catalog(catalog: Catalog) -> App {
    App::new(test_site(Path::new(NO_SITE), catalog), ThemeName::Dark, stub_host())
}

/// Build an App over the five-project catalog with a render delay.
pub fn app_with_delay(ms: u64) -> App {
    let mut site = test_site(Path::new(NO_SITE), five_catalog());
    site.config.lightbox.render_delay_ms = ms;
    App::new(site, ThemeName::Dark, stub_host())
}

/// The five-project catalog (Alpha..Echo).
pub fn sample_app() -> App {
    app_with_catalog(five_catalog())
}

/// One fully populated project followed by a bare one.
pub fn full_catalog() -> Catalog {
    Catalog::from_records(vec![
        full_record("lead", "Lead Scoring"),
        record("bare", "Bare"),
    ])
    .unwrap()
}
