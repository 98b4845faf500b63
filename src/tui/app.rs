use std::io;
use std::path::PathBuf;
use std::rc::Rc;
use std::time::{Duration, Instant};

use crossterm::event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyEventKind};
use crossterm::execute;
use crossterm::terminal::{
    EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode,
};
use ratatui::Terminal;
use ratatui::backend::CrosstermBackend;
use ratatui::layout::{Position, Rect};

use crate::io::catalog_io::{discover_site, load_site};
use crate::io::state::{UiState, effective_theme, write_ui_state};
use crate::lightbox::LightboxController;
use crate::model::{Catalog, ContactConfig, Site, ThemeName, UiConfig};

use super::host::TerminalHost;
use super::input;
use super::render;
use super::theme::Theme;

/// Which part of the host page has focus
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    Projects,
    Contact,
}

/// Clickable regions recorded by the last render
#[derive(Debug, Clone, Default)]
pub struct HitMap {
    pub modal: Option<Rect>,
    pub close: Option<Rect>,
    pub prev: Option<Rect>,
    pub next: Option<Rect>,
    pub call_to_action: Option<Rect>,
    /// (area, media index) for each visible media card
    pub media: Vec<(Rect, usize)>,
    /// (area, catalog index) for each visible project card
    pub cards: Vec<(Rect, usize)>,
}

impl HitMap {
    pub fn clear(&mut self) {
        *self = HitMap::default();
    }
}

/// Main application state
pub struct App {
    pub site_name: String,
    pub tagline: String,
    pub contact: ContactConfig,
    pub portfolio_dir: PathBuf,
    pub ui_config: UiConfig,
    pub catalog: Rc<Catalog>,
    pub lightbox: LightboxController<TerminalHost>,
    pub theme: Theme,
    /// Selected project card (catalog index)
    pub cursor: usize,
    /// First visible card
    pub scroll_offset: usize,
    pub section: Section,
    pub show_help: bool,
    pub should_quit: bool,
    pub hits: HitMap,
}

impl App {
    pub fn new(site: Site, theme_name: ThemeName, host: TerminalHost) -> Self {
        let catalog = Rc::new(site.catalog);
        let delay = Duration::from_millis(site.config.lightbox.render_delay_ms);
        let lightbox = LightboxController::new(Rc::clone(&catalog), host, delay);
        let theme = Theme::from_config(theme_name, &site.config.ui);

        App {
            site_name: site.config.site.name,
            tagline: site.config.site.tagline,
            contact: site.config.contact,
            portfolio_dir: site.portfolio_dir,
            ui_config: site.config.ui,
            catalog,
            lightbox,
            theme,
            cursor: 0,
            scroll_offset: 0,
            section: Section::Projects,
            show_help: false,
            should_quit: false,
            hits: HitMap::default(),
        }
    }

    /// Id of the project card under the cursor
    pub fn selected_id(&self) -> Option<&str> {
        self.catalog.id_at(self.cursor)
    }

    /// Trigger for the card under the cursor
    pub fn open_selected(&mut self) {
        if let Some(id) = self.selected_id().map(str::to_string) {
            self.lightbox.open(&id);
        }
    }

    /// Trigger for the card at a catalog index (number keys, clicks)
    pub fn open_index(&mut self, index: usize) {
        if let Some(id) = self.catalog.id_at(index).map(str::to_string) {
            self.cursor = index;
            self.lightbox.open(&id);
        }
    }

    /// Move the card cursor. Background scrolling is suspended while the
    /// lightbox holds the scroll lock.
    pub fn move_cursor(&mut self, delta: isize) {
        if self.lightbox.host().scroll_locked || self.catalog.is_empty() {
            return;
        }
        let last = self.catalog.len() - 1;
        self.cursor = self.cursor.saturating_add_signed(delta).min(last);
        self.section = Section::Projects;
    }

    pub fn jump_cursor(&mut self, to_end: bool) {
        if self.lightbox.host().scroll_locked || self.catalog.is_empty() {
            return;
        }
        self.cursor = if to_end { self.catalog.len() - 1 } else { 0 };
        self.section = Section::Projects;
    }

    /// Flip the theme and persist the choice
    pub fn toggle_theme(&mut self) {
        let name = self.theme.name.toggled();
        self.theme = Theme::from_config(name, &self.ui_config);
        let state = UiState { theme: Some(name) };
        if let Err(e) = write_ui_state(&self.portfolio_dir, &state) {
            log::warn!("could not save theme preference: {}", e);
        }
    }

    /// Apply a contact request raised by the lightbox call-to-action
    pub fn sync_contact_request(&mut self) {
        let host = self.lightbox.host_mut();
        if host.contact_requested {
            host.contact_requested = false;
            self.section = Section::Contact;
        }
    }

    /// Scroll the lightbox content by `delta` lines
    pub fn scroll_content(&mut self, delta: isize) {
        let host = self.lightbox.host_mut();
        host.content_scroll = host.content_scroll.saturating_add_signed(delta);
    }

    pub fn hit(area: Option<Rect>, column: u16, row: u16) -> bool {
        area.is_some_and(|r| r.contains(Position::new(column, row)))
    }
}

/// Run the TUI application
pub fn run(project_dir: Option<&str>) -> Result<(), Box<dyn std::error::Error>> {
    let start = match project_dir {
        Some(dir) => PathBuf::from(dir),
        None => std::env::current_dir()?,
    };
    let root = discover_site(&start)?;
    let site = load_site(&root)?;
    log::info!("serving {} projects from {}", site.catalog.len(), root.display());

    let theme_name = effective_theme(&site.portfolio_dir, site.config.ui.theme);
    let host = TerminalHost::new(site.portfolio_dir.clone());
    let mut app = App::new(site, theme_name, host);

    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    terminal.clear()?;

    // Install panic hook to restore terminal on panic
    let original_hook = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |panic_info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), DisableMouseCapture, LeaveAlternateScreen);
        original_hook(panic_info);
    }));

    let result = run_event_loop(&mut terminal, &mut app);

    // Restore terminal
    disable_raw_mode()?;
    execute!(
        terminal.backend_mut(),
        DisableMouseCapture,
        LeaveAlternateScreen
    )?;
    terminal.show_cursor()?;

    result
}

const IDLE_POLL: Duration = Duration::from_millis(250);

fn run_event_loop(
    terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    app: &mut App,
) -> Result<(), Box<dyn std::error::Error>> {
    loop {
        terminal.draw(|frame| render::render(frame, app))?;

        // Wake up in time for a pending lightbox render
        let timeout = app
            .lightbox
            .next_deadline()
            .map_or(IDLE_POLL, |due| {
                due.saturating_duration_since(Instant::now()).min(IDLE_POLL)
            });

        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) if key.kind == KeyEventKind::Press => input::handle_key(app, key),
                Event::Mouse(mouse) => input::handle_mouse(app, mouse),
                _ => {}
            }
        }
        app.lightbox.tick(Instant::now());

        if app.should_quit {
            break;
        }
    }
    Ok(())
}

/// Path of the log file used while the terminal is in raw mode
pub fn log_file_path() -> PathBuf {
    std::env::temp_dir().join("folio.log")
}

#[cfg(test)]
pub(crate) fn test_site(root: &std::path::Path, catalog: Catalog) -> Site {
    use crate::model::SiteConfig;
    let config: SiteConfig = toml::from_str(
        "[site]\nname = \"Ada Okafor\"\ntagline = \"Automation engineer\"\n\n\
         [contact]\nemail = \"ada@example.com\"\n\n[lightbox]\nrender_delay_ms = 0\n",
    )
    .unwrap();
    Site {
        root: root.to_path_buf(),
        portfolio_dir: root.join("portfolio"),
        config,
        catalog,
    }
}
