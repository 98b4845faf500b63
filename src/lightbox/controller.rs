use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::model::catalog::Catalog;

use super::host::{LightboxHost, Pagination};
use super::view::{COMING_SOON, DetailView, MediaView, VideoLink, render};

/// Open/closed state and current selection.
///
/// `current_id` is `Some` exactly when the lightbox is open, and always
/// names a key of the controller's catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    is_open: bool,
    current_id: Option<String>,
}

impl LightboxState {
    pub fn is_open(&self) -> bool {
        self.is_open
    }

    pub fn current_id(&self) -> Option<&str> {
        self.current_id.as_deref()
    }
}

/// Result of activating a media card in the open detail view
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaAction {
    /// The host was asked to open this URL
    OpenUrl(String),
    /// A video without a link; a notice was shown instead
    ComingSoon,
    /// Nothing to activate (image card, bad index, closed or still loading)
    None,
}

/// Render scheduled for the end of the loading delay
#[derive(Debug, Clone)]
struct PendingRender {
    due: Instant,
}

/// Drives the project lightbox: one modal, one selection, one content mount.
pub struct LightboxController<H: LightboxHost> {
    catalog: Rc<Catalog>,
    host: H,
    state: LightboxState,
    /// Artificial delay between selecting a project and mounting its view
    delay: Duration,
    pending: Option<PendingRender>,
    /// The view currently mounted in the host, if any
    view: Option<DetailView>,
}

impl<H: LightboxHost> LightboxController<H> {
    pub fn new(catalog: Rc<Catalog>, host: H, delay: Duration) -> Self {
        LightboxController {
            catalog,
            host,
            state: LightboxState::default(),
            delay,
            pending: None,
            view: None,
        }
    }

    pub fn state(&self) -> &LightboxState {
        &self.state
    }

    pub fn is_open(&self) -> bool {
        self.state.is_open
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn host(&self) -> &H {
        &self.host
    }

    pub fn host_mut(&mut self) -> &mut H {
        &mut self.host
    }

    /// The view currently mounted (None while closed or loading)
    pub fn view(&self) -> Option<&DetailView> {
        self.view.as_ref()
    }

    /// True while a render is waiting out the loading delay
    pub fn is_loading(&self) -> bool {
        self.pending.is_some()
    }

    /// When the pending render becomes due, for event loop poll timeouts
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.as_ref().map(|p| p.due)
    }

    /// 1-based position of the current project
    pub fn position(&self) -> Option<usize> {
        let id = self.state.current_id.as_deref()?;
        self.catalog.index_of(id).map(|i| i + 1)
    }

    pub fn open(&mut self, id: &str) {
        self.open_at(id, Instant::now());
    }

    /// Select `id` and show the modal. Unknown ids leave all state untouched.
    pub fn open_at(&mut self, id: &str, now: Instant) {
        let Some(index) = self.catalog.index_of(id) else {
            log::warn!("lightbox: no project with id {:?}, ignoring", id);
            return;
        };

        self.state.is_open = true;
        self.state.current_id = Some(id.to_string());

        self.host.set_modal_visible(true);
        self.host.set_scroll_locked(true);
        self.host
            .set_pagination(Some(Pagination::new(index + 1, self.catalog.len())));

        if self.delay.is_zero() {
            self.pending = None;
            self.mount_current();
        } else {
            // Whatever was mounted belongs to the previous selection
            self.view = None;
            self.host.mount(None);
            self.host.set_loading(true);
            // Replacing the slot supersedes any render still waiting
            self.pending = Some(PendingRender {
                due: now + self.delay,
            });
        }
        log::debug!("lightbox: opened {} ({}/{})", id, index + 1, self.catalog.len());
    }

    /// Mount the pending view once its delay has elapsed. Returns true if
    /// something was mounted.
    pub fn tick(&mut self, now: Instant) -> bool {
        match &self.pending {
            Some(p) if now >= p.due => {
                self.pending = None;
                self.mount_current()
            }
            _ => false,
        }
    }

    /// Hide the modal and drop the selection. Safe to call when closed.
    pub fn close(&mut self) {
        self.state = LightboxState::default();
        self.pending = None;
        self.view = None;

        self.host.set_loading(false);
        self.host.mount(None);
        self.host.set_pagination(None);
        self.host.set_scroll_locked(false);
        self.host.set_modal_visible(false);
    }

    /// Step back one project; clamped at the first.
    pub fn show_previous(&mut self) {
        let Some(position) = self.position() else {
            return;
        };
        if position > 1
            && let Some(id) = self.catalog.id_at(position - 2).map(str::to_string)
        {
            self.open(&id);
        }
    }

    /// Step forward one project; clamped at the last.
    pub fn show_next(&mut self) {
        let Some(position) = self.position() else {
            return;
        };
        if position < self.catalog.len()
            && let Some(id) = self.catalog.id_at(position).map(str::to_string)
        {
            self.open(&id);
        }
    }

    /// Activate the media card at `index` in the mounted view.
    pub fn activate_media(&mut self, index: usize) -> MediaAction {
        let Some(item) = self.view.as_ref().and_then(|v| v.media.as_ref()?.get(index)) else {
            return MediaAction::None;
        };
        match item {
            MediaView::Image { .. } => MediaAction::None,
            MediaView::Video {
                link: VideoLink::External(url),
                ..
            } => {
                let url = url.clone();
                self.host.open_external(&url);
                MediaAction::OpenUrl(url)
            }
            MediaView::Video {
                link: VideoLink::ComingSoon,
                ..
            } => {
                self.host.show_notice(COMING_SOON);
                MediaAction::ComingSoon
            }
        }
    }

    /// The "need something like this?" action: leave the lightbox for the
    /// contact section.
    pub fn contact(&mut self) {
        self.close();
        self.host.reveal_contact();
    }

    fn mount_current(&mut self) -> bool {
        let Some(record) = self
            .state
            .current_id
            .as_deref()
            .and_then(|id| self.catalog.get(id))
        else {
            return false;
        };
        let view = render(record);
        self.host.set_loading(false);
        self.host.mount(Some(view.clone()));
        self.view = Some(view);
        true
    }
}
