use std::collections::HashSet;
use std::io;
use std::path::PathBuf;
use std::process::{Command, Stdio};

use crate::io::catalog_io::asset_path;
use crate::lightbox::{DetailView, LightboxHost, MediaView, Pagination};

/// Launches an external URL; swapped out in tests
pub type Opener = Box<dyn FnMut(&str) -> io::Result<()>>;

/// The terminal's mount points for the lightbox.
///
/// Renderers read these fields each frame; the controller writes them
/// through [`LightboxHost`].
pub struct TerminalHost {
    pub modal_visible: bool,
    pub scroll_locked: bool,
    pub loading: bool,
    pub content: Option<DetailView>,
    /// First visible content line inside the modal
    pub content_scroll: usize,
    /// Image `src`s of the mounted view that do not resolve on disk
    pub missing_assets: HashSet<String>,
    pub pagination: Option<Pagination>,
    /// Transient message for the status row
    pub notice: Option<String>,
    /// Set by the call-to-action; the app consumes it
    pub contact_requested: bool,
    portfolio_dir: PathBuf,
    opener: Opener,
}

impl TerminalHost {
    pub fn new(portfolio_dir: PathBuf) -> Self {
        Self::with_opener(portfolio_dir, Box::new(system_open))
    }

    pub fn with_opener(portfolio_dir: PathBuf, opener: Opener) -> Self {
        TerminalHost {
            modal_visible: false,
            scroll_locked: false,
            loading: false,
            content: None,
            content_scroll: 0,
            missing_assets: HashSet::new(),
            pagination: None,
            notice: None,
            contact_requested: false,
            portfolio_dir,
            opener,
        }
    }

    pub fn asset_missing(&self, src: &str) -> bool {
        self.missing_assets.contains(src)
    }
}

impl LightboxHost for TerminalHost {
    fn set_modal_visible(&mut self, visible: bool) {
        self.modal_visible = visible;
    }

    fn set_scroll_locked(&mut self, locked: bool) {
        self.scroll_locked = locked;
    }

    fn set_loading(&mut self, loading: bool) {
        self.loading = loading;
    }

    fn mount(&mut self, view: Option<DetailView>) {
        self.content_scroll = 0;
        self.missing_assets.clear();
        if let Some(media) = view.as_ref().and_then(|v| v.media.as_ref()) {
            for item in media {
                if let MediaView::Image { src, .. } = item
                    && !asset_path(&self.portfolio_dir, src).is_file()
                {
                    log::debug!("asset {} not found, using placeholder", src);
                    self.missing_assets.insert(src.clone());
                }
            }
        }
        self.content = view;
    }

    fn set_pagination(&mut self, pagination: Option<Pagination>) {
        self.pagination = pagination;
    }

    fn open_external(&mut self, url: &str) {
        match (self.opener)(url) {
            Ok(()) => self.notice = Some(format!("Opened {}", url)),
            Err(e) => {
                log::warn!("could not open {}: {}", url, e);
                self.notice = Some(format!("Could not open {}", url));
            }
        }
    }

    fn show_notice(&mut self, message: &str) {
        self.notice = Some(message.to_string());
    }

    fn reveal_contact(&mut self) {
        self.contact_requested = true;
    }
}

/// Hand a URL to the platform opener without waiting on it
fn system_open(url: &str) -> io::Result<()> {
    #[cfg(target_os = "macos")]
    let program = "open";
    #[cfg(target_os = "linux")]
    let program = "xdg-open";
    #[cfg(not(any(target_os = "macos", target_os = "linux")))]
    return Err(io::Error::new(
        io::ErrorKind::Unsupported,
        "no URL opener on this platform",
    ));

    #[cfg(any(target_os = "macos", target_os = "linux"))]
    Command::new(program)
        .arg(url)
        .stdin(Stdio::null())
        .stdout(Stdio::null())
        .stderr(Stdio::null())
        .spawn()
        .map(|_| ())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::lightbox::render;
    use crate::model::fixtures::full_record;
    use std::cell::RefCell;
    use std::fs;
    use std::rc::Rc;
    use tempfile::TempDir;

    #[test]
    fn mount_flags_missing_assets() {
        let tmp = TempDir::new().unwrap();
        let mut host = TerminalHost::with_opener(tmp.path().to_path_buf(), Box::new(|_| Ok(())));
        host.content_scroll = 7;
        host.mount(Some(render(&full_record("x", "X"))));
        assert!(host.asset_missing("assets/dashboard.webp"));
        assert_eq!(host.content_scroll, 0);

        fs::create_dir_all(tmp.path().join("assets")).unwrap();
        fs::write(tmp.path().join("assets/dashboard.webp"), b"img").unwrap();
        host.mount(Some(render(&full_record("x", "X"))));
        assert!(!host.asset_missing("assets/dashboard.webp"));

        host.mount(None);
        assert!(host.content.is_none());
        assert!(host.missing_assets.is_empty());
    }

    #[test]
    fn open_external_reports_outcome() {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let log = Rc::clone(&seen);
        let mut host = TerminalHost::with_opener(
            PathBuf::from("/tmp"),
            Box::new(move |url| {
                log.borrow_mut().push(url.to_string());
                if url.contains("bad") {
                    Err(io::Error::other("boom"))
                } else {
                    Ok(())
                }
            }),
        );
        host.open_external("https://x");
        assert_eq!(host.notice.as_deref(), Some("Opened https://x"));
        host.open_external("https://bad");
        assert_eq!(host.notice.as_deref(), Some("Could not open https://bad"));
        assert_eq!(*seen.borrow(), vec!["https://x", "https://bad"]);
    }
}
