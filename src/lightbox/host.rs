use super::view::DetailView;

/// Pagination counters and the enabled state of the prev/next controls
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pagination {
    /// 1-based position of the current project in catalog order
    pub position: usize,
    pub total: usize,
    pub prev_enabled: bool,
    pub next_enabled: bool,
}

impl Pagination {
    pub fn new(position: usize, total: usize) -> Self {
        Pagination {
            position,
            total,
            prev_enabled: position > 1,
            next_enabled: position < total,
        }
    }
}

/// The mount points a host page hands to the lightbox controller.
///
/// The controller never reaches for global state; everything it shows goes
/// through these calls. `mount` always replaces the previous content.
pub trait LightboxHost {
    /// Show or hide the modal container
    fn set_modal_visible(&mut self, visible: bool);
    /// Suspend or restore background scrolling
    fn set_scroll_locked(&mut self, locked: bool);
    /// Toggle the loading affordance shown during the render delay
    fn set_loading(&mut self, loading: bool);
    /// Replace the content mount. `None` clears it.
    fn mount(&mut self, view: Option<DetailView>);
    /// Update the position/total counters and prev/next controls
    fn set_pagination(&mut self, pagination: Option<Pagination>);
    /// Open an external link in a new browsing context
    fn open_external(&mut self, url: &str);
    /// Show a transient, non-navigating notice (e.g. "Coming soon")
    fn show_notice(&mut self, message: &str);
    /// Bring the host page's contact section into view
    fn reveal_contact(&mut self);
}

#[cfg(test)]
pub(crate) mod recording {
    use super::*;

    /// Host double that records every mount point call
    #[derive(Debug, Default)]
    pub struct RecordingHost {
        pub modal_visible: bool,
        pub scroll_locked: bool,
        pub loading: bool,
        pub content: Option<DetailView>,
        pub pagination: Option<Pagination>,
        pub mounts: Vec<Option<String>>,
        pub opened: Vec<String>,
        pub notices: Vec<String>,
        pub contact_revealed: bool,
    }

    impl LightboxHost for RecordingHost {
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
            self.mounts.push(view.as_ref().map(|v| v.id.clone()));
            self.content = view;
        }
        fn set_pagination(&mut self, pagination: Option<Pagination>) {
            self.pagination = pagination;
        }
        fn open_external(&mut self, url: &str) {
            self.opened.push(url.to_string());
        }
        fn show_notice(&mut self, message: &str) {
            self.notices.push(message.to_string());
        }
        fn reveal_contact(&mut self) {
            self.contact_revealed = true;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pagination_edges() {
        assert_eq!(
            Pagination::new(1, 5),
            Pagination {
                position: 1,
                total: 5,
                prev_enabled: false,
                next_enabled: true,
            }
        );
        let last = Pagination::new(5, 5);
        assert!(last.prev_enabled);
        assert!(!last.next_enabled);
        let only = Pagination::new(1, 1);
        assert!(!only.prev_enabled);
        assert!(!only.next_enabled);
    }
}
