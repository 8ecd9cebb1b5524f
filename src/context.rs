//! Application Context
//!
//! Shared navigation and notice signals provided via Leptos Context API.

use leptos::prelude::*;

use menu_domain::ValidationError;

/// Screens reachable from the bottom navigation
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Screen {
    /// Catalog with course tabs
    Home,
    /// Create-dish form
    AddDish,
    /// Selected dishes and totals
    Selection,
}

/// Kind of notice; drives the banner styling
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Error,
}

/// Transient message shown above the current screen
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    /// Assigned by `AppContext::notify`; tells repeated identical notices apart
    pub seq: u64,
    pub kind: NoticeKind,
    pub title: String,
    pub message: String,
}

impl Notice {
    pub fn success(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            seq: 0,
            kind: NoticeKind::Success,
            title: title.into(),
            message: message.into(),
        }
    }

    /// Confirmation after a dish was added from the form
    pub fn dish_added(name: &str) -> Self {
        Self::success("Success!", format!("{} has been added to your menu.", name))
    }
}

impl From<ValidationError> for Notice {
    fn from(err: ValidationError) -> Self {
        Self {
            seq: 0,
            kind: NoticeKind::Error,
            title: err.title().to_string(),
            message: err.to_string(),
        }
    }
}

/// App-wide signals provided via context
#[derive(Clone, Copy)]
pub struct AppContext {
    /// Screen currently shown - read
    pub screen: ReadSignal<Screen>,
    /// Screen currently shown - write
    set_screen: WriteSignal<Screen>,
    /// Visible notice, if any - read
    pub notice: ReadSignal<Option<Notice>>,
    /// Visible notice, if any - write
    set_notice: WriteSignal<Option<Notice>>,
    /// Last sequence number handed out by `notify`
    notice_seq: StoredValue<u64>,
}

impl AppContext {
    pub fn new(
        screen: (ReadSignal<Screen>, WriteSignal<Screen>),
        notice: (ReadSignal<Option<Notice>>, WriteSignal<Option<Notice>>),
    ) -> Self {
        Self {
            screen: screen.0,
            set_screen: screen.1,
            notice: notice.0,
            set_notice: notice.1,
            notice_seq: StoredValue::new(0),
        }
    }

    /// Switch to another screen
    pub fn navigate(&self, screen: Screen) {
        log::debug!("[NAV] {:?}", screen);
        self.set_screen.set(screen);
    }

    /// Show a notice, replacing any visible one. Returns its sequence number.
    pub fn notify(&self, mut notice: Notice) -> u64 {
        self.notice_seq.update_value(|seq| *seq += 1);
        notice.seq = self.notice_seq.get_value();
        let seq = notice.seq;
        self.set_notice.set(Some(notice));
        seq
    }

    pub fn dismiss_notice(&self) {
        self.set_notice.set(None);
    }

    /// Dismiss only if the visible notice is still the one numbered `seq`
    pub fn dismiss_notice_if_current(&self, seq: u64) {
        if self.notice.with_untracked(|n| n.as_ref().map(|n| n.seq)) == Some(seq) {
            self.dismiss_notice();
        }
    }
}
