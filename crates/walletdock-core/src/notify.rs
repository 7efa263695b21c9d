//! User-facing notices.
//!
//! The core decides *what* to tell the user after a connect, disconnect, or
//! feature action; a [`Notifier`] decides how to show it (toasts in the browser).

/// Notice severity.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Severity {
    /// Informational (e.g. the user cancelled a prompt)
    Info,
    /// Operation succeeded
    Success,
    /// Operation failed (rendered as destructive)
    Error,
}

/// Optional call to action attached to a notice.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct NoticeAction {
    pub label: String,
    pub url: String,
}

/// A transient message for the user.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
    pub action: Option<NoticeAction>,
}

impl Notice {
    pub fn info(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Info, title, description)
    }

    pub fn success(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Success, title, description)
    }

    pub fn error(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self::new(Severity::Error, title, description)
    }

    /// Attach a link button.
    pub fn with_action(mut self, label: impl Into<String>, url: impl Into<String>) -> Self {
        self.action = Some(NoticeAction {
            label: label.into(),
            url: url.into(),
        });
        self
    }

    fn new(severity: Severity, title: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            severity,
            action: None,
        }
    }
}

/// Surfaces notices to the user.
pub trait Notifier {
    fn notify(&self, notice: Notice);
}

impl<F: Fn(Notice)> Notifier for F {
    fn notify(&self, notice: Notice) {
        self(notice)
    }
}
