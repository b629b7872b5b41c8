//! Application state managed via Dioxus context.
//!
//! `AppState` bundles the page-level reactive signals into a single struct
//! provided via `use_context_provider`. Child components retrieve it with
//! `use_context::<AppState>()`. Contact-form field values stay local to the
//! form component; only state that outlives a single component lives here.

use dioxus::prelude::*;
use folio_model::{CategoryFilter, Project, Skill};
use gloo_timers::future::TimeoutFuture;

/// How long a toast stays on screen before auto-dismissal.
const TOAST_DISMISS_MS: u32 = 4_000;

/// Kind of transient notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Success,
    Error,
}

/// A transient notification shown in the page corner.
#[derive(Debug, Clone, PartialEq)]
pub struct Toast {
    pub kind: ToastKind,
    pub title: String,
    pub body: String,
    /// Monotonic sequence number. The auto-dismiss timer only clears the
    /// toast if this still matches, so a stale timer cannot dismiss a
    /// newer toast.
    pub seq: u64,
}

/// Shared application state for the portfolio page.
#[derive(Clone, Copy)]
pub struct AppState {
    /// Loaded project catalog (empty until the mount effect runs)
    pub projects: Signal<Vec<Project>>,
    /// Loaded skill catalog
    pub skills: Signal<Vec<Skill>>,
    /// Error message if catalog loading went wrong
    pub load_error: Signal<Option<String>>,
    /// Project currently shown in the detail overlay (None = closed)
    pub selected_project: Signal<Option<Project>>,
    /// Active skills-grid filter
    pub active_filter: Signal<CategoryFilter>,
    /// Current transient notification, if any
    pub toast: Signal<Option<Toast>>,
    /// Sequence source for toast ids
    toast_seq: Signal<u64>,
}

impl AppState {
    /// Create a new AppState with default signal values.
    pub fn new() -> Self {
        Self {
            projects: Signal::new(Vec::new()),
            skills: Signal::new(Vec::new()),
            load_error: Signal::new(None),
            selected_project: Signal::new(None),
            active_filter: Signal::new(CategoryFilter::All),
            toast: Signal::new(None),
            toast_seq: Signal::new(0),
        }
    }

    /// Open the detail overlay for a project. Single-slot: any previously
    /// selected project is replaced.
    pub fn open_project(&mut self, project: Project) {
        self.selected_project.set(Some(project));
    }

    /// Close the detail overlay, if open.
    pub fn close_project(&mut self) {
        self.selected_project.set(None);
    }

    /// Show a toast, replacing any current one, and schedule auto-dismissal.
    pub fn show_toast(&mut self, kind: ToastKind, title: &str, body: &str) {
        let seq = (self.toast_seq)() + 1;
        self.toast_seq.set(seq);
        self.toast.set(Some(Toast {
            kind,
            title: title.to_string(),
            body: body.to_string(),
            seq,
        }));

        let mut toast = self.toast;
        spawn(async move {
            TimeoutFuture::new(TOAST_DISMISS_MS).await;
            let still_current = toast.read().as_ref().map(|t| t.seq) == Some(seq);
            if still_current {
                toast.set(None);
            }
        });
    }
}
