//! Defines the mutable, reactive state for the application's UI.

use dioxus::prelude::*;

#[derive(Clone, Copy, PartialEq, Eq, Debug, Default, strum::EnumIs)]
pub enum ToastKind {
    #[default]
    Success,
    /// Rejections and failures, rendered in red.
    Destructive,
}

/// A transient notification shown above the tab bar.
#[derive(Clone, PartialEq, Eq, Debug)]
pub struct Toast {
    pub title: String,
    pub description: String,
    pub kind: ToastKind,
}

/// A reactive state provided as a Dioxus context for mutable UI data.
///
/// This struct holds `Signal`s for UI state that more than one component
/// writes to. It is separate from the immutable `AppState`. Screen-local
/// state (form fields, toggles) stays inside each screen.
#[derive(Clone, Copy)]
pub struct AppStateMut {
    /// The toast currently on screen, if any. Setting a new one replaces it.
    pub toast: Signal<Option<Toast>>,
}
