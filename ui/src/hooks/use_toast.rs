use crate::app_state_mut::AppStateMut;
use crate::app_state_mut::Toast;
use crate::app_state_mut::ToastKind;
use dioxus::prelude::*;

/// A handle for showing and dismissing the app's single toast.
#[derive(Clone, Copy)]
pub struct ToastHandle {
    slot: Signal<Option<Toast>>,
}

impl ToastHandle {
    /// Shows a green confirmation toast, replacing any toast already visible.
    pub fn success(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title.into(), description.into(), ToastKind::Success);
    }

    /// Shows a red rejection toast, replacing any toast already visible.
    pub fn destructive(&mut self, title: impl Into<String>, description: impl Into<String>) {
        self.show(title.into(), description.into(), ToastKind::Destructive);
    }

    pub fn dismiss(&mut self) {
        self.slot.set(None);
    }

    fn show(&mut self, title: String, description: String, kind: ToastKind) {
        dioxus_logger::tracing::debug!("toast ({:?}): {}", kind, title);
        self.slot.set(Some(Toast {
            title,
            description,
            kind,
        }));
    }
}

pub fn use_toast() -> ToastHandle {
    let app_state_mut = use_context::<AppStateMut>();
    ToastHandle {
        slot: app_state_mut.toast,
    }
}
