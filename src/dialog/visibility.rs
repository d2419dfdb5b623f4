use dioxus::prelude::*;
use tracing::debug;

/// Shown/hidden flag owned by a dialog. Starts hidden.
#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub struct DialogVisibility {
    visible: bool,
}

impl DialogVisibility {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Returns true if the flag changed.
    pub fn set_visible(&mut self, visible: bool) -> bool {
        let changed = self.visible != visible;
        self.visible = visible;
        changed
    }
}

/// Host-facing handle to a dialog's visibility.
///
/// The host can only request transitions; the flag itself stays private to
/// the handle. Dismiss gestures go through [`DialogHandle::request_close`],
/// which is the same transition as `set_modal_visible(false)`.
#[derive(Clone, Copy, PartialEq)]
pub struct DialogHandle {
    visibility: Signal<DialogVisibility>,
}

impl DialogHandle {
    pub fn is_visible(&self) -> bool {
        self.visibility.read().is_visible()
    }

    pub fn set_modal_visible(self, visible: bool) {
        let mut visibility = self.visibility;
        if visibility.write().set_visible(visible) {
            debug!(visible, "Dialog visibility changed");
        }
    }

    pub fn request_close(self) {
        debug!("Dialog dismissed");
        self.set_modal_visible(false);
    }
}

/// Creates the visibility state for one dialog instance, initially hidden.
pub fn use_dialog() -> DialogHandle {
    use_dialog_with(false)
}

pub fn use_dialog_with(visible: bool) -> DialogHandle {
    let visibility = use_signal(|| DialogVisibility { visible });
    DialogHandle { visibility }
}
