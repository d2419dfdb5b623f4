//! Pure derivations of the dialog's optional regions.
//!
//! Each function looks only at the configuration; the component lays the
//! results out in a fixed order.

use crate::dialog::text::{is_empty, non_empty};
use crate::dialog::types::{ContentType, DialogConfig};

pub fn derive_title(title: Option<&str>) -> Option<String> {
    non_empty(title).map(str::to_string)
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct InputSpec {
    pub placeholder: String,
    pub max_length: Option<usize>,
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub enum ContentRegion {
    Text(String),
    Input(InputSpec),
    Empty,
}

pub fn derive_content(config: &DialogConfig) -> ContentRegion {
    let content = config.content.clone().unwrap_or_default();
    match config.content_type {
        ContentType::Text => ContentRegion::Text(content),
        ContentType::Input => ContentRegion::Input(InputSpec {
            placeholder: content,
            max_length: config.input_max_length,
        }),
        ContentType::Unsupported => ContentRegion::Empty,
    }
}

#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonRole {
    Negative,
    Positive,
}

impl ButtonRole {
    pub fn as_str(&self) -> &'static str {
        match self {
            ButtonRole::Negative => "negative",
            ButtonRole::Positive => "positive",
        }
    }
}

#[derive(Clone, PartialEq, Eq, Debug)]
pub struct ActionButton {
    pub role: ButtonRole,
    pub label: String,
}

/// Buttons in left-to-right order. An empty row is still rendered.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct ActionRow {
    pub buttons: Vec<ActionButton>,
}

impl ActionRow {
    pub fn is_empty(&self) -> bool {
        self.buttons.is_empty()
    }
}

pub fn derive_actions(config: &DialogConfig) -> ActionRow {
    let candidates = [
        (ButtonRole::Negative, config.negative_label.as_deref()),
        (ButtonRole::Positive, config.positive_label.as_deref()),
    ];

    let buttons = candidates
        .into_iter()
        .filter(|(_, label)| !is_empty(*label))
        .map(|(role, label)| ActionButton {
            role,
            label: label.unwrap_or_default().to_string(),
        })
        .collect();

    ActionRow { buttons }
}

/// What pressing a button does: the supplied handler, or the default dismiss.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum ButtonAction<H> {
    Callback(H),
    Dismiss,
}

impl<H> ButtonAction<H> {
    pub fn resolve(handler: Option<H>) -> Self {
        match handler {
            Some(handler) => ButtonAction::Callback(handler),
            None => ButtonAction::Dismiss,
        }
    }

    /// Runs exactly one of `invoke` or `dismiss`.
    pub fn fire(&self, invoke: impl FnOnce(&H), dismiss: impl FnOnce()) {
        match self {
            ButtonAction::Callback(handler) => invoke(handler),
            ButtonAction::Dismiss => dismiss(),
        }
    }
}
