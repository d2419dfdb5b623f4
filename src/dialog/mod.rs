pub mod config;
pub mod input;
pub mod render;
pub mod text;
pub mod theme;
pub mod types;
pub mod visibility;

pub use config::load_or_create_config;
pub use input::InputField;
pub use render::{
    ActionButton, ButtonAction, ButtonRole, ContentRegion, InputSpec, derive_actions,
    derive_content, derive_title,
};
pub use theme::Theme;
pub use types::{AppConfig, DialogConfig, DialogPreset};
pub use visibility::{DialogHandle, use_dialog};
#[cfg(test)]
pub use visibility::use_dialog_with;
