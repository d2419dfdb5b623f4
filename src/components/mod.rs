mod alert_dialog;
mod event_log;
mod header;
mod preset_selector;

pub use alert_dialog::AlertDialog;
pub use event_log::EventLog;
pub use header::Header;
pub use preset_selector::PresetSelector;
