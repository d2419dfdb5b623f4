use crate::components::*;
use crate::dialog::use_dialog;
use crate::state::{AppState, Message};
use dioxus::prelude::*;
use tracing::info;

#[allow(non_snake_case)]
pub fn App() -> Element {
    let initial_state = use_context::<AppState>();
    let mut state = use_signal(move || initial_state);
    let dialog = use_dialog();

    let on_preset_change = move |name: String| {
        let mut write_state = state.write();
        write_state.clear_message();
        if !write_state.select_preset(&name) {
            write_state.set_message(Message::error(format!("Unknown preset: {}", name)));
        }
    };

    let on_open = move |_| {
        let name = state.read().active_preset().map(|p| p.name.clone());
        if let Some(name) = name {
            info!(preset = %name, "Showing dialog");
            state.write().clear_message();
            dialog.set_modal_visible(true);
        }
    };

    let (preset, theme, names, selected) = {
        let read_state = state.read();
        (
            read_state.active_preset().cloned(),
            read_state.config.theme.clone(),
            read_state.preset_names(),
            read_state.active_preset.clone(),
        )
    };

    let preset_count = names.len();

    let on_content_change: Option<EventHandler<String>> =
        Some(EventHandler::new(move |value: String| {
            state.write().push_event(format!("Input changed: \"{}\"", value));
        }));

    let on_positive: Option<EventHandler<()>> = preset
        .as_ref()
        .filter(|p| p.handle_positive)
        .map(move |p| {
            let name = p.name.clone();
            EventHandler::new(move |_: ()| {
                {
                    let mut write_state = state.write();
                    write_state.push_event(format!("{}: positive handled by host", name));
                    write_state.set_message(Message::success(format!("{} confirmed", name)));
                }
                dialog.set_modal_visible(false);
            })
        });

    let on_negative: Option<EventHandler<()>> = preset
        .as_ref()
        .filter(|p| p.handle_negative)
        .map(move |p| {
            let name = p.name.clone();
            EventHandler::new(move |_: ()| {
                state
                    .write()
                    .push_event(format!("{}: negative handled by host", name));
                dialog.set_modal_visible(false);
            })
        });

    rsx! {
        style { {include_str!("../assets/main.css")} }
        div { class: "app-container",
            Header { preset_count: preset_count }
            div { class: "content",
                PresetSelector {
                    presets: names,
                    selected: selected,
                    on_change: on_preset_change,
                    on_open: on_open
                }
            }
            EventLog { state: state }
            if let Some(preset) = preset {
                AlertDialog {
                    key: "{preset.name}",
                    handle: dialog,
                    config: preset.dialog,
                    theme: theme,
                    on_content_change: on_content_change,
                    on_positive: on_positive,
                    on_negative: on_negative
                }
            }
        }
    }
}
