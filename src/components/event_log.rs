use crate::state::AppState;
use dioxus::prelude::*;

#[component]
pub fn EventLog(state: Signal<AppState>) -> Element {
    let events = state.read().events.clone();
    let message = state.read().message.clone();

    rsx! {
        div { class: "status-bar",
            if let Some(msg) = message {
                div {
                    class: if msg.is_error { "message error" } else { "message success" },
                    "{msg.text}"
                }
            }

            div { class: "status-label", "Events" }
            if events.is_empty() {
                div { class: "status-value empty", "No events yet" }
            }
            for event in events {
                div { key: "{event.seq}", class: "status-value", "{event.text}" }
            }
        }
    }
}
