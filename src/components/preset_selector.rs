use dioxus::prelude::*;

#[component]
pub fn PresetSelector(
    presets: Vec<String>,
    selected: Option<String>,
    on_change: EventHandler<String>,
    on_open: EventHandler<()>,
) -> Element {
    let has_presets = !presets.is_empty();
    let selected = selected.unwrap_or_default();

    rsx! {
        div { class: "section",
            div { class: "section-title", "Dialog Preset" }
            div { class: "form-group",
                label { r#for: "preset-select", "Select a configuration" }
                select {
                    id: "preset-select",
                    disabled: !has_presets,
                    value: "{selected}",
                    onchange: move |evt: Event<FormData>| on_change.call(evt.value()),
                    if !has_presets {
                        option { value: "", disabled: true, selected: true, "(No presets)" }
                    }
                    for name in presets {
                        option {
                            value: "{name}",
                            selected: name == selected,
                            "{name}"
                        }
                    }
                }
            }
            div { class: "button-group",
                button {
                    class: "primary",
                    disabled: !has_presets,
                    onclick: move |_| on_open.call(()),
                    "Show Dialog"
                }
            }
        }
    }
}
