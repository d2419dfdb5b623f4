use dioxus::prelude::*;
use dioxus_free_icons::Icon;
use dioxus_free_icons::icons::md_action_icons::MdInfo;

#[component]
pub fn Header(preset_count: usize) -> Element {
    let subtitle = match preset_count {
        0 => "No presets configured".to_string(),
        1 => "1 preset".to_string(),
        n => format!("{n} presets"),
    };

    rsx! {
        div { class: "header",
            Icon {
                width: 28,
                height: 28,
                icon: MdInfo
            }
            div { class: "header-text",
                h1 { "Alert Dialog" }
                div { class: "header-subtitle", "{subtitle} · Esc or tap outside to dismiss" }
            }
        }
    }
}
