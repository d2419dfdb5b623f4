use crate::dialog::{
    ActionButton, ButtonAction, ButtonRole, ContentRegion, DialogConfig, DialogHandle, InputField,
    InputSpec, Theme, derive_actions, derive_content, derive_title,
};
use dioxus::prelude::*;
use tracing::debug;

/// Modal dialog with an optional title, a text or input content region and
/// up to two buttons.
///
/// Renders nothing while `handle` is hidden. A button without a handler
/// hides the dialog; a button with one only calls the handler.
#[component]
pub fn AlertDialog(
    handle: DialogHandle,
    config: DialogConfig,
    #[props(default)] theme: Theme,
    #[props(default)] on_content_change: Option<EventHandler<String>>,
    #[props(default)] on_positive: Option<EventHandler<()>>,
    #[props(default)] on_negative: Option<EventHandler<()>>,
) -> Element {
    if !handle.is_visible() {
        return rsx! {};
    }

    let title = derive_title(config.title.as_deref());
    let text_style = theme.text_style();
    let content = match derive_content(&config) {
        ContentRegion::Text(text) => rsx! {
            div { class: "dialog-content", style: "{text_style}", "{text}" }
        },
        ContentRegion::Input(spec) => rsx! {
            DialogInput { spec, theme: theme.clone(), on_change: on_content_change }
        },
        ContentRegion::Empty => rsx! {},
    };
    let actions = derive_actions(&config);
    let actions_class = if actions.is_empty() {
        "dialog-actions empty"
    } else {
        "dialog-actions"
    };
    let buttons: Vec<_> = actions
        .buttons
        .into_iter()
        .map(|button| {
            let handler = match button.role {
                ButtonRole::Negative => on_negative,
                ButtonRole::Positive => on_positive,
            };
            (button.role.as_str(), ButtonAction::resolve(handler), button)
        })
        .collect();

    let scrim_style = theme.scrim_style();
    let panel_style = theme.panel_style();
    let title_style = theme.title_style();
    let actions_style = theme.actions_style();

    rsx! {
        div {
            class: "dialog-scrim",
            style: "{scrim_style}",
            tabindex: "-1",
            onmounted: move |event| async move {
                let _ = event.data().set_focus(true).await;
            },
            onclick: move |_| handle.request_close(),
            onkeydown: move |evt: KeyboardEvent| {
                if is_dismiss_key(&evt.key()) {
                    handle.request_close();
                }
            },
            div {
                class: "dialog-panel",
                style: "{panel_style}",
                role: "dialog",
                aria_modal: "true",
                onclick: move |evt| evt.stop_propagation(),

                if let Some(title) = title {
                    div { class: "dialog-title", style: "{title_style}", "{title}" }
                }

                {content}

                div { class: actions_class, style: "{actions_style}",
                    for (key, action, button) in buttons {
                        DialogButton {
                            key: "{key}",
                            button,
                            action,
                            handle,
                            theme: theme.clone(),
                        }
                    }
                }
            }
        }
    }
}

fn is_dismiss_key(key: &Key) -> bool {
    *key == Key::Escape
}

fn press(action: &ButtonAction<EventHandler<()>>, handle: DialogHandle) {
    action.fire(|handler| handler.call(()), || handle.request_close());
}

#[component]
fn DialogInput(spec: InputSpec, theme: Theme, on_change: Option<EventHandler<String>>) -> Element {
    let max_length = spec.max_length;
    let mut field = use_signal(|| InputField::new(max_length));
    let value = field.read().value().to_string();
    let input_style = theme.input_style();

    rsx! {
        input {
            r#type: "text",
            class: "dialog-input",
            style: "{input_style}",
            placeholder: "{spec.placeholder}",
            maxlength: max_length.map(|m| m.to_string()),
            autocomplete: "off",
            value: "{value}",
            oninput: move |evt: Event<FormData>| {
                let changed = field.write().apply(&evt.value());
                if let (Some(value), Some(on_change)) = (changed, on_change) {
                    on_change.call(value);
                }
            },
        }
    }
}

#[component]
fn DialogButton(
    button: ActionButton,
    action: ButtonAction<EventHandler<()>>,
    handle: DialogHandle,
    theme: Theme,
) -> Element {
    let role = button.role;
    let (class, style) = match role {
        ButtonRole::Negative => ("dialog-button negative", theme.negative_button_style()),
        ButtonRole::Positive => ("dialog-button positive", theme.positive_button_style()),
    };

    rsx! {
        button {
            class,
            style: "{style}",
            onclick: move |_| {
                debug!(role = role.as_str(), "Dialog button pressed");
                press(&action, handle);
            },
            "{button.label}"
        }
    }
}
