use crate::dialog::theme::Theme;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

#[derive(Clone, Copy, PartialEq, Eq, Default, Debug)]
pub enum ContentType {
    #[default]
    Text,
    Input,
    /// Any selector other than `text` or `input`. Renders an empty content region.
    Unsupported,
}

impl ContentType {
    pub fn from_selector(selector: Option<&str>) -> Self {
        match selector {
            None | Some("") | Some("text") => ContentType::Text,
            Some("input") => ContentType::Input,
            Some(_) => ContentType::Unsupported,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::Text => "text",
            ContentType::Input => "input",
            ContentType::Unsupported => "unsupported",
        }
    }
}

impl Serialize for ContentType {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// Accepts `null`, `""` and unknown selectors the same way `from_selector` does.
impl<'de> Deserialize<'de> for ContentType {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let selector = Option::<String>::deserialize(deserializer)?;
        Ok(ContentType::from_selector(selector.as_deref()))
    }
}

/// Host-supplied dialog configuration. Callbacks are passed to the
/// component separately since they are not data.
#[derive(Clone, PartialEq, Serialize, Deserialize, Default, Debug)]
#[serde(default)]
pub struct DialogConfig {
    pub title: Option<String>,
    pub content: Option<String>,
    pub content_type: ContentType,
    pub input_max_length: Option<usize>,
    pub positive_label: Option<String>,
    pub negative_label: Option<String>,
}

impl DialogConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    pub fn with_content_type(mut self, content_type: ContentType) -> Self {
        self.content_type = content_type;
        self
    }

    pub fn with_input_max_length(mut self, max_length: usize) -> Self {
        self.input_max_length = Some(max_length);
        self
    }

    pub fn with_positive(mut self, label: impl Into<String>) -> Self {
        self.positive_label = Some(label.into());
        self
    }

    pub fn with_negative(mut self, label: impl Into<String>) -> Self {
        self.negative_label = Some(label.into());
        self
    }
}

/// A named dialog configuration shown by the demo host.
#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct DialogPreset {
    pub name: String,
    #[serde(default)]
    pub dialog: DialogConfig,
    /// When set, the host handles the positive button instead of the default dismiss.
    #[serde(default)]
    pub handle_positive: bool,
    #[serde(default)]
    pub handle_negative: bool,
}

impl DialogPreset {
    pub fn new(name: impl Into<String>, dialog: DialogConfig) -> Self {
        Self {
            name: name.into(),
            dialog,
            handle_positive: false,
            handle_negative: false,
        }
    }

    pub fn handling_positive(mut self) -> Self {
        self.handle_positive = true;
        self
    }

    pub fn handling_negative(mut self) -> Self {
        self.handle_negative = true;
        self
    }

    pub fn builtin() -> Vec<DialogPreset> {
        vec![
            DialogPreset::new(
                "Delete confirmation",
                DialogConfig::new()
                    .with_title("Delete item?")
                    .with_negative("Cancel")
                    .with_positive("Delete"),
            )
            .handling_positive(),
            DialogPreset::new(
                "Name input",
                DialogConfig::new()
                    .with_title("Rename")
                    .with_content_type(ContentType::Input)
                    .with_content("Enter name")
                    .with_input_max_length(5)
                    .with_negative("Cancel")
                    .with_positive("Save"),
            )
            .handling_negative(),
            DialogPreset::new("Notice", DialogConfig::new().with_positive("OK"))
                .handling_positive(),
        ]
    }
}

#[derive(Clone, PartialEq, Serialize, Deserialize, Debug)]
pub struct AppConfig {
    #[serde(default)]
    pub theme: Theme,
    #[serde(default = "DialogPreset::builtin")]
    pub presets: Vec<DialogPreset>,
}

impl AppConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn find_preset(&self, name: &str) -> Option<&DialogPreset> {
        self.presets.iter().find(|p| p.name == name)
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            theme: Theme::default(),
            presets: DialogPreset::builtin(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_content_type_from_selector() {
        assert_eq!(ContentType::from_selector(None), ContentType::Text);
        assert_eq!(ContentType::from_selector(Some("")), ContentType::Text);
        assert_eq!(ContentType::from_selector(Some("text")), ContentType::Text);
        assert_eq!(ContentType::from_selector(Some("input")), ContentType::Input);
        assert_eq!(
            ContentType::from_selector(Some("checkbox")),
            ContentType::Unsupported
        );
        assert_eq!(
            ContentType::from_selector(Some("INPUT")),
            ContentType::Unsupported
        );
    }

    #[test]
    fn test_config_defaults() {
        let config = DialogConfig::new();
        assert_eq!(config.title, None);
        assert_eq!(config.content, None);
        assert_eq!(config.content_type, ContentType::Text);
        assert_eq!(config.input_max_length, None);
        assert_eq!(config.positive_label, None);
        assert_eq!(config.negative_label, None);
    }

    #[test]
    fn test_config_deserialize_partial() {
        let config: DialogConfig = serde_json::from_str(
            r#"{ "content_type": "input", "content": "Enter name", "input_max_length": 5 }"#,
        )
        .unwrap();
        assert_eq!(config.content_type, ContentType::Input);
        assert_eq!(config.content.as_deref(), Some("Enter name"));
        assert_eq!(config.input_max_length, Some(5));
        assert_eq!(config.title, None);
    }

    #[test]
    fn test_config_deserialize_unknown_content_type() {
        let config: DialogConfig =
            serde_json::from_str(r#"{ "content_type": "slider" }"#).unwrap();
        assert_eq!(config.content_type, ContentType::Unsupported);
    }

    #[test]
    fn test_config_deserialize_empty_content_type_is_text() {
        let config: DialogConfig =
            serde_json::from_str(r#"{ "content_type": "", "content": "hi" }"#).unwrap();
        assert_eq!(config.content_type, ContentType::Text);
        assert_eq!(config.content.as_deref(), Some("hi"));
    }

    #[test]
    fn test_config_deserialize_null_content_type_is_text() {
        let config: DialogConfig =
            serde_json::from_str(r#"{ "content_type": null, "content": "hi" }"#).unwrap();
        assert_eq!(config.content_type, ContentType::Text);
    }

    #[test]
    fn test_content_type_serializes_as_selector() {
        for content_type in [
            ContentType::Text,
            ContentType::Input,
            ContentType::Unsupported,
        ] {
            let json = serde_json::to_string(&content_type).unwrap();
            assert_eq!(json, format!("\"{}\"", content_type.as_str()));
            let parsed: ContentType = serde_json::from_str(&json).unwrap();
            assert_eq!(parsed, content_type);
        }
    }

    #[test]
    fn test_zero_max_length_is_kept() {
        let config: DialogConfig = serde_json::from_str(r#"{ "input_max_length": 0 }"#).unwrap();
        assert_eq!(config.input_max_length, Some(0));
    }

    #[test]
    fn test_app_config_missing_presets_uses_builtin() {
        let config: AppConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config.presets, DialogPreset::builtin());
        assert!(config.find_preset("Notice").is_some());
        assert!(config.find_preset("Missing").is_none());
    }
}
