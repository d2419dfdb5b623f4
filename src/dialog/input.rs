use crate::dialog::text::clamp_chars;

/// Text held by the dialog's single-line entry field.
#[derive(Clone, PartialEq, Eq, Default, Debug)]
pub struct InputField {
    value: String,
    max_length: Option<usize>,
}

impl InputField {
    pub fn new(max_length: Option<usize>) -> Self {
        Self {
            value: String::new(),
            max_length,
        }
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    /// Applies the raw field contents after an edit, enforcing the length bound.
    /// Returns the full new value when it differs from the held one.
    pub fn apply(&mut self, raw: &str) -> Option<String> {
        let next = clamp_chars(raw, self.max_length);
        if next == self.value {
            return None;
        }
        self.value = next;
        Some(self.value.clone())
    }
}
