use crate::db::NewSnippet;
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// Mirrors the width of the title column the form was designed around.
pub const MAX_TITLE_CHARS: usize = 100;
pub const MAX_EXPIRES_DAYS: u32 = 365;

/// Expiry choices offered by the create form, as (days, label).
pub const EXPIRY_CHOICES: [(u32, &str); 3] = [(365, "One Year"), (7, "One Week"), (1, "One Day")];

/// Raw `application/x-www-form-urlencoded` body of `POST /snippet/create`.
///
/// Every field defaults to empty so that missing fields surface as validation
/// errors next to the form instead of as an extractor rejection.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CreateSnippetForm {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub content: String,
    #[serde(default)]
    pub expires: String,
}

/// Per-field validation messages, keyed by form field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldErrors(BTreeMap<&'static str, &'static str>);

impl FieldErrors {
    pub fn get(&self, field: &str) -> Option<&'static str> {
        self.0.get(field).copied()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    fn add(&mut self, field: &'static str, message: &'static str) {
        self.0.entry(field).or_insert(message);
    }
}

impl CreateSnippetForm {
    /// Initial state of the blank form.
    pub fn blank() -> Self {
        Self {
            expires: MAX_EXPIRES_DAYS.to_string(),
            ..Default::default()
        }
    }

    /// Checks the submitted fields and converts them into an insert payload.
    pub fn validate(&self) -> Result<NewSnippet, FieldErrors> {
        let mut errors = FieldErrors::default();

        if self.title.trim().is_empty() {
            errors.add("title", "This field cannot be blank");
        } else if self.title.chars().count() > MAX_TITLE_CHARS {
            errors.add("title", "This field cannot be more than 100 characters long");
        }

        if self.content.trim().is_empty() {
            errors.add("content", "This field cannot be blank");
        }

        let expires_in_days = match self.expires.trim().parse::<u32>() {
            Ok(days) if (1..=MAX_EXPIRES_DAYS).contains(&days) => Some(days),
            _ => {
                errors.add("expires", "This field must be between 1 and 365 days");
                None
            }
        };

        match expires_in_days {
            Some(expires_in_days) if errors.is_empty() => Ok(NewSnippet {
                title: self.title.clone(),
                content: self.content.clone(),
                expires_in_days,
            }),
            _ => Err(errors),
        }
    }
}
