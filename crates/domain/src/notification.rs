// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name to error messages, in first-insertion order of the fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ErrorFields {
    entries: Vec<(String, Vec<String>)>,
}

impl ErrorFields {
    /// Creates an empty mapping.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Returns the messages recorded for `field`, if the field is present.
    #[must_use]
    pub fn get(&self, field: &str) -> Option<&[String]> {
        self.entries
            .iter()
            .find(|(key, _)| key == field)
            .map(|(_, messages)| messages.as_slice())
    }

    /// Iterates over `(field, messages)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.entries
            .iter()
            .map(|(key, messages)| (key.as_str(), messages.as_slice()))
    }

    /// Returns the number of fields present.
    #[must_use]
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns whether no field is present.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    fn push(&mut self, field: &str, message: String) {
        if let Some((_, messages)) = self.entries.iter_mut().find(|(key, _)| key == field) {
            messages.push(message);
        } else {
            self.entries.push((field.to_string(), vec![message]));
        }
    }
}

impl Serialize for ErrorFields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (field, messages) in &self.entries {
            map.serialize_entry(field, messages)?;
        }
        map.end()
    }
}

/// Accumulates validation errors keyed by field name.
///
/// A notification lives for one validation attempt and is then discarded.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Notification {
    errors: ErrorFields,
}

impl Notification {
    /// Creates an empty notification.
    #[must_use]
    pub const fn new() -> Self {
        Self {
            errors: ErrorFields::new(),
        }
    }

    /// Appends `message` to the messages recorded for `field`.
    pub fn add_error(&mut self, field: &str, message: impl Into<String>) {
        self.errors.push(field, message.into());
    }

    /// Returns whether any field has at least one message.
    #[must_use]
    pub fn has_errors(&self) -> bool {
        self.errors.iter().any(|(_, messages)| !messages.is_empty())
    }

    /// Returns the full field to messages mapping.
    #[must_use]
    pub const fn errors(&self) -> &ErrorFields {
        &self.errors
    }

    /// Consumes the notification, returning its mapping.
    #[must_use]
    pub fn into_errors(self) -> ErrorFields {
        self.errors
    }

    /// Renders the errors as `field1:msg1,msg2;field2:msg3;`.
    ///
    /// Fields are rendered in insertion order; fields without messages are skipped.
    #[must_use]
    pub fn errors_msg(&self) -> String {
        self.errors
            .iter()
            .filter(|(_, messages)| !messages.is_empty())
            .map(|(field, messages)| format!("{field}:{};", messages.join(",")))
            .collect()
    }
}
