//! Validated-form engine.
//!
//! Fields are dynamic: they register on mount, unregister on unmount, and
//! re-registration of the same name wins over the previous one. The form is
//! therefore an explicit ownership map from field name to value + validator
//! rather than a fixed struct, which keeps it agnostic to field type and to
//! the entity being edited.
//!
//! Submission validates every registered field regardless of touched state,
//! marks invalid ones touched so their messages render, and only hands the
//! assembled values back when all fields pass. The caller wires the values
//! into a transaction's create/update; the form never resets itself on
//! success — the owning view closes or resets it once the bound request
//! status reaches `Success`.

mod validators;

pub use validators::{max_length, non_negative_number, required};

use std::collections::HashMap;

use serde_json::{Map, Value};

/// Per-field validation predicate. Returns the message to render on failure.
pub type Validator = Box<dyn Fn(&Value) -> Result<(), String> + Send + Sync>;

/// Lifecycle of one field: `Pristine → Touched → {Valid, Invalid}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldState {
    /// Registered, never changed or blurred.
    Pristine,
    /// Changed or blurred, not validated yet.
    Touched,
    Valid,
    Invalid,
}

struct Field {
    value: Value,
    initial: Value,
    validator: Option<Validator>,
    touched: bool,
    validated: bool,
    error: Option<String>,
}

impl Field {
    fn validate(&mut self) {
        self.validated = true;
        self.error = match &self.validator {
            Some(validator) => validator(&self.value).err(),
            None => None,
        };
    }

    fn state(&self) -> FieldState {
        if !self.touched {
            FieldState::Pristine
        } else if !self.validated {
            FieldState::Touched
        } else if self.error.is_some() {
            FieldState::Invalid
        } else {
            FieldState::Valid
        }
    }
}

/// A submission was blocked by failing fields. Field-level messages only;
/// this never propagates as a request error.
#[derive(Debug, Clone, PartialEq)]
pub struct InvalidFields {
    /// Message per failing field name.
    pub errors: HashMap<String, String>,
}

impl std::fmt::Display for InvalidFields {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} field(s) failed validation", self.errors.len())
    }
}

impl std::error::Error for InvalidFields {}

/// Dynamic validated form.
///
/// The container's lifetime is the form's lifetime: it is created empty on
/// mount and dropped wholesale on unmount, so there is no explicit reset.
#[derive(Default)]
pub struct Form {
    fields: HashMap<String, Field>,
}

impl Form {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a field. Re-registering an existing name replaces it
    /// entirely (last registration wins).
    pub fn register(
        &mut self,
        name: impl Into<String>,
        validator: Option<Validator>,
        initial: Value,
    ) {
        self.fields.insert(
            name.into(),
            Field {
                value: initial.clone(),
                initial,
                validator,
                touched: false,
                validated: false,
                error: None,
            },
        );
    }

    /// Remove a field (unmount). Absent names are a no-op.
    pub fn unregister(&mut self, name: &str) {
        self.fields.remove(name);
    }

    /// Set a field's value, marking it touched and re-validating only that
    /// field. Unregistered names are ignored.
    pub fn set_value(&mut self, name: &str, value: Value) {
        let Some(field) = self.fields.get_mut(name) else {
            tracing::debug!(field = name, "set_value on unregistered field");
            return;
        };
        field.value = value;
        field.touched = true;
        field.validate();
    }

    /// Mark a field touched without changing it (blur).
    pub fn touch(&mut self, name: &str) {
        if let Some(field) = self.fields.get_mut(name) {
            field.touched = true;
        }
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.fields.get(name).map(|f| &f.value)
    }

    pub fn field_state(&self, name: &str) -> Option<FieldState> {
        self.fields.get(name).map(|f| f.state())
    }

    /// The error message for one field, if it failed its last validation.
    pub fn error(&self, name: &str) -> Option<&str> {
        self.fields.get(name).and_then(|f| f.error.as_deref())
    }

    /// True when any field's value differs from its registered initial.
    pub fn is_dirty(&self) -> bool {
        self.fields.values().any(|f| f.value != f.initial)
    }

    /// Current values of all registered fields.
    pub fn values(&self) -> Map<String, Value> {
        self.fields
            .iter()
            .map(|(name, field)| (name.clone(), field.value.clone()))
            .collect()
    }

    /// Validate everything and assemble the values for submission.
    ///
    /// On failure, every invalid field is marked touched so its message
    /// renders, all values are preserved, and no handler should run.
    pub fn submit(&mut self) -> Result<Map<String, Value>, InvalidFields> {
        let mut errors = HashMap::new();
        for (name, field) in self.fields.iter_mut() {
            field.validate();
            if let Some(message) = &field.error {
                field.touched = true;
                errors.insert(name.clone(), message.clone());
            }
        }
        if !errors.is_empty() {
            return Err(InvalidFields { errors });
        }
        Ok(self.values())
    }
}
