use std::{collections::BTreeMap, fmt};

use thiserror::Error;

use super::NewProject;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    Name,
    Description,
}

impl Field {
    pub fn key(self) -> &'static str {
        match self {
            Field::Name => "name",
            Field::Description => "description",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum FieldError {
    #[error("El nombre es requerido")]
    NameRequired,
    #[error("La descripción es requerida")]
    DescriptionRequired,
}

pub type FormErrors = BTreeMap<Field, FieldError>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("{} invalid field(s): {}", .0.len(), keys(.0))]
pub struct ValidationErrors(pub FormErrors);

fn keys(errors: &FormErrors) -> String {
    errors
        .keys()
        .map(|field| field.key())
        .collect::<Vec<_>>()
        .join(", ")
}

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&FieldError> {
        self.0.get(&field)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.0.keys().copied()
    }
}

/// Input state of the project creation form.
#[derive(Debug, Clone, Default)]
pub struct FormState {
    name: String,
    description: String,
    errors: FormErrors,
}

impl FormState {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn set_name(&mut self, name: impl Into<String>) {
        self.name = name.into();
    }

    pub fn set_description(&mut self, description: impl Into<String>) {
        self.description = description.into();
    }

    pub fn errors(&self) -> &FormErrors {
        &self.errors
    }

    pub fn error(&self, field: Field) -> Option<&FieldError> {
        self.errors.get(&field)
    }

    /// Checks the current values without touching the displayed errors.
    pub fn validate(&self) -> FormErrors {
        let mut errors = FormErrors::new();
        if self.name.trim().is_empty() {
            errors.insert(Field::Name, FieldError::NameRequired);
        }
        if self.description.trim().is_empty() {
            errors.insert(Field::Description, FieldError::DescriptionRequired);
        }
        errors
    }

    /// Validates and, when both fields are filled, hands back the values as
    /// typed and clears the form. On failure the values are kept and the
    /// errors are stored for display.
    pub fn submit(&mut self) -> Result<NewProject, ValidationErrors> {
        self.errors = self.validate();
        if !self.errors.is_empty() {
            tracing::debug!(fields = %keys(&self.errors), "project form rejected");
            return Err(ValidationErrors(self.errors.clone()));
        }
        Ok(NewProject {
            name: std::mem::take(&mut self.name),
            description: std::mem::take(&mut self.description),
        })
    }
}
