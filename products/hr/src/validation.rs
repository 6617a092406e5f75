use std::fmt;

use thiserror::Error;

/// Upper bound, in characters, for name and role.
pub const MAX_FIELD_LENGTH: usize = 50;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Name,
    Role,
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Field::Name => "name",
            Field::Role => "role",
        })
    }
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("{field} is required")]
    Required { field: Field },
    #[error("the limit of {max} characters was exceeded for name or role")]
    TooLong { max: usize },
}

/// Required checks run before the length check, name before role. Both
/// checks apply to the trimmed text, which is returned on success.
pub fn validate<'a>(name: &'a str, role: &'a str) -> Result<(&'a str, &'a str), ValidationError> {
    let name = name.trim();
    let role = role.trim();
    if name.is_empty() {
        return Err(ValidationError::Required { field: Field::Name });
    }
    if role.is_empty() {
        return Err(ValidationError::Required { field: Field::Role });
    }
    if exceeds_limit(name) || exceeds_limit(role) {
        return Err(ValidationError::TooLong {
            max: MAX_FIELD_LENGTH,
        });
    }
    Ok((name, role))
}

fn exceeds_limit(value: &str) -> bool {
    value.chars().count() > MAX_FIELD_LENGTH
}
