use serde::{Deserialize, Serialize};

use crate::Identifiable;

/// An employee record. Fields are fixed at construction; an update stores a
/// new instance carrying the same id.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    id: i64,
    name: String,
    role: String,
    salary: f64,
}

impl Employee {
    pub fn new(id: i64, name: impl Into<String>, role: impl Into<String>, salary: f64) -> Self {
        Self {
            id,
            name: name.into(),
            role: role.into(),
            salary,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn role(&self) -> &str {
        &self.role
    }

    pub fn salary(&self) -> f64 {
        self.salary
    }
}

impl Identifiable for Employee {
    fn id(&self) -> i64 {
        self.id
    }
}
