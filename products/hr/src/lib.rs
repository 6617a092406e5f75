//! HR vertical slice: employee records behind validation.

pub mod service;
pub mod validation;

pub use entity::Employee;
pub use service::{DEMO_ROSTER, EmployeeService, ServiceError, ServiceResult};
pub use validation::{Field, MAX_FIELD_LENGTH, ValidationError, validate};
