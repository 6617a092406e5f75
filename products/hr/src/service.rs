use std::sync::Arc;

use entity::{Employee, Identifiable};
use platform_api::ApiError;
use platform_db::{DbError, Repository};
use thiserror::Error;
use tracing::{info, instrument, warn};

use crate::validation::{ValidationError, validate};

/// Employees seeded into an empty store at startup.
pub const DEMO_ROSTER: &[(&str, &str, f64)] = &[
    ("João Silva", "Desenvolvedor", 8500.0),
    ("Clara Oliveira", "Analista de QA", 6200.0),
];

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("employee {0} not found")]
    NotFound(i64),
    #[error(transparent)]
    Storage(#[from] DbError),
}

pub type ServiceResult<T> = Result<T, ServiceError>;

impl From<ServiceError> for ApiError {
    fn from(value: ServiceError) -> Self {
        match value {
            ServiceError::Validation(err) => ApiError::InvalidInput(err.to_string()),
            ServiceError::NotFound(_) => ApiError::NotFound("employee"),
            ServiceError::Storage(err) => anyhow::Error::from(err).into(),
        }
    }
}

/// Business rules in front of an employee repository.
pub struct EmployeeService<R> {
    repo: Arc<R>,
}

impl<R> Clone for EmployeeService<R> {
    fn clone(&self) -> Self {
        Self {
            repo: self.repo.clone(),
        }
    }
}

impl<R: Repository<Employee>> EmployeeService<R> {
    pub fn new(repo: Arc<R>) -> Self {
        Self { repo }
    }

    pub fn next_id(&self) -> ServiceResult<i64> {
        Ok(self.repo.next_id()?)
    }

    pub fn list_all(&self) -> ServiceResult<Vec<Employee>> {
        Ok(self.repo.list_all()?)
    }

    pub fn find_by_id(&self, id: i64) -> ServiceResult<Option<Employee>> {
        Ok(self.repo.read(id)?)
    }

    #[instrument(name = "hr.add", skip_all, fields(id = employee.id()))]
    pub fn add(&self, employee: Employee) -> ServiceResult<()> {
        let employee = normalized(&employee).inspect_err(|err| {
            warn!(%err, "rejected new employee");
        })?;
        self.repo.create(employee)?;
        info!("employee added");
        Ok(())
    }

    #[instrument(name = "hr.update", skip_all, fields(id = employee.id()))]
    pub fn update(&self, employee: Employee) -> ServiceResult<()> {
        let employee = normalized(&employee).inspect_err(|err| {
            warn!(%err, "rejected employee update");
        })?;
        let id = employee.id();
        if !self.repo.update(employee)? {
            return Err(ServiceError::NotFound(id));
        }
        info!("employee updated");
        Ok(())
    }

    #[instrument(name = "hr.delete", skip(self))]
    pub fn delete(&self, id: i64) -> ServiceResult<()> {
        if self.repo.delete(id)? {
            info!("employee deleted");
        }
        Ok(())
    }

    /// Insert [`DEMO_ROSTER`] when the store holds no employees. Returns how
    /// many records were added.
    pub fn seed_demo_data(&self) -> ServiceResult<usize> {
        if !self.repo.list_all()?.is_empty() {
            return Ok(0);
        }
        for (name, role, salary) in DEMO_ROSTER {
            self.add(Employee::new(self.next_id()?, *name, *role, *salary))?;
        }
        Ok(DEMO_ROSTER.len())
    }
}

/// Copy of `employee` carrying the trimmed name and role, if they validate.
fn normalized(employee: &Employee) -> Result<Employee, ValidationError> {
    let (name, role) = validate(employee.name(), employee.role())?;
    Ok(Employee::new(employee.id(), name, role, employee.salary()))
}
