//! Shared fixtures for the workspace-level test suites.

use std::sync::Arc;

use entity::Employee;
use platform_db::InMemoryRepository;
use products_hr::EmployeeService;

pub type TestService = EmployeeService<InMemoryRepository<Employee>>;

/// Service over an empty store handing out ids from 1.
pub fn fresh_service() -> TestService {
    EmployeeService::new(Arc::new(InMemoryRepository::with_first_id(1)))
}

/// Add a record with a freshly allocated id and return that id.
pub fn hire(service: &TestService, name: &str, role: &str) -> i64 {
    let id = service.next_id().unwrap();
    service
        .add(Employee::new(id, name, role, 0.0))
        .unwrap_or_else(|err| panic!("could not add {name}: {err}"));
    id
}
