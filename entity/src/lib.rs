//! Domain records shared by the storage layer and the HR product.

pub mod employees;

pub use employees::Employee;

/// Records addressable by an integer key.
pub trait Identifiable {
    fn id(&self) -> i64;
}
