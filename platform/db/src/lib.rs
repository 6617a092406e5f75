//! Storage primitives. A single in-memory store backs the suite today.

mod memory;

use entity::Identifiable;
use thiserror::Error;

pub use memory::InMemoryRepository;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    #[error("record {0} already exists")]
    DuplicateId(i64),
    #[error("id sequence exhausted")]
    IdsExhausted,
    #[error("store lock poisoned")]
    LockPoisoned,
}

pub type DbResult<T> = Result<T, DbError>;

/// Keyed CRUD over records carrying an integer id.
pub trait Repository<T: Identifiable>: Send + Sync {
    /// Reserve an id that no other caller of this store will receive.
    fn next_id(&self) -> DbResult<i64>;

    fn create(&self, entity: T) -> DbResult<()>;

    /// Missing ids yield `None`.
    fn read(&self, id: i64) -> DbResult<Option<T>>;

    /// Replace the stored record with the same id. Returns `false` and stores
    /// nothing when the id is unknown.
    fn update(&self, entity: T) -> DbResult<bool>;

    /// Returns whether a record was removed; unknown ids are not an error.
    fn delete(&self, id: i64) -> DbResult<bool>;

    /// All records in insertion order.
    fn list_all(&self) -> DbResult<Vec<T>>;
}
