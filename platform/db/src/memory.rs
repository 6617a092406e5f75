use std::sync::{
    Mutex, MutexGuard,
    atomic::{AtomicI64, Ordering},
};

use entity::Identifiable;
use tracing::debug;

use crate::{DbError, DbResult, Repository};

const DEFAULT_FIRST_ID: i64 = 1000;

/// Process-wide store guarded by one mutex. Records keep insertion order;
/// updates replace in place.
pub struct InMemoryRepository<T> {
    records: Mutex<Vec<T>>,
    next_id: AtomicI64,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self::with_first_id(DEFAULT_FIRST_ID)
    }
}

impl<T> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_first_id(first_id: i64) -> Self {
        Self {
            records: Mutex::new(Vec::new()),
            next_id: AtomicI64::new(first_id),
        }
    }

    fn records(&self) -> DbResult<MutexGuard<'_, Vec<T>>> {
        self.records.lock().map_err(|_| DbError::LockPoisoned)
    }
}

impl<T> Repository<T> for InMemoryRepository<T>
where
    T: Identifiable + Clone + Send,
{
    fn next_id(&self) -> DbResult<i64> {
        self.next_id
            .fetch_update(Ordering::Relaxed, Ordering::Relaxed, |id| id.checked_add(1))
            .map_err(|_| DbError::IdsExhausted)
    }

    fn create(&self, entity: T) -> DbResult<()> {
        let mut records = self.records()?;
        let id = entity.id();
        if records.iter().any(|record| record.id() == id) {
            return Err(DbError::DuplicateId(id));
        }
        records.push(entity);
        debug!(id, total = records.len(), "record created");
        Ok(())
    }

    fn read(&self, id: i64) -> DbResult<Option<T>> {
        let records = self.records()?;
        Ok(records.iter().find(|record| record.id() == id).cloned())
    }

    fn update(&self, entity: T) -> DbResult<bool> {
        let mut records = self.records()?;
        let id = entity.id();
        match records.iter_mut().find(|record| record.id() == id) {
            Some(slot) => {
                *slot = entity;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    fn delete(&self, id: i64) -> DbResult<bool> {
        let mut records = self.records()?;
        let before = records.len();
        records.retain(|record| record.id() != id);
        Ok(records.len() != before)
    }

    fn list_all(&self) -> DbResult<Vec<T>> {
        Ok(self.records()?.clone())
    }
}
