//! In-memory repository for tests and local wiring without a database.

use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;

use super::Repository;
use crate::domain::Record;
use crate::errors::ServiceError;

#[derive(Default)]
struct Table<T> {
    rows: BTreeMap<i32, T>,
    last_id: i32,
}

/// Ids are handed out from 1 upwards and never reused.
pub struct MockRepository<T> {
    table: Mutex<Table<T>>,
}

impl<T> Default for MockRepository<T> {
    fn default() -> Self {
        Self { table: Mutex::new(Table { rows: BTreeMap::new(), last_id: 0 }) }
    }
}

impl<T: Record> MockRepository<T> {
    pub fn new() -> Self { Self::default() }

    /// Repository pre-populated through `save`.
    pub async fn with_rows(rows: impl IntoIterator<Item = T>) -> Result<Self, ServiceError> {
        let repo = Self::new();
        for row in rows {
            repo.save(row).await?;
        }
        Ok(repo)
    }

    pub async fn len(&self) -> usize { self.table.lock().await.rows.len() }

    pub async fn is_empty(&self) -> bool { self.len().await == 0 }
}

#[async_trait]
impl<T: Record> Repository<T> for MockRepository<T> {
    async fn find_all(&self) -> Result<Vec<T>, ServiceError> {
        Ok(self.table.lock().await.rows.values().cloned().collect())
    }

    async fn find_by_id(&self, id: i32) -> Result<Option<T>, ServiceError> {
        Ok(self.table.lock().await.rows.get(&id).cloned())
    }

    async fn save(&self, mut entity: T) -> Result<T, ServiceError> {
        let mut table = self.table.lock().await;
        let id = match entity.id() {
            Some(id) if table.rows.contains_key(&id) => id,
            _ => {
                table.last_id += 1;
                table.last_id
            }
        };
        entity.set_id(id);
        table.rows.insert(id, entity.clone());
        Ok(entity)
    }

    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError> {
        self.table.lock().await.rows.remove(&id);
        Ok(())
    }
}
