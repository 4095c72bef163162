//! Per-entity data access contract.
//!
//! | op | semantics |
//! |---|---|
//! | `find_all` | every row, unordered |
//! | `find_by_id` | `None` when absent |
//! | `save` | insert when the id is unset or unknown, full-row update otherwise |
//! | `delete_by_id` | no-op when absent |

use async_trait::async_trait;

use crate::domain::Record;
use crate::errors::ServiceError;

pub mod mock;
pub mod seaorm;

#[async_trait]
pub trait Repository<T: Record>: Send + Sync {
    async fn find_all(&self) -> Result<Vec<T>, ServiceError>;
    async fn find_by_id(&self, id: i32) -> Result<Option<T>, ServiceError>;
    async fn save(&self, entity: T) -> Result<T, ServiceError>;
    async fn delete_by_id(&self, id: i32) -> Result<(), ServiceError>;
}
