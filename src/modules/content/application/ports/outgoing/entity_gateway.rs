use async_trait::async_trait;
use serde::de::DeserializeOwned;
use serde::Serialize;
use uuid::Uuid;

/// Sort policy for a list call: one column, one direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ListOrder {
    pub column: &'static str,
    pub ascending: bool,
}

impl ListOrder {
    pub const fn ascending(column: &'static str) -> Self {
        Self {
            column,
            ascending: true,
        }
    }

    pub const fn descending(column: &'static str) -> Self {
        Self {
            column,
            ascending: false,
        }
    }
}

/// Errors that can come back from the remote store.
#[derive(Debug, Clone, thiserror::Error)]
pub enum GatewayError {
    #[error("Network problem occurred: {0}")]
    Network(String),

    #[error("{0}")]
    Store(String),
}

/// A record the store knows how to persist: a fixed table, the order the
/// admin list views use, and a stable identifier that upserts key on.
pub trait EntityRecord: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    const TABLE: &'static str;
    const ADMIN_ORDER: ListOrder;

    fn id(&self) -> Uuid;
}

/// Port for the remote persistence service, one instantiation per entity
/// type. Upsert is keyed on the record id and idempotent; the store is the
/// sole arbiter of write conflicts.
#[async_trait]
pub trait EntityGateway<T: EntityRecord>: Send + Sync {
    async fn list(&self, order: ListOrder) -> Result<Vec<T>, GatewayError>;

    async fn upsert(&self, record: &T) -> Result<(), GatewayError>;

    async fn delete(&self, id: Uuid) -> Result<(), GatewayError>;
}
