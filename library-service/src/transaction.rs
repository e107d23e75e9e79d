use std::sync::Arc;

use tokio::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

/// Serializes catalog operations against the entity store.
///
/// Commands hold the write side for their whole run and queries hold the
/// read side, so readers never see a half-applied reconciliation.
#[derive(Debug, Clone, Default)]
pub struct TransactionGate {
    lock: Arc<RwLock<()>>,
}

impl TransactionGate {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn read(&self) -> RwLockReadGuard<'_, ()> {
        self.lock.read().await
    }

    pub async fn write(&self) -> RwLockWriteGuard<'_, ()> {
        self.lock.write().await
    }
}
