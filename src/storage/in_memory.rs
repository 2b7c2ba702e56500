//! In-memory implementation of EntityService
//!
//! One generic store covers every entity type. Records live in an
//! insertion-ordered map so `list` returns them in storage order, and
//! identifiers come from a monotonically increasing counter that is never
//! rewound — deleted ids are not reused.

use async_trait::async_trait;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};

use crate::core::entity::Resource;
use crate::core::error::{ApiResult, StorageError};
use crate::core::service::EntityService;

/// In-memory entity store
///
/// Thread-safe via `RwLock`; cheap to clone (the map is shared). Every
/// mutation happens entirely under the write lock, so an operation either
/// commits as a whole or leaves the map untouched.
#[derive(Clone)]
pub struct InMemoryStore<T: Resource> {
    inner: Arc<RwLock<StoreInner<T>>>,
}

struct StoreInner<T> {
    records: IndexMap<i64, T>,
    next_id: i64,
}

impl<T: Resource> InMemoryStore<T> {
    /// Create a new empty store; the first allocated identifier is 1
    pub fn new() -> Self {
        Self {
            inner: Arc::new(RwLock::new(StoreInner {
                records: IndexMap::new(),
                next_id: 1,
            })),
        }
    }

    fn read(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockReadGuard<'_, StoreInner<T>>, StorageError> {
        self.inner.read().map_err(|_| StorageError::LockPoisoned {
            entity_type: T::resource_name(),
            operation,
        })
    }

    fn write(
        &self,
        operation: &'static str,
    ) -> Result<std::sync::RwLockWriteGuard<'_, StoreInner<T>>, StorageError> {
        self.inner.write().map_err(|_| StorageError::LockPoisoned {
            entity_type: T::resource_name(),
            operation,
        })
    }
}

impl<T: Resource> Default for InMemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl<T: Resource> EntityService<T> for InMemoryStore<T> {
    async fn list(&self) -> ApiResult<Vec<T>> {
        let inner = self.read("list")?;
        Ok(inner.records.values().cloned().collect())
    }

    async fn get(&self, id: i64) -> ApiResult<Option<T>> {
        let inner = self.read("get")?;
        Ok(inner.records.get(&id).cloned())
    }

    async fn create(&self, input: T::Create) -> ApiResult<T> {
        let mut inner = self.write("create")?;
        let id = inner.next_id;
        inner.next_id += 1;

        let record = T::from_create(id, input);
        inner.records.insert(id, record.clone());

        Ok(record)
    }

    async fn update(&self, id: i64, patch: T::Patch) -> ApiResult<Option<T>> {
        let mut inner = self.write("update")?;
        match inner.records.get_mut(&id) {
            Some(record) => {
                record.apply_patch(patch);
                Ok(Some(record.clone()))
            }
            None => Ok(None),
        }
    }

    async fn delete(&self, id: i64) -> ApiResult<bool> {
        let mut inner = self.write("delete")?;
        // shift_remove keeps the remaining records in insertion order
        Ok(inner.records.shift_remove(&id).is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::entities::client::{Client, ClientPatch, NewClient};

    fn new_client(name: &str) -> NewClient {
        NewClient {
            name: name.to_string(),
            email: format!("{}@example.com", name.to_lowercase()),
            phone: "111".to_string(),
            address: "Rua 1".to_string(),
            created_at: None,
        }
    }

    #[tokio::test]
    async fn test_create_assigns_sequential_ids_from_one() {
        let store = InMemoryStore::<Client>::new();

        let first = store.create(new_client("Ana")).await.unwrap();
        let second = store.create(new_client("Bruno")).await.unwrap();

        assert_eq!(first.client_id, 1);
        assert_eq!(second.client_id, 2);
    }

    #[tokio::test]
    async fn test_create_then_get_returns_equal_record() {
        let store = InMemoryStore::<Client>::new();

        let created = store.create(new_client("Ana")).await.unwrap();
        let fetched = store.get(created.client_id).await.unwrap().unwrap();

        assert_eq!(fetched.name, created.name);
        assert_eq!(fetched.email, created.email);
        assert_eq!(fetched.created_at, created.created_at);
    }

    #[tokio::test]
    async fn test_get_unknown_id_is_none_not_error() {
        let store = InMemoryStore::<Client>::new();
        assert!(store.get(42).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_list_empty_store() {
        let store = InMemoryStore::<Client>::new();
        assert!(store.list().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_list_preserves_insertion_order() {
        let store = InMemoryStore::<Client>::new();
        for name in ["Ana", "Bruno", "Carla"] {
            store.create(new_client(name)).await.unwrap();
        }

        let names: Vec<String> = store
            .list()
            .await
            .unwrap()
            .into_iter()
            .map(|c| c.name)
            .collect();
        assert_eq!(names, vec!["Ana", "Bruno", "Carla"]);
    }

    #[tokio::test]
    async fn test_update_applies_only_present_fields() {
        let store = InMemoryStore::<Client>::new();
        let created = store.create(new_client("Ana")).await.unwrap();

        let patch = ClientPatch {
            phone: Some("222".to_string()),
            ..Default::default()
        };
        let updated = store.update(created.client_id, patch).await.unwrap().unwrap();

        assert_eq!(updated.phone, "222");
        assert_eq!(updated.name, "Ana");
        assert_eq!(updated.email, created.email);
        assert_eq!(updated.address, created.address);
    }

    #[tokio::test]
    async fn test_update_unknown_id_is_none() {
        let store = InMemoryStore::<Client>::new();
        let result = store.update(9, ClientPatch::default()).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_then_get_is_none() {
        let store = InMemoryStore::<Client>::new();
        let created = store.create(new_client("Ana")).await.unwrap();

        assert!(store.delete(created.client_id).await.unwrap());
        assert!(store.get(created.client_id).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_delete_unknown_id_is_false() {
        let store = InMemoryStore::<Client>::new();
        assert!(!store.delete(42).await.unwrap());
    }

    #[tokio::test]
    async fn test_deleted_ids_are_never_reused() {
        let store = InMemoryStore::<Client>::new();
        let first = store.create(new_client("Ana")).await.unwrap();
        store.delete(first.client_id).await.unwrap();

        let second = store.create(new_client("Bruno")).await.unwrap();
        assert_eq!(second.client_id, 2);
    }

    #[tokio::test]
    async fn test_clones_share_the_same_records() {
        let store = InMemoryStore::<Client>::new();
        let clone = store.clone();

        store.create(new_client("Ana")).await.unwrap();
        assert_eq!(clone.list().await.unwrap().len(), 1);
    }
}
