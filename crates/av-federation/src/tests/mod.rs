
use av_core::{Identity, IdentityPatch, IdentityStore, StoreError, StoreResult};

use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;
use uuid::Uuid;

/// In-memory store with the same uniqueness rules as the real one
pub(crate) struct InMemoryStore {
    rows: Mutex<HashMap<Uuid, Identity>>,
}

impl InMemoryStore {
    pub(crate) fn new() -> Self {
        Self {
            rows: Mutex::new(HashMap::new()),
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.rows.lock().unwrap().len()
    }
}

#[async_trait]
impl IdentityStore for InMemoryStore {
    async fn find_by_id(&self, id: Uuid) -> StoreResult<Option<Identity>> {
        Ok(self.rows.lock().unwrap().get(&id).cloned())
    }

    async fn find_by_email(&self, email: &str) -> StoreResult<Option<Identity>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|i| i.email == email)
            .cloned())
    }

    async fn find_by_federated_id(&self, federated_id: &str) -> StoreResult<Option<Identity>> {
        Ok(self
            .rows
            .lock()
            .unwrap()
            .values()
            .find(|i| i.federated_id.as_deref() == Some(federated_id))
            .cloned())
    }

    async fn insert(&self, identity: &Identity) -> StoreResult<()> {
        let mut rows = self.rows.lock().unwrap();

        if rows.values().any(|i| i.email == identity.email) {
            return Err(StoreError::duplicate("email"));
        }
        if let Some(fid) = &identity.federated_id
            && rows
                .values()
                .any(|i| i.federated_id.as_deref() == Some(fid.as_str()))
        {
            return Err(StoreError::duplicate("federated_id"));
        }

        rows.insert(identity.id, identity.clone());
        Ok(())
    }

    async fn update(&self, id: Uuid, patch: &IdentityPatch) -> StoreResult<Identity> {
        let mut rows = self.rows.lock().unwrap();
        let row = rows.get_mut(&id).ok_or_else(|| StoreError::not_found(id))?;

        if let Some(name) = &patch.display_name {
            row.display_name = Some(name.clone());
        }
        if let Some(flag) = patch.is_superuser {
            row.is_superuser = flag;
        }

        Ok(row.clone())
    }

    async fn attach_federated_id(&self, id: Uuid, federated_id: &str) -> StoreResult<Identity> {
        let mut rows = self.rows.lock().unwrap();

        if rows
            .values()
            .any(|i| i.federated_id.as_deref() == Some(federated_id))
        {
            return Err(StoreError::duplicate("federated_id"));
        }

        let row = rows.get_mut(&id).ok_or_else(|| StoreError::not_found(id))?;
        row.federated_id = Some(federated_id.to_string());
        Ok(row.clone())
    }

    async fn delete(&self, id: Uuid) -> StoreResult<()> {
        self.rows
            .lock()
            .unwrap()
            .remove(&id)
            .map(|_| ())
            .ok_or_else(|| StoreError::not_found(id))
    }
}
