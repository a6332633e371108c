//! In-memory identity repository
//!
//! Process-local table behind a `tokio::sync::RwLock`. Lookups share the
//! read lock; uniqueness checks and the write they guard happen under one
//! write lock. No lock is held between calls.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use notegate_domain::entities::{Identity, IdentityId, IdentityPatch, NewIdentity};
use notegate_domain::error::{Error, Result};
use notegate_domain::repositories::IdentityRepository;
use std::collections::BTreeMap;
use tokio::sync::RwLock;

#[derive(Default)]
struct Table {
    rows: BTreeMap<IdentityId, Identity>,
    last_id: IdentityId,
}

impl Table {
    fn conflict(
        &self,
        username: Option<&str>,
        email: Option<&str>,
        except: Option<IdentityId>,
    ) -> Option<&'static str> {
        let mut others = self.rows.values().filter(|row| Some(row.id) != except);
        if email.is_some_and(|email| others.clone().any(|row| row.email == email)) {
            return Some("Email");
        }
        if username.is_some_and(|username| others.any(|row| row.username == username)) {
            return Some("Username");
        }
        None
    }

    fn row_mut(&mut self, id: IdentityId) -> Result<&mut Identity> {
        self.rows
            .get_mut(&id)
            .ok_or_else(|| Error::not_found(format!("identity {id}")))
    }
}

/// In-memory [`IdentityRepository`]
#[derive(Default)]
pub struct InMemoryIdentityRepository {
    table: RwLock<Table>,
}

impl InMemoryIdentityRepository {
    /// Create an empty repository
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of stored identities
    pub async fn len(&self) -> usize {
        self.table.read().await.rows.len()
    }

    /// True when no identity is stored
    pub async fn is_empty(&self) -> bool {
        self.table.read().await.rows.is_empty()
    }
}

#[async_trait]
impl IdentityRepository for InMemoryIdentityRepository {
    async fn find_by_email(&self, email: &str) -> Result<Option<Identity>> {
        let table = self.table.read().await;
        Ok(table.rows.values().find(|row| row.email == email).cloned())
    }

    async fn find_by_username(&self, username: &str) -> Result<Option<Identity>> {
        let table = self.table.read().await;
        Ok(table
            .rows
            .values()
            .find(|row| row.username == username)
            .cloned())
    }

    async fn find_by_id(&self, id: IdentityId) -> Result<Option<Identity>> {
        Ok(self.table.read().await.rows.get(&id).cloned())
    }

    async fn list(&self) -> Result<Vec<Identity>> {
        Ok(self.table.read().await.rows.values().cloned().collect())
    }

    async fn insert(&self, identity: NewIdentity) -> Result<Identity> {
        let mut table = self.table.write().await;
        if let Some(field) = table.conflict(
            Some(identity.username.as_str()),
            Some(identity.email.as_str()),
            None,
        ) {
            return Err(Error::already_exists(field));
        }

        table.last_id += 1;
        let row = identity.into_identity(table.last_id, Utc::now());
        table.rows.insert(row.id, row.clone());
        Ok(row)
    }

    async fn update(&self, id: IdentityId, patch: IdentityPatch) -> Result<Identity> {
        let mut table = self.table.write().await;
        table.row_mut(id)?;
        if let Some(field) =
            table.conflict(patch.username.as_deref(), patch.email.as_deref(), Some(id))
        {
            return Err(Error::already_exists(field));
        }

        let row = table.row_mut(id)?;
        row.apply(patch);
        Ok(row.clone())
    }

    async fn touch_last_login(&self, id: IdentityId, at: DateTime<Utc>) -> Result<Identity> {
        let mut table = self.table.write().await;
        let row = table.row_mut(id)?;
        row.touch_login(at);
        Ok(row.clone())
    }
}
