//! 프로세스 메모리 기반 사용자 저장소

use std::collections::BTreeMap;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use async_trait::async_trait;

use super::UserStore;
use crate::config::StoreBackend;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::entities::users::{NewUser, UserId, UserRecord};

#[derive(Debug, Default)]
struct Inner {
    records: BTreeMap<UserId, UserRecord>,
    last_id: UserId,
}

impl Inner {
    fn email_taken(&self, email: &str, except: Option<UserId>) -> bool {
        self.records
            .values()
            .any(|r| r.email == email && Some(r.id) != except)
    }
}

/// `RwLock<BTreeMap>` 기반 저장소
///
/// ID는 1부터 순차 할당되며 삭제된 ID는 재사용하지 않습니다.
#[derive(Debug, Default)]
pub struct InMemoryUserStore {
    inner: RwLock<Inner>,
}

impl InMemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn read(&self) -> AppResult<RwLockReadGuard<'_, Inner>> {
        self.inner.read().context("user store lock poisoned")
    }

    fn write(&self) -> AppResult<RwLockWriteGuard<'_, Inner>> {
        self.inner.write().context("user store lock poisoned")
    }
}

fn duplicate_email(email: &str) -> AppError {
    AppError::ConstraintViolation(format!("duplicate key: email '{}' already exists", email))
}

#[async_trait]
impl UserStore for InMemoryUserStore {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        Ok(self.read()?.records.values().cloned().collect())
    }

    async fn find_all_by_name(&self, name: &str) -> AppResult<Vec<UserRecord>> {
        Ok(self
            .read()?
            .records
            .values()
            .filter(|r| r.name == name)
            .cloned()
            .collect())
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        Ok(self.read()?.records.get(&id).cloned())
    }

    async fn save(&self, user: NewUser) -> AppResult<UserRecord> {
        let mut inner = self.write()?;
        if inner.email_taken(&user.email, None) {
            return Err(duplicate_email(&user.email));
        }

        inner.last_id += 1;
        let record = user.with_id(inner.last_id);
        inner.records.insert(record.id, record.clone());
        Ok(record)
    }

    async fn update(&self, user: UserRecord) -> AppResult<UserRecord> {
        let mut inner = self.write()?;
        if !inner.records.contains_key(&user.id) {
            return Err(AppError::user_not_found());
        }
        if inner.email_taken(&user.email, Some(user.id)) {
            return Err(duplicate_email(&user.email));
        }

        inner.records.insert(user.id, user.clone());
        Ok(user)
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<()> {
        self.write()?.records.remove(&id);
        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> AppResult<bool> {
        Ok(self.read()?.records.contains_key(&id))
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::Memory
    }
}
