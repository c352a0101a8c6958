//! # 사용자 관리 서비스 구현
//!
//! 사용자 프로필의 조회, 생성, 부분 갱신, 삭제를 조율합니다.
//! 검증기와 병합기는 순수 함수이며, 저장소 호출은 요청마다 최대 한 번의 읽기와
//! 한 번의 쓰기로 제한됩니다.
//!
//! ## 처리 흐름
//!
//! ```text
//! create: ProposedChange ─► validate_new_user ─► store.save
//! update: ProposedChange ─► validate_change ─► store.find_by_id ─► reconcile ─► store.update
//! delete: store.exists_by_id ─► store.delete_by_id
//! ```

use std::sync::Arc;

use chrono::{Local, NaiveDate};

use super::{reconciler, user_validator};
use crate::config::StoreBackend;
use crate::core::errors::{AppError, AppResult};
use crate::domain::entities::users::{UserId, UserRecord};
use crate::domain::models::users::ProposedChange;
use crate::repositories::users::UserStore;

/// 사용자 관리 비즈니스 로직 서비스
///
/// `web::Data<UserService>`로 모든 워커가 공유합니다.
/// 저장소는 생성 시점에 주입되므로 테스트에서는 in-memory 저장소를 사용할 수 있습니다.
pub struct UserService {
    store: Arc<dyn UserStore>,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>) -> Self {
        Self { store }
    }

    pub fn store_backend(&self) -> StoreBackend {
        self.store.backend()
    }

    fn today() -> NaiveDate {
        Local::now().date_naive()
    }

    /// 전체 사용자 목록, `name`이 주어지면 이름이 일치하는 사용자만
    pub async fn list_users(&self, name: Option<&str>) -> AppResult<Vec<UserRecord>> {
        match name {
            Some(name) => self.store.find_all_by_name(name).await,
            None => self.store.find_all().await,
        }
    }

    pub async fn get_user(&self, id: UserId) -> AppResult<UserRecord> {
        self.store.find_by_id(id).await?.ok_or_else(|| {
            log::debug!("사용자 조회 실패: id={}", id);
            AppError::user_not_found()
        })
    }

    /// 새 사용자 생성
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 하나 이상의 필드 규칙 위반
    /// * `AppError::ConstraintViolation` - 이미 사용 중인 이메일
    pub async fn create_user(&self, change: ProposedChange) -> AppResult<UserRecord> {
        self.create_user_at(change, Self::today()).await
    }

    async fn create_user_at(
        &self,
        change: ProposedChange,
        today: NaiveDate,
    ) -> AppResult<UserRecord> {
        let new_user = user_validator::validate_new_user(change, today).map_err(|violations| {
            log::warn!("사용자 생성 거부: {}", violations);
            AppError::from(violations)
        })?;

        let created = self.store.save(new_user).await?;
        log::info!("사용자 생성: id={}", created.id);

        Ok(created)
    }

    /// 사용자 부분 갱신
    ///
    /// 제출된 필드만 검증한 뒤, 저장된 레코드에 병합해 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ValidationError` - 제출된 필드의 규칙 위반
    /// * `AppError::NotFound` - 해당 ID의 사용자가 없음
    /// * `AppError::ConstraintViolation` - 다른 사용자가 사용 중인 이메일
    pub async fn update_user(&self, id: UserId, change: ProposedChange) -> AppResult<UserRecord> {
        self.update_user_at(id, change, Self::today()).await
    }

    async fn update_user_at(
        &self,
        id: UserId,
        change: ProposedChange,
        today: NaiveDate,
    ) -> AppResult<UserRecord> {
        user_validator::validate_change(&change, today).map_err(|violations| {
            log::warn!("사용자 {} 갱신 거부: {}", id, violations);
            AppError::from(violations)
        })?;

        let existing = self.get_user(id).await?;
        let fields = change.supplied_fields();
        let merged = reconciler::reconcile(existing, change);
        let updated = self.store.update(merged).await?;

        log::info!("사용자 갱신: id={}, fields={:?}", id, fields);
        Ok(updated)
    }

    pub async fn delete_user(&self, id: UserId) -> AppResult<()> {
        if !self.store.exists_by_id(id).await? {
            log::debug!("삭제 대상 사용자 없음: id={}", id);
            return Err(AppError::user_not_found());
        }

        self.store.delete_by_id(id).await?;
        log::info!("사용자 삭제: id={}", id);

        Ok(())
    }
}
