use async_trait::async_trait;

use crate::config::StoreBackend;
use crate::core::errors::AppResult;
use crate::domain::entities::users::{NewUser, UserId, UserRecord};

/// ID 기반 사용자 레코드 저장소
///
/// 구현체는 여러 워커가 동시에 사용할 수 있어야 합니다 (`Send + Sync`).
/// 조회 결과는 ID 오름차순입니다.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>>;

    /// 이름이 정확히 일치하는 레코드들
    async fn find_all_by_name(&self, name: &str) -> AppResult<Vec<UserRecord>>;

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>>;

    /// 새 ID를 할당해 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::ConstraintViolation` - 이미 사용 중인 이메일
    async fn save(&self, user: NewUser) -> AppResult<UserRecord>;

    /// 같은 ID의 레코드를 통째로 교체합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::NotFound` - 해당 ID의 레코드가 없음
    /// * `AppError::ConstraintViolation` - 다른 레코드가 사용 중인 이메일
    async fn update(&self, user: UserRecord) -> AppResult<UserRecord>;

    async fn delete_by_id(&self, id: UserId) -> AppResult<()>;

    async fn exists_by_id(&self, id: UserId) -> AppResult<bool>;

    fn backend(&self) -> StoreBackend;
}
