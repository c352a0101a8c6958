//! MongoDB 기반 사용자 저장소
//!
//! - `users` 컬렉션: `_id`는 숫자 ID, `email`에 유니크 인덱스
//! - `counters` 컬렉션: `{ _id: "users", seq: <마지막 ID> }`로 ID를 순차 할당

use async_trait::async_trait;
use chrono::NaiveDate;
use futures_util::TryStreamExt;
use mongodb::bson::doc;
use mongodb::error::{ErrorKind, WriteFailure};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use serde::{Deserialize, Serialize};

use super::UserStore;
use crate::config::StoreBackend;
use crate::core::errors::{AppError, AppResult};
use crate::db::Database;
use crate::domain::entities::users::{NewUser, UserId, UserRecord};

const USERS_COLLECTION: &str = "users";
const COUNTERS_COLLECTION: &str = "counters";
const DUPLICATE_KEY: i32 = 11000;

/// `users` 컬렉션의 문서 형태
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
struct UserDocument {
    #[serde(rename = "_id")]
    id: UserId,
    name: String,
    email: String,
    phone: String,
    location: String,
    birth_date: NaiveDate,
}

impl From<UserRecord> for UserDocument {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            name: user.name,
            email: user.email,
            phone: user.phone,
            location: user.location,
            birth_date: user.birth_date,
        }
    }
}

impl From<UserDocument> for UserRecord {
    fn from(doc: UserDocument) -> Self {
        Self {
            id: doc.id,
            name: doc.name,
            email: doc.email,
            phone: doc.phone,
            location: doc.location,
            birth_date: doc.birth_date,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Counter {
    #[serde(rename = "_id")]
    id: String,
    seq: i64,
}

fn is_duplicate_key(error: &mongodb::error::Error) -> bool {
    match error.kind.as_ref() {
        ErrorKind::Write(WriteFailure::WriteError(e)) => e.code == DUPLICATE_KEY,
        ErrorKind::Command(e) => e.code == DUPLICATE_KEY,
        _ => false,
    }
}

fn map_write_error(error: mongodb::error::Error) -> AppError {
    if is_duplicate_key(&error) {
        AppError::ConstraintViolation(error.to_string())
    } else {
        AppError::DatabaseError(error.to_string())
    }
}

fn db_error(error: mongodb::error::Error) -> AppError {
    AppError::DatabaseError(error.to_string())
}

pub struct MongoUserStore {
    db: Database,
}

impl MongoUserStore {
    pub fn new(db: Database) -> Self {
        Self { db }
    }

    fn users(&self) -> Collection<UserDocument> {
        self.db.get_database().collection(USERS_COLLECTION)
    }

    fn counters(&self) -> Collection<Counter> {
        self.db.get_database().collection(COUNTERS_COLLECTION)
    }

    /// 이메일 유니크 인덱스와 이름 조회 인덱스를 생성합니다.
    pub async fn create_indexes(&self) -> AppResult<()> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(
                IndexOptions::builder()
                    .unique(true)
                    .name("email_unique".to_string())
                    .build(),
            )
            .build();

        let name_index = IndexModel::builder()
            .keys(doc! { "name": 1 })
            .options(IndexOptions::builder().name("name_asc".to_string()).build())
            .build();

        self.users()
            .create_indexes([email_index, name_index])
            .await
            .map_err(db_error)?;

        Ok(())
    }

    async fn next_id(&self) -> AppResult<UserId> {
        let options = FindOneAndUpdateOptions::builder()
            .upsert(true)
            .return_document(ReturnDocument::After)
            .build();

        let counter = self
            .counters()
            .find_one_and_update(
                doc! { "_id": USERS_COLLECTION },
                doc! { "$inc": { "seq": 1_i64 } },
            )
            .with_options(options)
            .await
            .map_err(db_error)?
            .ok_or_else(|| AppError::DatabaseError("user id counter unavailable".to_string()))?;

        Ok(counter.seq)
    }

    async fn find_many(&self, filter: mongodb::bson::Document) -> AppResult<Vec<UserRecord>> {
        let cursor = self
            .users()
            .find(filter)
            .sort(doc! { "_id": 1 })
            .await
            .map_err(db_error)?;

        let documents: Vec<UserDocument> = cursor.try_collect().await.map_err(db_error)?;
        Ok(documents.into_iter().map(UserRecord::from).collect())
    }
}

#[async_trait]
impl UserStore for MongoUserStore {
    async fn find_all(&self) -> AppResult<Vec<UserRecord>> {
        self.find_many(doc! {}).await
    }

    async fn find_all_by_name(&self, name: &str) -> AppResult<Vec<UserRecord>> {
        self.find_many(doc! { "name": name }).await
    }

    async fn find_by_id(&self, id: UserId) -> AppResult<Option<UserRecord>> {
        let document = self
            .users()
            .find_one(doc! { "_id": id })
            .await
            .map_err(db_error)?;

        Ok(document.map(UserRecord::from))
    }

    async fn save(&self, user: NewUser) -> AppResult<UserRecord> {
        let record = user.with_id(self.next_id().await?);

        self.users()
            .insert_one(UserDocument::from(record.clone()))
            .await
            .map_err(map_write_error)?;

        Ok(record)
    }

    async fn update(&self, user: UserRecord) -> AppResult<UserRecord> {
        let result = self
            .users()
            .replace_one(doc! { "_id": user.id }, UserDocument::from(user.clone()))
            .await
            .map_err(map_write_error)?;

        if result.matched_count == 0 {
            return Err(AppError::user_not_found());
        }
        Ok(user)
    }

    async fn delete_by_id(&self, id: UserId) -> AppResult<()> {
        self.users()
            .delete_one(doc! { "_id": id })
            .await
            .map_err(db_error)?;
        Ok(())
    }

    async fn exists_by_id(&self, id: UserId) -> AppResult<bool> {
        let count = self
            .users()
            .count_documents(doc! { "_id": id })
            .await
            .map_err(db_error)?;
        Ok(count > 0)
    }

    fn backend(&self) -> StoreBackend {
        StoreBackend::MongoDb
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson;

    fn record() -> UserRecord {
        UserRecord {
            id: 7,
            name: "Test_User".to_string(),
            email: "test1@example.com".to_string(),
            phone: "+79609062424".to_string(),
            location: "Test_Location".to_string(),
            birth_date: NaiveDate::from_ymd_opt(1990, 1, 1).unwrap(),
        }
    }

    #[test]
    fn test_document_uses_numeric_object_id() {
        let document = bson::to_document(&UserDocument::from(record())).unwrap();

        assert_eq!(document.get_i64("_id").unwrap(), 7);
        assert_eq!(document.get_str("email").unwrap(), "test1@example.com");
        assert!(document.get("id").is_none());
    }

    #[test]
    fn test_document_round_trip_to_record() {
        let document = bson::to_document(&UserDocument::from(record())).unwrap();
        let restored: UserDocument = bson::from_document(document).unwrap();

        assert_eq!(UserRecord::from(restored), record());
    }
}
