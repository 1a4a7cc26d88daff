//! # 사용자 리포지토리 구현
//!
//! `users` 컬렉션에 대한 MongoDB 데이터 액세스 계층입니다.
//!
//! ## 인덱스
//!
//! - `email_unique`: 이메일 유니크
//! - `google_id_unique`: Google ID 유니크 (sparse, 로컬 계정은 필드 없음)
//! - `created_at_desc`: 생성일 내림차순

use std::sync::Arc;

use async_trait::async_trait;
use mongodb::bson::{doc, oid::ObjectId, DateTime};
use mongodb::options::{FindOneAndUpdateOptions, IndexOptions, ReturnDocument};
use mongodb::{Collection, IndexModel};
use once_cell::sync::OnceCell;

use crate::core::errors::AppError;
use crate::core::registry::{Repository, RepositoryRegistration, ServiceLocator};
use crate::db::Database;
use crate::domain::dto::UpdateProfileRequest;
use crate::domain::entities::User;
use crate::repositories::mongo_errors::{map_db_error, map_write_error};
use crate::repositories::users::user_store::UserStore;

const COLLECTION_NAME: &str = "users";

static USER_REPOSITORY: OnceCell<Arc<UserRepository>> = OnceCell::new();

pub struct UserRepository {
    db: Arc<Database>,
}

impl UserRepository {
    pub fn new(db: Arc<Database>) -> Self {
        Self { db }
    }

    /// 싱글톤 인스턴스. `Database`가 `ServiceLocator`에 등록되어 있어야 합니다.
    pub fn instance() -> Arc<Self> {
        USER_REPOSITORY
            .get_or_init(|| Arc::new(Self::new(ServiceLocator::get::<Database>())))
            .clone()
    }

    fn collection(&self) -> Collection<User> {
        self.db.collection::<User>(COLLECTION_NAME)
    }

    fn return_updated() -> FindOneAndUpdateOptions {
        FindOneAndUpdateOptions::builder()
            .return_document(ReturnDocument::After)
            .build()
    }

    /// `users` 컬렉션 인덱스 생성
    ///
    /// # 생성되는 인덱스
    ///
    /// | 이름 | 키 | 옵션 |
    /// |------|----|------|
    /// | `email_unique` | `email` | unique |
    /// | `google_id_unique` | `googleId` | unique, sparse (비밀번호 계정은 필드가 없음) |
    /// | `created_at_desc` | `createdAt: -1` | |
    ///
    /// 이미 같은 정의로 존재하는 인덱스는 MongoDB가 그대로 둡니다.
    ///
    /// # Errors
    ///
    /// 기존 데이터가 유니크 제약을 어기면 `AppError::DatabaseError`를 반환하며,
    /// 서버는 시작하지 않습니다.
    pub async fn create_indexes(&self) -> Result<(), AppError> {
        let email_index = IndexModel::builder()
            .keys(doc! { "email": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .name("email_unique".to_string())
                .build())
            .build();

        let google_id_index = IndexModel::builder()
            .keys(doc! { "googleId": 1 })
            .options(IndexOptions::builder()
                .unique(true)
                .sparse(true)
                .name("google_id_unique".to_string())
                .build())
            .build();

        let created_at_index = IndexModel::builder()
            .keys(doc! { "createdAt": -1 })
            .options(IndexOptions::builder()
                .name("created_at_desc".to_string())
                .build())
            .build();

        self.collection()
            .create_indexes([email_index, google_id_index, created_at_index])
            .await
            .map_err(map_db_error)?;

        Ok(())
    }
}

#[async_trait]
impl UserStore for UserRepository {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "_id": *id })
            .await
            .map_err(map_db_error)
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "email": email })
            .await
            .map_err(map_db_error)
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError> {
        self.collection()
            .find_one(doc! { "googleId": google_id })
            .await
            .map_err(map_db_error)
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let result = self.collection()
            .insert_one(&user)
            .await
            .map_err(|e| map_write_error(e, "User with this email already exists"))?;

        let id = result.inserted_id.as_object_id().ok_or_else(|| {
            AppError::InternalError("insert_one returned a non-ObjectId id".to_string())
        })?;
        user.id = Some(id);

        Ok(user)
    }

    async fn link_google_account(
        &self,
        id: &ObjectId,
        google_id: &str,
        avatar: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let mut set = doc! {
            "googleId": google_id,
            "updatedAt": DateTime::now(),
        };
        if let Some(avatar) = avatar {
            set.insert("avatar", avatar);
        }

        self.collection()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .with_options(Self::return_updated())
            .await
            .map_err(|e| map_write_error(e, "Google account is already linked to another user"))
    }

    async fn update_profile(&self, id: &ObjectId, changes: &UpdateProfileRequest) -> Result<Option<User>, AppError> {
        let mut set = doc! { "updatedAt": DateTime::now() };
        if let Some(name) = &changes.name {
            set.insert("name", name.as_str());
        }
        if let Some(avatar) = &changes.avatar {
            set.insert("avatar", avatar.as_str());
        }

        self.collection()
            .find_one_and_update(doc! { "_id": *id }, doc! { "$set": set })
            .with_options(Self::return_updated())
            .await
            .map_err(map_db_error)
    }
}

#[async_trait]
impl Repository for UserRepository {
    fn name(&self) -> &str {
        "user"
    }

    fn collection_name(&self) -> &str {
        COLLECTION_NAME
    }

    async fn init(&self) -> Result<(), AppError> {
        self.create_indexes().await
    }
}

fn user_repository_constructor() -> Arc<dyn Repository> {
    UserRepository::instance()
}

inventory::submit! {
    RepositoryRegistration {
        name: "user_repository",
        constructor: user_repository_constructor,
    }
}
