//! 테스트용 메모리 저장소
//!
//! 서비스 규칙을 MongoDB 없이 검증하기 위한 store trait 구현입니다.
//! 유니크 제약(이메일, 대소문자 무시 단어, 사용자-단어 쌍)과 최신순 정렬을
//! MongoDB 구현과 같은 의미로 흉내 냅니다. 최신순은 삽입 역순입니다.

use std::sync::Mutex;

use async_trait::async_trait;
use mongodb::bson::{oid::ObjectId, DateTime};

use crate::core::errors::AppError;
use crate::domain::dto::{PracticeFilter, ProgressStats, UpdateProfileRequest, UpdateVocabularyRequest, VocabularyFilter};
use crate::domain::entities::{LearningStatus, PracticeEntry, User, UserProgress, VocabularyEntry};
use crate::repositories::practice::PracticeStore;
use crate::repositories::progress::ProgressStore;
use crate::repositories::users::UserStore;
use crate::repositories::vocabulary::VocabularyStore;

fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[derive(Default)]
pub struct MemoryUserStore {
    users: Mutex<Vec<User>>,
}

impl MemoryUserStore {
    pub fn count(&self) -> usize {
        lock(&self.users).len()
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users).iter().find(|u| u.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_email(&self, email: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users).iter().find(|u| u.email == email).cloned())
    }

    async fn find_by_google_id(&self, google_id: &str) -> Result<Option<User>, AppError> {
        Ok(lock(&self.users)
            .iter()
            .find(|u| u.google_id.as_deref() == Some(google_id))
            .cloned())
    }

    async fn insert(&self, mut user: User) -> Result<User, AppError> {
        let mut users = lock(&self.users);
        if users.iter().any(|u| u.email == user.email) {
            return Err(AppError::ConflictError("User with this email already exists".to_string()));
        }
        user.id = Some(ObjectId::new());
        users.push(user.clone());
        Ok(user)
    }

    async fn link_google_account(
        &self,
        id: &ObjectId,
        google_id: &str,
        avatar: Option<&str>,
    ) -> Result<Option<User>, AppError> {
        let mut users = lock(&self.users);
        Ok(users.iter_mut().find(|u| u.id.as_ref() == Some(id)).map(|user| {
            user.google_id = Some(google_id.to_string());
            if let Some(avatar) = avatar {
                user.avatar = Some(avatar.to_string());
            }
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }

    async fn update_profile(&self, id: &ObjectId, changes: &UpdateProfileRequest) -> Result<Option<User>, AppError> {
        let mut users = lock(&self.users);
        Ok(users.iter_mut().find(|u| u.id.as_ref() == Some(id)).map(|user| {
            if let Some(name) = &changes.name {
                user.name = name.clone();
            }
            if let Some(avatar) = &changes.avatar {
                user.avatar = Some(avatar.clone());
            }
            user.updated_at = DateTime::now();
            user.clone()
        }))
    }
}

#[derive(Default)]
pub struct MemoryVocabularyStore {
    entries: Mutex<Vec<VocabularyEntry>>,
}

fn matches_vocabulary_filter(entry: &VocabularyEntry, filter: &VocabularyFilter) -> bool {
    if filter.difficulty.is_some_and(|d| d != entry.difficulty) {
        return false;
    }
    if filter.status.is_some_and(|s| s != entry.status) {
        return false;
    }
    if filter.exam.is_some_and(|e| !entry.exam_tags.contains(&e)) {
        return false;
    }
    if let Some(search) = &filter.search {
        let needle = search.to_lowercase();
        return entry.word.to_lowercase().contains(&needle) || entry.meaning.to_lowercase().contains(&needle);
    }
    true
}

#[async_trait]
impl VocabularyStore for MemoryVocabularyStore {
    async fn insert(&self, mut entry: VocabularyEntry) -> Result<VocabularyEntry, AppError> {
        let mut entries = lock(&self.entries);
        if entries.iter().any(|e| e.word.to_lowercase() == entry.word.to_lowercase()) {
            return Err(AppError::ConflictError("Vocabulary word already exists".to_string()));
        }
        entry.id = Some(ObjectId::new());
        entries.push(entry.clone());
        Ok(entry)
    }

    async fn find_by_id(&self, id: &ObjectId) -> Result<Option<VocabularyEntry>, AppError> {
        Ok(lock(&self.entries).iter().find(|e| e.id.as_ref() == Some(id)).cloned())
    }

    async fn find_by_word(&self, word: &str) -> Result<Option<VocabularyEntry>, AppError> {
        let needle = word.trim().to_lowercase();
        Ok(lock(&self.entries)
            .iter()
            .find(|e| e.word.to_lowercase() == needle)
            .cloned())
    }

    async fn list(&self, filter: &VocabularyFilter, limit: i64) -> Result<Vec<VocabularyEntry>, AppError> {
        Ok(lock(&self.entries)
            .iter()
            .rev()
            .filter(|e| matches_vocabulary_filter(e, filter))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn update(
        &self,
        id: &ObjectId,
        changes: &UpdateVocabularyRequest,
    ) -> Result<Option<VocabularyEntry>, AppError> {
        let mut entries = lock(&self.entries);
        if let Some(word) = &changes.word {
            let clash = entries
                .iter()
                .any(|e| e.id.as_ref() != Some(id) && e.word.to_lowercase() == word.to_lowercase());
            if clash {
                return Err(AppError::ConflictError("Vocabulary word already exists".to_string()));
            }
        }
        Ok(entries.iter_mut().find(|e| e.id.as_ref() == Some(id)).map(|entry| {
            changes.apply_to(entry);
            entry.clone()
        }))
    }

    async fn delete(&self, id: &ObjectId) -> Result<bool, AppError> {
        let mut entries = lock(&self.entries);
        let before = entries.len();
        entries.retain(|e| e.id.as_ref() != Some(id));
        Ok(entries.len() != before)
    }
}

#[derive(Default)]
pub struct MemoryPracticeStore {
    entries: Mutex<Vec<PracticeEntry>>,
}

#[async_trait]
impl PracticeStore for MemoryPracticeStore {
    async fn insert(&self, mut entry: PracticeEntry) -> Result<PracticeEntry, AppError> {
        entry.id = Some(ObjectId::new());
        lock(&self.entries).push(entry.clone());
        Ok(entry)
    }

    async fn list(&self, filter: &PracticeFilter, limit: i64) -> Result<Vec<PracticeEntry>, AppError> {
        Ok(lock(&self.entries)
            .iter()
            .rev()
            .filter(|e| filter.exam.is_none_or(|exam| exam == e.exam))
            .filter(|e| filter.skill.is_none_or(|skill| skill == e.skill))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }
}

#[derive(Default)]
pub struct MemoryProgressStore {
    records: Mutex<Vec<UserProgress>>,
}

impl MemoryProgressStore {
    pub fn count(&self) -> usize {
        lock(&self.records).len()
    }
}

#[async_trait]
impl ProgressStore for MemoryProgressStore {
    async fn find(&self, user_id: &ObjectId, vocabulary_id: &ObjectId) -> Result<Option<UserProgress>, AppError> {
        Ok(lock(&self.records)
            .iter()
            .find(|p| p.user_id == *user_id && p.vocabulary_id == *vocabulary_id)
            .cloned())
    }

    async fn insert(&self, mut progress: UserProgress) -> Result<UserProgress, AppError> {
        let mut records = lock(&self.records);
        if records
            .iter()
            .any(|p| p.user_id == progress.user_id && p.vocabulary_id == progress.vocabulary_id)
        {
            return Err(AppError::ConflictError("Progress record already exists".to_string()));
        }
        progress.id = Some(ObjectId::new());
        records.push(progress.clone());
        Ok(progress)
    }

    async fn record_review(
        &self,
        user_id: &ObjectId,
        vocabulary_id: &ObjectId,
        status: LearningStatus,
    ) -> Result<Option<UserProgress>, AppError> {
        let mut records = lock(&self.records);
        let position = records
            .iter()
            .position(|p| p.user_id == *user_id && p.vocabulary_id == *vocabulary_id);

        Ok(position.map(|index| {
            let mut progress = records.remove(index);
            let now = DateTime::now();
            progress.status = status;
            progress.review_count += 1;
            progress.last_reviewed_at = Some(now);
            progress.updated_at = now;
            // 최근 수정순 유지를 위해 끝으로 이동
            records.push(progress.clone());
            progress
        }))
    }

    async fn list(
        &self,
        user_id: &ObjectId,
        status: Option<LearningStatus>,
        limit: i64,
    ) -> Result<Vec<UserProgress>, AppError> {
        Ok(lock(&self.records)
            .iter()
            .rev()
            .filter(|p| p.user_id == *user_id)
            .filter(|p| status.is_none_or(|s| s == p.status))
            .take(limit.max(0) as usize)
            .cloned()
            .collect())
    }

    async fn delete(&self, user_id: &ObjectId, vocabulary_id: &ObjectId) -> Result<bool, AppError> {
        let mut records = lock(&self.records);
        let before = records.len();
        records.retain(|p| !(p.user_id == *user_id && p.vocabulary_id == *vocabulary_id));
        Ok(records.len() != before)
    }

    async fn stats(&self, user_id: &ObjectId) -> Result<ProgressStats, AppError> {
        let mut stats = ProgressStats::default();
        for progress in lock(&self.records).iter().filter(|p| p.user_id == *user_id) {
            stats.add(progress.status, 1);
        }
        Ok(stats)
    }
}
