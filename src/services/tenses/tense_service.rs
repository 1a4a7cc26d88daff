//! 시제 참고 자료 서비스
//!
//! 바이너리에 포함된 `data/tenses.json`을 한 번 파싱해 보관합니다.
//! 파싱 실패는 시작 시 `init`에서 드러납니다.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::core::errors::{AppError, AppResult};
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::models::tenses::TenseEntry;

const TENSES_JSON: &str = include_str!("../../data/tenses.json");

static TENSE_SERVICE: OnceCell<Arc<TenseService>> = OnceCell::new();

pub struct TenseService {
    tenses: OnceCell<Vec<TenseEntry>>,
}

impl TenseService {
    pub fn new() -> Self {
        Self {
            tenses: OnceCell::new(),
        }
    }

    pub fn instance() -> Arc<Self> {
        TENSE_SERVICE
            .get_or_init(|| Arc::new(Self::new()))
            .clone()
    }

    pub fn list(&self) -> AppResult<&[TenseEntry]> {
        self.tenses
            .get_or_try_init(|| {
                serde_json::from_str::<Vec<TenseEntry>>(TENSES_JSON)
                    .map_err(|e| AppError::InternalError(format!("Failed to parse tense reference: {}", e)))
            })
            .map(Vec::as_slice)
    }
}

impl Default for TenseService {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl Service for TenseService {
    fn name(&self) -> &str {
        "tenses"
    }

    async fn init(&self) -> Result<(), AppError> {
        let count = self.list()?.len();
        log::debug!("Loaded {} tense entries", count);
        Ok(())
    }
}

fn tense_service_constructor() -> Arc<dyn Service> {
    TenseService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "tense_service",
        constructor: tense_service_constructor,
    }
}
