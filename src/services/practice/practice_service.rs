//! 연습 기록 서비스 구현
//!
//! 시험/기능별 답안 기록을 추가하고 최신순으로 조회합니다. 기록은 수정되지 않습니다.

use std::sync::Arc;

use async_trait::async_trait;
use once_cell::sync::OnceCell;

use crate::config::ListConfig;
use crate::core::errors::AppError;
use crate::core::registry::{Service, ServiceRegistration};
use crate::domain::dto::{CreatePracticeRequest, PracticeFilter, PracticeResponse};
use crate::repositories::practice::{PracticeRepository, PracticeStore};

static PRACTICE_SERVICE: OnceCell<Arc<PracticeService>> = OnceCell::new();

pub struct PracticeService {
    practices: Arc<dyn PracticeStore>,
}

impl PracticeService {
    pub fn new(practices: Arc<dyn PracticeStore>) -> Self {
        Self { practices }
    }

    pub fn instance() -> Arc<Self> {
        PRACTICE_SERVICE
            .get_or_init(|| Arc::new(Self::new(PracticeRepository::instance())))
            .clone()
    }

    pub async fn create(&self, request: CreatePracticeRequest) -> Result<PracticeResponse, AppError> {
        let entry = self.practices.insert(request.into_entity()).await?;
        log::info!("Practice entry recorded: {} {}", entry.exam.as_str(), entry.skill.as_str());

        Ok(PracticeResponse::from(entry))
    }

    pub async fn list(&self, filter: PracticeFilter) -> Result<Vec<PracticeResponse>, AppError> {
        let limit = ListConfig::resolve_limit(filter.limit);
        let entries = self.practices.list(&filter, limit).await?;

        Ok(entries.into_iter().map(PracticeResponse::from).collect())
    }
}

#[async_trait]
impl Service for PracticeService {
    fn name(&self) -> &str {
        "practice"
    }
}

fn practice_service_constructor() -> Arc<dyn Service> {
    PracticeService::instance()
}

inventory::submit! {
    ServiceRegistration {
        name: "practice_service",
        constructor: practice_service_constructor,
    }
}
