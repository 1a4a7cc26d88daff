//! # Service Registry - 싱글톤 의존성 관리
//!
//! 프로세스 전역 싱글톤 서비스/리포지토리를 관리하는 레지스트리입니다.
//!
//! ## 구성 요소
//!
//! - **ServiceLocator**: 외부에서 생성된 인프라 컴포넌트(`Database` 등)를 `TypeId` 기준으로 보관
//! - **RepositoryRegistration / ServiceRegistration**: 각 모듈이 `inventory::submit!`으로 등록하는
//!   생성자 메타데이터. 애플리케이션 시작 시 `initialize_all()`이 모두 생성하고 초기화합니다.
//!
//! ## 등록 패턴
//!
//! 각 서비스는 `once_cell::sync::OnceCell`로 자신의 싱글톤을 보관하고,
//! 생성자를 레지스트리에 제출합니다.
//!
//! ```rust,ignore
//! static VOCABULARY_SERVICE: OnceCell<Arc<VocabularyService>> = OnceCell::new();
//!
//! impl VocabularyService {
//!     pub fn instance() -> Arc<Self> {
//!         VOCABULARY_SERVICE
//!             .get_or_init(|| Arc::new(Self::new(VocabularyRepository::instance())))
//!             .clone()
//!     }
//! }
//!
//! fn vocabulary_service_constructor() -> Arc<dyn Service> {
//!     VocabularyService::instance()
//! }
//!
//! inventory::submit! {
//!     ServiceRegistration { name: "vocabulary_service", constructor: vocabulary_service_constructor }
//! }
//! ```
//!
//! ## 초기화 순서
//!
//! 1. `main`에서 `Database`를 연결하고 `ServiceLocator::set()`으로 등록
//! 2. `ServiceLocator::initialize_all()` - 리포지토리 생성 + 인덱스 생성, 이후 서비스 생성
//! 3. HTTP 서버 시작

use std::any::{Any, TypeId};
use std::collections::HashMap;
use std::sync::{Arc, RwLock};

use async_trait::async_trait;
use once_cell::sync::Lazy;

use crate::core::errors::AppError;
use crate::utils::display_terminal::{
    print_boxed_title, print_final_summary, print_step_complete, print_step_start, print_sub_task,
};

/// 비즈니스 로직 서비스를 위한 공통 인터페이스
#[async_trait]
pub trait Service: Send + Sync {
    /// 서비스의 고유 이름
    fn name(&self) -> &str;

    /// 서비스 초기화 로직
    async fn init(&self) -> Result<(), AppError> {
        Ok(())
    }
}

/// 데이터 액세스 리포지토리를 위한 공통 인터페이스
#[async_trait]
pub trait Repository: Send + Sync {
    /// 리포지토리의 고유 이름
    fn name(&self) -> &str;

    /// 연결된 MongoDB 컬렉션 이름
    fn collection_name(&self) -> &str;

    /// 리포지토리 초기화 로직 (인덱스 생성 등)
    async fn init(&self) -> Result<(), AppError>;
}

/// 서비스 등록 정보
pub struct ServiceRegistration {
    /// 서비스의 고유 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스 생성 함수
    pub constructor: fn() -> Arc<dyn Service>,
}

/// 리포지토리 등록 정보
pub struct RepositoryRegistration {
    /// 리포지토리의 고유 이름
    pub name: &'static str,
    /// 싱글톤 인스턴스 생성 함수
    pub constructor: fn() -> Arc<dyn Repository>,
}

inventory::collect!(ServiceRegistration);
inventory::collect!(RepositoryRegistration);

/// 외부 컴포넌트 컨테이너
///
/// 매크로나 레지스트리로 관리되지 않는 인프라 컴포넌트를 타입별로 하나씩 보관합니다.
pub struct ServiceLocator {
    instances: RwLock<HashMap<TypeId, Arc<dyn Any + Send + Sync>>>,
}

static LOCATOR: Lazy<ServiceLocator> = Lazy::new(|| ServiceLocator {
    instances: RwLock::new(HashMap::new()),
});

impl ServiceLocator {
    /// 외부에서 생성된 인스턴스를 등록합니다. 같은 타입의 기존 인스턴스는 교체됩니다.
    pub fn set<T: 'static + Send + Sync>(instance: Arc<T>) {
        let type_name = Self::clean_type_name(std::any::type_name::<T>());
        log::info!("📦 Registering: {}", type_name);

        let mut instances = match LOCATOR.instances.write() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        instances.insert(TypeId::of::<T>(), instance as Arc<dyn Any + Send + Sync>);
    }

    /// 등록된 인스턴스를 조회합니다.
    pub fn try_get<T: 'static + Send + Sync>() -> Option<Arc<T>> {
        let instances = match LOCATOR.instances.read() {
            Ok(guard) => guard,
            Err(poisoned) => poisoned.into_inner(),
        };
        instances
            .get(&TypeId::of::<T>())
            .cloned()
            .and_then(|instance| instance.downcast::<T>().ok())
    }

    /// 등록된 인스턴스를 조회합니다.
    ///
    /// # Panics
    ///
    /// 등록되지 않은 타입을 요청하면 패닉합니다. 인프라 컴포넌트는
    /// 서비스 생성 이전에 `set()`으로 등록되어야 합니다.
    pub fn get<T: 'static + Send + Sync>() -> Arc<T> {
        match Self::try_get::<T>() {
            Some(instance) => instance,
            None => panic!(
                "Component not registered: {}. Register it with ServiceLocator::set() before use",
                std::any::type_name::<T>()
            ),
        }
    }

    fn clean_type_name(type_name: &str) -> &str {
        type_name.rsplit("::").next().unwrap_or(type_name)
    }

    /// 모든 리포지토리와 서비스를 생성하고 초기화합니다.
    ///
    /// 리포지토리가 먼저 생성되며 `Repository::init()`에서 인덱스를 만듭니다.
    pub async fn initialize_all() -> Result<(), AppError> {
        print_boxed_title("🔄 INITIALIZING SERVICE REGISTRY");

        let repo_registrations: Vec<_> = inventory::iter::<RepositoryRegistration>().collect();
        let repo_count = repo_registrations.len();

        print_step_start(1, "Creating Repository instances");
        for registration in repo_registrations {
            let repository = (registration.constructor)();
            repository.init().await?;
            print_sub_task(registration.name, repository.collection_name());
        }
        print_step_complete(1, "Repository instances ready", repo_count);

        let service_registrations: Vec<_> = inventory::iter::<ServiceRegistration>().collect();
        let service_count = service_registrations.len();

        print_step_start(2, "Creating Service instances");
        for registration in service_registrations {
            let service = (registration.constructor)();
            service.init().await?;
            print_sub_task(registration.name, service.name());
        }
        print_step_complete(2, "Service instances ready", service_count);

        print_final_summary(repo_count, service_count);
        Ok(())
    }
}
