use serde::{Deserialize, Serialize};

/// 영어 시제 참고 항목 (읽기 전용 정적 데이터)
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TenseEntry {
    pub name: String,
    pub structure: String,
    pub usage: String,
    pub examples: Vec<String>,
}
