//! 진단 결과의 타입 정의
//!
//! CLI와 다른 프런트엔드에서 공유되는 타입:
//! - DiagnosisInput: AI 진단 API의 원본 페이로드
//! - FilteredDiagnosis: 억제 카테고리 제거 후의 페이로드
//! - ScoreResult: 종합 점수 + 속성 등급 + 케어 팁의 최종 출력

use serde::{Deserialize, Deserializer, Serialize};
use std::collections::BTreeMap;

/// AI 진단 API가 반환하는 원본 페이로드
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DiagnosisInput {
    /// 주요 카테고리 (자유 텍스트, 복합 표기 가능)
    pub primary_category: String,

    /// "<레벨>.<라벨>" 형식의 심각도 (예: "2.중등도", 0=양호 3=심각)
    pub primary_severity: String,

    /// 평균 신뢰도 [0,1]. 숫자가 아닌 값은 없음으로 읽는다
    #[serde(deserialize_with = "lenient_confidence")]
    pub average_confidence: Option<f64>,

    /// 증상명 → 심각도 기여값
    pub diagnosis_scores: BTreeMap<String, f64>,
}

/// averageConfidence는 문자열 등 숫자가 아닌 형태로 올 수 있다
fn lenient_confidence<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = serde_json::Value::deserialize(deserializer)?;
    Ok(value.as_f64())
}

/// CategoryFilter 적용 후의 진단 페이로드
///
/// DiagnosisInput과 같은 형태이지만 필터가 정확히 한 번 적용되었음을
/// 타입으로 구분한다. 점수 계산과 속성 분류는 이 타입만 입력으로 받으므로
/// 두 소비자가 항상 동일한 억제 상태를 본다.
#[derive(Debug, Clone, PartialEq)]
pub struct FilteredDiagnosis {
    pub primary_category: String,
    pub primary_severity: String,
    pub average_confidence: Option<f64>,
    pub diagnosis_scores: BTreeMap<String, f64>,
}

/// 두피 속성의 등급 (GOOD < FAIR < CAUTION)
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "UPPERCASE")]
pub enum Tier {
    #[default]
    Good,
    Fair,
    Caution,
}

impl Tier {
    /// 화면 표시용 라벨
    pub fn label(&self) -> &'static str {
        match self {
            Tier::Good => "양호",
            Tier::Fair => "보통",
            Tier::Caution => "주의",
        }
    }
}

/// 네 가지 두피 속성별 등급
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AttributeLabels {
    /// 유분
    pub oiliness: Tier,
    /// 각질
    pub flaking: Tier,
    /// 홍조
    pub redness: Tier,
    /// 비듬
    pub dandruff: Tier,
}

/// 분석 최종 결과 (생성 후 불변)
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoreResult {
    /// 0-100 종합 두피 점수
    pub composite_score: u8,

    /// 속성별 등급
    pub attribute_labels: AttributeLabels,

    /// 케어 팁 (생성 순서 유지, 완전 일치 중복 없음, 최대 6개)
    pub care_tips: Vec<String>,
}
