//! 카테고리 필터 모듈
//!
//! AI 모델이 비듬·탈모 계열을 주요 카테고리로 보고하는 경우가 있다.
//! 종합 점수는 일반적인 두피 상태만 나타내야 하고 비듬·탈모는 별도
//! 화면에서 따로 추적되므로, 점수 계산과 속성 분류 전에 해당 카테고리를
//! 기준값으로 치환해 이중 감점을 막는다.

use crate::types::{DiagnosisInput, FilteredDiagnosis};

/// 기준(양호) 카테고리·심각도 값
pub const BASELINE_GRADE: &str = "0.양호";

/// 비듬 계열 키워드 (소문자 매칭, 한/영 혼용)
const DANDRUFF_KEYWORDS: &[&str] = &["비듬", "dandruff"];

/// 탈모 계열 키워드 (소문자 매칭, 한/영 혼용)
const HAIR_LOSS_KEYWORDS: &[&str] = &["탈모", "hair loss"];

/// 억제 대상 키워드를 포함하는지 검사
fn contains_suppressed(text: &str) -> bool {
    let lowered = text.to_lowercase();
    DANDRUFF_KEYWORDS
        .iter()
        .chain(HAIR_LOSS_KEYWORDS.iter())
        .any(|keyword| lowered.contains(keyword))
}

/// 억제 카테고리를 제거한 FilteredDiagnosis를 생성
///
/// 주요 카테고리가 비듬·탈모 계열이면 카테고리와 심각도를 "0.양호"로
/// 치환하고 diagnosisScores에서 해당 키워드를 포함하는 항목을 제거한다.
/// 그 외에는 입력을 구조적으로 복사해 그대로 반환한다 (원본과 공유 없음).
///
/// 전역 함수이며 항상 성공한다. 빈 카테고리는 어떤 키워드와도
/// 일치하지 않는 것으로 처리한다.
pub fn filter_diagnosis(input: &DiagnosisInput) -> FilteredDiagnosis {
    if contains_suppressed(&input.primary_category) {
        let diagnosis_scores = input
            .diagnosis_scores
            .iter()
            .filter(|(key, _)| !contains_suppressed(key))
            .map(|(key, value)| (key.clone(), *value))
            .collect();

        FilteredDiagnosis {
            primary_category: BASELINE_GRADE.to_string(),
            primary_severity: BASELINE_GRADE.to_string(),
            average_confidence: input.average_confidence,
            diagnosis_scores,
        }
    } else {
        FilteredDiagnosis {
            primary_category: input.primary_category.clone(),
            primary_severity: input.primary_severity.clone(),
            average_confidence: input.average_confidence,
            diagnosis_scores: input.diagnosis_scores.clone(),
        }
    }
}
