//! 분석 파이프라인 (CLI/프런트엔드 공통)
//!
//! 원본 진단 페이로드에서 최종 ScoreResult까지:
//! 1. 카테고리 필터 (비듬·탈모 억제)
//! 2. 종합 점수 계산
//! 3. 속성별 등급 분류
//! 4. 케어 팁 생성

use crate::classifier::classify_attributes;
use crate::filter::filter_diagnosis;
use crate::score::composite_score;
use crate::tips::build_care_tips;
use crate::types::{DiagnosisInput, ScoreResult};

/// 진단 페이로드를 분석해 ScoreResult를 생성
///
/// 순수 함수이며 문서화된 입력 범위에서 항상 성공한다.
/// 필터는 정확히 한 번 적용되어 점수 계산과 속성 분류가
/// 동일한 억제 상태를 본다.
pub fn analyze_diagnosis(input: &DiagnosisInput) -> ScoreResult {
    let filtered = filter_diagnosis(input);
    let score = composite_score(&filtered);
    let attribute_labels = classify_attributes(&filtered);
    let care_tips = build_care_tips(score, &attribute_labels);

    ScoreResult {
        composite_score: score,
        attribute_labels,
        care_tips,
    }
}
