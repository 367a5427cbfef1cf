//! 종합 점수 계산 모듈
//!
//! 심각도 레벨, 증상별 점수, 신뢰도를 0-100 정수 하나로 환산한다.
//! 가중치와 감점은 고정 계약이며 이름 있는 상수로 관리한다.

use crate::types::FilteredDiagnosis;

/// 심각도 레벨(0-3)당 감점
pub const LEVEL_PENALTY: f64 = 20.0;

/// 증상 평균(0.5 기준) 가중치
pub const SYMPTOM_WEIGHT: f64 = 30.0;

/// 신뢰도(0.5 기준) 가중치
pub const CONFIDENCE_WEIGHT: f64 = 20.0;

/// averageConfidence가 없거나 유한한 숫자가 아닐 때의 기본값
pub const DEFAULT_CONFIDENCE: f64 = 0.7;

/// 홍반·농포 카테고리 감점
pub const REDNESS_PENALTY: f64 = 10.0;

/// 피지과다 카테고리 감점
pub const SEBUM_PENALTY: f64 = 8.0;

/// 미세각질 카테고리 감점
pub const FLAKING_PENALTY: f64 = 6.0;

/// 최대 심각도 레벨
pub const MAX_LEVEL: u8 = 3;

/// "<레벨>.<라벨>" 형식에서 심각도 레벨을 추출
///
/// 첫 '.' 앞부분을 정수로 파싱한다. 파싱 불가·음수는 0으로 처리하고
/// [0,3] 범위로 클램프한다.
pub fn parse_severity_level(severity: &str) -> u8 {
    let level = severity
        .split('.')
        .next()
        .unwrap_or("")
        .trim()
        .parse::<i64>()
        .unwrap_or(0);
    level.clamp(0, i64::from(MAX_LEVEL)) as u8
}

/// 유효 신뢰도를 결정
///
/// 없거나 유한한 숫자가 아니면 기본값 0.7을 사용한다
pub fn effective_confidence(confidence: Option<f64>) -> f64 {
    match confidence {
        Some(value) if value.is_finite() => value,
        _ => DEFAULT_CONFIDENCE,
    }
}

/// 종합 두피 점수를 계산 (0-100)
///
/// 적용 순서는 고정 계약이다:
/// 1. 100에서 레벨 × 20 감점
/// 2. diagnosisScores가 비어있지 않으면 (평균 - 0.5) × 30 감점
/// 3. (신뢰도 - 0.5) × 20 가점
/// 4. 카테고리별 추가 감점. 복수 매칭 시 모두 누적:
///    홍반·농포 -10, 피지과다 -8, 미세각질 -6
///
/// 마지막에 반올림 후 [0,100]으로 클램프한다. 빈 diagnosisScores는
/// 2단계를 건너뛴다 (평균 0으로 취급하지 않음).
pub fn composite_score(filtered: &FilteredDiagnosis) -> u8 {
    let level = parse_severity_level(&filtered.primary_severity);
    let mut base = 100.0;

    base -= f64::from(level) * LEVEL_PENALTY;

    if !filtered.diagnosis_scores.is_empty() {
        let sum: f64 = filtered.diagnosis_scores.values().sum();
        let avg = sum / filtered.diagnosis_scores.len() as f64;
        base -= (avg - 0.5) * SYMPTOM_WEIGHT;
    }

    base += (effective_confidence(filtered.average_confidence) - 0.5) * CONFIDENCE_WEIGHT;

    let category = filtered.primary_category.to_lowercase();
    if category.contains("홍반") || category.contains("농포") {
        base -= REDNESS_PENALTY;
    }
    if category.contains("피지과다") {
        base -= SEBUM_PENALTY;
    }
    if category.contains("미세각질") {
        base -= FLAKING_PENALTY;
    }

    base.round().clamp(0.0, 100.0) as u8
}
