//! 스코어링 엔진 통합 테스트
//!
//! 결정성·범위·필터 멱등성·시나리오별 고정 점수를 검증

use scalp_ai_common::{
    analyze_diagnosis, filter_diagnosis, DiagnosisInput, Tier, BASELINE_GRADE, MAX_TIPS,
};
use std::collections::BTreeMap;

fn scores(entries: &[(&str, f64)]) -> BTreeMap<String, f64> {
    entries
        .iter()
        .map(|(key, value)| (key.to_string(), *value))
        .collect()
}

fn diagnosis(
    category: &str,
    severity: &str,
    confidence: Option<f64>,
    entries: &[(&str, f64)],
) -> DiagnosisInput {
    DiagnosisInput {
        primary_category: category.to_string(),
        primary_severity: severity.to_string(),
        average_confidence: confidence,
        diagnosis_scores: scores(entries),
    }
}

/// 구조적으로 같은 입력은 항상 같은 결과를 낸다
#[test]
fn test_determinism() {
    let inputs = vec![
        diagnosis("0.양호", "0.양호", Some(0.8), &[]),
        diagnosis("피지과다", "2.중등도", Some(0.7), &[("피지과다", 0.8)]),
        diagnosis(
            "홍반 및 미세각질",
            "3.심각",
            None,
            &[("홍반", 0.6), ("미세각질", 0.4), ("피지과다", 0.2)],
        ),
        diagnosis("탈모", "2.중등도", Some(0.9), &[("탈모", 0.9)]),
    ];

    for input in inputs {
        let first = analyze_diagnosis(&input);
        let second = analyze_diagnosis(&input.clone());
        assert_eq!(first, second);
    }
}

/// 모든 입력에서 점수는 [0,100], 팁은 6개 이하 중복 없음
#[test]
fn test_bounds() {
    let categories = [
        "",
        "0.양호",
        "피지과다",
        "미세각질",
        "홍반",
        "농포",
        "비듬",
        "탈모",
        "피지과다 미세각질 홍반 농포",
        "알 수 없는 카테고리",
    ];
    let severities = ["0.양호", "1.경증", "2.중등도", "3.심각", "", "잘못된값", "-2.이상", "9.초과"];
    let confidences = [None, Some(0.0), Some(0.5), Some(1.0), Some(f64::NAN)];

    for category in &categories {
        for severity in &severities {
            for confidence in &confidences {
                let input = diagnosis(
                    category,
                    severity,
                    *confidence,
                    &[("피지과다", 0.9), ("홍반", 0.1)],
                );
                let result = analyze_diagnosis(&input);

                assert!(result.composite_score <= 100);
                assert!(result.care_tips.len() <= MAX_TIPS);

                let mut seen = std::collections::HashSet::new();
                for tip in &result.care_tips {
                    assert!(seen.insert(tip.clone()), "중복 팁: {}", tip);
                }
            }
        }
    }
}

/// filter(filter(x)) == filter(x)
#[test]
fn test_filter_idempotence() {
    let inputs = vec![
        diagnosis("비듬", "3.심각", Some(0.8), &[("비듬", 0.9), ("홍반", 0.2)]),
        diagnosis("탈모 진행", "2.중등도", None, &[("탈모", 0.7)]),
        diagnosis("피지과다", "1.경증", Some(0.6), &[("피지과다", 0.5)]),
        diagnosis("", "", None, &[]),
    ];

    for input in inputs {
        let once = filter_diagnosis(&input);
        let rewrapped = DiagnosisInput {
            primary_category: once.primary_category.clone(),
            primary_severity: once.primary_severity.clone(),
            average_confidence: once.average_confidence,
            diagnosis_scores: once.diagnosis_scores.clone(),
        };
        assert_eq!(filter_diagnosis(&rewrapped), once);
    }
}

/// 탈모·비듬 주 카테고리는 기준값으로 치환되고 관련 항목이 제거된다
#[test]
fn test_category_suppression() {
    for category in ["탈모", "비듬", "지루성 비듬", "여성형 탈모"] {
        let input = diagnosis(
            category,
            "3.심각",
            Some(0.9),
            &[("탈모", 0.9), ("비듬", 0.8), ("홍반", 0.3)],
        );

        let filtered = filter_diagnosis(&input);
        assert_eq!(filtered.primary_category, BASELINE_GRADE);
        assert_eq!(filtered.primary_severity, BASELINE_GRADE);
        for key in filtered.diagnosis_scores.keys() {
            assert!(!key.contains("탈모"), "탈모 항목이 남음: {}", key);
            assert!(!key.contains("비듬"), "비듬 항목이 남음: {}", key);
        }
        assert!(filtered.diagnosis_scores.contains_key("홍반"));
    }
}

/// 시나리오 A: 감점 없는 양호 입력은 만점
#[test]
fn test_scenario_healthy_full_score() {
    let input = diagnosis("0.양호", "0.양호", Some(0.8), &[]);
    let result = analyze_diagnosis(&input);

    assert_eq!(result.composite_score, 100);
    assert_eq!(result.attribute_labels.oiliness, Tier::Good);
    assert_eq!(result.attribute_labels.flaking, Tier::Good);
    assert_eq!(result.attribute_labels.redness, Tier::Good);
    assert_eq!(result.attribute_labels.dandruff, Tier::Good);
}

/// 시나리오 B: 문서화된 순서대로 계산한 값 47과 정확히 일치해야 한다
#[test]
fn test_scenario_sebum_moderate_literal_score() {
    // 100 - 2×20 - (0.8-0.5)×30 + (0.7-0.5)×20 - 8 = 47
    let input = diagnosis("피지과다", "2.중등도", Some(0.7), &[("피지과다", 0.8)]);
    let result = analyze_diagnosis(&input);

    assert_eq!(result.composite_score, 47);
}

/// 시나리오 C: 카테고리 감점은 레벨 감점에 더해 모두 누적된다
#[test]
fn test_scenario_cumulative_penalties() {
    // 100 - 3×20 + (0.7-0.5)×20 - 10 - 8 = 26
    let input = diagnosis("홍반 및 피지과다", "3.심각", None, &[]);
    let result = analyze_diagnosis(&input);

    assert_eq!(result.composite_score, 26);

    // 홍반 단독 대비 8점 더 낮아야 한다 (피지과다 감점 누적 확인)
    let erythema_only = diagnosis("홍반", "3.심각", None, &[]);
    assert_eq!(analyze_diagnosis(&erythema_only).composite_score, 34);
}

/// 점수 기반 안내가 속성 안내보다 항상 먼저 온다
#[test]
fn test_tip_ordering() {
    // 레벨 0 + 높은 신뢰도로 점수는 85 이상, 피지과다 키워드로 유분은 주의
    let input = diagnosis("피지과다", "0.양호", Some(1.0), &[]);
    let result = analyze_diagnosis(&input);

    assert!(result.composite_score >= 85);
    assert_eq!(result.attribute_labels.oiliness, Tier::Caution);

    // 앞 2개는 루틴 유지 팁, 세정 팁은 그 뒤에 온다
    assert!(result.care_tips[0].contains("루틴"));
    assert!(result.care_tips[1].contains("보습"));
    assert!(result.care_tips[2].contains("샴푸") || result.care_tips[2].contains("세정"));
}

/// 후보가 6개를 넘으면 생성 순서 앞 6개만 남는다
#[test]
fn test_truncation() {
    // 레벨 3 + 카테고리 감점 전부: 점수 20, 네 속성 모두 주의
    let input = diagnosis("피지과다 미세각질 홍반 농포", "3.심각", None, &[]);
    let result = analyze_diagnosis(&input);

    assert!(result.composite_score < 50);
    assert_eq!(result.attribute_labels.oiliness, Tier::Caution);
    assert_eq!(result.attribute_labels.flaking, Tier::Caution);
    assert_eq!(result.attribute_labels.redness, Tier::Caution);
    assert_eq!(result.attribute_labels.dandruff, Tier::Caution);

    assert_eq!(result.care_tips.len(), MAX_TIPS);

    // 생성 순서: 상담 2개 → 유분 세정 2개 → 각질 2개에서 잘림
    assert!(result.care_tips[0].contains("전문의"));
    assert!(result.care_tips[1].contains("클리닉"));
    assert!(result.care_tips[2].contains("딥클렌징"));
    assert!(result.care_tips[3].contains("피지"));
    assert!(result.care_tips[4].contains("스케일링"));
    assert!(result.care_tips[5].contains("에센스"));
}

/// 빈 증상 맵은 평균 감점 단계를 건너뛴다
#[test]
fn test_empty_scores_not_penalized() {
    let empty = diagnosis("0.양호", "1.경증", Some(0.5), &[]);
    // 100 - 20 + 0 = 80
    assert_eq!(analyze_diagnosis(&empty).composite_score, 80);
}
