//! 분석 결과 리포트
//!
//! ScoreResult를 터미널 표시용 문자열로 구성한다.
//! 화면 바인딩은 호출 측 소관이므로 여기서는 문자열만 만든다.

use scalp_ai_common::ScoreResult;

/// 결과 리포트 문자열 생성
pub fn format_report(result: &ScoreResult) -> String {
    let labels = &result.attribute_labels;
    let mut out = String::new();

    out.push_str(&format!("종합 두피 점수: {}점\n\n", result.composite_score));
    out.push_str("속성별 상태:\n");
    out.push_str(&format!("  유분: {}\n", labels.oiliness.label()));
    out.push_str(&format!("  각질: {}\n", labels.flaking.label()));
    out.push_str(&format!("  홍조: {}\n", labels.redness.label()));
    out.push_str(&format!("  비듬: {}\n", labels.dandruff.label()));

    if !result.care_tips.is_empty() {
        out.push_str("\n케어 팁:\n");
        for (index, tip) in result.care_tips.iter().enumerate() {
            out.push_str(&format!("  {}. {}\n", index + 1, tip));
        }
    }

    out
}

/// 결과 리포트를 터미널에 출력
pub fn print_report(result: &ScoreResult) {
    print!("{}", format_report(result));
}
