//! API 응답 파서
//!
//! AI 진단 API의 응답 텍스트에서 JSON을 추출하고
//! DiagnosisInput으로 파싱한다

use crate::error::{Error, Result};
use crate::types::DiagnosisInput;

/// API 응답에서 JSON 부분을 추출
///
/// 추출 우선순위:
/// 1. ```json ... ``` 블록
/// 2. 원본 {...} 객체
/// 3. 에러
///
/// # Arguments
/// * `response` - API 응답 문자열
///
/// # Returns
/// * `Ok(&str)` - 추출된 JSON 문자열
/// * `Err` - JSON을 찾지 못한 경우
///
/// # Examples
/// ```
/// use scalp_ai_common::extract_json;
///
/// let response = r#"{"primaryCategory": "피지과다"}"#;
/// let json = extract_json(response).unwrap();
/// assert!(json.contains("primaryCategory"));
/// ```
pub fn extract_json(response: &str) -> Result<&str> {
    // ```json ... ``` 블록을 찾는다
    if let Some(start_marker) = response.find("```json") {
        let start = start_marker + 7; // "```json" 길이
        if let Some(end_offset) = response[start..].find("```") {
            let end = start + end_offset;
            return Ok(response[start..end].trim());
        }
    }

    // 원본 {...} 객체를 찾는다
    if let Some(start) = response.find('{') {
        if let Some(end) = response.rfind('}') {
            if end >= start {
                return Ok(&response[start..=end]);
            }
        }
    }

    Err(Error::Parse("JSON을 찾을 수 없습니다".into()))
}

/// 진단 응답을 파싱
///
/// AI 모델의 응답(자유 텍스트 포함 가능)에서 진단 페이로드를 꺼낸다
///
/// # Arguments
/// * `response` - 진단 API 응답
///
/// # Returns
/// * `Ok(DiagnosisInput)` - 파싱 성공
/// * `Err` - JSON이 없거나 파싱 실패
pub fn parse_diagnosis_response(response: &str) -> Result<DiagnosisInput> {
    let json_str = extract_json(response)?;
    let input: DiagnosisInput = serde_json::from_str(json_str.trim())
        .map_err(|e| Error::Parse(format!("진단 JSON 파싱 에러: {}", e)))?;
    Ok(input)
}
