//! 분석 결과 저장 페이로드
//!
//! 외부 "분석 결과 저장" API가 기대하는 {score, rawPayload, imageReference}
//! 형식의 페이로드를 구성해 JSON 파일로 기록한다. 전송과 영속화 형식은
//! 해당 API 소관이다.

use crate::error::Result;
use chrono::Local;
use scalp_ai_common::DiagnosisInput;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// 외부 저장 API 요청 페이로드
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SaveAnalysisRequest {
    /// 종합 두피 점수
    pub score: u8,

    /// AI 진단 원본 페이로드
    pub raw_payload: DiagnosisInput,

    /// 분석 대상 이미지 참조 (URL 또는 경로)
    pub image_reference: String,

    /// 분석 시각
    pub analyzed_at: String,
}

/// 저장 요청 페이로드를 구성
pub fn build_save_request(
    score: u8,
    raw_payload: &DiagnosisInput,
    image_reference: &str,
) -> SaveAnalysisRequest {
    SaveAnalysisRequest {
        score,
        raw_payload: raw_payload.clone(),
        image_reference: image_reference.to_string(),
        analyzed_at: Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
    }
}

/// 저장 요청 페이로드를 JSON 파일로 기록
pub fn write_save_request(request: &SaveAnalysisRequest, path: &Path, pretty: bool) -> Result<()> {
    let json = if pretty {
        serde_json::to_string_pretty(request)?
    } else {
        serde_json::to_string(request)?
    };
    std::fs::write(path, json)?;
    Ok(())
}
