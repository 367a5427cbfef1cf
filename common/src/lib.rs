//! Scalp AI Common Library
//!
//! CLI와 다른 프런트엔드에서 공유되는 타입과 두피 스코어링 엔진

pub mod analyzer;
pub mod classifier;
pub mod error;
pub mod filter;
pub mod parser;
pub mod score;
pub mod tips;
pub mod types;

pub use analyzer::analyze_diagnosis;
pub use classifier::classify_attributes;
pub use error::{Error, Result};
pub use filter::{filter_diagnosis, BASELINE_GRADE};
pub use parser::{extract_json, parse_diagnosis_response};
pub use score::composite_score;
pub use tips::{build_care_tips, MAX_TIPS};
pub use types::{AttributeLabels, DiagnosisInput, FilteredDiagnosis, ScoreResult, Tier};
