use clap::Parser;
use scalp_ai_rust::{cli, config, error, report, save};

use cli::{Cli, Commands};
use config::Config;
use error::{Result, ScalpAiError};
use scalp_ai_common::{analyze_diagnosis, parse_diagnosis_response, ScoreResult};
use std::path::{Path, PathBuf};

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Analyze {
            input,
            output,
            save: do_save,
            image,
            save_output,
        } => {
            println!("🔬 scalp-ai - 두피 진단 분석\n");

            // 1. 진단 응답 읽기
            println!("[1/3] 진단 응답을 읽는 중...");
            if !input.exists() {
                return Err(ScalpAiError::FileNotFound(input.display().to_string()));
            }
            let response = std::fs::read_to_string(&input)?;
            let diagnosis = parse_diagnosis_response(&response)?;
            if cli.verbose {
                println!("  카테고리: {}", diagnosis.primary_category);
                println!("  심각도: {}", diagnosis.primary_severity);
                println!("  증상 항목: {}개", diagnosis.diagnosis_scores.len());
            }
            println!("✔ 진단 페이로드 확인\n");

            // 2. 스코어링 엔진 실행
            println!("[2/3] 두피 점수 계산 중...");
            let result = analyze_diagnosis(&diagnosis);
            println!("✔ 분석 완료\n");

            report::print_report(&result);

            // 3. 결과 저장
            println!("\n[3/3] 결과 저장 중...");
            if let Some(output_path) = output {
                let json = if config.pretty_json {
                    serde_json::to_string_pretty(&result)?
                } else {
                    serde_json::to_string(&result)?
                };
                std::fs::write(&output_path, json)?;
                println!("✔ 분석 결과 저장: {}", output_path.display());
            }

            if do_save {
                let request = save::build_save_request(
                    result.composite_score,
                    &diagnosis,
                    image.as_deref().unwrap_or(""),
                );
                let save_path = save_output
                    .unwrap_or_else(|| default_save_path(&input, config.output_dir.as_deref()));
                save::write_save_request(&request, &save_path, config.pretty_json)?;
                println!("✔ 저장 페이로드 기록: {}", save_path.display());
            }

            println!("\n✅ 분석 완료");
        }

        Commands::Report { input } => {
            println!("📋 scalp-ai - 결과 리포트\n");

            if !input.exists() {
                return Err(ScalpAiError::FileNotFound(input.display().to_string()));
            }
            let content = std::fs::read_to_string(&input)?;
            let result: ScoreResult = serde_json::from_str(&content)?;
            report::print_report(&result);
        }

        Commands::Config {
            set_output_dir,
            show,
        } => {
            let mut config = config;

            if let Some(dir) = set_output_dir {
                config.set_output_dir(dir)?;
                println!("✔ 결과 저장 디렉터리를 설정했습니다");
            }

            if show {
                println!("설정:");
                println!(
                    "  저장 디렉터리: {}",
                    config
                        .output_dir
                        .as_ref()
                        .map(|dir| dir.display().to_string())
                        .unwrap_or_else(|| "(입력 파일 옆)".to_string())
                );
                println!(
                    "  JSON 정렬 출력: {}",
                    if config.pretty_json { "사용" } else { "사용 안 함" }
                );
            }
        }
    }

    Ok(())
}

/// 저장 페이로드 기본 경로: 설정 디렉터리 우선, 없으면 입력 파일 옆
fn default_save_path(input: &Path, output_dir: Option<&Path>) -> PathBuf {
    let dir = output_dir
        .map(Path::to_path_buf)
        .unwrap_or_else(|| input.parent().unwrap_or(Path::new(".")).to_path_buf());
    dir.join("save_request.json")
}
