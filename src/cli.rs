use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "scalp-ai")]
#[command(about = "두피 AI 진단 분석·케어 리포트 생성 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 진단 응답을 분석해 점수·등급·케어 팁을 출력
    Analyze {
        /// 진단 응답 파일 (AI 응답 텍스트 또는 JSON)
        #[arg(required = true)]
        input: PathBuf,

        /// 분석 결과 JSON 출력 파일
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 외부 저장 API 형식의 저장 페이로드 생성
        #[arg(long)]
        save: bool,

        /// 저장 페이로드에 넣을 이미지 참조 (URL 또는 경로)
        #[arg(long)]
        image: Option<String>,

        /// 저장 페이로드 출력 파일 (기본: 입력 파일 옆 save_request.json)
        #[arg(long)]
        save_output: Option<PathBuf>,
    },

    /// 저장된 분석 결과 JSON을 다시 표시
    Report {
        /// 분석 결과 JSON 파일
        #[arg(required = true)]
        input: PathBuf,
    },

    /// 설정 표시/편집
    Config {
        /// 결과 저장 기본 디렉터리 설정
        #[arg(long)]
        set_output_dir: Option<PathBuf>,

        /// 설정 표시
        #[arg(long)]
        show: bool,
    },
}
