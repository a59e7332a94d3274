//! # Configuration Module
//!
//! 서비스 설정을 담당하는 모듈입니다.
//! 시작 시점에 환경 변수를 한 번 읽어 [`AppConfig`]를 만들고,
//! 이후에는 구조체를 주입하여 사용합니다.
//!
//! ## 환경 변수 설정 가이드
//!
//! ```bash
//! # 서버 설정
//! export HOST="0.0.0.0"
//! export SERVICE_PORT="8080"
//! export SERVER_WORKERS="4"
//!
//! # MongoDB
//! export MONGO_URI="mongodb://localhost:27017"
//! export MONGO_DATABASE_NAME="user_directory"
//! export MONGO_COLLECTION_NAME="users"
//!
//! # Rate Limiting
//! export RATE_LIMIT_PER_SECOND="100"
//! export RATE_LIMIT_BURST_SIZE="200"
//!
//! # CORS
//! export CORS_ALLOWED_ORIGINS="http://localhost:3000,http://127.0.0.1:3000"
//! ```
//!
//! `PROFILE` 값에 따라 `.env.dev` / `.env.prod` / `.env` 파일이 먼저 로드됩니다.

pub mod data_config;

pub use data_config::*;
