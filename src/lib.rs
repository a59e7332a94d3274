//! 사용자 디렉토리 서비스
//!
//! MongoDB에 사용자 레코드를 저장하고 REST API로 생성, 조회, 수정, 삭제를 제공하는
//! 서비스입니다. 핵심은 데이터 액세스 계층으로, 검증된 필드를 문서 변경으로 옮기고
//! 허용된 컬럼만으로 목록 쿼리를 만들며 저장소 응답을 스키마 검증 후 디코딩합니다.
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Handlers     │ ← 본문 검증, 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← UserRepository (create / update / remove / list)
//! └─────────────────┘
//!          │  UserCollection trait
//!          ▼
//! ┌─────────────────┐
//! │     MongoDB     │ ← MongoUserCollection 어댑터
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use user_directory::config::AppConfig;
//! use user_directory::db::Database;
//! use user_directory::repositories::users::UserRepository;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.mongo).await?;
//! let repository = UserRepository::new(Arc::new(
//!     database.user_collection(&config.mongo.collection_name),
//! ));
//!
//! let user = repository.create(fields).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod domain;
pub mod repositories;
pub mod routes;
pub mod handlers;
