//! # Domain Layer Module
//!
//! 사용자 디렉토리의 도메인 타입을 담당합니다.
//!
//! ```text
//! Domain Layer (이 모듈)
//! ├── Entities      - MongoDB 문서와 매핑되는 User
//! └── DTOs          - 요청 본문, 목록 필터, 응답
//!      │
//!      ▼
//! Repositories (UserRepository → UserCollection)
//! ```

pub mod dto;
pub mod entities;
