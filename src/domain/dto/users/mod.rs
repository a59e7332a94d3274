//! # User Data Transfer Objects Module
//!
//! 사용자 API의 요청/응답 데이터 구조를 정의합니다.
//!
//! ```text
//! users/
//! ├── request/
//! │   ├── user_request.rs    # 생성/수정 요청 본문 + 필수 필드 검증
//! │   └── user_filter.rs     # 목록 조회 필터 (허용 목록)
//! └── response/
//!     └── user_response.rs   # 사용자 응답
//! ```

pub mod request;
pub mod response;
