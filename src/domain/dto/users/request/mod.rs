//! # 사용자 관련 요청 DTO 모듈
//!
//! 클라이언트로부터 받은 JSON 본문과 쿼리 파라미터를 구조화된 Rust 타입으로
//! 변환하고 검증합니다.
//!
//! - [`UserRequest`] - 생성/수정 요청 본문, 여섯 필수 필드 검증
//! - [`UserFilter`] - 목록 조회용 허용 목록 기반 필터
//!
//! ## 검증 계층
//!
//! 1. **구문 검증**: JSON 구조와 타입 일치성 (실패 시 `MalformedBody`)
//! 2. **필수 필드 검증**: 빈 문자열 필드 수집 (실패 시 `ValidationError`)
//!
//! 검증은 핸들러에서 저장소 호출 전에 끝나며, 저장소는 다시 검증하지 않습니다.

pub mod user_filter;
pub mod user_request;

pub use user_filter::UserFilter;
pub use user_request::UserRequest;
