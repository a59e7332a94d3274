//! # 사용자 관련 응답 DTO 모듈
//!
//! 저장소가 돌려준 엔티티를 클라이언트용 JSON 형태로 변환합니다.
//! 엔티티의 `_id`는 응답에서 `id`로 노출됩니다.

pub mod user_response;

pub use user_response::UserResponse;
