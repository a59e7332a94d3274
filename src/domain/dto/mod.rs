//! # Data Transfer Objects Module
//!
//! API 경계에서 데이터를 전송하기 위한 객체들을 정의합니다.
//! 엔티티와 DTO를 분리하여 저장소 표현(`_id`)과 API 표현(`id`)이 서로 영향을 주지 않도록 합니다.
//!
//! | 역할 | 모듈 |
//! |------|------|
//! | HTTP 요청 본문/쿼리 매핑 | `users::request` |
//! | HTTP 응답 본문 매핑 | `users::response` |
//! | 입력값 유효성 검증 | `validator` crate |

pub mod users;
