//! # Core Module
//!
//! 서비스 전역에서 공유하는 핵심 타입을 제공합니다.
//!
//! ### [`errors`] - 통합 에러 처리
//! - **AppError**: 검증, 미존재, 저장소 에러를 표현하는 전역 에러 타입
//! - **HTTP 통합**: Actix-Web `ResponseError` 구현으로 자동 응답 변환
//! - **에러 체인 보존**: 저장소 원본 에러를 `source`로 유지

pub mod errors;

pub use errors::*;
