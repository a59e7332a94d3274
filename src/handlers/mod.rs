//! # HTTP Request Handlers
//!
//! HTTP 요청을 받아 검증하고 리포지토리를 호출한 뒤 응답을 만드는 계층입니다.
//! 리포지토리는 `web::Data`로 주입되며, 에러는 [`AppError`](crate::core::errors::AppError)의
//! `ResponseError` 구현을 통해 JSON 응답으로 변환됩니다.

pub mod users;
