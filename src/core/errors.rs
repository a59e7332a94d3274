//! # Application Error Handling System
//!
//! 사용자 디렉토리 서비스를 위한 통합 에러 처리 시스템입니다.
//! `thiserror`로 에러 타입을 정의하고 `actix_web::ResponseError`를 구현하여
//! 모든 에러가 일관된 JSON 응답으로 변환되도록 합니다.
//!
//! ## HTTP 응답 매핑
//!
//! | AppError | HTTP Status | 사용 시나리오 |
//! |----------|-------------|---------------|
//! | `ValidationError` | 400 Bad Request | 필수 필드 누락 |
//! | `MalformedBody` | 400 Bad Request | JSON 본문 해석 실패 |
//! | `NotFound` | 404 Not Found | 대상 사용자 없음 |
//! | `PersistenceError` | 500 Internal Server Error | 저장소 호출 실패, 문서 디코딩 실패 |
//!
//! ## 사용 패턴
//!
//! ```rust,ignore
//! use crate::core::errors::{AppError, ErrorContext};
//!
//! collection.insert_one(document).await.context("cannot insert user")?;
//!
//! let updated = collection.find_one_and_update(filter, update).await
//!     .context("cannot update user")?
//!     .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))?;
//! ```

use std::collections::BTreeMap;
use thiserror::Error;

/// 필드명 → 사람이 읽을 수 있는 메시지 매핑
///
/// 필드명 기준으로 정렬되므로 응답과 테스트 픽스처가 항상 같은 순서를 가집니다.
pub type FieldErrors = BTreeMap<String, String>;

/// 저장소 드라이버가 돌려주는 원본 에러
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// 애플리케이션 전역 에러 타입
///
/// 검증 에러는 저장소에 도달하기 전에 HTTP 경계에서 처리되고,
/// 저장소 에러는 감싸진 채로 그대로 호출자에게 전달됩니다.
/// 재시도나 부분 복구는 하지 않습니다.
#[derive(Error, Debug)]
pub enum AppError {
    /// 필수 필드 검증 실패 (400 Bad Request)
    ///
    /// 위반된 모든 필드를 한 번에 담아 응답합니다.
    #[error("Validation error: {} invalid field(s)", .0.len())]
    ValidationError(FieldErrors),

    /// 요청 본문을 해석할 수 없음 (400 Bad Request)
    #[error("Malformed body: {0}")]
    MalformedBody(String),

    /// 대상 ID와 일치하는 문서가 없음 (404 Not Found)
    #[error("Not found: {0}")]
    NotFound(String),

    /// 저장소 호출 실패 또는 디코딩 불가능한 문서 (500 Internal Server Error)
    ///
    /// 원본 에러는 `source`로 보존되어 로그에만 기록되고,
    /// 클라이언트에게는 `context` 메시지만 노출됩니다.
    #[error("Persistence error: {context}")]
    PersistenceError {
        context: String,
        #[source]
        source: BoxError,
    },
}

impl AppError {
    /// 원본 에러를 감싸 `PersistenceError`를 만듭니다.
    pub fn persistence(context: impl Into<String>, source: impl Into<BoxError>) -> Self {
        AppError::PersistenceError {
            context: context.into(),
            source: source.into(),
        }
    }
}

impl actix_web::ResponseError for AppError {
    fn status_code(&self) -> actix_web::http::StatusCode {
        use actix_web::http::StatusCode;

        match self {
            AppError::ValidationError(_) | AppError::MalformedBody(_) => StatusCode::BAD_REQUEST,
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::PersistenceError { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// HTTP 에러 응답을 생성합니다.
    ///
    /// 검증 에러는 `{"validationError": {...}}` 형태로,
    /// 나머지는 `{"error": "..."}` 형태로 응답합니다.
    fn error_response(&self) -> actix_web::HttpResponse {
        let body = match self {
            AppError::ValidationError(fields) => serde_json::json!({ "validationError": fields }),
            AppError::PersistenceError { context, source } => {
                log::error!("❌ 저장소 오류: {} ({})", context, source);
                serde_json::json!({ "error": self.to_string() })
            }
            AppError::MalformedBody(message) | AppError::NotFound(message) => {
                serde_json::json!({ "error": message })
            }
        };

        actix_web::HttpResponse::build(self.status_code()).json(body)
    }
}

/// 편의성을 위한 Result 타입 별칭
pub type AppResult<T> = Result<T, AppError>;

/// 저장소 드라이버 에러를 `PersistenceError`로 변환하는 확장 trait
///
/// ```rust,ignore
/// let cursor = collection.find(filter).await.context("cannot list users")?;
/// ```
pub trait ErrorContext<T> {
    /// 컨텍스트 메시지와 함께 에러를 감쌉니다.
    fn context(self, msg: &str) -> AppResult<T>;

    /// 클로저를 사용하여 지연 평가된 컨텍스트를 제공합니다.
    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ErrorContext<T> for Result<T, E>
where
    E: Into<BoxError>,
{
    fn context(self, msg: &str) -> AppResult<T> {
        self.map_err(|e| AppError::persistence(msg, e))
    }

    fn with_context<F>(self, f: F) -> AppResult<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| AppError::persistence(f(), e))
    }
}
