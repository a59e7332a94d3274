//! # 사용자 생성/수정 요청 DTO
//!
//! `POST /users`와 `PUT /users/{user_id}`가 공유하는 요청 본문입니다.
//!
//! ## 검증 규칙
//!
//! 여섯 필드 모두 필수이며 빈 문자열이면 위반입니다.
//! 검사 순서는 nickname, first_name, last_name, password, email, country이고,
//! 결과는 필드명으로 정렬된 [`FieldErrors`]로 반환됩니다.
//!
//! JSON에서 빠진 필드는 빈 문자열로 해석되어 동일하게 검증 에러가 됩니다.
//!
//! ```json
//! {
//!   "nickname": "alice",
//!   "first_name": "Alice",
//!   "last_name": "Kim",
//!   "password": "secret",
//!   "email": "alice@example.com",
//!   "country": "KR"
//! }
//! ```

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationErrors};
use crate::core::errors::{AppError, FieldErrors};
use crate::domain::entities::users::UserFields;

/// 사용자 생성/수정 요청 DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize, Validate)]
#[serde(default)]
pub struct UserRequest {
    #[validate(length(min = 1, message = "The nickname field is required!"))]
    pub nickname: String,

    #[validate(length(min = 1, message = "The first_name field is required!"))]
    pub first_name: String,

    #[validate(length(min = 1, message = "The last_name field is required!"))]
    pub last_name: String,

    #[validate(length(min = 1, message = "The password field is required!"))]
    pub password: String,

    #[validate(length(min = 1, message = "The email field is required!"))]
    pub email: String,

    #[validate(length(min = 1, message = "The country field is required!"))]
    pub country: String,
}

impl UserRequest {
    /// 위반된 필드와 메시지의 매핑을 반환합니다.
    ///
    /// 빈 매핑은 에러가 없음을 뜻합니다. I/O가 없고 실패하지 않습니다.
    pub fn violations(&self) -> FieldErrors {
        match self.validate() {
            Ok(()) => FieldErrors::new(),
            Err(report) => flatten(&report),
        }
    }

    /// 위반이 하나라도 있으면 `AppError::ValidationError`로 거부합니다.
    pub fn check(&self) -> Result<(), AppError> {
        let violations = self.violations();
        if violations.is_empty() {
            Ok(())
        } else {
            Err(AppError::ValidationError(violations))
        }
    }
}

impl From<UserRequest> for UserFields {
    fn from(request: UserRequest) -> Self {
        let UserRequest {
            nickname,
            first_name,
            last_name,
            password,
            email,
            country,
        } = request;

        Self {
            nickname,
            first_name,
            last_name,
            password,
            email,
            country,
        }
    }
}

/// `validator` 리포트를 필드별 첫 메시지로 평탄화
fn flatten(report: &ValidationErrors) -> FieldErrors {
    report
        .field_errors()
        .into_iter()
        .map(|(field, errors)| {
            let message = errors
                .first()
                .and_then(|error| error.message.as_ref())
                .map(|message| message.to_string())
                .unwrap_or_else(|| format!("The {} field is required!", field));
            (field.to_string(), message)
        })
        .collect()
}
