//! Users Entity Module
//!
//! 사용자 도메인의 엔티티를 정의합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::domain::entities::users::{User, UserFields};
//!
//! let user = User::new(UserFields {
//!     nickname: "alice".to_string(),
//!     first_name: "Alice".to_string(),
//!     last_name: "Kim".to_string(),
//!     password: "secret".to_string(),
//!     email: "alice@example.com".to_string(),
//!     country: "KR".to_string(),
//! });
//! ```

pub mod user;

pub use user::{User, UserFields};
