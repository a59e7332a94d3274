//! 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! 리포지토리는 구체적인 드라이버 대신 컬렉션 trait에 의존하며,
//! 애플리케이션 시작 시 MongoDB 어댑터가 주입됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let repo = web::Data::new(UserRepository::new(collection));
//! App::new().app_data(repo.clone());
//! ```

pub mod users;
