//! 사용자 데이터 액세스 계층을 담당하는 리포지토리 모듈
//!
//! - [`UserCollection`](collection::UserCollection) - 저장소 드라이버가 제공하는 문서 컬렉션 기능
//! - [`UserRepository`](user_repo::UserRepository) - 생성, 수정, 삭제, 목록 조회
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::repositories::users::UserRepository;
//!
//! let repo = UserRepository::new(Arc::new(database.user_collection("users")));
//! let users = repo.list(&UserFilter::default()).await?;
//! ```

pub mod collection;
pub mod user_repo;

#[cfg(test)]
pub mod in_memory;

pub use collection::UserCollection;
pub use user_repo::UserRepository;
