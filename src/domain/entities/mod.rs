//! # Domain Entities Module
//!
//! MongoDB 문서와 직접 매핑되는 도메인 엔티티를 정의합니다.
//!
//! ## MongoDB 통합
//! - **BSON 직렬화**: `serde`를 통한 자동 변환
//! - **`_id` 매핑**: 엔티티 ID는 `#[serde(rename = "_id")]`로 문서 ID에 저장
//! - **스키마 검증**: 필드가 빠지거나 타입이 다른 문서는 역직렬화 시 거부
//!
//! ```text
//! entities/
//! └── users/
//!     └── user.rs   ← User, UserFields
//! ```

pub mod users;
