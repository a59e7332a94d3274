//! # 문서 컬렉션 추상화
//!
//! [`UserRepository`](super::user_repo::UserRepository)가 의존하는 저장소 기능입니다.
//! MongoDB 드라이버 어댑터([`MongoUserCollection`](crate::db::collection::MongoUserCollection))가
//! 운영 환경 구현을 제공하고, 테스트에서는 메모리 구현이나 mock으로 대체됩니다.
//!
//! 단일 문서 수준의 원자성(삽입, 조회 후 갱신)은 구현체가 보장해야 합니다.
//! 타임아웃과 취소도 구현체(드라이버)의 책임입니다.

use async_trait::async_trait;
use futures_util::stream::BoxStream;
use mongodb::bson::Document;
use crate::core::errors::BoxError;

/// 조회 결과 문서의 지연 스트림
pub type DocumentStream = BoxStream<'static, Result<Document, BoxError>>;

/// 사용자 문서 컬렉션
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait UserCollection: Send + Sync {
    /// 새 문서를 삽입합니다.
    async fn insert_one(&self, document: Document) -> Result<(), BoxError>;

    /// 필터와 일치하는 첫 문서를 갱신하고 갱신 **후** 문서를 반환합니다.
    ///
    /// 일치하는 문서가 없으면 `Ok(None)`입니다.
    async fn find_one_and_update(
        &self,
        filter: Document,
        update: Document,
    ) -> Result<Option<Document>, BoxError>;

    /// 필터와 일치하는 첫 문서를 삭제하고 삭제된 문서 수를 반환합니다.
    async fn delete_one(&self, filter: Document) -> Result<u64, BoxError>;

    /// 필터와 일치하는 모든 문서를 스트림으로 반환합니다.
    async fn find(&self, filter: Document) -> Result<DocumentStream, BoxError>;
}
