//! # 사용자 리포지토리 구현
//!
//! 사용자 엔티티의 데이터 액세스 계층입니다.
//! 검증이 끝난 필드를 문서 변경으로 옮기고, 허용 목록 기반 필터로 목록 쿼리를 만들며,
//! 저장소 응답을 스키마 검증을 거쳐 [`User`]로 디코딩합니다.
//!
//! ## 특징
//!
//! - **저장소 추상화**: [`UserCollection`] trait에만 의존
//! - **원자적 갱신**: 조회와 갱신을 `find_one_and_update` 한 번으로 처리
//! - **안전한 필터**: [`UserFilter`]의 허용된 컬럼만 쿼리에 포함
//! - **전부 아니면 전무**: 목록 조회 중 하나라도 실패하면 결과 전체를 버림

use std::sync::Arc;
use futures_util::TryStreamExt;
use log::{debug, info, warn};
use mongodb::bson::{doc, from_document, to_document, Document};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::users::request::UserFilter;
use crate::domain::entities::users::{User, UserFields};
use super::collection::UserCollection;

/// 사용자 데이터 액세스 리포지토리
///
/// 내부 상태는 공유 가능한 컬렉션 핸들뿐이므로 여러 요청이 동시에 사용해도 안전합니다.
/// 동시 갱신의 경합은 저장소의 단일 문서 원자성에 맡기며,
/// 낙관적 잠금이나 재시도는 하지 않습니다.
///
/// ## 사용 예제
///
/// ```rust,ignore
/// let repo = UserRepository::new(Arc::new(database.user_collection("users")));
///
/// let created = repo.create(fields).await?;
/// let updated = repo.update(&created.id, new_fields).await?;
/// let matches = repo.list(&UserFilter::from_query_pairs([("nickname", "alice")])).await?;
/// repo.remove(&created.id).await?;
/// ```
#[derive(Clone)]
pub struct UserRepository {
    collection: Arc<dyn UserCollection>,
}

impl UserRepository {
    pub fn new(collection: Arc<dyn UserCollection>) -> Self {
        Self { collection }
    }

    /// 새 사용자 생성
    ///
    /// 새 UUID를 발급해 전체 레코드를 만들고 문서로 삽입합니다.
    /// 삽입이 성공한 경우에만 생성된 레코드(발급된 ID 포함)를 반환합니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 생성된 사용자
    /// * `Err(AppError::PersistenceError)` - 삽입 실패 (`cannot insert user`)
    pub async fn create(&self, fields: UserFields) -> AppResult<User> {
        let user = User::new(fields);
        let document = to_document(&user).context("cannot encode user")?;

        self.collection
            .insert_one(document)
            .await
            .context("cannot insert user")?;

        info!("✅ 사용자 생성: {} ({})", user.id, user.nickname);
        Ok(user)
    }

    /// 사용자 정보 업데이트
    ///
    /// `_id`가 일치하는 문서의 여섯 필드를 `$set`으로 설정하고 갱신 후 문서를 반환합니다.
    /// 여섯 필드가 모두 무조건 설정되므로 빈 문자열을 넘기면 기존 값이 빈 문자열로 덮어써집니다.
    ///
    /// # 반환값
    ///
    /// * `Ok(User)` - 새 필드 값과 원래 ID를 가진 사용자
    /// * `Err(AppError::NotFound)` - 일치하는 문서 없음 (아무것도 변경되지 않음)
    /// * `Err(AppError::PersistenceError)` - 저장소 실패 또는 디코딩 실패
    pub async fn update(&self, id: &str, fields: UserFields) -> AppResult<User> {
        let changes = to_document(&fields).context("cannot encode user fields")?;

        let updated = self
            .collection
            .find_one_and_update(Self::id_filter(id), doc! { "$set": changes })
            .await
            .with_context(|| format!("cannot update user {}", id))?
            .ok_or_else(|| AppError::NotFound(format!("user {} not found", id)))?;

        let user = Self::decode(updated)?;

        info!("✅ 사용자 수정: {}", user.id);
        Ok(user)
    }

    /// 사용자 삭제
    ///
    /// 삭제된 문서가 없으면 `NotFound`를 반환합니다.
    pub async fn remove(&self, id: &str) -> AppResult<()> {
        let deleted = self
            .collection
            .delete_one(Self::id_filter(id))
            .await
            .with_context(|| format!("cannot remove user {}", id))?;

        if deleted == 0 {
            warn!("⚠️ 삭제할 사용자 없음: {}", id);
            return Err(AppError::NotFound(format!("user {} not found", id)));
        }

        info!("🗑️ 사용자 삭제: {}", id);
        Ok(())
    }

    /// 필터와 일치하는 사용자 목록 조회
    ///
    /// 일치하는 문서가 없으면 빈 목록을 반환합니다.
    /// 커서 또는 디코딩 실패 시 이미 디코딩한 레코드를 버리고 `PersistenceError`를 반환합니다.
    pub async fn list(&self, filter: &UserFilter) -> AppResult<Vec<User>> {
        let query = Self::build_filter(filter);
        debug!("사용자 목록 조회: {}", query);

        let mut cursor = self
            .collection
            .find(query)
            .await
            .context("cannot list users")?;

        let mut users = Vec::new();
        while let Some(document) = cursor.try_next().await.context("cannot read users")? {
            users.push(Self::decode(document)?);
        }

        Ok(users)
    }

    /// `UserFilter`의 설정된 조건을 동등 비교 쿼리로 변환
    fn build_filter(filter: &UserFilter) -> Document {
        let mut query = Document::new();

        for (column, value) in filter.conditions() {
            query.insert(column, value);
        }

        query
    }

    fn id_filter(id: &str) -> Document {
        doc! { "_id": id }
    }

    fn decode(document: Document) -> AppResult<User> {
        from_document::<User>(document).context("cannot decode user document")
    }
}
