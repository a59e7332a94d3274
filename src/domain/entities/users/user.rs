//! User Entity Implementation
//!
//! 사용자 디렉토리의 유일한 엔티티입니다.
//! MongoDB 문서와 1:1로 매핑되며, `id`는 문서의 `_id`로 저장됩니다.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// 사용자 엔티티
///
/// 생성 시점에 서버가 UUID v4 문자열 ID를 부여하며, 이후 변경되지 않습니다.
/// 모든 필드가 필수이므로 필드가 빠진 문서는 디코딩 단계에서 거부됩니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// 불변 식별자 (문서의 `_id`)
    #[serde(rename = "_id")]
    pub id: String,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    /// 평문 비밀번호 (해싱은 상위 계층의 후속 과제)
    pub password: String,
    pub email: String,
    pub country: String,
}

/// ID를 제외한 사용자의 여섯 개 필드
///
/// 생성과 수정 모두 이 값 전체를 받습니다. 수정 시 여섯 필드가 모두 덮어써지므로
/// 호출자는 변경분이 아니라 완전한 필드 집합을 전달해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFields {
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

impl User {
    /// 새 ID를 발급하여 사용자를 생성합니다.
    pub fn new(fields: UserFields) -> Self {
        Self::with_id(Uuid::new_v4().to_string(), fields)
    }

    /// 기존 ID와 필드로 사용자를 구성합니다.
    pub fn with_id(id: String, fields: UserFields) -> Self {
        let UserFields {
            nickname,
            first_name,
            last_name,
            password,
            email,
            country,
        } = fields;

        Self {
            id,
            nickname,
            first_name,
            last_name,
            password,
            email,
            country,
        }
    }
}
