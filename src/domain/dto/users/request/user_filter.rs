//! # 사용자 목록 필터
//!
//! `GET /users`의 쿼리 파라미터를 명시적인 타입으로 표현합니다.
//! 허용 목록(nickname, first_name, last_name, email, country)에 있는 키만
//! 필드로 존재하므로 저장소 계층은 임의의 키를 볼 일이 없습니다.
//! `password`는 필터로 사용할 수 없습니다.
//!
//! ```text
//! GET /users?nickname=alice&country=KR&password=x&nickname=bob
//!   → UserFilter { nickname: Some("alice"), country: Some("KR"), .. }
//! ```

use serde::{Deserialize, Serialize};

/// 허용된 컬럼별 선택적 동등 조건
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserFilter {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub nickname: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

impl UserFilter {
    /// 원시 쿼리 키/값 쌍으로부터 필터를 구성합니다.
    ///
    /// - 허용 목록에 없는 키는 조용히 버립니다.
    /// - 같은 키가 여러 번 오면 첫 번째 값만 사용합니다.
    pub fn from_query_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<String>,
    {
        let mut filter = Self::default();

        for (key, value) in pairs {
            let slot = match key.as_ref() {
                "nickname" => &mut filter.nickname,
                "first_name" => &mut filter.first_name,
                "last_name" => &mut filter.last_name,
                "email" => &mut filter.email,
                "country" => &mut filter.country,
                _ => continue,
            };

            if slot.is_none() {
                *slot = Some(value.into());
            }
        }

        filter
    }

    /// 설정된 조건을 `(컬럼, 값)` 쌍으로 순회합니다.
    pub fn conditions(&self) -> impl Iterator<Item = (&'static str, &str)> + '_ {
        [
            ("nickname", &self.nickname),
            ("first_name", &self.first_name),
            ("last_name", &self.last_name),
            ("email", &self.email),
            ("country", &self.country),
        ]
        .into_iter()
        .filter_map(|(column, value)| value.as_deref().map(|value| (column, value)))
    }

    /// 조건이 하나도 없는지 확인합니다.
    pub fn is_empty(&self) -> bool {
        self.conditions().next().is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_query_builds_empty_filter() {
        let filter = UserFilter::from_query_pairs(Vec::<(String, String)>::new());

        assert!(filter.is_empty());
        assert_eq!(filter, UserFilter::default());
    }

    #[test]
    fn test_unknown_and_password_keys_are_dropped() {
        let filter = UserFilter::from_query_pairs([
            ("password", "secret"),
            ("_id", "abc"),
            ("$where", "1"),
            ("country", "KR"),
        ]);

        assert_eq!(
            filter,
            UserFilter {
                country: Some("KR".to_string()),
                ..Default::default()
            }
        );
    }

    #[test]
    fn test_first_value_wins_for_repeated_key() {
        let filter = UserFilter::from_query_pairs([("nickname", "alice"), ("nickname", "bob")]);

        assert_eq!(filter.nickname.as_deref(), Some("alice"));
    }

    #[test]
    fn test_conditions_follow_column_order() {
        let filter = UserFilter::from_query_pairs([
            ("email", "a@x.io"),
            ("first_name", "A"),
            ("last_name", "B"),
        ]);
        let conditions: Vec<_> = filter.conditions().collect();

        assert_eq!(
            conditions,
            vec![("first_name", "A"), ("last_name", "B"), ("email", "a@x.io")]
        );
    }

    #[test]
    fn test_empty_value_is_kept_as_condition() {
        let filter = UserFilter::from_query_pairs([("nickname", "")]);

        assert_eq!(filter.conditions().collect::<Vec<_>>(), vec![("nickname", "")]);
    }
}
