use serde::{Deserialize, Serialize};
use crate::domain::entities::users::User;

/// 사용자 응답 DTO
///
/// `{"id", "nickname", "first_name", "last_name", "password", "email", "country"}`
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UserResponse {
    pub id: String,
    pub nickname: String,
    pub first_name: String,
    pub last_name: String,
    pub password: String,
    pub email: String,
    pub country: String,
}

impl From<User> for UserResponse {
    fn from(user: User) -> Self {
        let User {
            id,
            nickname,
            first_name,
            last_name,
            password,
            email,
            country,
        } = user;

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

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_shape_uses_plain_id() {
        let user = User {
            id: "42".to_string(),
            nickname: "alice".to_string(),
            first_name: "A".to_string(),
            last_name: "B".to_string(),
            password: "p".to_string(),
            email: "a@x.io".to_string(),
            country: "US".to_string(),
        };

        let json = serde_json::to_value(UserResponse::from(user)).unwrap();

        assert_eq!(
            json,
            serde_json::json!({
                "id": "42",
                "nickname": "alice",
                "first_name": "A",
                "last_name": "B",
                "password": "p",
                "email": "a@x.io",
                "country": "US"
            })
        );
    }
}
