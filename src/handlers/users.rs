//! # User Directory HTTP Handlers
//!
//! 사용자 디렉토리의 HTTP 엔드포인트를 처리하는 핸들러 함수들입니다.
//! 요청 본문을 검증한 뒤 [`UserRepository`]를 호출하고, 결과를 JSON으로 응답합니다.
//!
//! ## 엔드포인트
//!
//! | 메서드 | 경로 | 설명 | 상태 코드 |
//! |--------|------|------|-----------|
//! | `POST` | `/users` | 새 사용자 생성 | 201 Created |
//! | `GET` | `/users` | 필터 조건으로 사용자 목록 조회 | 200 OK |
//! | `PUT` | `/users/{user_id}` | 사용자 정보 전체 수정 | 200 OK |
//! | `DELETE` | `/users/{user_id}` | 사용자 삭제 | 204 No Content |
//!
//! ## 에러 응답
//!
//! ```json
//! { "validationError": { "email": "The email field is required!" } }
//! ```
//!
//! ```json
//! { "error": "user 3f1c... not found" }
//! ```

use actix_web::{delete, get, post, put, web, HttpResponse};
use log::debug;
use crate::core::errors::AppError;
use crate::domain::dto::users::request::{UserFilter, UserRequest};
use crate::domain::dto::users::response::UserResponse;
use crate::repositories::users::UserRepository;

/// 사용자 생성 핸들러
///
/// # 요청 본문
///
/// ```json
/// {
///   "nickname": "alice",
///   "first_name": "Alice",
///   "last_name": "Liddell",
///   "password": "wonderland",
///   "email": "alice@example.com",
///   "country": "UK"
/// }
/// ```
///
/// 여섯 필드 모두 비어 있지 않아야 하며, 하나라도 비어 있으면
/// 저장소를 호출하지 않고 400으로 응답합니다.
///
/// # 사용 예제
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"nickname":"alice","first_name":"Alice","last_name":"Liddell",
///        "password":"wonderland","email":"alice@example.com","country":"UK"}'
/// ```
#[post("")]
pub async fn create_user(
    repository: web::Data<UserRepository>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.check()?;

    let user = repository.create(payload.into_inner().into()).await?;

    Ok(HttpResponse::Created().json(UserResponse::from(user)))
}

/// 사용자 목록 조회 핸들러
///
/// 허용된 컬럼(`nickname`, `first_name`, `last_name`, `email`, `country`)만
/// 동등 조건으로 사용되며, 나머지 쿼리 파라미터는 무시됩니다.
///
/// ```bash
/// curl "http://localhost:8080/users?country=UK&nickname=alice"
/// ```
#[get("")]
pub async fn list_users(
    repository: web::Data<UserRepository>,
    query: web::Query<Vec<(String, String)>>,
) -> Result<HttpResponse, AppError> {
    let filter = UserFilter::from_query_pairs(query.into_inner());
    debug!("🔍 사용자 목록 조회 필터: {:?}", filter);

    let users: Vec<UserResponse> = repository
        .list(&filter)
        .await?
        .into_iter()
        .map(UserResponse::from)
        .collect();

    Ok(HttpResponse::Ok().json(users))
}

/// 사용자 수정 핸들러
///
/// 여섯 필드를 모두 받아 기존 레코드를 덮어씁니다. ID는 변경되지 않습니다.
#[put("/{user_id}")]
pub async fn update_user(
    repository: web::Data<UserRepository>,
    user_id: web::Path<String>,
    payload: web::Json<UserRequest>,
) -> Result<HttpResponse, AppError> {
    payload.check()?;

    let user = repository
        .update(&user_id, payload.into_inner().into())
        .await?;

    Ok(HttpResponse::Ok().json(UserResponse::from(user)))
}

/// 사용자 삭제 핸들러
#[delete("/{user_id}")]
pub async fn delete_user(
    repository: web::Data<UserRepository>,
    user_id: web::Path<String>,
) -> Result<HttpResponse, AppError> {
    repository.remove(&user_id).await?;

    Ok(HttpResponse::NoContent().finish())
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;
    use actix_web::{test, web, App};
    use actix_web::http::StatusCode;
    use serde_json::{json, Value};
    use crate::repositories::users::in_memory::InMemoryUserCollection;
    use crate::repositories::users::UserRepository;
    use crate::routes::{configure_user_routes, json_config};

    fn alice() -> Value {
        json!({
            "nickname": "alice",
            "first_name": "Alice",
            "last_name": "Liddell",
            "password": "wonderland",
            "email": "alice@example.com",
            "country": "UK"
        })
    }

    fn repository(collection: &InMemoryUserCollection) -> web::Data<UserRepository> {
        web::Data::new(UserRepository::new(Arc::new(collection.clone())))
    }

    macro_rules! test_app {
        ($collection:expr) => {
            test::init_service(
                App::new()
                    .app_data(repository(&$collection))
                    .app_data(json_config())
                    .configure(configure_user_routes),
            )
            .await
        };
    }

    #[actix_web::test]
    async fn test_create_user_returns_created_record() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::post().uri("/users").set_json(alice()).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::CREATED);

        let body: Value = test::read_body_json(response).await;
        assert!(!body["id"].as_str().unwrap().is_empty());
        assert_eq!(body["nickname"], "alice");
        assert_eq!(collection.document_count(), 1);
    }

    #[actix_web::test]
    async fn test_create_user_with_empty_fields_is_rejected() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let mut payload = alice();
        payload["email"] = json!("");
        payload["country"] = json!("");

        let request = test::TestRequest::post().uri("/users").set_json(payload).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["validationError"]["email"], "The email field is required!");
        assert_eq!(body["validationError"]["country"], "The country field is required!");
        assert_eq!(body["validationError"].as_object().unwrap().len(), 2);
        assert_eq!(collection.document_count(), 0);
    }

    #[actix_web::test]
    async fn test_create_user_with_missing_fields_is_rejected() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::post()
            .uri("/users")
            .set_json(json!({ "nickname": "alice" }))
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["validationError"].as_object().unwrap().len(), 5);
        assert!(body["validationError"].get("nickname").is_none());
    }

    #[actix_web::test]
    async fn test_malformed_json_is_rejected() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::post()
            .uri("/users")
            .insert_header(("content-type", "application/json"))
            .set_payload("{\"nickname\": ")
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["error"], "invalid json body");
    }

    #[actix_web::test]
    async fn test_list_users_applies_allowed_filters_only() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let mut bob = alice();
        bob["nickname"] = json!("bob");
        for payload in [alice(), bob] {
            let request = test::TestRequest::post().uri("/users").set_json(payload).to_request();
            test::call_service(&app, request).await;
        }

        let request = test::TestRequest::get().uri("/users?nickname=bob&password=nope").to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        let users = body.as_array().unwrap();
        assert_eq!(users.len(), 1);
        assert_eq!(users[0]["nickname"], "bob");

        let request = test::TestRequest::get().uri("/users").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;
        assert_eq!(body.as_array().unwrap().len(), 2);
    }

    #[actix_web::test]
    async fn test_list_users_without_matches_is_empty_array() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::get().uri("/users?country=Nowhere").to_request();
        let body: Value = test::call_and_read_body_json(&app, request).await;

        assert_eq!(body, json!([]));
    }

    #[actix_web::test]
    async fn test_update_user_keeps_id() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::post().uri("/users").set_json(alice()).to_request();
        let created: Value = test::call_and_read_body_json(&app, request).await;
        let id = created["id"].as_str().unwrap().to_string();

        let mut payload = alice();
        payload["country"] = json!("FR");
        let request = test::TestRequest::put()
            .uri(&format!("/users/{}", id))
            .set_json(payload)
            .to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::OK);

        let body: Value = test::read_body_json(response).await;
        assert_eq!(body["id"], id.as_str());
        assert_eq!(body["country"], "FR");
    }

    #[actix_web::test]
    async fn test_update_unknown_user_is_not_found() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::put()
            .uri("/users/does-not-exist")
            .set_json(alice())
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_update_with_empty_fields_is_rejected() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let mut payload = alice();
        payload["first_name"] = json!("");
        let request = test::TestRequest::put()
            .uri("/users/any-id")
            .set_json(payload)
            .to_request();
        let response = test::call_service(&app, request).await;

        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[actix_web::test]
    async fn test_delete_user() {
        let collection = InMemoryUserCollection::new();
        let app = test_app!(collection);

        let request = test::TestRequest::post().uri("/users").set_json(alice()).to_request();
        let created: Value = test::call_and_read_body_json(&app, request).await;
        let uri = format!("/users/{}", created["id"].as_str().unwrap());

        let request = test::TestRequest::delete().uri(&uri).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NO_CONTENT);
        assert_eq!(collection.document_count(), 0);

        let request = test::TestRequest::delete().uri(&uri).to_request();
        let response = test::call_service(&app, request).await;
        assert_eq!(response.status(), StatusCode::NOT_FOUND);
    }
}
