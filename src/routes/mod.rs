//! API 라우트 설정 모듈
//!
//! 사용자 디렉토리 엔드포인트와 헬스체크 엔드포인트를 등록합니다.
//!
//! # Routes
//!
//! - `GET /health` - 서비스 및 MongoDB 연결 상태
//! - `POST /users` - 사용자 생성
//! - `GET /users` - 사용자 목록 조회 (허용된 컬럼 필터)
//! - `PUT /users/{user_id}` - 사용자 수정
//! - `DELETE /users/{user_id}` - 사용자 삭제
//!
//! # Examples
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! let app = App::new()
//!     .app_data(web::Data::new(database))
//!     .app_data(web::Data::new(repository))
//!     .configure(configure_all_routes);
//! ```

use actix_web::{get, web, HttpResponse};
use log::warn;
use serde_json::json;
use crate::core::errors::AppError;
use crate::db::Database;
use crate::handlers;

/// 모든 라우트를 설정합니다
///
/// JSON 본문 해석 실패를 `{"error": "invalid json body"}` 응답으로 통일하는
/// 추출기 설정도 함께 등록합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig) {
    cfg.app_data(json_config());

    // Health check endpoint
    cfg.service(health_check);

    configure_user_routes(cfg);
}

/// 사용자 관련 라우트를 설정합니다
///
/// ```bash
/// curl -X POST http://localhost:8080/users \
///   -H "Content-Type: application/json" \
///   -d '{"nickname":"alice","first_name":"Alice","last_name":"Liddell",
///        "password":"wonderland","email":"alice@example.com","country":"UK"}'
///
/// curl "http://localhost:8080/users?country=UK"
/// ```
pub fn configure_user_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/users")
            .service(handlers::users::create_user)
            .service(handlers::users::list_users)
            .service(handlers::users::update_user)
            .service(handlers::users::delete_user),
    );
}

/// JSON 추출기 설정
///
/// 해석 실패 원인은 debug 로그로만 남기고 클라이언트에는 고정 메시지를 보냅니다.
pub fn json_config() -> web::JsonConfig {
    web::JsonConfig::default().error_handler(|err, _req| {
        log::debug!("📭 JSON 본문 해석 실패: {}", err);
        AppError::MalformedBody("invalid json body".to_string()).into()
    })
}

/// 헬스체크 엔드포인트
///
/// 서비스는 항상 200으로 응답하고, MongoDB 상태는 `database_status`로 알려줍니다.
#[get("/health")]
async fn health_check(database: web::Data<Database>) -> HttpResponse {
    let database_status = match database.ping().await {
        Ok(()) => "OK",
        Err(e) => {
            warn!("⚠️ 헬스체크 중 MongoDB 응답 없음: {}", e);
            "UNHEALTHY"
        }
    };

    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": "user_directory",
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
        "database_status": database_status,
    }))
}
