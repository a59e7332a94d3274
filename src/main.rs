//! 사용자 디렉토리 서비스 메인 애플리케이션
//!
//! 설정을 읽고 MongoDB에 연결한 뒤 Actix-web HTTP 서버를 구동합니다.

use std::io;
use std::sync::Arc;
use actix_cors::Cors;
use actix_web::http::header;
use actix_web::{middleware, web, App, HttpServer};
use actix_governor::{Governor, GovernorConfigBuilder};
use env_logger::Env;
use log::{error, info, warn};
use user_directory::config::{AppConfig, CorsConfig};
use user_directory::db::Database;
use user_directory::repositories::users::UserRepository;
use user_directory::routes::configure_all_routes;

#[actix_web::main]
async fn main() -> io::Result<()> {
    // .env 안의 RUST_LOG도 반영되도록 로깅보다 먼저 로드
    let env_file = load_env_file();
    init_logging();

    info!("🚀 사용자 디렉토리 서비스 시작중...");
    match env_file {
        Ok(name) => info!("📄 {} 파일 로드 됨", name),
        Err(message) => warn!("⚠️ {}", message),
    }

    let config = AppConfig::from_env().map_err(|e| {
        error!("❌ 설정 로드 실패: {}", e);
        io::Error::other(e)
    })?;
    info!("⚙️ 실행 환경: {:?}", config.environment);

    info!("📡 데이터베이스 연결 중...");
    let database = Database::connect(&config.mongo).await.map_err(|e| {
        error!("❌ 데이터베이스 연결 실패: {}", e);
        io::Error::other(e)
    })?;

    let collection = database.user_collection(&config.mongo.collection_name);
    info!("📚 사용자 컬렉션: {}.{}", database.database_name(), collection.name());
    let repository = UserRepository::new(Arc::new(collection));

    start_http_server(config, database, repository).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// Rate Limiting, CORS, 요청 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - Rate Limiting 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(
    config: AppConfig,
    database: Database,
    repository: UserRepository,
) -> io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}/health", bind_address);
    info!("📍 Users API: http://{}/users", bind_address);

    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| io::Error::other("Rate Limiting 설정이 올바르지 않습니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개",
        config.rate_limit.per_second,
        config.rate_limit.burst_size
    );

    let database = web::Data::new(database);
    let repository = web::Data::new(repository);
    let cors_config = config.cors;

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .app_data(database.clone())
            .app_data(repository.clone())
            .configure(configure_all_routes)
    })
        .bind(&bind_address)?
        .workers(config.server.workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로깅 초기화 전에 호출되므로 결과는 반환값으로 전달합니다.
fn load_env_file() -> Result<&'static str, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let file_name = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => ".env",
    };

    dotenv::from_filename(file_name)
        .map(|_| file_name)
        .map_err(|e| format!("{} 파일 로드 실패 (profile: {}): {}", file_name, profile, e))
}

/// 로깅 시스템을 초기화합니다
///
/// ```bash
/// RUST_LOG=user_directory::repositories=debug cargo run
/// ```
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// CORS 설정을 구성합니다
fn configure_cors(config: &CorsConfig) -> Cors {
    config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin))
        .allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "OPTIONS"])
        .allowed_headers(vec![
            header::ACCEPT,
            header::CONTENT_TYPE,
            header::ACCESS_CONTROL_REQUEST_METHOD,
        ])
        // Preflight 요청 캐시 시간 (초)
        .max_age(3600)
}
