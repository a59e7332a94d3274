//! 데이터 및 서버 설정 관리 모듈
//!
//! 저장소, 서버, 환경 관련 설정을 시작 시점에 한 번 읽어 [`AppConfig`]로 조립합니다.
//! 이후 설정은 생성자 인자로 주입되며 환경 변수를 다시 읽지 않습니다.

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use thiserror::Error;

/// 설정값 해석 실패
#[derive(Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("{key} 값이 올바르지 않습니다: {value:?} ({reason})")]
    InvalidValue {
        key: &'static str,
        value: String,
        reason: String,
    },
}

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 개발 환경
    Development,
    /// 테스트 환경
    Test,
    /// 스테이징 환경
    Staging,
    /// 프로덕션 환경
    Production,
}

impl Environment {
    /// 문자열에서 Environment를 생성합니다.
    ///
    /// 대소문자를 구분하지 않으며, 알 수 없는 값은 `Production`으로 취급합니다.
    pub fn from_name(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }
}

/// 서버 바인딩 설정
#[derive(Debug, Clone, PartialEq)]
pub struct ServerConfig {
    /// 호스트 주소 (`HOST`, 기본값 "0.0.0.0")
    pub host: String,
    /// 포트 (`SERVICE_PORT` 또는 `PORT`, 기본값 8080)
    pub port: u16,
    /// 워커 스레드 수 (`SERVER_WORKERS`, 기본값 4)
    pub workers: usize,
}

impl ServerConfig {
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone, PartialEq)]
pub struct MongoConfig {
    /// 연결 URI (`MONGO_URI`)
    /// Format: mongodb://[username:password@]host[:port][/database][?options]
    pub uri: String,
    /// 데이터베이스 이름 (`MONGO_DATABASE_NAME`)
    pub database_name: String,
    /// 사용자 컬렉션 이름 (`MONGO_COLLECTION_NAME`)
    pub collection_name: String,
    /// 서버 로그에 표시될 애플리케이션 이름
    pub app_name: String,
    /// 연결 타임아웃 (`MONGO_CONNECT_TIMEOUT_SECS`, 기본값 10초)
    pub connect_timeout_secs: u64,
    /// 서버 선택 타임아웃 (`MONGO_SERVER_SELECTION_TIMEOUT_SECS`, 기본값 30초)
    pub server_selection_timeout_secs: u64,
}

/// Rate Limiting 설정
#[derive(Debug, Clone, PartialEq)]
pub struct RateLimitConfig {
    /// 초당 허용 요청 수 (`RATE_LIMIT_PER_SECOND`, 기본값 100)
    pub per_second: u64,
    /// 버스트 허용량 (`RATE_LIMIT_BURST_SIZE`, 기본값 200)
    pub burst_size: u32,
}

/// CORS 설정
#[derive(Debug, Clone, PartialEq)]
pub struct CorsConfig {
    /// 허용 Origin 목록 (`CORS_ALLOWED_ORIGINS`, 쉼표 구분)
    pub allowed_origins: Vec<String>,
}

/// 애플리케이션 전체 설정
///
/// # Examples
///
/// ```rust,ignore
/// let config = AppConfig::from_env()?;
/// let database = Database::connect(&config.mongo).await?;
/// ```
#[derive(Debug, Clone, PartialEq)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub mongo: MongoConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

const DEFAULT_ORIGINS: [&str; 4] = [
    "http://localhost:3000",
    "http://127.0.0.1:3000",
    "http://localhost:8080",
    "http://127.0.0.1:8080",
];

impl AppConfig {
    /// 프로세스 환경 변수에서 설정을 읽습니다.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로부터 설정을 조립합니다.
    ///
    /// 값이 없으면 기본값을 사용하고, 숫자 값을 해석할 수 없으면 에러를 반환합니다.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let environment = lookup("ENVIRONMENT")
            .map(|name| Environment::from_name(&name))
            .unwrap_or(Environment::Development);

        let port = match lookup("SERVICE_PORT").or_else(|| lookup("PORT")) {
            Some(raw) => parse_value("SERVICE_PORT", raw)?,
            None => 8080,
        };

        let server = ServerConfig {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            workers: parse_or(&lookup, "SERVER_WORKERS", 4)?,
        };

        let mongo = MongoConfig {
            uri: lookup("MONGO_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("MONGO_DATABASE_NAME").unwrap_or_else(|| "user_directory".to_string()),
            collection_name: lookup("MONGO_COLLECTION_NAME").unwrap_or_else(|| "users".to_string()),
            app_name: "user_directory".to_string(),
            connect_timeout_secs: parse_or(&lookup, "MONGO_CONNECT_TIMEOUT_SECS", 10)?,
            server_selection_timeout_secs: parse_or(&lookup, "MONGO_SERVER_SELECTION_TIMEOUT_SECS", 30)?,
        };

        let rate_limit = RateLimitConfig {
            per_second: parse_or(&lookup, "RATE_LIMIT_PER_SECOND", 100)?,
            burst_size: parse_or(&lookup, "RATE_LIMIT_BURST_SIZE", 200)?,
        };

        let allowed_origins = match lookup("CORS_ALLOWED_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(str::to_string)
                .collect(),
            None => DEFAULT_ORIGINS.iter().map(|origin| origin.to_string()).collect(),
        };

        Ok(Self {
            environment,
            server,
            mongo,
            rate_limit,
            cors: CorsConfig { allowed_origins },
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: FromStr,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => parse_value(key, raw),
        None => Ok(default),
    }
}

fn parse_value<T>(key: &'static str, raw: String) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    raw.trim().parse::<T>().map_err(|e| ConfigError::InvalidValue {
        key,
        reason: e.to_string(),
        value: raw,
    })
}
