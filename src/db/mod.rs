//! Database Connection Management Module
//!
//! MongoDB 데이터베이스 연결 관리를 담당하는 모듈입니다.
//! 연결 정보는 [`MongoConfig`]로 주입받으며 환경 변수를 직접 읽지 않습니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use std::sync::Arc;
//! use crate::config::AppConfig;
//! use crate::db::Database;
//! use crate::repositories::users::UserRepository;
//!
//! let config = AppConfig::from_env()?;
//! let database = Database::connect(&config.mongo).await?;
//! let collection = database.user_collection(&config.mongo.collection_name);
//! let repository = UserRepository::new(Arc::new(collection));
//! ```

pub mod collection;

use std::time::Duration;
use mongodb::{bson::doc, options::ClientOptions, Client};
use log::{info, warn};
use crate::config::MongoConfig;

pub use collection::MongoUserCollection;

/// MongoDB 데이터베이스 연결 래퍼
///
/// 클라이언트 핸들은 내부적으로 연결 풀을 공유하므로 복제 비용이 낮습니다.
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 설정값으로 MongoDB 클라이언트를 만들고 `ping`으로 연결을 확인합니다.
    ///
    /// ## 사용 예제
    /// ```rust,ignore
    /// let database = Database::connect(&config.mongo).await?;
    /// ```
    pub async fn connect(config: &MongoConfig) -> Result<Self, mongodb::error::Error> {
        let mut client_options = ClientOptions::parse(&config.uri).await?;

        // 서버 로그와 모니터링에서 식별용
        client_options.app_name = Some(config.app_name.clone());
        client_options.connect_timeout = Some(Duration::from_secs(config.connect_timeout_secs));
        client_options.server_selection_timeout =
            Some(Duration::from_secs(config.server_selection_timeout_secs));

        let client = Client::with_options(client_options)?;

        let database = Self {
            client,
            database_name: config.database_name.clone(),
        };
        database.ping().await?;

        info!("✅ MongoDB 연결 성공: {}", database.database_name);

        Ok(database)
    }

    /// 서버에 `ping` 명령을 보내 연결 상태를 확인합니다.
    pub async fn ping(&self) -> Result<(), mongodb::error::Error> {
        self.get_database()
            .run_command(doc! { "ping": 1 })
            .await
            .map(|_| ())
            .inspect_err(|e| warn!("⚠️ MongoDB ping 실패: {}", e))
    }

    /// MongoDB 데이터베이스 인스턴스를 반환합니다.
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }

    /// 사용자 컬렉션 어댑터를 반환합니다.
    pub fn user_collection(&self, collection_name: &str) -> MongoUserCollection {
        MongoUserCollection::new(self.get_database().collection(collection_name))
    }

    /// MongoDB 클라이언트 인스턴스를 반환합니다.
    ///
    /// 세션이나 트랜잭션처럼 클라이언트 레벨 작업이 필요한 경우에 사용합니다.
    pub fn client(&self) -> &Client {
        &self.client
    }

    /// 데이터베이스 이름을 반환합니다.
    pub fn database_name(&self) -> &str {
        &self.database_name
    }
}
