use thiserror::Error;

const DEFAULT_DATABASE_URL: &str = "postgres://localhost/shareit";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

/// 設定値の読み込みエラー
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{name} must be a valid {expected}, got {value:?}")]
    InvalidValue {
        name: &'static str,
        expected: &'static str,
        value: String,
    },
}

/// 環境変数から組み立てるアプリケーション設定
///
/// - DATABASE_URL
/// - PORT
/// - DATABASE_MAX_CONNECTIONS
/// - RUN_MIGRATIONS（true / false）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub database_url: String,
    pub port: u16,
    pub max_connections: u32,
    pub run_migrations: bool,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 任意の参照関数から設定を読む（テスト用に環境変数から切り離す）
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database_url =
            lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string());

        let port = parse_or(&lookup, "PORT", "port number", DEFAULT_PORT)?;
        let max_connections = parse_or(
            &lookup,
            "DATABASE_MAX_CONNECTIONS",
            "connection count",
            DEFAULT_MAX_CONNECTIONS,
        )?;
        let run_migrations = parse_or(&lookup, "RUN_MIGRATIONS", "boolean", true)?;

        Ok(Self {
            database_url,
            port,
            max_connections,
            run_migrations,
        })
    }

    pub fn bind_address(&self) -> String {
        format!("0.0.0.0:{}", self.port)
    }
}

fn parse_or<F, T>(
    lookup: &F,
    name: &'static str,
    expected: &'static str,
    default: T,
) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(name) {
        None => Ok(default),
        Some(value) => value
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue {
                name,
                expected,
                value,
            }),
    }
}
