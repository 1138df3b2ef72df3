use crate::error::FarmResult;
use config::{Config, Environment, File};
use serde::{Deserialize, Serialize};

/// 应用配置
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    pub server: ServerConfig,
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// 静态文件目录 (非 /api 路径)
    pub static_dir: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DatabaseConfig {
    /// SQLite 数据文件路径
    pub path: String,
    pub max_connections: u32,
    /// 慢查询日志阈值 (秒)
    pub slow_statement_secs: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: "0.0.0.0".to_string(),
                port: 3000,
                static_dir: "public".to_string(),
            },
            database: DatabaseConfig {
                path: "farm.db".to_string(),
                max_connections: 5,
                slow_statement_secs: 1,
            },
        }
    }
}

impl AppConfig {
    /// 加载配置: 默认值 -> 配置文件 (可选) -> FARM_ 环境变量 -> PORT
    pub fn load() -> FarmResult<Self> {
        let file = std::env::var("FARM_CONFIG").unwrap_or_else(|_| "farm".to_string());
        let defaults = Self::default();

        let mut builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("server.static_dir", defaults.server.static_dir)?
            .set_default("database.path", defaults.database.path)?
            .set_default(
                "database.max_connections",
                i64::from(defaults.database.max_connections),
            )?
            .set_default(
                "database.slow_statement_secs",
                defaults.database.slow_statement_secs as i64,
            )?
            .add_source(File::with_name(&file).required(false))
            .add_source(
                Environment::with_prefix("FARM")
                    .prefix_separator("_")
                    .separator("__"),
            );

        // 兼容旧部署的 PORT 变量
        if let Ok(port) = std::env::var("PORT") {
            builder = builder.set_override("server.port", port)?;
        }

        Ok(builder.build()?.try_deserialize()?)
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_point_at_local_farm_db() {
        let config = AppConfig::default();
        assert_eq!(config.database.path, "farm.db");
        assert_eq!(config.server.port, 3000);
        assert_eq!(config.listen_addr(), "0.0.0.0:3000");
    }
}
