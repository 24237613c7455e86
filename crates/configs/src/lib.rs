use anyhow::anyhow;
use anyhow::Result;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize, Default)]
pub struct AppConfig {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub database: DatabaseConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    #[serde(default)]
    pub worker_threads: Option<usize>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self { host: "127.0.0.1".into(), port: 3000, worker_threads: Some(4) }
    }
}

#[derive(Debug, Clone, Deserialize, Default)]
pub struct DatabaseConfig {
    pub url: String,
    #[serde(default = "default_database_name")]
    pub database: String,
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout_secs: u64,
    #[serde(default = "default_max_pool_size")]
    pub max_pool_size: u32,
}

fn default_database_name() -> String { "biodata".to_string() }
fn default_connect_timeout() -> u64 { 30 }
fn default_max_pool_size() -> u32 { 10 }

pub fn load_default() -> Result<AppConfig> {
    let path = std::env::var("CONFIG_PATH").unwrap_or_else(|_| "config.toml".to_string());
    load_from_file(&path)
}

pub fn load_from_file(path: &str) -> Result<AppConfig> {
    let content = std::fs::read_to_string(path)?;
    let cfg: AppConfig = toml::from_str(&content)?;
    Ok(cfg)
}

impl AppConfig {
    pub fn load_and_validate() -> Result<Self> {
        let mut cfg = load_default()?;
        cfg.normalize_and_validate()?;
        Ok(cfg)
    }

    pub fn normalize_and_validate(&mut self) -> Result<()> {
        self.server.normalize()?;
        // Connection string may come from the environment instead of TOML
        self.database.normalize_from_env();
        self.database.validate()?;
        Ok(())
    }
}

impl ServerConfig {
    fn normalize(&mut self) -> Result<()> {
        if self.host.trim().is_empty() {
            self.host = "127.0.0.1".to_string();
        }
        if self.port == 0 {
            return Err(anyhow!("server.port must be in 1..=65535"));
        }
        match self.worker_threads {
            Some(0) | None => self.worker_threads = Some(4),
            Some(_) => {}
        }
        Ok(())
    }
}

impl DatabaseConfig {
    pub fn normalize_from_env(&mut self) {
        // TOML takes precedence; fall back to MONGODB_URL, then DATABASE_URL
        if self.url.trim().is_empty() {
            if let Ok(url) = std::env::var("MONGODB_URL") {
                self.url = url;
            } else if let Ok(url) = std::env::var("DATABASE_URL") {
                self.url = url;
            }
        }
        if self.database.trim().is_empty() {
            self.database = default_database_name();
        }
    }

    pub fn validate(&self) -> Result<()> {
        if self.url.trim().is_empty() {
            return Err(anyhow!(
                "database.url is empty; set it in config.toml or via MONGODB_URL"
            ));
        }
        let lower = self.url.to_lowercase();
        if !(lower.starts_with("mongodb://") || lower.starts_with("mongodb+srv://")) {
            return Err(anyhow!("database.url must start with mongodb:// or mongodb+srv://"));
        }
        if self.connect_timeout_secs == 0 {
            return Err(anyhow!("database.connect_timeout_secs must be a positive number of seconds"));
        }
        if self.max_pool_size == 0 {
            return Err(anyhow!("database.max_pool_size must be >= 1"));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_sane() {
        let cfg = AppConfig::default();
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 3000);
    }

    #[test]
    fn parses_full_toml() {
        let cfg: AppConfig = toml::from_str(
            r#"
            [server]
            host = "0.0.0.0"
            port = 8081
            worker_threads = 2

            [database]
            url = "mongodb://localhost:27017"
            database = "rccg"
            "#,
        )
        .unwrap();
        assert_eq!(cfg.server.port, 8081);
        assert_eq!(cfg.database.database, "rccg");
        assert_eq!(cfg.database.connect_timeout_secs, 30);
    }

    #[test]
    fn rejects_non_mongodb_scheme() {
        let db = DatabaseConfig {
            url: "postgres://localhost/biodata".into(),
            database: "biodata".into(),
            connect_timeout_secs: 30,
            max_pool_size: 10,
        };
        assert!(db.validate().is_err());
    }

    #[test]
    fn accepts_srv_scheme() {
        let db = DatabaseConfig {
            url: "mongodb+srv://cluster.example.net/biodata".into(),
            database: "biodata".into(),
            connect_timeout_secs: 30,
            max_pool_size: 10,
        };
        assert!(db.validate().is_ok());
    }

    #[test]
    fn normalize_restores_blank_host_and_threads() {
        let mut server = ServerConfig { host: "  ".into(), port: 3000, worker_threads: Some(0) };
        server.normalize().unwrap();
        assert_eq!(server.host, "127.0.0.1");
        assert_eq!(server.worker_threads, Some(4));
    }
}
