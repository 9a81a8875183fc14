use crate::core::ConfigProvider;
use crate::utils::error::{CalcError, Result};
use crate::utils::logger::LOG_LEVELS;
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;
use std::path::Path;
use std::sync::LazyLock;

/// Largest precision that still changes how an f64 prints.
pub const MAX_PRECISION: usize = 17;

static ENV_VAR: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is valid")
});

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub shell: ShellConfig,
    pub server: ServerConfig,
    pub logging: LoggingConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ShellConfig {
    pub precision: Option<usize>,
    pub banner: bool,
}

impl Default for ShellConfig {
    fn default() -> Self {
        Self {
            precision: None,
            banner: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub cors: bool,
    pub static_dir: Option<String>,
    pub max_sessions: usize,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 3000,
            cors: true,
            static_dir: None,
            max_sessions: 1024,
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct LoggingConfig {
    pub level: Option<String>,
    pub json: bool,
}

impl CalcConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(CalcError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| CalcError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${PORT})，未設定的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        ENV_VAR
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    pub fn validate_config(&self) -> Result<()> {
        validation::validate_host("server.host", &self.server.host)?;
        validation::validate_positive_number("server.port", self.server.port as usize, 1)?;
        validation::validate_positive_number("server.max_sessions", self.server.max_sessions, 1)?;

        if let Some(dir) = &self.server.static_dir {
            validation::validate_path("server.static_dir", dir)?;
        }

        if let Some(precision) = self.shell.precision {
            validation::validate_range("shell.precision", precision, 0, MAX_PRECISION)?;
        }

        if let Some(level) = &self.logging.level {
            validation::validate_one_of("logging.level", level, &LOG_LEVELS)?;
        }

        Ok(())
    }

    pub fn bind_address(&self) -> Result<SocketAddr> {
        let host = match self.server.host.as_str() {
            "localhost" => "127.0.0.1",
            host => host,
        };
        // IPv6 literals need brackets in socket address syntax
        let addr = if host.contains(':') {
            format!("[{}]:{}", host, self.server.port)
        } else {
            format!("{}:{}", host, self.server.port)
        };

        addr.parse().map_err(|_| CalcError::InvalidConfigValueError {
            field: "server.host".to_string(),
            value: self.server.host.clone(),
            reason: "Cannot form a socket address".to_string(),
        })
    }

    /// Configured level, falling back to `default` when unset.
    pub fn log_level<'a>(&'a self, default: &'a str) -> &'a str {
        self.logging.level.as_deref().unwrap_or(default)
    }
}

impl ConfigProvider for CalcConfig {
    fn precision(&self) -> Option<usize> {
        self.shell.precision
    }

    fn show_banner(&self) -> bool {
        self.shell.banner
    }
}

impl Validate for CalcConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_empty_config_uses_defaults() {
        let config = CalcConfig::from_toml_str("").unwrap();

        assert_eq!(config.server.host, "127.0.0.1");
        assert_eq!(config.server.port, 3000);
        assert!(config.server.cors);
        assert_eq!(config.server.max_sessions, 1024);
        assert!(config.shell.banner);
        assert_eq!(config.precision(), None);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_parse_full_config() {
        let toml_content = r#"
[shell]
precision = 6
banner = false

[server]
host = "0.0.0.0"
port = 8080
cors = false
static_dir = "./public"
max_sessions = 16

[logging]
level = "debug"
json = true
"#;

        let config = CalcConfig::from_toml_str(toml_content).unwrap();

        assert_eq!(config.precision(), Some(6));
        assert!(!config.show_banner());
        assert_eq!(config.server.port, 8080);
        assert_eq!(config.server.static_dir.as_deref(), Some("./public"));
        assert_eq!(config.log_level("info"), "debug");
        assert!(config.logging.json);
        assert_eq!(config.bind_address().unwrap().to_string(), "0.0.0.0:8080");
    }

    #[test]
    fn test_env_var_substitution() {
        std::env::set_var("ADVCALC_TEST_PORT", "4321");

        let toml_content = r#"
[server]
port = ${ADVCALC_TEST_PORT}
"#;

        let config = CalcConfig::from_toml_str(toml_content).unwrap();
        assert_eq!(config.server.port, 4321);

        std::env::remove_var("ADVCALC_TEST_PORT");
    }

    #[test]
    fn test_config_validation() {
        let config = CalcConfig::from_toml_str("[server]\nmax_sessions = 0\n").unwrap();
        assert!(config.validate().is_err());

        let config = CalcConfig::from_toml_str("[shell]\nprecision = 40\n").unwrap();
        assert!(config.validate().is_err());

        let config = CalcConfig::from_toml_str("[logging]\nlevel = \"loud\"\n").unwrap();
        assert!(config.validate().is_err());

        let config = CalcConfig::from_toml_str("[server]\nhost = \"example.com\"\n").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_invalid_toml() {
        let err = CalcConfig::from_toml_str("[server\nport = 1").unwrap_err();
        assert!(matches!(err, CalcError::ConfigValidationError { .. }));
    }

    #[test]
    fn test_ipv6_bind_address() {
        let config = CalcConfig::from_toml_str("[server]\nhost = \"::1\"\nport = 9000\n").unwrap();
        assert_eq!(config.bind_address().unwrap().to_string(), "[::1]:9000");
    }

    #[test]
    fn test_config_from_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nport = 5000\n")
            .unwrap();

        let config = CalcConfig::from_file(temp_file.path()).unwrap();
        assert_eq!(config.server.port, 5000);
    }
}
