use crate::config::toml_config::CalcConfig;
use crate::utils::error::Result;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "advcalc")]
#[command(about = "Interactive calculator with unit conversions and a memory register")]
pub struct CliConfig {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Round displayed results to this many decimal places
    #[arg(short, long)]
    pub precision: Option<usize>,

    /// Do not print the welcome banner
    #[arg(long)]
    pub no_banner: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// Load the configuration file (if any) and apply command-line overrides.
    pub fn resolve(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::from_file(path)?,
            None => CalcConfig::default(),
        };

        if let Some(precision) = self.precision {
            config.shell.precision = Some(precision);
        }
        if self.no_banner {
            config.shell.banner = false;
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }

        Ok(config)
    }
}

#[derive(Debug, Clone, Parser)]
#[command(name = "calc-server")]
#[command(about = "HTTP JSON API for the calculator")]
pub struct ServerArgs {
    /// Path to a TOML configuration file
    #[arg(short, long)]
    pub config: Option<PathBuf>,

    /// Address to bind, overrides server.host
    #[arg(long)]
    pub host: Option<String>,

    /// Port to listen on, overrides server.port
    #[arg(short, long, env = "PORT")]
    pub port: Option<u16>,

    /// Directory with the web interface, overrides server.static_dir
    #[arg(long)]
    pub static_dir: Option<String>,

    /// Emit logs as JSON lines
    #[arg(long)]
    pub json_logs: bool,

    #[arg(short, long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl ServerArgs {
    pub fn resolve(&self) -> Result<CalcConfig> {
        let mut config = match &self.config {
            Some(path) => CalcConfig::from_file(path)?,
            None => CalcConfig::default(),
        };

        if let Some(host) = &self.host {
            config.server.host = host.clone();
        }
        if let Some(port) = self.port {
            config.server.port = port;
        }
        if let Some(dir) = &self.static_dir {
            config.server.static_dir = Some(dir.clone());
        }
        if self.json_logs {
            config.logging.json = true;
        }
        if self.verbose {
            config.logging.level = Some("debug".to_string());
        }

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn test_shell_overrides() {
        let args = CliConfig::parse_from(["advcalc", "--precision", "3", "--no-banner"]);
        let config = args.resolve().unwrap();

        assert_eq!(config.shell.precision, Some(3));
        assert!(!config.shell.banner);
        assert_eq!(config.log_level("warn"), "warn");
    }

    #[test]
    fn test_server_args_override_file() {
        let mut temp_file = NamedTempFile::new().unwrap();
        temp_file
            .write_all(b"[server]\nhost = \"0.0.0.0\"\nport = 8080\n")
            .unwrap();
        let path = temp_file.path().to_str().unwrap().to_string();

        let args = ServerArgs::parse_from(["calc-server", "--config", &path, "--port", "9090", "-v"]);
        let config = args.resolve().unwrap();

        assert_eq!(config.server.host, "0.0.0.0");
        assert_eq!(config.server.port, 9090);
        assert_eq!(config.log_level("info"), "debug");
    }

    #[test]
    fn test_missing_config_file() {
        let args = CliConfig::parse_from(["advcalc", "--config", "/nonexistent/advcalc.toml"]);
        assert!(args.resolve().is_err());
    }
}
