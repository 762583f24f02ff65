//! Master configuration
//!
//! Command-line flags with environment variable fallbacks.

use clap::Parser;

use crate::repository::codec::BlobFormat;

/// Master service configuration
#[derive(Debug, Clone, Parser)]
#[command(name = "opsws-master")]
#[command(about = "OpsWS pipeline registry", long_about = None)]
pub struct Config {
    /// SQLite database URL (the file is created if missing)
    #[arg(long, env = "DATABASE_URL", default_value = "sqlite://opsws.db")]
    pub database_url: String,

    /// Address the HTTP server listens on
    #[arg(long, env = "OPSWS_BIND_ADDR", default_value = "0.0.0.0:8080")]
    pub bind_addr: String,

    /// Maximum number of pooled database connections
    #[arg(long, env = "OPSWS_MAX_CONNECTIONS", default_value_t = 5)]
    pub max_connections: u32,

    /// Encoding used for the nested agent/labels/stages columns
    #[arg(long, env = "OPSWS_BLOB_FORMAT", value_enum, default_value_t = BlobFormat::Json)]
    pub blob_format: BlobFormat,
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn default_of(id: &str) -> String {
        let command = Config::command();
        let arg = command
            .get_arguments()
            .find(|a| a.get_id() == id)
            .unwrap();
        arg.get_default_values()[0].to_string_lossy().into_owned()
    }

    #[test]
    fn test_defaults() {
        assert_eq!(default_of("database_url"), "sqlite://opsws.db");
        assert_eq!(default_of("bind_addr"), "0.0.0.0:8080");
        assert_eq!(default_of("max_connections"), "5");
        assert_eq!(default_of("blob_format"), "json");
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = Config::try_parse_from([
            "opsws-master",
            "--database-url",
            "sqlite::memory:",
            "--blob-format",
            "yaml",
            "--max-connections",
            "1",
        ])
        .unwrap();
        assert_eq!(config.database_url, "sqlite::memory:");
        assert_eq!(config.blob_format, BlobFormat::Yaml);
        assert_eq!(config.max_connections, 1);
    }

    #[test]
    fn test_unknown_blob_format_rejected() {
        let result = Config::try_parse_from(["opsws-master", "--blob-format", "toml"]);
        assert!(result.is_err());
    }
}
