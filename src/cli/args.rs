use clap::Parser;
use std::env;

use crate::storage::RedeletePolicy;

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "UFO sightings service",
    long_about = "Serves UFO sightings over HTTP/JSON, backed by an in-memory store."
)]
pub struct Cli {
    #[arg(
        long = "listen",
        env = "UFO_HTTP_LISTEN",
        value_name = "ADDR",
        default_value = "127.0.0.1:8081",
        help = "HTTP API listen address (host:port)"
    )]
    pub listen: std::net::SocketAddr,

    #[arg(
        long = "log-level",
        env = "LOGGER_LEVEL",
        value_name = "FILTER",
        default_value = "info",
        help = "Default log filter, overridden by RUST_LOG"
    )]
    pub log_level: String,

    #[arg(
        long = "log-json",
        env = "LOGGER_AS_JSON",
        default_value_t = false,
        help = "Emit log lines as JSON"
    )]
    pub log_json: bool,

    #[arg(
        long = "log-file",
        env = "UFO_LOG_FILE",
        value_name = "PATH",
        help = "Write logs to PATH (in addition to stderr)"
    )]
    pub log_file: Option<String>,

    #[arg(
        long = "update-deleted",
        env = "UFO_UPDATE_DELETED",
        default_value_t = false,
        help = "Allow updates to sightings that are already soft-deleted"
    )]
    pub update_deleted: bool,

    #[arg(
        long = "redelete",
        env = "UFO_REDELETE",
        value_name = "POLICY",
        default_value = "restamp",
        help = "Deleting an already deleted sighting: restamp, keep or reject"
    )]
    pub redelete: RedeletePolicy,
}

/// Loads `.env` (or `$DOTENV_PATH`) into the process environment, then parses arguments.
pub fn parse() -> Cli {
    let dotenv_path = env::var("DOTENV_PATH").unwrap_or(".env".into());
    dotenvy::from_filename(&dotenv_path).ok();

    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_when_no_flags_given() {
        let cli = Cli::try_parse_from(["ufo"]).unwrap();

        assert_eq!(cli.listen, "127.0.0.1:8081".parse().unwrap());
        assert_eq!(cli.log_level, "info");
        assert!(!cli.log_json);
        assert!(cli.log_file.is_none());
        assert!(!cli.update_deleted);
        assert_eq!(cli.redelete, RedeletePolicy::Restamp);
    }

    #[test]
    fn parses_policy_flags() {
        let cli = Cli::try_parse_from([
            "ufo",
            "--update-deleted",
            "--redelete",
            "reject",
            "--listen",
            "0.0.0.0:9000",
            "--log-json",
        ])
        .unwrap();

        assert!(cli.update_deleted);
        assert_eq!(cli.redelete, RedeletePolicy::Reject);
        assert_eq!(cli.listen.port(), 9000);
        assert!(cli.log_json);
    }

    #[test]
    fn rejects_unknown_redelete_policy() {
        let res = Cli::try_parse_from(["ufo", "--redelete", "purge"]);
        assert!(res.is_err());
    }
}
