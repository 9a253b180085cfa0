use std::{net::SocketAddr, path::PathBuf};

use crate::storage::StorePolicy;

/// Runtime configuration resolved from CLI arguments and environment.
#[derive(Debug, Clone)]
pub struct Context {
    pub listen: SocketAddr,
    pub log_level: String,
    pub log_json: bool,
    pub log_file: Option<PathBuf>,
    pub policy: StorePolicy,
}

impl Context {
    pub fn from_cli(cli: &crate::cli::Cli) -> Self {
        Self {
            listen: cli.listen,
            log_level: cli.log_level.clone(),
            log_json: cli.log_json,
            log_file: cli.log_file.as_ref().map(PathBuf::from),
            policy: StorePolicy {
                update_deleted: cli.update_deleted,
                redelete: cli.redelete,
            },
        }
    }
}
