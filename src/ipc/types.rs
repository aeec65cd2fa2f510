use std::path::{Path, PathBuf};

use rusqlite::Connection;
use serde::Deserialize;

use crate::config::Config;
use crate::db;

#[derive(Debug, Deserialize, Clone)]
pub struct Request {
    pub id: String,
    pub method: String,
    #[serde(default)]
    pub params: serde_json::Value,
}

/// Everything a request handler can reach: the process config and the
/// currently open workspace, if any.
pub struct AppState {
    pub config: Config,
    pub workspace: Option<PathBuf>,
    pub db: Option<Connection>,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        Self {
            config,
            workspace: None,
            db: None,
        }
    }

    /// Opens (creating if needed) the store under `path` and makes it current.
    /// The previous workspace stays selected when this fails.
    pub fn open_workspace(&mut self, path: &Path) -> anyhow::Result<()> {
        let conn = db::open_db(path)?;
        self.workspace = Some(path.to_path_buf());
        self.db = Some(conn);
        Ok(())
    }

    /// Opens `VIOLATIOND_WORKSPACE` when it was configured.
    pub fn open_configured_workspace(&mut self) {
        let Some(path) = self.config.workspace.clone() else {
            return;
        };
        if let Err(e) = self.open_workspace(&path) {
            tracing::error!(path = %path.display(), error = %e, "startup workspace not opened");
        }
    }
}
