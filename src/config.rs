//! Configuration and data folder resolution

use std::path::PathBuf;

use clap::Parser;

use crate::store::STATE_FILE_NAME;

/// Command-line arguments for the highscore service
#[derive(Debug, Parser)]
#[command(name = "highscore", version, about = "Local highscore service")]
pub struct Args {
    /// Folder holding the state file (created if missing)
    #[arg(long, env = "HIGHSCORE_DATA_FOLDER")]
    pub data_folder: Option<PathBuf>,

    /// Address to bind
    #[arg(long, env = "HIGHSCORE_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(long, env = "HIGHSCORE_PORT", default_value_t = 3000)]
    pub port: u16,
}

impl Args {
    /// Resolve the data folder in priority order:
    /// 1. Command-line argument
    /// 2. Environment variable (via clap's env fallback)
    /// 3. OS-dependent default
    pub fn resolve_data_folder(&self) -> PathBuf {
        self.data_folder
            .clone()
            .unwrap_or_else(default_data_folder)
    }

    /// Full path of the state file inside the resolved data folder
    pub fn state_file_path(&self) -> PathBuf {
        self.resolve_data_folder().join(STATE_FILE_NAME)
    }
}

/// OS-dependent default data folder
fn default_data_folder() -> PathBuf {
    // ~/.local/share/highscore on Linux, the platform equivalent elsewhere
    dirs::data_local_dir()
        .map(|d| d.join("highscore"))
        .unwrap_or_else(|| PathBuf::from("./highscore_data"))
}
