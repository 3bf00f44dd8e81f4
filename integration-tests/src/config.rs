use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

/// Live-server settings read from `secrets.json` in the working directory.
#[derive(Debug, Deserialize)]
pub struct Secrets {
    pub cobbler_url: String,
    pub username: String,
    pub password: String,
    /// Existing kernel and initrd paths on the server host.
    pub kernel: String,
    pub initrd: String,
}

pub fn load_secrets() -> Result<Secrets, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("secrets.json");
    read_secrets(&path)
}

fn read_secrets(path: &PathBuf) -> Result<Secrets, String> {
    let contents = fs::read_to_string(path)
        .map_err(|e| format!("Failed to read secrets.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid secrets.json: {e}"))
}
