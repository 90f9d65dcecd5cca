use std::fs;
use std::path::PathBuf;

use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct Settings {
    pub endpoint: String,
    pub planets_input: String,
    pub uninhabited_output: String,
    pub echo_base_input: String,
    pub echo_base_output: String,
}

pub fn load_settings() -> Result<Settings, String> {
    let mut path = std::env::current_dir().map_err(|e| e.to_string())?;
    path.push("settings.json");
    read_settings(&path)
}

fn read_settings(path: &PathBuf) -> Result<Settings, String> {
    let contents =
        fs::read_to_string(path).map_err(|e| format!("Failed to read settings.json: {e}"))?;
    serde_json::from_str(&contents).map_err(|e| format!("Invalid settings.json: {e}"))
}
