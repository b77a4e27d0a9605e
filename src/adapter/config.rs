use anyhow::{Context, Result};
use log::info;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

use crate::domain::services::key_selection::SelectionOrder;

/// 設定ファイル（全フィールド任意）
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
#[serde(default)]
pub struct Config {
    /// 鍵ファイルを探すディレクトリ（未指定ならカレントディレクトリ）
    pub credentials_dir: Option<String>,

    // Authentication
    pub service_account_key_path: Option<String>,
    pub scopes: Vec<String>,
    pub selection_order: SelectionOrder,
}

impl Config {
    pub fn load(path: &str) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path))?;
        let config: Config = serde_json::from_str(&content)
            .with_context(|| format!("Failed to parse config file: {}", path))?;
        Ok(config)
    }

    /// ファイルがなければデフォルト設定
    pub fn load_or_default(path: &str) -> Result<Self> {
        if !Path::new(path).exists() {
            info!("No config file at {}, using defaults", path);
            return Ok(Self::default());
        }
        Self::load(path)
    }
}
