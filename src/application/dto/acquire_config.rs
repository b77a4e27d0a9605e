//! # Acquire Configuration DTO
//!
//! クライアント取得設定のData Transfer Object

use std::path::PathBuf;

use crate::domain::services::key_selection::SelectionOrder;

/// Google Cloud 全体へのアクセスを要求するスコープ
pub const CLOUD_PLATFORM_SCOPE: &str = "https://www.googleapis.com/auth/cloud-platform";

/// デフォルトで要求するスコープ
pub fn default_scopes() -> Vec<String> {
    vec![CLOUD_PLATFORM_SCOPE.to_string()]
}

/// クライアント取得設定
///
/// パスはすべて絶対パスであることを前提とする（Driver層で解決済み）
#[derive(Debug, Clone)]
pub struct AcquireConfig {
    /// 鍵ファイルを探すディレクトリ
    pub credentials_dir: PathBuf,
    /// 明示的に指定された鍵ファイル（指定時はディレクトリを探索しない）
    pub key_path: Option<PathBuf>,
    /// 要求するスコープ
    pub scopes: Vec<String>,
    /// 候補が複数ある場合の選び方
    pub selection_order: SelectionOrder,
}

impl AcquireConfig {
    /// 新しい取得設定を作成します。
    ///
    /// スコープは `cloud-platform` のみ、選択順は辞書順。
    ///
    /// # 例
    ///
    /// ```
    /// use bqauth::application::dto::acquire_config::{AcquireConfig, CLOUD_PLATFORM_SCOPE};
    /// use bqauth::domain::services::key_selection::SelectionOrder;
    ///
    /// let config = AcquireConfig::new("/srv/keys");
    ///
    /// assert_eq!(config.scopes, vec![CLOUD_PLATFORM_SCOPE.to_string()]);
    /// assert_eq!(config.selection_order, SelectionOrder::Sorted);
    /// assert!(config.key_path.is_none());
    /// ```
    pub fn new(credentials_dir: impl Into<PathBuf>) -> Self {
        Self {
            credentials_dir: credentials_dir.into(),
            key_path: None,
            scopes: default_scopes(),
            selection_order: SelectionOrder::default(),
        }
    }

    pub fn with_key_path(mut self, key_path: impl Into<PathBuf>) -> Self {
        self.key_path = Some(key_path.into());
        self
    }

    /// スコープを置き換える（空の場合はデフォルトのまま）
    pub fn with_scopes(mut self, scopes: Vec<String>) -> Self {
        if !scopes.is_empty() {
            self.scopes = scopes;
        }
        self
    }

    pub fn with_selection_order(mut self, selection_order: SelectionOrder) -> Self {
        self.selection_order = selection_order;
        self
    }
}
