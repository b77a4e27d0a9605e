//! # Credential Repository Trait
//!
//! 鍵ファイルの発見と読み込みを抽象化

use async_trait::async_trait;
use std::path::{Path, PathBuf};

#[cfg(test)]
use mockall::automock;

use crate::domain::entities::service_account_key::ServiceAccountKey;
use crate::domain::errors::AuthError;

/// クレデンシャルリポジトリ
///
/// 鍵ファイル候補の一覧と、鍵ファイルの読み込みを担当するリポジトリ
#[cfg_attr(test, automock)]
#[async_trait]
pub trait CredentialRepository: Send + Sync {
    /// ディレクトリ直下の鍵ファイル候補を列挙する（非再帰）
    ///
    /// # Arguments
    ///
    /// * `dir` - 探索するディレクトリ
    ///
    /// # Returns
    ///
    /// 候補ファイルの絶対パス（順序はディレクトリ一覧の順）
    ///
    /// # Errors
    ///
    /// ディレクトリを一覧できない場合に `Filesystem` を返す
    async fn list_candidates(&self, dir: &Path) -> Result<Vec<PathBuf>, AuthError>;

    /// 鍵ファイルを読み込んで検証する
    ///
    /// # Errors
    ///
    /// 読み込めない場合は `Filesystem`、内容が不正な場合は `MalformedCredential`
    async fn load_key(&self, path: &Path) -> Result<ServiceAccountKey, AuthError>;
}
