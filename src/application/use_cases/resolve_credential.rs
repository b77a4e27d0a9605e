//! # Resolve Credential Use Case
//!
//! 鍵ファイルの発見・選択・読み込みユースケース

use log::{info, warn};
use std::sync::Arc;

use crate::application::dto::acquire_config::AcquireConfig;
use crate::domain::entities::service_account_key::ResolvedCredential;
use crate::domain::errors::AuthError;
use crate::domain::repositories::credential_repository::CredentialRepository;
use crate::domain::services::key_selection::select_credential_file;

/// 鍵ファイル解決ユースケース
///
/// ディレクトリから鍵ファイルを一つ選び、内容を検証して返す
pub struct ResolveCredentialUseCase<R: CredentialRepository> {
    credential_repository: Arc<R>,
}

impl<R: CredentialRepository> ResolveCredentialUseCase<R> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `credential_repository` - クレデンシャルリポジトリ
    pub fn new(credential_repository: Arc<R>) -> Self {
        Self {
            credential_repository,
        }
    }

    /// 鍵ファイルを解決する
    ///
    /// # Errors
    ///
    /// - 候補が一つもない場合は `NoCredentialFile`
    /// - ディレクトリや鍵ファイルを読めない場合は `Filesystem`
    /// - 鍵の内容が不正な場合は `MalformedCredential`
    pub async fn execute(&self, config: &AcquireConfig) -> Result<ResolvedCredential, AuthError> {
        let path = match &config.key_path {
            Some(key_path) => {
                info!("Using explicit credential file: {}", key_path.display());
                key_path.clone()
            }
            None => {
                let candidates = self
                    .credential_repository
                    .list_candidates(&config.credentials_dir)
                    .await?;
                let count = candidates.len();

                let selected = select_credential_file(candidates, config.selection_order)
                    .ok_or_else(|| AuthError::NoCredentialFile {
                        dir: config.credentials_dir.clone(),
                    })?;

                if count > 1 {
                    warn!(
                        "Found {} credential files in {}, using {} ({:?} order)",
                        count,
                        config.credentials_dir.display(),
                        selected.display(),
                        config.selection_order
                    );
                }

                selected
            }
        };

        let key = self.credential_repository.load_key(&path).await?;
        info!(
            "Loaded credential {} for project {}",
            path.display(),
            key.project_id
        );

        Ok(ResolvedCredential::new(path, key))
    }
}
