//! File Credential Repository Implementation
//!
//! CredentialRepositoryのファイルシステム実装

use async_trait::async_trait;
use log::{debug, info, warn};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::domain::entities::service_account_key::ServiceAccountKey;
use crate::domain::errors::AuthError;
use crate::domain::repositories::credential_repository::CredentialRepository;
use crate::domain::services::key_selection::is_credential_file_name;

/// ファイルシステムベースのクレデンシャルリポジトリ
pub struct FileCredentialRepository;

impl FileCredentialRepository {
    /// 新しいリポジトリを作成
    pub fn new() -> Self {
        Self
    }

    /// 鍵ファイル候補を列挙する（内部実装）
    fn list_candidates_internal(dir: &Path) -> Result<Vec<PathBuf>, AuthError> {
        let metadata = fs::metadata(dir).map_err(|e| AuthError::listing(dir, e))?;
        if !metadata.is_dir() {
            return Err(AuthError::listing(
                dir,
                io::Error::other("not a directory"),
            ));
        }

        let mut candidates = Vec::new();

        // 直下のエントリのみ（非再帰）
        for entry in WalkDir::new(dir).min_depth(1).max_depth(1).follow_links(true) {
            let entry = match entry {
                Ok(entry) => entry,
                Err(e) if e.depth() == 0 => {
                    let source = e
                        .into_io_error()
                        .unwrap_or_else(|| io::Error::other("directory loop detected"));
                    return Err(AuthError::listing(dir, source));
                }
                Err(e) => {
                    warn!("Skipping unreadable entry in {}: {}", dir.display(), e);
                    continue;
                }
            };

            let file_name = entry.file_name().to_string_lossy();
            if !is_credential_file_name(&file_name) {
                continue;
            }
            if !entry.file_type().is_file() {
                debug!("Skipping non-file entry: {}", entry.path().display());
                continue;
            }

            candidates.push(entry.into_path());
        }

        info!(
            "Found {} credential file candidates in {}",
            candidates.len(),
            dir.display()
        );

        Ok(candidates)
    }

    /// 鍵ファイルを読み込む（同期処理）
    fn load_key_sync(path: &Path) -> Result<ServiceAccountKey, AuthError> {
        let content = fs::read(path).map_err(|e| AuthError::unreadable(path, e))?;
        ServiceAccountKey::from_json_slice(path, &content)
    }
}

#[async_trait]
impl CredentialRepository for FileCredentialRepository {
    async fn list_candidates(&self, dir: &Path) -> Result<Vec<PathBuf>, AuthError> {
        let dir = dir.to_path_buf();
        let task_dir = dir.clone();
        tokio::task::spawn_blocking(move || Self::list_candidates_internal(&task_dir))
            .await
            .map_err(|e| AuthError::listing(dir, io::Error::other(e)))?
    }

    async fn load_key(&self, path: &Path) -> Result<ServiceAccountKey, AuthError> {
        let path = path.to_path_buf();
        let task_path = path.clone();
        tokio::task::spawn_blocking(move || Self::load_key_sync(&task_path))
            .await
            .map_err(|e| AuthError::unreadable(path, io::Error::other(e)))?
    }
}

impl Default for FileCredentialRepository {
    fn default() -> Self {
        Self::new()
    }
}
