//! Client Bootstrap
//!
//! 実装を組み立てて認証済みクライアントを返す入口

use std::path::{Path, PathBuf};
use std::sync::Arc;

use crate::adapter::bigquery::client::{BigQueryClientFactory, WarehouseClient};
use crate::adapter::repositories::file_credential_repository::FileCredentialRepository;
use crate::application::dto::acquire_config::AcquireConfig;
use crate::application::use_cases::acquire_client::AcquireClientUseCase;
use crate::application::use_cases::resolve_credential::ResolveCredentialUseCase;
use crate::domain::entities::service_account_key::ResolvedCredential;
use crate::domain::errors::AuthError;

/// CLI引数・設定ファイルの文字列パスを解決する
///
/// `~` を展開し、相対パスなら `base` に連結する
pub fn absolute_path(path: &str, base: &Path) -> PathBuf {
    let expanded = PathBuf::from(shellexpand::tilde(path).as_ref());
    if expanded.is_absolute() {
        expanded
    } else {
        base.join(expanded)
    }
}

fn current_dir() -> Result<PathBuf, AuthError> {
    std::env::current_dir().map_err(|e| AuthError::listing(".", e))
}

/// `dir` 直下の鍵ファイルから認証済みBigQueryクライアントを作る
///
/// 候補が複数あればファイル名の辞書順で最初のものを使う。
/// 呼び出しごとに新しいハンドルを返す。
///
/// # Errors
///
/// `NoCredentialFile` / `MalformedCredential` / `Filesystem` / `ClientConstruction`
pub async fn acquire_client(dir: impl AsRef<Path>) -> Result<WarehouseClient, AuthError> {
    // Path はそのまま扱う（`~` の展開は文字列入力のときだけ）
    let dir = dir.as_ref();
    let dir = if dir.is_absolute() {
        dir.to_path_buf()
    } else {
        current_dir()?.join(dir)
    };
    acquire_client_with(&AcquireConfig::new(dir)).await
}

/// カレントディレクトリの鍵ファイルから認証済みBigQueryクライアントを作る
pub async fn acquire_client_from_current_dir() -> Result<WarehouseClient, AuthError> {
    acquire_client_with(&AcquireConfig::new(current_dir()?)).await
}

/// 設定を指定してクライアントを作る
pub async fn acquire_client_with(config: &AcquireConfig) -> Result<WarehouseClient, AuthError> {
    let use_case = AcquireClientUseCase::new(
        Arc::new(FileCredentialRepository::new()),
        Arc::new(BigQueryClientFactory::new()),
    );
    use_case.execute(config).await
}

/// 鍵ファイルの解決だけを行う（クライアントは作らない）
pub async fn resolve_credential(config: &AcquireConfig) -> Result<ResolvedCredential, AuthError> {
    let use_case = ResolveCredentialUseCase::new(Arc::new(FileCredentialRepository::new()));
    use_case.execute(config).await
}
