//! GCP Authentication
//!
//! Google Cloud Platform認証機能
//!
//! 環境変数 `GOOGLE_APPLICATION_CREDENTIALS` は使わず、
//! 読み込み済みの鍵からトークンソースを作る。
//! SDKはトークンソース作成時にトークンを一度取得する（`token_uri` への通信が発生する）

use google_cloud_bigquery::client::google_cloud_auth::credentials::CredentialsFile;
use google_cloud_bigquery::client::google_cloud_auth::error::Error as SdkAuthError;
use google_cloud_bigquery::client::google_cloud_auth::project::Config as AuthConfig;
use google_cloud_bigquery::client::google_cloud_auth::token::DefaultTokenSourceProvider;
use google_cloud_bigquery::client::{Client, ClientConfig};
use log::debug;
use std::fmt::Display;

use crate::domain::entities::service_account_key::ResolvedCredential;
use crate::domain::errors::AuthError;

/// 検証済みの鍵の内容からSDKのクレデンシャルを作る（ファイルは読み直さない）
pub async fn credentials_from_key(
    credential: &ResolvedCredential,
) -> Result<CredentialsFile, AuthError> {
    CredentialsFile::new_from_str(credential.key.raw_json())
        .await
        .map_err(|e| AuthError::malformed(&credential.path, e))
}

/// Creates a BigQuery client from a resolved service account key with the given scopes
pub async fn create_bigquery_client(
    credential: &ResolvedCredential,
    scopes: &[String],
) -> Result<Client, AuthError> {
    let credentials_file = credentials_from_key(credential).await?;
    let scope_refs: Vec<&str> = scopes.iter().map(String::as_str).collect();

    debug!(
        "Building token sources for {} with scopes {:?}",
        credential.key.client_email, scope_refs
    );

    // REST用とgRPC用でトークンソースを分ける（SDKの要求）
    let http_provider = DefaultTokenSourceProvider::new_with_credentials(
        AuthConfig::default().with_scopes(&scope_refs),
        Box::new(credentials_file.clone()),
    )
    .await
    .map_err(|e| classify_token_error(credential, e))?;

    let grpc_provider = DefaultTokenSourceProvider::new_with_credentials(
        AuthConfig::default().with_scopes(&scope_refs),
        Box::new(credentials_file),
    )
    .await
    .map_err(|e| classify_token_error(credential, e))?;

    let config = ClientConfig::new(Box::new(http_provider), Box::new(grpc_provider));

    Client::new(config)
        .await
        .map_err(|e| construction_error(credential, e))
}

/// トークンソース作成時のエラーを分類する
///
/// 鍵の中身（JSON・秘密鍵）が原因なら `MalformedCredential`、
/// トークンエンドポイントとの通信や応答が原因なら `ClientConstruction`
fn classify_token_error(credential: &ResolvedCredential, error: SdkAuthError) -> AuthError {
    match &error {
        SdkAuthError::JsonError(_) | SdkAuthError::JwtError(_) => {
            AuthError::malformed(&credential.path, error)
        }
        _ => construction_error(credential, error),
    }
}

fn construction_error(credential: &ResolvedCredential, error: impl Display) -> AuthError {
    AuthError::ClientConstruction {
        project_id: credential.project_id().to_string(),
        reason: error.to_string(),
    }
}
