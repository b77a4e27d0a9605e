//! BigQuery Client Handle
//!
//! 認証済みクライアントハンドルとファクトリの実装

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use google_cloud_bigquery::client::Client;
use log::debug;
use std::fmt;
use std::path::{Path, PathBuf};

use crate::adapter::auth::gcp_auth::create_bigquery_client;
use crate::domain::entities::service_account_key::ResolvedCredential;
use crate::domain::errors::AuthError;
use crate::domain::repositories::client_factory::WarehouseClientFactory;

/// 認証済みBigQueryクライアントハンドル
///
/// 一つのプロジェクトに紐づく。呼び出し元が所有し、dropで解放される
pub struct WarehouseClient {
    client: Client,
    project_id: String,
    key_path: PathBuf,
    scopes: Vec<String>,
    acquired_at: DateTime<Utc>,
}

impl WarehouseClient {
    pub fn new(client: Client, credential: &ResolvedCredential, scopes: &[String]) -> Self {
        Self {
            client,
            project_id: credential.project_id().to_string(),
            key_path: credential.path.clone(),
            scopes: scopes.to_vec(),
            acquired_at: Utc::now(),
        }
    }

    /// SDKのクライアント（クエリ等はこちらを使う）
    pub fn client(&self) -> &Client {
        &self.client
    }

    pub fn project_id(&self) -> &str {
        &self.project_id
    }

    pub fn key_path(&self) -> &Path {
        &self.key_path
    }

    pub fn scopes(&self) -> &[String] {
        &self.scopes
    }

    pub fn acquired_at(&self) -> DateTime<Utc> {
        self.acquired_at
    }
}

impl fmt::Debug for WarehouseClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("WarehouseClient")
            .field("project_id", &self.project_id)
            .field("key_path", &self.key_path)
            .field("scopes", &self.scopes)
            .field("acquired_at", &self.acquired_at)
            .finish_non_exhaustive()
    }
}

impl Drop for WarehouseClient {
    fn drop(&mut self) {
        debug!("Releasing BigQuery client for project {}", self.project_id);
    }
}

/// Production implementation of WarehouseClientFactory
pub struct BigQueryClientFactory;

impl BigQueryClientFactory {
    pub fn new() -> Self {
        Self
    }
}

impl Default for BigQueryClientFactory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl WarehouseClientFactory for BigQueryClientFactory {
    type Handle = WarehouseClient;

    async fn create_client(
        &self,
        credential: &ResolvedCredential,
        scopes: &[String],
    ) -> Result<WarehouseClient, AuthError> {
        let client = create_bigquery_client(credential, scopes).await?;
        Ok(WarehouseClient::new(client, credential, scopes))
    }
}
