//! # bqauth
//!
//! ディレクトリ内のサービスアカウント鍵（`*.json`）を見つけて、
//! 認証済みの BigQuery クライアントを作るライブラリ
//!
//! このプロジェクトはクリーンアーキテクチャを採用しており、以下の4層で構成されています：
//!
//! - **Domain層**: 鍵ファイルのエンティティと選択ルール（SDK非依存）
//! - **Application層**: 鍵の解決とクライアント取得のユースケース
//! - **Adapter層**: ファイルシステムと BigQuery SDK との統合
//! - **Driver層**: CLI、依存性注入
//!
//! ```no_run
//! # async fn run() -> Result<(), bqauth::AuthError> {
//! let client = bqauth::acquire_client("/srv/keys").await?;
//! println!("project: {}", client.project_id());
//! # Ok(())
//! # }
//! ```

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
// カバレッジ計測時に外部サービス依存コードを除外するために使用
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

// Domain層（純粋なビジネスロジック）
pub mod domain;

// Application層（ユースケース）
pub mod application;

// Adapter層（Infrastructure）
pub mod adapter;

// Driver層（Presentation）
pub mod driver;

pub use adapter::bigquery::client::WarehouseClient;
pub use domain::errors::{AcquireStage, AuthError};
pub use driver::bootstrap::{acquire_client, acquire_client_from_current_dir, acquire_client_with};
