//! # Driver Layer (Presentation)
//!
//! CLIやライブラリ利用者向けの入口を提供
//!
//! ## 特徴
//!
//! - Use Caseを呼び出してビジネスフローを起動
//! - 依存性注入（DI）を行い、全てを組み立てる
//! - ユーザーとのインターフェース
//!
//! ## 構成要素
//!
//! - **bootstrap**: 実装を組み立てた `acquire_client` 関数
//! - **cli**: CLI引数のパース
//! - **workflow**: CLI実行のオーケストレーション

pub mod bootstrap;
pub mod cli;
pub mod workflow;

pub use bootstrap::{acquire_client, acquire_client_from_current_dir};
pub use cli::Args;
pub use workflow::CredentialWorkflow;
