//! Adapter Layer
//!
//! 外部システム（BigQuery SDK, ファイルシステム）との統合

pub mod auth;
pub mod bigquery;
pub mod config;
pub mod repositories;
