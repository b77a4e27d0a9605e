//! # Use Cases
//!
//! アプリケーションのビジネスフロー（ユースケース）
//!
//! ## ユースケース
//!
//! - **ResolveCredentialUseCase**: 鍵ファイルの発見・選択・検証
//! - **AcquireClientUseCase**: 認証済みクライアントハンドルの取得

pub mod acquire_client;
pub mod resolve_credential;
