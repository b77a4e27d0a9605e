//! # Domain Layer
//!
//! このモジュールは鍵ファイル選択のルールとエンティティを定義します。
//!
//! ## 特徴
//!
//! - SDKに依存しない（serde と標準ライブラリのみ）
//! - ファイルシステムやBigQueryについて何も知らない
//! - 純粋なビジネスロジック
//!
//! ## 構成要素
//!
//! - **entities**: ビジネスエンティティ（ServiceAccountKey, ResolvedCredential）
//! - **errors**: エラー分類（AuthError）
//! - **repositories**: Repository trait（インターフェース定義のみ）
//! - **services**: Domain Service（鍵ファイルの選択ルール）

pub mod entities;
pub mod errors;
pub mod repositories;
pub mod services;
