//! # Client Factory Trait
//!
//! 解決済みクレデンシャルからクライアントハンドルを作る処理を抽象化

use async_trait::async_trait;

use crate::domain::entities::service_account_key::ResolvedCredential;
use crate::domain::errors::AuthError;

/// クライアントファクトリ
///
/// 呼び出すたびに新しいハンドルを返す（キャッシュやプールはしない）
#[async_trait]
pub trait WarehouseClientFactory: Send + Sync {
    /// 作られるハンドルの型
    type Handle: Send;

    /// クレデンシャルとスコープからハンドルを作成する
    ///
    /// # Errors
    ///
    /// SDKが鍵を受け付けない場合は `MalformedCredential`、
    /// クライアント構築に失敗した場合は `ClientConstruction`
    async fn create_client(
        &self,
        credential: &ResolvedCredential,
        scopes: &[String],
    ) -> Result<Self::Handle, AuthError>;
}
