//! # Acquire Client Use Case
//!
//! 鍵ファイルを解決して認証済みクライアントハンドルを作るユースケース

use log::info;
use std::sync::Arc;

use crate::application::dto::acquire_config::AcquireConfig;
use crate::application::use_cases::resolve_credential::ResolveCredentialUseCase;
use crate::domain::errors::AuthError;
use crate::domain::repositories::client_factory::WarehouseClientFactory;
use crate::domain::repositories::credential_repository::CredentialRepository;

/// クライアント取得ユースケース
///
/// 呼び出しごとにディレクトリを探索し直し、新しいハンドルを返す
pub struct AcquireClientUseCase<R: CredentialRepository, F: WarehouseClientFactory> {
    resolve_use_case: ResolveCredentialUseCase<R>,
    client_factory: Arc<F>,
}

impl<R: CredentialRepository, F: WarehouseClientFactory> AcquireClientUseCase<R, F> {
    /// 新しいユースケースを作成
    ///
    /// # Arguments
    ///
    /// * `credential_repository` - クレデンシャルリポジトリ
    /// * `client_factory` - クライアントファクトリ
    pub fn new(credential_repository: Arc<R>, client_factory: Arc<F>) -> Self {
        Self {
            resolve_use_case: ResolveCredentialUseCase::new(credential_repository),
            client_factory,
        }
    }

    /// クライアントハンドルを取得する
    ///
    /// # Errors
    ///
    /// 鍵ファイルの解決に失敗した場合、またはSDKがクライアントを作れなかった場合
    pub async fn execute(&self, config: &AcquireConfig) -> Result<F::Handle, AuthError> {
        let credential = self.resolve_use_case.execute(config).await?;

        info!(
            "Creating BigQuery client for project {} from {}",
            credential.project_id(),
            credential.file_name()
        );

        self.client_factory
            .create_client(&credential, &config.scopes)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::dto::acquire_config::CLOUD_PLATFORM_SCOPE;
    use crate::domain::entities::service_account_key::test_support::key_json;
    use crate::domain::entities::service_account_key::{ResolvedCredential, ServiceAccountKey};
    use crate::domain::repositories::credential_repository::MockCredentialRepository;
    use async_trait::async_trait;
    use std::path::PathBuf;
    use std::sync::Mutex;

    #[derive(Debug, PartialEq)]
    struct FakeHandle {
        project_id: String,
        path: PathBuf,
        scopes: Vec<String>,
    }

    #[derive(Default)]
    struct FakeFactory {
        calls: Mutex<u32>,
        reject: bool,
    }

    #[async_trait]
    impl WarehouseClientFactory for FakeFactory {
        type Handle = FakeHandle;

        async fn create_client(
            &self,
            credential: &ResolvedCredential,
            scopes: &[String],
        ) -> Result<FakeHandle, AuthError> {
            *self.calls.lock().unwrap() += 1;
            if self.reject {
                return Err(AuthError::ClientConstruction {
                    project_id: credential.project_id().to_string(),
                    reason: "token source rejected".to_string(),
                });
            }
            Ok(FakeHandle {
                project_id: credential.project_id().to_string(),
                path: credential.path.clone(),
                scopes: scopes.to_vec(),
            })
        }
    }

    fn repository_with(project_id: &'static str) -> MockCredentialRepository {
        let mut mock = MockCredentialRepository::new();
        mock.expect_list_candidates()
            .returning(|_| Ok(vec![PathBuf::from("/keys/key-A.json")]));
        mock.expect_load_key().returning(move |p| {
            ServiceAccountKey::from_json_slice(p, key_json(project_id).as_bytes())
        });
        mock
    }

    #[tokio::test]
    async fn test_acquire_binds_project_and_scope() {
        let factory = Arc::new(FakeFactory::default());
        let use_case =
            AcquireClientUseCase::new(Arc::new(repository_with("proj-123")), factory.clone());

        let handle = use_case.execute(&AcquireConfig::new("/keys")).await.unwrap();

        assert_eq!(handle.project_id, "proj-123");
        assert_eq!(handle.path, PathBuf::from("/keys/key-A.json"));
        assert_eq!(handle.scopes, vec![CLOUD_PLATFORM_SCOPE.to_string()]);
        assert_eq!(*factory.calls.lock().unwrap(), 1);
    }

    #[tokio::test]
    async fn test_acquire_twice_returns_independent_handles() {
        let factory = Arc::new(FakeFactory::default());
        let use_case =
            AcquireClientUseCase::new(Arc::new(repository_with("proj-123")), factory.clone());
        let config = AcquireConfig::new("/keys");

        let first = use_case.execute(&config).await.unwrap();
        let second = use_case.execute(&config).await.unwrap();

        assert_eq!(first, second);
        assert_eq!(first.project_id, "proj-123");
        assert_eq!(*factory.calls.lock().unwrap(), 2);
    }

    #[tokio::test]
    async fn test_acquire_no_credential_never_calls_factory() {
        let mut mock = MockCredentialRepository::new();
        mock.expect_list_candidates().returning(|_| Ok(vec![]));

        let factory = Arc::new(FakeFactory::default());
        let use_case = AcquireClientUseCase::new(Arc::new(mock), factory.clone());

        let err = use_case
            .execute(&AcquireConfig::new("/empty"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::NoCredentialFile { .. }));
        assert_eq!(*factory.calls.lock().unwrap(), 0);
    }

    #[tokio::test]
    async fn test_acquire_propagates_construction_error() {
        let factory = Arc::new(FakeFactory {
            calls: Mutex::new(0),
            reject: true,
        });
        let use_case = AcquireClientUseCase::new(Arc::new(repository_with("proj-123")), factory);

        let err = use_case
            .execute(&AcquireConfig::new("/keys"))
            .await
            .unwrap_err();

        assert!(matches!(err, AuthError::ClientConstruction { .. }));
    }
}
