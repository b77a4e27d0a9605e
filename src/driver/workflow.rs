//! Workflow Orchestration
//!
//! CLI実行のオーケストレーション

use anyhow::Result;
use log::info;
use std::path::Path;

use crate::adapter::config::Config;
use crate::application::dto::acquire_config::AcquireConfig;
use crate::domain::errors::AuthError;
use crate::domain::services::key_selection::SelectionOrder;

use super::bootstrap::{absolute_path, acquire_client_with, resolve_credential};
use super::cli::Args;

/// CLI引数と設定ファイルから取得設定を組み立てる
///
/// 優先順位: CLI引数 > 設定ファイル > デフォルト
pub fn build_acquire_config(config: &Config, args: &Args, cwd: &Path) -> AcquireConfig {
    let credentials_dir = args
        .dir
        .as_deref()
        .or(config.credentials_dir.as_deref())
        .map(|dir| absolute_path(dir, cwd))
        .unwrap_or_else(|| cwd.to_path_buf());

    let scopes = if args.scopes.is_empty() {
        config.scopes.clone()
    } else {
        args.scopes.clone()
    };

    let selection_order = if args.listing_order {
        SelectionOrder::Listing
    } else {
        config.selection_order
    };

    let mut acquire_config = AcquireConfig::new(credentials_dir)
        .with_scopes(scopes)
        .with_selection_order(selection_order);

    if let Some(key) = args
        .key
        .as_deref()
        .or(config.service_account_key_path.as_deref())
    {
        acquire_config = acquire_config.with_key_path(absolute_path(key, cwd));
    }

    acquire_config
}

fn stage_error(err: AuthError) -> anyhow::Error {
    let stage = err.stage();
    anyhow::Error::new(err).context(format!("Credential bootstrap failed while {}", stage))
}

/// Credential Workflow
pub struct CredentialWorkflow {
    config: Config,
}

impl CredentialWorkflow {
    /// Create a new workflow instance with injected configuration
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Execute the workflow
    pub async fn execute(&self, args: Args) -> Result<()> {
        info!("Starting credential bootstrap...");
        info!("Dry run: {}", args.dry_run);

        let cwd = std::env::current_dir()?;
        let acquire_config = build_acquire_config(&self.config, &args, &cwd);

        match &acquire_config.key_path {
            Some(key_path) => println!("✓ Using key file: {}", key_path.display()),
            None => println!(
                "✓ Searching for key in: {}",
                acquire_config.credentials_dir.display()
            ),
        }

        if args.dry_run {
            let credential = resolve_credential(&acquire_config)
                .await
                .map_err(stage_error)?;

            println!("✓ Dry-run mode (not building a client)");
            println!("  Key: {}", credential.path.display());
            println!("  Project: {}", credential.project_id());
            println!("  Service account: {}", credential.key.client_email);
            return Ok(());
        }

        let client = acquire_client_with(&acquire_config)
            .await
            .map_err(stage_error)?;

        println!("✓ Created BigQuery client");
        println!("  Key: {}", client.key_path().display());
        println!("  Project: {}", client.project_id());
        println!("  Scopes: {}", client.scopes().join(", "));
        println!("  Acquired at: {}", client.acquired_at().to_rfc3339());

        Ok(())
    }
}
