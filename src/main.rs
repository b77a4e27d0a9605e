//! bqauth - BigQuery credential bootstrap
//!
//! 鍵ファイルを解決して BigQuery クライアントを作成

// coverage_nightly cfg が設定されている場合のみ coverage_attribute を有効化
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

use anyhow::Result;
use clap::Parser;

use bqauth::adapter::config::Config;
use bqauth::driver::{Args, CredentialWorkflow};

#[cfg_attr(coverage_nightly, coverage(off))]
#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let args = Args::parse();

    // Load configuration (optional file)
    let config = Config::load_or_default(&args.config)?;

    // Create workflow with injected configuration
    let workflow = CredentialWorkflow::new(config);

    workflow.execute(args).await
}
