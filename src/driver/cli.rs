//! CLI Argument Parsing
//!
//! CLIの引数解析

use clap::Parser;

/// サービスアカウント鍵を解決してBigQueryクライアントを作るCLI
#[derive(Parser, Debug, Clone)]
#[command(name = "bqauth")]
#[command(
    about = "Find a service account key and build an authenticated BigQuery client",
    long_about = None
)]
pub struct Args {
    /// Directory to search for a *.json key (defaults to the current directory)
    #[arg(short, long)]
    pub dir: Option<String>,

    /// Use this key file instead of searching a directory
    #[arg(short, long)]
    pub key: Option<String>,

    /// OAuth scope to request (repeatable, defaults to cloud-platform)
    #[arg(long = "scope")]
    pub scopes: Vec<String>,

    /// Pick the first key in directory-listing order instead of by file name
    #[arg(long)]
    pub listing_order: bool,

    /// Dry run mode - resolve the key but don't build a client
    #[arg(long)]
    pub dry_run: bool,

    /// Config file path
    #[arg(short, long, default_value = "./.bqauth/config.json")]
    pub config: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_args_default_config() {
        let args = Args::parse_from(["bqauth"]);
        assert_eq!(args.config, "./.bqauth/config.json");
        assert!(args.dir.is_none());
        assert!(args.key.is_none());
        assert!(args.scopes.is_empty());
        assert!(!args.dry_run);
        assert!(!args.listing_order);
    }

    #[test]
    fn test_args_dry_run() {
        let args = Args::parse_from(["bqauth", "--dry-run"]);
        assert!(args.dry_run);
    }

    #[test]
    fn test_args_dir_and_key() {
        let args = Args::parse_from(["bqauth", "-d", "/srv/keys", "--key", "/srv/keys/sa.json"]);
        assert_eq!(args.dir.as_deref(), Some("/srv/keys"));
        assert_eq!(args.key.as_deref(), Some("/srv/keys/sa.json"));
    }

    #[test]
    fn test_args_repeated_scopes() {
        let args = Args::parse_from([
            "bqauth",
            "--scope",
            "https://www.googleapis.com/auth/bigquery",
            "--scope",
            "https://www.googleapis.com/auth/devstorage.read_only",
        ]);
        assert_eq!(args.scopes.len(), 2);
        assert_eq!(args.scopes[0], "https://www.googleapis.com/auth/bigquery");
    }

    #[test]
    fn test_args_combined() {
        let args = Args::parse_from(["bqauth", "--dry-run", "--listing-order", "-c", "/etc/bq.json"]);
        assert!(args.dry_run);
        assert!(args.listing_order);
        assert_eq!(args.config, "/etc/bq.json");
    }
}
