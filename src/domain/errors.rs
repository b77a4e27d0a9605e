//! # Authentication Errors
//!
//! クレデンシャル解決とクライアント構築のエラー分類

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// どの段階で失敗したか
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AcquireStage {
    /// ディレクトリ一覧の取得とファイル選択
    Listing,
    /// クレデンシャルファイルの読み込みと検証
    Loading,
    /// SDKによるクライアント構築
    Constructing,
}

impl fmt::Display for AcquireStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Listing => "listing",
            Self::Loading => "loading",
            Self::Constructing => "constructing",
        };
        f.write_str(name)
    }
}

/// クレデンシャル解決・クライアント構築のエラー
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("no .json credential file found in {}", dir.display())]
    NoCredentialFile { dir: PathBuf },

    #[error("malformed credential file {}: {reason}", path.display())]
    MalformedCredential { path: PathBuf, reason: String },

    #[error("filesystem error while {stage} {}: {source}", path.display())]
    Filesystem {
        stage: AcquireStage,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to construct BigQuery client for project {project_id}: {reason}")]
    ClientConstruction { project_id: String, reason: String },
}

impl AuthError {
    pub fn malformed(path: impl Into<PathBuf>, reason: impl fmt::Display) -> Self {
        Self::MalformedCredential {
            path: path.into(),
            reason: reason.to_string(),
        }
    }

    /// ディレクトリを一覧できなかった
    pub fn listing(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            stage: AcquireStage::Listing,
            path: path.into(),
            source,
        }
    }

    /// 選択したファイルを読めなかった
    pub fn unreadable(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Filesystem {
            stage: AcquireStage::Loading,
            path: path.into(),
            source,
        }
    }

    /// 失敗した段階を返す
    pub fn stage(&self) -> AcquireStage {
        match self {
            Self::NoCredentialFile { .. } => AcquireStage::Listing,
            Self::Filesystem { stage, .. } => *stage,
            Self::MalformedCredential { .. } => AcquireStage::Loading,
            Self::ClientConstruction { .. } => AcquireStage::Constructing,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io;

    #[test]
    fn test_stage_no_credential_file() {
        let err = AuthError::NoCredentialFile {
            dir: PathBuf::from("/keys"),
        };
        assert_eq!(err.stage(), AcquireStage::Listing);
        assert_eq!(err.to_string(), "no .json credential file found in /keys");
    }

    #[test]
    fn test_stage_missing_directory_is_listing() {
        let err = AuthError::listing(
            "/definitely/not/here",
            io::Error::new(io::ErrorKind::NotFound, "gone"),
        );
        assert_eq!(err.stage(), AcquireStage::Listing);
        assert_eq!(
            err.to_string(),
            "filesystem error while listing /definitely/not/here: gone"
        );
    }

    #[test]
    fn test_stage_unreadable_file_is_loading() {
        let err = AuthError::unreadable(
            "/keys/a.json",
            io::Error::new(io::ErrorKind::PermissionDenied, "denied"),
        );
        assert_eq!(err.stage(), AcquireStage::Loading);
    }

    #[test]
    fn test_stage_malformed_and_construction() {
        let malformed = AuthError::malformed("/keys/a.json", "expected value at line 1");
        assert_eq!(malformed.stage(), AcquireStage::Loading);
        assert!(malformed.to_string().contains("/keys/a.json"));

        let construction = AuthError::ClientConstruction {
            project_id: "proj-123".to_string(),
            reason: "boom".to_string(),
        };
        assert_eq!(construction.stage(), AcquireStage::Constructing);
    }

    #[test]
    fn test_stage_display() {
        assert_eq!(AcquireStage::Listing.to_string(), "listing");
        assert_eq!(AcquireStage::Loading.to_string(), "loading");
        assert_eq!(AcquireStage::Constructing.to_string(), "constructing");
    }
}
