//! # Key Selection Service
//!
//! 鍵ファイル候補のフィルタリングと選択ルール

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// 鍵ファイルの拡張子（大文字小文字を区別する）
pub const CREDENTIAL_FILE_SUFFIX: &str = ".json";

/// 候補が複数あるときの選び方
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SelectionOrder {
    /// ファイル名の辞書順で最初のもの（決定的）
    #[default]
    Sorted,
    /// ディレクトリ一覧が返した順で最初のもの（プラットフォーム依存）
    Listing,
}

/// ファイル名が鍵ファイルの候補かどうか
pub fn is_credential_file_name(file_name: &str) -> bool {
    file_name.ends_with(CREDENTIAL_FILE_SUFFIX)
}

/// 候補の中から一つを選ぶ
///
/// 候補が空なら `None`
pub fn select_credential_file(mut candidates: Vec<PathBuf>, order: SelectionOrder) -> Option<PathBuf> {
    if order == SelectionOrder::Sorted {
        candidates.sort_by(|a, b| file_name_of(a).cmp(file_name_of(b)));
    }
    candidates.into_iter().next()
}

fn file_name_of(path: &Path) -> &std::ffi::OsStr {
    path.file_name().unwrap_or(path.as_os_str())
}
