//! # Domain Services
//!
//! ドメインサービス（ビジネスルール）

pub mod key_selection;
