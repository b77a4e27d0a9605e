//! # Domain Entities
//!
//! ビジネスエンティティ

pub mod service_account_key;
