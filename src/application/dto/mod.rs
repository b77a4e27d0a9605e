//! # Data Transfer Objects
//!
//! 層をまたいで受け渡す設定

pub mod acquire_config;
