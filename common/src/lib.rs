//! Bank Account Validator 共通ライブラリ
//!
//! Validatorサーバーとテストで共有する型・プロトコル・設定・エラー定義

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型定義
pub mod error;

/// 通信プロトコル定義
pub mod protocol;

/// 共通型定義
pub mod types;
