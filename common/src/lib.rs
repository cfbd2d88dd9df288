//! Receipt Processor 共通ライブラリ
//!
//! サーバーとテストで共有する型・設定・エラー定義

#![warn(missing_docs)]

/// 設定管理
pub mod config;

/// エラー型
pub mod error;

/// 共通型定義
pub mod types;
