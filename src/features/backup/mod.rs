/// バックアップ機能モジュール
///
/// サブスクリプション・表示通貨・テーマをまとめたJSONのエクスポートとインポートを提供します。
/// インポートは現在のデータをすべて置き換えます。
pub mod models;
pub mod service;

pub use models::{ExportDocument, ImportSummary};
pub use service::{build_export, export_document, import_document};
