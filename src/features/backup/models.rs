use crate::features::subscriptions::models::Subscription;
use serde::{Deserialize, Serialize};

/// エクスポートファイルの内容
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExportDocument {
    pub subscriptions: Vec<Subscription>,
    #[serde(default)]
    pub currency: Option<String>,
    #[serde(default)]
    pub theme: Option<String>,
    /// エクスポート日時（RFC3339）
    #[serde(default)]
    pub export_date: Option<String>,
}

/// インポート結果
#[derive(Debug, Clone, PartialEq)]
pub struct ImportSummary {
    pub imported: usize,
    pub currency: String,
    pub theme: String,
}
