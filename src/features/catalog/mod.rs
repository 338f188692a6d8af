/// サービスカタログ機能モジュール
///
/// クイック追加に使う既知サービスの静的データと、その検索・並び替え・プラン解決を提供します。
pub mod data;
pub mod models;
pub mod service;

pub use models::{CatalogEntry, CatalogSort, PlanTier, Pricing, ResolvedPlan};
pub use service::{all_entries, categories, find_entry, resolve, search, sort_entries};
