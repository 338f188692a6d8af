/// 機能別モジュール
///
/// 各機能モジュールは、その機能に関連するコード（モデル、コマンド、保存処理、サービス）
/// を含む自己完結型のユニットです。
pub mod backup;
pub mod catalog;
pub mod currency;
pub mod preferences;
pub mod subscriptions;
