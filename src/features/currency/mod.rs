/// 通貨機能モジュール
///
/// 表示通貨の換算・整形、表示通貨の保存、為替レートの取得と保存を提供します。
/// 為替レートの取得失敗は表示にのみ影響し、コスト計算には影響しません。
pub mod api_client;
pub mod models;
pub mod service;

pub use api_client::RatesClient;
pub use models::{CurrencyRate, ExchangeRates};
pub use service::{
    convert_price, display_price, format_currency, load_cached_rates, load_currency,
    save_cached_rates, save_currency, to_base_subscription,
};
