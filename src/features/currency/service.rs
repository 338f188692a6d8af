use super::models::ExchangeRates;
use crate::features::subscriptions::models::{Subscription, BASE_CURRENCY};
use crate::shared::database::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};

/// 表示通貨の保存キー
pub const CURRENCY_KEY: &str = "subscriblytics-currency";

/// 取得済み為替レートの保存キー
pub const RATES_KEY: &str = "subscriblytics-rates";

/// USD建ての金額を表示通貨に換算する
///
/// 未対応の通貨コードの場合はUSDのまま返す。
pub fn convert_price(usd_amount: f64, rates: &ExchangeRates, code: &str) -> f64 {
    match rates.get(code) {
        Some(currency) => usd_amount * currency.rate,
        None => usd_amount,
    }
}

/// 表示通貨の記号付きで金額を整形する（例: "€9.19"）
pub fn format_currency(amount: f64, rates: &ExchangeRates, code: &str) -> String {
    let symbol = rates.get(code).map_or("$", |c| c.symbol.as_str());
    format!("{symbol}{amount:.2}")
}

/// USD建ての金額を換算して整形する
pub fn display_price(usd_amount: f64, rates: &ExchangeRates, code: &str) -> String {
    format_currency(convert_price(usd_amount, rates, code), rates, code)
}

/// 任意通貨の金額をUSD建てに換算する
///
/// 未対応の通貨の場合は換算せずに警告を出す。
pub fn to_base_amount(amount: f64, code: &str, rates: &ExchangeRates) -> f64 {
    match rates.get(code) {
        Some(currency) if currency.rate > 0.0 => amount / currency.rate,
        _ => {
            log::warn!("未対応の通貨のため換算せずに扱います: {code}");
            amount
        }
    }
}

/// サブスクリプションの金額をUSD建てに揃えたコピーを返す
pub fn to_base_subscription(subscription: &Subscription, rates: &ExchangeRates) -> Subscription {
    let code = subscription.currency_code();
    if code.eq_ignore_ascii_case(BASE_CURRENCY) {
        return Subscription {
            currency: None,
            ..subscription.clone()
        };
    }

    Subscription {
        cost: to_base_amount(subscription.cost, code, rates),
        currency: None,
        ..subscription.clone()
    }
}

/// 保存済みの表示通貨を読み込む
///
/// 未保存・未対応のコード・読み込み失敗の場合はUSD。
pub fn load_currency(store: &dyn KeyValueStore, rates: &ExchangeRates) -> String {
    match store.get_item(CURRENCY_KEY) {
        Ok(Some(code)) if rates.is_supported(&code) => code.trim().to_uppercase(),
        Ok(Some(code)) => {
            log::warn!("保存された通貨コードに対応していません: {code}");
            BASE_CURRENCY.to_string()
        }
        Ok(None) => BASE_CURRENCY.to_string(),
        Err(e) => {
            log::error!("通貨設定の読み込みに失敗しました: {e}");
            BASE_CURRENCY.to_string()
        }
    }
}

/// 表示通貨を検証して保存する
///
/// # 戻り値
/// 正規化された通貨コード、または未対応の場合はバリデーションエラー
pub fn save_currency(
    store: &dyn KeyValueStore,
    rates: &ExchangeRates,
    code: &str,
) -> AppResult<String> {
    let currency = rates.get(code).ok_or_else(|| {
        AppError::validation(format!(
            "未対応の通貨です: {}（対応通貨: {}）",
            code.trim(),
            rates.codes().join(", ")
        ))
    })?;

    store.set_item(CURRENCY_KEY, &currency.code)?;
    log::info!("表示通貨を変更しました: {}", currency.code);
    Ok(currency.code.clone())
}

/// 前回取得した為替レートを読み込む
///
/// 未保存・破損している場合は組み込みのレートを返す。
pub fn load_cached_rates(store: &dyn KeyValueStore) -> ExchangeRates {
    let raw = match store.get_item(RATES_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return ExchangeRates::default(),
        Err(e) => {
            log::error!("為替レートの読み込みに失敗しました: {e}");
            return ExchangeRates::default();
        }
    };

    match serde_json::from_str::<ExchangeRates>(&raw) {
        Ok(rates) if rates.is_supported(BASE_CURRENCY) => rates,
        Ok(_) => {
            log::warn!("保存された為替レートに基準通貨がないため破棄します");
            ExchangeRates::default()
        }
        Err(e) => {
            log::warn!("保存された為替レートが破損しているため破棄します: {e}");
            if let Err(e) = store.remove_item(RATES_KEY) {
                log::error!("破損した為替レートの削除に失敗しました: {e}");
            }
            ExchangeRates::default()
        }
    }
}

/// 為替レートを保存する
pub fn save_cached_rates(store: &dyn KeyValueStore, rates: &ExchangeRates) -> AppResult<()> {
    let raw = serde_json::to_string(rates)?;
    store.set_item(RATES_KEY, &raw)
}
