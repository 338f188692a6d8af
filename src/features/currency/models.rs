use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// 表示通貨の情報（USDに対するレート）
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CurrencyRate {
    pub code: String,
    pub symbol: String,
    pub rate: f64,
}

/// 対応通貨と為替レートの一覧
///
/// 並び順は表示順。USDのレートは常に1。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ExchangeRates {
    pub currencies: Vec<CurrencyRate>,
    /// 最後にAPIから更新した日時（RFC3339、組み込み値の場合はNone）
    #[serde(default)]
    pub updated_at: Option<String>,
}

/// 組み込みのレート（API取得前のフォールバック値）
const BUILTIN_RATES: &[(&str, &str, f64)] = &[
    ("USD", "$", 1.0),
    ("EUR", "€", 0.92),
    ("GBP", "£", 0.79),
    ("CAD", "C$", 1.35),
    ("AUD", "A$", 1.52),
    ("JPY", "¥", 150.0),
];

impl Default for ExchangeRates {
    fn default() -> Self {
        Self {
            currencies: BUILTIN_RATES
                .iter()
                .map(|(code, symbol, rate)| CurrencyRate {
                    code: code.to_string(),
                    symbol: symbol.to_string(),
                    rate: *rate,
                })
                .collect(),
            updated_at: None,
        }
    }
}

impl ExchangeRates {
    /// 通貨コード（大文字小文字を区別しない）でレートを取得する
    pub fn get(&self, code: &str) -> Option<&CurrencyRate> {
        self.currencies
            .iter()
            .find(|c| c.code.eq_ignore_ascii_case(code.trim()))
    }

    pub fn is_supported(&self, code: &str) -> bool {
        self.get(code).is_some()
    }

    pub fn codes(&self) -> Vec<&str> {
        self.currencies.iter().map(|c| c.code.as_str()).collect()
    }

    /// 取得したレートを対応通貨に反映する
    ///
    /// 対応していない通貨・不正な値（0以下・非有限）は無視する。
    ///
    /// # 戻り値
    /// 更新された通貨の数
    pub fn apply(&mut self, fetched: &HashMap<String, f64>, updated_at: String) -> usize {
        let mut updated = 0;
        for currency in self.currencies.iter_mut() {
            if currency.code == "USD" {
                continue;
            }
            match fetched.get(&currency.code) {
                Some(rate) if rate.is_finite() && *rate > 0.0 => {
                    currency.rate = *rate;
                    updated += 1;
                }
                Some(rate) => {
                    log::warn!("不正な為替レートを無視します: {}={rate}", currency.code);
                }
                None => {}
            }
        }

        if updated > 0 {
            self.updated_at = Some(updated_at);
        }
        updated
    }
}

/// 為替レートAPIのレスポンス
#[derive(Debug, Deserialize)]
pub struct RatesApiResponse {
    pub result: String,
    #[serde(default)]
    pub base_code: Option<String>,
    #[serde(default)]
    pub rates: HashMap<String, f64>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_rates() {
        let rates = ExchangeRates::default();
        assert_eq!(rates.codes(), vec!["USD", "EUR", "GBP", "CAD", "AUD", "JPY"]);
        assert_eq!(rates.get("usd").unwrap().rate, 1.0);
        assert_eq!(rates.get("JPY").unwrap().symbol, "¥");
        assert!(!rates.is_supported("CHF"));
        assert!(rates.updated_at.is_none());
    }

    #[test]
    fn test_apply_fetched_rates() {
        let mut rates = ExchangeRates::default();
        let fetched = HashMap::from([
            ("USD".to_string(), 1.0),
            ("EUR".to_string(), 0.95),
            ("JPY".to_string(), -1.0),
            ("CHF".to_string(), 0.88),
        ]);

        let updated = rates.apply(&fetched, "2024-01-01T00:00:00Z".to_string());

        assert_eq!(updated, 1);
        assert_eq!(rates.get("EUR").unwrap().rate, 0.95);
        // 不正な値は無視して既存値を維持する
        assert_eq!(rates.get("JPY").unwrap().rate, 150.0);
        assert!(!rates.is_supported("CHF"));
        assert_eq!(rates.updated_at.as_deref(), Some("2024-01-01T00:00:00Z"));
    }

    #[test]
    fn test_apply_without_changes_keeps_timestamp() {
        let mut rates = ExchangeRates::default();
        let updated = rates.apply(&HashMap::new(), "2024-01-01T00:00:00Z".to_string());
        assert_eq!(updated, 0);
        assert!(rates.updated_at.is_none());
    }

    #[test]
    fn test_api_response_parsing() {
        let json = r#"{"result":"success","base_code":"USD","rates":{"USD":1,"EUR":0.91}}"#;
        let response: RatesApiResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.result, "success");
        assert_eq!(response.base_code.as_deref(), Some("USD"));
        assert_eq!(response.rates.get("EUR"), Some(&0.91));
    }
}
