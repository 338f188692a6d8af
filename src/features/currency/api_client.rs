use super::models::{ExchangeRates, RatesApiResponse};
use crate::shared::config::RatesApiConfig;
use crate::shared::errors::{AppError, AppResult};
use chrono::Utc;
use log::{debug, info, warn};
use reqwest::Client;
use std::collections::HashMap;
use std::time::Duration;

/// 為替レートAPIクライアント
pub struct RatesClient {
    client: Client,
    config: RatesApiConfig,
}

impl RatesClient {
    /// 環境設定からクライアントを作成
    pub fn new() -> AppResult<Self> {
        Self::new_with_config(RatesApiConfig::from_env())
    }

    /// 設定を指定してクライアントを作成
    pub fn new_with_config(config: RatesApiConfig) -> AppResult<Self> {
        let client = Client::builder()
            .timeout(Duration::from_secs(config.timeout_seconds))
            .build()
            .map_err(|e| AppError::configuration(format!("HTTPクライアント初期化失敗: {e}")))?;

        Ok(Self { client, config })
    }

    /// USD基準の為替レートを取得する
    pub async fn fetch_rates(&self) -> AppResult<HashMap<String, f64>> {
        debug!("為替レートを取得します: url={}", self.config.api_url);

        let response = self.client.get(&self.config.api_url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::external_service(
                "為替レートAPI".to_string(),
                format!("HTTPステータス {status}"),
            ));
        }

        let body: RatesApiResponse = response.json().await?;
        parse_response(body)
    }

    /// 為替レートを更新する
    ///
    /// 取得に失敗した場合はログを出力し、現在のレートをそのまま返す。
    pub async fn refresh(&self, current: &ExchangeRates) -> ExchangeRates {
        match self.fetch_rates().await {
            Ok(fetched) => {
                let mut rates = current.clone();
                let updated = rates.apply(&fetched, Utc::now().to_rfc3339());
                info!("為替レートを更新しました: {updated}通貨");
                rates
            }
            Err(e) => {
                warn!("為替レートの取得に失敗したため前回の値を使用します: {e}");
                current.clone()
            }
        }
    }
}

/// APIレスポンスを検証してレート表を取り出す
fn parse_response(body: RatesApiResponse) -> AppResult<HashMap<String, f64>> {
    if body.result != "success" {
        return Err(AppError::external_service(
            "為替レートAPI".to_string(),
            format!("result={}", body.result),
        ));
    }

    if let Some(base) = body.base_code.as_deref() {
        if base != "USD" {
            return Err(AppError::external_service(
                "為替レートAPI".to_string(),
                format!("基準通貨がUSDではありません: {base}"),
            ));
        }
    }

    Ok(body.rates)
}
