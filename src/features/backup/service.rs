use super::models::{ExportDocument, ImportSummary};
use crate::features::currency::service::CURRENCY_KEY;
use crate::features::currency::ExchangeRates;
use crate::features::preferences::{self, Theme};
use crate::features::subscriptions::models::{Subscription, BASE_CURRENCY};
use crate::features::subscriptions::repository;
use crate::shared::database::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};
use crate::AppState;
use chrono::Utc;
use std::collections::HashSet;

/// 現在の状態をエクスポート用のドキュメントにする
pub fn build_export(state: &AppState) -> ExportDocument {
    ExportDocument {
        subscriptions: state.subscriptions.clone(),
        currency: Some(state.currency.clone()),
        theme: Some(state.theme.as_str().to_string()),
        export_date: Some(Utc::now().to_rfc3339()),
    }
}

/// 現在の状態をJSON文字列としてエクスポートする
pub fn export_document(state: &AppState) -> AppResult<String> {
    let document = build_export(state);
    let json = serde_json::to_string_pretty(&document)?;
    log::info!(
        "データをエクスポートしました: {}件",
        document.subscriptions.len()
    );
    Ok(json)
}

/// JSON文字列をインポートし、現在の状態を置き換える
///
/// # 引数
/// * `state` - アプリケーション状態
/// * `raw` - エクスポートされたJSON文字列
/// * `confirmed` - 既存データの置き換えに同意済みかどうか
///
/// # 戻り値
/// インポート結果、または検証・保存に失敗した場合はエラー
///
/// # 処理内容
/// 1. 置き換えの確認
/// 2. ドキュメントの解析と検証
/// 3. サブスクリプション・通貨・テーマの保存
/// 4. 状態の置き換え
pub fn import_document(state: &mut AppState, raw: &str, confirmed: bool) -> AppResult<ImportSummary> {
    if !confirmed {
        return Err(AppError::validation(
            "インポートすると現在のデータはすべて置き換えられます。確認のうえ再実行してください",
        ));
    }

    let document: ExportDocument = serde_json::from_str(raw).map_err(|e| {
        log::warn!("インポートファイルの解析に失敗しました: {e}");
        AppError::validation(format!("インポートファイルの形式が不正です: {e}"))
    })?;

    validate_subscriptions(&document.subscriptions)?;
    let currency = resolve_currency(document.currency.as_deref(), &state.rates)?;
    let theme = match document.theme.as_deref() {
        Some(value) => preferences::parse_theme(value)?,
        None => Theme::default(),
    };

    // 一部だけ置き換わらないよう、3つのキーをまとめて保存する
    let subscriptions_json = serde_json::to_string(&document.subscriptions)?;
    state
        .store
        .set_items(&[
            (repository::STORAGE_KEY, subscriptions_json.as_str()),
            (CURRENCY_KEY, currency.as_str()),
            (preferences::THEME_KEY, theme.as_str()),
        ])
        .map_err(|e| {
            log::error!("インポートデータの保存に失敗しました: {e}");
            e
        })?;

    let imported = document.subscriptions.len();
    state.subscriptions = document.subscriptions;
    state.currency = currency.clone();
    state.theme = theme;

    log::info!(
        "データをインポートしました: {imported}件 (exportDate={})",
        document.export_date.as_deref().unwrap_or("不明")
    );

    Ok(ImportSummary {
        imported,
        currency,
        theme: theme.as_str().to_string(),
    })
}

fn resolve_currency(code: Option<&str>, rates: &ExchangeRates) -> AppResult<String> {
    match code {
        Some(code) => rates
            .get(code)
            .map(|rate| rate.code.clone())
            .ok_or_else(|| AppError::validation(format!("未対応の通貨です: {code}"))),
        None => Ok(BASE_CURRENCY.to_string()),
    }
}

// 未知の支払いサイクル・利用頻度は保存データと同様に許容する
fn validate_subscriptions(subscriptions: &[Subscription]) -> AppResult<()> {
    let mut seen = HashSet::new();
    for sub in subscriptions {
        if sub.id.trim().is_empty() {
            return Err(AppError::validation("IDが空のサブスクリプションがあります"));
        }
        if !seen.insert(sub.id.as_str()) {
            return Err(AppError::validation(format!("IDが重複しています: {}", sub.id)));
        }
        if sub.name.trim().is_empty() {
            return Err(AppError::validation(format!(
                "サービス名が空です: id={}",
                sub.id
            )));
        }
        if !sub.cost.is_finite() || sub.cost < 0.0 || !sub.usage.is_finite() || sub.usage < 0.0 {
            return Err(AppError::validation(format!(
                "金額または利用回数が不正です: {}",
                sub.name
            )));
        }
    }
    Ok(())
}
