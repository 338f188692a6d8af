//! テキスト出力の整形
use crate::features::backup::ImportSummary;
use crate::features::catalog::{CatalogEntry, Pricing};
use crate::features::currency::{self, ExchangeRates};
use crate::features::subscriptions::{
    cost_model, summary::SubscriptionMetrics, CostSummary, Subscription,
};
use crate::AppState;
use std::fmt::Write;

/// USD建ての金額を現在の表示通貨で整形する
fn price(state: &AppState, usd_amount: f64) -> String {
    currency::display_price(usd_amount, &state.rates, &state.currency)
}

/// 1件分の行（一覧・追加結果で共通）
pub fn subscription_line(state: &AppState, subscription: &Subscription) -> String {
    let base = currency::to_base_subscription(subscription, &state.rates);
    let metrics = SubscriptionMetrics::from_subscription(&base);
    format!(
        "{name}  {monthly}/月  {usage}  {per_use}/回  {tier}  [{id}]",
        name = subscription.name,
        monthly = price(state, metrics.monthly_cost),
        usage = cost_model::format_usage(subscription),
        per_use = price(state, metrics.cost_per_use),
        tier = metrics.tier.description(),
        id = subscription.id,
    )
}

/// 登録順の一覧
pub fn subscription_list(state: &AppState) -> String {
    if state.subscriptions.is_empty() {
        return "サブスクリプションはまだ登録されていません。`add` または `quick-add` で追加してください。".to_string();
    }

    state
        .subscriptions
        .iter()
        .map(|sub| subscription_line(state, sub))
        .collect::<Vec<_>>()
        .join("\n")
}

/// 1回あたりコストの昇順の一覧
pub fn ranked_list(state: &AppState, ranked: &[SubscriptionMetrics]) -> String {
    if ranked.is_empty() {
        return "サブスクリプションはまだ登録されていません。`add` または `quick-add` で追加してください。".to_string();
    }

    ranked
        .iter()
        .enumerate()
        .map(|(i, m)| {
            format!(
                "{rank}. {name}  {per_use}/回  {tier}",
                rank = i + 1,
                name = m.name,
                per_use = price(state, m.cost_per_use),
                tier = m.tier.description(),
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// 合計金額とベスト・ワースト
pub fn summary(
    state: &AppState,
    totals: &CostSummary,
    comparison: Option<&(SubscriptionMetrics, SubscriptionMetrics)>,
) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "登録数: {}", totals.count);
    let _ = writeln!(out, "月額: {}", price(state, totals.monthly_cost));
    let _ = writeln!(out, "年額: {}", price(state, totals.yearly_cost));
    let _ = write!(out, "日額: {}", price(state, totals.daily_cost));

    match comparison {
        Some((best, worst)) => {
            let _ = write!(
                out,
                "\nベスト: {} ({}/回)\nワースト: {} ({}/回)",
                best.name,
                price(state, best.cost_per_use),
                worst.name,
                price(state, worst.cost_per_use),
            );
        }
        None => {
            let _ = write!(out, "\n価値を比較するには2件以上登録してください。");
        }
    }
    out
}

/// カタログの価格表示（USD建てを表示通貨に換算）
pub fn catalog_entry(state: &AppState, entry: &CatalogEntry) -> String {
    let pricing = match &entry.pricing {
        Pricing::Single { cost } => price(state, *cost),
        Pricing::Tiered { tiers } => tiers
            .iter()
            .map(|t| format!("{} {}", t.tier, price(state, t.cost)))
            .collect::<Vec<_>>()
            .join(" / "),
    };
    format!("{}  [{}]  {}", entry.name, entry.category, pricing)
}

/// 為替レート表
pub fn rates_table(rates: &ExchangeRates, selected: &str) -> String {
    let mut out = String::new();
    for rate in &rates.currencies {
        let marker = if rate.code.eq_ignore_ascii_case(selected) { "*" } else { " " };
        let _ = writeln!(out, "{marker} {} {}  {}", rate.code, rate.symbol, rate.rate);
    }
    let _ = write!(
        out,
        "更新日時: {}",
        rates.updated_at.as_deref().unwrap_or("組み込みレート")
    );
    out
}

pub fn import_result(result: &ImportSummary) -> String {
    format!(
        "{}件のサブスクリプションをインポートしました（通貨: {}, テーマ: {}）",
        result.imported, result.currency, result.theme
    )
}
