use super::cost_model::{
    classify_value, cost_per_use, normalize_monthly_cost, normalize_monthly_usage, ValueTier,
    DAILY_COST_DIVISOR, MONTHS_PER_YEAR,
};
use super::models::Subscription;
use serde::Serialize;
use std::cmp::Ordering;

/// 比較表示に必要な最小件数
pub const MIN_COMPARISON_ENTRIES: usize = 2;

/// 合計金額のサマリー
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CostSummary {
    pub monthly_cost: f64,
    pub yearly_cost: f64,
    pub daily_cost: f64,
    pub count: usize,
}

/// サブスクリプション1件分の計算結果
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SubscriptionMetrics {
    pub id: String,
    pub name: String,
    pub monthly_cost: f64,
    pub monthly_usage: f64,
    pub cost_per_use: f64,
    pub tier: ValueTier,
}

impl SubscriptionMetrics {
    pub fn from_subscription(subscription: &Subscription) -> Self {
        let cost_per_use = cost_per_use(subscription);
        Self {
            id: subscription.id.clone(),
            name: subscription.name.clone(),
            monthly_cost: normalize_monthly_cost(subscription),
            monthly_usage: normalize_monthly_usage(subscription),
            cost_per_use,
            tier: classify_value(cost_per_use),
        }
    }
}

/// 最もコストパフォーマンスが良い/悪いサブスクリプションの組
#[derive(Debug, Clone, Copy)]
pub struct ValueComparison<'a> {
    pub best: &'a Subscription,
    pub worst: &'a Subscription,
}

/// 月額合計を計算する
pub fn total_monthly_cost(subscriptions: &[Subscription]) -> f64 {
    subscriptions.iter().map(normalize_monthly_cost).sum()
}

/// 年額合計を計算する（月額合計 × 12）
pub fn total_yearly_cost(subscriptions: &[Subscription]) -> f64 {
    total_monthly_cost(subscriptions) * MONTHS_PER_YEAR
}

/// 日額合計を計算する（月額合計 / 30）
pub fn total_daily_cost(subscriptions: &[Subscription]) -> f64 {
    total_monthly_cost(subscriptions) / DAILY_COST_DIVISOR
}

/// 合計金額のサマリーを作成する
pub fn summarize(subscriptions: &[Subscription]) -> CostSummary {
    let monthly_cost = total_monthly_cost(subscriptions);
    CostSummary {
        monthly_cost,
        yearly_cost: monthly_cost * MONTHS_PER_YEAR,
        daily_cost: monthly_cost / DAILY_COST_DIVISOR,
        count: subscriptions.len(),
    }
}

/// 1回あたりコストの昇順に並べた参照のリストを返す
///
/// 同じ値の場合は元の並び順を維持する。
fn sorted_by_cost_per_use(subscriptions: &[Subscription]) -> Vec<(&Subscription, f64)> {
    let mut entries: Vec<(&Subscription, f64)> = subscriptions
        .iter()
        .map(|sub| (sub, cost_per_use(sub)))
        .collect();
    entries.sort_by(|(_, a), (_, b)| a.partial_cmp(b).unwrap_or(Ordering::Equal));
    entries
}

/// 最も良い・悪いサブスクリプションを選ぶ
///
/// # 戻り値
/// 2件未満の場合はNone
pub fn compare_value(subscriptions: &[Subscription]) -> Option<ValueComparison<'_>> {
    if subscriptions.len() < MIN_COMPARISON_ENTRIES {
        return None;
    }

    let sorted = sorted_by_cost_per_use(subscriptions);
    let best = sorted.first()?.0;
    let worst = sorted.last()?.0;

    Some(ValueComparison { best, worst })
}

/// 1回あたりコストが最も低いサブスクリプション（2件未満の場合はNone）
pub fn best_value(subscriptions: &[Subscription]) -> Option<&Subscription> {
    compare_value(subscriptions).map(|comparison| comparison.best)
}

/// 1回あたりコストが最も高いサブスクリプション（2件未満の場合はNone）
pub fn worst_value(subscriptions: &[Subscription]) -> Option<&Subscription> {
    compare_value(subscriptions).map(|comparison| comparison.worst)
}

/// 一覧表示用に1回あたりコストの昇順で計算結果を返す
pub fn ranked_metrics(subscriptions: &[Subscription]) -> Vec<SubscriptionMetrics> {
    sorted_by_cost_per_use(subscriptions)
        .into_iter()
        .map(|(sub, _)| SubscriptionMetrics::from_subscription(sub))
        .collect()
}
