//! 料金の月額換算と1回あたりコストの評価
//!
//! すべて副作用のない純粋関数。通貨換算は行わないため、複数のサブスクリプションを
//! 比較する場合は呼び出し側で通貨を揃えておくこと。

use super::models::{BillingCycle, Subscription, UsageFrequency};
use serde::{Deserialize, Serialize};
use std::fmt;

/// 1か月あたりの平均日数（365.25日 / 12か月）
pub const DAYS_PER_MONTH: f64 = 30.44;

/// 1か月あたりの平均週数
pub const WEEKS_PER_MONTH: f64 = 4.345;

pub const MONTHS_PER_YEAR: f64 = 12.0;

/// 日額合計の算出に使う固定除数（暦日数ではない）
pub const DAILY_COST_DIVISOR: f64 = 30.0;

const EXCELLENT_THRESHOLD: f64 = 0.10;
const GOOD_THRESHOLD: f64 = 0.50;
const MODERATE_THRESHOLD: f64 = 1.00;

/// コストパフォーマンスの評価区分
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueTier {
    Excellent,
    Good,
    Moderate,
    Poor,
}

impl ValueTier {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueTier::Excellent => "excellent",
            ValueTier::Good => "good",
            ValueTier::Moderate => "moderate",
            ValueTier::Poor => "poor",
        }
    }

    /// 一覧表示用の説明ラベル
    pub fn description(&self) -> &'static str {
        match self {
            ValueTier::Excellent => "✓ 非常にお得",
            ValueTier::Good => "✓ お得",
            ValueTier::Moderate => "⚠ 普通",
            ValueTier::Poor => "✗ 割高",
        }
    }
}

impl fmt::Display for ValueTier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 料金を月額に換算する
///
/// 年額払いは12で割る。それ以外（月額払い・未知の値）はそのまま返す。
pub fn normalize_monthly_cost(subscription: &Subscription) -> f64 {
    match subscription.billing_cycle {
        BillingCycle::Annually => subscription.cost / MONTHS_PER_YEAR,
        BillingCycle::Monthly | BillingCycle::Unknown(_) => subscription.cost,
    }
}

/// 利用回数を月あたりの回数に換算する
///
/// 未知の利用頻度は0回として扱う（エラーにはしない）。
pub fn normalize_monthly_usage(subscription: &Subscription) -> f64 {
    match subscription.usage_frequency {
        UsageFrequency::PerDay => subscription.usage * DAYS_PER_MONTH,
        UsageFrequency::PerWeek => subscription.usage * WEEKS_PER_MONTH,
        UsageFrequency::PerMonth => subscription.usage,
        UsageFrequency::Unknown(_) => 0.0,
    }
}

/// 1回あたりのコストを計算する
///
/// 月間利用回数が0の場合は月額をそのまま返す。
pub fn cost_per_use(subscription: &Subscription) -> f64 {
    let monthly_cost = normalize_monthly_cost(subscription);
    let monthly_usage = normalize_monthly_usage(subscription);

    if monthly_usage == 0.0 {
        monthly_cost
    } else {
        monthly_cost / monthly_usage
    }
}

/// 1回あたりのコストを評価区分に分類する
///
/// 各区分の下限は含む（0.10ちょうどはGood）。
pub fn classify_value(cost_per_use: f64) -> ValueTier {
    if cost_per_use < EXCELLENT_THRESHOLD {
        ValueTier::Excellent
    } else if cost_per_use < GOOD_THRESHOLD {
        ValueTier::Good
    } else if cost_per_use < MODERATE_THRESHOLD {
        ValueTier::Moderate
    } else {
        ValueTier::Poor
    }
}

/// 利用頻度の表示用ラベル（例: "週3回"）
pub fn format_usage(subscription: &Subscription) -> String {
    let usage = subscription.usage;
    match subscription.usage_frequency {
        UsageFrequency::PerDay => format!("1日{usage}回"),
        UsageFrequency::PerWeek => format!("週{usage}回"),
        UsageFrequency::PerMonth => format!("月{usage}回"),
        UsageFrequency::Unknown(_) => "不明".to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use quickcheck::TestResult;
    use quickcheck_macros::quickcheck;

    fn subscription(
        cost: f64,
        billing_cycle: BillingCycle,
        usage: f64,
        usage_frequency: UsageFrequency,
    ) -> Subscription {
        Subscription {
            id: "test".to_string(),
            name: "テストサービス".to_string(),
            cost,
            currency: None,
            billing_cycle,
            usage,
            usage_frequency,
        }
    }

    fn cents(value: u32) -> f64 {
        f64::from(value) / 100.0
    }

    #[test]
    fn test_normalize_monthly_cost() {
        let monthly = subscription(10.0, BillingCycle::Monthly, 1.0, UsageFrequency::PerMonth);
        assert_eq!(normalize_monthly_cost(&monthly), 10.0);

        let annually = subscription(120.0, BillingCycle::Annually, 1.0, UsageFrequency::PerMonth);
        assert_eq!(normalize_monthly_cost(&annually), 10.0);

        // 未知の支払いサイクルは月額として扱う
        let unknown = subscription(
            7.5,
            BillingCycle::Unknown("weekly".to_string()),
            1.0,
            UsageFrequency::PerMonth,
        );
        assert_eq!(normalize_monthly_cost(&unknown), 7.5);
    }

    #[test]
    fn test_normalize_monthly_usage() {
        let per_day = subscription(1.0, BillingCycle::Monthly, 2.0, UsageFrequency::PerDay);
        assert_eq!(normalize_monthly_usage(&per_day), 2.0 * 30.44);

        let per_week = subscription(1.0, BillingCycle::Monthly, 3.0, UsageFrequency::PerWeek);
        assert_eq!(normalize_monthly_usage(&per_week), 3.0 * 4.345);

        let per_month = subscription(1.0, BillingCycle::Monthly, 5.0, UsageFrequency::PerMonth);
        assert_eq!(normalize_monthly_usage(&per_month), 5.0);

        let unknown = subscription(
            1.0,
            BillingCycle::Monthly,
            5.0,
            UsageFrequency::Unknown("per-year".to_string()),
        );
        assert_eq!(normalize_monthly_usage(&unknown), 0.0);
    }

    #[test]
    fn test_classify_value_boundaries() {
        assert_eq!(classify_value(0.0), ValueTier::Excellent);
        assert_eq!(classify_value(0.099999), ValueTier::Excellent);
        assert_eq!(classify_value(0.1), ValueTier::Good);
        assert_eq!(classify_value(0.499999), ValueTier::Good);
        assert_eq!(classify_value(0.5), ValueTier::Moderate);
        assert_eq!(classify_value(0.999999), ValueTier::Moderate);
        assert_eq!(classify_value(1.0), ValueTier::Poor);
        assert_eq!(classify_value(250.0), ValueTier::Poor);
    }

    #[test]
    fn test_monthly_streaming_scenario() {
        let netflix = subscription(15.49, BillingCycle::Monthly, 30.0, UsageFrequency::PerMonth);

        let cpu = cost_per_use(&netflix);
        assert!((cpu - 0.5163).abs() < 1e-4, "cost per use was {cpu}");
        assert_eq!(classify_value(cpu), ValueTier::Moderate);
    }

    #[test]
    fn test_annual_weekly_scenario() {
        let annual = subscription(139.99, BillingCycle::Annually, 2.0, UsageFrequency::PerWeek);

        let monthly_cost = normalize_monthly_cost(&annual);
        let monthly_usage = normalize_monthly_usage(&annual);
        assert!((monthly_cost - 11.666).abs() < 1e-3);
        assert!((monthly_usage - 8.69).abs() < 1e-9);

        let cpu = cost_per_use(&annual);
        assert!((cpu - 1.342).abs() < 1e-3, "cost per use was {cpu}");
        assert_eq!(classify_value(cpu), ValueTier::Poor);
    }

    #[test]
    fn test_unknown_frequency_falls_back_to_monthly_cost() {
        let unknown = subscription(
            24.0,
            BillingCycle::Annually,
            10.0,
            UsageFrequency::Unknown("hourly".to_string()),
        );
        assert_eq!(cost_per_use(&unknown), 2.0);
    }

    #[test]
    fn test_format_usage() {
        let per_week = subscription(1.0, BillingCycle::Monthly, 3.0, UsageFrequency::PerWeek);
        assert_eq!(format_usage(&per_week), "週3回");

        let per_day = subscription(1.0, BillingCycle::Monthly, 1.5, UsageFrequency::PerDay);
        assert_eq!(format_usage(&per_day), "1日1.5回");

        let unknown = subscription(
            1.0,
            BillingCycle::Monthly,
            1.0,
            UsageFrequency::Unknown(String::new()),
        );
        assert_eq!(format_usage(&unknown), "不明");
    }

    #[test]
    fn test_value_tier_labels() {
        assert_eq!(ValueTier::Excellent.description(), "✓ 非常にお得");
        assert_eq!(ValueTier::Poor.description(), "✗ 割高");
        assert_eq!(ValueTier::Moderate.to_string(), "moderate");
        assert_eq!(
            serde_json::to_string(&ValueTier::Good).unwrap(),
            "\"good\""
        );
    }

    #[quickcheck]
    fn prop_monthly_cost_is_unchanged(cost: u32) -> bool {
        let s = subscription(cents(cost), BillingCycle::Monthly, 1.0, UsageFrequency::PerMonth);
        normalize_monthly_cost(&s) == s.cost
    }

    #[quickcheck]
    fn prop_annual_cost_is_divided_by_twelve(cost: u32) -> bool {
        let s = subscription(cents(cost), BillingCycle::Annually, 1.0, UsageFrequency::PerMonth);
        normalize_monthly_cost(&s) == s.cost / 12.0
    }

    #[quickcheck]
    fn prop_daily_usage_scales_by_days(usage: u16) -> bool {
        let s = subscription(1.0, BillingCycle::Monthly, f64::from(usage), UsageFrequency::PerDay);
        normalize_monthly_usage(&s) == s.usage * 30.44
    }

    #[quickcheck]
    fn prop_weekly_usage_scales_by_weeks(usage: u16) -> bool {
        let s = subscription(1.0, BillingCycle::Monthly, f64::from(usage), UsageFrequency::PerWeek);
        normalize_monthly_usage(&s) == s.usage * 4.345
    }

    #[quickcheck]
    fn prop_cost_per_use_is_idempotent(cost: u32, usage: u16, annual: bool) -> bool {
        let cycle = if annual {
            BillingCycle::Annually
        } else {
            BillingCycle::Monthly
        };
        let s = subscription(cents(cost), cycle, f64::from(usage), UsageFrequency::PerWeek);
        cost_per_use(&s) == cost_per_use(&s)
    }

    #[quickcheck]
    fn prop_zero_usage_yields_monthly_cost(cost: u32, frequency: u8, annual: bool) -> TestResult {
        let usage_frequency = match frequency % 4 {
            0 => UsageFrequency::PerDay,
            1 => UsageFrequency::PerWeek,
            2 => UsageFrequency::PerMonth,
            _ => UsageFrequency::Unknown("other".to_string()),
        };
        let cycle = if annual {
            BillingCycle::Annually
        } else {
            BillingCycle::Monthly
        };
        let s = subscription(cents(cost), cycle, 0.0, usage_frequency);
        TestResult::from_bool(cost_per_use(&s) == normalize_monthly_cost(&s))
    }
}
