use serde::{Deserialize, Serialize};
use std::fmt;

/// 通貨が指定されていない場合の基準通貨
pub const BASE_CURRENCY: &str = "USD";

/// 支払いサイクル
///
/// 保存データに未知の値が含まれていてもエラーにせず、`Unknown`として保持する。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum BillingCycle {
    Monthly,
    Annually,
    Unknown(String),
}

impl BillingCycle {
    /// 保存形式の文字列表現
    pub fn as_str(&self) -> &str {
        match self {
            BillingCycle::Monthly => "monthly",
            BillingCycle::Annually => "annually",
            BillingCycle::Unknown(raw) => raw,
        }
    }

    /// 入力値を厳密に解釈する（未知の値はNone）
    pub fn parse_strict(value: &str) -> Option<Self> {
        match Self::from(value.to_string()) {
            BillingCycle::Unknown(_) => None,
            cycle => Some(cycle),
        }
    }
}

impl From<String> for BillingCycle {
    fn from(value: String) -> Self {
        match value.as_str() {
            "monthly" => BillingCycle::Monthly,
            "annually" => BillingCycle::Annually,
            _ => BillingCycle::Unknown(value),
        }
    }
}

impl From<BillingCycle> for String {
    fn from(cycle: BillingCycle) -> Self {
        match cycle {
            BillingCycle::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for BillingCycle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 利用頻度の単位
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum UsageFrequency {
    PerDay,
    PerWeek,
    PerMonth,
    Unknown(String),
}

impl UsageFrequency {
    /// 保存形式の文字列表現
    pub fn as_str(&self) -> &str {
        match self {
            UsageFrequency::PerDay => "per-day",
            UsageFrequency::PerWeek => "per-week",
            UsageFrequency::PerMonth => "per-month",
            UsageFrequency::Unknown(raw) => raw,
        }
    }

    /// 入力値を厳密に解釈する（未知の値はNone）
    pub fn parse_strict(value: &str) -> Option<Self> {
        match Self::from(value.to_string()) {
            UsageFrequency::Unknown(_) => None,
            frequency => Some(frequency),
        }
    }
}

impl From<String> for UsageFrequency {
    fn from(value: String) -> Self {
        match value.as_str() {
            "per-day" => UsageFrequency::PerDay,
            "per-week" => UsageFrequency::PerWeek,
            "per-month" => UsageFrequency::PerMonth,
            _ => UsageFrequency::Unknown(value),
        }
    }
}

impl From<UsageFrequency> for String {
    fn from(frequency: UsageFrequency) -> Self {
        match frequency {
            UsageFrequency::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for UsageFrequency {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// サブスクリプションデータモデル
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subscription {
    pub id: String,   // 作成時に割り当て、以後変更しない
    pub name: String, // サービス名（カタログ由来の場合はプラン名を含む）
    pub cost: f64,    // 0以上
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub currency: Option<String>, // 未指定の場合は基準通貨
    pub billing_cycle: BillingCycle,
    pub usage: f64, // 0以上
    pub usage_frequency: UsageFrequency,
}

impl Subscription {
    /// 金額の通貨コード（未指定の場合は基準通貨）
    pub fn currency_code(&self) -> &str {
        self.currency.as_deref().unwrap_or(BASE_CURRENCY)
    }
}

/// サブスクリプション作成用DTO
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateSubscriptionDto {
    pub name: String,
    pub cost: f64,
    pub currency: Option<String>,
    pub billing_cycle: String,
    pub usage: f64,
    pub usage_frequency: String,
}

/// サブスクリプション更新用DTO
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct UpdateSubscriptionDto {
    pub name: Option<String>,
    pub cost: Option<f64>,
    pub currency: Option<String>,
    pub billing_cycle: Option<String>,
    pub usage: Option<f64>,
    pub usage_frequency: Option<String>,
}
