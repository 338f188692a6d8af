use serde::Serialize;

/// 料金プラン（例: Basic / Standard / Premium）
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct PlanTier {
    pub tier: &'static str,
    pub cost: f64, // 月額（USD）
}

/// カタログ上の料金体系
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Pricing {
    /// 単一料金
    Single { cost: f64 },
    /// 複数プラン（カテゴリは共通）
    Tiered { tiers: &'static [PlanTier] },
}

/// カタログに登録された既知のサービス
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct CatalogEntry {
    pub name: &'static str,
    pub category: &'static str,
    pub pricing: Pricing,
}

impl CatalogEntry {
    /// 並び替え・表示に使う最安料金
    pub fn min_cost(&self) -> f64 {
        match self.pricing {
            Pricing::Single { cost } => cost,
            Pricing::Tiered { tiers } => tiers
                .iter()
                .map(|tier| tier.cost)
                .fold(f64::INFINITY, f64::min),
        }
    }

    pub fn is_tiered(&self) -> bool {
        matches!(self.pricing, Pricing::Tiered { .. })
    }
}

/// 並び替え順
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CatalogSort {
    #[default]
    Name,
    PriceLow,
    PriceHigh,
    Category,
}

impl CatalogSort {
    /// 入力値から並び替え順を解釈する（"name" / "price-low" / "price-high" / "category"）
    pub fn parse(value: &str) -> Option<Self> {
        match value {
            "name" => Some(CatalogSort::Name),
            "price-low" => Some(CatalogSort::PriceLow),
            "price-high" => Some(CatalogSort::PriceHigh),
            "category" => Some(CatalogSort::Category),
            _ => None,
        }
    }
}

/// カタログから解決されたプラン
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedPlan {
    /// サブスクリプション名（複数プランの場合は "サービス名 (プラン名)"）
    pub display_name: String,
    pub category: &'static str,
    pub cost: f64,
}
