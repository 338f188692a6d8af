/// サブスクリプション機能モジュール
///
/// このモジュールは、サブスクリプション管理に関連するすべての機能を提供します：
/// - サブスクリプションの作成、読み取り、更新、削除
/// - カタログからのクイック追加
/// - 月額・年額・日額への正規化と1回あたりコストの計算
/// - 価値ランクの判定と集計
pub mod commands;
pub mod cost_model;
pub mod models;
pub mod repository;
pub mod summary;

// 公開インターフェース
pub use commands::{
    create_subscription, delete_subscription, get_cost_summary, get_ranked_metrics,
    get_subscriptions, get_value_comparison, quick_add, update_subscription,
};

pub use cost_model::{
    classify_value, cost_per_use, format_usage, normalize_monthly_cost, normalize_monthly_usage,
    ValueTier,
};

pub use models::{
    BillingCycle, CreateSubscriptionDto, Subscription, UpdateSubscriptionDto, UsageFrequency,
};

pub use repository::{find_all, save_all};

pub use summary::{CostSummary, SubscriptionMetrics};
