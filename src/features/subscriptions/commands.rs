use super::models::{
    BillingCycle, CreateSubscriptionDto, Subscription, UpdateSubscriptionDto, UsageFrequency,
};
use super::repository;
use super::summary::{self, CostSummary, SubscriptionMetrics};
use crate::features::catalog;
use crate::shared::errors::{AppError, AppResult};
use crate::AppState;

/// サービス名の最大文字数
const MAX_NAME_LENGTH: usize = 100;

/// サブスクリプションを作成する
///
/// # 引数
/// * `state` - アプリケーション状態
/// * `dto` - サブスクリプション作成用DTO
///
/// # 戻り値
/// 作成されたサブスクリプション、または失敗時はエラー
pub fn create_subscription(
    state: &mut AppState,
    dto: CreateSubscriptionDto,
) -> AppResult<Subscription> {
    validate_create_subscription_dto(state, &dto)?;

    let subscription = Subscription {
        id: uuid::Uuid::new_v4().to_string(),
        name: dto.name.trim().to_string(),
        cost: dto.cost,
        currency: normalize_currency(dto.currency),
        billing_cycle: BillingCycle::from(dto.billing_cycle),
        usage: dto.usage,
        usage_frequency: UsageFrequency::from(dto.usage_frequency),
    };

    let mut next = state.subscriptions.clone();
    next.push(subscription.clone());
    persist(state, next)?;

    log::info!(
        "サブスクリプションを追加しました: id={}, name={}",
        subscription.id,
        subscription.name
    );
    Ok(subscription)
}

/// カタログからサブスクリプションを追加する
///
/// 月額払い・月あたりの利用回数として登録する。
///
/// # 引数
/// * `state` - アプリケーション状態
/// * `service_name` - カタログのサービス名
/// * `tier` - プラン名（複数プランのサービスのみ）
/// * `monthly_usage` - 月あたりの利用回数
///
/// # 戻り値
/// 追加されたサブスクリプション、または同名のサブスクリプションが既にある場合はエラー
pub fn quick_add(
    state: &mut AppState,
    service_name: &str,
    tier: Option<&str>,
    monthly_usage: f64,
) -> AppResult<Subscription> {
    let plan = catalog::resolve(service_name, tier)?;

    if state
        .subscriptions
        .iter()
        .any(|sub| sub.name == plan.display_name)
    {
        return Err(AppError::validation(format!(
            "{}は既に登録されています",
            plan.display_name
        )));
    }

    create_subscription(
        state,
        CreateSubscriptionDto {
            name: plan.display_name,
            cost: plan.cost,
            currency: None,
            billing_cycle: BillingCycle::Monthly.to_string(),
            usage: monthly_usage,
            usage_frequency: UsageFrequency::PerMonth.to_string(),
        },
    )
}

/// サブスクリプションを更新する
///
/// # 引数
/// * `state` - アプリケーション状態
/// * `id` - サブスクリプションID
/// * `dto` - サブスクリプション更新用DTO（指定されたフィールドのみ更新）
///
/// # 戻り値
/// 更新されたサブスクリプション、または失敗時はエラー
pub fn update_subscription(
    state: &mut AppState,
    id: &str,
    dto: UpdateSubscriptionDto,
) -> AppResult<Subscription> {
    validate_update_subscription_dto(state, &dto)?;

    let mut next = state.subscriptions.clone();
    let existing = next
        .iter_mut()
        .find(|sub| sub.id == id)
        .ok_or_else(|| AppError::NotFound(format!("ID {id} のサブスクリプションが見つかりません")))?;

    if let Some(name) = dto.name {
        existing.name = name.trim().to_string();
    }
    if let Some(cost) = dto.cost {
        existing.cost = cost;
    }
    if let Some(currency) = dto.currency {
        existing.currency = normalize_currency(Some(currency));
    }
    if let Some(billing_cycle) = dto.billing_cycle {
        existing.billing_cycle = BillingCycle::from(billing_cycle);
    }
    if let Some(usage) = dto.usage {
        existing.usage = usage;
    }
    if let Some(usage_frequency) = dto.usage_frequency {
        existing.usage_frequency = UsageFrequency::from(usage_frequency);
    }

    let updated = existing.clone();
    persist(state, next)?;

    log::info!("サブスクリプションを更新しました: id={id}");
    Ok(updated)
}

/// サブスクリプションを削除する
///
/// # 戻り値
/// 削除されたサブスクリプション、または失敗時はエラー
pub fn delete_subscription(state: &mut AppState, id: &str) -> AppResult<Subscription> {
    let position = state
        .subscriptions
        .iter()
        .position(|sub| sub.id == id)
        .ok_or_else(|| AppError::NotFound(format!("ID {id} のサブスクリプションが見つかりません")))?;

    let mut next = state.subscriptions.clone();
    let removed = next.remove(position);
    persist(state, next)?;

    log::info!("サブスクリプションを削除しました: id={id}, name={}", removed.name);
    Ok(removed)
}

/// サブスクリプション一覧を取得する（登録順）
pub fn get_subscriptions(state: &AppState) -> &[Subscription] {
    &state.subscriptions
}

/// 合計金額（USD換算）を取得する
pub fn get_cost_summary(state: &AppState) -> CostSummary {
    summary::summarize(&state.base_subscriptions())
}

/// 1回あたりコストの昇順で計算結果（USD換算）を取得する
pub fn get_ranked_metrics(state: &AppState) -> Vec<SubscriptionMetrics> {
    summary::ranked_metrics(&state.base_subscriptions())
}

/// 最も良い・悪いサブスクリプションの計算結果（USD換算）を取得する
///
/// # 戻り値
/// (ベスト, ワースト)、2件未満の場合はNone
pub fn get_value_comparison(state: &AppState) -> Option<(SubscriptionMetrics, SubscriptionMetrics)> {
    let base = state.base_subscriptions();
    summary::compare_value(&base).map(|comparison| {
        (
            SubscriptionMetrics::from_subscription(comparison.best),
            SubscriptionMetrics::from_subscription(comparison.worst),
        )
    })
}

/// 新しい一覧を保存し、成功した場合のみ状態に反映する
fn persist(state: &mut AppState, next: Vec<Subscription>) -> AppResult<()> {
    repository::save_all(state.store.as_ref(), &next)?;
    state.subscriptions = next;
    Ok(())
}

fn normalize_currency(currency: Option<String>) -> Option<String> {
    currency
        .map(|code| code.trim().to_uppercase())
        .filter(|code| !code.is_empty())
}

/// サブスクリプション作成DTOのバリデーション
fn validate_create_subscription_dto(state: &AppState, dto: &CreateSubscriptionDto) -> AppResult<()> {
    validate_name(&dto.name)?;
    validate_amount("金額", dto.cost)?;
    validate_amount("利用回数", dto.usage)?;
    validate_billing_cycle(&dto.billing_cycle)?;
    validate_usage_frequency(&dto.usage_frequency)?;
    if let Some(ref currency) = dto.currency {
        validate_currency(state, currency)?;
    }
    Ok(())
}

/// サブスクリプション更新DTOのバリデーション
fn validate_update_subscription_dto(state: &AppState, dto: &UpdateSubscriptionDto) -> AppResult<()> {
    if let Some(ref name) = dto.name {
        validate_name(name)?;
    }
    if let Some(cost) = dto.cost {
        validate_amount("金額", cost)?;
    }
    if let Some(usage) = dto.usage {
        validate_amount("利用回数", usage)?;
    }
    if let Some(ref billing_cycle) = dto.billing_cycle {
        validate_billing_cycle(billing_cycle)?;
    }
    if let Some(ref usage_frequency) = dto.usage_frequency {
        validate_usage_frequency(usage_frequency)?;
    }
    if let Some(ref currency) = dto.currency {
        validate_currency(state, currency)?;
    }
    Ok(())
}

fn validate_name(name: &str) -> AppResult<()> {
    if name.trim().is_empty() {
        return Err(AppError::validation("サービス名を入力してください"));
    }
    if name.trim().chars().count() > MAX_NAME_LENGTH {
        return Err(AppError::validation(format!(
            "サービス名は{MAX_NAME_LENGTH}文字以内で入力してください"
        )));
    }
    Ok(())
}

// 金額・利用回数は0以上の有限値
fn validate_amount(label: &str, value: f64) -> AppResult<()> {
    if !value.is_finite() {
        return Err(AppError::validation(format!("{label}は数値で入力してください")));
    }
    if value < 0.0 {
        return Err(AppError::validation(format!("{label}は0以上である必要があります")));
    }
    Ok(())
}

fn validate_billing_cycle(value: &str) -> AppResult<()> {
    BillingCycle::parse_strict(value).map(|_| ()).ok_or_else(|| {
        AppError::validation("支払いサイクルは'monthly'または'annually'である必要があります")
    })
}

fn validate_usage_frequency(value: &str) -> AppResult<()> {
    UsageFrequency::parse_strict(value).map(|_| ()).ok_or_else(|| {
        AppError::validation(
            "利用頻度は'per-day'、'per-week'、'per-month'のいずれかである必要があります",
        )
    })
}

// 空の通貨コードは基準通貨に戻す指定として許可する
fn validate_currency(state: &AppState, code: &str) -> AppResult<()> {
    if code.trim().is_empty() || state.rates.is_supported(code) {
        Ok(())
    } else {
        Err(AppError::validation(format!("未対応の通貨です: {}", code.trim())))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::features::subscriptions::cost_model::ValueTier;
    use crate::shared::database::{KeyValueStore, MemoryStore, SqliteStore};

    fn create_test_state() -> AppState {
        AppState::load(Box::new(SqliteStore::open_in_memory().unwrap()))
    }

    fn create_dto(name: &str, cost: f64, billing_cycle: &str, usage: f64, frequency: &str) -> CreateSubscriptionDto {
        CreateSubscriptionDto {
            name: name.to_string(),
            cost,
            currency: None,
            billing_cycle: billing_cycle.to_string(),
            usage,
            usage_frequency: frequency.to_string(),
        }
    }

    #[test]
    fn test_create_subscription() {
        let mut state = create_test_state();

        let created = create_subscription(
            &mut state,
            create_dto("  Netflix  ", 15.49, "monthly", 30.0, "per-month"),
        )
        .unwrap();

        assert_eq!(created.name, "Netflix");
        assert!(!created.id.is_empty());
        assert_eq!(get_subscriptions(&state).len(), 1);

        // 保存されていることを確認
        let reloaded = repository::find_all(state.store.as_ref());
        assert_eq!(reloaded, vec![created]);
    }

    #[test]
    fn test_create_assigns_unique_ids() {
        let mut state = create_test_state();
        let a = create_subscription(&mut state, create_dto("A", 1.0, "monthly", 1.0, "per-day")).unwrap();
        let b = create_subscription(&mut state, create_dto("B", 1.0, "monthly", 1.0, "per-day")).unwrap();
        assert_ne!(a.id, b.id);
    }

    #[test]
    fn test_create_validation_errors() {
        let mut state = create_test_state();

        let cases = vec![
            create_dto("   ", 1.0, "monthly", 1.0, "per-month"),
            create_dto(&"x".repeat(101), 1.0, "monthly", 1.0, "per-month"),
            create_dto("A", -1.0, "monthly", 1.0, "per-month"),
            create_dto("A", f64::NAN, "monthly", 1.0, "per-month"),
            create_dto("A", 1.0, "monthly", -0.5, "per-month"),
            create_dto("A", 1.0, "weekly", 1.0, "per-month"),
            create_dto("A", 1.0, "monthly", 1.0, "per-year"),
        ];

        for dto in cases {
            let result = create_subscription(&mut state, dto.clone());
            assert!(
                matches!(result, Err(AppError::Validation(_))),
                "バリデーションエラーになるべき入力: {dto:?}"
            );
        }
        assert!(get_subscriptions(&state).is_empty());

        let mut with_currency = create_dto("A", 1.0, "monthly", 1.0, "per-month");
        with_currency.currency = Some("BTC".to_string());
        assert!(matches!(
            create_subscription(&mut state, with_currency),
            Err(AppError::Validation(_))
        ));
    }

    #[test]
    fn test_zero_cost_and_usage_are_allowed() {
        let mut state = create_test_state();
        let created = create_subscription(&mut state, create_dto("Free", 0.0, "annually", 0.0, "per-week"));
        assert!(created.is_ok());
    }

    #[test]
    fn test_update_subscription() {
        let mut state = create_test_state();
        let created =
            create_subscription(&mut state, create_dto("Spotify", 10.99, "monthly", 1.0, "per-day")).unwrap();

        let updated = update_subscription(
            &mut state,
            &created.id,
            UpdateSubscriptionDto {
                cost: Some(131.88),
                billing_cycle: Some("annually".to_string()),
                currency: Some("eur".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.name, "Spotify");
        assert_eq!(updated.cost, 131.88);
        assert_eq!(updated.billing_cycle, BillingCycle::Annually);
        assert_eq!(updated.currency.as_deref(), Some("EUR"));
        assert_eq!(get_subscriptions(&state)[0], updated);
    }

    #[test]
    fn test_update_with_blank_currency_resets_to_base() {
        let mut state = create_test_state();
        let mut dto = create_dto("Spotify", 5.0, "monthly", 1.0, "per-day");
        dto.currency = Some("EUR".to_string());
        let created = create_subscription(&mut state, dto).unwrap();
        assert_eq!(created.currency.as_deref(), Some("EUR"));

        let updated = update_subscription(
            &mut state,
            &created.id,
            UpdateSubscriptionDto {
                currency: Some("  ".to_string()),
                ..Default::default()
            },
        )
        .unwrap();

        assert_eq!(updated.currency, None);
        assert_eq!(updated.currency_code(), "USD");
    }

    #[test]
    fn test_update_errors_leave_state_unchanged() {
        let mut state = create_test_state();
        let created =
            create_subscription(&mut state, create_dto("Hulu", 7.99, "monthly", 2.0, "per-week")).unwrap();

        let not_found = update_subscription(&mut state, "missing", UpdateSubscriptionDto::default());
        assert!(matches!(not_found, Err(AppError::NotFound(_))));

        let invalid = update_subscription(
            &mut state,
            &created.id,
            UpdateSubscriptionDto {
                usage: Some(-3.0),
                ..Default::default()
            },
        );
        assert!(matches!(invalid, Err(AppError::Validation(_))));
        assert_eq!(get_subscriptions(&state), &[created]);
    }

    #[test]
    fn test_delete_subscription() {
        let mut state = create_test_state();
        let a = create_subscription(&mut state, create_dto("A", 1.0, "monthly", 1.0, "per-month")).unwrap();
        let b = create_subscription(&mut state, create_dto("B", 2.0, "monthly", 1.0, "per-month")).unwrap();

        let removed = delete_subscription(&mut state, &a.id).unwrap();
        assert_eq!(removed.id, a.id);
        assert_eq!(get_subscriptions(&state), &[b]);

        let missing = delete_subscription(&mut state, &a.id);
        assert!(matches!(missing, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_quick_add() {
        let mut state = create_test_state();

        let added = quick_add(&mut state, "netflix", Some("Premium"), 12.0).unwrap();
        assert_eq!(added.name, "Netflix (Premium)");
        assert_eq!(added.cost, 22.99);
        assert_eq!(added.billing_cycle, BillingCycle::Monthly);
        assert_eq!(added.usage_frequency, UsageFrequency::PerMonth);
        assert_eq!(added.usage, 12.0);

        // 同名のサブスクリプションは追加できない
        let duplicate = quick_add(&mut state, "Netflix", Some("premium"), 1.0);
        assert!(matches!(duplicate, Err(AppError::Validation(_))));

        // 別プランなら追加できる
        assert!(quick_add(&mut state, "Netflix", Some("Basic"), 1.0).is_ok());
        assert_eq!(get_subscriptions(&state).len(), 2);

        let unknown = quick_add(&mut state, "Not In Catalog", None, 1.0);
        assert!(matches!(unknown, Err(AppError::NotFound(_))));
    }

    #[test]
    fn test_summary_and_comparison() {
        let mut state = create_test_state();
        create_subscription(&mut state, create_dto("Monthly", 10.0, "monthly", 1.0, "per-month")).unwrap();
        assert!(get_value_comparison(&state).is_none());

        create_subscription(&mut state, create_dto("Annual", 120.0, "annually", 1.0, "per-day")).unwrap();

        let summary = get_cost_summary(&state);
        assert_eq!(summary.monthly_cost, 20.0);
        assert_eq!(summary.yearly_cost, 240.0);
        assert_eq!(summary.count, 2);

        let (best, worst) = get_value_comparison(&state).unwrap();
        assert_eq!(best.name, "Annual");
        assert_eq!(worst.name, "Monthly");
        assert_eq!(worst.tier, ValueTier::Poor);

        let ranked = get_ranked_metrics(&state);
        assert_eq!(ranked.len(), 2);
        assert_eq!(ranked[0].name, "Annual");
    }

    #[test]
    fn test_summary_uses_base_currency() {
        let mut state = create_test_state();
        let mut dto = create_dto("JP Service", 1500.0, "monthly", 1.0, "per-month");
        dto.currency = Some("JPY".to_string());
        create_subscription(&mut state, dto).unwrap();

        let summary = get_cost_summary(&state);
        assert_eq!(summary.monthly_cost, 10.0);
    }

    /// 書き込みのみ失敗するストア
    struct ReadOnlyStore(MemoryStore);

    impl KeyValueStore for ReadOnlyStore {
        fn get_item(&self, key: &str) -> AppResult<Option<String>> {
            self.0.get_item(key)
        }

        fn set_item(&self, _key: &str, _value: &str) -> AppResult<()> {
            Err(AppError::Database("read-only".to_string()))
        }

        fn remove_item(&self, _key: &str) -> AppResult<()> {
            Err(AppError::Database("read-only".to_string()))
        }
    }

    #[test]
    fn test_save_failure_does_not_change_state() {
        let mut state = AppState::load(Box::new(ReadOnlyStore(MemoryStore::new())));

        let result = create_subscription(&mut state, create_dto("A", 1.0, "monthly", 1.0, "per-month"));
        assert!(matches!(result, Err(AppError::Database(_))));
        assert!(get_subscriptions(&state).is_empty());
    }
}
