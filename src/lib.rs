pub mod cli;
pub mod features;
mod render;
pub mod shared;

use clap::Parser;
use cli::{Cli, Commands};
use features::backup;
use features::catalog::{self, CatalogSort};
use features::currency::{self, ExchangeRates, RatesClient};
use features::preferences::{self, Theme};
use features::subscriptions::{self, CreateSubscriptionDto, Subscription, UpdateSubscriptionDto};
use log::{error, info, warn};
use shared::{
    initialize_application, initialize_logging_system, load_environment_variables,
    log_initialization_complete, open_store, AppError, AppResult, ErrorSeverity, KeyValueStore,
};
use std::fs;
use std::path::Path;

/// アプリケーション状態（ストアと読み込み済みのデータを保持）
pub struct AppState {
    pub store: Box<dyn KeyValueStore>,
    pub subscriptions: Vec<Subscription>,
    /// 表示通貨コード
    pub currency: String,
    pub theme: Theme,
    pub rates: ExchangeRates,
}

impl AppState {
    /// ストアから状態を読み込む
    ///
    /// 読み込みに失敗した項目は既定値で始める。
    pub fn load(store: Box<dyn KeyValueStore>) -> Self {
        let rates = currency::load_cached_rates(store.as_ref());
        let subscriptions = subscriptions::find_all(store.as_ref());
        let currency = currency::load_currency(store.as_ref(), &rates);
        let theme = preferences::load_theme(store.as_ref());

        Self {
            store,
            subscriptions,
            currency,
            theme,
            rates,
        }
    }

    /// 金額をUSD建てに揃えたサブスクリプション一覧（集計用）
    pub fn base_subscriptions(&self) -> Vec<Subscription> {
        self.subscriptions
            .iter()
            .map(|sub| currency::to_base_subscription(sub, &self.rates))
            .collect()
    }
}

/// CLIのエントリーポイント
///
/// エラーはユーザー向けメッセージを表示して終了コード1で終了する。
pub async fn run() {
    let args = Cli::parse();

    // LOG_LEVELを.envから読むため、読み込み結果はロガー初期化後に出力する
    let env_status = load_environment_variables();
    initialize_logging_system();
    env_status.log();

    if let Err(e) = run_with(args).await {
        match e.severity() {
            ErrorSeverity::High => error!("コマンドの実行に失敗しました: {}", e.details()),
            ErrorSeverity::Medium => warn!("コマンドの実行に失敗しました: {}", e.details()),
            ErrorSeverity::Low => info!("入力エラー: {}", e.details()),
        }
        eprintln!("エラー: {}", e.user_message());
        std::process::exit(1);
    }
}

async fn run_with(args: Cli) -> AppResult<()> {
    info!("アプリケーション初期化を開始します...");
    let init = initialize_application(args.data_dir.as_deref())?;
    log_initialization_complete(&init);

    let store = open_store(&init.database_path)?;
    let mut state = AppState::load(Box::new(store));

    let output = execute(&mut state, args.get_command()).await?;
    if !output.is_empty() {
        println!("{output}");
    }
    Ok(())
}

/// コマンドを実行し、表示するテキストを返す
pub async fn execute(state: &mut AppState, command: Commands) -> AppResult<String> {
    match command {
        Commands::Add {
            name,
            cost,
            cycle,
            usage,
            frequency,
            currency,
        } => {
            let created = subscriptions::create_subscription(
                state,
                CreateSubscriptionDto {
                    name,
                    cost,
                    currency,
                    billing_cycle: cycle,
                    usage,
                    usage_frequency: frequency,
                },
            )?;
            Ok(format!("追加しました: {}", render::subscription_line(state, &created)))
        }
        Commands::QuickAdd {
            service,
            tier,
            usage,
        } => {
            let created = subscriptions::quick_add(state, &service, tier.as_deref(), usage)?;
            Ok(format!("追加しました: {}", render::subscription_line(state, &created)))
        }
        Commands::Edit {
            id,
            name,
            cost,
            cycle,
            usage,
            frequency,
            currency,
        } => {
            let updated = subscriptions::update_subscription(
                state,
                &id,
                UpdateSubscriptionDto {
                    name,
                    cost,
                    currency,
                    billing_cycle: cycle,
                    usage,
                    usage_frequency: frequency,
                },
            )?;
            Ok(format!("更新しました: {}", render::subscription_line(state, &updated)))
        }
        Commands::Delete { id } => {
            let removed = subscriptions::delete_subscription(state, &id)?;
            Ok(format!("削除しました: {}", removed.name))
        }
        Commands::List { ranked } => {
            if ranked {
                let metrics = subscriptions::get_ranked_metrics(state);
                Ok(render::ranked_list(state, &metrics))
            } else {
                Ok(render::subscription_list(state))
            }
        }
        Commands::Summary => {
            let totals = subscriptions::get_cost_summary(state);
            let comparison = subscriptions::get_value_comparison(state);
            Ok(render::summary(state, &totals, comparison.as_ref()))
        }
        Commands::Catalog {
            search,
            category,
            sort,
            categories,
        } => {
            if categories {
                return Ok(catalog::categories().join("\n"));
            }
            let sort_by = CatalogSort::parse(&sort).ok_or_else(|| {
                AppError::validation(format!(
                    "並び順は name, price-low, price-high, category のいずれかです: {sort}"
                ))
            })?;
            let mut entries = catalog::search(&search, category.as_deref());
            catalog::sort_entries(&mut entries, sort_by);
            Ok(entries
                .iter()
                .map(|entry| render::catalog_entry(state, entry))
                .collect::<Vec<_>>()
                .join("\n"))
        }
        Commands::Currency { code } => match code {
            Some(code) => {
                state.currency = currency::save_currency(state.store.as_ref(), &state.rates, &code)?;
                Ok(format!("表示通貨: {}", state.currency))
            }
            None => Ok(format!(
                "表示通貨: {}（利用可能: {}）",
                state.currency,
                state.rates.codes().join(", ")
            )),
        },
        Commands::Theme { value } => {
            let next = match value.as_deref() {
                None => return Ok(format!("テーマ: {}", state.theme)),
                Some(v) if v.eq_ignore_ascii_case("toggle") => state.theme.toggled(),
                Some(v) => preferences::parse_theme(v)?,
            };
            preferences::save_theme(state.store.as_ref(), next)?;
            state.theme = next;
            Ok(format!("テーマ: {}", state.theme))
        }
        Commands::Rates { refresh } => {
            if refresh {
                let client = RatesClient::new()?;
                state.rates = client.refresh(&state.rates).await;
                currency::save_cached_rates(state.store.as_ref(), &state.rates)?;
            }
            Ok(render::rates_table(&state.rates, &state.currency))
        }
        Commands::Export { output } => {
            let json = backup::export_document(state)?;
            match output {
                Some(path) => {
                    fs::write(&path, json)?;
                    Ok(format!("エクスポートしました: {}", path.display()))
                }
                None => Ok(json),
            }
        }
        Commands::Import { file, yes } => {
            let raw = read_import_file(&file)?;
            let result = backup::import_document(state, &raw, yes)?;
            Ok(render::import_result(&result))
        }
    }
}

fn read_import_file(path: &Path) -> AppResult<String> {
    fs::read_to_string(path).map_err(|e| {
        AppError::validation(format!(
            "インポートファイルを読み込めません: {} ({e})",
            path.display()
        ))
    })
}
