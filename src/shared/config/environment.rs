/// アプリケーションの実行環境を表す列挙型
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    /// 開発環境
    Development,
    /// プロダクション環境
    Production,
}

/// 為替レートAPIのデフォルトURL（USD基準）
pub const DEFAULT_RATES_API_URL: &str = "https://open.er-api.com/v6/latest/USD";

/// 為替レートAPIのデフォルトタイムアウト（秒）
pub const DEFAULT_RATES_TIMEOUT_SECONDS: u64 = 10;

/// 環境設定を管理する構造体
#[derive(Debug, Clone)]
pub struct EnvironmentConfig {
    /// 実行環境
    pub environment: String,
    /// ログレベル
    pub log_level: String,
}

impl EnvironmentConfig {
    /// 環境変数から設定を読み込む
    ///
    /// # 戻り値
    /// 環境設定
    pub fn from_env() -> Self {
        let environment = get_environment();
        let log_level = std::env::var("LOG_LEVEL").unwrap_or_else(|_| {
            if environment == Environment::Development {
                "debug".to_string()
            } else {
                "info".to_string()
            }
        });

        Self {
            environment: format!("{environment:?}").to_lowercase(),
            log_level,
        }
    }

    /// 設定されたログレベルを`log::LevelFilter`に変換する
    ///
    /// # 戻り値
    /// ログレベルフィルター（不明な値の場合はInfo）
    pub fn level_filter(&self) -> log::LevelFilter {
        match self.log_level.to_lowercase().as_str() {
            "error" => log::LevelFilter::Error,
            "warn" => log::LevelFilter::Warn,
            "info" => log::LevelFilter::Info,
            "debug" => log::LevelFilter::Debug,
            "trace" => log::LevelFilter::Trace,
            _ => log::LevelFilter::Info,
        }
    }
}

/// 為替レートAPIの設定を管理する構造体
#[derive(Debug, Clone)]
pub struct RatesApiConfig {
    /// USD基準のレートを返すエンドポイントURL
    pub api_url: String,
    /// リクエストタイムアウト（秒）
    pub timeout_seconds: u64,
}

impl Default for RatesApiConfig {
    fn default() -> Self {
        Self {
            api_url: DEFAULT_RATES_API_URL.to_string(),
            timeout_seconds: DEFAULT_RATES_TIMEOUT_SECONDS,
        }
    }
}

impl RatesApiConfig {
    /// 環境変数から為替レートAPI設定を読み込む
    ///
    /// # 戻り値
    /// 為替レートAPI設定（未設定の項目はデフォルト値）
    ///
    /// # 読み込み順序
    /// 1. コンパイル時埋め込み値 EMBEDDED_RATES_API_URL
    /// 2. 実行時環境変数 RATES_API_URL
    /// 3. デフォルト値
    pub fn from_env() -> Self {
        let api_url = option_env!("EMBEDDED_RATES_API_URL")
            .map(|s| s.to_string())
            .or_else(|| std::env::var("RATES_API_URL").ok())
            .filter(|url| !url.trim().is_empty())
            .unwrap_or_else(|| {
                log::debug!("RATES_API_URL が設定されていないため、デフォルト値を使用");
                DEFAULT_RATES_API_URL.to_string()
            });

        let timeout_seconds = std::env::var("RATES_TIMEOUT_SECONDS")
            .ok()
            .and_then(|val| match val.parse::<u64>() {
                Ok(secs) if secs > 0 => Some(secs),
                _ => {
                    log::warn!("RATES_TIMEOUT_SECONDS の値が不正です: {val}");
                    None
                }
            })
            .unwrap_or(DEFAULT_RATES_TIMEOUT_SECONDS);

        Self {
            api_url,
            timeout_seconds,
        }
    }
}

/// 現在の実行環境を判定する
///
/// # 戻り値
/// 現在の実行環境（Development または Production）
///
/// # 判定ロジック
/// 1. コンパイル時埋め込み環境変数を最優先
/// 2. 実行時環境変数 ENVIRONMENT を確認
/// 3. デバッグビルドの場合は Development
/// 4. リリースビルドの場合は Production
pub fn get_environment() -> Environment {
    // コンパイル時埋め込み環境変数を最優先
    if let Some(embedded_env) = option_env!("EMBEDDED_ENVIRONMENT") {
        let env = parse_environment(embedded_env);
        log::debug!("環境判定: コンパイル時埋め込み値を使用 -> {embedded_env} -> {env:?}");
        return env;
    }

    // 実行時環境変数を確認
    if let Ok(env_var) = std::env::var("ENVIRONMENT") {
        let env = parse_environment(&env_var);
        log::debug!("環境判定: 実行時環境変数を使用 -> {env_var} -> {env:?}");
        return env;
    }

    // フォールバック: ビルド設定に基づく判定
    let env = if cfg!(debug_assertions) {
        Environment::Development
    } else {
        Environment::Production
    };
    log::debug!(
        "環境判定: ビルド設定を使用 -> debug_assertions={} -> {env:?}",
        cfg!(debug_assertions)
    );
    env
}

fn parse_environment(value: &str) -> Environment {
    match value {
        "production" => Environment::Production,
        _ => Environment::Development,
    }
}

/// 環境に応じたデータベースファイル名を取得する
///
/// # ファイル名の規則
/// - 開発環境: "dev_subscriptions.db"
/// - プロダクション環境: "subscriptions.db"
pub fn get_database_filename(env: Environment) -> &'static str {
    match env {
        Environment::Development => "dev_subscriptions.db",
        Environment::Production => "subscriptions.db",
    }
}

/// 環境変数ファイルの読み込み結果
///
/// ロガー初期化前に読み込むため、結果は初期化後に`log`で出力する。
#[derive(Debug, Clone, PartialEq)]
pub enum EnvFileStatus {
    /// コンパイル時埋め込み環境設定を使用
    Embedded(String),
    /// 環境に対応するファイルを読み込んだ
    Loaded(String),
    /// 環境固有のファイルがなく、デフォルトの.envを読み込んだ
    FallbackLoaded { missing: String },
    /// ファイルが見つからない
    NotFound(String),
}

impl EnvFileStatus {
    /// 読み込み結果をログに出力する
    pub fn log(&self) {
        let (level, message) = self.describe();
        log::log!(level, "{message}");
    }

    fn describe(&self) -> (log::Level, String) {
        match self {
            EnvFileStatus::Embedded(env) => (
                log::Level::Info,
                format!("コンパイル時埋め込み環境設定を使用: {env}"),
            ),
            EnvFileStatus::Loaded(file) => {
                (log::Level::Info, format!("{file}ファイルを読み込みました"))
            }
            EnvFileStatus::FallbackLoaded { missing } => (
                log::Level::Warn,
                format!("{missing}が見つからないため、デフォルトの.envファイルを読み込みました"),
            ),
            EnvFileStatus::NotFound(file) => (
                log::Level::Warn,
                format!("{file}が見つかりません。直接設定された環境変数を使用します。"),
            ),
        }
    }
}

/// 環境名から読み込む.envファイル名を決める
fn env_file_for(environment: &str) -> &'static str {
    match environment {
        "production" => ".env.production",
        _ => ".env",
    }
}

/// 環境に応じた.envファイルを読み込む
///
/// # 戻り値
/// 読み込み結果（ロガー初期化後に`EnvFileStatus::log`で出力する）
///
/// # 処理内容
/// 1. コンパイル時埋め込み環境変数をチェック
/// 2. 環境に応じた.envファイルを読み込み
/// 3. フォールバック処理
pub fn load_environment_variables() -> EnvFileStatus {
    if let Some(env) = option_env!("EMBEDDED_ENVIRONMENT") {
        return EnvFileStatus::Embedded(env.to_string());
    }

    let environment = std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string());
    let env_file = env_file_for(&environment);

    if dotenv::from_filename(env_file).is_ok() {
        return EnvFileStatus::Loaded(env_file.to_string());
    }

    // 環境固有のファイルがない場合は、デフォルトの.envを試行
    if env_file != ".env" && dotenv::dotenv().is_ok() {
        EnvFileStatus::FallbackLoaded {
            missing: env_file.to_string(),
        }
    } else {
        EnvFileStatus::NotFound(env_file.to_string())
    }
}

/// ログシステムを初期化する
///
/// 二重初期化はエラーにせず無視する。
pub fn initialize_logging_system() {
    let env_config = EnvironmentConfig::from_env();

    let result = env_logger::Builder::from_default_env()
        .filter_level(env_config.level_filter())
        .format_timestamp_secs()
        .format_module_path(false)
        .format_target(false)
        .try_init();

    if result.is_ok() {
        log::info!(
            "ログシステムを初期化しました: level={}, environment={}",
            env_config.log_level,
            env_config.environment
        );
    }
}
