/// 環境設定関連のモジュール
pub mod environment;

/// アプリケーション初期化処理
pub mod initialization;

// 便利な再エクスポート
pub use environment::{
    get_database_filename, get_environment, initialize_logging_system, load_environment_variables,
    EnvFileStatus, Environment, EnvironmentConfig, RatesApiConfig,
};
pub use initialization::{initialize_application, log_initialization_complete, InitializationResult};
