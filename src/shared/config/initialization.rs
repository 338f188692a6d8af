use super::environment::{get_database_filename, get_environment, Environment};
use crate::shared::database::open_store;
use crate::shared::errors::{AppError, AppResult};
use std::fs;
use std::path::{Path, PathBuf};

/// データディレクトリ名（OS標準のデータディレクトリ配下）
pub const APP_DIR_NAME: &str = "subscription-value";

/// アプリケーション初期化の結果を表す構造体
#[derive(Debug)]
pub struct InitializationResult {
    /// 初回起動かどうか
    pub is_first_run: bool,
    /// アプリケーションデータディレクトリのパス
    pub app_data_dir: PathBuf,
    /// データベースファイルのパス
    pub database_path: PathBuf,
    /// 実行環境
    pub environment: Environment,
}

/// アプリケーションの初期化を実行する
///
/// # 引数
/// * `data_dir_override` - データディレクトリの明示指定（`--data-dir` / `DATA_DIR`）
///
/// # 戻り値
/// 初期化結果、または失敗時はエラー
///
/// # 処理内容
/// 1. アプリケーションデータディレクトリの作成
/// 2. 初回起動の判定
/// 3. データベースファイルの初期化
pub fn initialize_application(data_dir_override: Option<&Path>) -> AppResult<InitializationResult> {
    let environment = get_environment();

    let app_data_dir = ensure_app_data_directory(data_dir_override)?;

    let db_filename = get_database_filename(environment.clone());
    let database_path = app_data_dir.join(db_filename);

    // 初回起動かどうかを判定（データベースファイルの存在で判定）
    let is_first_run = !database_path.exists();

    if is_first_run {
        log_first_run_initialization(&environment, &app_data_dir, &database_path);
    }

    initialize_database_file(&database_path)?;

    Ok(InitializationResult {
        is_first_run,
        app_data_dir,
        database_path,
        environment,
    })
}

/// アプリケーションデータディレクトリのパスを決定する
///
/// 明示指定がない場合は `dirs::data_dir()` 配下を使用する。
fn resolve_app_data_dir(data_dir_override: Option<&Path>) -> AppResult<PathBuf> {
    if let Some(dir) = data_dir_override {
        return Ok(dir.to_path_buf());
    }

    dirs::data_dir()
        .map(|dir| dir.join(APP_DIR_NAME))
        .ok_or_else(|| AppError::configuration("アプリデータディレクトリの取得に失敗しました"))
}

/// アプリケーションデータディレクトリを確実に作成する
fn ensure_app_data_directory(data_dir_override: Option<&Path>) -> AppResult<PathBuf> {
    let app_data_dir = resolve_app_data_dir(data_dir_override)?;

    if !app_data_dir.exists() {
        fs::create_dir_all(&app_data_dir).map_err(|e| {
            AppError::configuration(format!("アプリデータディレクトリの作成に失敗しました: {e}"))
        })?;

        log::info!(
            "アプリケーションデータディレクトリを作成しました: {:?}",
            app_data_dir
        );
    }

    Ok(app_data_dir)
}

/// データベースファイルを初期化する
///
/// ファイルが存在しない場合は作成し、テーブルを用意する。
fn initialize_database_file(database_path: &Path) -> AppResult<()> {
    open_store(database_path)?;
    log::debug!("データベースファイルを初期化しました: {:?}", database_path);
    Ok(())
}

fn log_first_run_initialization(environment: &Environment, app_data_dir: &Path, database_path: &Path) {
    log::info!("=== アプリケーション初回起動 ===");
    log::info!("実行環境: {:?}", environment);
    log::info!("アプリデータディレクトリ: {:?}", app_data_dir);
    log::info!("データベースファイル: {:?}", database_path);
}

/// 初期化完了ログを出力する
pub fn log_initialization_complete(result: &InitializationResult) {
    if result.is_first_run {
        log::info!("初回起動の初期化が正常に完了しました");
    } else {
        log::debug!("アプリケーション起動完了（既存データベースを使用）");
    }
    log::debug!("環境: {:?}", result.environment);
    log::debug!("データベース: {:?}", result.database_path);
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_initialize_database_file() {
        let temp_dir = TempDir::new().unwrap();
        let db_path = temp_dir.path().join("test.db");

        let result = initialize_database_file(&db_path);

        assert!(result.is_ok());
        assert!(db_path.exists());
    }

    #[test]
    fn test_initialize_application_with_override() {
        let temp_dir = TempDir::new().unwrap();
        let data_dir = temp_dir.path().join("nested").join("data");

        let first = initialize_application(Some(&data_dir)).unwrap();
        assert!(first.is_first_run);
        assert_eq!(first.app_data_dir, data_dir);
        assert!(first.database_path.exists());

        // 2回目はデータベースが存在するため初回起動ではない
        let second = initialize_application(Some(&data_dir)).unwrap();
        assert!(!second.is_first_run);
        assert_eq!(second.database_path, first.database_path);
    }

    #[test]
    fn test_resolve_app_data_dir_prefers_override() {
        let dir = PathBuf::from("/tmp/explicit");
        assert_eq!(resolve_app_data_dir(Some(&dir)).unwrap(), dir);
    }
}
