use super::store::SqliteStore;
use crate::shared::errors::AppResult;
use rusqlite::Connection;
use std::path::Path;

/// キーバリューストアのテーブル名
pub const STORAGE_TABLE: &str = "local_storage";

/// データベースファイルを開き、キーバリューストアとして初期化する
///
/// # 引数
/// * `database_path` - データベースファイルのパス（存在しない場合は作成される）
///
/// # 戻り値
/// 初期化済みのストア、または失敗時はエラー
pub fn open_store(database_path: &Path) -> AppResult<SqliteStore> {
    let conn = Connection::open(database_path)?;
    create_tables(&conn)?;

    log::debug!("データベースを開きました: {:?}", database_path);

    Ok(SqliteStore::new(conn))
}

/// データベーステーブルを作成する
///
/// # 引数
/// * `conn` - データベース接続
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn create_tables(conn: &Connection) -> AppResult<()> {
    conn.execute(
        "CREATE TABLE IF NOT EXISTS local_storage (
            key TEXT PRIMARY KEY NOT NULL,
            value TEXT NOT NULL,
            updated_at TEXT NOT NULL
        )",
        [],
    )?;

    Ok(())
}
