use crate::shared::errors::{AppError, AppResult};
use chrono::Utc;
use rusqlite::{params, Connection, OptionalExtension};
use std::collections::HashMap;
use std::sync::Mutex;

/// 文字列キーと文字列値を保存するストレージの抽象
///
/// ブラウザのlocalStorageと同等の操作のみを提供する。
pub trait KeyValueStore {
    /// 値を取得する（キーが存在しない場合はNone）
    fn get_item(&self, key: &str) -> AppResult<Option<String>>;

    /// 値を保存する（既存の値は上書き）
    fn set_item(&self, key: &str, value: &str) -> AppResult<()>;

    /// 値を削除する（キーが存在しない場合も成功）
    fn remove_item(&self, key: &str) -> AppResult<()>;

    /// 複数の値をまとめて保存する
    ///
    /// 途中で失敗した場合は、それまでに書き込んだキーを元の値に戻してからエラーを返す。
    fn set_items(&self, items: &[(&str, &str)]) -> AppResult<()> {
        let mut previous: Vec<(&str, Option<String>)> = Vec::with_capacity(items.len());

        for &(key, value) in items {
            let before = match self.get_item(key) {
                Ok(before) => before,
                Err(e) => {
                    restore_items(self, &previous);
                    return Err(e);
                }
            };
            if let Err(e) = self.set_item(key, value) {
                restore_items(self, &previous);
                return Err(e);
            }
            previous.push((key, before));
        }
        Ok(())
    }
}

/// 書き込み済みのキーを元の値に戻す（新規キーは削除）
fn restore_items<S: KeyValueStore + ?Sized>(store: &S, previous: &[(&str, Option<String>)]) {
    for (key, before) in previous.iter().rev() {
        let result = match before {
            Some(value) => store.set_item(key, value),
            None => store.remove_item(key),
        };
        if let Err(e) = result {
            log::error!("キー {key} の復元に失敗しました: {e}");
        }
    }
}

const UPSERT_SQL: &str = "INSERT INTO local_storage (key, value, updated_at) VALUES (?1, ?2, ?3)
     ON CONFLICT(key) DO UPDATE SET value = excluded.value, updated_at = excluded.updated_at";

/// SQLiteの`local_storage`テーブルを使用するストア
pub struct SqliteStore {
    conn: Mutex<Connection>,
}

impl SqliteStore {
    /// テーブル作成済みの接続からストアを作成する
    pub fn new(conn: Connection) -> Self {
        Self {
            conn: Mutex::new(conn),
        }
    }

    /// インメモリデータベースを使用するストアを作成する
    pub fn open_in_memory() -> AppResult<Self> {
        let conn = Connection::open_in_memory()?;
        super::connection::create_tables(&conn)?;
        Ok(Self::new(conn))
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, Connection>> {
        self.conn
            .lock()
            .map_err(|e| AppError::Database(format!("データベースロックエラー: {e}")))
    }
}

impl KeyValueStore for SqliteStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        let conn = self.lock()?;
        let value = conn
            .query_row(
                "SELECT value FROM local_storage WHERE key = ?1",
                params![key],
                |row| row.get::<_, String>(0),
            )
            .optional()?;
        Ok(value)
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        let conn = self.lock()?;
        conn.execute(UPSERT_SQL, params![key, value, now])?;
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        let conn = self.lock()?;
        conn.execute("DELETE FROM local_storage WHERE key = ?1", params![key])?;
        Ok(())
    }

    // 1トランザクションで書き込む
    fn set_items(&self, items: &[(&str, &str)]) -> AppResult<()> {
        let now = Utc::now().to_rfc3339();
        let mut conn = self.lock()?;
        let tx = conn.transaction()?;
        for &(key, value) in items {
            tx.execute(UPSERT_SQL, params![key, value, now])?;
        }
        tx.commit()?;
        Ok(())
    }
}

/// プロセス内メモリのみを使用するストア
#[derive(Default)]
pub struct MemoryStore {
    items: Mutex<HashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> AppResult<std::sync::MutexGuard<'_, HashMap<String, String>>> {
        self.items
            .lock()
            .map_err(|e| AppError::Database(format!("ストアロックエラー: {e}")))
    }
}

impl KeyValueStore for MemoryStore {
    fn get_item(&self, key: &str) -> AppResult<Option<String>> {
        Ok(self.lock()?.get(key).cloned())
    }

    fn set_item(&self, key: &str, value: &str) -> AppResult<()> {
        self.lock()?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&self, key: &str) -> AppResult<()> {
        self.lock()?.remove(key);
        Ok(())
    }

    fn set_items(&self, items: &[(&str, &str)]) -> AppResult<()> {
        let mut map = self.lock()?;
        for &(key, value) in items {
            map.insert(key.to_string(), value.to_string());
        }
        Ok(())
    }
}
