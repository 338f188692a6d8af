/// データベース接続とテーブル作成
pub mod connection;

/// キーバリューストア
pub mod store;

pub use connection::{create_tables, open_store};
pub use store::{KeyValueStore, MemoryStore, SqliteStore};
