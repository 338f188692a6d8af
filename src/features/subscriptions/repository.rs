use super::models::Subscription;
use crate::shared::database::KeyValueStore;
use crate::shared::errors::AppResult;

/// サブスクリプション一覧の保存キー
pub const STORAGE_KEY: &str = "subscriblytics-data";

/// 保存済みのサブスクリプション一覧を読み込む
///
/// # 引数
/// * `store` - キーバリューストア
///
/// # 戻り値
/// サブスクリプションのリスト
///
/// # エラー時の動作
/// 読み込みや解析に失敗した場合はエラーにせず、ログを出力して空のリストを返す。
pub fn find_all(store: &dyn KeyValueStore) -> Vec<Subscription> {
    let raw = match store.get_item(STORAGE_KEY) {
        Ok(Some(raw)) => raw,
        Ok(None) => return Vec::new(),
        Err(e) => {
            log::error!("サブスクリプションの読み込みに失敗しました: {e}");
            return Vec::new();
        }
    };

    match serde_json::from_str::<Vec<Subscription>>(&raw) {
        Ok(subscriptions) => {
            log::debug!("サブスクリプションを読み込みました: {}件", subscriptions.len());
            subscriptions
        }
        Err(e) => {
            log::warn!("保存データが破損しているため空の一覧で開始します: {e}");
            Vec::new()
        }
    }
}

/// サブスクリプション一覧を保存する
///
/// # 引数
/// * `store` - キーバリューストア
/// * `subscriptions` - 保存するサブスクリプションのリスト
///
/// # 戻り値
/// 成功時はOk(())、失敗時はエラー
pub fn save_all(store: &dyn KeyValueStore, subscriptions: &[Subscription]) -> AppResult<()> {
    let raw = serde_json::to_string(subscriptions)?;
    store.set_item(STORAGE_KEY, &raw).map_err(|e| {
        log::error!("サブスクリプションの保存に失敗しました: {e}");
        e
    })?;

    log::debug!("サブスクリプションを保存しました: {}件", subscriptions.len());
    Ok(())
}
