//! 表示設定（テーマ）モジュール
use crate::shared::database::KeyValueStore;
use crate::shared::errors::{AppError, AppResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// テーマの保存キー
pub const THEME_KEY: &str = "subscriblytics-theme";

/// 表示テーマ
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Theme {
    #[default]
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(&self) -> &'static str {
        match self {
            Theme::Light => "light",
            Theme::Dark => "dark",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_lowercase().as_str() {
            "light" => Some(Theme::Light),
            "dark" => Some(Theme::Dark),
            _ => None,
        }
    }

    pub fn toggled(&self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// 保存済みのテーマを読み込む（未保存・不正値・読み込み失敗の場合はライト）
pub fn load_theme(store: &dyn KeyValueStore) -> Theme {
    match store.get_item(THEME_KEY) {
        Ok(Some(raw)) => Theme::parse(&raw).unwrap_or_else(|| {
            log::warn!("保存されたテーマが不正です: {raw}");
            Theme::default()
        }),
        Ok(None) => Theme::default(),
        Err(e) => {
            log::error!("テーマ設定の読み込みに失敗しました: {e}");
            Theme::default()
        }
    }
}

/// テーマを保存する
pub fn save_theme(store: &dyn KeyValueStore, theme: Theme) -> AppResult<()> {
    store.set_item(THEME_KEY, theme.as_str())?;
    log::info!("テーマを変更しました: {theme}");
    Ok(())
}

/// 入力値からテーマを解釈する
pub fn parse_theme(value: &str) -> AppResult<Theme> {
    Theme::parse(value).ok_or_else(|| {
        AppError::validation(format!(
            "テーマは'light'または'dark'である必要があります: {value}"
        ))
    })
}
