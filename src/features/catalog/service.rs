use super::data::CATALOG;
use super::models::{CatalogEntry, CatalogSort, Pricing, ResolvedPlan};
use crate::shared::errors::{AppError, AppResult};
use once_cell::sync::Lazy;
use std::cmp::Ordering;
use std::collections::BTreeSet;

static CATEGORIES: Lazy<Vec<&'static str>> = Lazy::new(|| {
    CATALOG
        .iter()
        .map(|entry| entry.category)
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
});

/// カタログ全件を返す
pub fn all_entries() -> &'static [CatalogEntry] {
    CATALOG
}

/// カテゴリ一覧を昇順・重複なしで返す
pub fn categories() -> &'static [&'static str] {
    &CATEGORIES
}

/// サービス名（大文字小文字を区別しない）でカタログを検索する
pub fn find_entry(name: &str) -> Option<&'static CatalogEntry> {
    let needle = name.trim().to_lowercase();
    CATALOG
        .iter()
        .find(|entry| entry.name.to_lowercase() == needle)
}

/// キーワードとカテゴリでカタログを絞り込む
///
/// # 引数
/// * `query` - サービス名またはカテゴリ名に含まれる文字列（空の場合はすべて一致）
/// * `category` - カテゴリの完全一致フィルター（Noneまたは空の場合は絞り込みなし）
pub fn search(query: &str, category: Option<&str>) -> Vec<&'static CatalogEntry> {
    let query = query.trim().to_lowercase();
    let category = category.filter(|c| !c.is_empty());

    CATALOG
        .iter()
        .filter(|entry| {
            let matches_search = query.is_empty()
                || entry.name.to_lowercase().contains(&query)
                || entry.category.to_lowercase().contains(&query);
            let matches_category = category.map_or(true, |c| entry.category == c);
            matches_search && matches_category
        })
        .collect()
}

/// 検索結果を並び替える
pub fn sort_entries(entries: &mut [&'static CatalogEntry], sort_by: CatalogSort) {
    let by_name = |a: &CatalogEntry, b: &CatalogEntry| a.name.to_lowercase().cmp(&b.name.to_lowercase());
    let by_price = |a: &CatalogEntry, b: &CatalogEntry| {
        a.min_cost()
            .partial_cmp(&b.min_cost())
            .unwrap_or(Ordering::Equal)
    };

    match sort_by {
        CatalogSort::Name => entries.sort_by(|a, b| by_name(*a, *b)),
        CatalogSort::PriceLow => entries.sort_by(|a, b| by_price(*a, *b)),
        CatalogSort::PriceHigh => entries.sort_by(|a, b| by_price(*b, *a)),
        CatalogSort::Category => entries.sort_by(|a, b| {
            a.category
                .cmp(b.category)
                .then_with(|| by_name(*a, *b))
        }),
    }
}

/// カタログのサービスとプランから登録内容を決定する
///
/// # 引数
/// * `name` - サービス名
/// * `tier` - プラン名（複数プランのサービスで省略した場合は先頭のプラン）
///
/// # 戻り値
/// 解決されたプラン、またはサービス・プランが見つからない場合はエラー
pub fn resolve(name: &str, tier: Option<&str>) -> AppResult<ResolvedPlan> {
    let entry = find_entry(name)
        .ok_or_else(|| AppError::not_found(format!("カタログのサービス「{}」", name.trim())))?;

    match entry.pricing {
        Pricing::Single { cost } => {
            if let Some(tier) = tier {
                log::debug!("単一料金のサービスのためプラン指定を無視します: {tier}");
            }
            Ok(ResolvedPlan {
                display_name: entry.name.to_string(),
                category: entry.category,
                cost,
            })
        }
        Pricing::Tiered { tiers } => {
            let plan = match tier {
                Some(wanted) => tiers
                    .iter()
                    .find(|t| t.tier.eq_ignore_ascii_case(wanted.trim()))
                    .ok_or_else(|| {
                        let available: Vec<&str> = tiers.iter().map(|t| t.tier).collect();
                        AppError::validation(format!(
                            "{}のプラン「{}」は存在しません（{}）",
                            entry.name,
                            wanted.trim(),
                            available.join(" / ")
                        ))
                    })?,
                None => tiers.first().ok_or_else(|| {
                    AppError::validation(format!("{}にはプランが登録されていません", entry.name))
                })?,
            };

            Ok(ResolvedPlan {
                display_name: format!("{} ({})", entry.name, plan.tier),
                category: entry.category,
                cost: plan.cost,
            })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_categories_are_sorted_and_unique() {
        let categories = categories();
        let mut sorted = categories.to_vec();
        sorted.sort();
        sorted.dedup();
        assert_eq!(categories.to_vec(), sorted);
        assert!(categories.contains(&"Streaming"));
        assert!(categories.contains(&"Music"));
    }

    #[test]
    fn test_search_by_name_and_category() {
        // サービス名の部分一致（大文字小文字を区別しない）
        let results = search("netFLIX", None);
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "Netflix");

        // カテゴリ名でもヒットする
        let music = search("music", None);
        assert!(music.iter().any(|e| e.name == "Spotify"));

        // カテゴリフィルター
        let streaming = search("", Some("Streaming"));
        assert!(!streaming.is_empty());
        assert!(streaming.iter().all(|e| e.category == "Streaming"));

        // キーワードとカテゴリの組み合わせ
        let none = search("spotify", Some("Gaming"));
        assert!(none.is_empty());

        // 空のカテゴリ指定は絞り込みなし
        assert_eq!(search("", Some("")).len(), all_entries().len());
    }

    #[test]
    fn test_sort_entries() {
        let mut entries = search("", Some("Streaming"));

        sort_entries(&mut entries, CatalogSort::PriceLow);
        assert!(entries
            .windows(2)
            .all(|w| w[0].min_cost() <= w[1].min_cost()));

        sort_entries(&mut entries, CatalogSort::PriceHigh);
        assert!(entries
            .windows(2)
            .all(|w| w[0].min_cost() >= w[1].min_cost()));

        sort_entries(&mut entries, CatalogSort::Name);
        assert!(entries
            .windows(2)
            .all(|w| w[0].name.to_lowercase() <= w[1].name.to_lowercase()));

        let mut all = search("", None);
        sort_entries(&mut all, CatalogSort::Category);
        assert!(all.windows(2).all(|w| w[0].category <= w[1].category));
    }

    #[test]
    fn test_resolve_single_price() {
        let plan = resolve("disney+", None).unwrap();
        assert_eq!(plan.display_name, "Disney+");
        assert_eq!(plan.cost, 13.99);
        assert_eq!(plan.category, "Streaming");
    }

    #[test]
    fn test_resolve_tiered_price() {
        let plan = resolve("Netflix", Some("standard")).unwrap();
        assert_eq!(plan.display_name, "Netflix (Standard)");
        assert_eq!(plan.cost, 15.49);

        // プラン省略時は先頭のプラン
        let default_plan = resolve("Netflix", None).unwrap();
        assert_eq!(default_plan.display_name, "Netflix (Basic)");
        assert_eq!(default_plan.cost, 9.99);
    }

    #[test]
    fn test_resolve_errors() {
        let missing = resolve("Unknown Service", None);
        assert!(matches!(missing, Err(AppError::NotFound(_))));

        let bad_tier = resolve("Netflix", Some("Ultra"));
        match bad_tier {
            Err(AppError::Validation(msg)) => assert!(msg.contains("Basic / Standard / Premium")),
            other => panic!("unexpected result: {other:?}"),
        }
    }
}
