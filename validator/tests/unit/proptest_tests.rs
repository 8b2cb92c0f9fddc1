//! Property-based tests using proptest

use std::collections::HashSet;

use bank_validator::registry::filter_providers;
use bank_validator_common::types::Provider;
use proptest::prelude::*;

fn providers_from(names: &[String]) -> Vec<Provider> {
    names
        .iter()
        .map(|n| {
            let url = format!("https://{}.example/validate", n);
            Provider::new(n.as_str(), url.parse().unwrap())
        })
        .collect()
}

fn unique_names() -> impl Strategy<Value = Vec<String>> {
    prop::collection::hash_set("[a-z][a-z0-9]{0,7}", 0..10)
        .prop_map(|set| set.into_iter().collect::<Vec<_>>())
}

proptest! {
    /// 全プロバイダー名で絞り込むと元の一覧と一致する
    #[test]
    fn filter_by_all_names_is_identity(names in unique_names()) {
        let all = providers_from(&names);
        prop_assert_eq!(filter_providers(&all, Some(&names)), all);
    }

    /// フィルタ省略時は常に全件
    #[test]
    fn filter_none_returns_everything(names in unique_names()) {
        let all = providers_from(&names);
        prop_assert_eq!(filter_providers(&all, None), all);
    }

    /// 結果は設定順の部分列で、指定名のみを含み、重複しない
    #[test]
    fn filter_is_ordered_subset(
        names in unique_names(),
        requested in prop::collection::vec("[a-z][a-z0-9]{0,7}", 0..12),
    ) {
        let all = providers_from(&names);
        let result = filter_providers(&all, Some(&requested));

        let requested_set: HashSet<&str> = requested.iter().map(String::as_str).collect();
        let expected: Vec<Provider> = all
            .iter()
            .filter(|p| requested_set.contains(p.name.as_str()))
            .cloned()
            .collect();
        prop_assert_eq!(&result, &expected);

        let unique: HashSet<&str> = result.iter().map(|p| p.name.as_str()).collect();
        prop_assert_eq!(unique.len(), result.len());
    }

    /// 同じフィルタを二度適用しても結果は変わらない
    #[test]
    fn filter_is_idempotent(
        names in unique_names(),
        requested in prop::collection::vec("[a-z][a-z0-9]{0,7}", 0..12),
    ) {
        let all = providers_from(&names);
        let once = filter_providers(&all, Some(&requested));
        let twice = filter_providers(&once, Some(&requested));
        prop_assert_eq!(once, twice);
    }

    /// 空フィルタは常に空
    #[test]
    fn empty_filter_returns_nothing(names in unique_names()) {
        let all = providers_from(&names);
        prop_assert!(filter_providers(&all, Some(&[])).is_empty());
    }
}
