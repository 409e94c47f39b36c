//! Interactive browser state: selected owner + search text.

use serde::Serialize;

use crate::catalog::{Catalog, EnrichedProduct};
use crate::filter::{OwnerFilter, SearchQuery, any_product_matches, filter_products};

/// One entry of the owner-selection control.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OwnerTab {
    pub label: String,
    pub active: bool,
}

/// Holds the filter state for one browsing session over a [`Catalog`].
///
/// Starts at (`"All"`, `""`). Every setter replaces state synchronously; the
/// visible list is derived on read.
#[derive(Debug, Clone)]
pub struct ProductBrowser {
    catalog: Catalog,
    owner: OwnerFilter,
    query: SearchQuery,
}

impl ProductBrowser {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            owner: OwnerFilter::default(),
            query: SearchQuery::default(),
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    pub fn selected_owner(&self) -> &str {
        self.owner.as_str()
    }

    pub fn search_query(&self) -> &str {
        self.query.as_str()
    }

    pub fn set_owner(&mut self, name: impl Into<String>) {
        let owner = OwnerFilter::new(name);
        if owner == self.owner {
            return;
        }
        self.owner = owner;
        tracing::debug!(owner = self.owner.as_str(), "owner filter changed");
    }

    pub fn set_query(&mut self, text: impl Into<String>) {
        self.query = SearchQuery::new(text);
        tracing::debug!(query = self.query.as_str(), "search query changed");
    }

    /// Clears the search text, leaving the owner selection as is.
    pub fn clear_query(&mut self) {
        self.query = SearchQuery::default();
        tracing::debug!("search query cleared");
    }

    pub fn reset_all(&mut self) {
        self.owner = OwnerFilter::default();
        self.query = SearchQuery::default();
        tracing::debug!("filters reset");
    }

    /// Products passing the current owner and search filters, in catalog order.
    pub fn visible_products(&self) -> Vec<&EnrichedProduct> {
        filter_products(
            self.catalog.products(),
            self.owner.as_str(),
            self.query.as_str(),
        )
    }

    pub fn has_matches(&self) -> bool {
        any_product_matches(
            self.catalog.products(),
            self.owner.as_str(),
            self.query.as_str(),
        )
    }

    /// The `"All"` tab followed by one tab per user, in catalog order.
    pub fn owner_tabs(&self) -> Vec<OwnerTab> {
        let all = OwnerTab {
            label: OwnerFilter::ALL.to_string(),
            active: self.owner.is_all(),
        };

        core::iter::once(all)
            .chain(self.catalog.users().iter().map(|user| OwnerTab {
                label: user.name.clone(),
                active: user.name == self.owner.as_str(),
            }))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::category::Category;
    use crate::product::Product;
    use crate::user::{Sex, User};

    fn browser() -> ProductBrowser {
        let catalog = Catalog::new(
            vec![
                User::new(1, "Roma", Sex::Male),
                User::new(2, "Anna", Sex::Female),
            ],
            vec![
                Category::new(10, "Phones", "📱", 1),
                Category::new(11, "Bags", "👜", 2),
            ],
            vec![
                Product::new(1, "iPhone", 10),
                Product::new(2, "Tote bag", 11),
                Product::new(3, "Bag", 999),
            ],
        );
        ProductBrowser::new(catalog)
    }

    fn visible_ids(browser: &ProductBrowser) -> Vec<u32> {
        browser
            .visible_products()
            .iter()
            .map(|p| p.id().get())
            .collect()
    }

    #[test]
    fn starts_unfiltered() {
        let browser = browser();
        assert_eq!(browser.selected_owner(), "All");
        assert_eq!(browser.search_query(), "");
        assert_eq!(visible_ids(&browser), vec![1, 2, 3]);
    }

    #[test]
    fn set_owner_restricts_rows() {
        let mut browser = browser();
        browser.set_owner("Anna");
        assert_eq!(visible_ids(&browser), vec![2]);
    }

    #[test]
    fn set_owner_twice_is_a_no_op() {
        let mut browser = browser();
        browser.set_owner("Roma");
        let first = visible_ids(&browser);
        browser.set_owner("Roma");
        assert_eq!(visible_ids(&browser), first);
        assert_eq!(browser.selected_owner(), "Roma");
    }

    #[test]
    fn set_query_keeps_raw_text_and_filters() {
        let mut browser = browser();
        browser.set_query(" BAG ");
        assert_eq!(browser.search_query(), " BAG ");
        assert_eq!(visible_ids(&browser), vec![2, 3]);
    }

    #[test]
    fn clear_query_keeps_owner() {
        let mut browser = browser();
        browser.set_owner("Roma");
        browser.set_query("zzz");
        assert!(!browser.has_matches());
        assert!(browser.visible_products().is_empty());

        browser.clear_query();
        assert_eq!(browser.selected_owner(), "Roma");
        assert_eq!(browser.search_query(), "");
        assert_eq!(visible_ids(&browser), vec![1]);
    }

    #[test]
    fn reset_all_restores_defaults() {
        let mut browser = browser();
        browser.set_owner("Anna");
        browser.set_query("tote");
        browser.reset_all();
        assert_eq!(browser.selected_owner(), "All");
        assert_eq!(browser.search_query(), "");
        assert_eq!(visible_ids(&browser), vec![1, 2, 3]);
    }

    #[test]
    fn owner_tabs_mark_the_selection() {
        let mut browser = browser();
        browser.set_owner("Anna");
        let tabs = browser.owner_tabs();
        let labels: Vec<&str> = tabs.iter().map(|t| t.label.as_str()).collect();
        let active: Vec<bool> = tabs.iter().map(|t| t.active).collect();
        assert_eq!(labels, vec!["All", "Roma", "Anna"]);
        assert_eq!(active, vec![false, false, true]);
    }

    #[test]
    fn has_matches_agrees_with_visible_products() {
        let mut browser = browser();
        let states = [("All", ""), ("Roma", "bag"), ("Anna", "TOTE"), ("Nobody", "")];
        for (owner, query) in states {
            browser.set_owner(owner);
            browser.set_query(query);
            assert_eq!(browser.has_matches(), !browser.visible_products().is_empty());
        }
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        #[derive(Debug, Clone)]
        enum Step {
            Owner(String),
            Query(String),
            ClearQuery,
        }

        fn arb_step() -> impl Strategy<Value = Step> {
            let owner = prop_oneof![Just("All"), Just("Roma"), Just("Anna"), Just("Nobody")];
            prop_oneof![
                owner.prop_map(|o| Step::Owner(o.to_string())),
                "[ A-Za-z]{0,5}".prop_map(Step::Query),
                Just(Step::ClearQuery),
            ]
        }

        fn replay(steps: &[Step]) -> ProductBrowser {
            let mut browser = browser();
            for step in steps {
                match step {
                    Step::Owner(name) => browser.set_owner(name.clone()),
                    Step::Query(text) => browser.set_query(text.clone()),
                    Step::ClearQuery => browser.clear_query(),
                }
            }
            browser
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Property: reset_all restores the initial state from anywhere.
            #[test]
            fn reset_all_restores_initial_state(steps in prop::collection::vec(arb_step(), 0..12)) {
                let mut browser = replay(&steps);
                browser.reset_all();

                prop_assert_eq!(browser.selected_owner(), "All");
                prop_assert_eq!(browser.search_query(), "");
                prop_assert_eq!(visible_ids(&browser), vec![1, 2, 3]);
            }

            /// Property: re-selecting the current owner changes nothing visible.
            #[test]
            fn reselecting_current_owner_is_idempotent(
                steps in prop::collection::vec(arb_step(), 0..12),
            ) {
                let mut browser = replay(&steps);
                let before = visible_ids(&browser);
                let current = browser.selected_owner().to_string();

                browser.set_owner(current);
                prop_assert_eq!(visible_ids(&browser), before);
            }

            /// Property: has_matches agrees with the visible list in every state.
            #[test]
            fn has_matches_tracks_visible_products(
                steps in prop::collection::vec(arb_step(), 0..12),
            ) {
                let browser = replay(&steps);
                prop_assert_eq!(browser.has_matches(), !browser.visible_products().is_empty());
            }
        }
    }
}
