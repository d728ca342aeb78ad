//! Intent disambiguation and fuzzy item matching for inventory requests.
//!
//! Given a free-text utterance plus an optional structured slot value, the
//! resolver decides whether the user wants the whole inventory listed or
//! one specific item, and for specific requests maps a fuzzy reference
//! (catalog code, display name, synonym, or known typo) to exactly one
//! catalog entry - or declares it unresolved.
//!
//! The resolution is pure and deterministic: the same inputs always yield
//! the same [`Resolution`].

mod terms;

use parcelbot_core::{CatalogMap, InventoryItem};
use tracing::debug;

pub use terms::{CatalogTerms, TermsError};

/// Outcome of resolving one inventory request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// General request: list every catalog entry, in stored order.
    ListAll(Vec<InventoryItem>),
    /// General request against an empty catalog.
    NoData,
    /// No search term could be determined - the user's target is unknown.
    NoSearchTerm,
    /// A single catalog entry matched.
    Found {
        item: InventoryItem,
        in_stock: bool,
    },
    /// A search term was identified but nothing in the catalog matched.
    NoMatch { term: String },
}

/// Resolves inventory requests against a catalog using a fixed vocabulary.
#[derive(Debug, Clone, Default)]
pub struct ItemResolver {
    terms: CatalogTerms,
}

impl ItemResolver {
    /// Create a resolver over the given vocabulary.
    #[must_use]
    pub const fn new(terms: CatalogTerms) -> Self {
        Self { terms }
    }

    /// The vocabulary in use.
    #[must_use]
    pub const fn terms(&self) -> &CatalogTerms {
        &self.terms
    }

    /// Resolve a request.
    ///
    /// `hint` is the slot value extracted by the external orchestrator and
    /// is authoritative when present: it always wins over anything derived
    /// from the utterance text. A blank or whitespace-only hint counts as
    /// absent, falling through to the utterance scan. The utterance is
    /// matched lowercased and trimmed.
    ///
    /// A general listing is produced only when there is no hint, no item
    /// mention in the text, and the text contains one of the fixed general
    /// phrases - a specific mention suppresses general phrasing.
    #[must_use]
    pub fn resolve(
        &self,
        hint: Option<&str>,
        utterance: &str,
        catalog: &CatalogMap,
    ) -> Resolution {
        let text = utterance.trim().to_lowercase();
        let hint = hint.map(str::trim).filter(|h| !h.is_empty());

        let has_item_mention = self.first_mentioned_token(&text).is_some();

        let is_general_request = hint.is_none()
            && !has_item_mention
            && (self.terms.general_phrases.iter().any(|p| p == &text)
                || self.terms.general_phrases.iter().any(|p| text.contains(p.as_str())));

        if is_general_request {
            if catalog.is_empty() {
                return Resolution::NoData;
            }
            return Resolution::ListAll(catalog.values().cloned().collect());
        }

        let search_term = match hint {
            Some(value) => Some(value.to_lowercase()),
            None => self.first_mentioned_token(&text).map(str::to_string),
        };

        let Some(term) = search_term else {
            debug!("no search term could be determined");
            return Resolution::NoSearchTerm;
        };

        match self.find_match(&term, catalog) {
            Some(item) => {
                let in_stock = item.in_stock();
                Resolution::Found {
                    item: item.clone(),
                    in_stock,
                }
            }
            None => Resolution::NoMatch { term },
        }
    }

    /// First alias or code token contained in the lowercased text,
    /// scanning aliases before codes, each in listed order.
    fn first_mentioned_token(&self, text: &str) -> Option<&str> {
        self.terms
            .item_aliases
            .iter()
            .chain(&self.terms.item_codes)
            .map(String::as_str)
            .find(|token| text.contains(token))
    }

    /// Match a search term against the catalog.
    ///
    /// Precedence, first hit wins, each tier scanned in stored catalog
    /// order: exact `item_id`, exact `display_name`, alias redirect
    /// (term -> exact display name), then substring within either field.
    /// Ties within a tier fall to the first entry encountered.
    fn find_match<'c>(&self, term: &str, catalog: &'c CatalogMap) -> Option<&'c InventoryItem> {
        if let Some(item) = catalog
            .values()
            .find(|item| item.item_id.to_lowercase() == term)
        {
            return Some(item);
        }

        if let Some(item) = catalog
            .values()
            .find(|item| item.display_name.to_lowercase() == term)
        {
            return Some(item);
        }

        if let Some(target) = self.terms.alias_targets.get(term)
            && let Some(item) = catalog
                .values()
                .find(|item| item.display_name.to_lowercase() == *target)
        {
            return Some(item);
        }

        catalog.values().find(|item| {
            item.display_name.to_lowercase().contains(term)
                || item.item_id.to_lowercase().contains(term)
        })
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn item(id: &str, name: &str, quantity: u32, cents: i64) -> InventoryItem {
        InventoryItem {
            item_id: id.to_string(),
            display_name: name.to_string(),
            quantity,
            price: Decimal::new(cents, 2),
        }
    }

    fn sample_catalog() -> CatalogMap {
        let mut catalog = CatalogMap::new();
        for entry in [
            item("item1", "Mobile", 12, 19999),
            item("item2", "Laptop", 0, 89900),
            item("item3", "Watch", 7, 4950),
            item("item4", "Charger", 5, 1250),
            item("item5", "Ear-Phone", 3, 2999),
        ] {
            catalog.insert(entry.item_id.clone(), entry);
        }
        catalog
    }

    fn resolver() -> ItemResolver {
        ItemResolver::default()
    }

    #[test]
    fn general_phrase_lists_all_items_in_stored_order() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(None, "check stock", &catalog);

        let Resolution::ListAll(items) = resolution else {
            panic!("expected ListAll, got {resolution:?}");
        };
        let names: Vec<_> = items.iter().map(|i| i.display_name.as_str()).collect();
        assert_eq!(names, ["Mobile", "Laptop", "Watch", "Charger", "Ear-Phone"]);
    }

    #[test]
    fn general_phrase_by_containment() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(None, "hey, what items are available today?", &catalog);
        assert!(matches!(resolution, Resolution::ListAll(_)));
    }

    #[test]
    fn known_typo_still_reads_as_general() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(None, "cheeck stock", &catalog);
        assert!(matches!(resolution, Resolution::ListAll(_)));
    }

    #[test]
    fn empty_catalog_general_request_yields_no_data() {
        let resolution = resolver().resolve(None, "check stock", &CatalogMap::new());
        assert_eq!(resolution, Resolution::NoData);
    }

    #[test]
    fn item_mention_suppresses_general_phrasing() {
        // Both a general phrase and a specific mention: specific wins.
        let catalog = sample_catalog();
        let resolution = resolver().resolve(None, "check stock on the charger", &catalog);

        let Resolution::Found { item, in_stock } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.item_id, "item4");
        assert!(in_stock);
    }

    #[test]
    fn hint_suppresses_general_phrasing() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(Some("item3"), "check stock", &catalog);
        assert!(matches!(resolution, Resolution::Found { .. }));
    }

    #[test]
    fn hint_wins_over_text_mention() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(Some("item2"), "do you have a charger", &catalog);

        let Resolution::Found { item, .. } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.item_id, "item2");
    }

    #[test]
    fn free_text_mention_resolves_charger_in_stock() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(None, "do you have a charger", &catalog);

        let Resolution::Found { item, in_stock } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.display_name, "Charger");
        assert_eq!(item.quantity, 5);
        assert!(in_stock);
    }

    #[test]
    fn zero_quantity_resolves_as_out_of_stock() {
        let mut catalog = CatalogMap::new();
        catalog.insert("item1".to_string(), item("item1", "Mobile", 0, 19999));

        let resolution = resolver().resolve(Some("mobile"), "", &catalog);
        let Resolution::Found { item, in_stock } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert!(!in_stock);
        assert_eq!(item.price, Decimal::new(19999, 2));
    }

    #[test]
    fn exact_item_id_beats_substring_in_display_name() {
        let mut catalog = CatalogMap::new();
        // Entry whose display name contains "x" comes first in stored
        // order, but exact item_id match must still win.
        catalog.insert("item8".to_string(), item("item8", "Xylophone", 2, 500));
        catalog.insert("x".to_string(), item("x", "Mystery Box", 1, 100));

        let resolution = resolver().resolve(Some("x"), "", &catalog);
        let Resolution::Found { item, .. } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.item_id, "x");
    }

    #[test]
    fn exact_display_name_beats_substring() {
        let mut catalog = CatalogMap::new();
        catalog.insert("item1".to_string(), item("item1", "Watchband", 4, 900));
        catalog.insert("item2".to_string(), item("item2", "Watch", 7, 4950));

        let resolution = resolver().resolve(Some("watch"), "", &catalog);
        let Resolution::Found { item, .. } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.item_id, "item2");
    }

    #[test]
    fn phone_redirects_to_mobile() {
        // No entry's id or name contains "phone" here.
        let mut catalog = CatalogMap::new();
        catalog.insert("item1".to_string(), item("item1", "Mobile", 12, 19999));
        catalog.insert("item2".to_string(), item("item2", "Laptop", 1, 89900));

        let resolution = resolver().resolve(Some("phone"), "", &catalog);
        let Resolution::Found { item, .. } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.display_name, "Mobile");
    }

    #[test]
    fn ties_within_a_tier_take_first_stored_entry() {
        let mut catalog = CatalogMap::new();
        catalog.insert("item1".to_string(), item("item1", "Charger Cable", 2, 700));
        catalog.insert("item2".to_string(), item("item2", "Car Charger", 9, 1500));

        let resolution = resolver().resolve(Some("charger"), "", &catalog);
        let Resolution::Found { item, .. } = resolution else {
            panic!("expected Found, got {resolution:?}");
        };
        assert_eq!(item.item_id, "item1");
    }

    #[test]
    fn blank_hint_falls_through_to_utterance_scan() {
        let catalog = sample_catalog();
        for hint in ["", "   "] {
            let resolution = resolver().resolve(Some(hint), "do you have a charger", &catalog);
            let Resolution::Found { item, .. } = resolution else {
                panic!("expected Found for hint {hint:?}, got {resolution:?}");
            };
            assert_eq!(item.item_id, "item4");
        }
    }

    #[test]
    fn blank_hint_counts_as_absent_for_general_phrasing() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(Some("  "), "check stock", &catalog);
        assert!(matches!(resolution, Resolution::ListAll(_)));
    }

    #[test]
    fn blank_hint_with_no_mention_still_has_no_term() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(Some(""), "hmmm", &catalog);
        assert_eq!(resolution, Resolution::NoSearchTerm);
    }

    #[test]
    fn unmatched_term_echoes_back() {
        let catalog = sample_catalog();
        let resolution = resolver().resolve(Some("Toaster"), "", &catalog);
        assert_eq!(
            resolution,
            Resolution::NoMatch {
                term: "toaster".to_string()
            }
        );
    }

    #[test]
    fn unlisted_typo_of_general_phrase_fails_to_resolve() {
        // "invnetory" is not in the phrase list and mentions no item, so
        // the request falls through to specific resolution with no term.
        let catalog = sample_catalog();
        let resolution = resolver().resolve(None, "invnetory", &catalog);
        assert_eq!(resolution, Resolution::NoSearchTerm);
    }

    #[test]
    fn resolution_is_idempotent() {
        let catalog = sample_catalog();
        let first = resolver().resolve(None, "do you have a charger", &catalog);
        let second = resolver().resolve(None, "do you have a charger", &catalog);
        assert_eq!(first, second);
    }
}
