// SPDX-License-Identifier: PMPL-1.0-or-later
// Copyright (c) 2026 Jonathan D.A. Jewell (hyperpolymath) <jonathan.jewell@open.ac.uk>
//
// Substring name filter for collection views.

use opsdeck_core::CollectionItem;

/// Substring filter over item display names.
///
/// The term comes from configuration rather than being baked into a view;
/// an empty term keeps every item.  Matching is case-sensitive unless
/// `case_insensitive` is set.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct NameFilter {
    term: String,
    term_folded: String,
    case_insensitive: bool,
}

impl NameFilter {
    pub fn new(term: impl Into<String>, case_insensitive: bool) -> Self {
        let term = term.into();
        let term_folded = term.to_lowercase();
        Self {
            term,
            term_folded,
            case_insensitive,
        }
    }

    /// The configured term.
    pub fn term(&self) -> &str {
        &self.term
    }

    /// Whether a single display name passes the filter.
    pub fn matches(&self, name: &str) -> bool {
        if self.case_insensitive {
            name.to_lowercase().contains(&self.term_folded)
        } else {
            name.contains(&self.term)
        }
    }

    /// Keep the ordered subsequence of `items` whose display name passes.
    pub fn apply<T: CollectionItem + Clone>(&self, items: &[T]) -> Vec<T> {
        items
            .iter()
            .filter(|item| self.matches(item.display_name()))
            .cloned()
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    use opsdeck_core::types::{Service, ServiceId};

    fn service(id: u64, name: &str) -> Service {
        Service {
            id: ServiceId(id),
            name: name.into(),
            health: Default::default(),
            description: None,
            updated_at: None,
        }
    }

    #[test]
    fn keeps_only_matching_names() {
        let items = vec![service(1, "Voxco Support"), service(2, "Acme Billing")];
        let filter = NameFilter::new("Voxco", false);
        let kept = filter.apply(&items);
        assert_eq!(kept.len(), 1);
        assert_eq!(kept[0].id, ServiceId(1));
    }

    #[test]
    fn preserves_input_order() {
        let items = vec![
            service(3, "Voxco Billing"),
            service(1, "Acme"),
            service(2, "Voxco Support"),
        ];
        let kept = NameFilter::new("Voxco", false).apply(&items);
        let ids: Vec<u64> = kept.iter().map(|s| s.id.0).collect();
        assert_eq!(ids, vec![3, 2]);
    }

    #[test]
    fn is_idempotent() {
        let items = vec![
            service(1, "Voxco Support"),
            service(2, "Acme Billing"),
            service(3, "Voxco CRM"),
        ];
        let filter = NameFilter::new("Voxco", false);
        let once = filter.apply(&items);
        let twice = filter.apply(&once);
        assert_eq!(once, twice);
    }

    #[test]
    fn empty_term_keeps_everything() {
        let items = vec![service(1, "anything"), service(2, "at all")];
        let kept = NameFilter::new("", false).apply(&items);
        assert_eq!(kept, items);
    }

    #[test]
    fn empty_input_gives_empty_output() {
        let filter = NameFilter::new("Voxco", false);
        assert!(filter.apply(&Vec::<Service>::new()).is_empty());
    }

    #[test]
    fn no_match_gives_empty_output() {
        let items = vec![service(1, "Acme Billing")];
        assert!(NameFilter::new("Voxco", false).apply(&items).is_empty());
    }

    #[test]
    fn matching_is_case_sensitive_by_default() {
        let filter = NameFilter::new("Voxco", false);
        assert!(filter.matches("Voxco Support"));
        assert!(!filter.matches("voxco support"));
    }

    #[test]
    fn case_insensitive_mode_folds_both_sides() {
        let filter = NameFilter::new("VOXCO", true);
        assert!(filter.matches("voxco support"));
        assert!(filter.matches("Voxco Support"));
        assert!(!filter.matches("Acme Billing"));
    }
}
