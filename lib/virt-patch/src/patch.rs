// This Source Code Form is subject to the terms of the Mozilla Public
// License, v. 2.0. If a copy of the MPL was not distributed with this
// file, You can obtain one at https://mozilla.org/MPL/2.0/.

//! Whole-list patch construction.
//!
//! Every edit to a document collection is expressed as one operation that
//! replaces the entire list at a single path, never as element-level
//! add/remove operations at individual indices. One operation per path keeps
//! each intermediate document state consistent and sidesteps index shifting
//! across the multiple paths patched in one batch.

use serde::Serialize;
use thiserror::Error;

/// Errors that can arise while finalizing a patch operation.
#[derive(Debug, Error)]
pub enum PatchError {
    #[error("the value for the patch at {0} was not serializable: {1}")]
    ValueNotSerializable(String, serde_json::Error),

    #[error("the patch at {0} was finalized before a list edit was chosen")]
    NoListEdit(String),
}

/// A single patch operation: the complete replacement value for the list at
/// `path`, a root-relative `/`-delimited pointer into the document.
///
/// Targets that require true RFC 6902 operations get the `op` field from the
/// transport layer; this core models whole-list replacement only.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct PatchOperation {
    pub path: String,
    pub value: serde_json::Value,
}

/// Accumulates one list edit against a single document path, then finalizes
/// it into a [`PatchOperation`]. The two edit modes are mutually exclusive;
/// the last one chosen wins.
pub struct PatchBuilder<'a, T> {
    path: &'a str,
    value: Option<Vec<T>>,
}

impl<'a, T: Clone + Serialize> PatchBuilder<'a, T> {
    pub fn new(path: &'a str) -> Self {
        Self { path, value: None }
    }

    /// Splices out the first element of `items` matching `matches`. When
    /// nothing matches, the resulting value equals `items`: removing an
    /// absent element is a no-op, not an error.
    pub fn list_remove<F>(mut self, items: &[T], matches: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let mut next = items.to_vec();
        if let Some(index) = items.iter().position(|item| matches(item)) {
            next.remove(index);
        }
        self.value = Some(next);
        self
    }

    /// Replaces the first element of `items` matching `matches` with
    /// `element`, or appends `element` when nothing matches: updating an
    /// absent element is an insert.
    pub fn list_upsert<F>(mut self, element: T, items: &[T], matches: F) -> Self
    where
        F: Fn(&T) -> bool,
    {
        let mut next = items.to_vec();
        match next.iter().position(|item| matches(item)) {
            Some(index) => next[index] = element,
            None => next.push(element),
        }
        self.value = Some(next);
        self
    }

    /// Finalizes into the operation that replaces the whole list at this
    /// builder's path.
    pub fn build(self) -> Result<PatchOperation, PatchError> {
        let value = self
            .value
            .ok_or_else(|| PatchError::NoListEdit(self.path.to_string()))?;

        Ok(PatchOperation {
            path: self.path.to_string(),
            value: serde_json::to_value(value).map_err(|e| {
                PatchError::ValueNotSerializable(self.path.to_string(), e)
            })?,
        })
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn remove_splices_out_the_first_match() {
        let items =
            vec!["a".to_string(), "b".to_string(), "b".to_string()];
        let patch = PatchBuilder::new("/spec/list")
            .list_remove(&items, |item| item.as_str() == "b")
            .build()
            .unwrap();

        assert_eq!(patch.path, "/spec/list");
        assert_eq!(patch.value, serde_json::json!(["a", "b"]));
    }

    #[test]
    fn upsert_replaces_in_place() {
        let items = vec!["a".to_string(), "b".to_string(), "c".to_string()];
        let patch = PatchBuilder::new("/spec/list")
            .list_upsert("B".to_string(), &items, |item| {
                item.as_str() == "b"
            })
            .build()
            .unwrap();

        assert_eq!(patch.value, serde_json::json!(["a", "B", "c"]));
    }

    #[test]
    fn upsert_appends_when_nothing_matches() {
        let items = vec!["a".to_string()];
        let patch = PatchBuilder::new("/spec/list")
            .list_upsert("b".to_string(), &items, |item| {
                item.as_str() == "z"
            })
            .build()
            .unwrap();

        assert_eq!(patch.value, serde_json::json!(["a", "b"]));
    }

    #[test]
    fn upsert_into_an_empty_list_appends() {
        let patch = PatchBuilder::new("/spec/list")
            .list_upsert("a".to_string(), &[], |_| false)
            .build()
            .unwrap();

        assert_eq!(patch.value, serde_json::json!(["a"]));
    }

    #[test]
    fn building_without_an_edit_fails() {
        let builder: PatchBuilder<String> = PatchBuilder::new("/spec/list");
        assert!(matches!(builder.build(), Err(PatchError::NoListEdit(_))));
    }

    proptest! {
        #[test]
        fn removing_an_absent_element_leaves_the_list_unchanged(
            items in proptest::collection::vec("[a-z]{1,8}", 0..8)
        ) {
            // The generated names cannot contain a hyphen, so this predicate
            // never matches.
            let patch = PatchBuilder::new("/spec/list")
                .list_remove(&items, |item| item.as_str() == "no-such-name")
                .build()
                .unwrap();

            prop_assert_eq!(
                patch.value,
                serde_json::to_value(&items).unwrap()
            );
        }

        #[test]
        fn upsert_grows_the_list_by_at_most_one(
            items in proptest::collection::vec("[a-z]{1,8}", 0..8),
            element in "[a-z-]{1,8}",
        ) {
            let patch = PatchBuilder::new("/spec/list")
                .list_upsert(element.clone(), &items, |item| *item == element)
                .build()
                .unwrap();

            let next: Vec<String> =
                serde_json::from_value(patch.value).unwrap();
            let expected = if items.contains(&element) {
                items.len()
            } else {
                items.len() + 1
            };
            prop_assert_eq!(next.len(), expected);
        }
    }
}
