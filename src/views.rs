//! Ready-made capability-trait implementations over std collections, plus
//! two configurable views for shapes std has no direct analogue of.

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::render::{show_collection, show_dictionary, CollectionValue, DictionaryValue};
use crate::show::{FormatProvider, Show};

impl<T> CollectionValue<T> for Vec<T> {
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn allows_duplicates(&self) -> bool {
        true
    }

    fn duplicates_by_counting(&self) -> bool {
        false
    }

    fn constant_time_indexing(&self) -> bool {
        true
    }
}

impl<T: Show> Show for Vec<T> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_collection(Some(self as &dyn CollectionValue<T>), out, rest, provider)
    }
}

impl<T> CollectionValue<T> for HashSet<T> {
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn allows_duplicates(&self) -> bool {
        false
    }

    fn duplicates_by_counting(&self) -> bool {
        false
    }

    fn constant_time_indexing(&self) -> bool {
        false
    }
}

impl<T: Show> Show for HashSet<T> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_collection(Some(self as &dyn CollectionValue<T>), out, rest, provider)
    }
}

impl<T> CollectionValue<T> for BTreeSet<T> {
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }

    fn allows_duplicates(&self) -> bool {
        false
    }

    fn duplicates_by_counting(&self) -> bool {
        false
    }

    fn constant_time_indexing(&self) -> bool {
        false
    }
}

impl<T: Show> Show for BTreeSet<T> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_collection(Some(self as &dyn CollectionValue<T>), out, rest, provider)
    }
}

impl<K, V> DictionaryValue<K, V> for HashMap<K, V> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }

    fn key_ordered(&self) -> bool {
        false
    }
}

impl<K: Show, V: Show> Show for HashMap<K, V> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_dictionary(self, out, rest, provider)
    }
}

impl<K, V> DictionaryValue<K, V> for BTreeMap<K, V> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_> {
        Box::new(self.iter())
    }

    fn key_ordered(&self) -> bool {
        true
    }
}

impl<K: Show, V: Show> Show for BTreeMap<K, V> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_dictionary(self, out, rest, provider)
    }
}

/// Positional view over a slice whose indexing speed the caller declares.
///
/// A linked-list style sequence iterates the same elements but reports
/// linear positional access, so it renders without index prefixes.
pub struct SequenceView<'a, T> {
    items: &'a [T],
    indexed: bool,
}

impl<'a, T> SequenceView<'a, T> {
    /// View with constant-time positional access.
    pub fn indexed(items: &'a [T]) -> Self {
        Self {
            items,
            indexed: true,
        }
    }

    /// View with linear positional access.
    pub fn linked(items: &'a [T]) -> Self {
        Self {
            items,
            indexed: false,
        }
    }
}

impl<T> CollectionValue<T> for SequenceView<'_, T> {
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.items.iter())
    }

    fn allows_duplicates(&self) -> bool {
        false
    }

    fn duplicates_by_counting(&self) -> bool {
        false
    }

    fn constant_time_indexing(&self) -> bool {
        self.indexed
    }
}

impl<T: Show> Show for SequenceView<'_, T> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_collection(Some(self as &dyn CollectionValue<T>), out, rest, provider)
    }
}

/// Duplicate-permitting view over (element, count) pairs.
///
/// [`CountedBag::new`] tracks duplicates by counting, so elements render
/// once with a `(*n)` suffix; [`CountedBag::spread`] stores the same
/// multiset by repetition, so each occurrence renders separately.
pub struct CountedBag<'a, T> {
    pairs: &'a [(T, usize)],
    by_counting: bool,
}

impl<'a, T> CountedBag<'a, T> {
    pub fn new(pairs: &'a [(T, usize)]) -> Self {
        Self {
            pairs,
            by_counting: true,
        }
    }

    pub fn spread(pairs: &'a [(T, usize)]) -> Self {
        Self {
            pairs,
            by_counting: false,
        }
    }
}

impl<T> CollectionValue<T> for CountedBag<'_, T> {
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(
            self.pairs
                .iter()
                .flat_map(|(item, count)| std::iter::repeat(item).take(*count)),
        )
    }

    fn multiplicities(&self) -> Box<dyn Iterator<Item = (&T, usize)> + '_> {
        Box::new(self.pairs.iter().map(|(item, count)| (item, *count)))
    }

    fn allows_duplicates(&self) -> bool {
        true
    }

    fn duplicates_by_counting(&self) -> bool {
        self.by_counting
    }

    fn constant_time_indexing(&self) -> bool {
        false
    }
}

impl<T: Show> Show for CountedBag<'_, T> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        show_collection(Some(self as &dyn CollectionValue<T>), out, rest, provider)
    }
}
