use tracing::trace;

/// Capability surface a list/set/bag-like collection exposes to the
/// renderer. The renderer only ever iterates and classifies; it never
/// mutates the collection.
pub trait CollectionValue<T> {
    /// Iterate the elements in the collection's own order.
    fn items(&self) -> Box<dyn Iterator<Item = &T> + '_>;

    /// Lazy (distinct element, count) pairs for collections that track
    /// duplicates by counting. Only consulted when
    /// [`duplicates_by_counting`](Self::duplicates_by_counting) is true.
    fn multiplicities(&self) -> Box<dyn Iterator<Item = (&T, usize)> + '_> {
        Box::new(self.items().map(|item| (item, 1)))
    }

    /// Whether the collection admits duplicate elements at all.
    fn allows_duplicates(&self) -> bool;

    /// Whether duplicates are tracked via an explicit per-element count
    /// rather than by storing repeated entries.
    fn duplicates_by_counting(&self) -> bool;

    /// Whether positional access by index is constant-time.
    fn constant_time_indexing(&self) -> bool;
}

/// Capability surface a dictionary exposes to the renderer.
pub trait DictionaryValue<K, V> {
    /// Iterate the entries in the dictionary's own order.
    fn entries(&self) -> Box<dyn Iterator<Item = (&K, &V)> + '_>;

    /// Whether iteration is ordered by key.
    fn key_ordered(&self) -> bool;
}

/// Structural classification driving delimiter and modifier choice.
///
/// Computed fresh from the capability flags on every render call; never
/// cached on the collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// Constant-time positional access: `[ ]` framing with `n:` prefixes.
    IndexedList,
    /// Duplicates tracked by count: `{{ }}` framing with `(*n)` suffixes.
    CountedBag,
    /// Duplicates stored by repetition: `{{ }}` framing.
    Bag,
    /// No duplicates: `{ }` framing.
    Set,
}

impl Shape {
    pub fn classify<T>(coll: &dyn CollectionValue<T>) -> Self {
        let shape = if coll.constant_time_indexing() {
            Shape::IndexedList
        } else if coll.allows_duplicates() {
            if coll.duplicates_by_counting() {
                Shape::CountedBag
            } else {
                Shape::Bag
            }
        } else {
            Shape::Set
        };
        trace!(?shape, "classified collection");
        shape
    }

    pub fn open(self) -> &'static str {
        match self {
            Shape::IndexedList => "[ ",
            Shape::CountedBag | Shape::Bag => "{{ ",
            Shape::Set => "{ ",
        }
    }

    pub fn close(self) -> &'static str {
        match self {
            Shape::IndexedList => " ]",
            Shape::CountedBag | Shape::Bag => " }}",
            Shape::Set => " }",
        }
    }

    /// Whether elements carry a zero-based `n:` position prefix.
    pub fn show_indices(self) -> bool {
        matches!(self, Shape::IndexedList)
    }

    /// Whether elements are rendered as (element, count) pairs.
    pub fn show_multiplicities(self) -> bool {
        matches!(self, Shape::CountedBag)
    }
}
