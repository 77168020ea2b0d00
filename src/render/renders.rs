use crate::render::shape::{CollectionValue, DictionaryValue, Shape};
use crate::show::{show, FormatProvider, Show};

const SEPARATOR: &str = ", ";
const ELLIPSIS: &str = "...";

/// Render a list/set/bag-like collection under the shared budget.
///
/// The shape is classified once from the collection's capability flags and
/// fixes the framing delimiters, whether elements carry `n:` index prefixes,
/// and whether (element, count) pairs are rendered instead of raw elements.
///
/// Both delimiters are charged up front so that element truncation decisions
/// already account for the closing frame; the delimiters themselves are
/// always appended in full to keep the output structurally well-formed. An
/// absent collection renders nothing and reports complete.
pub fn show_collection<T: Show>(
    items: Option<&dyn CollectionValue<T>>,
    out: &mut String,
    rest: &mut i64,
    provider: &dyn FormatProvider,
) -> bool {
    let Some(coll) = items else {
        return true;
    };
    let shape = Shape::classify(coll);

    out.push_str(shape.open());
    *rest -= (shape.open().len() + shape.close().len()) as i64;

    let mut first = true;
    let mut complete = true;

    if shape.show_multiplicities() {
        for (key, count) in coll.multiplicities() {
            complete = false;
            if *rest <= 0 {
                break;
            }
            if first {
                first = false;
            } else {
                out.push_str(SEPARATOR);
                *rest -= SEPARATOR.len() as i64;
            }
            complete = show(key, out, rest, provider);
            if complete {
                // Tagging a truncated key with its count would mislead, so
                // the suffix only follows a completely rendered key.
                let suffix = format!("(*{})", count);
                *rest -= suffix.len() as i64;
                out.push_str(&suffix);
            }
        }
    } else {
        for (index, item) in coll.items().enumerate() {
            complete = false;
            if *rest <= 0 {
                break;
            }
            if first {
                first = false;
            } else {
                out.push_str(SEPARATOR);
                *rest -= SEPARATOR.len() as i64;
            }
            if shape.show_indices() {
                let prefix = format!("{}:", index);
                *rest -= prefix.len() as i64;
                out.push_str(&prefix);
            }
            complete = show(item, out, rest, provider);
        }
    }

    finish(out, rest, complete, first, shape.close());
    complete
}

/// Render a dictionary under the shared budget.
///
/// Key-ordered dictionaries frame with `[ ]`, unordered ones with `{ }`.
/// Each entry is rendered as one composite value through [`Entry`], so
/// truncation inside a key or value is accounted for exactly like any other
/// nested render.
pub fn show_dictionary<K: Show, V: Show>(
    dictionary: &dyn DictionaryValue<K, V>,
    out: &mut String,
    rest: &mut i64,
    provider: &dyn FormatProvider,
) -> bool {
    let (open, close) = if dictionary.key_ordered() {
        ("[ ", " ]")
    } else {
        ("{ ", " }")
    };

    out.push_str(open);
    *rest -= (open.len() + close.len()) as i64;

    let mut first = true;
    let mut complete = true;

    for (key, value) in dictionary.entries() {
        complete = false;
        if *rest <= 0 {
            break;
        }
        if first {
            first = false;
        } else {
            out.push_str(SEPARATOR);
            *rest -= SEPARATOR.len() as i64;
        }
        complete = show(&Entry { key, value }, out, rest, provider);
    }

    finish(out, rest, complete, first, close);
    complete
}

// Shared tail of both renderers: the single ellipsis marker for the whole
// collection, then the closing delimiter. An empty collection collapses to
// one interior space between the delimiters.
fn finish(out: &mut String, rest: &mut i64, complete: bool, first: bool, close: &str) {
    if !complete {
        out.push_str(ELLIPSIS);
        *rest -= ELLIPSIS.len() as i64;
    }
    if first && complete {
        out.push_str(close.trim_start());
    } else {
        out.push_str(close);
    }
}

/// A key/value pairing rendered as one composite value: key, `" => "`,
/// value, each part budget-aware. A truncated key suppresses the arrow and
/// the value.
pub struct Entry<'a, K, V> {
    pub key: &'a K,
    pub value: &'a V,
}

impl<K: Show, V: Show> Show for Entry<'_, K, V> {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        if !show(self.key, out, rest, provider) {
            return false;
        }
        out.push_str(" => ");
        *rest -= 4;
        show(self.value, out, rest, provider)
    }
}
