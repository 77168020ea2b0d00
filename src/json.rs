//! Show Protocol adapter for `serde_json` values: arrays render as
//! constant-time-indexed lists, objects as unordered dictionaries, and
//! every other variant as a scalar through the format provider.

use serde_json::{Map, Value};

use crate::render::{show_collection, show_dictionary, CollectionValue, DictionaryValue};
use crate::show::{show_scalar, FormatProvider, Show};

impl DictionaryValue<String, Value> for Map<String, Value> {
    fn entries(&self) -> Box<dyn Iterator<Item = (&String, &Value)> + '_> {
        Box::new(self.iter())
    }

    fn key_ordered(&self) -> bool {
        false
    }
}

impl Show for Value {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        match self {
            Value::Array(items) => {
                show_collection(Some(items as &dyn CollectionValue<Value>), out, rest, provider)
            }
            Value::Object(map) => show_dictionary(map, out, rest, provider),
            scalar => show_scalar(scalar, out, rest, provider),
        }
    }
}
