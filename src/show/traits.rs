use std::fmt;

/// Budget-aware self-rendering capability.
///
/// Implementors append their textual form to `out`, using at most
/// approximately `rest` characters, and subtract the number of characters
/// actually appended from `rest`. The return value reports whether the
/// rendering was complete (not truncated).
///
/// `rest` is shared by reference through the whole call tree of one render
/// and may go negative; a value at or below zero means "nothing more fits".
/// Nested values must be rendered through [`crate::show::show`], which
/// applies that short-circuit before dispatching.
pub trait Show {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool;
}

// Borrowed values render as the value they point at.
impl<'a, T: Show + ?Sized> Show for &'a T {
    fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
        (**self).show(out, rest, provider)
    }
}

/// Seam for locale-sensitive scalar formatting.
///
/// The core never interprets the provider; it is forwarded unchanged to the
/// scalar fallback, which asks it to turn a `Display` value into text.
pub trait FormatProvider {
    fn format_value(&self, value: &dyn fmt::Display) -> String;
}

/// Formats values with their plain `Display` output.
#[derive(Debug, Default, Clone, Copy)]
pub struct DefaultProvider;

impl FormatProvider for DefaultProvider {
    fn format_value(&self, value: &dyn fmt::Display) -> String {
        value.to_string()
    }
}
