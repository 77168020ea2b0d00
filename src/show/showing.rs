use std::fmt;

use tracing::trace;

use crate::directive::{self, DirectiveError};
use crate::show::traits::{FormatProvider, Show};

/// Guarded dispatch into a value's [`Show`] implementation.
///
/// This is the universal short-circuit protecting every recursive call: with
/// no budget left, nothing is appended and the render is reported truncated.
pub fn show<T: Show + ?Sized>(
    value: &T,
    out: &mut String,
    rest: &mut i64,
    provider: &dyn FormatProvider,
) -> bool {
    if *rest <= 0 {
        return false;
    }
    value.show(out, rest, provider)
}

/// Fallback rendering for plain scalars: format the whole value through the
/// provider, append it, and charge the budget for exactly the characters
/// appended.
///
/// A scalar is never truncated mid-token; only the decision to include it at
/// all is governed by the budget, so this always reports complete once the
/// entry guard has passed. The budget may go negative by up to the scalar's
/// own length.
pub fn show_scalar<T: fmt::Display + ?Sized>(
    value: &T,
    out: &mut String,
    rest: &mut i64,
    provider: &dyn FormatProvider,
) -> bool {
    if *rest <= 0 {
        return false;
    }
    let formatted = provider.format_value(&value);
    *rest -= formatted.chars().count() as i64;
    out.push_str(&formatted);
    true
}

macro_rules! impl_show_as_scalar {
    ($($ty:ty),* $(,)?) => {
        $(
            impl Show for $ty {
                fn show(&self, out: &mut String, rest: &mut i64, provider: &dyn FormatProvider) -> bool {
                    show_scalar(self, out, rest, provider)
                }
            }
        )*
    };
}

impl_show_as_scalar!(
    bool, char, str, String, i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize, f32,
    f64
);

/// Render `value` into a fresh string under the budget named by `format`.
///
/// The directive is parsed once per call: absent means the default cap of 80
/// characters, `"L<n>"` means `n`, and any other directive opts out of the
/// cap. Truncation is signaled only by an embedded `"..."` marker in the
/// returned string, never by a separate flag.
///
/// The top-level call is deliberately unguarded so that a collection's
/// framing delimiters always appear, even under a zero budget.
pub fn render_bounded<T: Show + ?Sized>(
    value: &T,
    format: Option<&str>,
    provider: &dyn FormatProvider,
) -> Result<String, DirectiveError> {
    let mut rest = directive::max_length(format)?;
    trace!(budget = rest, "render start");

    let mut out = String::new();
    let complete = value.show(&mut out, &mut rest, provider);
    trace!(complete, remaining = rest, "render finished");

    Ok(out)
}
