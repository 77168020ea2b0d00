//! # showbound
//!
//! Bounded-width, composable text rendering for arbitrarily nested container
//! values. Any value (scalar, user type, or collection) can be rendered
//! into a human-readable string under a caller-supplied character budget,
//! truncating between elements (never mid-token) and recursing correctly
//! into nested collections.
//!
//! The two halves are the Show Protocol ([`Show`], [`show`], [`show_scalar`])
//! and the Collection Renderer ([`show_collection`], [`show_dictionary`]),
//! which classifies a collection's [`Shape`] from capability flags and picks
//! delimiters, index prefixes, and multiplicity suffixes accordingly.
//!
//! ```
//! use showbound::{render_bounded, DefaultProvider};
//!
//! let rendered = render_bounded(&vec![1, 2, 3], None, &DefaultProvider).unwrap();
//! assert_eq!(rendered, "[ 0:1, 1:2, 2:3 ]");
//!
//! let clipped = render_bounded(&vec![10, 20, 30, 40], Some("L8"), &DefaultProvider).unwrap();
//! assert!(clipped.contains("..."));
//! ```

pub mod directive;
pub mod json;
pub mod render;
pub mod show;
pub mod views;


pub use directive::{max_length, DirectiveError, DEFAULT_MAX_LENGTH};
pub use render::{show_collection, show_dictionary, CollectionValue, DictionaryValue, Entry, Shape};
pub use show::{render_bounded, show, show_scalar, DefaultProvider, FormatProvider, Show};
pub use views::{CountedBag, SequenceView};
