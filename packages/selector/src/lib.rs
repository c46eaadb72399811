//! # Selector composition
//!
//! Builds CSS selector strings one fragment at a time, in the fixed order
//! element -> id -> class -> attribute -> pseudo-class -> pseudo-element.
//! An append that breaks the order, or repeats a singular fragment (element,
//! id, pseudo-element), fails at the offending call. Built selectors join
//! into compound expressions with [`combine`].
//!
//! ```rust,ignore
//! use stylekit_selector::{combine, element, id, ToCss};
//!
//! let link = element("a").class("icon")?.pseudo_class("hover")?;
//! let panel = id("panel");
//! let compound = combine(&panel, ">", &link);
//! assert_eq!(compound.to_css(), "#panel > a.icon:hover");
//! ```

pub mod builder;
pub mod combinator;
pub mod combined;
pub mod error;
pub mod fragment;
pub mod specificity;

#[cfg(test)]
mod tests_builder;


pub use builder::{attr, class, element, id, pseudo_class, pseudo_element};
pub use builder::{Selector, ToCss};
pub use combinator::Combinator;
pub use combined::{combine, CombinedSelector};
pub use error::{SelectorError, SelectorResult};
pub use fragment::FragmentKind;
pub use specificity::Specificity;
