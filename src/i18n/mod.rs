//! Localization for the website copy.
//!
//! The site is published in English, Azerbaijani and Russian. English is the
//! default locale and the canonical superset of keys: the other catalogs may
//! trail behind it, and lookups degrade through English down to the raw key
//! rather than ever failing.

mod catalog;
mod locale;

pub use catalog::{Catalog, Catalogs, MessageNode, translate};
pub use locale::Locale;
