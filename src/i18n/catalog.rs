//! Message catalogs and dotted-key translation.
//!
//! Each supported locale ships a JSON document of nested namespaces with
//! string leaves (`"footer": { "newsletter": { "title": ... } }`). The
//! documents are embedded at compile time from `locales/` and parsed once at
//! startup, so lookups are plain tree walks over immutable data.
//!
//! Lookup order for a key like `footer.newsletter.title`:
//!
//! 1. the requested locale's catalog,
//! 2. the default (`en`) catalog,
//! 3. the key string itself, verbatim.
//!
//! The chain never fails and never yields an empty string for a real key, so
//! a missing translation renders as its key instead of breaking a page.
//!
//! ## Adding a locale
//!
//! Add the variant in [`Locale`], a `locales/xx.json` document, and arms to
//! the matches in [`Catalogs`]. English stays the canonical superset: new
//! keys land there first and patch the other locales until translated.

use serde::Serialize;
use serde_json::Value;
use std::collections::BTreeMap;

use crate::i18n::Locale;
use crate::metrics::{TRANSLATION_FALLBACKS, TRANSLATION_MISSES};

/// One node of a message catalog: either a translatable string or a
/// namespace of further nodes.
///
/// Keeping the two shapes as enum variants means "this key names a
/// namespace, not a string" is a pattern-match miss rather than a runtime
/// type check. Serializes back to the plain JSON it was read from.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum MessageNode {
    Leaf(String),
    Namespace(BTreeMap<String, MessageNode>),
}

impl MessageNode {
    /// Convert parsed JSON into a catalog node.
    ///
    /// Strings become leaves and objects become namespaces. Everything else
    /// (`null`, numbers, booleans, arrays) has no leaf representation and is
    /// dropped, which turns a later lookup of it into an ordinary miss.
    fn from_value(value: Value) -> Option<MessageNode> {
        match value {
            Value::String(text) => Some(MessageNode::Leaf(text)),
            Value::Object(fields) => {
                let children = fields
                    .into_iter()
                    .filter_map(|(name, child)| {
                        MessageNode::from_value(child).map(|node| (name, node))
                    })
                    .collect();
                Some(MessageNode::Namespace(children))
            }
            _ => None,
        }
    }

    /// Deep-merge `fallback` underneath this node.
    ///
    /// Keys present here win; keys only in `fallback` are copied in. Used to
    /// serve clients a gap-free document per locale while the default
    /// catalog remains the single place new copy is written.
    pub fn merged_with(&self, fallback: &MessageNode) -> MessageNode {
        match (self, fallback) {
            (MessageNode::Namespace(ours), MessageNode::Namespace(theirs)) => {
                let mut children = BTreeMap::new();
                for (name, their_child) in theirs {
                    let node = match ours.get(name) {
                        Some(our_child) => our_child.merged_with(their_child),
                        None => their_child.clone(),
                    };
                    children.insert(name.clone(), node);
                }
                for (name, our_child) in ours {
                    children
                        .entry(name.clone())
                        .or_insert_with(|| our_child.clone());
                }
                MessageNode::Namespace(children)
            }
            // a leaf on our side always wins, even against a namespace
            _ => self.clone(),
        }
    }
}

/// The message catalog of one locale. Immutable once constructed.
pub struct Catalog {
    locale: Locale,
    root: MessageNode,
}

impl Catalog {
    /// Parse a locale's JSON document into a catalog.
    ///
    /// Only malformed JSON is an error; values without a leaf representation
    /// are silently dropped (see [`MessageNode::from_value`]). A non-object
    /// document yields an empty catalog.
    pub fn from_json_str(locale: Locale, raw: &str) -> Result<Catalog, serde_json::Error> {
        let document: Value = serde_json::from_str(raw)?;
        let root = match MessageNode::from_value(document) {
            Some(root @ MessageNode::Namespace(_)) => root,
            // a scalar document has nothing to anchor dotted keys on
            _ => MessageNode::Namespace(BTreeMap::new()),
        };
        Ok(Catalog { locale, root })
    }

    pub fn locale(&self) -> Locale {
        self.locale
    }

    /// Walk a dotted key path to its leaf string.
    ///
    /// Fails (returns `None`) on an empty key, a segment that is absent, a
    /// path that descends through a leaf, or a path that stops on a
    /// namespace instead of a string.
    pub fn lookup(&self, key: &str) -> Option<&str> {
        if key.is_empty() {
            return None;
        }
        let mut node = &self.root;
        for segment in key.split('.') {
            match node {
                MessageNode::Namespace(children) => node = children.get(segment)?,
                MessageNode::Leaf(_) => return None,
            }
        }
        match node {
            MessageNode::Leaf(text) => Some(text.as_str()),
            MessageNode::Namespace(_) => None,
        }
    }
}

/// Resolve `key` against `catalog`, then `fallback_catalog`, then return the
/// key itself.
///
/// Pure and deterministic: same inputs, same answer, no side effects.
pub fn translate<'a>(catalog: &'a Catalog, fallback_catalog: &'a Catalog, key: &'a str) -> &'a str {
    catalog
        .lookup(key)
        .or_else(|| fallback_catalog.lookup(key))
        .unwrap_or(key)
}

/// Every supported locale's catalog, plus precomputed gap-patched trees for
/// the non-default locales. Built once in `main` before the listener starts
/// accepting, then shared read-only.
pub struct Catalogs {
    en: Catalog,
    az: Catalog,
    ru: Catalog,
    merged_az: MessageNode,
    merged_ru: MessageNode,
}

impl Catalogs {
    /// Parse the documents embedded from `locales/`.
    ///
    /// Panics if an embedded document is malformed - that is a build-content
    /// bug, caught by the tests, not a runtime condition.
    pub fn builtin() -> Catalogs {
        let en = Self::parse_builtin(Locale::En, include_str!("../../locales/en.json"));
        let az = Self::parse_builtin(Locale::Az, include_str!("../../locales/az.json"));
        let ru = Self::parse_builtin(Locale::Ru, include_str!("../../locales/ru.json"));
        let merged_az = az.root.merged_with(&en.root);
        let merged_ru = ru.root.merged_with(&en.root);
        Catalogs {
            en,
            az,
            ru,
            merged_az,
            merged_ru,
        }
    }

    fn parse_builtin(locale: Locale, raw: &str) -> Catalog {
        Catalog::from_json_str(locale, raw)
            .unwrap_or_else(|e| panic!("built-in {} catalog does not parse: {}", locale, e))
    }

    pub fn catalog(&self, locale: Locale) -> &Catalog {
        match locale {
            Locale::En => &self.en,
            Locale::Az => &self.az,
            Locale::Ru => &self.ru,
        }
    }

    /// The default locale's catalog - the canonical superset of all keys.
    pub fn fallback(&self) -> &Catalog {
        self.catalog(Locale::default())
    }

    /// The locale's tree with gaps patched from the default catalog.
    pub fn merged(&self, locale: Locale) -> &MessageNode {
        match locale {
            Locale::En => &self.en.root,
            Locale::Az => &self.merged_az,
            Locale::Ru => &self.merged_ru,
        }
    }

    /// Translate `key` for `locale` through the full fallback chain.
    ///
    /// Same contract as [`translate`]; additionally counts fallback hits and
    /// outright misses so untranslated copy shows up in `/metrics` instead
    /// of only as raw keys on a page.
    pub fn translate<'a>(&'a self, locale: Locale, key: &'a str) -> &'a str {
        let catalog = self.catalog(locale);
        let fallback = self.fallback();
        if catalog.lookup(key).is_none() {
            if fallback.lookup(key).is_some() {
                TRANSLATION_FALLBACKS.inc();
            } else {
                TRANSLATION_MISSES.inc();
            }
        }
        translate(catalog, fallback, key)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog(locale: Locale, raw: &str) -> Catalog {
        Catalog::from_json_str(locale, raw).expect("test catalog parses")
    }

    fn az_and_en() -> (Catalog, Catalog) {
        (
            catalog(Locale::Az, r#"{"footer": {"title": "Başlıq"}}"#),
            catalog(
                Locale::En,
                r#"{"footer": {"title": "Title", "subtitle": "Sub"}}"#,
            ),
        )
    }

    #[test]
    fn requested_locale_wins() {
        let (az, en) = az_and_en();
        assert_eq!(translate(&az, &en, "footer.title"), "Başlıq");
    }

    #[test]
    fn missing_key_falls_back_to_default_catalog() {
        let (az, en) = az_and_en();
        assert_eq!(translate(&az, &en, "footer.subtitle"), "Sub");
    }

    #[test]
    fn key_missing_everywhere_is_returned_verbatim() {
        let (az, en) = az_and_en();
        assert_eq!(translate(&az, &en, "footer.missing"), "footer.missing");
    }

    #[test]
    fn namespace_key_is_a_miss_not_a_value() {
        // "a" names a namespace, and its only child is a number that has no
        // leaf representation, so the walk fails at both tiers
        let numbers = catalog(Locale::En, r#"{"a": {"b": 1}}"#);
        let empty = catalog(Locale::En, "{}");
        assert_eq!(translate(&numbers, &empty, "a"), "a");

        let (az, en) = az_and_en();
        assert_eq!(translate(&az, &en, "footer"), "footer");
    }

    #[test]
    fn empty_key_fails_both_tiers() {
        let (az, en) = az_and_en();
        assert_eq!(az.lookup(""), None);
        assert_eq!(translate(&az, &en, ""), "");
    }

    #[test]
    fn descending_through_a_leaf_is_a_miss() {
        let (az, en) = az_and_en();
        assert_eq!(az.lookup("footer.title.extra"), None);
        assert_eq!(
            translate(&az, &en, "footer.title.extra"),
            "footer.title.extra"
        );
    }

    #[test]
    fn null_values_load_as_absent_keys() {
        let sparse = catalog(
            Locale::En,
            r#"{"a": null, "b": {"c": null, "d": "kept"}, "e": [1, 2], "f": true}"#,
        );
        assert_eq!(sparse.lookup("a"), None);
        assert_eq!(sparse.lookup("b.c"), None);
        assert_eq!(sparse.lookup("b.d"), Some("kept"));
        assert_eq!(sparse.lookup("e"), None);
        assert_eq!(sparse.lookup("f"), None);
    }

    #[test]
    fn non_object_document_loads_as_an_empty_catalog() {
        for raw in [r#""just a string""#, "[1, 2]", "3", "true", "null"] {
            let c = catalog(Locale::En, raw);
            assert_eq!(c.root, MessageNode::Namespace(BTreeMap::new()));
            assert_eq!(c.lookup("anything"), None);
        }
    }

    #[test]
    fn translation_is_deterministic() {
        let (az, en) = az_and_en();
        for key in ["footer.title", "footer.subtitle", "footer.missing"] {
            assert_eq!(translate(&az, &en, key), translate(&az, &en, key));
        }
    }

    #[test]
    fn merge_patches_gaps_and_keeps_overrides() {
        let az = catalog(Locale::Az, r#"{"footer": {"title": "Başlıq"}}"#);
        let en = catalog(
            Locale::En,
            r#"{"footer": {"title": "Title", "subtitle": "Sub"}, "nav": {"home": "Home"}}"#,
        );

        let merged = Catalog {
            locale: Locale::Az,
            root: az.root.merged_with(&en.root),
        };
        assert_eq!(merged.lookup("footer.title"), Some("Başlıq"));
        assert_eq!(merged.lookup("footer.subtitle"), Some("Sub"));
        assert_eq!(merged.lookup("nav.home"), Some("Home"));
    }

    #[test]
    fn merge_keeps_locale_leaf_over_fallback_namespace() {
        let az = catalog(Locale::Az, r#"{"x": "düz"}"#);
        let en = catalog(Locale::En, r#"{"x": {"y": "nested"}}"#);

        let merged = Catalog {
            locale: Locale::Az,
            root: az.root.merged_with(&en.root),
        };
        assert_eq!(merged.lookup("x"), Some("düz"));
        assert_eq!(merged.lookup("x.y"), None);
    }

    #[test]
    fn nodes_serialize_back_to_plain_json() {
        let loaded = catalog(Locale::En, r#"{"a": {"b": "text"}, "c": "top"}"#);
        let round_tripped = serde_json::to_value(&loaded.root).expect("serializes");
        assert_eq!(
            round_tripped,
            serde_json::json!({"a": {"b": "text"}, "c": "top"})
        );
    }

    #[test]
    fn builtin_catalogs_parse_and_cover_handler_keys() {
        let catalogs = Catalogs::builtin();
        for key in [
            "contact.form.received",
            "contact.form.receivedNewsletter",
            "contact.form.throttled",
            "contact.form.invalidEmail",
            "contact.form.nameRequired",
            "contact.form.messageRequired",
        ] {
            assert!(
                catalogs.fallback().lookup(key).is_some(),
                "default catalog is missing {key}"
            );
        }
        assert_eq!(catalogs.catalog(Locale::Az).locale(), Locale::Az);
    }

    #[test]
    fn builtin_merged_trees_have_no_gaps_against_default() {
        let catalogs = Catalogs::builtin();
        for locale in [Locale::Az, Locale::Ru] {
            let merged = Catalog {
                locale,
                root: catalogs.merged(locale).clone(),
            };
            for key in ["footer.newsletter.title", "contact.form.received"] {
                assert!(
                    merged.lookup(key).is_some(),
                    "merged {locale} tree is missing {key}"
                );
            }
        }
    }

    #[test]
    fn russian_newsletter_ack_falls_back_to_english() {
        // ru ships without this key on purpose; the chain must serve the
        // English copy rather than the raw key
        let catalogs = Catalogs::builtin();
        let expected = catalogs
            .fallback()
            .lookup("contact.form.receivedNewsletter")
            .expect("default catalog has the key");
        assert_eq!(
            catalogs.translate(Locale::Ru, "contact.form.receivedNewsletter"),
            expected
        );
    }
}
