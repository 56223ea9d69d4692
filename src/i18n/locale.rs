use std::fmt;

/// Languages the website is published in.
///
/// Each variant maps to a lowercase ISO 639-1 code used as the URL path
/// prefix (`/az/...`). The set is closed: route handlers resolve whatever
/// arrives in the path down to one of these, so the rest of the service
/// never deals with free-form locale strings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Locale {
    En,
    Az,
    Ru,
}

impl Locale {
    /// ISO 639-1 two-letter code for this locale.
    pub fn code(&self) -> &'static str {
        match self {
            Locale::En => "en",
            Locale::Az => "az",
            Locale::Ru => "ru",
        }
    }

    /// Parse a lowercase ISO 639-1 code into a supported locale.
    ///
    /// Exact match only - no case folding, no region tags. Anything the
    /// site is not published in returns `None`.
    pub fn from_code(code: &str) -> Option<Locale> {
        match code {
            "en" => Some(Locale::En),
            "az" => Some(Locale::Az),
            "ru" => Some(Locale::Ru),
            _ => None,
        }
    }

    /// All supported locales, in display order.
    pub fn all() -> &'static [Locale] {
        &[Locale::En, Locale::Az, Locale::Ru]
    }

    /// Constrain a request's locale hint to the supported set.
    ///
    /// A hint that names a supported locale passes through unchanged; a
    /// missing or unsupported hint falls back to the default. Always
    /// succeeds.
    pub fn resolve(hint: Option<&str>) -> Locale {
        hint.and_then(Locale::from_code).unwrap_or_default()
    }
}

impl Default for Locale {
    fn default() -> Self {
        Locale::En
    }
}

impl fmt::Display for Locale {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.code())
    }
}
