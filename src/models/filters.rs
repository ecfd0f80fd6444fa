//! Filter state for the list page, mirrored to and from the URL.
//!
//! `FilterState` is the single source of truth for `{query, type filters,
//! sort key, page}`. It serializes to URL query parameters (`q`, `types`,
//! `sort`, `page`; defaults omitted) and parses back losslessly, so
//! back/forward navigation re-derives the exact same state.
//!
//! Every mutator that changes the result set (`with_query`, sorting, type
//! toggles) resets the page to 1: the old page position is meaningless in a
//! new result set. Only `with_page` preserves the rest of the state.

// =============================================================================
// Sort Key
// =============================================================================

/// Available orderings for the list page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SortKey {
    /// Ascending numeric id (default, omitted from the URL).
    #[default]
    Number,
    /// Name, A → Z.
    Name,
    /// Name, Z → A.
    NameDesc,
    /// Favorites only, insertion order preserved.
    Favorites,
}

impl SortKey {
    /// URL parameter value for this key.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Number => "number",
            Self::Name => "name",
            Self::NameDesc => "name-desc",
            Self::Favorites => "favorites",
        }
    }

    /// Parse a URL parameter value; unknown values fall back to the default.
    pub fn parse(value: &str) -> Self {
        match value {
            "name" => Self::Name,
            "name-desc" => Self::NameDesc,
            "favorites" => Self::Favorites,
            _ => Self::Number,
        }
    }
}

// =============================================================================
// Filter State
// =============================================================================

/// Complete filter/sort/pagination state of the list page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct FilterState {
    /// Search query, matched as a case-insensitive substring of names.
    pub query: String,
    /// Selected type categories; an entity must belong to all of them.
    pub type_filters: Vec<String>,
    /// Active sort key.
    pub sort: SortKey,
    /// Current page, 1-based. Invariant: `page >= 1`.
    pub page: u32,
}

impl Default for FilterState {
    fn default() -> Self {
        Self {
            query: String::new(),
            type_filters: Vec::new(),
            sort: SortKey::default(),
            page: 1,
        }
    }
}

impl FilterState {
    /// Serialize to a URL query string (no leading `?`).
    ///
    /// Parameters at their default value are omitted, which makes the
    /// serialized form canonical: `deserialize(serialize(s)) == s`.
    pub fn to_query_string(&self) -> String {
        let mut params: Vec<String> = Vec::new();

        let query = self.query.trim();
        if !query.is_empty() {
            params.push(format!("q={}", encode_component(query)));
        }
        if !self.type_filters.is_empty() {
            let joined = self
                .type_filters
                .iter()
                .map(|t| encode_component(t))
                .collect::<Vec<_>>()
                .join(",");
            params.push(format!("types={}", joined));
        }
        if self.sort != SortKey::Number {
            params.push(format!("sort={}", self.sort.as_str()));
        }
        if self.page > 1 {
            params.push(format!("page={}", self.page));
        }

        params.join("&")
    }

    /// Parse from a URL query string (with or without leading `?`).
    ///
    /// Missing or malformed parameters fall back to defaults; a page below 1
    /// is clamped to 1.
    pub fn from_query_string(raw: &str) -> Self {
        let mut state = Self::default();

        for pair in raw.trim_start_matches('?').split('&') {
            let (key, value) = match pair.split_once('=') {
                Some(kv) => kv,
                None => continue,
            };
            match key {
                "q" => state.query = decode_component(value),
                "types" => {
                    state.type_filters = value
                        .split(',')
                        .filter(|t| !t.is_empty())
                        .map(decode_component)
                        .collect();
                }
                "sort" => state.sort = SortKey::parse(&decode_component(value)),
                "page" => state.page = decode_component(value).parse().unwrap_or(1).max(1),
                _ => {}
            }
        }

        state
    }

    // =========================================================================
    // Mutators
    // =========================================================================

    /// New state with a different search query. Resets the page.
    pub fn with_query(&self, query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
            page: 1,
            ..self.clone()
        }
    }

    /// New state with a different sort key. Resets the page.
    pub fn with_sort(&self, sort: SortKey) -> Self {
        Self {
            sort,
            page: 1,
            ..self.clone()
        }
    }

    /// New state with the given type filter toggled on or off. Resets the page.
    pub fn with_type_toggled(&self, type_name: &str) -> Self {
        let mut type_filters = self.type_filters.clone();
        if let Some(pos) = type_filters.iter().position(|t| t == type_name) {
            type_filters.remove(pos);
        } else {
            type_filters.push(type_name.to_string());
        }
        Self {
            type_filters,
            page: 1,
            ..self.clone()
        }
    }

    /// New state with all type filters cleared. Resets the page.
    pub fn without_type_filters(&self) -> Self {
        Self {
            type_filters: Vec::new(),
            page: 1,
            ..self.clone()
        }
    }

    /// New state on a different page. Pages below 1 are clamped.
    pub fn with_page(&self, page: u32) -> Self {
        Self {
            page: page.max(1),
            ..self.clone()
        }
    }

    /// Whether the given type filter is active.
    pub fn has_type(&self, type_name: &str) -> bool {
        self.type_filters.iter().any(|t| t == type_name)
    }
}

// =============================================================================
// Percent Encoding
// =============================================================================

/// Percent-encode a query component. Unreserved characters (RFC 3986) pass
/// through; everything else is emitted as `%XX` per UTF-8 byte.
fn encode_component(raw: &str) -> String {
    let mut out = String::with_capacity(raw.len());
    for byte in raw.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}

/// Decode a percent-encoded query component. Invalid escapes are kept
/// verbatim rather than dropped.
fn decode_component(raw: &str) -> String {
    let bytes = raw.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;
    while i < bytes.len() {
        if bytes[i] == b'%' {
            if let (Some(hi), Some(lo)) = (
                bytes.get(i + 1).and_then(|b| (*b as char).to_digit(16)),
                bytes.get(i + 2).and_then(|b| (*b as char).to_digit(16)),
            ) {
                out.push((hi * 16 + lo) as u8);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }
    String::from_utf8(out).unwrap_or_else(|_| raw.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state_serializes_empty() {
        assert_eq!(FilterState::default().to_query_string(), "");
    }

    #[test]
    fn test_round_trip_full_state() {
        let state = FilterState {
            query: "char".to_string(),
            type_filters: vec!["fire".to_string(), "flying".to_string()],
            sort: SortKey::NameDesc,
            page: 3,
        };
        let qs = state.to_query_string();
        assert_eq!(qs, "q=char&types=fire,flying&sort=name-desc&page=3");
        assert_eq!(FilterState::from_query_string(&qs), state);
    }

    #[test]
    fn test_round_trip_with_encoded_query() {
        let state = FilterState::default().with_query("mr. mime");
        let qs = state.to_query_string();
        assert!(qs.contains("%20"));
        assert_eq!(FilterState::from_query_string(&qs).query, "mr. mime");
    }

    #[test]
    fn test_defaults_omitted() {
        let state = FilterState {
            sort: SortKey::Number,
            page: 1,
            ..FilterState::default()
        };
        assert_eq!(state.to_query_string(), "");
        let paged = state.with_page(2);
        assert_eq!(paged.to_query_string(), "page=2");
    }

    #[test]
    fn test_parse_clamps_page() {
        assert_eq!(FilterState::from_query_string("page=0").page, 1);
        assert_eq!(FilterState::from_query_string("page=junk").page, 1);
    }

    #[test]
    fn test_parse_ignores_unknown_params_and_empty_types() {
        let state = FilterState::from_query_string("?utm_source=x&types=fire,,water");
        assert_eq!(state.type_filters, vec!["fire", "water"]);
    }

    #[test]
    fn test_mutators_reset_page() {
        let base = FilterState::default().with_page(3);
        assert_eq!(base.page, 3);
        assert_eq!(base.with_sort(SortKey::Name).page, 1);
        assert_eq!(base.with_query("pika").page, 1);
        assert_eq!(base.with_type_toggled("grass").page, 1);
        assert_eq!(base.without_type_filters().page, 1);
        assert_eq!(base.with_page(5).page, 5);
    }

    #[test]
    fn test_type_toggle_is_involution() {
        let base = FilterState::default();
        let on = base.with_type_toggled("fire");
        assert!(on.has_type("fire"));
        let off = on.with_type_toggled("fire");
        assert!(!off.has_type("fire"));
        assert_eq!(off.type_filters, base.type_filters);
    }

    #[test]
    fn test_sort_key_parse_fallback() {
        assert_eq!(SortKey::parse("name"), SortKey::Name);
        assert_eq!(SortKey::parse("bogus"), SortKey::Number);
    }
}
