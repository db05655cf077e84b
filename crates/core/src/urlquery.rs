//! URL query-string codec
//!
//! The storefront keeps a subset of search and compare state in the URL:
//! `q` (free text), `tier` (comma-separated tier letters), `collection`
//! (category key), and `items` (comma-separated slugs). This module owns
//! parsing and serializing that representation. Unknown keys are carried
//! through untouched so foreign params survive a round trip.

/// An ordered multiset of query parameters.
///
/// Order is preserved on parse and serialize; `set` replaces the first
/// occurrence in place so rewritten URLs stay stable.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryParams {
    pairs: Vec<(String, String)>,
}

impl QueryParams {
    /// Create an empty parameter set
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a query string, with or without its leading `?`.
    ///
    /// Empty segments are skipped; values are percent-decoded with `+`
    /// treated as space. A key without `=` parses as an empty value.
    #[must_use]
    pub fn parse(qs: &str) -> Self {
        let qs = qs.strip_prefix('?').unwrap_or(qs);
        let mut pairs = Vec::new();

        for pair in qs.split('&') {
            if pair.is_empty() {
                continue;
            }
            let mut parts = pair.splitn(2, '=');
            let key = parts.next().unwrap_or("");
            let value = parts.next().unwrap_or("");
            pairs.push((percent_decode(key), percent_decode(value)));
        }

        Self { pairs }
    }

    /// Get the first value for a key
    #[must_use]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    /// Get a comma-separated value as a list, skipping empty entries
    #[must_use]
    pub fn get_list(&self, key: &str) -> Vec<String> {
        self.get(key)
            .map(|v| {
                v.split(',')
                    .filter(|s| !s.is_empty())
                    .map(str::to_string)
                    .collect()
            })
            .unwrap_or_default()
    }

    /// Set a key, replacing the first existing occurrence or appending
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        if let Some(pair) = self.pairs.iter_mut().find(|(k, _)| *k == key) {
            pair.1 = value;
        } else {
            self.pairs.push((key, value));
        }
    }

    /// Set a key to a comma-joined list; an empty list removes the key
    pub fn set_list<S: AsRef<str>>(&mut self, key: impl Into<String>, values: &[S]) {
        let key = key.into();
        if values.is_empty() {
            self.remove(&key);
        } else {
            let joined = values
                .iter()
                .map(AsRef::as_ref)
                .collect::<Vec<_>>()
                .join(",");
            self.set(key, joined);
        }
    }

    /// Remove every occurrence of a key
    pub fn remove(&mut self, key: &str) {
        self.pairs.retain(|(k, _)| k != key);
    }

    /// True when no parameters are present
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Serialize back to a query string (no leading `?`)
    #[must_use]
    pub fn to_query_string(&self) -> String {
        self.pairs
            .iter()
            .map(|(k, v)| {
                if v.is_empty() {
                    percent_encode(k)
                } else {
                    format!("{}={}", percent_encode(k), percent_encode(v))
                }
            })
            .collect::<Vec<_>>()
            .join("&")
    }
}

/// Percent-decode a query-string component, treating `+` as space.
///
/// Invalid escapes are passed through literally rather than dropped.
#[must_use]
pub fn percent_decode(s: &str) -> String {
    let raw = s.as_bytes();
    let mut bytes = Vec::with_capacity(raw.len());
    let mut i = 0;

    while i < raw.len() {
        match raw[i] {
            b'%' if i + 2 < raw.len() => {
                let decoded = std::str::from_utf8(&raw[i + 1..i + 3])
                    .ok()
                    .and_then(|hex| u8::from_str_radix(hex, 16).ok());
                match decoded {
                    Some(byte) => {
                        bytes.push(byte);
                        i += 3;
                        continue;
                    }
                    None => bytes.push(b'%'),
                }
            }
            b'+' => bytes.push(b' '),
            other => bytes.push(other),
        }
        i += 1;
    }

    String::from_utf8_lossy(&bytes).into_owned()
}

/// Percent-encode a query-string component.
///
/// Unreserved characters (RFC 3986) plus `,` pass through so tier and
/// slug lists stay readable in the address bar.
#[must_use]
pub fn percent_encode(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for byte in s.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b',' => {
                out.push(byte as char);
            }
            _ => out.push_str(&format!("%{:02X}", byte)),
        }
    }
    out
}
