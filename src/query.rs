//! Query string model shared by every resource wrapper.

use std::fmt::Display;

use chrono::{DateTime, SecondsFormat, Utc};

/// Ordered mapping from parameter name to an optional value.
///
/// Absent values are recorded but never serialized; the filtering happens
/// in [`AeroApiClient::build_path`](crate::AeroApiClient::build_path).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Query {
    params: Vec<(String, Option<String>)>,
}

impl Query {
    /// Create an empty query.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a parameter that always has a value.
    #[must_use]
    pub fn set(mut self, name: &str, value: impl Display) -> Self {
        self.params.push((name.to_string(), Some(value.to_string())));
        self
    }

    /// Add a parameter that may be absent.
    #[must_use]
    pub fn set_opt<V: Display>(mut self, name: &str, value: Option<V>) -> Self {
        self.params
            .push((name.to_string(), value.map(|v| v.to_string())));
        self
    }

    /// Add an optional time bound, rendered as RFC 3339 (`2024-05-01T12:00:00Z`).
    #[must_use]
    pub fn set_time(self, name: &str, value: Option<&DateTime<Utc>>) -> Self {
        self.set_opt(name, value.map(format_time))
    }

    /// Append every entry of another query, keeping order.
    #[must_use]
    pub fn extend(mut self, other: Query) -> Self {
        self.params.extend(other.params);
        self
    }

    /// Iterate over the entries that carry a value, in insertion order.
    pub fn present(&self) -> impl Iterator<Item = (&str, &str)> {
        self.params
            .iter()
            .filter_map(|(k, v)| v.as_deref().map(|v| (k.as_str(), v)))
    }

    /// Returns true if no entry carries a value.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.present().next().is_none()
    }

    /// Form-urlencode the present entries.
    ///
    /// Returns `None` when nothing would be serialized.
    #[must_use]
    pub fn encode(&self) -> Option<String> {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        let mut any = false;
        for (k, v) in self.present() {
            serializer.append_pair(k, v);
            any = true;
        }
        any.then(|| serializer.finish())
    }
}

impl<K, V> FromIterator<(K, Option<V>)> for Query
where
    K: Into<String>,
    V: Display,
{
    fn from_iter<I: IntoIterator<Item = (K, Option<V>)>>(iter: I) -> Self {
        Self {
            params: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.map(|v| v.to_string())))
                .collect(),
        }
    }
}

/// Conversion from a per-operation option struct into a [`Query`].
pub trait ToQuery {
    /// Build the query parameters for this set of options.
    fn to_query(&self) -> Query;
}

impl ToQuery for Query {
    fn to_query(&self) -> Query {
        self.clone()
    }
}

pub(crate) fn format_time(t: &DateTime<Utc>) -> String {
    t.to_rfc3339_opts(SecondsFormat::Secs, true)
}
