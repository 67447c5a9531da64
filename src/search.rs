//! Flight search query builder.
//!
//! The `/flights/search` family takes a `query` parameter written as a
//! sequence of `{operator args...}` terms, for example
//! `{= orig KSFO}{range alt 100 300}{true lifeguard}`.

use std::fmt;
use std::str::FromStr;

use crate::error::AeroApiError;

/// Operators understood by the flight search endpoints.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum SearchOperator {
    True,
    False,
    Null,
    NotNull,
    Eq,
    Ne,
    Lt,
    Gt,
    Le,
    Ge,
    Match,
    NotMatch,
    Range,
    In,
    OrigOrDest,
    Airline,
    AircraftType,
    Ident,
    IdentOrReg,
}

impl SearchOperator {
    /// Wire spelling of the operator.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::True => "true",
            Self::False => "false",
            Self::Null => "null",
            Self::NotNull => "notnull",
            Self::Eq => "=",
            Self::Ne => "!=",
            Self::Lt => "<",
            Self::Gt => ">",
            Self::Le => "<=",
            Self::Ge => ">=",
            Self::Match => "match",
            Self::NotMatch => "notmatch",
            Self::Range => "range",
            Self::In => "in",
            Self::OrigOrDest => "orig_or_dest",
            Self::Airline => "airline",
            Self::AircraftType => "aircraftType",
            Self::Ident => "ident",
            Self::IdentOrReg => "ident_or_reg",
        }
    }

    /// Flag operators test a single field and take no value.
    pub fn is_flag(self) -> bool {
        matches!(self, Self::True | Self::False | Self::Null | Self::NotNull)
    }

    const ALL: [SearchOperator; 19] = [
        Self::True,
        Self::False,
        Self::Null,
        Self::NotNull,
        Self::Eq,
        Self::Ne,
        Self::Lt,
        Self::Gt,
        Self::Le,
        Self::Ge,
        Self::Match,
        Self::NotMatch,
        Self::Range,
        Self::In,
        Self::OrigOrDest,
        Self::Airline,
        Self::AircraftType,
        Self::Ident,
        Self::IdentOrReg,
    ];
}

impl fmt::Display for SearchOperator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SearchOperator {
    type Err = AeroApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|op| op.as_str() == s)
            .ok_or_else(|| AeroApiError::InvalidSearchOperator(s.to_string()))
    }
}

/// One `{operator args...}` term.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchTerm {
    pub op: SearchOperator,
    pub args: Vec<String>,
}

impl SearchTerm {
    pub fn new<I, S>(op: SearchOperator, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        Self {
            op,
            args: args.into_iter().map(|a| a.to_string()).collect(),
        }
    }
}

/// Parses `"op arg1 arg2"`, e.g. `"= orig KSFO"`.
impl FromStr for SearchTerm {
    type Err = AeroApiError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut parts = s.split_whitespace();
        let op = parts.next().unwrap_or_default().parse()?;
        Ok(Self::new(op, parts))
    }
}

impl fmt::Display for SearchTerm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{{}", self.op)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        f.write_str("}")
    }
}

/// Ordered list of search terms.
///
/// ```
/// use aeroapi::{SearchOperator, SearchQuery};
///
/// let query = SearchQuery::new()
///     .term(SearchOperator::Eq, ["orig", "KSFO"])
///     .term(SearchOperator::Range, ["alt", "100", "300"])
///     .flag(SearchOperator::True, "lifeguard");
/// assert_eq!(query.to_string(), "{= orig KSFO}{range alt 100 300}{true lifeguard}");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchQuery {
    terms: Vec<SearchTerm>,
}

impl SearchQuery {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a term with arguments.
    #[must_use]
    pub fn term<I, S>(mut self, op: SearchOperator, args: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: ToString,
    {
        self.terms.push(SearchTerm::new(op, args));
        self
    }

    /// Add a flag term such as `{true lifeguard}`.
    #[must_use]
    pub fn flag(self, op: SearchOperator, field: &str) -> Self {
        self.term(op, [field])
    }

    pub fn terms(&self) -> &[SearchTerm] {
        &self.terms
    }

    pub fn is_empty(&self) -> bool {
        self.terms.is_empty()
    }
}

impl FromIterator<SearchTerm> for SearchQuery {
    fn from_iter<I: IntoIterator<Item = SearchTerm>>(iter: I) -> Self {
        Self {
            terms: iter.into_iter().collect(),
        }
    }
}

impl fmt::Display for SearchQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.terms.iter().try_for_each(|t| write!(f, "{t}"))
    }
}

/// Keys accepted by the simplified `-key value` search syntax.
pub const SEARCH_QUERY_KEYS: &[(&str, &str)] = &[
    ("-prefix STRING", "Prefix of aircraft ident (e.g., N for US registrations)"),
    ("-type STRING", "Aircraft type with wildcards (e.g., B73* for all Boeing 737 variants)"),
    ("-idents STRING", "Aircraft ident with wildcards"),
    ("-identOrReg STRING", "Aircraft ident or registration with wildcards"),
    ("-airline STRING", "Airline/operator ident with wildcards"),
    ("-destination STRING", "ICAO or IATA code of destination airport"),
    ("-origin STRING", "ICAO or IATA code of origin airport"),
    ("-originOrDestination STRING", "ICAO or IATA code of origin or destination airport"),
    ("-aboveAltitude INTEGER", "Minimum altitude in feet"),
    ("-belowAltitude INTEGER", "Maximum altitude in feet"),
    ("-aboveGroundspeed INTEGER", "Minimum groundspeed in knots"),
    ("-belowGroundspeed INTEGER", "Maximum groundspeed in knots"),
    ("-latlong \"MINLAT MINLON MAXLAT MAXLON\"", "Latitude/longitude box for filtering flights"),
    ("-filter {ga|airline}", "Filter by general aviation or airline flights"),
];

/// Render [`SEARCH_QUERY_KEYS`] as an aligned help table.
pub fn search_keys_help() -> String {
    let width = SEARCH_QUERY_KEYS
        .iter()
        .map(|(k, _)| k.len())
        .max()
        .unwrap_or(0);

    let mut out = String::from("Available query keys for flight search:\n\n");
    for (key, description) in SEARCH_QUERY_KEYS {
        out.push_str(&format!("{key:<width$}  {description}\n"));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_operator_round_trip_through_wire_name() {
        for op in SearchOperator::ALL {
            assert_eq!(op.as_str().parse::<SearchOperator>().unwrap(), op);
        }
    }

    #[test]
    fn test_unknown_operator_rejected() {
        let err = "between".parse::<SearchOperator>().unwrap_err();
        assert!(matches!(err, AeroApiError::InvalidSearchOperator(ref s) if s == "between"));
    }

    #[test]
    fn test_flag_operators() {
        assert!(SearchOperator::NotNull.is_flag());
        assert!(!SearchOperator::Match.is_flag());
    }

    #[test]
    fn test_render_terms() {
        let query = SearchQuery::new()
            .term(SearchOperator::Eq, ["dest", "KLAX"])
            .term(SearchOperator::In, ["orig", "{KSFO KOAK}"])
            .flag(SearchOperator::NotNull, "arrivalTime");
        assert_eq!(
            query.to_string(),
            "{= dest KLAX}{in orig {KSFO KOAK}}{notnull arrivalTime}"
        );
    }

    #[test]
    fn test_numeric_args() {
        let term = SearchTerm::new(SearchOperator::Range, [100, 300]);
        assert_eq!(term.to_string(), "{range 100 300}");
    }

    #[test]
    fn test_parse_term() {
        let term: SearchTerm = "range alt  100 300".parse().unwrap();
        assert_eq!(term.op, SearchOperator::Range);
        assert_eq!(term.args, vec!["alt", "100", "300"]);
        assert!("".parse::<SearchTerm>().is_err());
        assert!("near KSFO".parse::<SearchTerm>().is_err());
    }

    #[test]
    fn test_empty_query_renders_empty() {
        assert_eq!(SearchQuery::new().to_string(), "");
    }

    #[test]
    fn test_search_keys_help_lists_every_key() {
        let help = search_keys_help();
        for (key, _) in SEARCH_QUERY_KEYS {
            assert!(help.contains(key));
        }
    }
}
