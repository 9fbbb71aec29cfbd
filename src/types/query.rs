//! URL query parameters.

use std::collections::BTreeMap;
use std::fmt;

/// A single query parameter value: a string or a number.
#[derive(Debug, Clone, PartialEq)]
pub enum QueryValue {
    /// A string value.
    String(String),
    /// An integer value.
    Integer(i64),
    /// A floating point value.
    Float(f64),
}

impl fmt::Display for QueryValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            QueryValue::String(s) => f.write_str(s),
            QueryValue::Integer(n) => write!(f, "{}", n),
            QueryValue::Float(n) => write!(f, "{}", n),
        }
    }
}

impl From<String> for QueryValue {
    fn from(value: String) -> Self {
        QueryValue::String(value)
    }
}

impl From<&str> for QueryValue {
    fn from(value: &str) -> Self {
        QueryValue::String(value.to_string())
    }
}

impl From<&String> for QueryValue {
    fn from(value: &String) -> Self {
        QueryValue::String(value.clone())
    }
}

macro_rules! integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    QueryValue::Integer(i64::from(value))
                }
            }
        )*
    };
}

integer_query_value!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! wide_integer_query_value {
    ($($ty:ty),*) => {
        $(
            impl From<$ty> for QueryValue {
                fn from(value: $ty) -> Self {
                    // Out of i64 range: sent as its decimal text.
                    i64::try_from(value)
                        .map_or_else(|_| QueryValue::String(value.to_string()), QueryValue::Integer)
                }
            }
        )*
    };
}

wide_integer_query_value!(u64, usize, isize);

impl From<f64> for QueryValue {
    fn from(value: f64) -> Self {
        QueryValue::Float(value)
    }
}

/// Query parameters for a request, keyed by name.
///
/// Parameter order carries no meaning; parameters are encoded sorted by key
/// as `application/x-www-form-urlencoded`. An empty query encodes to the
/// empty string.
///
/// ## Example
///
/// ```rust
/// use orbit_members::Query;
///
/// let query = Query::new().with("source", "github").with("page", 2);
/// assert_eq!(query.encode(), "page=2&source=github");
/// assert_eq!(Query::new().encode(), "");
/// ```
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Query {
    params: BTreeMap<String, QueryValue>,
}

impl Query {
    /// Creates an empty query.
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a parameter, replacing any previous value for the key.
    #[must_use]
    pub fn with(mut self, key: impl Into<String>, value: impl Into<QueryValue>) -> Self {
        self.insert(key, value);
        self
    }

    /// Inserts a parameter, replacing any previous value for the key.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<QueryValue>) {
        self.params.insert(key.into(), value.into());
    }

    /// Returns the value for a key.
    pub fn get(&self, key: &str) -> Option<&QueryValue> {
        self.params.get(key)
    }

    /// Iterates over the parameters, sorted by key.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &QueryValue)> {
        self.params.iter().map(|(key, value)| (key.as_str(), value))
    }

    /// Returns `true` if there are no parameters.
    pub fn is_empty(&self) -> bool {
        self.params.is_empty()
    }

    /// Returns the number of parameters.
    pub fn len(&self) -> usize {
        self.params.len()
    }

    /// Encodes the parameters as a URL query string, without the leading `?`.
    pub fn encode(&self) -> String {
        let mut serializer = url::form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.params {
            serializer.append_pair(key, &value.to_string());
        }
        serializer.finish()
    }
}

impl<K, V> FromIterator<(K, V)> for Query
where
    K: Into<String>,
    V: Into<QueryValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Query::new();
        for (key, value) in iter {
            query.insert(key, value);
        }
        query
    }
}
