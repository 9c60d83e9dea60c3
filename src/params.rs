//! Path parameters bound by the matcher.

use core::str::FromStr;

/// Parameter name to decoded value, in binding order.
///
/// Values always arrive as strings. Conversion helpers return `None` on
/// failure so a malformed parameter reads the same as a missing one.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Params(Vec<(String, String)>);

impl Params {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn insert(&mut self, name: impl Into<String>, value: impl Into<String>) {
        let name = name.into();
        let value = value.into();
        match self.0.iter_mut().find(|(n, _)| *n == name) {
            Some((_, v)) => *v = value,
            None => self.0.push((name, value)),
        }
    }

    pub(crate) fn truncate(&mut self, len: usize) {
        self.0.truncate(len);
    }

    /// The raw value bound to `name`.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(n, _)| n == name)
            .map(|(_, v)| v.as_str())
    }

    /// The value bound to `name` converted to `T`.
    ///
    /// ```rust
    /// # use wayfinder::{RouteTable, RouteEntry, Node};
    /// let table = RouteTable::<()>::build(vec![
    ///     RouteEntry::new("contacts/:contactId", |_| Node::empty()),
    ///     RouteEntry::new("*", |_| Node::empty()),
    /// ]).unwrap();
    ///
    /// let params = table.match_path("/contacts/7").params;
    /// assert_eq!(params.parse::<u32>("contactId"), Some(7));
    ///
    /// let params = table.match_path("/contacts/seven").params;
    /// assert_eq!(params.parse::<u32>("contactId"), None);
    /// ```
    pub fn parse<T: FromStr>(&self, name: &str) -> Option<T> {
        self.get(name).and_then(|v| v.parse().ok())
    }

    /// Like [`parse`](Self::parse) but with a default for absent or
    /// unconvertible values.
    pub fn parse_or<T: FromStr>(&self, name: &str, default: T) -> T {
        self.parse(name).unwrap_or(default)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.0.iter().map(|(n, v)| (n.as_str(), v.as_str()))
    }
}
