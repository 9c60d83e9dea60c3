//! Route pattern parsing.
//!
//! Patterns are `/`-separated. Each segment is one of:
//!
//! - `about`: static literal, compared ASCII case-insensitively
//! - `:contactId`: required parameter, binds exactly one path segment
//! - `:contactId?`: optional parameter, binds one segment if present
//! - `*`: wildcard, binds the rest of the path under `*`
//!
//! An empty pattern (`""` or `"/"`) consumes nothing; it is how pathless
//! layouts and the home route are written.

use crate::error::PatternError;

/// Name the wildcard remainder is bound under.
pub const WILDCARD_PARAM: &str = "*";

/// One `/`-separated piece of a pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    Static(String),
    Param(String),
    OptionalParam(String),
    Wildcard,
}

/// How specifically a path segment was matched. Lower is more specific.
///
/// A full match is ranked by the sequence of classes of the path segments it
/// consumed, compared in path order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum MatchClass {
    Literal,
    Param,
    OptionalParam,
    Wildcard,
}

/// A parsed route pattern, such as `contacts/:contactId?`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Pattern {
    raw: String,
    segments: Vec<Segment>,
}

/// One way a pattern can consume the front of a path.
#[derive(Debug, Clone)]
pub(crate) struct Binding {
    pub(crate) consumed: usize,
    pub(crate) params: Vec<(String, String)>,
    /// Class of each consumed path segment; a wildcard always adds at least one.
    pub(crate) ranks: Vec<MatchClass>,
}

impl Binding {
    fn advance(&mut self, param: Option<(&String, &String)>, class: MatchClass) {
        if let Some((name, value)) = param {
            self.params.push((name.clone(), value.clone()));
        }
        self.ranks.push(class);
        self.consumed += 1;
    }

    fn retreat(&mut self, had_param: bool) {
        if had_param {
            self.params.pop();
        }
        self.ranks.pop();
        self.consumed -= 1;
    }
}

fn classify_segment(segment: &str) -> Result<Segment, PatternError> {
    if segment == "*" {
        return Ok(Segment::Wildcard);
    }
    let Some(param) = segment.strip_prefix(':') else {
        return Ok(Segment::Static(segment.to_string()));
    };
    let (name, optional) = match param.strip_suffix('?') {
        Some(name) => (name, true),
        None => (param, false),
    };
    if name.is_empty() {
        return Err(PatternError::EmptyParamName(segment.to_string()));
    }
    if !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PatternError::InvalidParamName(name.to_string()));
    }
    Ok(if optional {
        Segment::OptionalParam(name.to_string())
    } else {
        Segment::Param(name.to_string())
    })
}

impl Pattern {
    pub fn parse(raw: &str) -> Result<Self, PatternError> {
        let segments = raw
            .split('/')
            .filter(|s| !s.is_empty())
            .map(classify_segment)
            .collect::<Result<Vec<_>, _>>()?;

        if let Some(pos) = segments.iter().position(|s| *s == Segment::Wildcard) {
            if pos + 1 != segments.len() {
                return Err(PatternError::WildcardNotLast(raw.to_string()));
            }
        }

        Ok(Self {
            raw: raw.to_string(),
            segments,
        })
    }

    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    /// Consumes no path segments.
    pub fn is_pathless(&self) -> bool {
        self.segments.is_empty()
    }

    /// Ends in a wildcard, so nothing can be matched below it.
    pub fn is_terminal(&self) -> bool {
        matches!(self.segments.last(), Some(Segment::Wildcard))
    }

    pub fn class(&self) -> MatchClass {
        match self.segments.first() {
            None | Some(Segment::Static(_)) => MatchClass::Literal,
            Some(Segment::Param(_)) => MatchClass::Param,
            Some(Segment::OptionalParam(_)) => MatchClass::OptionalParam,
            Some(Segment::Wildcard) => MatchClass::Wildcard,
        }
    }

    /// Names of all parameters this pattern binds.
    pub fn param_names(&self) -> impl Iterator<Item = &str> {
        self.segments.iter().filter_map(|s| match s {
            Segment::Param(n) | Segment::OptionalParam(n) => Some(n.as_str()),
            Segment::Wildcard => Some(WILDCARD_PARAM),
            Segment::Static(_) => None,
        })
    }

    /// Every way this pattern can match a prefix of `path`, most specific
    /// first (an optional parameter prefers to consume its segment).
    pub(crate) fn bindings(&self, path: &[String]) -> Vec<Binding> {
        let mut out = Vec::new();
        let mut acc = Binding {
            consumed: 0,
            params: Vec::new(),
            ranks: Vec::new(),
        };
        self.bind_from(0, path, &mut acc, &mut out);
        out
    }

    fn bind_from(&self, index: usize, path: &[String], acc: &mut Binding, out: &mut Vec<Binding>) {
        let pos = acc.consumed;
        let Some(segment) = self.segments.get(index) else {
            out.push(acc.clone());
            return;
        };

        match segment {
            Segment::Static(literal) => {
                if path.get(pos).is_some_and(|s| s.eq_ignore_ascii_case(literal)) {
                    acc.advance(None, MatchClass::Literal);
                    self.bind_from(index + 1, path, acc, out);
                    acc.retreat(false);
                }
            }
            Segment::Param(name) => {
                if let Some(value) = path.get(pos) {
                    acc.advance(Some((name, value)), MatchClass::Param);
                    self.bind_from(index + 1, path, acc, out);
                    acc.retreat(true);
                }
            }
            Segment::OptionalParam(name) => {
                if let Some(value) = path.get(pos) {
                    acc.advance(Some((name, value)), MatchClass::OptionalParam);
                    self.bind_from(index + 1, path, acc, out);
                    acc.retreat(true);
                }
                self.bind_from(index + 1, path, acc, out);
            }
            Segment::Wildcard => {
                let rest = path.get(pos..).unwrap_or_default();
                let mut binding = acc.clone();
                binding.consumed = path.len();
                binding.params.push((WILDCARD_PARAM.to_string(), rest.join("/")));
                binding
                    .ranks
                    .extend(std::iter::repeat(MatchClass::Wildcard).take(rest.len().max(1)));
                out.push(binding);
            }
        }
    }
}
