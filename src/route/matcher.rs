use tracing::trace;

use crate::params::Params;
use crate::route::pattern::MatchClass;
use crate::route::table::{RouteId, RouteTable};

/// Result of matching a path: matched routes from root to leaf and the
/// parameters they bound.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RouteMatch {
    pub chain: Vec<RouteId>,
    pub params: Params,
}

impl RouteMatch {
    pub fn leaf(&self) -> Option<RouteId> {
        self.chain.last().copied()
    }
}

/// Split a URL path into decoded segments, dropping query, fragment and
/// empty segments.
pub fn path_segments(path: &str) -> Vec<String> {
    let end = path.find(['?', '#']).unwrap_or(path.len());
    path[..end]
        .split('/')
        .filter(|s| !s.is_empty())
        .map(|s| match urlencoding::decode(s) {
            Ok(decoded) => decoded.into_owned(),
            Err(_) => s.to_string(),
        })
        .collect()
}

/// A full match found while walking the tree.
#[derive(Debug, Clone, Default)]
struct Candidate {
    chain: Vec<RouteId>,
    params: Params,
    /// Class of every consumed path segment, in path order.
    rank: Vec<MatchClass>,
}

impl Candidate {
    fn offer(&self, best: &mut Option<Candidate>) {
        if best.as_ref().map_or(true, |current| self.rank < current.rank) {
            *best = Some(self.clone());
        }
    }
}

impl<D> RouteTable<D> {
    /// Match `path` against the table.
    ///
    /// Every branch that consumes the whole path is considered and the most
    /// specific one wins: segment by segment, a literal beats a parameter,
    /// which beats an optional parameter, which beats a wildcard. Ties go
    /// to the sibling the table orders first. The fallback guaranteed by
    /// [`RouteTable::build`] means every path matches.
    pub fn match_path(&self, path: &str) -> RouteMatch {
        let segments = path_segments(path);
        let mut best = None;
        if !self.walk(&self.roots, &segments, &mut Candidate::default(), &mut best) {
            // Unreachable for a table that passed `build`.
            trace!(path, "no route matched");
        }
        let found = best
            .map(|c| RouteMatch {
                chain: c.chain,
                params: c.params,
            })
            .unwrap_or_default();
        trace!(path, chain = ?found.chain, params = ?found.params, "matched");
        found
    }

    /// Offer every full match below `siblings` to `best`. Returns whether
    /// anything matched.
    fn walk(
        &self,
        siblings: &[RouteId],
        rest: &[String],
        trail: &mut Candidate,
        best: &mut Option<Candidate>,
    ) -> bool {
        let mut matched = false;
        for &id in siblings {
            let node = self.node(id);

            if node.index {
                if rest.is_empty() {
                    trail.chain.push(id);
                    trail.offer(best);
                    trail.chain.pop();
                    matched = true;
                }
                continue;
            }

            let (params_mark, rank_mark) = (trail.params.len(), trail.rank.len());
            for binding in node.pattern.bindings(rest) {
                for (name, value) in binding.params {
                    trail.params.insert(name, value);
                }
                trail.rank.extend(binding.ranks);
                trail.chain.push(id);

                let remaining = &rest[binding.consumed..];
                if node.pattern.is_terminal() {
                    trail.offer(best);
                    matched = true;
                } else if remaining.is_empty() {
                    // An index (or other empty-matching) child takes the
                    // leaf slot; without one this route is the leaf.
                    if !self.walk(&node.children, remaining, trail, best) {
                        trail.offer(best);
                    }
                    matched = true;
                } else if self.walk(&node.children, remaining, trail, best) {
                    matched = true;
                }

                trail.chain.pop();
                trail.params.truncate(params_mark);
                trail.rank.truncate(rank_mark);
            }
        }
        matched
    }
}
