use std::collections::HashSet;
use std::sync::Arc;

use crate::error::RouteTableError;
use crate::loader::{LoaderArgs, LoaderFn, LoaderFuture};
use crate::navigation::ViewContext;
use crate::route::pattern::{MatchClass, Pattern};
use crate::view::Node;

/// Renders a route from its [`ViewContext`].
pub type ViewFn<D> = Arc<dyn Fn(&ViewContext<'_, D>) -> Node + Send + Sync>;

/// Stable handle to a route inside its [`RouteTable`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct RouteId(pub(crate) usize);

/// Declarative description of one route, used to build a [`RouteTable`].
///
/// `D` is the value type the table's loaders produce.
pub struct RouteEntry<D> {
    pattern: String,
    index: bool,
    view: ViewFn<D>,
    loader: Option<LoaderFn<D>>,
    fallback: Option<ViewFn<D>>,
    children: Vec<RouteEntry<D>>,
}

impl<D> RouteEntry<D> {
    pub fn new<V>(pattern: impl Into<String>, view: V) -> Self
    where
        V: Fn(&ViewContext<'_, D>) -> Node + Send + Sync + 'static,
    {
        Self {
            pattern: pattern.into(),
            index: false,
            view: Arc::new(view),
            loader: None,
            fallback: None,
            children: Vec::new(),
        }
    }

    /// A route that matches only when its parent consumed the whole path.
    pub fn index<V>(view: V) -> Self
    where
        V: Fn(&ViewContext<'_, D>) -> Node + Send + Sync + 'static,
    {
        Self {
            index: true,
            ..Self::new("", view)
        }
    }

    /// Run `loader` every time navigation enters this route.
    pub fn loader<L>(mut self, loader: L) -> Self
    where
        L: Fn(LoaderArgs) -> LoaderFuture<D> + Send + Sync + 'static,
    {
        self.loader = Some(Arc::new(loader));
        self
    }

    /// Content shown in this route's slot while a loader in or below it is pending.
    pub fn fallback<V>(mut self, view: V) -> Self
    where
        V: Fn(&ViewContext<'_, D>) -> Node + Send + Sync + 'static,
    {
        self.fallback = Some(Arc::new(view));
        self
    }

    pub fn children(mut self, children: Vec<RouteEntry<D>>) -> Self {
        self.children.extend(children);
        self
    }
}

pub(crate) struct RouteNode<D> {
    pub(crate) pattern: Pattern,
    pub(crate) index: bool,
    pub(crate) view: ViewFn<D>,
    pub(crate) loader: Option<LoaderFn<D>>,
    pub(crate) fallback: Option<ViewFn<D>>,
    pub(crate) parent: Option<RouteId>,
    pub(crate) children: Vec<RouteId>,
}

impl<D> RouteNode<D> {
    pub(crate) fn class(&self) -> MatchClass {
        self.pattern.class()
    }
}

/// Immutable, validated tree of routes.
///
/// Built once at startup. Siblings are kept ordered by their first segment
/// (literal, parameter, optional parameter, wildcard), each group in
/// declaration order. The matcher ranks whole matches, so this order only
/// breaks ties.
pub struct RouteTable<D> {
    pub(crate) nodes: Vec<RouteNode<D>>,
    pub(crate) roots: Vec<RouteId>,
}

impl<D> RouteTable<D> {
    /// Validate `entries` and build the table.
    ///
    /// Fails if a pattern is malformed, a sibling list has more than one
    /// wildcard, a wildcard has children, a parameter name repeats along a
    /// branch, or no wildcard fallback is reachable from the root.
    pub fn build(entries: Vec<RouteEntry<D>>) -> Result<Self, RouteTableError> {
        let mut table = RouteTable {
            nodes: Vec::new(),
            roots: Vec::new(),
        };
        table.roots = table.insert_siblings(entries, None, "/", &HashSet::new())?;

        if !table.has_fallback(&table.roots) {
            return Err(RouteTableError::MissingFallback);
        }
        Ok(table)
    }

    fn insert_siblings(
        &mut self,
        entries: Vec<RouteEntry<D>>,
        parent: Option<RouteId>,
        parent_pattern: &str,
        bound: &HashSet<String>,
    ) -> Result<Vec<RouteId>, RouteTableError> {
        let mut ids = Vec::with_capacity(entries.len());
        for entry in entries {
            ids.push(self.insert(entry, parent, bound)?);
        }

        let wildcards = ids
            .iter()
            .filter(|id| self.nodes[id.0].class() == MatchClass::Wildcard)
            .count();
        if wildcards > 1 {
            return Err(RouteTableError::DuplicateWildcard {
                parent: parent_pattern.to_string(),
            });
        }

        ids.sort_by_key(|id| self.nodes[id.0].class());
        Ok(ids)
    }

    fn insert(
        &mut self,
        entry: RouteEntry<D>,
        parent: Option<RouteId>,
        bound: &HashSet<String>,
    ) -> Result<RouteId, RouteTableError> {
        let pattern =
            Pattern::parse(&entry.pattern).map_err(|source| RouteTableError::Pattern {
                pattern: entry.pattern.clone(),
                source,
            })?;

        if entry.index && (!pattern.is_pathless() || !entry.children.is_empty()) {
            return Err(RouteTableError::InvalidIndex);
        }
        if pattern.is_terminal() && !entry.children.is_empty() {
            return Err(RouteTableError::WildcardWithChildren {
                pattern: entry.pattern,
            });
        }

        let mut bound = bound.clone();
        for name in pattern.param_names() {
            if !bound.insert(name.to_string()) {
                return Err(RouteTableError::DuplicateParam {
                    name: name.to_string(),
                    pattern: entry.pattern,
                });
            }
        }

        let id = RouteId(self.nodes.len());
        let raw = pattern.as_str().to_string();
        self.nodes.push(RouteNode {
            pattern,
            index: entry.index,
            view: entry.view,
            loader: entry.loader,
            fallback: entry.fallback,
            parent,
            children: Vec::new(),
        });

        let children = self.insert_siblings(entry.children, Some(id), &raw, &bound)?;
        self.nodes[id.0].children = children;
        Ok(id)
    }

    /// A wildcard is a sibling here, or below a pathless layout that is.
    fn has_fallback(&self, siblings: &[RouteId]) -> bool {
        siblings.iter().any(|id| {
            let node = &self.nodes[id.0];
            node.class() == MatchClass::Wildcard
                || (node.pattern.is_pathless() && !node.index && self.has_fallback(&node.children))
        })
    }

    pub(crate) fn node(&self, id: RouteId) -> &RouteNode<D> {
        &self.nodes[id.0]
    }

    /// The pattern the route was declared with.
    pub fn pattern(&self, id: RouteId) -> &str {
        self.node(id).pattern.as_str()
    }

    pub fn is_index(&self, id: RouteId) -> bool {
        self.node(id).index
    }

    pub fn has_loader(&self, id: RouteId) -> bool {
        self.node(id).loader.is_some()
    }

    pub fn parent(&self, id: RouteId) -> Option<RouteId> {
        self.node(id).parent
    }

    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }
}
