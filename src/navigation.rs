//! Navigation state and the events that change it.

use crate::error::LoaderError;
use crate::params::Params;
use crate::route::RouteId;

/// Lifecycle of one loader within the current navigation.
#[derive(Debug, Clone, PartialEq)]
pub enum LoadState<D> {
    /// The route has no loader.
    Idle,
    Pending,
    Success(D),
    Error(LoaderError),
}

impl<D> LoadState<D> {
    pub fn is_pending(&self) -> bool {
        matches!(self, LoadState::Pending)
    }

    pub fn value(&self) -> Option<&D> {
        match self {
            LoadState::Success(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&LoaderError> {
        match self {
            LoadState::Error(error) => Some(error),
            _ => None,
        }
    }
}

/// Everything the router knows about where the app currently is.
///
/// Owned by the runtime and replaced as a whole on every transition.
#[derive(Debug, Clone, PartialEq)]
pub struct NavigationState<D> {
    pub path: String,
    /// Matched routes, root to leaf.
    pub chain: Vec<RouteId>,
    pub params: Params,
    /// Incremented on every committed navigation.
    pub seq: u64,
    pub(crate) loads: Vec<(RouteId, LoadState<D>)>,
}

impl<D> NavigationState<D> {
    /// State before the first navigation; the router matches `path` in
    /// [`init`](crate::MvuLogic::init).
    pub fn at(path: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            chain: Vec::new(),
            params: Params::new(),
            seq: 0,
            loads: Vec::new(),
        }
    }

    pub fn leaf(&self) -> Option<RouteId> {
        self.chain.last().copied()
    }

    pub fn load_state(&self, route: RouteId) -> &LoadState<D> {
        self.loads
            .iter()
            .find(|(id, _)| *id == route)
            .map(|(_, state)| state)
            .unwrap_or(&LoadState::Idle)
    }

    pub fn is_loading(&self) -> bool {
        self.loads.iter().any(|(_, state)| state.is_pending())
    }
}

/// Messages dispatched into the router's transition function.
#[derive(Debug)]
pub enum NavEvent<D> {
    /// Link activation, history change or programmatic navigation.
    Navigate(String),
    /// A loader finished. `seq` is the navigation it was started for.
    LoaderSettled {
        seq: u64,
        route: RouteId,
        result: Result<D, LoaderError>,
    },
}

/// What a route's view is rendered from.
pub struct ViewContext<'a, D> {
    pub(crate) path: &'a str,
    pub(crate) params: &'a Params,
    pub(crate) load: &'a LoadState<D>,
}

impl<'a, D> ViewContext<'a, D> {
    pub fn path(&self) -> &'a str {
        self.path
    }

    pub fn params(&self) -> &'a Params {
        self.params
    }

    /// This route's loader state; `Idle` when it has no loader.
    pub fn load_state(&self) -> &'a LoadState<D> {
        self.load
    }

    pub fn data(&self) -> Option<&'a D> {
        self.load.value()
    }

    pub fn error(&self) -> Option<&'a LoaderError> {
        self.load.error()
    }
}
