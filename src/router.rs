//! The router: route matching and loader lifecycle expressed as MVU logic.

use std::sync::Arc;

use tracing::{debug, error};

use crate::config::RouterConfig;
use crate::loader::{loader_effect, LoaderArgs, LoaderTimeout, Timer};
use crate::navigation::{LoadState, NavEvent, NavigationState, ViewContext};
use crate::route::{RouteId, RouteTable};
use crate::view::Node;
use crate::{Effect, Emitter, MvuLogic};

/// Handle for requesting navigation from views, event handlers or the host.
///
/// Every navigation goes through the router's transition function as a
/// [`NavEvent::Navigate`].
pub struct Navigator<D: Send>(Emitter<NavEvent<D>>);

impl<D: Send> Clone for Navigator<D> {
    fn clone(&self) -> Self {
        Self(self.0.clone())
    }
}

impl<D: Send> Navigator<D> {
    pub fn new(emitter: Emitter<NavEvent<D>>) -> Self {
        Self(emitter)
    }

    pub fn navigate(&self, path: impl Into<String>) {
        self.0.emit(NavEvent::Navigate(path.into()));
    }
}

/// Props produced for every render.
pub struct Page<D: Send> {
    pub path: String,
    pub seq: u64,
    /// Fully composed view: layouts with their outlets filled.
    pub node: Node,
    /// Whether any loader of the current navigation is still pending.
    pub loading: bool,
    pub navigator: Navigator<D>,
}

impl<D: Send> Clone for Page<D> {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            seq: self.seq,
            node: self.node.clone(),
            loading: self.loading,
            navigator: self.navigator.clone(),
        }
    }
}

/// Client-side router over a [`RouteTable`].
///
/// Plug it into an [`MvuRuntime`](crate::MvuRuntime) with a
/// [`NavigationState::at`] model; the runtime then owns the navigation state
/// and this type only ever derives new states from old ones.
///
/// ```rust
/// use wayfinder::{create_test_spawner, NavigationState, Node, RouteEntry, RouteTable, Router,
///     TestMvuRuntime, TestRenderer};
///
/// let table = RouteTable::build(vec![
///     RouteEntry::<()>::new("/", |_| Node::text("home")),
///     RouteEntry::new("*", |_| Node::text("not found")),
/// ]).unwrap();
///
/// let renderer = TestRenderer::new();
/// let mut driver = TestMvuRuntime::new(
///     NavigationState::at("/"),
///     Router::new(table),
///     renderer.clone(),
///     create_test_spawner(),
/// ).run();
///
/// renderer.with_last(|page| page.navigator.navigate("/missing"));
/// driver.process_events();
///
/// let text = renderer.with_last(|page| page.node.text_content());
/// assert_eq!(text.as_deref(), Some("not found"));
/// ```
pub struct Router<D> {
    table: Arc<RouteTable<D>>,
    config: RouterConfig,
    timer: Option<Arc<dyn Timer>>,
}

impl<D> Router<D>
where
    D: Clone + Send + 'static,
{
    pub fn new(table: RouteTable<D>) -> Self {
        Self::shared(Arc::new(table))
    }

    /// Router over a table that is also used elsewhere.
    pub fn shared(table: Arc<RouteTable<D>>) -> Self {
        Self {
            table,
            config: RouterConfig::default(),
            timer: None,
        }
    }

    pub fn with_config(mut self, config: RouterConfig) -> Self {
        self.config = config;
        self
    }

    /// Timer used to enforce [`RouterConfig::loader_timeout`].
    pub fn with_timer(mut self, timer: impl Timer + 'static) -> Self {
        self.timer = Some(Arc::new(timer));
        self
    }

    pub fn table(&self) -> &Arc<RouteTable<D>> {
        &self.table
    }

    pub fn config(&self) -> &RouterConfig {
        &self.config
    }

    fn timeout(&self) -> Option<LoaderTimeout> {
        match (self.config.loader_timeout(), &self.timer) {
            (Some(duration), Some(timer)) => Some(LoaderTimeout {
                duration,
                timer: timer.clone(),
            }),
            _ => None,
        }
    }

    /// Commit a navigation to `path`: match, bump the sequence number and
    /// mark every loader along the chain pending.
    fn transition(&self, path: String, previous_seq: u64) -> (NavigationState<D>, Effect<NavEvent<D>>) {
        let found = self.table.match_path(self.config.strip_base(&path));
        let seq = previous_seq + 1;

        let mut loads = Vec::new();
        let mut effects = Vec::new();
        for &route in &found.chain {
            if let Some(loader) = &self.table.node(route).loader {
                let args = LoaderArgs {
                    path: path.clone(),
                    params: found.params.clone(),
                };
                loads.push((route, LoadState::Pending));
                effects.push(loader_effect(loader.clone(), args, route, seq, self.timeout()));
            }
        }

        debug!(
            path = %path,
            seq,
            leaf = ?found.leaf().map(|id| self.table.pattern(id)),
            loaders = loads.len(),
            "navigation committed"
        );

        let state = NavigationState {
            path,
            chain: found.chain,
            params: found.params,
            seq,
            loads,
        };
        (state, Effect::batch(effects))
    }

    fn settle(
        &self,
        model: &NavigationState<D>,
        seq: u64,
        route: RouteId,
        result: Result<D, crate::LoaderError>,
    ) -> NavigationState<D> {
        let active = seq == model.seq && model.loads.iter().any(|(id, _)| *id == route);
        if !active {
            debug!(
                seq,
                current_seq = model.seq,
                route = ?route,
                "dropping stale loader result"
            );
            return model.clone();
        }

        let state = match result {
            Ok(value) => LoadState::Success(value),
            Err(reason) => {
                error!(
                    path = %model.path,
                    route = self.table.pattern(route),
                    error = %reason,
                    "route loader failed"
                );
                LoadState::Error(reason)
            }
        };

        let mut next = model.clone();
        if let Some((_, load)) = next.loads.iter_mut().find(|(id, _)| *id == route) {
            *load = state;
        }
        next
    }

    /// Compose the matched chain leaf first, mounting each rendered route
    /// into its parent's outlet. A route with a pending loader renders the
    /// nearest fallback at or above it instead of itself and its subtree.
    fn render(&self, model: &NavigationState<D>) -> Node {
        let mut node = Node::empty();
        for (depth, &route) in model.chain.iter().enumerate().rev() {
            let load = model.load_state(route);
            let ctx = ViewContext {
                path: &model.path,
                params: &model.params,
                load,
            };
            node = if load.is_pending() {
                model.chain[..=depth]
                    .iter()
                    .rev()
                    .find_map(|id| self.table.node(*id).fallback.as_ref())
                    .map(|fallback| fallback(&ctx))
                    .unwrap_or_else(Node::empty)
            } else {
                (self.table.node(route).view)(&ctx).mount(node)
            };
        }
        node
    }
}

impl<D> MvuLogic<NavEvent<D>, NavigationState<D>, Page<D>> for Router<D>
where
    D: Clone + Send + 'static,
{
    fn init(&self, model: NavigationState<D>) -> (NavigationState<D>, Effect<NavEvent<D>>) {
        self.transition(model.path, model.seq)
    }

    fn update(
        &self,
        event: NavEvent<D>,
        model: &NavigationState<D>,
    ) -> (NavigationState<D>, Effect<NavEvent<D>>) {
        match event {
            NavEvent::Navigate(path) => self.transition(path, model.seq),
            NavEvent::LoaderSettled { seq, route, result } => {
                (self.settle(model, seq, route, result), Effect::none())
            }
        }
    }

    fn view(&self, model: &NavigationState<D>, emitter: &Emitter<NavEvent<D>>) -> Page<D> {
        Page {
            path: model.path.clone(),
            seq: model.seq,
            node: self.render(model),
            loading: model.is_loading(),
            navigator: Navigator::new(emitter.clone()),
        }
    }
}
