mod scripted_client;

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use wayfinder::{
    create_test_spawner, EffectFuture, NavEvent, NavigationState, Node, Page, Router,
    TestMvuDriver, TestMvuRuntime, TestRenderer,
};
pub(crate) use scripted_client::*;

mod loader_timeout_tests;
mod pokemon_app_tests;
mod renderer_tests;
mod routing_app_tests;

pub(crate) type BoxedSpawner = Box<dyn Fn(EffectFuture)>;

pub(crate) type RouterDriver<D> = TestMvuDriver<
    NavEvent<D>,
    NavigationState<D>,
    Page<D>,
    Router<D>,
    TestRenderer<Page<D>>,
    BoxedSpawner,
>;

/// A running router whose effects are queued instead of executed, so
/// tests decide when (and in which order) loaders settle.
pub(crate) struct RouterHarness<D: Clone + Send + 'static> {
    pub(crate) driver: RouterDriver<D>,
    pub(crate) renderer: TestRenderer<Page<D>>,
    effects: Arc<Mutex<VecDeque<EffectFuture>>>,
}

impl<D: Clone + Send + 'static> RouterHarness<D> {
    pub(crate) fn start(router: Router<D>, path: &str) -> Self {
        let effects = Arc::new(Mutex::new(VecDeque::new()));
        let queue = effects.clone();
        let spawner: BoxedSpawner = Box::new(move |future| {
            queue.lock().unwrap().push_back(future);
        });

        let renderer = TestRenderer::new();
        let driver = TestMvuRuntime::new(
            NavigationState::at(path),
            router,
            renderer.clone(),
            spawner,
        )
        .run();

        Self {
            driver,
            renderer,
            effects,
        }
    }

    /// Navigate through the navigator handed to the last render, the way a
    /// link activation would.
    pub(crate) fn navigate(&mut self, path: &str) {
        self.renderer
            .with_last(|page| page.navigator.navigate(path))
            .expect("an initial render");
        self.driver.process_events();
    }

    pub(crate) fn pending_effects(&self) -> usize {
        self.effects.lock().unwrap().len()
    }

    /// Run the queued effect at `index` to completion and process what it emitted.
    pub(crate) fn settle(&mut self, index: usize) {
        let future = self
            .effects
            .lock()
            .unwrap()
            .remove(index)
            .expect("a queued effect at that index");
        futures::executor::block_on(future);
        self.driver.process_events();
    }

    /// Settle every queued effect in spawn order.
    pub(crate) fn settle_all(&mut self) {
        while self.pending_effects() > 0 {
            self.settle(0);
        }
    }

    pub(crate) fn last_node(&self) -> Node {
        self.renderer
            .with_last(|page| page.node.clone())
            .expect("at least one render")
    }

    pub(crate) fn heading(&self) -> String {
        self.last_node()
            .find_all("h1")
            .first()
            .map(|h1| Node::Element((*h1).clone()).text_content())
            .unwrap_or_default()
    }
}

/// Text of every `<li>` in `node`.
pub(crate) fn list_items(node: &Node) -> Vec<String> {
    node.find_all("li")
        .into_iter()
        .map(|li| Node::Element(li.clone()).text_content())
        .collect()
}

/// A router run with the blocking test spawner, for flows where loader
/// timing does not matter.
pub(crate) fn run_blocking<D: Clone + Send + 'static>(
    router: Router<D>,
    path: &str,
) -> TestRenderer<Page<D>> {
    let renderer = TestRenderer::new();
    let mut driver = TestMvuRuntime::new(
        NavigationState::at(path),
        router,
        renderer.clone(),
        create_test_spawner(),
    )
    .run();
    driver.process_events();
    renderer
}
