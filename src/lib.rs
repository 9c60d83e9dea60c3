//! A client-side router with route loaders, built on a small
//! Model-View-Update (MVU) runtime.
//!
//! Navigation is a message: every link activation or programmatic
//! navigation becomes a [`NavEvent::Navigate`] dispatched into the
//! [`Router`]'s transition function. The router matches the path against an
//! immutable [`RouteTable`], binds [`Params`], starts the loaders of the
//! matched routes as [`Effect`]s and hands the runtime a fresh
//! [`NavigationState`]. Loader results come back as
//! [`NavEvent::LoaderSettled`] and are applied only if they belong to the
//! navigation that is still current.
//!
//! ## Example
//!
//! ```rust
//! use wayfinder::{create_test_spawner, NavigationState, Node, RouteEntry, RouteTable, Router,
//!     TestMvuRuntime, TestRenderer, ViewContext};
//!
//! fn contact(ctx: &ViewContext<'_, ()>) -> Node {
//!     let id = ctx.params().parse_or::<u32>("contactId", 0);
//!     Node::text(format!("contact {id}"))
//! }
//!
//! let table = RouteTable::build(vec![
//!     RouteEntry::new("/contacts/:contactId", contact),
//!     RouteEntry::new("*", |_| Node::text("not found")),
//! ]).unwrap();
//!
//! let renderer = TestRenderer::new();
//! let driver = TestMvuRuntime::new(
//!     NavigationState::at("/contacts/42"),
//!     Router::new(table),
//!     renderer.clone(),
//!     create_test_spawner(),
//! ).run();
//!
//! renderer.with_renders(|renders| {
//!     assert_eq!(renders[0].node.text_content(), "contact 42");
//! });
//! # drop(driver);
//! ```
//!
//! In an application, replace the test runtime with [`MvuRuntime`], a
//! [`Spawner`] for your executor and a [`Renderer`] that mounts
//! [`Page::node`].

// Module declarations
pub mod apps;
mod config;
mod effect;
mod emitter;
mod error;
mod http;
mod loader;
mod logic;
mod navigation;
mod params;
mod renderer;
pub mod route;
mod router;
mod runtime;
mod view;

// Public re-exports
pub use config::RouterConfig;
pub use effect::{Effect, EffectFuture};
pub use emitter::Emitter;
pub use error::{ConfigError, LoaderError, PatternError, RouteTableError};
pub use http::{fetch_json, HttpClient, HttpResponse};
pub use loader::{LoaderArgs, LoaderFn, LoaderFuture, Timer};
pub use logic::MvuLogic;
pub use navigation::{LoadState, NavEvent, NavigationState, ViewContext};
pub use params::Params;
pub use renderer::Renderer;
pub use route::{RouteEntry, RouteId, RouteMatch, RouteTable};
pub use router::{Navigator, Page, Router};
pub use runtime::{MvuRuntime, Spawner};
pub use view::{Element, Node};

// Test utilities (only available with 'testing' feature or during tests)
#[cfg(any(test, feature = "testing"))]
pub use renderer::TestRenderer;
#[cfg(any(test, feature = "testing"))]
pub use runtime::{create_test_spawner, TestMvuDriver, TestMvuRuntime};
