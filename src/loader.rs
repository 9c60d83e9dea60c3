//! Route loaders and the effect that runs them.

use core::future::Future;
use core::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use futures_util::future::{select, BoxFuture, Either};

use crate::error::LoaderError;
use crate::navigation::NavEvent;
use crate::params::Params;
use crate::route::RouteId;
use crate::Effect;

/// What a loader gets to work with: the navigated path and the parameters
/// bound for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderArgs {
    pub path: String,
    pub params: Params,
}

pub type LoaderFuture<D> = BoxFuture<'static, Result<D, LoaderError>>;

pub type LoaderFn<D> = Arc<dyn Fn(LoaderArgs) -> LoaderFuture<D> + Send + Sync>;

/// Host-provided timer used to bound loader runtime.
///
/// Closures returning a boxed future implement this automatically, the
/// same way closures implement [`Spawner`](crate::Spawner).
pub trait Timer: Send + Sync {
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send>>;
}

impl<F> Timer for F
where
    F: Fn(Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> + Send + Sync,
{
    fn sleep(&self, duration: Duration) -> Pin<Box<dyn Future<Output = ()> + Send>> {
        self(duration)
    }
}

/// Deadline applied to every loader.
#[derive(Clone)]
pub(crate) struct LoaderTimeout {
    pub(crate) duration: Duration,
    pub(crate) timer: Arc<dyn Timer>,
}

/// Run `loader` and report the outcome as a [`NavEvent::LoaderSettled`]
/// tagged with the navigation it belongs to.
pub(crate) fn loader_effect<D: Send + 'static>(
    loader: LoaderFn<D>,
    args: LoaderArgs,
    route: RouteId,
    seq: u64,
    timeout: Option<LoaderTimeout>,
) -> Effect<NavEvent<D>> {
    Effect::from_async(move |emitter| async move {
        let load = loader(args);
        let result = match timeout {
            Some(LoaderTimeout { duration, timer }) => {
                match select(load, timer.sleep(duration)).await {
                    Either::Left((result, _)) => result,
                    Either::Right(_) => Err(LoaderError::Timeout {
                        millis: u64::try_from(duration.as_millis()).unwrap_or(u64::MAX),
                    }),
                }
            }
            None => load.await,
        };
        emitter.emit(NavEvent::LoaderSettled { seq, route, result });
    })
}
