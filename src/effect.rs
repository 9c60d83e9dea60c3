//! Declarative effect system for describing deferred event processing.

use core::future::Future;
use core::pin::Pin;

use futures_util::future::join_all;

use crate::Emitter;

/// The boxed future an [`Effect`] resolves to once it is handed an [`Emitter`].
pub type EffectFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;

/// Declarative description of events to be processed.
///
/// Effects describe asynchronous or deferred work that will produce events.
/// They are returned from [`MvuLogic::init`](crate::MvuLogic::init) and
/// [`MvuLogic::update`](crate::MvuLogic::update) alongside the new model state,
/// and the runtime hands the resulting future to its [`Spawner`](crate::Spawner).
///
/// # Example
///
/// ```rust
/// use wayfinder::Effect;
///
/// #[derive(Clone)]
/// enum Event {
///     LoadData,
///     DataLoaded(String),
/// }
///
/// // Trigger a follow-up event
/// let effect = Effect::just(Event::LoadData);
///
/// // Run async work and report back
/// let effect = Effect::from_async(|emitter| async move {
///     emitter.emit(Event::DataLoaded("fetched".to_string()));
/// });
///
/// // Combine multiple effects
/// let effect = Effect::batch(vec![
///     Effect::just(Event::LoadData),
///     Effect::just(Event::DataLoaded("cached".to_string())),
/// ]);
///
/// // No side effects
/// let effect: Effect<Event> = Effect::none();
/// ```
#[allow(clippy::type_complexity)]
pub struct Effect<Event: Send>(Option<Box<dyn FnOnce(Emitter<Event>) -> EffectFuture + Send>>);

impl<Event: Send + 'static> Effect<Event> {
    /// Turn the effect into a future that emits its events through `emitter`.
    pub fn execute(self, emitter: &Emitter<Event>) -> EffectFuture {
        match self.0 {
            Some(run) => run(emitter.clone()),
            None => Box::pin(async {}),
        }
    }

    /// Whether this effect does nothing when executed.
    pub fn is_none(&self) -> bool {
        self.0.is_none()
    }

    /// Create an effect that emits a single event.
    ///
    /// Useful for triggering immediate follow-up events.
    pub fn just(event: Event) -> Self {
        Self(Some(Box::new(move |emitter: Emitter<Event>| {
            Box::pin(async move {
                emitter.emit(event);
            }) as EffectFuture
        })))
    }

    /// Create an effect from asynchronous work.
    ///
    /// The closure receives its own [`Emitter`] and may emit any number of
    /// events before its future completes.
    pub fn from_async<F, Fut>(f: F) -> Self
    where
        F: FnOnce(Emitter<Event>) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self(Some(Box::new(move |emitter: Emitter<Event>| {
            Box::pin(f(emitter)) as EffectFuture
        })))
    }

    /// Create an empty effect.
    ///
    /// Prefer this when semantically indicating "no side effects".
    pub fn none() -> Self {
        Self(None)
    }

    /// Combine multiple effects into a single effect.
    ///
    /// All futures are driven concurrently; events are queued in the order
    /// each future emits them.
    pub fn batch(effects: Vec<Effect<Event>>) -> Self {
        let effects: Vec<_> = effects.into_iter().filter(|e| !e.is_none()).collect();
        if effects.is_empty() {
            return Self::none();
        }
        Self(Some(Box::new(move |emitter: Emitter<Event>| {
            let futures: Vec<_> = effects
                .into_iter()
                .map(|effect| effect.execute(&emitter))
                .collect();
            Box::pin(async move {
                join_all(futures).await;
            }) as EffectFuture
        })))
    }
}
