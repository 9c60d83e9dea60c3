//! Application logic trait defining the MVU contract.

use crate::{Effect, Emitter};

/// Application logic trait defining the MVU contract.
///
/// Implementations must provide three pure functions:
/// - [`init`](Self::init): Initialize the model and produce initial effects
/// - [`update`](Self::update): Transform (Event, Model) → (Model, Effect)
/// - [`view`](Self::view): Derive Props from Model with event emitter capability
///
/// [`Router`](crate::Router) is the implementation this crate ships.
pub trait MvuLogic<Event: Send, Model, Props> {
    /// Initialize the runtime from an initial model with effects and state changes as needed.
    ///
    /// This is called once when the runtime starts.
    fn init(&self, model: Model) -> (Model, Effect<Event>);

    /// Reduce an event to an updated model and side effects.
    ///
    /// All state changes must happen through this function.
    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>);

    /// Reduce to Props from the current model.
    ///
    /// The provided [`Emitter`] allows Props to contain callbacks that can
    /// trigger new events.
    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props;
}

impl<Event: Send, Model, Props, T> MvuLogic<Event, Model, Props> for Box<T>
where
    T: MvuLogic<Event, Model, Props> + ?Sized,
{
    fn init(&self, model: Model) -> (Model, Effect<Event>) {
        (**self).init(model)
    }

    fn update(&self, event: Event, model: &Model) -> (Model, Effect<Event>) {
        (**self).update(event, model)
    }

    fn view(&self, model: &Model, emitter: &Emitter<Event>) -> Props {
        (**self).view(model, emitter)
    }
}
