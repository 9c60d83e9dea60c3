//! Renderer abstraction for rendering Props.

#[cfg(any(test, feature = "testing"))]
use portable_atomic_util::Arc;
#[cfg(any(test, feature = "testing"))]
use spin::Mutex;

/// Renderer abstraction for rendering Props.
///
/// Implement this trait to mount pages into your rendering system (DOM
/// bindings, terminal, a string buffer for server output, etc.).
///
/// The [`render`](Self::render) method is called whenever the model changes, receiving
/// fresh Props derived from the current state via [`MvuLogic::view`](crate::MvuLogic::view).
///
/// # Example
///
/// ```rust
/// use wayfinder::{Page, Renderer};
///
/// struct ConsoleRenderer;
///
/// impl Renderer<Page<()>> for ConsoleRenderer {
///     fn render(&mut self, page: Page<()>) {
///         println!("{} -> {}", page.path, page.node.to_html());
///     }
/// }
/// ```
pub trait Renderer<Props> {
    /// Render the given props.
    fn render(&mut self, props: Props);
}

impl<Props, T> Renderer<Props> for Box<T>
where
    T: Renderer<Props> + ?Sized,
{
    fn render(&mut self, props: Props) {
        (**self).render(props)
    }
}

#[cfg(any(test, feature = "testing"))]
/// Test renderer that captures all rendered Props for assertions.
///
/// Only available with the `testing` feature.
///
/// Clones share the same capture storage, so hand one clone (or
/// [`boxed`](Self::boxed)) to the runtime and keep another for assertions.
pub struct TestRenderer<Props> {
    renders: Arc<Mutex<Vec<Props>>>,
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Clone for TestRenderer<Props> {
    fn clone(&self) -> Self {
        Self {
            renders: self.renders.clone(),
        }
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props> Renderer<Props> for TestRenderer<Props> {
    fn render(&mut self, props: Props) {
        self.renders.lock().push(props);
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> Default for TestRenderer<Props> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(any(test, feature = "testing"))]
impl<Props: 'static + Send> TestRenderer<Props> {
    pub fn new() -> Self {
        Self {
            renders: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Get a boxed renderer sharing this renderer's capture storage.
    pub fn boxed(&self) -> Box<dyn Renderer<Props> + Send> {
        Box::new(self.clone())
    }

    /// Get the number of renders that have occurred.
    pub fn count(&self) -> usize {
        self.renders.lock().len()
    }

    /// Access the captured renders with a closure.
    ///
    /// The closure receives all captured Props in render order. Use it to
    /// make assertions or to invoke callbacks embedded in Props.
    pub fn with_renders<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&Vec<Props>) -> R,
    {
        let renders = self.renders.lock();
        f(&renders)
    }

    /// Access the most recent render, if any.
    pub fn with_last<F, R>(&self, f: F) -> Option<R>
    where
        F: FnOnce(&Props) -> R,
    {
        let renders = self.renders.lock();
        renders.last().map(f)
    }
}
