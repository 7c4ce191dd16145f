//! Ownership of the chart instance bound to a drawing surface.

use charming::Chart;

use crate::Error;

/// The element a chart instance draws on, identified by its HTML id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawingSurface {
    id: String,
}

impl DrawingSurface {
    /// A surface for the element with the HTML ID `id`.
    pub fn new(id: &str) -> Self {
        Self { id: id.to_owned() }
    }

    /// The HTML ID of the element.
    pub fn id(&self) -> &str {
        &self.id
    }
}

/// The seam to an external charting library.
///
/// A renderer creates chart instances on a surface and destroys them again.
/// Each instance it returns must be passed back to [ChartRenderer::destroy]
/// exactly once.
pub trait ChartRenderer {
    /// A live chart bound to a surface.
    type Instance;

    /// Create a chart instance drawing `chart` on `surface`.
    ///
    /// # Errors
    /// Returns [Error::SurfaceUnavailable] if the renderer cannot draw on
    /// `surface`.
    fn create(&mut self, surface: &DrawingSurface, chart: &Chart)
    -> Result<Self::Instance, Error>;

    /// Release the resources held by `instance`.
    fn destroy(&mut self, instance: Self::Instance);
}

/// Holds at most one chart instance for a drawing surface.
///
/// Rendering destroys the current instance before creating its replacement,
/// and dropping the slot destroys the live instance.
pub struct ChartSlot<R: ChartRenderer> {
    renderer: R,
    surface: DrawingSurface,
    instance: Option<R::Instance>,
}

impl<R: ChartRenderer> ChartSlot<R> {
    /// Create an empty slot for `surface`.
    pub fn new(renderer: R, surface: DrawingSurface) -> Self {
        Self {
            renderer,
            surface,
            instance: None,
        }
    }

    /// Replace the current chart with `chart`.
    ///
    /// If the renderer cannot draw on the surface, the failure is logged and
    /// the slot is left empty.
    ///
    /// # Errors
    /// Returns the renderer's error if the instance could not be created.
    pub fn render(&mut self, chart: &Chart) -> Result<&R::Instance, Error> {
        self.release();

        match self.renderer.create(&self.surface, chart) {
            Ok(instance) => Ok(self.instance.insert(instance)),
            Err(error) => {
                tracing::warn!(
                    "could not create chart on surface \"{}\": {error}",
                    self.surface.id()
                );
                Err(error)
            }
        }
    }

    /// Destroy the current chart instance, if any.
    pub fn release(&mut self) {
        if let Some(instance) = self.instance.take() {
            tracing::debug!("destroying chart on surface \"{}\"", self.surface.id());
            self.renderer.destroy(instance);
        }
    }

    /// The live chart instance, if any.
    pub fn instance(&self) -> Option<&R::Instance> {
        self.instance.as_ref()
    }

    /// Whether a chart instance is live.
    pub fn is_mounted(&self) -> bool {
        self.instance.is_some()
    }

    /// The surface charts are drawn on.
    pub fn surface(&self) -> &DrawingSurface {
        &self.surface
    }

    /// The renderer that creates the chart instances.
    pub fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartSlot<R> {
    fn drop(&mut self) {
        self.release();
    }
}
