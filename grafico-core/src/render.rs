//! Renderer contract and the single-live-instance chart handle.

use grafico_types::GraficoError;

use crate::pipeline::{ChartData, ChartSeriesConfig};

/// Contract implemented by chart-drawing backends.
///
/// A renderer turns a configuration into a live chart instance and knows how
/// to tear an instance down. Instance lifecycle is *not* the renderer's
/// concern beyond these two calls; exclusive ownership and the
/// destroy-before-replace rule live in [`ChartHandle`].
pub trait ChartRenderer {
    /// Opaque live chart instance owned by the handle.
    type Instance;

    /// Draw a fresh chart instance from `config`.
    ///
    /// # Errors
    /// Implementations may fail for backend-specific reasons (lost canvas,
    /// closed terminal); the handle guarantees no stale instance survives a
    /// failed draw.
    fn draw(&mut self, config: &ChartSeriesConfig) -> Result<Self::Instance, GraficoError>;

    /// Tear down a previously drawn instance.
    fn destroy(&mut self, instance: Self::Instance);
}

/// Owned handle enforcing that at most one chart instance is ever live.
///
/// The raw instance is never exposed; [`replace`](Self::replace) destroys the
/// prior instance before constructing the next, so stale instances cannot
/// accumulate behind the renderer's back.
pub struct ChartHandle<R: ChartRenderer> {
    renderer: R,
    live: Option<R::Instance>,
}

impl<R: ChartRenderer> ChartHandle<R> {
    /// Wrap a renderer with no live instance yet.
    pub const fn new(renderer: R) -> Self {
        Self {
            renderer,
            live: None,
        }
    }

    /// True while a chart instance is live.
    #[must_use]
    pub const fn is_live(&self) -> bool {
        self.live.is_some()
    }

    /// Destroy the current instance (if any) and draw a new one from `config`.
    ///
    /// # Errors
    /// Propagates the renderer's draw failure; the prior instance is already
    /// destroyed at that point, leaving the handle empty rather than stale.
    pub fn replace(&mut self, config: &ChartSeriesConfig) -> Result<(), GraficoError> {
        if let Some(prev) = self.live.take() {
            self.renderer.destroy(prev);
        }
        self.live = Some(self.renderer.draw(config)?);
        Ok(())
    }

    /// Apply a pipeline outcome: draw when ready, leave the current chart
    /// untouched on [`ChartData::NoData`].
    ///
    /// # Errors
    /// Propagates the renderer's draw failure from [`replace`](Self::replace).
    pub fn render(&mut self, data: &ChartData) -> Result<(), GraficoError> {
        match data {
            ChartData::Ready(config) => self.replace(config),
            ChartData::NoData => Ok(()),
        }
    }

    /// Explicitly destroy the live instance, if any.
    pub fn clear(&mut self) {
        if let Some(prev) = self.live.take() {
            self.renderer.destroy(prev);
        }
    }

    /// Borrow the underlying renderer.
    pub const fn renderer(&self) -> &R {
        &self.renderer
    }
}

impl<R: ChartRenderer> Drop for ChartHandle<R> {
    fn drop(&mut self) {
        self.clear();
    }
}
