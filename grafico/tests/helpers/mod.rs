// Re-export helpers so tests can `use helpers::*;`

use std::cell::RefCell;
use std::rc::Rc;

use grafico::{ChartHandle, ChartRenderer, ChartSeriesConfig, GraficoError, QuarterlyReport};

/// Common symbol constants used across tests.
pub const IBM: &str = "IBM";

/// Chart lifecycle events recorded by [`RecordingRenderer`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChartEvent {
    /// A chart instance was drawn; carries its sequence number.
    Drew(u32),
    /// A chart instance was destroyed.
    Destroyed(u32),
}

/// Renderer that records draw/destroy ordering instead of drawing.
pub struct RecordingRenderer {
    events: Rc<RefCell<Vec<ChartEvent>>>,
    next_id: u32,
}

impl ChartRenderer for RecordingRenderer {
    type Instance = u32;

    fn draw(&mut self, _config: &ChartSeriesConfig) -> Result<u32, GraficoError> {
        let id = self.next_id;
        self.next_id += 1;
        self.events.borrow_mut().push(ChartEvent::Drew(id));
        Ok(id)
    }

    fn destroy(&mut self, instance: u32) {
        self.events.borrow_mut().push(ChartEvent::Destroyed(instance));
    }
}

/// A chart handle plus the shared event log of its renderer.
pub fn recording_handle() -> (ChartHandle<RecordingRenderer>, Rc<RefCell<Vec<ChartEvent>>>) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let renderer = RecordingRenderer {
        events: events.clone(),
        next_id: 0,
    };
    (ChartHandle::new(renderer), events)
}

/// Shorthand income-statement report for readability in tests.
pub fn income(date: &str, net: &str, revenue: &str) -> QuarterlyReport {
    QuarterlyReport::income(date, net, revenue)
}

/// Shorthand balance-sheet report for readability in tests.
pub fn balance(date: &str, equity: &str) -> QuarterlyReport {
    QuarterlyReport::balance(date, equity)
}
