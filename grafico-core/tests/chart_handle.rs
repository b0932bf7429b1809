use std::cell::{Cell, RefCell};
use std::rc::Rc;

use grafico_core::{ChartData, ChartHandle, ChartRenderer, ChartSeriesConfig, pipeline};
use grafico_types::{GraficoError, QuarterlyReport};

#[derive(Debug, Clone, PartialEq, Eq)]
enum Event {
    Drew(u32),
    Destroyed(u32),
}

/// Renderer that records draw/destroy ordering and can be told to fail.
struct RecordingRenderer {
    events: Rc<RefCell<Vec<Event>>>,
    fail_next: Rc<Cell<bool>>,
    next_id: u32,
}

impl RecordingRenderer {
    fn new(events: Rc<RefCell<Vec<Event>>>, fail_next: Rc<Cell<bool>>) -> Self {
        Self {
            events,
            fail_next,
            next_id: 0,
        }
    }
}

impl ChartRenderer for RecordingRenderer {
    type Instance = u32;

    fn draw(&mut self, _config: &ChartSeriesConfig) -> Result<u32, GraficoError> {
        if self.fail_next.replace(false) {
            return Err(GraficoError::Other("canvas lost".to_owned()));
        }
        let id = self.next_id;
        self.next_id += 1;
        self.events.borrow_mut().push(Event::Drew(id));
        Ok(id)
    }

    fn destroy(&mut self, instance: u32) {
        self.events.borrow_mut().push(Event::Destroyed(instance));
    }
}

fn recording_handle() -> (
    ChartHandle<RecordingRenderer>,
    Rc<RefCell<Vec<Event>>>,
    Rc<Cell<bool>>,
) {
    let events = Rc::new(RefCell::new(Vec::new()));
    let fail_next = Rc::new(Cell::new(false));
    let handle = ChartHandle::new(RecordingRenderer::new(events.clone(), fail_next.clone()));
    (handle, events, fail_next)
}

fn some_config() -> ChartSeriesConfig {
    let income = vec![QuarterlyReport::income("2023-12-31", "1000000", "2000000")];
    let balance = vec![QuarterlyReport::balance("2023-12-31", "3000000")];
    pipeline::build(&income, &balance, None)
        .expect("build")
        .config()
        .expect("ready")
        .clone()
}

#[test]
fn replace_destroys_the_prior_instance_first() {
    let (mut handle, events, _) = recording_handle();
    let config = some_config();

    handle.replace(&config).expect("first draw");
    handle.replace(&config).expect("second draw");

    assert_eq!(
        *events.borrow(),
        vec![Event::Drew(0), Event::Destroyed(0), Event::Drew(1)]
    );
    assert!(handle.is_live());
}

#[test]
fn no_data_leaves_the_current_chart_untouched() {
    let (mut handle, events, _) = recording_handle();
    let config = some_config();

    handle.replace(&config).expect("draw");
    handle.render(&ChartData::NoData).expect("no-op");

    assert_eq!(*events.borrow(), vec![Event::Drew(0)]);
    assert!(handle.is_live());
}

#[test]
fn failed_draw_leaves_no_stale_instance() {
    let (mut handle, events, fail_next) = recording_handle();
    let config = some_config();

    handle.replace(&config).expect("first draw");
    fail_next.set(true);
    assert!(handle.replace(&config).is_err());

    // The prior instance was destroyed before the failed draw; nothing is live.
    assert_eq!(*events.borrow(), vec![Event::Drew(0), Event::Destroyed(0)]);
    assert!(!handle.is_live());
}

#[test]
fn dropping_the_handle_tears_down_the_live_instance() {
    let (mut handle, events, _) = recording_handle();
    handle.replace(&some_config()).expect("draw");

    drop(handle);
    assert_eq!(*events.borrow(), vec![Event::Drew(0), Event::Destroyed(0)]);
}

#[test]
fn clear_is_idempotent() {
    let (mut handle, events, _) = recording_handle();
    handle.replace(&some_config()).expect("draw");

    handle.clear();
    handle.clear();

    assert_eq!(*events.borrow(), vec![Event::Drew(0), Event::Destroyed(0)]);
    assert!(!handle.is_live());
}
