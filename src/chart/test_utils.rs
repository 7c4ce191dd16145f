use std::{cell::RefCell, rc::Rc};

use charming::Chart;

use crate::{
    Error,
    chart::{ChartRenderer, DrawingSurface},
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Event {
    Create(usize),
    Destroy(usize),
}

/// A renderer that records every create and destroy call.
///
/// Instances are numbered in creation order.
#[derive(Debug, Default)]
pub(crate) struct RecordingRenderer {
    events: Rc<RefCell<Vec<Event>>>,
    next_id: usize,
    fail_next: bool,
}

impl RecordingRenderer {
    /// A handle to the recorded events that outlives the renderer.
    pub(crate) fn events(&self) -> Rc<RefCell<Vec<Event>>> {
        self.events.clone()
    }

    pub(crate) fn fail_next_create(&mut self) {
        self.fail_next = true;
    }

    pub(crate) fn live_instances(&self) -> usize {
        let events = self.events.borrow();
        let created = events
            .iter()
            .filter(|event| matches!(event, Event::Create(_)))
            .count();

        created - (events.len() - created)
    }
}

impl ChartRenderer for RecordingRenderer {
    type Instance = usize;

    fn create(&mut self, surface: &DrawingSurface, _chart: &Chart) -> Result<usize, Error> {
        if self.fail_next {
            self.fail_next = false;
            return Err(Error::SurfaceUnavailable(surface.id().to_owned()));
        }

        let id = self.next_id;
        self.next_id += 1;
        self.events.borrow_mut().push(Event::Create(id));

        Ok(id)
    }

    fn destroy(&mut self, instance: usize) {
        self.events.borrow_mut().push(Event::Destroy(instance));
    }
}
