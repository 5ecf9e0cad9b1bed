//! The observer trait and the sink each structure notifies through.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use crate::types::{EventLevel, OpEvent};

use super::OperationLog;

/// Receives events from a structure as they happen.
pub trait OperationObserver {
    /// Called once per event, in emission order.
    fn on_event(&mut self, event: &OpEvent);
}

/// A log shared between several structures of one session.
pub type SharedLog = Rc<RefCell<OperationLog>>;

impl<T: OperationObserver + ?Sized> OperationObserver for Rc<RefCell<T>> {
    fn on_event(&mut self, event: &OpEvent) {
        self.borrow_mut().on_event(event);
    }
}

impl OperationObserver for Vec<OpEvent> {
    fn on_event(&mut self, event: &OpEvent) {
        self.push(event.clone());
    }
}

/// Optional observer owned by a structure. Every event is also forwarded to
/// the `log` facade, whether or not an observer is attached.
#[derive(Default)]
pub(crate) struct EventSink {
    observer: Option<Box<dyn OperationObserver>>,
}

impl EventSink {
    pub(crate) fn set(&mut self, observer: Box<dyn OperationObserver>) {
        self.observer = Some(observer);
    }

    pub(crate) fn take(&mut self) -> Option<Box<dyn OperationObserver>> {
        self.observer.take()
    }

    pub(crate) fn emit(&mut self, event: OpEvent) {
        match event.level {
            EventLevel::Info => log::info!("{}", event),
            EventLevel::Warning => log::warn!("{}", event),
            EventLevel::Error => log::error!("{}", event),
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.on_event(&event);
        }
    }
}

impl fmt::Debug for EventSink {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("EventSink")
            .field("attached", &self.observer.is_some())
            .finish()
    }
}
