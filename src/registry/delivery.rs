//! Single-slot delivery of a module's resolved data.

use std::cell::RefCell;
use std::sync::mpsc::{self, Receiver, SyncSender, TryRecvError};

use super::module::ResolvedData;

/// Receiving end paired with a module registered through
/// [`Registry::main`](crate::Registry::main).
///
/// The slot holds one value and is closed right after the resolution pass
/// writes to it, so resolution never blocks on the consumer.
///
/// # Example
///
/// ```
/// use envexist::Registry;
/// use std::collections::HashMap;
///
/// let env = HashMap::from([("APP_MODE".to_string(), "dev".to_string())]);
/// let mut registry = Registry::with_source(env);
///
/// let (mut app, delivery) = registry.main("app");
/// app.need("mode", "run mode", "production");
///
/// assert!(registry.resolve());
/// let data = delivery.recv().unwrap();
/// assert_eq!(data["MODE"], "dev");
/// ```
#[derive(Debug)]
pub struct Delivery {
    rx: Receiver<ResolvedData>,
    // Data pulled off the channel by `is_closed`, handed out first.
    pending: RefCell<Option<ResolvedData>>,
}

impl Delivery {
    /// Create a connected sender/delivery pair.
    pub(crate) fn channel() -> (SyncSender<ResolvedData>, Self) {
        let (tx, rx) = mpsc::sync_channel(1);
        (
            tx,
            Self {
                rx,
                pending: RefCell::new(None),
            },
        )
    }

    /// Block until the data arrives.
    ///
    /// Returns `None` once the module can no longer be notified, e.g. the
    /// registry was released or dropped. Calling this on the thread that
    /// still has to run the resolution pass blocks forever.
    pub fn recv(&self) -> Option<ResolvedData> {
        self.pending.take().or_else(|| self.rx.recv().ok())
    }

    /// Take the data if it has been delivered, without blocking.
    pub fn try_recv(&self) -> Option<ResolvedData> {
        self.pending.take().or_else(|| self.rx.try_recv().ok())
    }

    /// Whether the sending side is gone and nothing is left to receive.
    ///
    /// Delivered data stays available to [`recv`](Self::recv).
    pub fn is_closed(&self) -> bool {
        if self.pending.borrow().is_some() {
            return false;
        }
        match self.rx.try_recv() {
            Ok(data) => {
                self.pending.replace(Some(data));
                false
            }
            Err(TryRecvError::Empty) => false,
            Err(TryRecvError::Disconnected) => true,
        }
    }
}
