//! Progress notifications for a UI collaborator.
//!
//! # Event script
//!
//! | Percent            | Message                            | When                         |
//! |--------------------|------------------------------------|------------------------------|
//! | 5                  | `Analyzing Infrastructure...`      | before resources are loaded  |
//! | 10                 | `Reserving Free Slots...`          | before the lunch pass        |
//! | 10 + ⌊80·i/n⌋      | `Scheduling <section>: <subject>`  | every `progress_interval` lessons |
//! | 100                | `Done`                             | once, after the last lesson  |
//!
//! Delivery is push-only and best effort.  The engine never waits on a sink
//! and never looks at whether an event arrived.

use std::sync::mpsc::Sender;

use serde::{Deserialize, Serialize};

pub(crate) const ANALYZING: (u8, &str) = (5, "Analyzing Infrastructure...");
pub(crate) const RESERVING: (u8, &str) = (10, "Reserving Free Slots...");
pub(crate) const DONE: (u8, &str) = (100, "Done");

const LOOP_FLOOR: usize = 10;
const LOOP_SPAN: usize = 80;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProgressEvent {
    pub percent: u8,
    pub message: String,
}

impl ProgressEvent {
    pub fn new(percent: u8, message: impl Into<String>) -> Self {
        Self { percent: percent.min(100), message: message.into() }
    }

    pub(crate) fn from_step((percent, message): (u8, &str)) -> Self {
        Self::new(percent, message)
    }
}

/// Percent reported after `done` of `total` lessons: the loop maps linearly
/// onto `[10, 90]`.
pub fn loop_percent(done: usize, total: usize) -> u8 {
    if total == 0 {
        return LOOP_FLOOR as u8;
    }
    let scaled = done.min(total) * LOOP_SPAN / total;
    (scaled + LOOP_FLOOR) as u8
}

/// Receiver of progress events.
///
/// The default implementation drops events so implementors only override
/// what they need.
pub trait ProgressSink {
    fn notify(&mut self, _event: ProgressEvent) {}
}

impl<P: ProgressSink + ?Sized> ProgressSink for &mut P {
    fn notify(&mut self, event: ProgressEvent) {
        (**self).notify(event);
    }
}

/// Collects every event; handy for tests and batch callers.
impl ProgressSink for Vec<ProgressEvent> {
    fn notify(&mut self, event: ProgressEvent) {
        self.push(event);
    }
}

/// A [`ProgressSink`] that does nothing.
pub struct NoopProgress;

impl ProgressSink for NoopProgress {}

/// Forwards events over an `mpsc` channel.
///
/// A dropped receiver is not an error: the send result is discarded and the
/// run carries on.
pub struct ChannelProgress {
    tx: Sender<ProgressEvent>,
}

impl ChannelProgress {
    pub fn new(tx: Sender<ProgressEvent>) -> Self {
        Self { tx }
    }
}

impl ProgressSink for ChannelProgress {
    fn notify(&mut self, event: ProgressEvent) {
        let _ = self.tx.send(event);
    }
}
