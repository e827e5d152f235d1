//! Broadcast bus for pipeline progress.
//!
//! The pipeline emits via [`EventBus::emit`]; anyone interested subscribes
//! via [`EventBus::subscribe`]. Built on [`tokio::sync::broadcast`] so
//! emitting never blocks and costs nothing when nobody is listening.

use std::fmt;

use tokio::sync::broadcast;

use crate::error::PipelineError;

/// Steps of a single pipeline run, in the order they are entered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    Searching,
    Formatting,
    Prompting,
    Generating,
    Parsing,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Searching => "searching",
            Stage::Formatting => "formatting",
            Stage::Prompting => "prompting",
            Stage::Generating => "generating",
            Stage::Parsing => "parsing",
        };
        f.write_str(name)
    }
}

/// Events that flow out of a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    StageEntered { topic: String, stage: Stage },
    Done { topic: String },
    Failed {
        topic: String,
        stage: Stage,
        error: PipelineError,
    },
}

#[derive(Debug)]
pub struct EventBus {
    tx: broadcast::Sender<Event>,
}

impl EventBus {
    pub fn new(capacity: usize) -> Self {
        let (tx, _) = broadcast::channel(capacity);
        Self { tx }
    }

    /// Returns the number of receivers that will see the event.
    pub fn emit(&self, event: Event) -> usize {
        self.tx.send(event).unwrap_or(0)
    }

    /// Yields future events only; nothing is replayed.
    pub fn subscribe(&self) -> broadcast::Receiver<Event> {
        self.tx.subscribe()
    }
}

impl Default for EventBus {
    fn default() -> Self {
        Self::new(64)
    }
}
