//! Terminal spinner shown while a one-shot `--run` is in flight.
//!
//! The label follows the pipeline: every `StageEntered` event received on the
//! bus replaces the text next to the spinner.

use std::io::Write;
use std::time::Duration;

use tokio::sync::{broadcast, watch};
use tokio::task::JoinHandle;

use crate::events::{Event, Stage};

const FRAMES: &[&str] = &["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

const INTERVAL: Duration = Duration::from_millis(80);

/// Label shown for a stage.
pub fn stage_label(stage: Stage) -> &'static str {
    match stage {
        Stage::Searching => "searching this week's news",
        Stage::Formatting => "reading results",
        Stage::Prompting => "drafting the prompt",
        Stage::Generating => "writing the post",
        Stage::Parsing => "checking the reply",
    }
}

/// Writes to stderr so the JSON on stdout stays clean for piping.
pub struct Spinner {
    handle: JoinHandle<()>,
    cancel: watch::Sender<bool>,
}

impl Spinner {
    pub fn follow(mut events: broadcast::Receiver<Event>) -> Self {
        let (cancel_tx, mut cancel_rx) = watch::channel(false);

        let handle = tokio::spawn(async move {
            let mut label = "starting";
            let mut i = 0;
            loop {
                let frame = FRAMES[i % FRAMES.len()];
                eprint!("\x1b[2K\r{frame} {label}");
                let _ = std::io::stderr().flush();

                tokio::select! {
                    _ = tokio::time::sleep(INTERVAL) => {}
                    event = events.recv() => match event {
                        Ok(Event::StageEntered { stage, .. }) => label = stage_label(stage),
                        Ok(_) | Err(broadcast::error::RecvError::Lagged(_)) => {}
                        Err(broadcast::error::RecvError::Closed) => break,
                    },
                    _ = cancel_rx.changed() => break,
                }
                i += 1;
            }
            eprint!("\x1b[2K\r");
            let _ = std::io::stderr().flush();
        });

        Self {
            handle,
            cancel: cancel_tx,
        }
    }

    /// Stop the spinner and clear its line.
    pub async fn stop(self) {
        let _ = self.cancel.send(true);
        let _ = self.handle.await;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::events::EventBus;

    #[test]
    fn frames_are_single_braille_chars() {
        for frame in FRAMES {
            assert_eq!(frame.chars().count(), 1);
        }
    }

    #[test]
    fn every_stage_has_a_label() {
        for stage in [
            Stage::Searching,
            Stage::Formatting,
            Stage::Prompting,
            Stage::Generating,
            Stage::Parsing,
        ] {
            assert!(!stage_label(stage).is_empty());
        }
    }

    #[tokio::test]
    async fn follows_events_and_stops() {
        let bus = EventBus::default();
        let spinner = Spinner::follow(bus.subscribe());
        bus.emit(Event::StageEntered {
            topic: "t".to_string(),
            stage: Stage::Generating,
        });
        tokio::time::sleep(Duration::from_millis(200)).await;
        spinner.stop().await;
    }

    #[tokio::test]
    async fn exits_when_bus_is_dropped() {
        let bus = EventBus::default();
        let spinner = Spinner::follow(bus.subscribe());
        drop(bus);
        spinner.stop().await;
    }
}
