//! Transcript capture capability.
//!
//! Speech (or any other capture) produces a stream of interim transcripts that
//! converge to a final one. Consumers subscribe to the stream and decide when
//! to parse; the parser itself never sees this machinery.

use anyhow::{bail, Result};
use std::collections::VecDeque;
use std::sync::mpsc::{channel, Receiver, Sender};
use tracing::debug;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TranscriptEvent {
    /// Best guess so far; will be superseded
    Interim(String),
    /// Settled transcript for one utterance
    Final(String),
    Error(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CaptureStatus {
    #[default]
    Idle,
    Listening,
    Stopped,
    Error,
}

/// A source of transcripts with a start/stop/reset lifecycle.
pub trait TranscriptSource {
    fn is_supported(&self) -> bool;
    fn start(&mut self) -> Result<()>;
    fn stop(&mut self);
    /// Drop any captured text and return to `Idle`.
    fn reset(&mut self);
    fn status(&self) -> CaptureStatus;
    /// Receive every event emitted after this call.
    fn subscribe(&mut self) -> Receiver<TranscriptEvent>;
}

/// Replays queued utterances as if they were spoken.
///
/// `start` takes the next utterance and emits one interim event per growing
/// word prefix, leaving the source `Listening`. `stop` emits the final event
/// with the whole utterance; `reset` drops it unheard.
#[derive(Debug, Default)]
pub struct ScriptedTranscript {
    pending: VecDeque<String>,
    current: Option<String>,
    subscribers: Vec<Sender<TranscriptEvent>>,
    status: CaptureStatus,
    unsupported: bool,
}

impl ScriptedTranscript {
    pub fn new() -> Self {
        Self::default()
    }

    /// A source that reports capture as unavailable.
    pub fn unsupported() -> Self {
        Self {
            unsupported: true,
            ..Self::default()
        }
    }

    pub fn push_utterance(&mut self, text: impl Into<String>) {
        self.pending.push_back(text.into());
    }

    pub fn pending(&self) -> usize {
        self.pending.len()
    }

    fn emit(&mut self, event: TranscriptEvent) {
        self.subscribers.retain(|tx| tx.send(event.clone()).is_ok());
    }
}

impl TranscriptSource for ScriptedTranscript {
    fn is_supported(&self) -> bool {
        !self.unsupported
    }

    fn start(&mut self) -> Result<()> {
        if self.unsupported {
            bail!("transcript capture is not supported");
        }
        if self.status == CaptureStatus::Listening {
            return Ok(());
        }

        let Some(utterance) = self.pending.pop_front() else {
            self.status = CaptureStatus::Error;
            self.emit(TranscriptEvent::Error("no speech detected".to_string()));
            return Ok(());
        };

        debug!(words = utterance.split_whitespace().count(), "replaying utterance");
        self.status = CaptureStatus::Listening;

        let words: Vec<&str> = utterance.split_whitespace().collect();
        for n in 1..words.len() {
            self.emit(TranscriptEvent::Interim(words[..n].join(" ")));
        }
        self.current = Some(utterance);
        Ok(())
    }

    fn stop(&mut self) {
        if self.status != CaptureStatus::Listening {
            return;
        }
        if let Some(utterance) = self.current.take() {
            self.emit(TranscriptEvent::Final(utterance));
        }
        self.status = CaptureStatus::Stopped;
    }

    fn reset(&mut self) {
        self.current = None;
        self.status = CaptureStatus::Idle;
    }

    fn status(&self) -> CaptureStatus {
        self.status
    }

    fn subscribe(&mut self) -> Receiver<TranscriptEvent> {
        let (tx, rx) = channel();
        self.subscribers.push(tx);
        rx
    }
}
