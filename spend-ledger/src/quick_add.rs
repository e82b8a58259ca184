//! Quick-add session: ties a transcript source to the parser.
//!
//! Interim transcripts update the visible text, but a draft is only produced
//! once capture has settled (final transcript, stop, or typed text).

use anyhow::Result;
use spend_core::{TranscriptEvent, TranscriptSource};
use spend_parse::parse_spend;
use std::sync::mpsc::Receiver;
use tracing::{debug, info};

use crate::review::Draft;

pub struct QuickAdd<S: TranscriptSource> {
    source: S,
    events: Receiver<TranscriptEvent>,
    text: String,
    listening: bool,
    error: Option<String>,
}

impl<S: TranscriptSource> QuickAdd<S> {
    pub fn new(mut source: S) -> Self {
        let events = source.subscribe();
        Self {
            source,
            events,
            text: String::new(),
            listening: false,
            error: None,
        }
    }

    pub fn source_mut(&mut self) -> &mut S {
        &mut self.source
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn is_listening(&self) -> bool {
        self.listening
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Clear the current text and begin a fresh capture.
    pub fn start_listening(&mut self) -> Result<()> {
        info!("capture start requested");
        self.reset();
        self.listening = true;
        if let Err(e) = self.source.start() {
            self.listening = false;
            return Err(e);
        }
        Ok(())
    }

    /// End capture. The source's final transcript arrives with the next `poll`.
    pub fn stop_listening(&mut self) {
        info!("capture stop requested");
        self.source.stop();
        self.listening = false;
    }

    /// Apply the next pending transcript event, if any.
    pub fn poll(&mut self) -> Option<TranscriptEvent> {
        let event = self.events.try_recv().ok()?;
        match &event {
            TranscriptEvent::Interim(t) => self.text = t.clone(),
            TranscriptEvent::Final(t) => {
                self.text = t.clone();
                self.listening = false;
            }
            TranscriptEvent::Error(e) => {
                debug!(error = %e, "capture failed");
                self.error = Some(e.clone());
                self.listening = false;
            }
        }
        Some(event)
    }

    /// Apply every pending event; returns how many were applied.
    pub fn drain(&mut self) -> usize {
        let mut n = 0;
        while self.poll().is_some() {
            n += 1;
        }
        n
    }

    /// Typed input replaces the transcript and ends any capture in progress.
    pub fn type_text(&mut self, text: &str) {
        if self.listening {
            self.stop_listening();
        }
        self.discard_pending();
        self.text = text.to_string();
    }

    /// Draft for the current text; `None` while listening or when the parse
    /// found neither an amount nor a merchant.
    pub fn current_draft(&self) -> Option<Draft> {
        if self.listening || self.text.trim().is_empty() {
            return None;
        }
        Draft::offer(&parse_spend(&self.text))
    }

    pub fn reset(&mut self) {
        self.source.reset();
        self.discard_pending();
        self.text.clear();
        self.listening = false;
        self.error = None;
    }

    fn discard_pending(&mut self) {
        while self.events.try_recv().is_ok() {}
    }
}
