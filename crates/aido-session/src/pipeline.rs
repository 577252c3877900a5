//! In-flight AI request tracking.
//!
//! Only the latest request may apply its result. Starting a new request or
//! ending the input session makes every earlier generation stale.

use tracing::debug;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RequestKind {
    /// Response replaces the field contents.
    Replace,
    /// Response is a list of replies for the text around the trigger.
    SmartReply,
    /// Response is a list of rewrites of the typed text.
    ToneRewrite,
}

impl RequestKind {
    pub fn yields_suggestions(self) -> bool {
        !matches!(self, RequestKind::Replace)
    }
}

/// A prompt ready for the AI client.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AiRequest {
    pub generation: u64,
    pub kind: RequestKind,
    pub prompt: String,
    /// Field text the response is meant for.
    pub target: String,
}

#[derive(Debug, Clone)]
struct InFlight {
    generation: u64,
    kind: RequestKind,
    target: String,
}

#[derive(Debug, Default)]
pub struct Pipeline {
    generation: u64,
    in_flight: Option<InFlight>,
    last_processed: Option<String>,
}

impl Pipeline {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn generation(&self) -> u64 {
        self.generation
    }

    pub fn is_busy(&self) -> bool {
        self.in_flight.is_some()
    }

    /// False when `text` already produced a request and has not changed since.
    pub fn is_new_text(&self, text: &str) -> bool {
        self.last_processed.as_deref() != Some(text)
    }

    /// Remember `text` as handled so repeated change events don't re-request.
    pub fn mark_processed(&mut self, text: &str) {
        self.last_processed = Some(text.to_string());
    }

    /// Start a request, superseding any in flight.
    pub fn begin(&mut self, kind: RequestKind, prompt: String, target: &str) -> AiRequest {
        self.generation += 1;
        if let Some(old) = self.in_flight.take() {
            debug!(old = old.generation, new = self.generation, "superseding request");
        }
        self.in_flight = Some(InFlight {
            generation: self.generation,
            kind,
            target: target.to_string(),
        });
        AiRequest {
            generation: self.generation,
            kind,
            prompt,
            target: target.to_string(),
        }
    }

    /// Claim the result for `generation`.
    ///
    /// Returns the request kind and target when it is the current request;
    /// a stale generation gets `None` and leaves the current one untouched.
    pub fn complete(&mut self, generation: u64) -> Option<(RequestKind, String)> {
        match &self.in_flight {
            Some(f) if f.generation == generation => {
                let f = self.in_flight.take()?;
                Some((f.kind, f.target))
            }
            _ => {
                debug!(generation, current = self.generation, "dropping stale result");
                None
            }
        }
    }

    /// Input session ended: any pending result must be dropped.
    pub fn end_session(&mut self) {
        self.generation += 1;
        self.in_flight = None;
        self.last_processed = None;
    }
}
