use std::io;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{mpsc, Arc, Mutex};
use std::thread;

use tracing::debug;

use crate::api::AidoAiClient;

// ---------------------------------------------------------------------------
// Work / Result types
// ---------------------------------------------------------------------------

pub(crate) struct AiWork {
    pub prompt: String,
    pub generation: u64,
}

#[derive(Debug)]
pub(crate) struct AiResult {
    pub generation: u64,
    pub result: Result<String, String>,
}

// ---------------------------------------------------------------------------
// AiWorker
// ---------------------------------------------------------------------------

/// Background thread that talks to the AI client.
///
/// The session's pipeline owns the generation numbers; the worker only
/// tracks the newest one so it can skip superseded work.
pub(crate) struct AiWorker {
    work_tx: mpsc::Sender<AiWork>,
    result_rx: Mutex<mpsc::Receiver<AiResult>>,
    generation: Arc<AtomicU64>,
}

impl AiWorker {
    pub fn new(client: Arc<dyn AidoAiClient>) -> io::Result<Self> {
        let generation = Arc::new(AtomicU64::new(0));
        let (work_tx, work_rx) = mpsc::channel::<AiWork>();
        let (result_tx, result_rx) = mpsc::channel::<AiResult>();
        {
            let generation = Arc::clone(&generation);
            thread::Builder::new()
                .name("aido-ai".into())
                .spawn(move || ai_worker(work_rx, result_tx, generation, client))?;
        }
        Ok(Self {
            work_tx,
            result_rx: Mutex::new(result_rx),
            generation,
        })
    }

    pub fn submit(&self, prompt: String, generation: u64) {
        self.generation.store(generation, Ordering::SeqCst);
        let _ = self.work_tx.send(AiWork { prompt, generation });
    }

    /// Make queued and running work stale.
    pub fn invalidate(&self) {
        self.generation.fetch_add(1, Ordering::SeqCst);
    }

    pub fn try_recv(&self) -> Option<AiResult> {
        let rx = self.result_rx.lock().ok()?;
        rx.try_recv().ok()
    }
}

// ---------------------------------------------------------------------------
// Worker thread
// ---------------------------------------------------------------------------

fn ai_worker(
    rx: mpsc::Receiver<AiWork>,
    tx: mpsc::Sender<AiResult>,
    gen: Arc<AtomicU64>,
    client: Arc<dyn AidoAiClient>,
) {
    while let Ok(work) = rx.recv() {
        // Drain: if multiple work items queued, skip to latest
        let mut latest = work;
        while let Ok(newer) = rx.try_recv() {
            latest = newer;
        }

        // Check staleness before doing work
        if latest.generation != gen.load(Ordering::SeqCst) {
            continue;
        }

        let result = client.send(latest.prompt).map_err(|e| e.to_string());

        // Check staleness after the round trip
        if latest.generation != gen.load(Ordering::SeqCst) {
            debug!(generation = latest.generation, "dropping stale AI response");
            continue;
        }

        let _ = tx.send(AiResult {
            generation: latest.generation,
            result,
        });
    }
}
