//! Ordered background persistence.
//!
//! Each store gets one writer thread. Snapshots are written in the order they
//! were handed over; when several are queued only the newest is written.
//! Dropping the worker flushes the queue and joins the thread.

use std::io;
use std::sync::mpsc;
use std::thread::{self, JoinHandle};

use aido_core::preprompt::RegistrySnapshot;
use aido_core::shortcuts::TextShortcut;
use aido_core::store::{ClipboardItem, ClipboardStore, PrepromptStore, ShortcutStore, StoreError};
use tracing::{debug, warn};

pub(crate) struct PersistWorker<S, T> {
    store: S,
    tx: Option<mpsc::Sender<T>>,
    handle: Option<JoinHandle<()>>,
}

impl<S, T> PersistWorker<S, T>
where
    S: Clone + Send + 'static,
    T: Send + 'static,
{
    /// Spawn the writer thread. `write` runs on it with a clone of `store`.
    pub fn spawn<F>(name: &str, store: S, write: F) -> io::Result<Self>
    where
        F: Fn(&S, &T) -> Result<(), StoreError> + Send + 'static,
    {
        let (tx, rx) = mpsc::channel::<T>();
        let writer = store.clone();
        let label = name.to_string();
        let handle = thread::Builder::new()
            .name(name.into())
            .spawn(move || {
                while let Ok(snapshot) = rx.recv() {
                    // Coalesce: only the newest queued snapshot matters
                    let mut latest = snapshot;
                    let mut skipped = 0usize;
                    while let Ok(newer) = rx.try_recv() {
                        latest = newer;
                        skipped += 1;
                    }
                    if skipped > 0 {
                        debug!(worker = %label, skipped, "coalesced snapshots");
                    }
                    if let Err(e) = write(&writer, &latest) {
                        warn!(worker = %label, error = %e, "background save failed");
                    }
                }
            })?;
        Ok(Self {
            store,
            tx: Some(tx),
            handle: Some(handle),
        })
    }

    fn enqueue(&self, snapshot: T) -> Result<(), StoreError> {
        let sent = self.tx.as_ref().map(|tx| tx.send(snapshot).is_ok());
        if sent == Some(true) {
            Ok(())
        } else {
            Err(StoreError::Io(io::Error::new(
                io::ErrorKind::BrokenPipe,
                "persistence thread stopped",
            )))
        }
    }
}

impl<S, T> Drop for PersistWorker<S, T> {
    fn drop(&mut self) {
        // Closing the channel ends the writer loop after the last snapshot.
        self.tx.take();
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

// ---------------------------------------------------------------------------
// Store impls: loads are synchronous, saves go through the writer
// ---------------------------------------------------------------------------

impl<S> PrepromptStore for PersistWorker<S, RegistrySnapshot>
where
    S: PrepromptStore + Clone + 'static,
{
    fn load(&self) -> Result<Option<RegistrySnapshot>, StoreError> {
        self.store.load()
    }

    fn save(&self, snapshot: &RegistrySnapshot) -> Result<(), StoreError> {
        self.enqueue(snapshot.clone())
    }
}

impl<S> ClipboardStore for PersistWorker<S, Vec<ClipboardItem>>
where
    S: ClipboardStore + Clone + 'static,
{
    fn load(&self) -> Result<Vec<ClipboardItem>, StoreError> {
        self.store.load()
    }

    fn save(&self, items: &[ClipboardItem]) -> Result<(), StoreError> {
        self.enqueue(items.to_vec())
    }
}

impl<S> ShortcutStore for PersistWorker<S, Vec<TextShortcut>>
where
    S: ShortcutStore + Clone + 'static,
{
    fn load(&self) -> Result<Vec<TextShortcut>, StoreError> {
        self.store.load()
    }

    fn save(&self, items: &[TextShortcut]) -> Result<(), StoreError> {
        self.enqueue(items.to_vec())
    }
}

pub(crate) fn preprompt_writer<S>(store: S) -> io::Result<PersistWorker<S, RegistrySnapshot>>
where
    S: PrepromptStore + Clone + 'static,
{
    PersistWorker::spawn("aido-persist-preprompts", store, |s: &S, snap: &RegistrySnapshot| {
        PrepromptStore::save(s, snap)
    })
}

pub(crate) fn clipboard_writer<S>(store: S) -> io::Result<PersistWorker<S, Vec<ClipboardItem>>>
where
    S: ClipboardStore + Clone + 'static,
{
    PersistWorker::spawn("aido-persist-clipboard", store, |s: &S, items: &Vec<ClipboardItem>| {
        ClipboardStore::save(s, items)
    })
}

pub(crate) fn shortcut_writer<S>(store: S) -> io::Result<PersistWorker<S, Vec<TextShortcut>>>
where
    S: ShortcutStore + Clone + 'static,
{
    PersistWorker::spawn("aido-persist-shortcuts", store, |s: &S, items: &Vec<TextShortcut>| {
        ShortcutStore::save(s, items)
    })
}
