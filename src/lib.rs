//! Aido keyboard engine.
//!
//! Wraps `aido-session` for the Android input method service: text-field and
//! clipboard access are foreign callbacks, AI calls run on a worker thread,
//! and persistence is written off the UI thread.

uniffi::setup_scaffolding!();

pub mod api;

mod async_worker;
mod persist_worker;
mod trace_init;
