pub mod command;
pub mod preprompt;
pub mod prompt;
pub mod settings;
pub mod shortcuts;
pub mod store;
pub mod trigger;
pub mod words;
