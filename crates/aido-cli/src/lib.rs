pub mod commands;
pub mod provider;
pub mod table;
