//! Weekly NBA schedule reminder: ask a language model for the upcoming
//! week's games, persist them to SQLite, post a digest to a Discord channel.

pub mod config;
pub mod discord;
pub mod error;
pub mod fetcher;
pub mod model;
pub mod notifier;
pub mod openai;
pub mod run;
pub mod store;
pub mod timezone;
