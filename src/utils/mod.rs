pub mod error;
pub mod config;
pub mod history;
#[cfg(test)]
pub mod memory;
pub mod browser;
pub mod router;
pub mod search;
pub mod shortcut;
