pub mod arith;
pub mod config;
pub mod error;
pub mod format;
pub mod input;
pub mod menu;
pub mod repl;
pub mod runtime;
