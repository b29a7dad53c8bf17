use crate::input::RetryPolicy;
use clap::{ArgAction, Parser};
use std::io;
use std::num::NonZeroUsize;
use tracing_subscriber::{fmt, EnvFilter};

#[derive(Parser, Debug, PartialEq)]
#[command(version, about = "A menu driven four-function calculator", long_about = None)]
pub struct Options {
    /// Give up on an operand after this many invalid entries
    #[arg(long, value_name = "N")]
    pub max_retries: Option<NonZeroUsize>,

    /// Diagnostics on stderr (-v info, -vv debug, -vvv trace)
    #[arg(short, long, action = ArgAction::Count)]
    pub verbose: u8,
}

impl Options {
    pub fn retry_policy(&self) -> RetryPolicy {
        match self.max_retries {
            Some(max) => RetryPolicy::Limited(max.get()),
            None => RetryPolicy::Unbounded,
        }
    }

    pub fn log_filter(&self) -> &'static str {
        match self.verbose {
            0 => "off",
            1 => "info",
            2 => "debug",
            _ => "trace",
        }
    }

    /// Diagnostics go to stderr so the calculator's own output stays clean.
    /// Call once per process.
    pub fn init_logging(&self) {
        fmt()
            .with_env_filter(EnvFilter::new(self.log_filter()))
            .with_writer(io::stderr)
            .with_target(false)
            .init();
    }
}
