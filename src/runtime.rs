use crate::arith::Op;
use crate::error::{Error, Result};
use crate::format::Num;
use crate::input::{read_number, LineSource, RetryPolicy};
use crate::menu::{self, Choice};
use tracing::{debug, info, warn};

pub const CHOICE_PROMPT: &str = "Enter your choice (1-5): ";
pub const FIRST_PROMPT: &str = "Enter first number: ";
pub const SECOND_PROMPT: &str = "Enter second number: ";
pub const INVALID_CHOICE: &str = "Invalid choice. Please enter a number between 1 and 5.";
pub const GOODBYE: &str = "Exiting calculator. Goodbye!";

#[derive(Debug)]
enum State {
    AwaitingChoice,
    CollectingOperands(Op),
    Computing(Op, f64, f64),
    Reporting(String),
    ReportingInvalidChoice(String),
    Terminated,
}

/// Counters collected over one session.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Summary {
    pub cycles: usize,
    pub computed: usize,
    pub rejected_choices: usize,
    pub failures: usize,
}

#[derive(Debug)]
pub struct Calculator<S>
where
    S: LineSource,
{
    source: S,
    policy: RetryPolicy,
}

impl<S> Calculator<S>
where
    S: LineSource,
{
    pub fn new(source: S, policy: RetryPolicy) -> Self { Self { source, policy } }

    /// Runs until the exit choice is made or the input is exhausted.
    ///
    /// Failures inside one cycle are reported and the loop goes on; only
    /// writing to the output can end the session with an error.
    pub fn run(&mut self) -> Result<Summary> {
        let mut summary = Summary::default();
        let mut state = State::AwaitingChoice;
        info!(policy = ?self.policy, "calculator started");

        loop {
            state = match state {
                State::AwaitingChoice => {
                    summary.cycles += 1;
                    self.await_choice()?
                },

                State::CollectingOperands(op) => match self.collect(op) {
                    Ok((x, y)) => State::Computing(op, x, y),
                    Err(err) => {
                        warn!(%err, "cycle aborted");
                        summary.failures += 1;
                        State::Reporting(format!("An unexpected error occurred: {}", err))
                    },
                },

                State::Computing(op, x, y) => match op.apply(x, y) {
                    Ok(res) => {
                        debug!(x, y, res, op = op.symbol(), "computed");
                        summary.computed += 1;
                        State::Reporting(format!(
                            "Result: {} {} {} = {}",
                            Num(x),
                            op,
                            Num(y),
                            Num(res)
                        ))
                    },
                    Err(err) => {
                        debug!(x, "division by zero");
                        State::Reporting(format!("Error: {}", err))
                    },
                },

                State::Reporting(line) => {
                    self.source.write_line(&line)?;
                    State::AwaitingChoice
                },

                State::ReportingInvalidChoice(token) => {
                    debug!(token = token.as_str(), "invalid choice");
                    summary.rejected_choices += 1;
                    self.source.write_line(INVALID_CHOICE)?;
                    State::AwaitingChoice
                },

                State::Terminated => break,
            };
        }

        info!(?summary, "calculator stopped");
        Ok(summary)
    }

    fn await_choice(&mut self) -> Result<State> {
        menu::render(&mut self.source)?;
        let line = match self.source.read_line(CHOICE_PROMPT) {
            Ok(Some(line)) => line,
            Ok(None) | Err(Error::Interrupted) => {
                debug!("input closed at menu");
                self.source.write_line("")?;
                return self.terminate();
            },
            Err(err) => return Err(err),
        };

        match Choice::from(line.as_str()) {
            Choice::Exit => self.terminate(),
            Choice::Compute(op) => {
                debug!(op = op.symbol(), "choice");
                Ok(State::CollectingOperands(op))
            },
            Choice::Invalid(token) => Ok(State::ReportingInvalidChoice(token)),
        }
    }

    fn collect(&mut self, op: Op) -> Result<(f64, f64)> {
        debug!(op = op.symbol(), "collecting operands");
        let x = read_number(&mut self.source, FIRST_PROMPT, self.policy)?;
        let y = read_number(&mut self.source, SECOND_PROMPT, self.policy)?;
        Ok((x, y))
    }

    fn terminate(&mut self) -> Result<State> {
        self.source.write_line(GOODBYE)?;
        Ok(State::Terminated)
    }

    pub fn take(self) -> S { self.source }
}
