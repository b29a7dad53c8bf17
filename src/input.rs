use crate::error::{Error, Result};
use std::io::{BufRead, Write};
use tracing::trace;

pub const INVALID_NUMBER: &str = "Invalid input. Please enter a numeric value.";

/// Something that can show a prompt and hand back one line of text.
pub trait LineSource {
    /// Returns `Ok(None)` once the input is exhausted. The line terminator
    /// is removed, nothing else is.
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>>;

    fn write_line(&mut self, text: &str) -> Result<()>;
}

impl<'a, S> LineSource for &'a mut S
where
    S: LineSource + ?Sized,
{
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        (**self).read_line(prompt)
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        (**self).write_line(text)
    }
}

/// Line source over plain buffered streams, such as a locked stdin/stdout
/// pair or in-memory buffers.
#[derive(Debug)]
pub struct Prompter<R, W> {
    input: R,
    output: W,
}

impl<R, W> Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    pub fn new(input: R, output: W) -> Self { Self { input, output } }

    pub fn take(self) -> (R, W) {
        let Self {
            input,
            output,
        } = self;
        (input, output)
    }
}

impl<R, W> LineSource for Prompter<R, W>
where
    R: BufRead,
    W: Write,
{
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        write!(self.output, "{}", prompt)?;
        self.output.flush()?;
        let mut buf = Vec::new();
        if self.input.read_until(b'\n', &mut buf)? == 0 {
            return Ok(None);
        }
        // Undecodable bytes become U+FFFD, so they fail choice and number
        // parsing like any other bad token.
        let mut line = String::from_utf8_lossy(&buf).into_owned();
        strip_line_ending(&mut line);
        trace!(prompt, line = line.as_str(), "read line");
        Ok(Some(line))
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        writeln!(self.output, "{}", text)?;
        self.output.flush()?;
        Ok(())
    }
}

fn strip_line_ending(line: &mut String) {
    if line.ends_with('\n') {
        line.pop();
        if line.ends_with('\r') {
            line.pop();
        }
    }
}

#[derive(Clone, Debug, Copy, PartialEq, Eq, Default)]
pub enum RetryPolicy {
    #[default]
    Unbounded,
    /// Give up after this many consecutive rejected lines.
    Limited(usize),
}

impl RetryPolicy {
    fn allows(self, rejected: usize) -> bool {
        match self {
            RetryPolicy::Unbounded => true,
            RetryPolicy::Limited(max) => rejected < max,
        }
    }
}

/// Prompts until a line parses as a number. Parse failures never escape;
/// only a closed input, an interrupt or an exhausted retry policy do.
pub fn read_number<S>(source: &mut S, prompt: &str, policy: RetryPolicy) -> Result<f64>
where
    S: LineSource + ?Sized,
{
    let mut rejected = 0;
    loop {
        let line = source.read_line(prompt)?.ok_or(Error::Eof)?;
        match line.trim().parse::<f64>() {
            Ok(num) => return Ok(num),
            Err(err) => {
                rejected += 1;
                trace!(line = line.as_str(), %err, rejected, "rejected operand");
                source.write_line(INVALID_NUMBER)?;
                if !policy.allows(rejected) {
                    return Err(Error::TooManyAttempts(rejected));
                }
            },
        }
    }
}
