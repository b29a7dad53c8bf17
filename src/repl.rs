use crate::error::{Error, Result};
use crate::input::LineSource;
use crate::menu::ENTRIES;
use rustyline::{
    completion::Completer as CompleterTrait,
    error::ReadlineError,
    highlight::Highlighter,
    hint::Hinter,
    history::DefaultHistory,
    validate::Validator,
    Context,
    Helper,
    Result as RlResult,
};
use std::io::{self, Write};

/// Completes a menu label to its number, e.g. `div` to `4`.
#[derive(Clone, Debug, Copy, PartialEq, Eq)]
struct Completer;

impl CompleterTrait for Completer {
    type Candidate = String;

    fn complete(
        &self,
        line: &str,
        _pos: usize,
        _ctx: &Context<'_>,
    ) -> RlResult<(usize, Vec<String>)> {
        let trimmed = line.trim_start();
        let offset = line.len() - trimmed.len();
        Ok((offset, complete_choice(trimmed)))
    }
}

impl Hinter for Completer {
    type Hint = String;
}

impl Highlighter for Completer {}

impl Validator for Completer {}

impl Helper for Completer {}

fn complete_choice(partial: &str) -> Vec<String> {
    let partial = partial.trim_end().to_lowercase();
    if partial.is_empty() {
        return Vec::new();
    }
    ENTRIES
        .iter()
        .filter(|(_, label)| label.to_lowercase().starts_with(&partial))
        .map(|(key, _)| String::from(*key))
        .collect()
}

/// Line source reading through a `rustyline` editor. Lines are not added
/// to the editor's history.
pub struct Editor {
    editor: rustyline::Editor<Completer, DefaultHistory>,
}

impl Editor {
    pub fn new() -> Result<Self> {
        let mut editor: rustyline::Editor<Completer, DefaultHistory> =
            rustyline::Editor::new()?;
        editor.set_helper(Some(Completer));
        Ok(Self { editor })
    }
}

impl LineSource for Editor {
    fn read_line(&mut self, prompt: &str) -> Result<Option<String>> {
        match self.editor.readline(prompt) {
            Ok(line) => Ok(Some(line)),
            Err(ReadlineError::Eof) => Ok(None),
            Err(ReadlineError::Interrupted) => Err(Error::Interrupted),
            Err(e) => Err(Error::from(e)),
        }
    }

    fn write_line(&mut self, text: &str) -> Result<()> {
        let mut out = io::stdout().lock();
        writeln!(out, "{}", text)?;
        out.flush()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn completes_labels() {
        assert_eq!(complete_choice("div"), vec!["4"]);
        assert_eq!(complete_choice("A"), vec!["1"]);
        assert_eq!(complete_choice("e"), vec!["5"]);
        assert_eq!(complete_choice("mul "), vec!["3"]);
        assert!(complete_choice("").is_empty());
        assert!(complete_choice("pow").is_empty());
    }

    #[test]
    fn case_insensitive() {
        assert_eq!(complete_choice("SUB"), vec!["2"]);
        assert_eq!(complete_choice("Divide"), vec!["4"]);
    }
}
