use anyhow::{Context, Result};
use clap::Parser;
use scalc::{config::Options, repl::Editor, runtime::Calculator};

fn main() -> Result<()> {
    let options = Options::parse();
    options.init_logging();
    let editor = Editor::new().context("could not open the terminal editor")?;
    Calculator::new(editor, options.retry_policy()).run()?;
    Ok(())
}
