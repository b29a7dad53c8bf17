use anyhow::Result;
use clap::Parser;
use scalc::{config::Options, input::Prompter, runtime::Calculator};
use std::io::{stdin, stdout};

fn main() -> Result<()> {
    let options = Options::parse();
    options.init_logging();
    let source = Prompter::new(stdin().lock(), stdout().lock());
    Calculator::new(source, options.retry_policy()).run()?;
    Ok(())
}
