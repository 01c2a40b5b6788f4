//! `pushlog completions <shell>`.

use std::io::{self, Write};

use clap::CommandFactory;
use clap_complete::Shell;

use super::Cli;

/// Print the completion script for `shell` to stdout.
pub fn run(shell: Shell) -> anyhow::Result<()> {
    write_script(shell, &mut io::stdout().lock())?;
    Ok(())
}

fn write_script<W: Write>(shell: Shell, out: &mut W) -> io::Result<()> {
    let mut cmd = Cli::command();
    let name = cmd.get_name().to_string();
    clap_complete::generate(shell, &mut cmd, name, out);
    out.flush()
}
