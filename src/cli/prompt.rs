//! Yes/no confirmation before anything goes on the wire

use std::io::{self, BufRead, IsTerminal, Write};

use dialoguer::Confirm;
use lifx_onboard::Error;
use log::debug;

/// True when the answer starts with `y` or `Y`
pub fn is_affirmative(answer: &str) -> bool {
    matches!(answer.chars().next(), Some('y' | 'Y'))
}

/// Ask `question`, defaulting to no.
///
/// Uses dialoguer on a terminal; otherwise reads one line from stdin so the
/// answer can be piped in.
pub fn confirm(question: &str) -> Result<bool, Error> {
    if io::stdin().is_terminal() {
        return Confirm::new()
            .with_prompt(question)
            .default(false)
            .interact()
            .map_err(Error::Prompt);
    }
    debug!("stdin is not a terminal; reading answer as a line");
    let mut stderr = io::stderr();
    write!(stderr, "{question} [y/N] ").map_err(Error::Prompt)?;
    stderr.flush().map_err(Error::Prompt)?;
    read_answer(&mut io::stdin().lock())
}

fn read_answer<R: BufRead>(reader: &mut R) -> Result<bool, Error> {
    let mut line = String::new();
    reader.read_line(&mut line).map_err(Error::Prompt)?;
    Ok(is_affirmative(&line))
}
