//! Interactive session: build trees and click nodes from a line-based prompt.

use std::io::{BufRead, Write};

use tracing::{debug, instrument};

use crate::application::Session;
use crate::cli::error::{CliError, CliResult};
use crate::cli::render::{render_path, render_tree};

const HELP: &str = "\
commands:
  build <values>    build a new tree, e.g. build 5,3,8
  select <position> highlight the path to the node of the n-th value (0-based)
  reset             clear the highlight
  show              print the tree
  json              print the tree as JSON
  clear             discard the tree
  help              show this help
  quit              leave the session";

/// One line of session input.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReplCommand {
    Build(String),
    Select(usize),
    Reset,
    Show,
    Json,
    Clear,
    Help,
    Quit,
}

/// Parse a session line; `None` for a blank line.
pub fn parse_command(line: &str) -> CliResult<Option<ReplCommand>> {
    let line = line.trim_start().trim_end_matches(['\r', '\n']);
    if line.trim().is_empty() {
        return Ok(None);
    }
    // Only the one separating character is consumed; values keep their whitespace
    let (word, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));

    let command = match word {
        "build" | "b" => ReplCommand::Build(rest.to_string()),
        "select" | "s" => {
            let position = rest.trim().parse().map_err(|_| {
                CliError::InvalidArgs(format!("position must be a number, got {rest:?}"))
            })?;
            ReplCommand::Select(position)
        }
        "reset" => ReplCommand::Reset,
        "show" => ReplCommand::Show,
        "json" => ReplCommand::Json,
        "clear" => ReplCommand::Clear,
        "help" | "?" => ReplCommand::Help,
        "quit" | "exit" | "q" => ReplCommand::Quit,
        other => return Err(CliError::Usage(format!("unknown command: {other} (try help)"))),
    };
    Ok(Some(command))
}

/// Run commands from `input` until `quit` or end of input.
///
/// Command failures, including empty input, are reported on `out` and the
/// session continues; only I/O failures end it.
#[instrument(level = "debug", skip_all)]
pub fn run_session<R: BufRead, W: Write>(
    session: &mut Session,
    input: R,
    out: &mut W,
    color: bool,
) -> CliResult<()> {
    let mut lines = input.lines();
    loop {
        write!(out, "> ").map_err(|e| CliError::io("write prompt", e))?;
        out.flush().map_err(|e| CliError::io("flush prompt", e))?;

        let Some(line) = lines.next() else {
            writeln!(out).map_err(|e| CliError::io("write output", e))?;
            break;
        };
        let line = line.map_err(|e| CliError::io("read session input", e))?;

        let result = parse_command(&line).and_then(|command| match command {
            Some(ReplCommand::Quit) => Ok(None),
            Some(command) => execute(session, command, color).map(Some),
            None => Ok(Some(String::new())),
        });
        match result {
            Ok(None) => break,
            Ok(Some(text)) if text.is_empty() => {}
            Ok(Some(text)) => writeln!(out, "{text}").map_err(|e| CliError::io("write output", e))?,
            Err(e) => {
                debug!("session command failed: {e}");
                writeln!(out, "error: {e}").map_err(|e| CliError::io("write output", e))?
            }
        }
    }
    Ok(())
}

fn execute(session: &mut Session, command: ReplCommand, color: bool) -> CliResult<String> {
    let text = match command {
        ReplCommand::Build(raw) => {
            let count = session.submit(&raw)?;
            format!(
                "built {count} nodes\n{}",
                render_tree(session.tree(), None, color)
            )
        }
        ReplCommand::Select(position) => {
            let highlight = session.select_position(position)?;
            let mut text = String::new();
            if let Some(value) = highlight
                .previous
                .filter(|&previous| previous != highlight.selected)
                .and_then(|previous| session.tree().value(previous))
            {
                text.push_str(&format!("unselected {value}\n"));
            }
            text.push_str(&format!(
                "path: {}\n{}",
                render_path(session.tree(), &highlight),
                render_tree(session.tree(), Some(&highlight), color)
            ));
            text
        }
        ReplCommand::Reset => match session.reset().and_then(|id| session.tree().value(id)) {
            Some(value) => format!("unselected {value}"),
            None => "nothing selected".to_string(),
        },
        ReplCommand::Show => render_tree(session.tree(), session.highlight().as_ref(), color),
        ReplCommand::Json => session.snapshot().to_json()?,
        ReplCommand::Clear => {
            session.clear();
            "tree cleared".to_string()
        }
        ReplCommand::Help => HELP.to_string(),
        ReplCommand::Quit => String::new(),
    };
    Ok(text)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("build 5,3,8", ReplCommand::Build("5,3,8".into()))]
    #[case("  b 1,2\n", ReplCommand::Build("1,2".into()))]
    #[case("build", ReplCommand::Build(String::new()))]
    #[case("build  5, 3", ReplCommand::Build(" 5, 3".into()))]
    #[case("select  2", ReplCommand::Select(2))]
    #[case("select 2", ReplCommand::Select(2))]
    #[case("reset", ReplCommand::Reset)]
    #[case("quit", ReplCommand::Quit)]
    fn given_line_when_parsing_then_returns_command(
        #[case] line: &str,
        #[case] expected: ReplCommand,
    ) {
        assert_eq!(parse_command(line).unwrap(), Some(expected));
    }

    #[test]
    fn given_blank_line_when_parsing_then_returns_none() {
        assert_eq!(parse_command("   \n").unwrap(), None);
    }

    #[rstest]
    #[case("select two")]
    #[case("frobnicate")]
    fn given_bad_line_when_parsing_then_errors(#[case] line: &str) {
        assert!(parse_command(line).is_err());
    }
}
