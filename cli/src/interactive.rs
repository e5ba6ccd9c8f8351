use std::io::{self, BufRead, Write};
use tracing::debug;

use crate::colors::ColorScheme;
use crate::display::{DisplayOptions, write_search_results};
use crate::search::{ActorLookup, create_search_request, execute_search};

const CONTINUE_PROMPT: &str =
    "Do you want to find degrees of separation between other actors? (yes/no): ";

/// Prompts for actor pairs until the user declines or input ends.
///
/// Unrecognized names re-prompt immediately without asking to continue.
pub fn run_interactive<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    lookup: &ActorLookup<'_>,
    options: DisplayOptions,
    colors: &ColorScheme,
) -> io::Result<usize> {
    let mut queries_answered = 0;

    loop {
        let Some(first) = prompt(input, out, "Enter the name of the first actor: ", colors)? else {
            break;
        };
        let Some(second) = prompt(input, out, "Enter the name of the second actor: ", colors)?
        else {
            break;
        };

        let search = create_search_request(&first, &second, lookup)
            .and_then(|request| execute_search(request, lookup.graph()));

        match search {
            Ok(search) => {
                write_search_results(out, &search, options, colors)?;
                queries_answered += 1;
            }
            Err(error) => {
                debug!(%error, "rejected query");
                writeln!(out, "{} {}. Please try again.", colors.error("❌"), error)?;
                continue;
            }
        }

        match prompt(input, out, CONTINUE_PROMPT, colors)? {
            Some(response) if response.eq_ignore_ascii_case("yes") => {}
            _ => break,
        }
    }

    Ok(queries_answered)
}

fn prompt<R: BufRead, W: Write>(
    input: &mut R,
    out: &mut W,
    message: &str,
    colors: &ColorScheme,
) -> io::Result<Option<String>> {
    write!(out, "{}", colors.prompt(message))?;
    out.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(out)?;
        return Ok(None);
    }

    Ok(Some(line.trim().to_string()))
}
