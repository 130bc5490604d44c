//! Line-oriented play loop.

use std::io::{BufRead, Write};

use crate::engine::{NavigationEngine, SessionStatus, Summary};
use crate::error::{NavError, NavResult};

/// Play `engine` to the end, prompting on `output` and reading one room
/// name per line from `input`.
///
/// Unrecognized names are reported and the prompt is repeated. Running out
/// of input before the end room is reached yields [`NavError::InputClosed`].
pub fn run_session<R, W>(
    engine: &mut NavigationEngine<'_>,
    mut input: R,
    mut output: W,
) -> NavResult<Summary>
where
    R: BufRead,
    W: Write,
{
    while engine.status() == SessionStatus::AwaitingInput {
        let view = engine.describe_current_room();
        writeln!(output, "CURRENT LOCATION: {}", view.name)?;
        writeln!(output, "POSSIBLE CONNECTIONS: {}.", view.neighbors.join(", "))?;
        write!(output, "WHERE TO? >")?;
        output.flush()?;

        // Bytes that are not UTF-8 become U+FFFD and so never match a room.
        let mut line = Vec::new();
        if input.read_until(b'\n', &mut line)? == 0 {
            writeln!(output)?;
            return Err(NavError::InputClosed);
        }
        let line = String::from_utf8_lossy(&line);
        let choice = line.trim_end_matches(['\n', '\r']);
        write!(output, "\n\n")?;

        match engine.submit_choice(choice) {
            Ok(_) => {}
            Err(NavError::UnrecognizedRoom(_)) => {
                writeln!(output, "HUH? I DON'T UNDERSTAND THAT ROOM. TRY AGAIN.")?;
                writeln!(output)?;
            }
            Err(e) => return Err(e),
        }
    }

    let summary = engine.finalize()?;
    writeln!(output, "YOU HAVE FOUND THE END ROOM. CONGRATULATIONS!")?;
    writeln!(
        output,
        "YOU TOOK {} STEPS. YOUR PATH TO VICTORY WAS:",
        summary.step_count
    )?;
    for name in &summary.path {
        writeln!(output, "{name}")?;
    }
    output.flush()?;

    Ok(summary)
}
