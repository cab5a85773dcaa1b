//! The read-eval-print loop
//!
//! One line in, one message out, a blank line after each answer. The loop
//! ends on the exit command or at end of input.

use std::io::{self, BufRead, Write};
use unitconv_core::Measure;
use unitconv_units::{evaluate, UNITS};
use crate::config::{Config, OutputFormat};

/// Lists the known units instead of converting
const UNITS_COMMAND: &str = "units";

/// Run the loop until exit or EOF, returning the number of turns served
pub fn run<R: BufRead, W: Write>(config: &Config, mut input: R, output: &mut W) -> io::Result<usize> {
    let mut turns = 0;

    loop {
        write!(output, "{}", config.prompt)?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            tracing::debug!("end of input");
            break;
        }
        let line = strip_line_ending(&line);

        if line == config.exit_command {
            tracing::debug!("exit command received");
            break;
        }

        if line == UNITS_COMMAND {
            write_unit_listing(output)?;
            writeln!(output)?;
            continue;
        }

        let outcome = evaluate(line);
        match config.format {
            OutputFormat::Text => writeln!(output, "{}", outcome)?,
            OutputFormat::Json => writeln!(output, "{}", serde_json::to_string(&outcome)?)?,
        }
        writeln!(output)?;
        turns += 1;
    }

    Ok(turns)
}

fn strip_line_ending(line: &str) -> &str {
    let line = line.strip_suffix('\n').unwrap_or(line);
    line.strip_suffix('\r').unwrap_or(line)
}

fn write_unit_listing<W: Write>(output: &mut W) -> io::Result<()> {
    for measure in Measure::ALL {
        let names: Vec<String> = UNITS
            .by_measure(measure)
            .iter()
            .map(|u| format!("{} ({})", u.plural(), u.names[2..].join(", ")))
            .collect();
        writeln!(output, "{}: {}", measure, names.join("; "))?;
    }
    Ok(())
}
