use std::io::{BufRead, Write};

use anyhow::{Context, Result, bail};
use rust_decimal::Decimal;

use crate::cli::args::parse_positive_size;
use crate::types::direction::Direction;

pub fn prompt_direction(input: &mut impl BufRead, output: &mut impl Write) -> Result<Direction> {
    writeln!(output, "\nSelect your position:")?;
    writeln!(output, "  0) Long")?;
    writeln!(output, "  1) Short")?;

    loop {
        let answer = ask(input, output, "\nEnter your choice (0/1): ")?;
        match answer.as_str() {
            "0" => return Ok(Direction::Long),
            "1" => return Ok(Direction::Short),
            _ => writeln!(
                output,
                "Invalid choice. Please enter '0' for long or '1' for short."
            )?,
        }
    }
}

pub fn prompt_size(
    input: &mut impl BufRead,
    output: &mut impl Write,
    coin: &str,
) -> Result<Decimal> {
    loop {
        let answer = ask(input, output, &format!("\nEnter your {coin} position size: "))?;
        match parse_positive_size(&answer) {
            Ok(size) => return Ok(size),
            Err(reason) => writeln!(output, "{reason}. Please enter a positive number.")?,
        }
    }
}

fn ask(input: &mut impl BufRead, output: &mut impl Write, question: &str) -> Result<String> {
    write!(output, "{question}")?;
    output.flush()?;

    let mut line = String::new();
    let read = input.read_line(&mut line).context("read stdin failed")?;
    if read == 0 {
        bail!("input closed before an answer was given");
    }

    Ok(line.trim().to_string())
}
