use crate::utils::error::{CalcError, Result};

const CONVERSION_PREFIX: &str = "conv:";

/// One line of shell input, classified.
#[derive(Debug, Clone, PartialEq)]
pub enum Command {
    Exit,
    Empty,
    Help,
    Clear,
    ShowMemory,
    MemoryAdd,
    MemorySubtract,
    MemoryRecall,
    MemoryClear,
    ListConversions,
    Convert { name: String, value: f64 },
    Evaluate(String),
}

impl Command {
    pub fn parse(input: &str) -> Result<Command> {
        let input = input.trim();

        if input.eq_ignore_ascii_case("exit") {
            return Ok(Command::Exit);
        }

        let command = match input {
            "" => Command::Empty,
            "help" => Command::Help,
            "clear" => Command::Clear,
            "mem" => Command::ShowMemory,
            "m+" => Command::MemoryAdd,
            "m-" => Command::MemorySubtract,
            "mr" => Command::MemoryRecall,
            "mc" => Command::MemoryClear,
            "conv" => Command::ListConversions,
            _ if input.starts_with(CONVERSION_PREFIX) => parse_conversion(input)?,
            _ => Command::Evaluate(input.to_string()),
        };

        Ok(command)
    }
}

fn parse_conversion(input: &str) -> Result<Command> {
    let parts: Vec<&str> = input.split_whitespace().collect();
    let [function, value] = parts.as_slice() else {
        return Err(CalcError::invalid_input(
            "Conversion format should be \"conv:functionName value\"",
        ));
    };

    let name = function.trim_start_matches(CONVERSION_PREFIX);
    let value = parse_value(value)?;

    Ok(Command::Convert {
        name: name.to_string(),
        value,
    })
}

/// Parse a user supplied number, rejecting anything that is not one.
pub fn parse_value(text: &str) -> Result<f64> {
    match text.trim().parse::<f64>() {
        Ok(value) if !value.is_nan() => Ok(value),
        _ => Err(CalcError::invalid_input("Value must be a number")),
    }
}
