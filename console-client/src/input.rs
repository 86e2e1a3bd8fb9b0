use tictactoe_common::games::tictactoe::CELL_COUNT;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Place(usize),
    NewGame,
    Quit,
    Help,
}

pub fn parse_command(line: &str) -> Result<Command, String> {
    let trimmed = line.trim();
    match trimmed.to_ascii_lowercase().as_str() {
        "q" | "quit" | "exit" => return Ok(Command::Quit),
        "n" | "new" => return Ok(Command::NewGame),
        "h" | "help" | "?" => return Ok(Command::Help),
        _ => {}
    }

    let number: usize = trimmed
        .parse()
        .map_err(|_| format!("'{}' is not a cell number or command", trimmed))?;

    if number == 0 || number > CELL_COUNT {
        return Err(format!("Cell number must be between 1 and {}", CELL_COUNT));
    }
    Ok(Command::Place(number - 1))
}
