use std::io::{self, BufRead, Write};

use crate::config::MAX_PLAYER_NAME_LEN;

pub fn normalize_player_name(name: &str) -> Option<String> {
    let name: String = name.trim().chars().take(MAX_PLAYER_NAME_LEN).collect();
    if name.is_empty() { None } else { Some(name) }
}

pub fn prompt_player_name<R: BufRead, W: Write>(
    input: &mut R,
    output: &mut W,
    default_name: &str,
) -> io::Result<String> {
    write!(output, "Please enter your name [{}]: ", default_name)?;
    output.flush()?;

    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        writeln!(output)?;
        return Ok(default_name.to_string());
    }

    Ok(normalize_player_name(&line).unwrap_or_else(|| default_name.to_string()))
}
