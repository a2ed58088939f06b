use std::io::Write;

/// Print the prompt and read one raw line from stdin.
/// Returns an empty string once stdin is closed.
pub fn readline() -> Result<String, String> {
    write!(std::io::stdout(), "grimoire> ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    Ok(buffer)
}

/// Ask a yes/no question; anything but y/yes reads as no.
pub fn confirm(prompt: &str) -> Result<bool, String> {
    write!(std::io::stdout(), "{prompt} [y/N] ").map_err(|e| e.to_string())?;
    std::io::stdout().flush().map_err(|e| e.to_string())?;
    let mut buffer = String::new();
    std::io::stdin()
        .read_line(&mut buffer)
        .map_err(|e| e.to_string())?;
    let answer = buffer.trim().to_lowercase();
    Ok(answer == "y" || answer == "yes")
}
