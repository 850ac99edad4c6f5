//! Terminal interaction for the flattener.

use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::error::{Result, TidyError};

pub const ROOT_PROMPT: &str = "Please paste the full path of the Main Folder: ";
pub const CLOSE_PROMPT: &str = "Press Enter to close...";

/// Trims the input and drops every quote character, as left behind by "Copy as path".
pub fn clean_path_input(raw: &str) -> String {
    raw.trim().chars().filter(|c| *c != '"' && *c != '\'').collect()
}

pub fn read_root_path<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<PathBuf> {
    write!(output, "{ROOT_PROMPT}").map_err(TidyError::Prompt)?;
    output.flush().map_err(TidyError::Prompt)?;

    let mut line = String::new();
    input.read_line(&mut line).map_err(TidyError::Prompt)?;

    let cleaned = clean_path_input(&line);
    if cleaned.is_empty() {
        return Err(TidyError::EmptyInput);
    }
    log::debug!("Root path entered: {cleaned}");
    Ok(PathBuf::from(cleaned))
}

pub fn wait_for_enter<R: BufRead, W: Write>(input: &mut R, output: &mut W) -> Result<()> {
    write!(output, "{CLOSE_PROMPT}").map_err(TidyError::Prompt)?;
    output.flush().map_err(TidyError::Prompt)?;
    let mut line = String::new();
    input.read_line(&mut line).map_err(TidyError::Prompt)?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn strips_quotes_and_whitespace() {
        assert_eq!(
            clean_path_input("  \"C:\\Art\\Pack\"\r\n"),
            "C:\\Art\\Pack"
        );
        assert_eq!(clean_path_input("'/tmp/it's'"), "/tmp/its");
    }

    #[test]
    fn reads_root_from_input() {
        let mut input = Cursor::new("\"/data/sprites\"\n");
        let mut output = Vec::new();

        let root = read_root_path(&mut input, &mut output).unwrap();

        assert_eq!(root, PathBuf::from("/data/sprites"));
        assert_eq!(String::from_utf8(output).unwrap(), ROOT_PROMPT);
    }

    #[test]
    fn blank_input_is_rejected() {
        let mut input = Cursor::new("  ''\n");
        let mut output = Vec::new();
        assert!(matches!(
            read_root_path(&mut input, &mut output),
            Err(TidyError::EmptyInput)
        ));
    }

    #[test]
    fn wait_returns_at_end_of_input() {
        let mut input = Cursor::new("");
        let mut output = Vec::new();
        wait_for_enter(&mut input, &mut output).unwrap();
        assert_eq!(String::from_utf8(output).unwrap(), CLOSE_PROMPT);
    }
}
