//! Command Dispatch
//!
//! `meta/cmd` holds a single word naming the operation. Anything other than
//! `put` or `get` is the protocol's "unimplemented command" failure.

use crate::error::{PluginError, Result};
use std::fs;
use std::path::Path;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    Put,
    Get,
}

impl Command {
    pub fn load(path: &Path) -> Result<Self> {
        let raw = fs::read_to_string(path)?;
        raw.trim().parse()
    }
}

impl std::str::FromStr for Command {
    type Err = PluginError;

    fn from_str(s: &str) -> Result<Self> {
        match s {
            "put" => Ok(Command::Put),
            "get" => Ok(Command::Get),
            other => Err(PluginError::UnimplementedCommand(other.to_string())),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_known_commands() {
        assert_eq!("put".parse::<Command>().unwrap(), Command::Put);
        assert_eq!("get".parse::<Command>().unwrap(), Command::Get);
    }

    #[test]
    fn test_load_trims_whitespace() {
        let temp = tempfile::TempDir::new().unwrap();
        let path = temp.path().join("cmd");
        fs::write(&path, "put\n").unwrap();
        assert_eq!(Command::load(&path).unwrap(), Command::Put);
    }

    #[test]
    fn test_unknown_command_is_unimplemented() {
        let err = "sync".parse::<Command>().unwrap_err();
        assert!(matches!(err, PluginError::UnimplementedCommand(ref c) if c == "sync"));
        assert!(err.to_string().contains("unimplemented"));
    }
}
