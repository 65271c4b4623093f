//! Line-based input events for the headless driver

use crate::state::Screen;
use std::str::FromStr;
use thiserror::Error;

/// One user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum InputEvent {
    Open(Screen),
    Close,
    /// Offer a whole candidate value to a named field
    Set { field: String, value: String },
    /// Type text into the active field, one character at a time
    Type(String),
    Backspace,
    NextField,
    PrevField,
    Submit,
    Quit,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InputError {
    #[error("empty input")]
    Empty,
    #[error("unknown command {0:?}")]
    UnknownCommand(String),
    #[error("unknown screen {0:?}, expected signup or login")]
    UnknownScreen(String),
    #[error("{0} needs an argument")]
    MissingArgument(&'static str),
}

impl FromStr for InputEvent {
    type Err = InputError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let line = line.trim_end_matches(['\r', '\n']);
        let (command, rest) = match line.trim_start().split_once(' ') {
            Some((command, rest)) => (command, Some(rest)),
            None => (line.trim(), None),
        };

        match command {
            "" => Err(InputError::Empty),
            "open" => match rest.map(str::trim) {
                Some("signup") => Ok(InputEvent::Open(Screen::SignUp)),
                Some("login") => Ok(InputEvent::Open(Screen::Login)),
                Some(other) => Err(InputError::UnknownScreen(other.to_string())),
                None => Err(InputError::MissingArgument("open")),
            },
            "close" => Ok(InputEvent::Close),
            "set" => {
                let rest = rest.ok_or(InputError::MissingArgument("set"))?;
                // A field with no value clears it
                let (field, value) = rest.split_once(' ').unwrap_or((rest, ""));
                if field.is_empty() {
                    return Err(InputError::MissingArgument("set"));
                }
                Ok(InputEvent::Set {
                    field: field.to_string(),
                    value: value.to_string(),
                })
            }
            "type" => rest
                .map(|text| InputEvent::Type(text.to_string()))
                .ok_or(InputError::MissingArgument("type")),
            "backspace" => Ok(InputEvent::Backspace),
            "next" => Ok(InputEvent::NextField),
            "prev" => Ok(InputEvent::PrevField),
            "submit" => Ok(InputEvent::Submit),
            "quit" | "exit" => Ok(InputEvent::Quit),
            other => Err(InputError::UnknownCommand(other.to_string())),
        }
    }
}
