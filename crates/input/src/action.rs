use blockfield_common::{BlockKind, ParseBlockError, Seed};
use std::str::FromStr;

/// A high-level editing action.
///
/// Pointer and keyboard handlers, scripts and tests all produce actions; the
/// session consumes them. Coordinates are already in grid space.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Primary button: place the selected block, or erase in erase mode.
    Click { x: i64, y: i64 },
    /// Secondary button: always erase.
    Erase { x: i64, y: i64 },
    /// Flip between place and erase mode.
    ToggleMode,
    /// Select the block bound to a 1-based toolbar slot.
    SelectSlot(usize),
    /// Select a block kind directly.
    Select(BlockKind),
    /// Build a new world. `None` asks the session for a fresh seed.
    Regenerate(Option<Seed>),
    /// Remove every block except grass.
    ClearNonGrass,
    /// Unbound input.
    Noop,
}

impl Action {
    /// Keyboard binding: space toggles the mode, `r` regenerates, digits
    /// pick a toolbar slot. Other keys do nothing.
    pub fn from_key(key: &str) -> Action {
        match key {
            " " => Action::ToggleMode,
            "r" | "R" => Action::Regenerate(None),
            _ => match key.parse::<usize>() {
                Ok(slot) if (1..=BlockKind::PLACEABLE.len()).contains(&slot) => {
                    Action::SelectSlot(slot)
                }
                _ => Action::Noop,
            },
        }
    }
}

/// Errors from parsing a script line into an [`Action`].
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseActionError {
    #[error("empty action")]
    Empty,
    #[error("unknown action {0:?}")]
    UnknownCommand(String),
    #[error("`{command}` is missing its {arg} argument")]
    MissingArgument {
        command: &'static str,
        arg: &'static str,
    },
    #[error("expected an integer, got {0:?}")]
    InvalidNumber(String),
    #[error("unexpected trailing input {0:?}")]
    TrailingInput(String),
    #[error(transparent)]
    UnknownBlock(#[from] ParseBlockError),
}

fn number<T: FromStr>(
    token: Option<&str>,
    command: &'static str,
    arg: &'static str,
) -> Result<T, ParseActionError> {
    let token = token.ok_or(ParseActionError::MissingArgument { command, arg })?;
    token
        .parse()
        .map_err(|_| ParseActionError::InvalidNumber(token.to_string()))
}

impl FromStr for Action {
    type Err = ParseActionError;

    /// Script syntax, one action per line:
    /// `click X Y`, `erase X Y`, `toggle`, `select <id|slot>`,
    /// `regen [SEED]`, `clear`, `key <K>` (`key space` for the space bar), `noop`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let mut tokens = s.split_whitespace();
        let command = tokens.next().ok_or(ParseActionError::Empty)?;

        let action = match command.to_ascii_lowercase().as_str() {
            "click" => Action::Click {
                x: number(tokens.next(), "click", "x")?,
                y: number(tokens.next(), "click", "y")?,
            },
            "erase" => Action::Erase {
                x: number(tokens.next(), "erase", "x")?,
                y: number(tokens.next(), "erase", "y")?,
            },
            "toggle" => Action::ToggleMode,
            "select" => {
                let target = tokens.next().ok_or(ParseActionError::MissingArgument {
                    command: "select",
                    arg: "block",
                })?;
                match target.parse::<usize>() {
                    Ok(slot) => Action::SelectSlot(slot),
                    Err(_) => Action::Select(target.parse()?),
                }
            }
            "regen" => match tokens.next() {
                Some(token) => Action::Regenerate(Some(number(Some(token), "regen", "seed")?)),
                None => Action::Regenerate(None),
            },
            "clear" => Action::ClearNonGrass,
            "key" => {
                let key = tokens.next().ok_or(ParseActionError::MissingArgument {
                    command: "key",
                    arg: "key",
                })?;
                if key.eq_ignore_ascii_case("space") {
                    Action::from_key(" ")
                } else {
                    Action::from_key(key)
                }
            }
            "noop" => Action::Noop,
            _ => return Err(ParseActionError::UnknownCommand(command.to_string())),
        };

        let rest: Vec<&str> = tokens.collect();
        if !rest.is_empty() {
            return Err(ParseActionError::TrailingInput(rest.join(" ")));
        }
        Ok(action)
    }
}
