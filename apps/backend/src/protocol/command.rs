//! Recognized command grammar.
//!
//! `new`, `list`, `join <gameId>`, `move <gameId> <coord>`, `game <gameId>`,
//! `mygame`, and `help`/`start`. Anything unrecognized falls back to the
//! help view rather than an error.

/// A parsed player command. Arguments are kept as raw strings; validation
/// (game existence, coordinate grammar) happens in the service layer.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    New,
    List,
    Join { game_id: String },
    Move { game_id: String, coord: String },
    Show { game_id: String },
    MyGame,
    Help,
}

impl Command {
    /// Parse a trimmed command string. Never fails: unknown or malformed
    /// input becomes `Help`.
    pub fn parse(input: &str) -> Self {
        let mut parts = input.split_whitespace();
        let head = parts.next().unwrap_or("");
        let args: Vec<&str> = parts.collect();

        match (head, args.as_slice()) {
            ("/new", []) => Self::New,
            ("/list", []) => Self::List,
            ("/join", [game_id]) => Self::Join {
                game_id: (*game_id).to_string(),
            },
            ("/move", [game_id, coord]) => Self::Move {
                game_id: (*game_id).to_string(),
                coord: (*coord).to_string(),
            },
            ("/game", [game_id]) => Self::Show {
                game_id: (*game_id).to_string(),
            },
            ("/mygame", []) => Self::MyGame,
            _ => Self::Help,
        }
    }
}
