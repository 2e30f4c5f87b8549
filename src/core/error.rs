//! Error type shared by the engine and the terminal front end.

use thiserror::Error;

use super::PlayerId;

#[derive(Error, Debug)]
pub enum GameError {
    #[error("invalid default answer: {0}")]
    InvalidDefaultAnswer(String),

    #[error("unknown strategy id: {0}")]
    UnknownStrategy(u8),

    #[error("a session needs at least one player")]
    NoPlayers,

    #[error("{0} players requested, at most 255 can be seated")]
    TooManyPlayers(usize),

    #[error("{0} plays manually but no interactive console is attached")]
    InteractionUnavailable(PlayerId),

    #[error("input stream closed")]
    InputClosed,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, GameError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_messages() {
        assert_eq!(
            GameError::InvalidDefaultAnswer("maybe".into()).to_string(),
            "invalid default answer: maybe"
        );
        assert_eq!(GameError::UnknownStrategy(9).to_string(), "unknown strategy id: 9");
        assert_eq!(
            GameError::TooManyPlayers(300).to_string(),
            "300 players requested, at most 255 can be seated"
        );
        assert_eq!(
            GameError::InteractionUnavailable(PlayerId::new(1)).to_string(),
            "Player 1 plays manually but no interactive console is attached"
        );
    }

    #[test]
    fn test_io_conversion() {
        let io = std::io::Error::new(std::io::ErrorKind::BrokenPipe, "gone");
        let err: GameError = io.into();
        assert!(matches!(err, GameError::Io(_)));
    }
}
