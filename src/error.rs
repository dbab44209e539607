use flo_puzzle::*;

use std::fmt;
use std::io;
use std::error::Error;

///
/// Errors that can stop a puzzle from being written out
///
#[derive(Debug)]
pub enum JigsawError {
    /// The puzzle could not be generated
    Puzzle(PuzzleError),

    /// The configuration file could not be read
    Config(serde_json::Error),

    /// The output document could not be generated
    Output(serde_json::Error),

    /// A file could not be read or written
    Io(io::Error),

    /// A command-line argument had a value that couldn't be understood
    Argument(String, String)
}

impl From<PuzzleError> for JigsawError {
    fn from(err: PuzzleError) -> JigsawError {
        JigsawError::Puzzle(err)
    }
}

impl From<serde_json::Error> for JigsawError {
    fn from(err: serde_json::Error) -> JigsawError {
        JigsawError::Config(err)
    }
}

impl From<io::Error> for JigsawError {
    fn from(err: io::Error) -> JigsawError {
        JigsawError::Io(err)
    }
}

impl fmt::Display for JigsawError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JigsawError::Puzzle(err)            => write!(f, "{}", err),
            JigsawError::Config(err)            => write!(f, "could not read configuration: {}", err),
            JigsawError::Output(err)            => write!(f, "could not write output: {}", err),
            JigsawError::Io(err)                => write!(f, "{}", err),
            JigsawError::Argument(name, value)  => write!(f, "invalid value '{}' for {}", value, name)
        }
    }
}

impl Error for JigsawError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            JigsawError::Puzzle(err)        => Some(err),
            JigsawError::Config(err)        => Some(err),
            JigsawError::Output(err)        => Some(err),
            JigsawError::Io(err)            => Some(err),
            JigsawError::Argument(_, _)     => None
        }
    }
}

#[cfg(test)]
mod test {
    use super::*;

    fn json_error() -> serde_json::Error {
        serde_json::from_str::<u32>("not a number").unwrap_err()
    }

    #[test]
    fn json_errors_read_as_config_errors() {
        let err: JigsawError = json_error().into();

        match err {
            JigsawError::Config(_)  => { }
            _                       => panic!("Expected a configuration error")
        }
        assert!(err.to_string().starts_with("could not read configuration"));
    }

    #[test]
    fn output_errors_are_not_config_errors() {
        let err = JigsawError::Output(json_error());

        assert!(err.to_string().starts_with("could not write output"));
        assert!(err.source().is_some());
    }
}
