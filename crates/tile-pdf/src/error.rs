use thiserror::Error;

#[derive(Error, Debug)]
pub enum TileError {
    #[error("No words to render")]
    NoWords,

    #[error("Invalid layout: {0}")]
    InvalidLayout(String),

    #[error("Word {word} needs {needed:.1}pt but its slot is {available:.1}pt wide")]
    WordTooWide {
        word: String,
        needed: f32,
        available: f32,
    },

    #[error("Failed to encode page content: {0}")]
    EncodeError(String),

    #[error("Failed to save PDF: {0}")]
    SaveError(String),

    #[error("Failed to parse PDF: {0}")]
    ParseError(String),
}
