use thiserror::Error;

#[derive(Error, Debug)]
pub enum AiError {
    #[error("Tile index out of bounds: ({col}, {row}) on a {width}x{height} grid")]
    OutOfBounds {
        col: i32,
        row: i32,
        width: u32,
        height: u32,
    },
}

pub type Result<T> = std::result::Result<T, AiError>;
