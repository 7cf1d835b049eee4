//! Layout error type.

use thiserror::Error;

/// Precondition violations detected when a layout is validated.
#[derive(Debug, Error, PartialEq)]
pub enum LayoutError {
    #[error("venue {venue} declares no exits")]
    NoExits { venue: String },

    #[error("venue {venue} declares no spawn areas")]
    NoSpawnAreas { venue: String },

    #[error("venue {venue} has a degenerate {what} rectangle `{label}`")]
    DegenerateRect {
        venue: String,
        what:  &'static str,
        label: String,
    },

    #[error("venue {venue} has {count} {what}, more than the {max} that can be addressed")]
    TooManyIds {
        venue: String,
        what:  &'static str,
        count: usize,
        max:   usize,
    },

    #[error("venue {venue} has non-positive extent {width}x{height}")]
    EmptyCanvas { venue: String, width: f32, height: f32 },
}

pub type LayoutResult<T> = Result<T, LayoutError>;
