use cl_core::{CoreError, Policy};
use cl_layout::LayoutError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimError {
    #[error("simulation configuration error: {0}")]
    Config(#[from] CoreError),

    #[error("venue cannot be simulated: {0}")]
    Layout(#[from] LayoutError),

    #[error("{slot} slot was given a router for the {got} policy")]
    RouterPolicy { slot: Policy, got: Policy },

    #[error("{what} must be finite and non-negative, got {value}")]
    InvalidTime { what: &'static str, value: f32 },
}

pub type SimResult<T> = Result<T, SimError>;
