//! Renderer errors.

use thiserror::Error;

pub type RenderResult<T> = Result<T, RenderError>;

#[derive(Error, Debug)]
pub enum RenderError {
    /// A state or dome point carries a coordinate the chart cannot place.
    #[error("State not renderable: {what}")]
    InvalidState { what: &'static str },

    /// The drawing backend refused the output file or a primitive.
    #[error("Chart backend failed: {message}")]
    Backend { message: String },
}
