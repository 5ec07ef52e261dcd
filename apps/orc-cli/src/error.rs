//! Top-level application errors.

use orc_chart::RenderError;
use orc_cycle::CycleError;
use orc_results::ResultsError;
use thiserror::Error;

pub type AppResult<T> = Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Cannot read scenario file: {0}")]
    ScenarioIo(#[from] std::io::Error),

    #[error("Cannot parse scenario file: {0}")]
    ScenarioParse(#[from] serde_yaml::Error),

    #[error("{0}")]
    UnknownFluid(String),

    #[error(transparent)]
    Cycle(#[from] CycleError),

    #[error("Dome sweep failed: {0}")]
    Dome(#[from] orc_fluids::PropertyError),

    #[error(transparent)]
    Render(#[from] RenderError),

    #[error(transparent)]
    Results(#[from] ResultsError),
}
