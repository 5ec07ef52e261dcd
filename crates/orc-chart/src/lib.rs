//! orc-chart: SVG diagram rendering for cycle solutions.
//!
//! Draws the classic pair of thermodynamic charts for one solved cycle: the
//! temperature–entropy and enthalpy–entropy diagrams, each overlaying the
//! cycle path on the working fluid's saturation dome.

pub mod diagram;
pub mod error;

pub use diagram::{render_hs, render_ts};
pub use error::{RenderError, RenderResult};
