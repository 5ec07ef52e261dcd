//! orc-results: run summary types and the on-disk artifact store.

pub mod error;
pub mod store;
pub mod types;

pub use error::{ResultsError, ResultsResult};
pub use store::{ResultsStore, SUMMARY_JSON, SUMMARY_TEXT};
pub use types::{BalanceRecord, ParameterRecord, RunSummary, StateRecord};
