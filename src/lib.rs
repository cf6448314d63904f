pub mod config;
pub mod error;
pub mod page;
pub mod parser;
pub mod protocol;
pub mod query;
pub mod run_log;
pub mod server;

pub use error::{Result, ViewerError};
pub use query::{Bounds, ChromosomeEntry, QueryService};
pub use run_log::{Chromosome, GenerationRecord, RunLog};
