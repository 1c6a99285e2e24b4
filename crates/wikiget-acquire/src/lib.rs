pub mod batch;
pub mod list;
pub mod output;
pub mod wikipedia;

pub use batch::{run, run_with_source, BatchSummary, PageSource};
pub use wikipedia::{ApiError, WikiClient};
