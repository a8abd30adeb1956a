pub mod providers;
mod summarizer;

pub use summarizer::{Summarizer, SummaryOutcome};
pub use providers::{SummaryInput, SummaryProvider};
