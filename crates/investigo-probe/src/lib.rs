pub mod client;
pub mod error;
pub mod fanout;
pub mod request;
pub mod verdict;

pub use client::{ProbeClient, ProbeResponse};
pub use error::ProbeError;
pub use fanout::{run_username, BatchSummary, VerdictSink};
pub use request::{build_target, ProbeTarget};
pub use verdict::{classify, status_accepted, Verdict, NOT_FOUND_MESSAGE, UNSUPPORTED_MESSAGE};
