pub mod aggregate;
pub mod refresh;

pub use aggregate::{normalize_resources, CloudResource, ResourceMap};
pub use refresh::{apply_refresh, RefreshApplied, RefreshSequencer, RefreshTicket};
