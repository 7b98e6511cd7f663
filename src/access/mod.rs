//! Opening files that another process may be holding.
//!
//! `wait_for_access` retries an open while it fails with a sharing violation,
//! up to a timeout. Any other failure surfaces immediately as `PathError::Os`.

mod policy;
mod request;
mod wait;

pub use policy::{DEFAULT_POLL_INTERVAL, RetryPolicy};
pub use request::{CreationDisposition, FileAccess, FileShare, OpenRequest};
pub use wait::{
    AccessOutcome, is_read_locked, is_readable, wait_for_access, wait_for_access_async, wait_for_access_until,
    wait_for_read,
};
