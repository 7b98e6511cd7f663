//! Retry-open loop for files that may be held by another process.
//!
//! Each attempt opens with the requested triple. A sharing violation is
//! retried every poll interval until the timeout elapses; any other failure
//! ends the loop at once. Handles from failed attempts are closed before the
//! next attempt.

use std::fs::File;
use std::future::Future;
use std::path::Path;
use std::time::{Duration, Instant};
use tracing::{debug, trace};

use super::policy::RetryPolicy;
use super::request::OpenRequest;
use crate::errors::Result;
use crate::fs_ops::io_error_with_help;
use crate::paths::FilePath;
use crate::platform::{OpenFailure, open_with_share};
use crate::shutdown;

/// Terminal result of a wait. Timing out is an expected outcome, not an error.
#[derive(Debug)]
pub enum AccessOutcome {
    Opened(File),
    TimedOut,
    Cancelled,
}

impl AccessOutcome {
    pub fn is_opened(&self) -> bool {
        matches!(self, AccessOutcome::Opened(_))
    }

    pub fn is_timed_out(&self) -> bool {
        matches!(self, AccessOutcome::TimedOut)
    }

    pub fn is_cancelled(&self) -> bool {
        matches!(self, AccessOutcome::Cancelled)
    }

    pub fn into_file(self) -> Option<File> {
        match self {
            AccessOutcome::Opened(f) => Some(f),
            _ => None,
        }
    }
}

enum Step {
    Done(AccessOutcome),
    Sleep(Duration),
}

fn attempt(path: &Path, request: &OpenRequest, deadline: Instant, poll: Duration, attempts: u32) -> Result<Step> {
    match open_with_share(path, request) {
        Ok(file) => {
            trace!(path = %path.display(), attempts, "opened");
            Ok(Step::Done(AccessOutcome::Opened(file)))
        }
        Err(OpenFailure::SharingViolation) => {
            let remaining = deadline.saturating_duration_since(Instant::now());
            if remaining.is_zero() {
                debug!(path = %path.display(), attempts, "gave up waiting for access");
                return Ok(Step::Done(AccessOutcome::TimedOut));
            }
            trace!(path = %path.display(), attempts, "sharing violation; retrying");
            Ok(Step::Sleep(poll.min(remaining)))
        }
        Err(OpenFailure::Os(e)) => Err(io_error_with_help("open file", path)(e)),
    }
}

/// Blocking variant: sleeps the calling thread between attempts.
///
/// Returns `Cancelled` when the process-wide shutdown flag is raised while waiting.
pub fn wait_for_access(path: &FilePath, request: &OpenRequest, policy: RetryPolicy) -> Result<AccessOutcome> {
    let path = path.as_path();
    let poll = policy.effective_poll();
    let deadline = Instant::now() + policy.timeout;
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        match attempt(path, request, deadline, poll, attempts)? {
            Step::Done(outcome) => return Ok(outcome),
            Step::Sleep(wait) => {
                if shutdown::is_requested() {
                    debug!(path = %path.display(), attempts, "shutdown requested while waiting for access");
                    return Ok(AccessOutcome::Cancelled);
                }
                std::thread::sleep(wait);
            }
        }
    }
}

/// Async variant: suspends only the calling task between attempts.
pub async fn wait_for_access_async(
    path: &FilePath,
    request: &OpenRequest,
    policy: RetryPolicy,
) -> Result<AccessOutcome> {
    wait_for_access_until(path, request, policy, std::future::pending::<()>()).await
}

/// Async variant that also stops with `Cancelled` as soon as `cancelled` completes.
pub async fn wait_for_access_until<C>(
    path: &FilePath,
    request: &OpenRequest,
    policy: RetryPolicy,
    cancelled: C,
) -> Result<AccessOutcome>
where
    C: Future<Output = ()>,
{
    let path = path.as_path();
    let poll = policy.effective_poll();
    let deadline = Instant::now() + policy.timeout;
    let mut cancelled = std::pin::pin!(cancelled);
    let mut attempts = 0u32;
    loop {
        attempts += 1;
        match attempt(path, request, deadline, poll, attempts)? {
            Step::Done(outcome) => return Ok(outcome),
            Step::Sleep(wait) => {
                tokio::select! {
                    biased;
                    _ = &mut cancelled => {
                        debug!(path = %path.display(), attempts, "wait for access cancelled");
                        return Ok(AccessOutcome::Cancelled);
                    }
                    _ = tokio::time::sleep(wait) => {}
                }
            }
        }
    }
}

/// Wait for shared-read access, returning the file or `None` on timeout or cancellation.
pub fn wait_for_read(path: &FilePath, timeout: Duration) -> Result<Option<File>> {
    Ok(wait_for_access(path, &OpenRequest::shared_read(), RetryPolicy::new(timeout))?.into_file())
}

/// True when the file exists and a shared-read open is refused by a sharing violation.
pub fn is_read_locked(path: &FilePath) -> bool {
    path.exists()
        && matches!(
            open_with_share(path.as_path(), &OpenRequest::shared_read()),
            Err(OpenFailure::SharingViolation)
        )
}

/// True when the file exists and can be opened for shared read right now.
pub fn is_readable(path: &FilePath) -> bool {
    path.exists() && open_with_share(path.as_path(), &OpenRequest::shared_read()).is_ok()
}

impl FilePath {
    /// Shorthand for [`wait_for_read`].
    pub fn wait_for_read(&self, timeout: Duration) -> Result<Option<File>> {
        wait_for_read(self, timeout)
    }
}
