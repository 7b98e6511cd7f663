use std::fs;
use std::thread;
use std::time::{Duration, Instant};

use pw_io::{AccessOutcome, FileAccess, FilePath, OpenRequest, PathError, RetryPolicy, wait_for_access};
use tempfile::tempdir;

fn hold_exclusively(path: &FilePath) -> fs::File {
    wait_for_access(path, &OpenRequest::exclusive(FileAccess::ReadWrite), RetryPolicy::new(Duration::ZERO))
        .unwrap()
        .into_file()
        .expect("uncontended exclusive open")
}

#[test]
fn opens_once_holder_releases() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("busy.dat");
    fs::write(&raw, b"payload").unwrap();
    let path = FilePath::from_path(&raw).unwrap();

    let holder = hold_exclusively(&path);
    let releaser = thread::spawn(move || {
        thread::sleep(Duration::from_millis(100));
        drop(holder);
    });

    let policy = RetryPolicy::new(Duration::from_millis(300)).with_poll_interval(Duration::from_millis(50));
    let start = Instant::now();
    let outcome = wait_for_access(&path, &OpenRequest::shared_read(), policy).unwrap();
    let waited = start.elapsed();
    releaser.join().unwrap();

    assert!(outcome.is_opened(), "expected an open file, got {outcome:?}");
    assert!(waited >= Duration::from_millis(90), "returned before release: {waited:?}");
}

#[test]
fn never_released_times_out() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("stuck.dat");
    fs::write(&raw, b"x").unwrap();
    let path = FilePath::from_path(&raw).unwrap();
    let _holder = hold_exclusively(&path);

    let policy = RetryPolicy::new(Duration::from_millis(200)).with_poll_interval(Duration::from_millis(50));
    let start = Instant::now();
    let outcome = wait_for_access(&path, &OpenRequest::shared_read(), policy).unwrap();
    assert!(matches!(outcome, AccessOutcome::TimedOut));
    assert!(start.elapsed() >= Duration::from_millis(200));
}

#[test]
fn missing_directory_fails_without_retrying() {
    let dir = tempdir().unwrap();
    let path = FilePath::from_path(&dir.path().join("absent").join("f.txt")).unwrap();
    let start = Instant::now();
    let err = wait_for_access(&path, &OpenRequest::shared_read(), RetryPolicy::new(Duration::from_secs(10)))
        .unwrap_err();
    assert!(matches!(err, PathError::Os { .. }), "{err}");
    assert!(start.elapsed() < Duration::from_secs(2));
}

#[test]
fn write_request_waits_for_reader() {
    let dir = tempdir().unwrap();
    let raw = dir.path().join("shared.dat");
    fs::write(&raw, b"x").unwrap();
    let path = FilePath::from_path(&raw).unwrap();
    let reader = wait_for_access(&path, &OpenRequest::shared_read(), RetryPolicy::new(Duration::ZERO))
        .unwrap()
        .into_file()
        .unwrap();

    let policy = RetryPolicy::new(Duration::from_millis(60)).with_poll_interval(Duration::from_millis(10));
    let outcome = wait_for_access(&path, &OpenRequest::exclusive(FileAccess::Write), policy).unwrap();
    assert!(outcome.is_timed_out());

    drop(reader);
    assert!(wait_for_access(&path, &OpenRequest::exclusive(FileAccess::Write), policy).unwrap().is_opened());
}
