use std::fs;
use std::time::{Duration, Instant};

use pw_io::{
    AccessOutcome, FileAccess, FilePath, OpenRequest, RetryPolicy, wait_for_access, wait_for_access_async,
    wait_for_access_until,
};
use tokio::sync::oneshot;

fn held_file(dir: &std::path::Path, name: &str) -> (FilePath, fs::File) {
    let raw = dir.join(name);
    fs::write(&raw, b"x").unwrap();
    let path = FilePath::from_path(&raw).unwrap();
    let holder = wait_for_access(&path, &OpenRequest::exclusive(FileAccess::ReadWrite), RetryPolicy::new(Duration::ZERO))
        .unwrap()
        .into_file()
        .unwrap();
    (path, holder)
}

#[tokio::test]
async fn async_wait_opens_after_release() {
    let dir = tempfile::tempdir().unwrap();
    let (path, holder) = held_file(dir.path(), "a.dat");
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(100)).await;
        drop(holder);
    });
    let policy = RetryPolicy::new(Duration::from_millis(300)).with_poll_interval(Duration::from_millis(50));
    let outcome = wait_for_access_async(&path, &OpenRequest::shared_read(), policy).await.unwrap();
    assert!(outcome.is_opened());
}

#[tokio::test]
async fn async_wait_times_out() {
    let dir = tempfile::tempdir().unwrap();
    let (path, _holder) = held_file(dir.path(), "b.dat");
    let policy = RetryPolicy::new(Duration::from_millis(150)).with_poll_interval(Duration::from_millis(30));
    let outcome = wait_for_access_async(&path, &OpenRequest::shared_read(), policy).await.unwrap();
    assert!(matches!(outcome, AccessOutcome::TimedOut));
}

#[tokio::test]
async fn cancellation_is_distinct_from_timeout() {
    let dir = tempfile::tempdir().unwrap();
    let (path, _holder) = held_file(dir.path(), "c.dat");
    let (tx, rx) = oneshot::channel::<()>();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(60)).await;
        let _ = tx.send(());
    });
    let policy = RetryPolicy::new(Duration::from_secs(10)).with_poll_interval(Duration::from_millis(20));
    let start = Instant::now();
    let outcome = wait_for_access_until(&path, &OpenRequest::shared_read(), policy, async {
        let _ = rx.await;
    })
    .await
    .unwrap();
    assert!(outcome.is_cancelled());
    assert!(start.elapsed() < Duration::from_secs(5));
}

#[tokio::test(flavor = "multi_thread", worker_threads = 2)]
async fn other_tasks_keep_running_while_waiting() {
    let dir = tempfile::tempdir().unwrap();
    let (path, _holder) = held_file(dir.path(), "d.dat");
    let ticker = tokio::spawn(async {
        let mut ticks = 0u32;
        for _ in 0..5 {
            tokio::time::sleep(Duration::from_millis(10)).await;
            ticks += 1;
        }
        ticks
    });
    let policy = RetryPolicy::new(Duration::from_millis(120)).with_poll_interval(Duration::from_millis(40));
    assert!(wait_for_access_async(&path, &OpenRequest::shared_read(), policy).await.unwrap().is_timed_out());
    assert_eq!(ticker.await.unwrap(), 5);
}
