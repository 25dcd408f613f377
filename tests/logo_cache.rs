use std::sync::atomic::{AtomicUsize, Ordering};

use appshell::logo::{resolve_logo, LogoResolution};

#[test]
fn cache_hit_returns_bytes_without_fetching() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");
    std::fs::write(&path, b"cached-bytes").unwrap();

    let calls = AtomicUsize::new(0);
    let res = resolve_logo(&path, || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(b"network-bytes".to_vec())
    });

    assert_eq!(res, LogoResolution::Cached(b"cached-bytes".to_vec()));
    assert_eq!(
        calls.load(Ordering::SeqCst),
        0,
        "fetch must not run when the cache file exists"
    );
}

#[test]
fn successful_fetch_writes_the_cache_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets").join("logo.png");

    let res = resolve_logo(&path, || Ok(b"network-bytes".to_vec()));

    assert_eq!(res, LogoResolution::Fetched(b"network-bytes".to_vec()));
    assert_eq!(std::fs::read(&path).unwrap(), b"network-bytes");
}

#[test]
fn failed_fetch_leaves_no_cache_file() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("assets").join("logo.png");

    let res = resolve_logo(&path, || Err("connection refused".to_string()));

    assert_eq!(res, LogoResolution::Unavailable);
    assert!(!path.exists(), "a failed fetch must not create the cache file");
}

#[test]
fn second_run_after_a_fetch_is_served_from_the_cache() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("logo.png");

    let first = resolve_logo(&path, || Ok(b"v1".to_vec()));
    assert_eq!(first, LogoResolution::Fetched(b"v1".to_vec()));

    // A different payload on the wire must not be consulted anymore.
    let calls = AtomicUsize::new(0);
    let second = resolve_logo(&path, || {
        calls.fetch_add(1, Ordering::SeqCst);
        Ok(b"v2".to_vec())
    });
    assert_eq!(second, LogoResolution::Cached(b"v1".to_vec()));
    assert_eq!(calls.load(Ordering::SeqCst), 0);
}
