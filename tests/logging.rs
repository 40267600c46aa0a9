use std::{fs, thread::sleep, time::Duration};

use serial_test::serial;
use tempfile::tempdir;

#[test]
#[serial]
fn writes_log_file() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("log.txt");

    assert!(arrow_overlay::logging::init(true, Some(path.clone())));
    tracing::info!("test");

    let mut contents = String::new();
    for _ in 0..20 {
        sleep(Duration::from_millis(100));
        contents = fs::read_to_string(&path).unwrap_or_default();
        if contents.contains("test") {
            break;
        }
    }

    assert!(path.exists(), "log file was not created");
    assert!(contents.contains("test"));

    // a second subscriber cannot be installed
    assert!(!arrow_overlay::logging::init(false, None));
}
