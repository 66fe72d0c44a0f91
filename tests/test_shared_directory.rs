//! Integration tests for the lock-guarded directory.

mod common;

use common::fixtures::{alice, sample_contact};
use contact_directory::{Config, DirectoryError, SharedContactDirectory};
use std::thread;

#[test]
fn test_concurrent_mixed_operations() {
    let directory = SharedContactDirectory::new();

    let writers: Vec<_> = (0..10)
        .map(|i| {
            let directory = directory.clone();
            thread::spawn(move || {
                let id = format!("w{}", i);
                directory.add(sample_contact(&id)).unwrap();
                directory.update_phone(&id, "1112223333").unwrap();
                if i % 2 == 0 {
                    directory.delete(&id).unwrap();
                }
            })
        })
        .collect();

    for writer in writers {
        writer.join().unwrap();
    }

    let all = directory.list_all();
    assert_eq!(all.len(), 5);
    assert!(all.iter().all(|(_, c)| c.phone() == "1112223333"));

    let metrics = directory.metrics().summary();
    assert_eq!(metrics.adds_total, 10);
    assert_eq!(metrics.updates_total, 10);
    assert_eq!(metrics.deletes_total, 5);
    assert_eq!(metrics.rejections_total, 0);
}

#[test]
fn test_errors_match_plain_directory() {
    let directory = SharedContactDirectory::new();
    directory.add(alice()).unwrap();

    assert_eq!(
        directory.add(alice()),
        Err(DirectoryError::DuplicateKey("c1".to_string()))
    );
    assert!(matches!(
        directory.update_number("c1", "nope"),
        Err(DirectoryError::Validation(_))
    ));
    assert_eq!(
        directory.delete("c9"),
        Err(DirectoryError::NotFound("c9".to_string()))
    );
    assert_eq!(directory.get("c1"), Some(alice()));
    assert_eq!(directory.metrics().rejections_total(), 3);
}

#[test]
fn test_from_config_without_metrics() {
    let config = Config {
        metrics_enabled: false,
        ..Config::default()
    };
    let directory = SharedContactDirectory::from_config(&config);
    directory.add(alice()).unwrap();

    assert!(directory.contains("c1"));
    assert!(!directory.is_empty());
    assert_eq!(directory.metrics().adds_total(), 0);
}
