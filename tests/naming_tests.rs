//! Tests for unique data source name resolution

use dsadmin::{find_new_name, name_exists};

#[test]
fn test_name_exists_ignores_case() {
    let names = ["Prometheus", "loki"];
    assert!(name_exists(&names, "prometheus"));
    assert!(name_exists(&names, "LOKI"));
    assert!(!name_exists(&names, "graphite"));
    assert!(!name_exists::<&str>(&[], "anything"));
}

#[test]
fn test_free_name_is_returned_as_is() {
    assert_eq!(find_new_name(&["other"], "Graphite"), "Graphite");
}

#[test]
fn test_suffix_counts_up() {
    let names = vec![
        "MySQL".to_string(),
        "MySQL-1".to_string(),
        "MySQL-2".to_string(),
    ];
    assert_eq!(find_new_name(&names, "MySQL"), "MySQL-3");
}

#[test]
fn test_result_never_collides() {
    let names = ["a", "A-1", "a-2", "A-3", "a-4"];
    let found = find_new_name(&names, "a");
    assert_eq!(found, "a-5");
    assert!(!name_exists(&names, &found));
}

#[test]
fn test_single_digit_suffix_rolls_over() {
    // "-9" becomes "-10", which no longer reads as a dash suffix
    assert_eq!(find_new_name(&["db-9"], "db-9"), "db-10");
    assert_eq!(find_new_name(&["db-9", "db-10"], "db-9"), "db-10-1");
}

#[test]
fn test_two_digit_suffix_is_not_incremented() {
    assert_eq!(find_new_name(&["db-10"], "db-10"), "db-10-1");
    assert_eq!(find_new_name(&["db-10", "db-10-1"], "db-10"), "db-10-2");
}

#[test]
fn test_non_digit_suffix_is_replaced() {
    assert_eq!(find_new_name(&["db-x"], "db-x"), "db-1");
}
