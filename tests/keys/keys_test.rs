//! Declared and guessed primary keys.

use psql2ch::keys::{resolve_keys, KeyAccumulator, DEFAULT_KEY_SUFFIX};
use psql2ch::source::SourceColumn;

fn suffix() -> Option<&'static str> {
    Some(DEFAULT_KEY_SUFFIX)
}

#[test]
fn test_single_declared_key() {
    let columns = vec![SourceColumn::new("key", "int4").primary_key()];
    let keys = resolve_keys(&columns, suffix());

    assert_eq!(keys.primary_key, vec!["key"]);
    assert_eq!(keys.guessed_primary_key, None);
}

#[test]
fn test_composite_declared_key_keeps_order() {
    let columns = vec![
        SourceColumn::new("key_id", "int4").primary_key(),
        SourceColumn::new("key2_id", "int4").primary_key(),
    ];
    let keys = resolve_keys(&columns, suffix());

    assert_eq!(keys.primary_key, vec!["key_id", "key2_id"]);
    assert_eq!(keys.guessed_list(), vec!["key_id"]);
}

#[test]
fn test_guess_without_declared_key() {
    let columns = vec![
        SourceColumn::new("name", "varchar"),
        SourceColumn::new("phc_id", "int8").nullable(),
        SourceColumn::new("phc_u_id", "int8").nullable(),
        SourceColumn::new("phc_ps_id", "int8").nullable(),
    ];
    let keys = resolve_keys(&columns, suffix());

    assert!(keys.primary_key.is_empty());
    assert_eq!(keys.guessed_list(), vec!["phc_id"]);
    assert!(!keys.is_guessed(0));
    assert!(keys.is_guessed(1));
    assert!(!keys.is_guessed(2));
    assert!(!keys.is_guessed(3));
}

#[test]
fn test_suffix_is_case_sensitive() {
    let columns = vec![SourceColumn::new("USER_ID", "int8")];
    assert_eq!(resolve_keys(&columns, suffix()).guessed_primary_key, None);
}

#[test]
fn test_accumulator_reports_guess_once() {
    let columns = [
        SourceColumn::new("a_id", "int8"),
        SourceColumn::new("b_id", "int8"),
    ];
    let mut acc = KeyAccumulator::new(suffix());

    assert!(acc.push(0, &columns[0]));
    assert!(!acc.push(1, &columns[1]));

    let keys = acc.finish();
    assert_eq!(keys.guessed_primary_key.as_deref(), Some("a_id"));
}
