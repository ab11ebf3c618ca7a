//! CSV import integration tests
//!
//! Reads monster files from disk and extends pool snapshots with them.

use std::io::Write;
use tempfile::NamedTempFile;
use warband::monsters::{load_csv, CSV_TEMPLATE};
use warband::rules::ChallengeRating;
use warband::{ImportError, MonsterPool, PoolFilter};

fn csv_file(contents: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

// ============================================================================
// Successful imports
// ============================================================================

#[test]
fn test_import_extends_new_snapshot_only() {
    let file = csv_file(
        "name,cr,type,tags,environments\n\
         Bog Hag,3,fey,\"curse|swamp-magic\",\"swamp|marsh\"\n\
         Mire Rat,1/8,beast,,swamp\n",
    );
    let base = MonsterPool::seed();
    let extra = load_csv(file.path()).unwrap();
    let extended = base.extend(extra);

    assert_eq!(extended.len(), base.len() + 2);
    assert!(!base.monsters().iter().any(|m| m.name() == "Bog Hag"));

    let hag = &extended.monsters()[base.len()];
    assert_eq!(hag.name(), "Bog Hag");
    assert_eq!(hag.xp(), 700);
    assert_eq!(hag.tags(), ["curse", "swamp-magic"]);

    let rat = &extended.monsters()[base.len() + 1];
    assert_eq!(rat.challenge_rating(), ChallengeRating::ONE_EIGHTH);
    assert!(rat.tags().is_empty());
    assert_eq!(rat.environments(), ["swamp"]);
}

#[test]
fn test_imported_monsters_are_filterable() {
    let file = csv_file("type,environments,name,cr\nfey,glimmerwood,Pixie Swarm,0.5\n");
    let pool = MonsterPool::seed().extend(load_csv(file.path()).unwrap());
    let filtered = PoolFilter::new()
        .with_environment("glimmerwood")
        .apply(pool.monsters());
    assert_eq!(filtered.len(), 1);
    assert_eq!(filtered[0].xp(), 100);
}

#[test]
fn test_template_file_round_trip() {
    let file = csv_file(CSV_TEMPLATE);
    let monsters = load_csv(file.path()).unwrap();
    assert_eq!(monsters.len(), 1);
    assert_eq!(monsters[0].name(), "Goblin");
}

// ============================================================================
// Failures leave the pool alone
// ============================================================================

#[test]
fn test_malformed_row_fails_whole_import() {
    let file = csv_file(
        "name,cr,type\n\
         Good One,1,beast\n\
         Bad One,lots,beast\n\
         Another,2,beast\n",
    );
    let pool = MonsterPool::seed();
    let before = pool.len();

    let result = load_csv(file.path()).map(|extra| pool.extend(extra));
    match result {
        Err(ImportError::ChallengeRating { line, .. }) => assert_eq!(line, 3),
        other => panic!("expected a rating error, got {other:?}"),
    }
    assert_eq!(pool.len(), before);
}

#[test]
fn test_missing_name_is_row_error() {
    let file = csv_file("name,cr\n,2\n");
    let err = load_csv(file.path()).unwrap_err();
    assert!(matches!(err, ImportError::Row { line: 2, .. }));
    assert!(err.to_string().starts_with("line 2"));
}

#[test]
fn test_missing_file_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let err = load_csv(dir.path().join("nope.csv")).unwrap_err();
    assert!(matches!(err, ImportError::Io { .. }));
}
