use clipsift_core::*;
use std::fs;
use std::path::PathBuf;
use tempfile::TempDir;

#[test]
fn test_explicit_path_wins() {
    let candidates = vec![PathBuf::from("/does/not/matter")];
    let result =
        resolve_store_path_from(Some("/explicit/Storage.sqlite"), Some("/env.sqlite"), &candidates)
            .unwrap();
    assert_eq!(result, PathBuf::from("/explicit/Storage.sqlite"));
}

#[test]
fn test_env_path_beats_discovery() {
    let temp = TempDir::new().unwrap();
    let present = temp.path().join("present.sqlite");
    fs::write(&present, b"").unwrap();

    let result =
        resolve_store_path_from(None, Some("/from/env.sqlite"), std::slice::from_ref(&present))
            .unwrap();
    assert_eq!(result, PathBuf::from("/from/env.sqlite"));
}

#[test]
fn test_empty_env_value_is_ignored() {
    let temp = TempDir::new().unwrap();
    let present = temp.path().join("present.sqlite");
    fs::write(&present, b"").unwrap();

    let result = resolve_store_path_from(None, Some(""), std::slice::from_ref(&present)).unwrap();
    assert_eq!(result, present);
}

#[test]
fn test_first_existing_candidate_is_used() {
    let temp = TempDir::new().unwrap();
    let missing = temp.path().join("missing.sqlite");
    let second = temp.path().join("second.sqlite");
    let third = temp.path().join("third.sqlite");
    fs::write(&second, b"").unwrap();
    fs::write(&third, b"").unwrap();

    let result = resolve_store_path_from(None, None, &[missing, second.clone(), third]).unwrap();
    assert_eq!(result, second);
}

#[test]
fn test_directories_are_not_stores() {
    let temp = TempDir::new().unwrap();
    let dir = temp.path().join("Storage.sqlite");
    fs::create_dir(&dir).unwrap();

    let err = resolve_store_path_from(None, None, &[dir]).unwrap_err();
    assert!(matches!(err, Error::NotFound { .. }));
}

#[test]
fn test_not_found_lists_searched_paths() {
    let candidates = candidate_paths(
        Some(PathBuf::from("/home/nobody").as_path()),
        PathBuf::from("/work").as_path(),
    );
    let err = resolve_store_path_from(None, None, &candidates).unwrap_err();
    let msg = err.to_string();

    assert!(msg.contains("Maccy database not found"));
    assert!(msg.contains("/home/nobody/Library/Application Support/Maccy/Storage.sqlite"));
    assert!(msg.contains("/work/Maccy-Storage.sqlite"));
    assert!(msg.contains(STORE_PATH_ENV));
}

#[test]
fn test_candidate_order() {
    let home = PathBuf::from("/Users/me");
    let cwd = PathBuf::from("/tmp/work");
    let candidates = candidate_paths(Some(home.as_path()), &cwd);

    assert_eq!(candidates.len(), MACCY_STORE_LOCATIONS.len() + 1);
    assert_eq!(candidates[0], home.join(MACCY_STORE_LOCATIONS[0]));
    assert_eq!(candidates.last().unwrap(), &cwd.join(TESTING_STORE_NAME));
}

#[test]
fn test_candidates_without_home_only_use_working_dir() {
    let cwd = PathBuf::from("/tmp/work");
    let candidates = candidate_paths(None, &cwd);
    assert_eq!(candidates, vec![cwd.join(TESTING_STORE_NAME)]);
}

#[test]
fn test_expand_tilde_leaves_plain_paths() {
    assert_eq!(expand_tilde("/abs/path"), PathBuf::from("/abs/path"));
    assert_eq!(expand_tilde("relative"), PathBuf::from("relative"));
}
