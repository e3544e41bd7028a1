use assert_cmd::Command;
use predicates::prelude::*;
use std::fs;
use std::path::Path;

fn forkful(dir: &Path) -> Command {
    let mut cmd = Command::cargo_bin("forkful").unwrap();
    cmd.arg("--dir").arg(dir);
    cmd
}

fn create_recipe(dir: &Path, title: &str, photos: &[&Path]) {
    let mut cmd = forkful(dir);
    cmd.arg("create")
        .arg(title)
        .arg("--category")
        .arg("Dinner")
        .arg("--ingredients")
        .arg("salt\npepper")
        .arg("--instructions")
        .arg("Mix everything.\nServe warm.");
    for photo in photos {
        cmd.arg("--photo").arg(photo);
    }
    cmd.assert()
        .success()
        .stdout(predicates::str::contains("Recipe created"));
}

fn stored_photos(dir: &Path, id: u64) -> Vec<String> {
    let raw = fs::read_to_string(dir.join("recipes.json")).unwrap();
    let recipes: serde_json::Value = serde_json::from_str(&raw).unwrap();
    recipes
        .as_array()
        .unwrap()
        .iter()
        .find(|r| r["id"] == id)
        .unwrap()["photos"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p.as_str().unwrap().to_string())
        .collect()
}

#[test]
fn test_init_creates_the_box() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path().join("box");

    forkful(&dir)
        .arg("init")
        .assert()
        .success()
        .stdout(predicates::str::contains("Initialized recipe box"));

    assert_eq!(fs::read_to_string(dir.join("recipes.json")).unwrap(), "[]");
    assert!(dir.join("photos").is_dir());
}

#[test]
fn test_create_list_show_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    create_recipe(dir, "Goulash", &[]);

    forkful(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Goulash"));

    forkful(dir)
        .arg("show")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("- salt"))
        .stdout(predicates::str::contains("1. Mix everything."))
        .stdout(predicates::str::contains("2. Serve warm."));
}

#[test]
fn test_create_caps_photos_per_submission() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    let photo_files: Vec<_> = (0..7)
        .map(|i| {
            let p = dir.join(format!("pic{}.jpg", i));
            fs::write(&p, b"img").unwrap();
            p
        })
        .collect();
    let refs: Vec<&Path> = photo_files.iter().map(|p| p.as_path()).collect();

    create_recipe(dir, "Soup", &refs);

    assert_eq!(stored_photos(dir, 1).len(), 5);
}

#[test]
fn test_create_skips_unsupported_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    let good = dir.join("plated.jpg");
    let bad = dir.join("notes.txt");
    fs::write(&good, b"img").unwrap();
    fs::write(&bad, b"text").unwrap();

    create_recipe(dir, "Soup", &[&good, &bad]);

    let photos = stored_photos(dir, 1);
    assert_eq!(photos.len(), 1);
    assert!(photos[0].ends_with("plated.jpg"));
}

#[test]
fn test_edit_keep_drops_the_rest() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    let a = dir.join("a.jpg");
    let b = dir.join("b.jpg");
    fs::write(&a, b"img-a").unwrap();
    fs::write(&b, b"img-b").unwrap();
    create_recipe(dir, "Soup", &[&a, &b]);

    let before = stored_photos(dir, 1);
    assert_eq!(before.len(), 2);

    forkful(dir)
        .arg("edit")
        .arg("1")
        .arg("--keep")
        .arg(&before[0])
        .assert()
        .success()
        .stdout(predicates::str::contains("Recipe updated"));

    let after = stored_photos(dir, 1);
    assert_eq!(after, vec![before[0].clone()]);
    assert!(dir.join(&before[0]).exists());
    assert!(!dir.join(&before[1]).exists());
}

#[test]
fn test_edit_without_flags_changes_nothing() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    create_recipe(dir, "Goulash", &[]);

    forkful(dir).arg("edit").arg("1").assert().success();

    forkful(dir)
        .arg("show")
        .arg("1")
        .assert()
        .success()
        .stdout(predicates::str::contains("Goulash"))
        .stdout(predicates::str::contains("- salt"));
}

#[test]
fn test_delete_renumbers_survivors() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    for title in ["Soup", "Salad", "Cake"] {
        create_recipe(dir, title, &[]);
    }

    forkful(dir)
        .arg("delete")
        .arg("2")
        .arg("--yes")
        .assert()
        .success()
        .stdout(predicates::str::contains("Recipe removed (#2): Salad"));

    forkful(dir)
        .arg("list")
        .assert()
        .success()
        .stdout(predicates::str::contains("Salad").not());

    // Cake slid into the freed id
    forkful(dir)
        .arg("show")
        .arg("2")
        .assert()
        .success()
        .stdout(predicates::str::contains("Cake"));
}

#[test]
fn test_doctor_sweeps_stray_files() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();
    create_recipe(dir, "Soup", &[]);

    let stray = dir.join("photos").join("stray.jpg");
    fs::create_dir_all(dir.join("photos")).unwrap();
    fs::write(&stray, b"img").unwrap();

    forkful(dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicates::str::contains("Deleted 1 photo file(s)"));

    assert!(!stray.exists());

    forkful(dir)
        .arg("doctor")
        .assert()
        .success()
        .stdout(predicates::str::contains("No inconsistencies found."));
}

#[test]
fn test_unknown_id_is_reported() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    forkful(dir)
        .arg("show")
        .arg("9")
        .assert()
        .failure()
        .stderr(predicates::str::contains("no recipe with id 9"));
}

#[test]
fn test_config_round_trip() {
    let temp_dir = tempfile::tempdir().unwrap();
    let dir = temp_dir.path();

    forkful(dir)
        .arg("config")
        .arg("photo-exts")
        .arg("png,webp")
        .assert()
        .success()
        .stdout(predicates::str::contains("photo-exts set to png, webp"));

    forkful(dir)
        .arg("config")
        .arg("photo-exts")
        .assert()
        .success()
        .stdout(predicates::str::contains("png, webp"));

    // The new allow-set is live for uploads
    let jpg = dir.join("pic.jpg");
    fs::write(&jpg, b"img").unwrap();
    create_recipe(dir, "Soup", &[&jpg]);
    assert!(stored_photos(dir, 1).is_empty());
}
