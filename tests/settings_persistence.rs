use appshell::data::ShellSettings;

#[test]
fn round_trips_the_profile_picture_path() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");

    let settings = ShellSettings {
        profile_picture_path: Some("/home/user/Pictures/me.png".to_string()),
    };
    settings.save_to(&path).unwrap();

    let loaded = ShellSettings::load_from(&path).unwrap();
    assert_eq!(loaded, settings);
}

#[test]
fn an_unset_path_survives_the_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");

    ShellSettings::default().save_to(&path).unwrap();

    let loaded = ShellSettings::load_from(&path).unwrap();
    assert_eq!(loaded.profile_picture_path, None);
}

#[test]
fn saving_again_overwrites_the_previous_value() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("settings.yaml");

    ShellSettings {
        profile_picture_path: Some("/old.png".to_string()),
    }
    .save_to(&path)
    .unwrap();
    ShellSettings {
        profile_picture_path: Some("/new.png".to_string()),
    }
    .save_to(&path)
    .unwrap();

    let loaded = ShellSettings::load_from(&path).unwrap();
    assert_eq!(loaded.profile_picture_path.as_deref(), Some("/new.png"));
}

#[test]
fn loading_a_missing_file_is_an_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("does-not-exist.yaml");
    assert!(ShellSettings::load_from(&path).is_err());
}

#[test]
fn save_creates_the_parent_directory() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(".appshell-test").join("settings.yaml");

    ShellSettings::default().save_to(&path).unwrap();
    assert!(path.exists());
}
