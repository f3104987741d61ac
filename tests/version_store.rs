#[cfg(test)]
mod tests {
    use flangup::libs::version_store::{VersionStore, VERSION_FILE_NAME};
    use std::fs;
    use tempfile::TempDir;

    fn store_in(temp_dir: &TempDir) -> VersionStore {
        VersionStore::new(temp_dir.path().join(VERSION_FILE_NAME))
    }

    #[test]
    fn test_write_then_read_round_trip() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store.write("v1.2.0").unwrap();
        let record = store.read().unwrap();
        assert_eq!(record.version, "v1.2.0");
    }

    #[test]
    fn test_write_overwrites_previous_record() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store.write("v1.1.0").unwrap();
        store.write("v1.2.0").unwrap();
        assert_eq!(store.read().unwrap().version, "v1.2.0");
    }

    #[test]
    fn test_missing_file_reads_as_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        assert!(store_in(&temp_dir).read().is_none());
    }

    #[test]
    fn test_corrupt_file_reads_as_none() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        fs::write(temp_dir.path().join(VERSION_FILE_NAME), "{ not json").unwrap();
        assert!(store.read().is_none());

        fs::write(temp_dir.path().join(VERSION_FILE_NAME), r#"{"version": 42}"#).unwrap();
        assert!(store.read().is_none());
    }

    #[test]
    fn test_record_uses_camel_case_timestamp_field() {
        let temp_dir = tempfile::tempdir().unwrap();
        let store = store_in(&temp_dir);

        store.write("v1.2.0").unwrap();
        let raw = fs::read_to_string(temp_dir.path().join(VERSION_FILE_NAME)).unwrap();
        assert!(raw.contains("\"installedAt\""));
    }
}
