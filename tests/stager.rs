#[cfg(test)]
mod tests {
    use flangup::libs::stager::Stager;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn scratch_base(temp_dir: &TempDir) -> PathBuf {
        temp_dir.path().join("staged")
    }

    fn source_binary(temp_dir: &TempDir) -> PathBuf {
        let path = temp_dir.path().join("flang");
        fs::write(&path, b"#!/bin/sh\necho flang\n").unwrap();
        path
    }

    #[test]
    fn test_staging_copies_into_private_scratch_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = source_binary(&temp_dir);
        let mut stager = Stager::with_base(scratch_base(&temp_dir));

        let staged = stager.stage(&source).unwrap();
        assert_ne!(staged, source);
        assert!(staged.starts_with(scratch_base(&temp_dir)));
        assert_eq!(fs::read(&staged).unwrap(), fs::read(&source).unwrap());
        assert_eq!(staged.file_name(), source.file_name());
    }

    #[cfg(unix)]
    #[test]
    fn test_staged_copy_is_executable() {
        use std::os::unix::fs::PermissionsExt;

        let temp_dir = tempfile::tempdir().unwrap();
        let source = source_binary(&temp_dir);
        let mut stager = Stager::with_base(scratch_base(&temp_dir));

        let staged = stager.stage(&source).unwrap();
        let mode = fs::metadata(&staged).unwrap().permissions().mode();
        assert_ne!(mode & 0o111, 0);
    }

    #[test]
    fn test_nonexistent_source_passes_through_unchanged() {
        let temp_dir = tempfile::tempdir().unwrap();
        let mut stager = Stager::with_base(scratch_base(&temp_dir));

        // A bare command name resolvable via PATH is not a file on disk.
        let source = PathBuf::from("flang-from-path");
        let staged = stager.stage(&source).unwrap();
        assert_eq!(staged, source);
        assert!(!scratch_base(&temp_dir).exists());
    }

    #[test]
    fn test_restaging_removes_the_previous_copy() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = source_binary(&temp_dir);
        let mut stager = Stager::with_base(scratch_base(&temp_dir));

        let first = stager.stage(&source).unwrap();
        let second = stager.stage(&source).unwrap();

        assert_ne!(first, second);
        assert!(!first.exists(), "previous scratch copy must be removed");
        assert!(second.is_file());
    }

    #[test]
    fn test_cleanup_and_drop_remove_the_scratch_dir() {
        let temp_dir = tempfile::tempdir().unwrap();
        let source = source_binary(&temp_dir);

        let staged = {
            let mut stager = Stager::with_base(scratch_base(&temp_dir));
            let staged = stager.stage(&source).unwrap();
            assert!(staged.is_file());
            staged
        };
        assert!(!staged.exists(), "drop must tear the scratch copy down");
    }

    #[test]
    fn test_construction_sweeps_leftovers_from_prior_runs() {
        let temp_dir = tempfile::tempdir().unwrap();
        let base = scratch_base(&temp_dir);

        let stale = base.join("stage-999-0-0");
        fs::create_dir_all(&stale).unwrap();
        fs::write(stale.join("flang"), b"stale copy").unwrap();

        let _stager = Stager::with_base(base.clone());
        assert!(!stale.exists(), "stale scratch dirs must be swept on startup");
    }
}
