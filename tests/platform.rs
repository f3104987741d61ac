#[cfg(test)]
mod tests {
    use flangup::libs::platform;

    #[test]
    fn test_supported_pairs_resolve() {
        assert_eq!(platform::suffix("windows", "x86_64"), Some("win-x64"));
        assert_eq!(platform::suffix("linux", "x86_64"), Some("linux-x64"));
        assert_eq!(platform::suffix("linux", "aarch64"), Some("linux-arm64"));
        assert_eq!(platform::suffix("macos", "x86_64"), Some("macos-x64"));
        assert_eq!(platform::suffix("macos", "aarch64"), Some("macos-arm64"));
    }

    #[test]
    fn test_unsupported_pairs_are_rejected() {
        assert_eq!(platform::suffix("linux", "riscv64"), None);
        assert_eq!(platform::suffix("freebsd", "x86_64"), None);
        assert_eq!(platform::suffix("windows", "aarch64"), None);
        assert_eq!(platform::suffix("", ""), None);
    }

    #[test]
    fn test_current_matches_host_consts() {
        use std::env::consts::{ARCH, OS};
        match platform::suffix(OS, ARCH) {
            Some(expected) => assert_eq!(platform::current().unwrap(), expected),
            None => assert!(platform::current().is_err()),
        }
    }

    #[test]
    fn test_binary_name_follows_host_convention() {
        if cfg!(windows) {
            assert_eq!(platform::binary_name(), "flang.exe");
        } else {
            assert_eq!(platform::binary_name(), "flang");
        }
    }
}
