//! Host platform detection
//!
//! Decides which shell runs commands and whether output checks try an
//! executable suffix.

use std::env;

/// Environment variable holding the OS identifier
pub const OS_ENV_VAR: &str = "OS";

/// Host platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Platform {
    Posix,
    Windows,
}

impl Platform {
    /// Detect the platform from the `OS` environment variable
    pub fn detect() -> Self {
        Self::from_os_id(&env::var(OS_ENV_VAR).unwrap_or_default())
    }

    /// Classify an OS identifier string such as `Windows_NT`
    pub fn from_os_id(os_id: &str) -> Self {
        if os_id.to_lowercase().contains("windows") {
            Platform::Windows
        } else {
            Platform::Posix
        }
    }

    /// Shell invocation used for plain commands
    pub fn shell(&self) -> Vec<String> {
        match self {
            Platform::Posix => vec!["sh".to_string(), "-c".to_string()],
            Platform::Windows => vec!["cmd".to_string(), "/C".to_string()],
        }
    }

    /// Suffix tried when an output target is missing
    pub fn exe_suffix(&self) -> Option<&'static str> {
        match self {
            Platform::Posix => None,
            Platform::Windows => Some(".exe"),
        }
    }
}

impl Default for Platform {
    fn default() -> Self {
        Self::detect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_windows_ids() {
        assert_eq!(Platform::from_os_id("Windows_NT"), Platform::Windows);
        assert_eq!(Platform::from_os_id("WINDOWS"), Platform::Windows);
    }

    #[test]
    fn test_other_ids_are_posix() {
        assert_eq!(Platform::from_os_id(""), Platform::Posix);
        assert_eq!(Platform::from_os_id("linux"), Platform::Posix);
        assert_eq!(Platform::from_os_id("Darwin"), Platform::Posix);
    }

    #[test]
    fn test_shell_selection() {
        assert_eq!(Platform::Posix.shell(), vec!["sh", "-c"]);
        assert_eq!(Platform::Windows.shell(), vec!["cmd", "/C"]);
    }

    #[test]
    fn test_exe_suffix() {
        assert_eq!(Platform::Posix.exe_suffix(), None);
        assert_eq!(Platform::Windows.exe_suffix(), Some(".exe"));
    }
}
