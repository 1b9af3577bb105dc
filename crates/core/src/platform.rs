//! Platform detection for locating tools inside virtual environments

use std::env;
use std::path::{Path, PathBuf};

/// Where executables live inside a virtual environment on this platform
#[derive(Debug, Clone)]
pub struct VenvLayout {
    /// Scripts directory inside the venv ("bin" or "Scripts")
    pub scripts_dir: &'static str,
    /// Executable file suffix ("" or ".exe")
    pub exe_suffix: &'static str,
}

impl VenvLayout {
    /// Detect the layout for the current platform
    pub fn current() -> Self {
        Self::from_os(env::consts::OS)
    }

    /// Create layout info from an OS string
    pub fn from_os(os: &str) -> Self {
        match os {
            "windows" => Self {
                scripts_dir: "Scripts",
                exe_suffix: ".exe",
            },
            _ => Self {
                scripts_dir: "bin",
                exe_suffix: "",
            },
        }
    }

    /// Full path of a program inside the given virtual environment
    pub fn executable(&self, venv_dir: &Path, program: &str) -> PathBuf {
        venv_dir
            .join(self.scripts_dir)
            .join(format!("{}{}", program, self.exe_suffix))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_detection() {
        let layout = VenvLayout::current();
        assert!(!layout.scripts_dir.is_empty());
    }

    #[test]
    fn test_unix_layout() {
        let layout = VenvLayout::from_os("linux");
        assert_eq!(layout.scripts_dir, "bin");
        assert_eq!(layout.exe_suffix, "");
        assert_eq!(
            layout.executable(Path::new("/tmp/venv"), "ruff"),
            PathBuf::from("/tmp/venv/bin/ruff")
        );
    }

    #[test]
    fn test_macos_layout() {
        let layout = VenvLayout::from_os("macos");
        assert_eq!(layout.scripts_dir, "bin");
    }

    #[test]
    fn test_windows_layout() {
        let layout = VenvLayout::from_os("windows");
        assert_eq!(layout.scripts_dir, "Scripts");
        assert_eq!(layout.exe_suffix, ".exe");
        assert_eq!(
            layout.executable(Path::new("venv"), "pytest"),
            PathBuf::from("venv/Scripts/pytest.exe")
        );
    }
}
