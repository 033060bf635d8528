//! Locating and driving the build tool.

use crate::error::InstallError;
use crate::install::BINARY_NAME;
use std::env;
use std::ffi::OsStr;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Build tool driving compilation
pub const BUILD_TOOL: &str = "cargo";

/// Search a `PATH`-style list of directories for an executable named `name`.
pub fn find_in_path(name: &str, path_var: &OsStr) -> Option<PathBuf> {
    env::split_paths(path_var)
        .filter(|dir| !dir.as_os_str().is_empty())
        .map(|dir| dir.join(name))
        .find(|candidate| is_executable(candidate))
}

#[cfg(unix)]
fn is_executable(path: &Path) -> bool {
    use std::os::unix::fs::PermissionsExt;
    path.metadata()
        .map(|meta| meta.is_file() && meta.permissions().mode() & 0o111 != 0)
        .unwrap_or(false)
}

#[cfg(not(unix))]
fn is_executable(path: &Path) -> bool {
    path.is_file()
}

/// A located build tool executable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildTool {
    program: PathBuf,
}

impl BuildTool {
    pub fn new(program: impl Into<PathBuf>) -> Self {
        BuildTool {
            program: program.into(),
        }
    }

    /// Find `cargo` on the process `PATH`.
    pub fn locate() -> Result<Self, InstallError> {
        Self::locate_in(&env::var_os("PATH").unwrap_or_default())
    }

    /// Find `cargo` on the given `PATH` value.
    pub fn locate_in(path_var: &OsStr) -> Result<Self, InstallError> {
        find_in_path(BUILD_TOOL, path_var)
            .map(Self::new)
            .ok_or_else(|| InstallError::BuildToolMissing {
                tool: BUILD_TOOL.to_string(),
            })
    }

    pub fn program(&self) -> &Path {
        &self.program
    }

    /// Run `cargo build --release` in `project_dir` and return the artifact path.
    ///
    /// `target_dir` mirrors `CARGO_TARGET_DIR`; without it artifacts land in
    /// `project_dir/target`.
    pub fn build(
        &self,
        project_dir: &Path,
        target_dir: Option<&Path>,
    ) -> Result<PathBuf, InstallError> {
        let mut command = Command::new(&self.program);
        command.arg("build").arg("--release").current_dir(project_dir);
        if let Some(dir) = target_dir {
            command.env("CARGO_TARGET_DIR", dir);
        }

        log::info!(
            "Running {} build --release in {}",
            self.program.display(),
            project_dir.display()
        );
        let status = command.status().map_err(|source| InstallError::Spawn {
            tool: BUILD_TOOL.to_string(),
            source,
        })?;
        if !status.success() {
            return Err(InstallError::BuildFailed {
                tool: BUILD_TOOL.to_string(),
                code: status.code(),
            });
        }

        let artifact = target_dir
            .map(Path::to_path_buf)
            .unwrap_or_else(|| project_dir.join("target"))
            .join("release")
            .join(BINARY_NAME);
        if !artifact.is_file() {
            return Err(InstallError::ArtifactMissing(artifact));
        }
        log::info!("Built {}", artifact.display());
        Ok(artifact)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::ffi::OsString;
    use tempfile::tempdir;

    #[test]
    fn test_missing_tool() {
        let temp = tempdir().unwrap();
        let err = BuildTool::locate_in(temp.path().as_os_str()).unwrap_err();
        assert!(matches!(err, InstallError::BuildToolMissing { .. }));
        assert!(err.to_string().contains("rustup.rs"));
    }

    #[test]
    fn test_empty_path() {
        assert_eq!(find_in_path("cargo", &OsString::new()), None);
    }

    #[cfg(unix)]
    #[test]
    fn test_only_executables_match() {
        use std::fs;
        use std::os::unix::fs::PermissionsExt;

        let plain = tempdir().unwrap();
        let exec = tempdir().unwrap();
        fs::write(plain.path().join("cargo"), "").unwrap();
        let tool = exec.path().join("cargo");
        fs::write(&tool, "#!/bin/sh\n").unwrap();
        fs::set_permissions(&tool, fs::Permissions::from_mode(0o755)).unwrap();

        let path_var = env::join_paths([plain.path(), exec.path()]).unwrap();
        assert_eq!(find_in_path("cargo", &path_var), Some(tool));
    }
}
