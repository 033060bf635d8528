//! Installation paths and the install/uninstall operations.

use crate::error::InstallError;
use crate::install::BINARY_NAME;
use std::env;
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Prefix used when `PREFIX` is unset or empty
pub const DEFAULT_PREFIX: &str = "/usr/local";

/// Where the binary goes: `$DESTDIR$PREFIX/bin/subquote`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallLayout {
    prefix: PathBuf,
    destdir: Option<PathBuf>,
    binary_name: String,
}

impl InstallLayout {
    /// Empty values count as unset, like `make` variables.
    pub fn new(prefix: Option<PathBuf>, destdir: Option<PathBuf>) -> Self {
        let prefix = prefix
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| PathBuf::from(DEFAULT_PREFIX));
        let destdir = destdir.filter(|d| !d.as_os_str().is_empty());
        InstallLayout {
            prefix,
            destdir,
            binary_name: BINARY_NAME.to_string(),
        }
    }

    /// Layout from the `PREFIX` and `DESTDIR` environment variables.
    pub fn from_env() -> Self {
        Self::new(
            env::var_os("PREFIX").map(PathBuf::from),
            env::var_os("DESTDIR").map(PathBuf::from),
        )
    }

    /// `$DESTDIR$PREFIX/bin`. The two are concatenated, not joined, so an
    /// absolute prefix lands inside the staging directory.
    pub fn bin_dir(&self) -> PathBuf {
        let root = match &self.destdir {
            Some(destdir) => {
                let mut root: OsString = destdir.clone().into_os_string();
                root.push(self.prefix.as_os_str());
                PathBuf::from(root)
            }
            None => self.prefix.clone(),
        };
        root.join("bin")
    }

    pub fn installed_path(&self) -> PathBuf {
        self.bin_dir().join(&self.binary_name)
    }

    /// Copy the artifact into `bin_dir()` with mode 0755. Safe to repeat.
    pub fn install(&self, artifact: &Path) -> Result<PathBuf, InstallError> {
        if !artifact.is_file() {
            return Err(InstallError::ArtifactMissing(artifact.to_path_buf()));
        }

        let bin_dir = self.bin_dir();
        fs::create_dir_all(&bin_dir).map_err(|source| InstallError::Io {
            path: bin_dir.clone(),
            source,
        })?;

        let target = self.installed_path();
        fs::copy(artifact, &target).map_err(|source| InstallError::Io {
            path: target.clone(),
            source,
        })?;
        set_executable(&target)?;

        log::info!("Installed {} to {}", artifact.display(), target.display());
        Ok(target)
    }

    /// Remove the installed binary. Returns whether a file was removed.
    pub fn uninstall(&self) -> Result<bool, InstallError> {
        let target = self.installed_path();
        match fs::remove_file(&target) {
            Ok(()) => {
                log::info!("Removed {}", target.display());
                Ok(true)
            }
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("{} is not installed", target.display());
                Ok(false)
            }
            Err(source) => Err(InstallError::Io {
                path: target,
                source,
            }),
        }
    }
}

impl Default for InstallLayout {
    fn default() -> Self {
        Self::new(None, None)
    }
}

#[cfg(unix)]
fn set_executable(path: &Path) -> Result<(), InstallError> {
    use std::os::unix::fs::PermissionsExt;
    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).map_err(|source| {
        InstallError::Io {
            path: path.to_path_buf(),
            source,
        }
    })
}

#[cfg(not(unix))]
fn set_executable(_path: &Path) -> Result<(), InstallError> {
    Ok(())
}
