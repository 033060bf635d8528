//! Packaging: building the release binary and installing it under a prefix.
//!
//! Mirrors the `Makefile` targets:
//!
//! - `build`: requires `cargo` on `PATH`, runs `cargo build --release`
//! - `install`: copies the artifact to `$DESTDIR$PREFIX/bin` with mode 0755
//! - `uninstall`: removes the installed binary, succeeding when it is absent

pub mod layout;
pub mod toolchain;

pub use layout::{InstallLayout, DEFAULT_PREFIX};
pub use toolchain::{find_in_path, BuildTool, BUILD_TOOL};

/// Name of the installed binary
pub const BINARY_NAME: &str = "subquote";
