//! Build, install and uninstall subquote.
//!
//! Usage: subquote-install [--prefix DIR] [--destdir DIR] [build|install|uninstall]
//!
//! `PREFIX` (default /usr/local) and `DESTDIR` are read from the environment
//! when the flags are absent, so it behaves like the Makefile targets.

use clap::{Parser, Subcommand};
use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use subquote::install::{BuildTool, InstallLayout, BINARY_NAME, DEFAULT_PREFIX};
use subquote::logger;

/// Build and install subquote.
#[derive(Parser, Debug)]
#[command(name = "subquote-install", version)]
struct Opt {
    /// Installation prefix
    #[arg(long, env = "PREFIX", default_value = DEFAULT_PREFIX, global = true)]
    prefix: PathBuf,

    /// Staging directory prepended to the prefix
    #[arg(long, env = "DESTDIR", global = true)]
    destdir: Option<PathBuf>,

    /// Be verbose
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    cmd: Option<SubCommands>,
}

#[derive(Subcommand, Debug, PartialEq)]
enum SubCommands {
    /// Compile the release binary with cargo
    Build {
        /// Directory containing Cargo.toml
        #[arg(long, default_value = ".")]
        project_dir: PathBuf,
    },
    /// Copy the release binary to $DESTDIR$PREFIX/bin with mode 0755
    Install {
        /// Binary to install (default: target/release/subquote)
        #[arg(long)]
        artifact: Option<PathBuf>,
    },
    /// Remove the installed binary
    Uninstall,
}

fn main() -> ExitCode {
    let opt = Opt::parse();

    let log_env = env::var(logger::LOG_ENV).ok();
    if let Err(e) = logger::init(logger::level_for(opt.verbose, log_env.as_deref())) {
        eprintln!("[Install] WARNING: Failed to install logger: {}", e);
    }

    match run(opt) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::debug!("{:?}", e);
            eprintln!("{}", e.user_message());
            ExitCode::FAILURE
        }
    }
}

fn run(opt: Opt) -> subquote::Result<()> {
    let layout = InstallLayout::new(Some(opt.prefix), opt.destdir);
    let cmd = opt.cmd.unwrap_or(SubCommands::Build {
        project_dir: PathBuf::from("."),
    });

    match cmd {
        SubCommands::Build { project_dir } => {
            let tool = BuildTool::locate()?;
            let target_dir = env::var_os("CARGO_TARGET_DIR").map(PathBuf::from);
            let artifact = tool.build(&project_dir, target_dir.as_deref())?;
            println!("{}", artifact.display());
        }
        SubCommands::Install { artifact } => {
            let artifact = artifact.unwrap_or_else(|| {
                env::var_os("CARGO_TARGET_DIR")
                    .map(PathBuf::from)
                    .unwrap_or_else(|| PathBuf::from("target"))
                    .join("release")
                    .join(BINARY_NAME)
            });
            log::info!("Installing into {}", layout.bin_dir().display());
            let target = layout.install(&artifact)?;
            println!("{}", target.display());
        }
        SubCommands::Uninstall => {
            if !layout.uninstall()? {
                log::info!("Nothing to uninstall");
            }
        }
    }

    Ok(())
}
