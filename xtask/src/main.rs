// Copyright (C) 2024-2025 Fred Clausen and the ratatui project contributors
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! # xtask - Developer automation for the admin catalog
//!
//! - `cargo xtask ci` runs lint, build and the standard test suite.
//! - `cargo xtask test-mariadb` starts a throwaway `MariaDB` container and runs
//!   the ignored backend validation tests of `admin-catalog-persistence`
//!   against it.
//!
//! Standard `cargo test` never needs a database server. Everything that does
//! is opt-in and lives here.

#![deny(
    clippy::pedantic,
    //clippy::cargo,
    clippy::nursery,
    clippy::style,
    clippy::correctness,
    clippy::all
)]

use std::{fmt::Debug, io, process::Output, thread::sleep, time::Duration, vec};

use cargo_metadata::MetadataCommand;
use clap::{Parser, Subcommand};
use clap_verbosity_flag::{InfoLevel, Verbosity};
use color_eyre::{eyre::Context, Result};
use duct::cmd;
use tracing::level_filters::LevelFilter;
use tracing_log::AsTrace;

/// Package holding the backend validation tests.
const PERSISTENCE_PACKAGE: &str = "admin-catalog-persistence";

/// Test module filter passed to `cargo test`.
const BACKEND_TEST_FILTER: &str = "backend_validation_tests";

/// Environment variable the backend validation tests check before running.
const TEST_BACKEND_ENV: &str = "CATALOG_TEST_BACKEND";

fn main() -> Result<()> {
    color_eyre::install()?;
    let args = Args::parse();
    tracing_subscriber::fmt()
        .with_max_level(args.log_level())
        .without_time()
        .init();

    match args.run() {
        Ok(()) => (),
        Err(err) => {
            tracing::error!("{err}");
            std::process::exit(1);
        }
    }
    Ok(())
}

#[derive(Debug, Parser)]
#[command(bin_name = "cargo xtask", styles = clap_cargo::style::CLAP_STYLING)]
struct Args {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    verbosity: Verbosity<InfoLevel>,
}

impl Args {
    fn run(self) -> Result<()> {
        self.command.run()
    }

    fn log_level(&self) -> LevelFilter {
        self.verbosity.log_level_filter().as_trace()
    }
}

#[derive(Clone, Debug, Subcommand)]
enum Command {
    /// Run CI checks (lint, build, test)
    CI,

    /// Build the project
    #[command(visible_alias = "b")]
    Build,

    /// Run cargo check
    #[command(visible_alias = "c")]
    Check,

    /// Run clippy, doc and formatting lints
    #[command(visible_alias = "l")]
    Lint,

    /// Run clippy on the project
    #[command(visible_alias = "cl")]
    LintClippy,

    /// Check that docs build without errors using docs.rs-equivalent flags
    #[command(visible_alias = "d")]
    LintDocs,

    /// Lint formatting issues in the project
    #[command(visible_alias = "lf")]
    LintFormatting,

    /// Fix formatting issues in the project
    #[command(visible_alias = "fmt")]
    FixFormatting,

    /// Run the standard test suite
    #[command(visible_alias = "t")]
    Test,

    /// Run backend validation tests against a `MariaDB` container
    TestMariadb,
}

impl Command {
    fn run(self) -> Result<()> {
        match self {
            Self::CI => ci(),
            Self::Build => build(),
            Self::Check => check(),
            Self::Lint => lint(),
            Self::LintClippy => lint_clippy(),
            Self::LintDocs => lint_docs(),
            Self::LintFormatting => lint_format(),
            Self::FixFormatting => fix_format(),
            Self::Test => test(),
            Self::TestMariadb => test_mariadb(),
        }
    }
}

/// Run CI checks (lint, build, test)
fn ci() -> Result<()> {
    lint()?;
    build()?;
    test()?;
    Ok(())
}

/// Build the project
fn build() -> Result<()> {
    run_cargo(vec!["build", "--all-targets", "--all-features"])
}

/// Run cargo check
fn check() -> Result<()> {
    run_cargo(vec!["check", "--all-targets", "--all-features"])
}

/// Lint clippy, docs and formatting
fn lint() -> Result<()> {
    lint_clippy()?;
    lint_docs()?;
    lint_format()?;
    Ok(())
}

/// Run clippy on the project
fn lint_clippy() -> Result<()> {
    run_cargo(vec![
        "clippy",
        "--all-targets",
        "--all-features",
        "--",
        "-D",
        "warnings",
    ])
}

/// Check that docs build without errors using docs.rs-equivalent flags
fn lint_docs() -> Result<()> {
    let meta = MetadataCommand::new()
        .exec()
        .wrap_err("failed to get cargo metadata")?;

    for package in meta.workspace_default_packages() {
        cmd(
            "cargo",
            [
                "doc",
                "--no-deps",
                "--all-features",
                "--package",
                &package.name,
            ],
        )
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .env("RUSTDOCFLAGS", "--cfg docsrs -D warnings")
        .run_with_trace()?;
    }

    Ok(())
}

/// Lint formatting issues in the project
fn lint_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all", "--check"])
}

/// Fix formatting issues in the project
fn fix_format() -> Result<()> {
    run_cargo_nightly(vec!["fmt", "--all"])
}

/// Run lib and doc tests for the workspace's default packages
fn test() -> Result<()> {
    run_cargo(vec!["test", "--all-targets", "--all-features"])?;
    run_cargo(vec!["test", "--doc", "--all-features"])
}

/// Run a cargo subcommand with the default toolchain
fn run_cargo(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args).run_with_trace()?;
    Ok(())
}

/// Run a cargo subcommand with the nightly toolchain
fn run_cargo_nightly(args: Vec<&str>) -> Result<()> {
    cmd("cargo", args)
        // CARGO env var is set because we're running in a cargo subcommand
        .env_remove("CARGO")
        .env("RUSTUP_TOOLCHAIN", "nightly")
        .run_with_trace()?;
    Ok(())
}

/// A `MariaDB` container started for one validation run.
///
/// The container is stopped and removed when this value is dropped.
struct MariadbContainer {
    name: &'static str,
    database: &'static str,
    user: &'static str,
    password: &'static str,
    port: u16,
}

impl MariadbContainer {
    const READY_ATTEMPTS: u32 = 30;

    /// Starts the container, replacing any leftover one with the same name.
    fn start() -> Result<Self> {
        let container: Self = Self {
            name: "admin-catalog-test-mariadb",
            database: "catalog_test",
            user: "catalog",
            password: "test_password",
            // Non-standard port to avoid clashing with a local server
            port: 3307,
        };
        container.remove();

        tracing::info!("Starting MariaDB container: {}", container.name);
        cmd!(
            "docker",
            "run",
            "--name",
            container.name,
            "-e",
            format!("MARIADB_DATABASE={}", container.database),
            "-e",
            format!("MARIADB_USER={}", container.user),
            "-e",
            format!("MARIADB_PASSWORD={}", container.password),
            "-e",
            "MARIADB_ROOT_PASSWORD=root_password",
            "-p",
            format!("{}:3306", container.port),
            "-d",
            "mariadb:11"
        )
        .run_with_trace()
        .wrap_err("Failed to start MariaDB container")?;

        Ok(container)
    }

    /// Polls the server once a second until it answers a query.
    fn wait_until_ready(&self) -> Result<()> {
        tracing::info!("Waiting for MariaDB to be ready...");
        for attempt in 1..=Self::READY_ATTEMPTS {
            sleep(Duration::from_secs(1));
            tracing::debug!("Connection attempt {}/{}", attempt, Self::READY_ATTEMPTS);

            let probe = cmd!(
                "docker",
                "exec",
                self.name,
                "mariadb",
                "-u",
                self.user,
                format!("-p{}", self.password),
                "-e",
                "SELECT 1"
            )
            .stdout_null()
            .stderr_null()
            .run();

            if probe.is_ok() {
                tracing::info!("MariaDB is ready");
                return Ok(());
            }
        }

        Err(color_eyre::eyre::eyre!(
            "MariaDB did not become ready within {} seconds",
            Self::READY_ATTEMPTS
        ))
    }

    fn database_url(&self) -> String {
        format!(
            "mysql://{}:{}@127.0.0.1:{}/{}",
            self.user, self.password, self.port, self.database
        )
    }

    fn remove(&self) {
        let _ = cmd!("docker", "stop", self.name)
            .stdout_null()
            .stderr_null()
            .run();
        let _ = cmd!("docker", "rm", self.name)
            .stdout_null()
            .stderr_null()
            .run();
    }
}

impl Drop for MariadbContainer {
    fn drop(&mut self) {
        tracing::info!("Stopping MariaDB container");
        self.remove();
    }
}

/// Run `MariaDB` backend validation tests
///
/// 1. Checks that Docker is available
/// 2. Starts a `MariaDB` 11 container and waits for it (up to 30 seconds)
/// 3. Runs the ignored `backend_validation_tests` of the persistence crate with
///    `DATABASE_URL` and `CATALOG_TEST_BACKEND=mariadb` set
/// 4. Removes the container, whether or not the tests passed
///
/// Requires Docker, a free port 3307 and the `MySQL` client libraries.
fn test_mariadb() -> Result<()> {
    tracing::info!("Starting MariaDB backend validation");

    cmd!("docker", "--version")
        .run_with_trace()
        .wrap_err("Docker is not available. Please install Docker.")?;

    let container: MariadbContainer = MariadbContainer::start()?;
    container.wait_until_ready()?;

    tracing::info!("Running MariaDB backend validation tests");
    cmd!(
        "cargo",
        "test",
        "--package",
        PERSISTENCE_PACKAGE,
        BACKEND_TEST_FILTER,
        "--",
        "--ignored",
        "--test-threads=1"
    )
    .env("DATABASE_URL", container.database_url())
    .env(TEST_BACKEND_ENV, "mariadb")
    .run_with_trace()
    .wrap_err("MariaDB backend validation tests failed")?;

    tracing::info!("MariaDB backend validation completed successfully");
    Ok(())
}

/// An extension trait for `duct::Expression` that logs the command being run
/// before running it.
trait ExpressionExt {
    /// Run the command and log the command being run
    fn run_with_trace(&self) -> io::Result<Output>;
}

impl ExpressionExt for duct::Expression {
    fn run_with_trace(&self) -> io::Result<Output> {
        tracing::info!("running command: {:?}", self);
        self.run().inspect_err(|_| {
            // The command that was run may have scrolled off the screen, so repeat it here
            tracing::error!("failed to run command: {:?}", self);
        })
    }
}
