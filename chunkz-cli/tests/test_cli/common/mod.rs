use std::fs;
use std::process::{ExitStatus, Stdio};

mod data;

pub use data::{framed, generate_random_data, BINARY_DATA, SAMPLE_TEXT};

/// Output from running the binary
pub struct Output {
    pub status: ExitStatus,
    pub stdout: String,
    pub stderr: String,
}

/// Shared test fixture utilities to keep filesystem interactions isolated
pub struct Fixture {
    root_dir: tempfile::TempDir,
}

impl Fixture {
    /// Create an empty fixture directory
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created.
    pub fn new() -> Self {
        Self {
            root_dir: tempfile::TempDir::new().unwrap(),
        }
    }

    /// Create fixture with single file
    ///
    /// # Panics
    ///
    /// Panics if the temporary directory cannot be created or if the fixture file
    /// cannot be written.
    pub fn with_file(name: &str, contents: &[u8]) -> Self {
        let fixture = Self::new();
        fixture.write_file(name, contents);
        fixture
    }

    /// Write (or replace) a file in the fixture
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    pub fn write_file(&self, name: &str, contents: &[u8]) {
        fs::write(self.root_dir.path().join(name), contents).unwrap();
    }

    /// Get full path for a file in the fixture
    pub fn path(&self, name: &str) -> String {
        format!("{}/{}", self.root_dir.path().display(), name)
    }

    /// Check if a file exists in the fixture
    pub fn file_exists(&self, name: &str) -> bool {
        self.root_dir.path().join(name).exists()
    }

    /// Read a file from the fixture, empty if it does not exist
    pub fn read_file(&self, name: &str) -> Vec<u8> {
        fs::read(self.root_dir.path().join(name)).unwrap_or_default()
    }

    /// Assert that files have expected contents
    ///
    /// # Panics
    ///
    /// Panics if any file's contents don't match the expected bytes.
    pub fn assert_files(&self, names: &[&str], contents: &[&[u8]]) {
        for (name, expected_contents) in names.iter().zip(contents) {
            let actual_contents = self.read_file(name);
            assert!(
                actual_contents == *expected_contents,
                "contents of {name} differ"
            );
        }
    }

    /// Run the `chunkz` binary with the specified arguments
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaited.
    pub async fn run(&self, args: &[&str]) -> Output {
        self.run_with_env(args, &[]).await
    }

    /// Run the `chunkz` binary with extra environment variables
    ///
    /// # Panics
    ///
    /// Panics if the process cannot be spawned or awaited.
    pub async fn run_with_env(&self, args: &[&str], envs: &[(&str, &str)]) -> Output {
        let child = tokio::process::Command::new(env!("CARGO_BIN_EXE_chunkz"))
            .args(args)
            .env_remove("RUST_LOG")
            .envs(envs.iter().copied())
            .stdin(Stdio::null())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .unwrap();

        // Read both pipes while waiting so large outputs cannot deadlock.
        let raw_output = child.wait_with_output().await.unwrap();
        Output {
            status: raw_output.status,
            stdout: String::from_utf8_lossy(&raw_output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&raw_output.stderr).into_owned(),
        }
    }
}
