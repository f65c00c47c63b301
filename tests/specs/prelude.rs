//! Test helpers for behavioral specifications.
//!
//! A small DSL around the `aka` binary: build an invocation, run it with
//! an expected outcome, then chain assertions on what it printed.

#![allow(clippy::unwrap_used, clippy::expect_used, clippy::panic, dead_code)]

use std::ffi::OsString;
use std::path::{Path, PathBuf};
use std::process::{Command, Output};

/// Reserved command paths written by [`Project::with_aliases`].
pub const RESERVED: &str = "\
vm create
vm list
vm show
group list
group show
";

/// Variables that would leak the developer's own setup into a run.
const SCRUBBED_VARS: [&str; 4] = [
    "AKA_ALIAS_FILE",
    "AKA_CONFIG_DIR",
    "AKA_RESERVED_FILE",
    "RUST_LOG",
];

/// Locate the `aka` binary next to the spec runner.
///
/// Coverage builds use their own target dir, so try that before the
/// regular one. When neither exists (stale `CARGO_MANIFEST_DIR`), walk up
/// from `target/<profile>/deps/specs-*` to `target/<profile>`.
fn aka_binary() -> PathBuf {
    let root = Path::new(env!("CARGO_MANIFEST_DIR")).join("target");
    let candidates = [
        root.join("llvm-cov-target/debug/aka"),
        root.join("debug/aka"),
    ];
    if let Some(found) = candidates.iter().find(|p| p.exists()) {
        return found.clone();
    }
    std::env::current_exe()
        .ok()
        .and_then(|exe| Some(exe.parent()?.parent()?.join("aka")))
        .filter(|p| p.exists())
        .unwrap_or_else(|| candidates[1].clone())
}

/// Start an invocation with no config directory at all.
pub fn cli() -> Invocation {
    Invocation::default()
}

/// Arguments and environment for one run of `aka`.
#[derive(Default)]
pub struct Invocation {
    args: Vec<OsString>,
    vars: Vec<(String, OsString)>,
}

impl Invocation {
    pub fn args(mut self, args: &[&str]) -> Self {
        self.args.extend(args.iter().map(OsString::from));
        self
    }

    pub fn env(mut self, key: &str, value: impl AsRef<Path>) -> Self {
        self.vars
            .push((key.to_owned(), value.as_ref().as_os_str().to_owned()));
        self
    }

    /// The process that would run; color is always off so output is stable.
    pub fn command(&self) -> Command {
        let mut cmd = Command::new(aka_binary());
        cmd.args(&self.args).env("NO_COLOR", "1");
        for var in SCRUBBED_VARS {
            cmd.env_remove(var);
        }
        cmd.envs(self.vars.iter().map(|(k, v)| (k, v)));
        cmd
    }

    /// Run and require exit status 0.
    pub fn passes(self) -> Ran {
        self.run(true)
    }

    /// Run and require a non-zero exit status.
    pub fn fails(self) -> Ran {
        self.run(false)
    }

    fn run(self, should_pass: bool) -> Ran {
        let output = self.command().output().expect("aka binary should start");
        let ran = Ran { output };
        if ran.output.status.success() != should_pass {
            panic!(
                "aka {:?} exited with {:?} (wanted {})\n--- stdout\n{}--- stderr\n{}",
                self.args,
                ran.output.status.code(),
                if should_pass { "success" } else { "failure" },
                ran.stdout(),
                ran.stderr(),
            );
        }
        ran
    }
}

/// Captured output of a finished run.
pub struct Ran {
    output: Output,
}

impl Ran {
    pub fn stdout(&self) -> String {
        String::from_utf8_lossy(&self.output.stdout).into_owned()
    }

    pub fn stderr(&self) -> String {
        String::from_utf8_lossy(&self.output.stderr).into_owned()
    }

    pub fn code(self, expected: i32) -> Self {
        assert_eq!(
            self.output.status.code(),
            Some(expected),
            "stderr:\n{}",
            self.stderr()
        );
        self
    }

    /// Exact stdout, diffed on mismatch. Use this for anything users read.
    pub fn stdout_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stdout(), expected);
        self
    }

    pub fn stderr_eq(self, expected: &str) -> Self {
        similar_asserts::assert_eq!(self.stderr(), expected);
        self
    }

    pub fn stdout_has(self, needle: &str) -> Self {
        let haystack = self.stdout();
        assert!(haystack.contains(needle), "{needle:?} not in stdout:\n{haystack}");
        self
    }

    pub fn stderr_has(self, needle: &str) -> Self {
        let haystack = self.stderr();
        assert!(haystack.contains(needle), "{needle:?} not in stderr:\n{haystack}");
        self
    }

    pub fn stderr_lacks(self, needle: &str) -> Self {
        let haystack = self.stderr();
        assert!(!haystack.contains(needle), "{needle:?} unexpectedly in stderr:\n{haystack}");
        self
    }
}

/// Throwaway config directory. Dropping it removes the files.
pub struct Project {
    dir: tempfile::TempDir,
}

impl Project {
    pub fn empty() -> Self {
        Self {
            dir: tempfile::tempdir().unwrap(),
        }
    }

    /// `alias` holds the given INI text and `commands` holds [`RESERVED`].
    pub fn with_aliases(aliases: &str) -> Self {
        let project = Self::empty();
        project.file("alias", aliases);
        project.file("commands", RESERVED);
        project
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    pub fn file(&self, name: impl AsRef<Path>, content: &str) {
        let target = self.path().join(name);
        if let Some(parent) = target.parent() {
            std::fs::create_dir_all(parent).unwrap();
        }
        std::fs::write(target, content).unwrap();
    }

    /// Invocation rooted at this directory, picking up `commands` if present.
    pub fn aka(&self) -> Invocation {
        let invocation = cli().env("AKA_CONFIG_DIR", self.path());
        let reserved = self.path().join("commands");
        match reserved.exists() {
            true => invocation.env("AKA_RESERVED_FILE", reserved),
            false => invocation,
        }
    }
}
