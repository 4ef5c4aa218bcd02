//! Platform-specific build commands
//!
//! Boost ships two sets of build scripts: `bootstrap.sh`/`b2` for POSIX-like
//! systems and `bootstrap.bat`/`b2.exe` for Windows. [`Platform`] is selected
//! once at startup and answers every platform question the pipeline asks.

use std::fmt;

use serde::Serialize;

use crate::config::defaults::{ELEVATION_TOOL, POSIX_PREFIX_ROOT, WINDOWS_PREFIX_ROOT};

/// Host platform family
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Platform {
    /// Linux, macOS and other Unix-likes
    Posix,
    /// Windows
    Windows,
}

impl Platform {
    /// Detect the platform this binary was built for
    pub fn detect() -> Self {
        if cfg!(windows) {
            Self::Windows
        } else {
            Self::Posix
        }
    }

    /// Identifier used in logs and reports
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Posix => "posix",
            Self::Windows => "windows",
        }
    }

    /// Default install prefix embedding the full version
    pub fn default_prefix(self, version: &str) -> String {
        match self {
            Self::Posix => format!("{POSIX_PREFIX_ROOT}/boost_{version}"),
            Self::Windows => format!(r"{WINDOWS_PREFIX_ROOT}\boost_{version}"),
        }
    }

    /// Path separator written into normalized paths
    pub fn separator(self) -> char {
        match self {
            Self::Posix => '/',
            Self::Windows => '\\',
        }
    }

    /// Whether `c` separates path components on this platform
    pub fn is_separator(self, c: char) -> bool {
        match self {
            Self::Posix => c == '/',
            Self::Windows => c == '/' || c == '\\',
        }
    }

    /// Command for the bootstrap stage
    pub fn bootstrap_command(self, prefix_arg: &str, options: &BuildOptions) -> StageCommand {
        let mut command = match self {
            Self::Posix => StageCommand::new("./bootstrap.sh"),
            Self::Windows => StageCommand::new("bootstrap.bat"),
        };
        command.arg(prefix_arg);

        if let Some(toolset) = &options.toolset {
            match self {
                Self::Posix => command.arg(format!("--with-toolset={toolset}")),
                Self::Windows => command.arg(toolset.clone()),
            };
        }

        command
    }

    /// Command for the build/install stage
    pub fn build_command(self, prefix_arg: &str, options: &BuildOptions) -> StageCommand {
        let mut command = match self {
            Self::Posix if options.elevate => {
                let mut cmd = StageCommand::new(ELEVATION_TOOL);
                cmd.arg("./b2");
                cmd
            }
            Self::Posix => StageCommand::new("./b2"),
            Self::Windows => StageCommand::new("b2.exe"),
        };

        command.arg("install").arg(prefix_arg);
        if let Some(toolset) = &options.toolset {
            command.arg(format!("toolset={toolset}"));
        }
        command.arg(format!("-j{}", options.jobs));

        command
    }

    /// Tool that must be present for the build stage, if any
    pub fn elevation_tool(self, options: &BuildOptions) -> Option<&'static str> {
        match self {
            Self::Posix if options.elevate => Some(ELEVATION_TOOL),
            _ => None,
        }
    }
}

impl fmt::Display for Platform {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Knobs passed through to the wrapped build tool
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildOptions {
    /// Parallel jobs for `b2`
    pub jobs: usize,
    /// Compiler toolset, e.g. `gcc` or `msvc`
    pub toolset: Option<String>,
    /// Run the install step through `sudo` on POSIX
    pub elevate: bool,
}

impl Default for BuildOptions {
    fn default() -> Self {
        Self {
            jobs: crate::config::defaults::DEFAULT_BUILD_JOBS,
            toolset: None,
            elevate: true,
        }
    }
}

/// An external command: program plus arguments
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StageCommand {
    /// Program to run, resolved against the stage directory when relative
    pub program: String,
    /// Arguments in order
    pub args: Vec<String>,
}

impl StageCommand {
    /// Start a command with no arguments
    pub fn new(program: impl Into<String>) -> Self {
        Self {
            program: program.into(),
            args: Vec::new(),
        }
    }

    /// Append an argument
    pub fn arg(&mut self, arg: impl Into<String>) -> &mut Self {
        self.args.push(arg.into());
        self
    }
}

impl fmt::Display for StageCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.program)?;
        for arg in &self.args {
            write!(f, " {arg}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const PREFIX: &str = "--prefix=/usr/local/boost_1.76.0";

    #[test]
    fn test_default_prefix_embeds_version() {
        assert_eq!(
            Platform::Posix.default_prefix("1.76.0"),
            "/usr/local/boost_1.76.0"
        );
        assert_eq!(
            Platform::Windows.default_prefix("1.76.0"),
            r"C:\boost\boost_1.76.0"
        );
    }

    #[test]
    fn test_posix_bootstrap_command() {
        let cmd = Platform::Posix.bootstrap_command(PREFIX, &BuildOptions::default());
        assert_eq!(
            cmd.to_string(),
            "./bootstrap.sh --prefix=/usr/local/boost_1.76.0"
        );
    }

    #[test]
    fn test_windows_bootstrap_command() {
        let cmd = Platform::Windows.bootstrap_command(r"--prefix=C:\Boost\x", &BuildOptions::default());
        assert_eq!(cmd.program, "bootstrap.bat");
        assert_eq!(cmd.args, vec![r"--prefix=C:\Boost\x".to_string()]);
    }

    #[test]
    fn test_posix_build_command_elevated() {
        let cmd = Platform::Posix.build_command(PREFIX, &BuildOptions::default());
        assert_eq!(
            cmd.to_string(),
            "sudo ./b2 install --prefix=/usr/local/boost_1.76.0 -j8"
        );
    }

    #[test]
    fn test_posix_build_command_without_elevation() {
        let options = BuildOptions {
            elevate: false,
            jobs: 2,
            ..BuildOptions::default()
        };
        let cmd = Platform::Posix.build_command(PREFIX, &options);
        assert_eq!(cmd.program, "./b2");
        assert_eq!(cmd.args, vec!["install", PREFIX, "-j2"]);
    }

    #[test]
    fn test_windows_build_command_never_elevates() {
        let cmd = Platform::Windows.build_command(r"--prefix=C:\Boost\x", &BuildOptions::default());
        assert_eq!(cmd.to_string(), r"b2.exe install --prefix=C:\Boost\x -j8");
        assert_eq!(Platform::Windows.elevation_tool(&BuildOptions::default()), None);
    }

    #[test]
    fn test_toolset_is_forwarded_to_both_stages() {
        let options = BuildOptions {
            toolset: Some("clang".to_string()),
            elevate: false,
            ..BuildOptions::default()
        };
        let bootstrap = Platform::Posix.bootstrap_command(PREFIX, &options);
        let build = Platform::Posix.build_command(PREFIX, &options);
        assert!(bootstrap.args.contains(&"--with-toolset=clang".to_string()));
        assert!(build.args.contains(&"toolset=clang".to_string()));

        let bootstrap = Platform::Windows.bootstrap_command("--prefix=x", &options);
        assert_eq!(bootstrap.args, vec!["--prefix=x", "clang"]);
    }

    #[test]
    fn test_separators() {
        assert!(Platform::Posix.is_separator('/'));
        assert!(!Platform::Posix.is_separator('\\'));
        assert!(Platform::Windows.is_separator('/'));
        assert!(Platform::Windows.is_separator('\\'));
    }

    #[test]
    fn test_detect_matches_target() {
        let platform = Platform::detect();
        if cfg!(windows) {
            assert_eq!(platform, Platform::Windows);
        } else {
            assert_eq!(platform, Platform::Posix);
        }
    }
}
