//! Default configuration values

/// Parallel jobs passed to `b2` via `-j`
pub const DEFAULT_BUILD_JOBS: usize = 8;

/// Suffix appended to the user-supplied `<major>.<minor>` version
pub const PATCH_SUFFIX: &str = ".0";

/// Install prefix root on POSIX-like systems
pub const POSIX_PREFIX_ROOT: &str = "/usr/local";

/// Install prefix root on Windows
pub const WINDOWS_PREFIX_ROOT: &str = r"C:\boost";

/// Tool used to elevate the install step on POSIX-like systems
pub const ELEVATION_TOOL: &str = "sudo";

/// Environment variable overriding the release host
pub const BASE_URL_ENV: &str = "BOOST_INSTALL_BASE_URL";

/// Environment variable overriding the work directory
pub const WORK_DIR_ENV: &str = "BOOST_INSTALL_WORK_DIR";
