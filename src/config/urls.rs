//! Release host URLs

/// Boost release archive base URL
///
/// Archives live at `<base>/<x.y.z>/source/boost_<x_y_z>.tar.gz`.
pub const BOOST_RELEASES: &str = "https://boostorg.jfrog.io/artifactory/main/release";
