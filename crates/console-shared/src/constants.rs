//! Application-wide constants

/// Lifetime of a cached study menu tree, in seconds.
pub const DEFAULT_MENU_CACHE_TTL_SECS: u64 = 300;
pub const DEFAULT_CACHE_SWEEP_INTERVAL_SECS: u64 = 60;
pub const DEFAULT_REMOTE_TIMEOUT_SECS: u64 = 10;
pub const DEFAULT_HOME_LABEL: &str = "Home";
pub const DEFAULT_HOME_HREF: &str = "/";
/// Placeholder substituted with the concrete study id in menu routes.
pub const STUDY_ID_PLACEHOLDER: &str = "{studyId}";
/// Header carrying the caller's granted permissions (comma separated).
pub const PERMISSIONS_HEADER: &str = "x-granted-permissions";
