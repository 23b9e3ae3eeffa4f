//! Enumerations referenced by attribute validators.

pub const PROTOCOLS: &[&str] = &["usenet", "torrent"];
pub const RESCAN_AFTER_REFRESH: &[&str] = &["always", "afterManual", "never"];
pub const PROPERS_AND_REPACKS: &[&str] = &["preferAndUpgrade", "doNotUpgrade", "doNotPrefer"];
pub const FILE_DATES: &[&str] = &["none", "localAirDate", "utcAirDate"];
pub const EPISODE_TITLE_REQUIRED: &[&str] = &["always", "bulkSeasonReleases", "never"];
pub const SERIES_TYPES: &[&str] = &["standard", "daily", "anime"];
pub const SHOULD_MONITOR: &[&str] = &[
    "unknown",
    "all",
    "future",
    "missing",
    "existing",
    "firstSeason",
    "lastSeason",
    "latestSeason",
    "pilot",
    "recent",
    "monitorSpecials",
    "unmonitorSpecials",
    "none",
];
pub const MONITOR_NEW_ITEMS: &[&str] = &["none", "all"];

pub const MULTI_EPISODE_STYLES: &[i64] = &[0, 1, 2, 3, 4, 5];
pub const COLON_REPLACEMENTS: &[i64] = &[0, 1, 2, 3, 4];
/// Apprise notification types: info, success, warning, failure.
pub const NOTIFICATION_SEVERITIES: &[i64] = &[0, 1, 2, 3];
pub const WEBHOOK_METHODS: &[i64] = &[1, 2];
pub const GOTIFY_PRIORITIES: &[i64] = &[0, 2, 5, 8];

pub const AUTHENTICATION_METHODS: &[&str] = &["none", "basic", "forms", "external"];
pub const AUTHENTICATION_REQUIRED: &[&str] = &["enabled", "disabledForLocalAddresses"];
pub const PROXY_TYPES: &[&str] = &["http", "socks4", "socks5"];
pub const CERTIFICATE_VALIDATION: &[&str] = &["enabled", "disabledForLocalAddresses", "disabled"];
pub const UPDATE_MECHANISMS: &[&str] = &["builtIn", "script", "external", "apt", "docker"];
pub const LOG_LEVELS: &[&str] = &["info", "debug", "trace"];

pub const CUSTOM_FORMAT_IMPLEMENTATIONS: &[&str] = &[
    "ReleaseTitleSpecification",
    "ReleaseGroupSpecification",
    "SourceSpecification",
    "ResolutionSpecification",
    "LanguageSpecification",
    "IndexerFlagSpecification",
    "ReleaseTypeSpecification",
    "SizeSpecification",
];

/// Custom format conditions whose `value` travels as an integer.
pub const NUMERIC_CUSTOM_FORMAT_IMPLEMENTATIONS: &[&str] = &[
    "SourceSpecification",
    "ResolutionSpecification",
    "LanguageSpecification",
    "IndexerFlagSpecification",
    "ReleaseTypeSpecification",
];

pub const AUTO_TAG_IMPLEMENTATIONS: &[&str] = &[
    "GenreSpecification",
    "NetworkSpecification",
    "OriginalLanguageSpecification",
    "RootFolderSpecification",
    "SeriesTypeSpecification",
    "StatusSpecification",
    "TagSpecification",
];

/// Auto tag conditions whose `value` travels as an integer.
pub const NUMERIC_AUTO_TAG_IMPLEMENTATIONS: &[&str] = &[
    "OriginalLanguageSpecification",
    "SeriesTypeSpecification",
    "StatusSpecification",
    "TagSpecification",
];
