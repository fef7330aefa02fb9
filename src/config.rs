//! Application configuration constants
//!
//! Central location for the persistence key names and the timing
//! constants used by the alarm scheduler.

use std::time::Duration;

// ===== Persistence Keys =====

/// UI language preference: "tr", "en" or "ar"
pub const KEY_APP_LANGUAGE: &str = "app_language";
/// Local image reference for the profile avatar
pub const KEY_PROFILE_AVATAR: &str = "profile_avatar";
/// JSON array of alarm records
pub const KEY_ALARMS: &str = "alarms";
/// JSON array of note records
pub const KEY_NOTES: &str = "notes";
/// Plain string credential for the weather screen
pub const KEY_WEATHER_API_KEY: &str = "weather_api_key";

// ===== Alarm Scheduler =====

/// Period between alarm checks. Matching granularity is one minute, so
/// sub-minute precision is neither required nor guaranteed.
pub const ALARM_TICK_PERIOD: Duration = Duration::from_secs(60);

/// Length of the vibration pulse emitted when an alarm fires.
pub const ALARM_VIBRATION: Duration = Duration::from_millis(2000);

/// Rendering of the current date for day matching. Alarm day text is
/// compared verbatim against this rendering, whatever the UI language.
pub const DAY_FORMAT: &str = "%d.%m.%Y";

// ===== Logging =====

/// Default EnvFilter directive when RUST_LOG is not set.
pub const DEFAULT_LOG_FILTER: &str = "sidekick=debug,info";
