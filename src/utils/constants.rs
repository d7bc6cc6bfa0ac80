/// File names
pub const DEFAULT_INPUT_FILE: &str = "measurements.txt";
pub const PROFILE_OUTPUT_FILE: &str = "profile.txt";

/// Environment variables
pub const PROFILE_ENV_VAR: &str = "PROFILE";

/// Temperature field constraints: optional sign, 1-2 integer digits, one
/// fractional digit, so "0.0" through "-99.9"
pub const MIN_TEMP_FIELD_WIDTH: usize = 3;
pub const MAX_TEMP_FIELD_WIDTH: usize = 5;
pub const MIN_TEMP_TENTHS: i32 = -999;
pub const MAX_TEMP_TENTHS: i32 = 999;

/// Per-chunk table capacity; must stay well above the distinct-station
/// cardinality so probe chains stay short
pub const STATION_TABLE_SIZE: usize = 16384;
