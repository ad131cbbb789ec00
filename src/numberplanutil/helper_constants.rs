/// The minimum length of a national significant number.
pub const MIN_LENGTH_FOR_NSN: usize = 2;

/// The maximum length of a country dial code.
pub const MAX_DIAL_CODE_LENGTH: usize = 3;

pub const PLUS_SIGN: char = '+';

// International call prefixes used by the large majority of countries; tried
// in order when no default country is available to supply an exact pattern.
pub const COMMON_INTERNATIONAL_PREFIXES: [&str; 2] = ["00", "011"];
