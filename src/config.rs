// config.rs — Compile-time defaults and environment overrides.
//
// Buffer capacity is the only tunable that affects the engines. It can be
// set at build time (BUFFER_CAP_DEFAULT), through the KEFKA_BUFFER_SIZE
// environment variable, or with --buffer=SIZE on the command line; later
// sources win.

use crate::cli::arg_utils::read_u32_from_str;
use crate::cli::constants::display_level;

// Default streaming buffer capacity: 64 KiB.
// Every read is bounded by min(buffer cap, bytes remaining in the input).
pub const BUFFER_CAP_DEFAULT: usize = 64 * 1024;

// Smallest usable buffer: room for one carried CR plus one fresh byte.
pub const MIN_BUFFER_CAP: usize = 2;

// Number of times a concatenation delimiter repeats when -dn= is absent.
pub const DELIMITER_REPEAT_DEFAULT: usize = 1;

// Prefix of the intermediate file created for in-place conversion.
pub const TEMP_FILE_PREFIX: &str = ".kefka-";

// Environment variable consulted by init_buffer_cap().
pub const ENV_BUFFER_SIZE: &str = "KEFKA_BUFFER_SIZE";

/// Read the buffer capacity from `KEFKA_BUFFER_SIZE`, falling back to
/// [`BUFFER_CAP_DEFAULT`].
pub fn init_buffer_cap() -> usize {
    init_buffer_cap_from(std::env::var(ENV_BUFFER_SIZE).ok().as_deref())
}

/// Testable core of [`init_buffer_cap`].
///
/// Accepts a decimal number with an optional `K`/`KB`/`KiB`/`M`/`MB`/`MiB`
/// suffix. Values below [`MIN_BUFFER_CAP`] are raised to it; anything that
/// does not start with a digit is ignored with a warning.
pub fn init_buffer_cap_from(env_val: Option<&str>) -> usize {
    if let Some(env) = env_val {
        if let Some((val, rest)) = read_u32_from_str(env) {
            if rest.is_empty() {
                return (val as usize).max(MIN_BUFFER_CAP);
            }
        }
        if display_level() >= 2 {
            eprintln!(
                "Ignore environment variable setting {}={}: not a valid size ",
                ENV_BUFFER_SIZE, env
            );
        }
    }
    BUFFER_CAP_DEFAULT
}
