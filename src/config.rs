/// Number of ship slots each side owns, one of which is the flagship.
pub const NUM_SLOTS: usize = 5;

/// Trial count used when none is given on the command line.
pub const DEFAULT_TRIALS: usize = 100_000;

/// Lowest win ratio that still counts as a win.
pub const MARGINAL_WIN_RATIO: f64 = 1.0;

/// Lowest win ratio that counts as a decisive win.
pub const DECISIVE_WIN_RATIO: f64 = 1.25;

/// Environment variable holding the log level filter.
pub const LOG_ENV_VAR: &str = "FLAGSHIP_DUEL_LOG";
