pub const ARENA_WIDTH: usize = 10;
pub const ARENA_HEIGHT: usize = 20;

// Gravity: one automatic soft drop per second
pub const DROP_INTERVAL_MS: u64 = 1000;

// How many upcoming pieces the preview queue holds
pub const PREVIEW_COUNT: usize = 1;

// Points for the first line cleared in a sweep; doubles per extra line
pub const LINE_SCORE: u32 = 10;
