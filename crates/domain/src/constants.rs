/// Trading days in one simulated year.
pub const TRADING_DAYS: usize = 252;

/// Shares controlled by one option contract.
pub const CONTRACT_SIZE: u32 = 100;

/// Lowest price a path, strike or start price may take.
pub const MIN_PRICE: f64 = 0.01;

/// Multiplier applied to the path index when deriving a path's sub-seed.
pub const PATH_SEED_STRIDE: u64 = 997;
