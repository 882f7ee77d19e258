//! Food supply constants.

/// Food the player starts a run with
pub const FOOD_SUPPLY_START: i32 = 100;
/// Food spent per turn
pub const FOOD_SUPPLY_PER_TURN: i32 = 1;
/// Food restored by each food variant (index = variant)
pub const FOOD_POINTS_PER_VARIANT: [i32; 2] = [10, 20];
