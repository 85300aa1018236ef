pub const ISLET_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/islet.toml"));

pub const ARCHIPELAGO_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/archipelago.toml"));

pub const SEALED_GOAL_MAP_TEXT: &str =
    include_str!(concat!(env!("CARGO_MANIFEST_DIR"), "/maps/sealed_goal.toml"));

/// Optimal cost of the archipelago map.
pub const ARCHIPELAGO_OPTIMAL_COST: u64 = 59;
