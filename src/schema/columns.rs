//! Canonical column names and the fixed tables the pipeline is built on

use super::types::Rename;

// =============================================================================
// Canonical names
// =============================================================================

pub const TYPE_1: &str = "type_1";
pub const TYPE_2: &str = "type_2";
pub const HP: &str = "hp";
pub const ATTACK: &str = "attack";
pub const DEFENSE: &str = "defense";
pub const SPECIAL_ATTACK: &str = "special_attack";
pub const SPECIAL_DEFENSE: &str = "special_defense";
pub const SPEED: &str = "speed";
pub const BASE_STAT_TOTAL: &str = "base_stat_total";
pub const LEGENDARY: &str = "legendary";
pub const MEGA_EVOLUTION: &str = "mega_evolution";
pub const GENERATION: &str = "generation";
pub const BMI: &str = "bmi";

// =============================================================================
// Normalization
// =============================================================================

/// Abbreviated stat names in the source header, after lower-casing
pub static RENAMES: &[Rename] = &[
    Rename::new("att", ATTACK),
    Rename::new("def", DEFENSE),
    Rename::new("spa", SPECIAL_ATTACK),
    Rename::new("spd", SPECIAL_DEFENSE),
    Rename::new("spe", SPEED),
    Rename::new("bst", BASE_STAT_TOTAL),
];

/// The one column that gets a sentinel for missing values
pub const FILL_COLUMN: &str = TYPE_2;
pub const FILL_SENTINEL: &str = "None";

// =============================================================================
// Stat groups
// =============================================================================

/// Stats shown in the correlation heatmap, in display order
pub static CORRELATION_STATS: &[&str] = &[
    HP,
    ATTACK,
    DEFENSE,
    SPECIAL_ATTACK,
    SPEED,
    SPECIAL_DEFENSE,
    BASE_STAT_TOTAL,
];

/// Stats charted per generation, paired with their display labels
pub static GENERATION_STATS: &[(&str, &str)] = &[
    (HP, "HP"),
    (ATTACK, "Attack"),
    (DEFENSE, "Defense"),
    (SPEED, "Speed"),
    (SPECIAL_ATTACK, "Special Attack"),
    (SPECIAL_DEFENSE, "Special Defense"),
];

