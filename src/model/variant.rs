//! Unit stat profiles, deserialized from the Alpha Strike catalog export.
//! Field names follow the external schema (PV, TP, MV, ...). Records are
//! immutable catalog data, created once at load time.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Damage at the four range bands. Values are strings because the source data
/// uses markers like "0*" for minimal damage.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Damage {
    #[serde(rename = "dmgS", default = "zero_damage")]
    pub short: String,
    #[serde(rename = "dmgM", default = "zero_damage")]
    pub medium: String,
    #[serde(rename = "dmgL", default = "zero_damage")]
    pub long: String,
    #[serde(rename = "dmgE", default = "zero_damage")]
    pub extreme: String,
}

fn zero_damage() -> String {
    "0".to_string()
}

/// One stat profile (chassis/model combination) a mini may field.
#[derive(Debug, Clone, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct UnitVariant {
    /// The IS/general chassis name for this unit.
    #[serde(rename = "chassis", default)]
    pub chassis: String,
    /// The clan chassis name for this unit.
    #[serde(rename = "clanChassis", default)]
    pub clan_chassis: String,
    /// The model/variant label of the chassis.
    #[serde(rename = "model", default)]
    pub variant: String,
    /// Alpha Strike points value before skill adjustment.
    #[serde(rename = "PV", default)]
    pub points_value: i32,
    /// Alpha Strike unit type.
    #[serde(rename = "TP", default = "unknown_type")]
    pub unit_type: String,
    /// Movement profile in Alpha Strike format.
    #[serde(rename = "MV", default)]
    pub movement: String,
    /// Overheat levels.
    #[serde(rename = "OV", default)]
    pub overheat: i32,
    #[serde(rename = "SZ", default = "default_size")]
    pub size: i32,
    /// Target Movement Modifier.
    #[serde(rename = "TMM", default)]
    pub tmm: i32,
    #[serde(rename = "Str", default)]
    pub structure: i32,
    #[serde(rename = "Arm", default)]
    pub armor: i32,
    /// S/M/L(/E) damage profile.
    #[serde(rename = "dmg", default)]
    pub damage: Damage,
    /// Special abilities in Alpha Strike format.
    #[serde(rename = "specials", default)]
    pub specials: String,
    /// Whether this unit is clan tech.
    #[serde(rename = "clan", default)]
    pub is_clan: bool,
    /// Master Unit List id, when known.
    #[serde(rename = "mulId", default)]
    pub mul_id: Option<i32>,
    /// Whether this is a canon unit.
    #[serde(rename = "canon", default)]
    pub is_canon: bool,
    /// Whether this is a support (as opposed to combat) unit.
    #[serde(rename = "support", default)]
    pub is_support: bool,
    /// Combat role this unit performs.
    #[serde(rename = "role", default = "undetermined_role")]
    pub role: String,
    /// Year this variant was first introduced.
    #[serde(rename = "year", default)]
    pub year_introduced: i32,
    /// Year this variant became Advanced tech.
    #[serde(rename = "advTechYear", default)]
    pub advanced_tech_year: i32,
    /// Year this variant became Standard tech.
    #[serde(rename = "stdTechYear", default)]
    pub standard_tech_year: i32,
    /// Whether this variant can fire at extreme range.
    #[serde(rename = "usesE", default)]
    pub uses_extreme_range: bool,
}

fn unknown_type() -> String {
    "Unknown".to_string()
}

fn undetermined_role() -> String {
    "Undetermined".to_string()
}

fn default_size() -> i32 {
    1
}

impl UnitVariant {
    /// The chassis of this variant according to its tech base: the clan
    /// chassis name when the unit is clan tech and that name is non-blank,
    /// else the general chassis name.
    pub fn preferred_chassis(&self) -> &str {
        if self.is_clan && !self.clan_chassis.trim().is_empty() {
            &self.clan_chassis
        } else {
            &self.chassis
        }
    }

    /// S/M/L damage joined with `/`, with the extreme band appended only for
    /// units that can fire at extreme range.
    pub fn damage_string(&self) -> String {
        let mut out = format!(
            "{}/{}/{}",
            self.damage.short, self.damage.medium, self.damage.long
        );
        if self.uses_extreme_range {
            out.push('/');
            out.push_str(&self.damage.extreme);
        }
        out
    }

    pub fn armor_structure_string(&self) -> String {
        format!("{}/{}", self.armor, self.structure)
    }
}

impl fmt::Display for UnitVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} {} PV: {}", self.chassis, self.variant, self.points_value)
    }
}
