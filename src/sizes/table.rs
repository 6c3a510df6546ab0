//! Static footprint tables
//!
//! A [`SizeTable`] holds two kinds of fallback rules: an ordered list of name
//! prefixes and a map of exact names. Prefix rules are checked in declaration
//! order, so more specific prefixes must come before broader ones
//! (`weapon_pistol50` before `weapon_pistol` before `weapon_`).

use std::collections::HashMap;
use std::path::Path;

use serde::Deserialize;
use thiserror::Error;

use super::Footprint;

/// Errors that can occur when loading a size table
#[derive(Error, Debug)]
pub enum SizeTableError {
    #[error("Failed to read size table file: {0}")]
    IoError(#[from] std::io::Error),
    #[error("Failed to parse size table TOML: {0}")]
    ParseError(#[from] toml::de::Error),
    #[error("Invalid prefix rule '{prefix}': footprint must be at least 1x1")]
    InvalidRule { prefix: String },
}

/// A prefix rule: any item whose lowercase name starts with `prefix`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PrefixRule {
    pub prefix: String,
    pub footprint: Footprint,
}

impl PrefixRule {
    pub fn new(prefix: &str, footprint: Footprint) -> Self {
        Self {
            prefix: prefix.to_lowercase(),
            footprint,
        }
    }
}

/// Prefix and exact-name footprint tables
#[derive(Debug, Clone, PartialEq)]
pub struct SizeTable {
    /// Ordered prefix rules, first match wins
    pub prefixes: Vec<PrefixRule>,
    /// Exact lowercase item names
    pub exact: HashMap<String, Footprint>,
}

/// TOML structure for deserializing size tables
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub(crate) struct TomlSizeTable {
    #[serde(default)]
    prefixes: Vec<(String, u32, u32)>,
    #[serde(default)]
    exact: HashMap<String, Footprint>,
}

impl TomlSizeTable {
    pub(crate) fn into_table(self) -> Result<SizeTable, SizeTableError> {
        let mut table = SizeTable::empty();
        for (prefix, width, height) in self.prefixes {
            let footprint = Footprint::try_new(width, height)
                .ok_or_else(|| SizeTableError::InvalidRule {
                    prefix: prefix.clone(),
                })?;
            table.push_prefix(&prefix, footprint);
        }
        for (name, footprint) in self.exact {
            table.insert_exact(&name, footprint);
        }
        Ok(table)
    }
}

/// Built-in footprints, ordered from most to least specific
const DEFAULT_SIZES: &str = r#"
prefixes = [
  # Long rifles
  ["weapon_carbinerifle", 3, 2],
  ["weapon_assaultrifle", 3, 2],
  ["weapon_heavyrifle", 3, 2],
  ["weapon_sniperrifle", 4, 2],
  ["weapon_heavysniper", 4, 2],
  ["weapon_marksmanrifle", 4, 2],
  ["weapon_bullpuprifle", 3, 2],
  ["weapon_compactrifle", 2, 2],
  ["weapon_specialcarbine", 3, 2],
  ["weapon_militaryrifle", 3, 2],
  ["weapon_remotesniper", 4, 2],
  ["weapon_gusenberg", 3, 2],
  ["weapon_musket", 4, 2],

  # Shotguns
  ["weapon_pumpshotgun", 3, 2],
  ["weapon_sawnoffshotgun", 2, 2],
  ["weapon_combatshotgun", 3, 2],
  ["weapon_bullpupshotgun", 3, 2],
  ["weapon_heavyshotgun", 3, 2],
  ["weapon_dbshotgun", 2, 2],
  ["weapon_autoshotgun", 3, 2],

  # SMGs
  ["weapon_microsmg", 2, 1],
  ["weapon_minismg", 2, 1],
  ["weapon_machinepistol", 2, 1],
  ["weapon_assaultsmg", 2, 2],
  ["weapon_combatpdw", 2, 2],
  ["weapon_smg", 2, 2],

  # Machine guns
  ["weapon_combatmg", 4, 2],
  ["weapon_mg", 4, 2],
  ["weapon_minigun", 4, 3],

  # Pistols
  ["weapon_appistol", 2, 1],
  ["weapon_combatpistol", 2, 1],
  ["weapon_heavypistol", 2, 1],
  ["weapon_vintagepistol", 2, 1],
  ["weapon_marksmanpistol", 2, 1],
  ["weapon_snspistol", 2, 1],
  ["weapon_ceramicpistol", 2, 1],
  ["weapon_pistol50", 2, 1],
  ["weapon_pistol", 2, 1],
  ["weapon_revolver", 2, 1],
  ["weapon_doubleaction", 2, 1],
  ["weapon_navyrevolver", 2, 1],
  ["weapon_raypistol", 2, 1],
  ["weapon_stungun", 2, 1],
  ["weapon_flaregun", 2, 1],

  # Melee
  ["weapon_knife", 1, 2],
  ["weapon_dagger", 1, 2],
  ["weapon_switchblade", 1, 1],
  ["weapon_machete", 1, 2],
  ["weapon_hatchet", 1, 2],
  ["weapon_stone_hatchet", 1, 2],
  ["weapon_hammer", 1, 2],
  ["weapon_wrench", 1, 2],
  ["weapon_crowbar", 1, 2],
  ["weapon_bat", 1, 3],
  ["weapon_poolcue", 1, 3],
  ["weapon_nightstick", 1, 2],
  ["weapon_knuckle", 1, 1],

  # Launchers
  ["weapon_rpg", 4, 2],
  ["weapon_hominglauncher", 4, 2],
  ["weapon_grenadelauncher", 3, 2],
  ["weapon_rayminigun", 4, 3],
  ["weapon_raycarbine", 3, 2],
  ["weapon_railgun", 4, 2],

  # Throwables
  ["weapon_grenade", 1, 1],
  ["weapon_smokegrenade", 1, 1],
  ["weapon_stickybomb", 1, 1],
  ["weapon_pipebomb", 1, 1],
  ["weapon_molotov", 1, 1],
  ["weapon_proximitymine", 1, 1],
  ["weapon_snowball", 1, 1],
  ["weapon_flare", 1, 1],
  ["weapon_hazardcan", 2, 2],
  ["weapon_petrolcan", 2, 2],
  ["weapon_fireextinguisher", 2, 2],

  # Any other weapon
  ["weapon_", 2, 1],

  # Ammo
  ["ammo_", 1, 1],
  ["ammo-", 1, 1],

  # Bags and containers
  ["backpack", 2, 3],
  ["duffelbag", 2, 3],
  ["bag_", 2, 2],
  ["briefcase", 2, 2],
  ["package", 2, 2],
]

[exact]
# Armour
body_armor = [2, 3]
heavyarmor = [2, 3]
lightarmor = [2, 2]
ceramic_plate = [2, 2]
kevlar_plate = [2, 2]
brokenplate = [2, 2]
harness = [2, 2]

# Medical
medkit = [2, 2]
firstaid = [2, 2]
advancedkit = [2, 2]
bandage = [1, 1]
painkillers = [1, 1]
oxy = [1, 1]

# Electronics
phone = [1, 2]
iphone = [1, 2]
laptop = [3, 2]
heavypc = [3, 3]
lightpc = [3, 2]
radio = [1, 2]
cryptostick = [1, 1]
fitbit = [1, 1]

# Documents
id_card = [2, 1]
driver_license = [2, 1]
weapon_license = [2, 1]
lawyerpass = [2, 1]
certificate = [2, 1]
mastercard = [2, 1]

# Money
cash_roll = [1, 1]
money = [1, 1]
markedbills = [1, 1]
moneybag = [2, 2]
casinochips = [1, 1]
goldbar = [1, 1]
gold_nugget = [1, 1]
diamond_ring = [1, 1]
goldchain = [1, 1]
10kgoldchain = [1, 1]

# Tools
toolbox = [2, 2]
drill = [2, 2]
electronickit = [2, 2]
cleaningkit = [2, 1]
lockpick = [1, 1]
advancedlockpick = [1, 1]
handcuffs = [1, 1]
rope = [2, 1]
binoculars = [2, 1]
fishingrod = [1, 3]
huntingrifle = [3, 2]
diving_gear = [2, 3]

# Drugs
cocaine_baggy = [1, 1]
crack_baggy = [1, 1]
meth_bag = [1, 1]
meth_baggy = [1, 1]
weed_baggy = [1, 1]
joint = [1, 1]
xtc_baggy = [1, 1]
coke_brick = [2, 1]
coke_small_brick = [1, 1]
weed_brick = [2, 1]

# Food and drink
burger = [1, 1]
cola = [1, 1]
water = [1, 1]
beer = [1, 1]
coffee = [1, 1]
whiskey = [1, 1]
wine = [1, 1]
baquette = [1, 1]
grapejuice = [1, 1]
grape = [1, 1]

# Crates
crate = [3, 3]
box = [2, 2]
jerry_can = [2, 2]

# Raw materials
iron_bar = [1, 1]
iron_nugget = [1, 1]
aluminum = [1, 1]
copper = [1, 1]
copperore = [1, 1]
metalscrap = [1, 1]

# Misc
parachute = [2, 2]
labkey = [1, 1]
fertilizer = [2, 1]
nitrousoxide = [1, 1]
blindfold = [1, 1]
evidence = [1, 1]
"#;

impl SizeTable {
    /// A table with no rules; every lookup misses
    pub fn empty() -> Self {
        Self {
            prefixes: Vec::new(),
            exact: HashMap::new(),
        }
    }

    /// Load size table from TOML file
    pub fn from_file(path: &Path) -> Result<Self, SizeTableError> {
        let content = std::fs::read_to_string(path)?;
        Self::from_str(&content)
    }

    /// Load size table from TOML string
    pub fn from_str(content: &str) -> Result<Self, SizeTableError> {
        let parsed: TomlSizeTable = toml::from_str(content)?;
        parsed.into_table()
    }

    /// Append a prefix rule after all existing ones
    pub fn push_prefix(&mut self, prefix: &str, footprint: Footprint) {
        self.prefixes.push(PrefixRule::new(prefix, footprint));
    }

    /// Set the footprint for an exact item name
    pub fn insert_exact(&mut self, name: &str, footprint: Footprint) {
        self.exact.insert(name.to_lowercase(), footprint);
    }

    /// Layer `custom` in front of this table.
    ///
    /// Custom prefixes are checked before the existing ones and custom exact
    /// names replace existing entries.
    pub fn extend_with(self, custom: SizeTable) -> SizeTable {
        let mut prefixes = custom.prefixes;
        prefixes.extend(self.prefixes);

        let mut exact = self.exact;
        exact.extend(custom.exact);

        SizeTable { prefixes, exact }
    }

    /// First prefix rule matching `name` (case-insensitive)
    pub fn match_prefix(&self, name: &str) -> Option<Footprint> {
        let lower = name.to_lowercase();
        self.prefixes
            .iter()
            .find(|rule| lower.starts_with(&rule.prefix))
            .map(|rule| rule.footprint)
    }

    /// Exact-name entry for `name` (case-insensitive)
    pub fn match_exact(&self, name: &str) -> Option<Footprint> {
        self.exact.get(&name.to_lowercase()).copied()
    }

    /// Prefix rules first, then exact names
    pub fn lookup(&self, name: &str) -> Option<Footprint> {
        self.match_prefix(name).or_else(|| self.match_exact(name))
    }
}

impl Default for SizeTable {
    fn default() -> Self {
        Self::from_str(DEFAULT_SIZES).expect("Default size table should be valid TOML")
    }
}
