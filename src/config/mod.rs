//! Settings boundary for the optimization engine.
//!
//! Settings are parsed from a TOML document and validated before the engine
//! is ever constructed. Validation fails fast per field: the first violated
//! constraint aborts with one message naming the field, and no
//! partially-applied configuration escapes this module.

use crate::catalog::catalog;
use crate::constants::COOLER_TYPES;
use serde::Deserialize;
use std::path::Path;

pub type ConfigResult<T> = Result<T, ConfigError>;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("{field}: {constraint}")]
    InvalidField {
        field: &'static str,
        constraint: &'static str,
    },
    #[error("settings document is not valid TOML: {0}")]
    Parse(String),
    #[error("IO error for {path}: {error}")]
    Io { path: String, error: String },
}

/// Optimization goal, matching the engine's integer enum.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Goal {
    Power,
    Breeder,
    Efficiency,
}

impl Goal {
    fn from_index(value: i64) -> Option<Goal> {
        match value {
            0 => Some(Goal::Power),
            1 => Some(Goal::Breeder),
            2 => Some(Goal::Efficiency),
            _ => None,
        }
    }
}

/// One named fuel preset: base power (FE/t) and base heat (H/t).
#[derive(Debug, Clone, Copy)]
pub struct FuelPreset {
    pub name: &'static str,
    pub base_power: f64,
    pub base_heat: f64,
}

/// Fuel presets selectable by name instead of spelling out power and heat.
pub const FUEL_PRESETS: &[FuelPreset] = &[
    FuelPreset { name: "TBU", base_power: 4800.0, base_heat: 18.0 },
    FuelPreset { name: "LEU235", base_power: 9600.0, base_heat: 50.0 },
    FuelPreset { name: "HEU235", base_power: 38400.0, base_heat: 300.0 },
    FuelPreset { name: "LEU233", base_power: 11520.0, base_heat: 60.0 },
    FuelPreset { name: "HEU233", base_power: 46080.0, base_heat: 360.0 },
    FuelPreset { name: "LEN236", base_power: 7200.0, base_heat: 36.0 },
    FuelPreset { name: "HEN236", base_power: 28800.0, base_heat: 216.0 },
    FuelPreset { name: "LEP239", base_power: 8400.0, base_heat: 40.0 },
    FuelPreset { name: "HEP239", base_power: 33600.0, base_heat: 240.0 },
    FuelPreset { name: "LEP241", base_power: 13200.0, base_heat: 70.0 },
    FuelPreset { name: "HEP241", base_power: 52800.0, base_heat: 420.0 },
    FuelPreset { name: "LEA242", base_power: 15360.0, base_heat: 94.0 },
    FuelPreset { name: "HEA242", base_power: 61440.0, base_heat: 564.0 },
    FuelPreset { name: "LECm243", base_power: 16800.0, base_heat: 112.0 },
    FuelPreset { name: "HECm243", base_power: 67200.0, base_heat: 672.0 },
    FuelPreset { name: "LECm245", base_power: 12960.0, base_heat: 68.0 },
    FuelPreset { name: "HECm245", base_power: 51840.0, base_heat: 408.0 },
    FuelPreset { name: "LECm247", base_power: 11040.0, base_heat: 54.0 },
    FuelPreset { name: "HECm247", base_power: 44160.0, base_heat: 324.0 },
    FuelPreset { name: "LEB248", base_power: 10800.0, base_heat: 52.0 },
    FuelPreset { name: "HEB248", base_power: 43200.0, base_heat: 312.0 },
    FuelPreset { name: "LECf249", base_power: 17280.0, base_heat: 116.0 },
    FuelPreset { name: "HECf249", base_power: 69120.0, base_heat: 696.0 },
    FuelPreset { name: "LECf251", base_power: 18000.0, base_heat: 120.0 },
    FuelPreset { name: "HECf251", base_power: 72000.0, base_heat: 720.0 },
];

/// Look up a fuel preset by name.
pub fn fuel_preset(name: &str) -> Option<&'static FuelPreset> {
    FUEL_PRESETS
        .iter()
        .find(|preset| preset.name.eq_ignore_ascii_case(name))
}

/// Raw document shape; every constraint is checked in [`OptimizerSettings`].
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct RawSettings {
    size_x: i64,
    size_y: i64,
    size_z: i64,
    fuel_preset: Option<String>,
    fuel_base_power: Option<f64>,
    fuel_base_heat: Option<f64>,
    #[serde(default)]
    ensure_heat_neutral: bool,
    #[serde(default)]
    goal: i64,
    #[serde(default)]
    sym_x: bool,
    #[serde(default)]
    sym_y: bool,
    #[serde(default)]
    sym_z: bool,
    #[serde(default)]
    active_heatsink_prime: bool,
    #[serde(default = "default_unit_mult")]
    gen_mult: f64,
    #[serde(default = "default_unit_mult")]
    heat_mult: f64,
    #[serde(default = "default_mod_fe_mult")]
    mod_fe_mult: f64,
    #[serde(default = "default_mod_heat_mult")]
    mod_heat_mult: f64,
    #[serde(default = "default_unit_mult")]
    fe_gen_mult: f64,
    cooling_rates: Option<Vec<f64>>,
    limits: Option<Vec<i64>>,
}

fn default_unit_mult() -> f64 {
    1.0
}

fn default_mod_fe_mult() -> f64 {
    16.67
}

fn default_mod_heat_mult() -> f64 {
    33.34
}

/// Validated engine configuration.
#[derive(Debug, Clone)]
pub struct OptimizerSettings {
    pub size_x: u32,
    pub size_y: u32,
    pub size_z: u32,
    pub fuel_base_power: f64,
    pub fuel_base_heat: f64,
    pub ensure_heat_neutral: bool,
    pub goal: Goal,
    pub sym_x: bool,
    pub sym_y: bool,
    pub sym_z: bool,
    pub active_heatsink_prime: bool,
    pub gen_mult: f64,
    pub heat_mult: f64,
    pub mod_fe_mult: f64,
    pub mod_heat_mult: f64,
    pub fe_gen_mult: f64,
    /// Passive rates for `[0, N)`, then active rates for `[N, 2N)`.
    pub cooling_rates: Vec<f64>,
    /// Placement limit per rate column; `-1` = unlimited.
    pub limits: Vec<i32>,
}

impl OptimizerSettings {
    /// Parse and validate a TOML settings document.
    pub fn from_toml_str(document: &str) -> ConfigResult<OptimizerSettings> {
        let raw: RawSettings =
            toml::from_str(document).map_err(|error| ConfigError::Parse(error.to_string()))?;
        OptimizerSettings::from_raw(raw)
    }

    /// Read and validate a settings file.
    pub fn load(path: &Path) -> ConfigResult<OptimizerSettings> {
        let document = std::fs::read_to_string(path).map_err(|error| ConfigError::Io {
            path: path.display().to_string(),
            error: error.to_string(),
        })?;
        OptimizerSettings::from_toml_str(&document)
    }

    fn from_raw(raw: RawSettings) -> ConfigResult<OptimizerSettings> {
        let size_x = parse_size("size_x", raw.size_x)?;
        let size_y = parse_size("size_y", raw.size_y)?;
        let size_z = parse_size("size_z", raw.size_z)?;

        let (fuel_base_power, fuel_base_heat) = match raw.fuel_preset.as_deref() {
            Some(name) => {
                let preset = fuel_preset(name).ok_or(ConfigError::InvalidField {
                    field: "fuel_preset",
                    constraint: "must name a known fuel",
                })?;
                (preset.base_power, preset.base_heat)
            }
            None => (
                parse_non_negative(
                    "fuel_base_power",
                    raw.fuel_base_power.ok_or(ConfigError::InvalidField {
                        field: "fuel_base_power",
                        constraint: "required unless fuel_preset is set",
                    })?,
                )?,
                parse_non_negative(
                    "fuel_base_heat",
                    raw.fuel_base_heat.ok_or(ConfigError::InvalidField {
                        field: "fuel_base_heat",
                        constraint: "required unless fuel_preset is set",
                    })?,
                )?,
            ),
        };

        let goal = Goal::from_index(raw.goal).ok_or(ConfigError::InvalidField {
            field: "goal",
            constraint: "must be 0 (power), 1 (breeder) or 2 (efficiency)",
        })?;

        let gen_mult = parse_non_negative("gen_mult", raw.gen_mult)?;
        let heat_mult = parse_non_negative("heat_mult", raw.heat_mult)?;
        let mod_fe_mult = parse_non_negative("mod_fe_mult", raw.mod_fe_mult)?;
        let mod_heat_mult = parse_non_negative("mod_heat_mult", raw.mod_heat_mult)?;
        let fe_gen_mult = parse_non_negative("fe_gen_mult", raw.fe_gen_mult)?;

        let cooling_rates = match raw.cooling_rates {
            Some(rates) => {
                if rates.len() != COOLER_TYPES * 2 {
                    return Err(ConfigError::InvalidField {
                        field: "cooling_rates",
                        constraint: "must list one rate per cooler and active cooler",
                    });
                }
                if rates.iter().any(|rate| !(*rate >= 0.0)) {
                    return Err(ConfigError::InvalidField {
                        field: "cooling_rates",
                        constraint: "rates must be non-negative numbers",
                    });
                }
                rates
            }
            None => catalog().default_cooling_rates(),
        };

        let limits = match raw.limits {
            Some(limits) => {
                if limits.len() != COOLER_TYPES * 2 {
                    return Err(ConfigError::InvalidField {
                        field: "limits",
                        constraint: "must list one limit per cooler and active cooler",
                    });
                }
                // Any negative input means unlimited.
                limits
                    .into_iter()
                    .map(|limit| if limit >= 0 { limit as i32 } else { -1 })
                    .collect()
            }
            None => vec![-1; COOLER_TYPES * 2],
        };

        Ok(OptimizerSettings {
            size_x,
            size_y,
            size_z,
            fuel_base_power,
            fuel_base_heat,
            ensure_heat_neutral: raw.ensure_heat_neutral,
            goal,
            sym_x: raw.sym_x,
            sym_y: raw.sym_y,
            sym_z: raw.sym_z,
            active_heatsink_prime: raw.active_heatsink_prime,
            gen_mult,
            heat_mult,
            mod_fe_mult,
            mod_heat_mult,
            fe_gen_mult,
            cooling_rates,
            limits,
        })
    }

    /// Core volume in cells.
    pub fn volume(&self) -> usize {
        self.size_x as usize * self.size_y as usize * self.size_z as usize
    }
}

fn parse_size(field: &'static str, value: i64) -> ConfigResult<u32> {
    if value > 0 && value <= u32::MAX as i64 {
        Ok(value as u32)
    } else {
        Err(ConfigError::InvalidField {
            field,
            constraint: "must be a positive integer",
        })
    }
}

fn parse_non_negative(field: &'static str, value: f64) -> ConfigResult<f64> {
    // NaN fails the comparison too.
    if value >= 0.0 {
        Ok(value)
    } else {
        Err(ConfigError::InvalidField {
            field,
            constraint: "must be a non-negative number",
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const MINIMAL: &str = "size_x = 3\nsize_y = 3\nsize_z = 3\nfuel_preset = \"LEU235\"\n";

    #[test]
    fn test_minimal_document() {
        let settings = OptimizerSettings::from_toml_str(MINIMAL).expect("valid");
        assert_eq!((settings.size_x, settings.size_y, settings.size_z), (3, 3, 3));
        assert_eq!(settings.fuel_base_power, 9600.0);
        assert_eq!(settings.fuel_base_heat, 50.0);
        assert_eq!(settings.goal, Goal::Power);
        assert_eq!(settings.cooling_rates.len(), COOLER_TYPES * 2);
        assert!(settings.limits.iter().all(|&limit| limit == -1));
        assert_eq!(settings.volume(), 27);
    }

    #[test]
    fn test_defaults_match_form_defaults() {
        let settings = OptimizerSettings::from_toml_str(MINIMAL).expect("valid");
        assert_eq!(settings.gen_mult, 1.0);
        assert_eq!(settings.mod_fe_mult, 16.67);
        assert_eq!(settings.mod_heat_mult, 33.34);
    }

    #[test]
    fn test_non_positive_size_fails_naming_the_field() {
        let doc = "size_x = 0\nsize_y = 3\nsize_z = 3\nfuel_preset = \"TBU\"\n";
        let err = OptimizerSettings::from_toml_str(doc).unwrap_err();
        assert_eq!(err.to_string(), "size_x: must be a positive integer");
    }

    #[test]
    fn test_negative_required_field_fails() {
        let doc = "size_x = 3\nsize_y = 3\nsize_z = 3\nfuel_base_power = -1.0\nfuel_base_heat = 18\n";
        let err = OptimizerSettings::from_toml_str(doc).unwrap_err();
        assert_eq!(err.to_string(), "fuel_base_power: must be a non-negative number");
    }

    #[test]
    fn test_missing_fuel_fields_fail() {
        let doc = "size_x = 3\nsize_y = 3\nsize_z = 3\n";
        let err = OptimizerSettings::from_toml_str(doc).unwrap_err();
        assert_eq!(
            err.to_string(),
            "fuel_base_power: required unless fuel_preset is set"
        );
    }

    #[test]
    fn test_unknown_preset_fails() {
        let doc = "size_x = 3\nsize_y = 3\nsize_z = 3\nfuel_preset = \"plutonium\"\n";
        let err = OptimizerSettings::from_toml_str(doc).unwrap_err();
        assert_eq!(err.to_string(), "fuel_preset: must name a known fuel");
    }

    #[test]
    fn test_goal_out_of_range_fails() {
        let doc = "size_x = 3\nsize_y = 3\nsize_z = 3\nfuel_preset = \"TBU\"\ngoal = 7\n";
        let err = OptimizerSettings::from_toml_str(doc).unwrap_err();
        assert!(err.to_string().starts_with("goal:"));
    }

    #[test]
    fn test_negative_limits_mean_unlimited() {
        let mut doc = String::from("size_x = 3\nsize_y = 3\nsize_z = 3\nfuel_preset = \"TBU\"\n");
        let limits: Vec<String> = (0..COOLER_TYPES * 2)
            .map(|i| if i == 0 { "5".to_string() } else { "-7".to_string() })
            .collect();
        doc.push_str(&format!("limits = [{}]\n", limits.join(", ")));
        let settings = OptimizerSettings::from_toml_str(&doc).expect("valid");
        assert_eq!(settings.limits[0], 5);
        assert!(settings.limits[1..].iter().all(|&limit| limit == -1));
    }

    #[test]
    fn test_wrong_rate_arity_fails() {
        let doc = "size_x = 3\nsize_y = 3\nsize_z = 3\nfuel_preset = \"TBU\"\ncooling_rates = [60.0]\n";
        let err = OptimizerSettings::from_toml_str(doc).unwrap_err();
        assert!(err.to_string().starts_with("cooling_rates:"));
    }

    #[test]
    fn test_malformed_document_fails() {
        let err = OptimizerSettings::from_toml_str("size_x = \"three\"").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[test]
    fn test_preset_lookup_is_case_insensitive() {
        assert!(fuel_preset("leu235").is_some());
        assert!(fuel_preset("HECf251").is_some());
        assert!(fuel_preset("unknown").is_none());
    }
}
