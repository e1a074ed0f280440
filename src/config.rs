//! Dataset configuration: where each city's trips live and which optional columns they carry.
//!
//! [`DatasetConfig`] is built once at startup (defaults, then an optional JSON file named by
//! `BIKESHARE_CONFIG`, then an optional data directory named by `BIKESHARE_DATA_DIR`), checked
//! with [`DatasetConfig::validate`], and passed by reference from then on.
//!
//! ```json
//! {
//!   "data_dir": "data",
//!   "cities": {
//!     "chicago": { "file": "chicago.csv", "optional_fields": ["Gender", "Birth Year"] },
//!     "new york city": { "file": "new_york_city.csv", "optional_fields": ["Gender", "Birth Year"] },
//!     "washington": { "file": "washington.csv" }
//!   },
//!   "page_size": 5,
//!   "message_delay_ms": 700
//! }
//! ```

use std::collections::{BTreeMap, BTreeSet};
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::Deserialize;

use crate::error::{BikeshareError, BikeshareResult};

/// Environment variable naming a JSON config file.
pub const CONFIG_ENV: &str = "BIKESHARE_CONFIG";
/// Environment variable overriding [`DatasetConfig::data_dir`].
pub const DATA_DIR_ENV: &str = "BIKESHARE_DATA_DIR";

/// Cities with a trip dataset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum City {
    #[serde(rename = "chicago")]
    Chicago,
    #[serde(rename = "new york city")]
    NewYorkCity,
    #[serde(rename = "washington")]
    Washington,
}

impl City {
    /// Every city, in prompt order.
    pub const ALL: [City; 3] = [City::Chicago, City::NewYorkCity, City::Washington];

    /// Parse user input (case-insensitive, surrounding whitespace ignored).
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().to_lowercase().as_str() {
            "chicago" => Some(Self::Chicago),
            "new york city" => Some(Self::NewYorkCity),
            "washington" => Some(Self::Washington),
            _ => None,
        }
    }

    /// Lower-case name as typed at the prompt.
    pub fn name(self) -> &'static str {
        match self {
            Self::Chicago => "chicago",
            Self::NewYorkCity => "new york city",
            Self::Washington => "washington",
        }
    }
}

impl fmt::Display for City {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Chicago => "Chicago",
            Self::NewYorkCity => "New York City",
            Self::Washington => "Washington",
        })
    }
}

/// Columns that only some cities' datasets provide.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Deserialize)]
pub enum OptionalField {
    #[serde(rename = "Gender")]
    Gender,
    #[serde(rename = "Birth Year")]
    BirthYear,
}

impl OptionalField {
    /// Header of the CSV column holding this field.
    pub fn column(self) -> &'static str {
        match self {
            Self::Gender => crate::trips::GENDER,
            Self::BirthYear => crate::trips::BIRTH_YEAR,
        }
    }
}

/// Schema descriptor for one city's backing file.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CitySource {
    /// File name, resolved against [`DatasetConfig::data_dir`].
    pub file: String,
    /// Optional columns present in this file.
    #[serde(default)]
    pub optional_fields: BTreeSet<OptionalField>,
}

impl CitySource {
    pub fn new(file: impl Into<String>, optional_fields: impl IntoIterator<Item = OptionalField>) -> Self {
        Self {
            file: file.into(),
            optional_fields: optional_fields.into_iter().collect(),
        }
    }

    pub fn has(&self, field: OptionalField) -> bool {
        self.optional_fields.contains(&field)
    }
}

/// Immutable configuration for loading and presenting trip data.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct DatasetConfig {
    /// Directory holding the per-city CSV files.
    pub data_dir: PathBuf,
    /// City → backing file and schema descriptor.
    pub cities: BTreeMap<City, CitySource>,
    /// Rows per raw-data page.
    pub page_size: usize,
    /// Pause after each status message, in milliseconds.
    pub message_delay_ms: u64,
}

impl Default for DatasetConfig {
    fn default() -> Self {
        let demographics = [OptionalField::Gender, OptionalField::BirthYear];
        let cities = BTreeMap::from([
            (City::Chicago, CitySource::new("chicago.csv", demographics)),
            (City::NewYorkCity, CitySource::new("new_york_city.csv", demographics)),
            (City::Washington, CitySource::new("washington.csv", [])),
        ]);
        Self {
            data_dir: PathBuf::from("."),
            cities,
            page_size: 5,
            message_delay_ms: 0,
        }
    }
}

impl DatasetConfig {
    /// Decode a config from JSON text. Missing keys fall back to [`Default`].
    pub fn from_json_str(text: &str) -> BikeshareResult<Self> {
        Ok(serde_json::from_str(text)?)
    }

    /// Decode a config from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> BikeshareResult<Self> {
        let text = std::fs::read_to_string(path.as_ref())?;
        Self::from_json_str(&text)
    }

    /// Build the startup config from the environment and validate it.
    ///
    /// `base` is used when `BIKESHARE_CONFIG` is unset.
    pub fn from_env(base: Self) -> BikeshareResult<Self> {
        let mut config = match std::env::var_os(CONFIG_ENV) {
            Some(path) => {
                log::info!("loading config from {}", Path::new(&path).display());
                Self::from_path(path)?
            }
            None => base,
        };
        if let Some(dir) = std::env::var_os(DATA_DIR_ENV) {
            config.data_dir = PathBuf::from(dir);
        }
        config.validate()?;
        Ok(config)
    }

    /// Check that every city is mapped to a CSV file and that paging is possible.
    pub fn validate(&self) -> BikeshareResult<()> {
        for city in City::ALL {
            let source = self.cities.get(&city).ok_or_else(|| BikeshareError::InvalidConfig {
                message: format!("no data file configured for {}", city.name()),
            })?;
            let file = source.file.trim();
            if file.is_empty() || !file.to_ascii_lowercase().ends_with(".csv") {
                return Err(BikeshareError::InvalidConfig {
                    message: format!(
                        "data file for {} must be a .csv file, got '{}'",
                        city.name(),
                        source.file
                    ),
                });
            }
        }
        if self.page_size == 0 {
            return Err(BikeshareError::InvalidConfig {
                message: "page_size must be > 0".to_string(),
            });
        }
        Ok(())
    }

    /// Schema descriptor for `city`.
    pub fn source(&self, city: City) -> BikeshareResult<&CitySource> {
        self.cities.get(&city).ok_or_else(|| BikeshareError::InvalidConfig {
            message: format!("no data file configured for {}", city.name()),
        })
    }

    /// Full path of the CSV backing `city`.
    pub fn source_path(&self, city: City) -> BikeshareResult<PathBuf> {
        Ok(self.data_dir.join(&self.source(city)?.file))
    }

    pub fn message_delay(&self) -> Duration {
        Duration::from_millis(self.message_delay_ms)
    }
}
