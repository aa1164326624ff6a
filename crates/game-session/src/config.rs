use std::io::Read;

/// Runner configuration, loaded from a TOML file.
#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Config {
    /// Number of self-play games to run.
    #[serde(default = "defaults::games")]
    pub games: u32,

    /// Base RNG seed; game `i` plays with `seed + i`. When omitted, seeds
    /// are drawn from entropy.
    #[serde(default)]
    pub seed: Option<u64>,

    // Group score-store settings under one nested key.
    #[serde(default)]
    pub store: Store,
}

#[derive(Clone, Debug, PartialEq, serde::Deserialize)]
pub struct Store {
    /// Path to the score database. When omitted, scores are not persisted.
    #[serde(default)]
    pub db_path: Option<std::path::PathBuf>,

    /// How many top scores the store retains.
    #[serde(default = "defaults::keep")]
    pub keep: usize,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            games: defaults::games(),
            seed: None,
            store: Store::default(),
        }
    }
}

impl Default for Store {
    fn default() -> Self {
        Self {
            db_path: None,
            keep: defaults::keep(),
        }
    }
}

impl Config {
    pub fn from_toml<P: AsRef<std::path::Path>>(
        path: P,
    ) -> Result<Self, Box<dyn std::error::Error>> {
        let mut file = std::fs::File::open(path)?;
        let mut contents = String::new();
        file.read_to_string(&mut contents)?;
        let cfg: Self = toml::from_str(&contents)?;
        Ok(cfg)
    }
}

mod defaults {
    pub fn games() -> u32 {
        1
    }
    pub fn keep() -> usize {
        10
    }
}
