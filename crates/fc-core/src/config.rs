//! Configuration for loading and drawing fortunes.

use std::ffi::OsString;
use std::path::PathBuf;

use rand::SeedableRng;
use rand::rngs::StdRng;

use crate::book::FortuneBook;
use crate::error::FortuneResult;
use crate::greeting::current_hour;

/// Environment variable naming a fortune document to load instead of the built-in one.
pub const FORTUNES_ENV: &str = "FCOW_FORTUNES";

/// Where fortunes come from and how one is drawn.
#[derive(Debug, Clone, Default)]
pub struct FortuneConfig {
    /// Fortune document to load. `None` uses the built-in fortunes.
    pub fortunes_path: Option<PathBuf>,
    /// RNG seed for reproducible draws. `None` seeds from the OS.
    pub seed: Option<u64>,
    /// Hour to greet for. `None` reads the local clock.
    pub hour: Option<u32>,
}

impl FortuneConfig {
    /// Defaults, with the fortune path taken from [`FORTUNES_ENV`] if set.
    pub fn from_env() -> Self {
        Self::default().with_env_fortunes(std::env::var_os(FORTUNES_ENV))
    }

    fn with_env_fortunes(mut self, value: Option<OsString>) -> Self {
        self.fortunes_path = value.filter(|v| !v.is_empty()).map(PathBuf::from);
        self
    }

    /// Load fortunes from the given document.
    pub fn with_fortunes(mut self, path: impl Into<PathBuf>) -> Self {
        self.fortunes_path = Some(path.into());
        self
    }

    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    /// Greet for a fixed hour instead of the clock.
    pub fn with_hour(mut self, hour: u32) -> Self {
        self.hour = Some(hour);
        self
    }

    /// Load the configured fortune book.
    pub fn load_book(&self) -> FortuneResult<FortuneBook> {
        match &self.fortunes_path {
            Some(path) => FortuneBook::load(path),
            None => FortuneBook::builtin(),
        }
    }

    /// The RNG to draw with.
    pub fn rng(&self) -> StdRng {
        match self.seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        }
    }

    /// The hour to greet for.
    pub fn hour(&self) -> u32 {
        self.hour.unwrap_or_else(current_hour)
    }
}
