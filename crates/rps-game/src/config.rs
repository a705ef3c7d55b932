//! Configuration for a game session.

/// Configuration for a game session.
#[derive(Debug, Clone, Default)]
pub struct GameConfig {
    /// RNG seed for reproducible system moves. `None` seeds from the OS.
    pub seed: Option<u64>,
}

impl GameConfig {
    /// Set the RNG seed.
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_unseeded() {
        assert_eq!(GameConfig::default().seed, None);
    }

    #[test]
    fn builder_sets_seed() {
        let cfg = GameConfig::default().with_seed(123);
        assert_eq!(cfg.seed, Some(123));
    }
}
