//! Configuration for a dungeon-master session.

/// Configuration for a session.
#[derive(Debug, Clone, Copy, Default)]
pub struct SessionConfig {
    /// RNG seed for reproducible dice and narration. When unset, the
    /// session seeds from OS entropy.
    pub seed: Option<u64>,
}

impl SessionConfig {
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
    fn default_is_unseeded() {
        assert_eq!(SessionConfig::default().seed, None);
    }

    #[test]
    fn builder_sets_seed() {
        assert_eq!(SessionConfig::default().with_seed(7).seed, Some(7));
    }
}
