//! Unbiased coin flip for mark/first-turn assignment.
//!
//! Injected into the service layer so tests can pin the outcome.

use std::sync::Mutex;

use rand::Rng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

pub trait FairCoin: Send + Sync {
    /// One unbiased boolean draw.
    fn flip(&self) -> bool;
}

/// Production coin backed by a ChaCha20 RNG seeded from OS entropy.
pub struct ChaChaCoin {
    rng: Mutex<ChaCha20Rng>,
}

impl ChaChaCoin {
    pub fn from_os_entropy() -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::from_os_rng()),
        }
    }

    /// Deterministic coin for reproducible runs and tests.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: Mutex::new(ChaCha20Rng::seed_from_u64(seed)),
        }
    }
}

impl FairCoin for ChaChaCoin {
    fn flip(&self) -> bool {
        let mut rng = self.rng.lock().unwrap_or_else(|e| e.into_inner());
        rng.random_bool(0.5)
    }
}

/// Coin that always lands the same way; test-only knob for join outcomes.
pub struct FixedCoin(pub bool);

impl FairCoin for FixedCoin {
    fn flip(&self) -> bool {
        self.0
    }
}
