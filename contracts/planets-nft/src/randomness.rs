use near_sdk::env;
use std::collections::VecDeque;

use crate::MintError;

/// Injected randomness capability: one fresh draw per assignment, never
/// reused across assignments.
pub trait RandomnessSource {
    fn next_random(&mut self) -> Result<u64, MintError>;
}

/// Expands the block randomness seed with a persisted nonce so draws differ
/// across calls landing in the same block.
pub struct SeedRandomness {
    seed: Vec<u8>,
    nonce: u64,
}

impl SeedRandomness {
    pub fn new(seed: Vec<u8>, nonce: u64) -> Self {
        Self { seed, nonce }
    }

    pub fn nonce(&self) -> u64 {
        self.nonce
    }
}

impl RandomnessSource for SeedRandomness {
    fn next_random(&mut self) -> Result<u64, MintError> {
        let mut buf = self.seed.clone();
        buf.extend_from_slice(&self.nonce.to_le_bytes());
        self.nonce = self.nonce.wrapping_add(1);
        let digest = env::sha256(&buf);
        let mut word = [0u8; 8];
        word.copy_from_slice(&digest[..8]);
        Ok(u64::from_le_bytes(word))
    }
}

/// Finite supply of externally provided words (oracle fulfillment, scripted
/// test sequences). Exhaustion surfaces as `RandomnessUnavailable`.
pub struct ScriptedWords {
    words: VecDeque<u64>,
}

impl ScriptedWords {
    pub fn new(words: Vec<u64>) -> Self {
        Self {
            words: words.into(),
        }
    }
}

impl RandomnessSource for ScriptedWords {
    fn next_random(&mut self) -> Result<u64, MintError> {
        self.words.pop_front().ok_or_else(|| {
            MintError::RandomnessUnavailable("Randomness words exhausted".into())
        })
    }
}
