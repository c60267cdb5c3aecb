//! Uniform random sources
//!
//! Every random choice the engine makes (prize placement, host reveal,
//! switch target, simulated initial pick) goes through [`UniformSource`],
//! so callers decide where randomness comes from. [`SeededRng`] is the
//! reproducible default; [`ScriptedSource`] replays fixed choices.

/// Source of uniformly distributed indices.
pub trait UniformSource {
    /// Return an index in `[0, len)`. `len` is never zero when called by
    /// the engine.
    fn next_index(&mut self, len: usize) -> usize;
}

/// Seeded random number generator
///
/// Deterministic: same seed + stream = same sequence
#[derive(Clone, Debug)]
pub struct SeededRng {
    state: u64,
}

impl SeededRng {
    /// Create a new RNG from a 32-byte seed and a stream index
    pub fn new(seed: &[u8; 32], stream: u32) -> Self {
        let mut state = 0u64;
        for (i, chunk) in seed.chunks(8).enumerate() {
            let mut bytes = [0u8; 8];
            bytes[..chunk.len()].copy_from_slice(chunk);
            state ^= u64::from_le_bytes(bytes).wrapping_add(i as u64);
        }

        state ^= (stream as u64).wrapping_mul(0x517cc1b727220a95);

        // xorshift never leaves the all-zero state
        if state == 0 {
            state = 0x9e3779b97f4a7c15;
        }

        let mut rng = Self { state };
        for _ in 0..8 {
            rng.next_u64();
        }

        rng
    }

    /// Create an RNG from a single integer seed (CLI `--seed`)
    pub fn from_u64(seed: u64) -> Self {
        let mut bytes = [0u8; 32];
        for (i, chunk) in bytes.chunks_mut(8).enumerate() {
            let word = seed.rotate_left(i as u32 * 16) ^ (i as u64);
            chunk.copy_from_slice(&word.to_le_bytes());
        }
        Self::new(&bytes, 0)
    }

    /// Generate next u64
    pub fn next_u64(&mut self) -> u64 {
        // xorshift64*
        self.state ^= self.state >> 12;
        self.state ^= self.state << 25;
        self.state ^= self.state >> 27;
        self.state.wrapping_mul(0x2545f4914f6cdd1d)
    }

    /// Generate next u32
    pub fn next_u32(&mut self) -> u32 {
        (self.next_u64() >> 32) as u32
    }

    /// Generate a value in range [0, max)
    pub fn next_range(&mut self, max: u32) -> u32 {
        if max == 0 {
            return 0;
        }
        ((self.next_u32() as u64 * max as u64) >> 32) as u32
    }
}

impl UniformSource for SeededRng {
    fn next_index(&mut self, len: usize) -> usize {
        if len <= u32::MAX as usize {
            self.next_range(len as u32) as usize
        } else {
            (self.next_u64() % len as u64) as usize
        }
    }
}

/// Replays a fixed list of indices, wrapping each into the requested range.
///
/// Panics if the script runs dry, so a test notices when the engine draws
/// more often than expected.
#[derive(Clone, Debug, Default)]
pub struct ScriptedSource {
    script: Vec<usize>,
    cursor: usize,
}

impl ScriptedSource {
    pub fn new(script: Vec<usize>) -> Self {
        Self { script, cursor: 0 }
    }

    /// Number of indices handed out so far
    pub fn draws(&self) -> usize {
        self.cursor
    }

    /// Number of scripted indices not yet consumed
    pub fn remaining(&self) -> usize {
        self.script.len() - self.cursor
    }
}

impl UniformSource for ScriptedSource {
    fn next_index(&mut self, len: usize) -> usize {
        let value = match self.script.get(self.cursor) {
            Some(value) => *value,
            None => panic!("scripted source exhausted after {} draws", self.cursor),
        };
        self.cursor += 1;
        value % len.max(1)
    }
}
