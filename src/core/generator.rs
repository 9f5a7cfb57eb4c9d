use rand::rngs::OsRng;
use rand::RngCore;
use secrecy::SecretString;
use std::sync::Arc;

use crate::core::ports::{GenPolicy, PasswordGenerator, PolicyError, Rng, MIN_LENGTH};

pub struct SystemRng;

impl Rng for SystemRng {
    fn fill(&self, bytes: &mut [u8]) {
        OsRng.fill_bytes(bytes);
    }
}

pub struct DefaultPasswordGenerator {
    rng: Arc<dyn Rng>,
}

impl DefaultPasswordGenerator {
    pub fn new(rng: Arc<dyn Rng>) -> Self {
        Self { rng }
    }
}

impl PasswordGenerator for DefaultPasswordGenerator {
    fn generate(&self, policy: &GenPolicy) -> Result<SecretString, PolicyError> {
        generate_chars(&*self.rng, policy)
    }
}

// ===== Character classes =====

const LOWER: &[u8] = b"abcdefghijklmnopqrstuvwxyz";
const UPPER: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const DIGITS: &[u8] = b"0123456789";
const SPECIAL: &[u8] = b"!\"#$%&'()*+,-./:;<=>?@[\\]^_`{|}~";

fn uniform_index(rng: &dyn Rng, len: usize) -> usize {
    debug_assert!(len > 0);
    // Rejection sampling on u32 space
    let n = len as u32;
    let zone = (u32::MAX / n) * n;
    loop {
        let mut b = [0u8; 4];
        rng.fill(&mut b);
        let x = u32::from_le_bytes(b);
        if x < zone {
            return (x % n) as usize;
        }
    }
}

fn pick(rng: &dyn Rng, class: &[u8]) -> u8 {
    class[uniform_index(rng, class.len())]
}

/// Draws every position uniformly from the combined alphabet, then runs a
/// repair sweep (uppercase, digits, special, in that order) overwriting one
/// random position for each selected class still missing. Repairs check the
/// buffer as it stands, so a later injection can land on an earlier one and
/// knock its class back out; very short lengths occasionally come back
/// missing a selected class. Lowercase is the base alphabet and is never
/// repaired.
fn generate_chars(rng: &dyn Rng, policy: &GenPolicy) -> Result<SecretString, PolicyError> {
    if policy.length < MIN_LENGTH {
        return Err(PolicyError::LengthTooShort(policy.length));
    }

    let mut pool: Vec<u8> = LOWER.to_vec();
    if policy.upper {
        pool.extend_from_slice(UPPER);
    }
    if policy.special {
        pool.extend_from_slice(SPECIAL);
    }
    if policy.digits {
        pool.extend_from_slice(DIGITS);
    }

    let need = policy.length as usize;
    let mut out: Vec<u8> = Vec::with_capacity(need);
    for _ in 0..need {
        out.push(pick(rng, &pool));
    }

    if policy.upper && !out.iter().any(u8::is_ascii_uppercase) {
        let position = uniform_index(rng, need);
        out[position] = pick(rng, UPPER);
    }
    if policy.digits && !out.iter().any(u8::is_ascii_digit) {
        let position = uniform_index(rng, need);
        out[position] = pick(rng, DIGITS);
    }
    if policy.special && !out.iter().any(|c| SPECIAL.contains(c)) {
        let position = uniform_index(rng, need);
        out[position] = pick(rng, SPECIAL);
    }

    let s = String::from_utf8(out).unwrap();
    Ok(SecretString::new(s.into()))
}
