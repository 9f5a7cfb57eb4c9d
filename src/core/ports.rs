use secrecy::SecretString;
use thiserror::Error;

/// Minimum accepted generated-password length.
pub const MIN_LENGTH: u16 = 4;

// Randomness provider for deterministic testing.
pub trait Rng: Send + Sync {
    fn fill(&self, bytes: &mut [u8]);
}

// Password generator policy and trait. Lowercase letters are always part
// of the alphabet; the flags add the optional classes.
#[derive(Debug, Clone)]
pub struct GenPolicy {
    pub length: u16,
    pub upper: bool,
    pub digits: bool,
    pub special: bool,
}

impl Default for GenPolicy {
    fn default() -> Self {
        Self {
            length: 20,
            upper: true,
            digits: true,
            special: true,
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PolicyError {
    #[error("password length must be at least 4 characters, got {0}")]
    LengthTooShort(u16),
}

pub trait PasswordGenerator: Send + Sync {
    fn generate(&self, policy: &GenPolicy) -> Result<SecretString, PolicyError>;
}
