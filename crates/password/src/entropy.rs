//! Closed-form entropy estimates for wordlist passphrases.
use zxcvbn::{zxcvbn, Entropy};

/// Seconds in a year.
const YEAR_SECONDS: f64 = 60.0 * 60.0 * 24.0 * 365.0;

/// Entropy in bits of a passphrase of `words` words each drawn
/// uniformly from a dictionary of `dictionary_len` words.
///
/// A dictionary of fewer than two words yields zero bits.
pub fn passphrase_bits(dictionary_len: usize, words: usize) -> f64 {
    if dictionary_len < 2 {
        return 0.0;
    }
    words as f64 * (dictionary_len as f64).log2()
}

/// Average number of years to find a passphrase of `bits` entropy
/// at a fixed guess rate.
pub fn crack_years(bits: f64, guesses_per_second: f64) -> f64 {
    let outcomes = bits.exp2();
    (outcomes / guesses_per_second) / YEAR_SECONDS / 2.0
}

/// Measure the strength of a password.
pub fn measure_entropy(password: &str, user_inputs: &[&str]) -> Entropy {
    zxcvbn(password, user_inputs)
}
