use rand::Rng;

use super::UvciGenerator;
use crate::config::core_config::UvciConfig;

const UVCI_ALPHABET: &[u8] = b"0123456789ABCDEFGHIJKLMNOPQRSTUVWXYZ";
const UVCI_OPAQUE_LENGTH: usize = 24;
const CHECKSUM_SEPARATOR: char = '#';

/// Generates `urn:uvci:<version>:<country>:<24 random characters>`, optionally
/// followed by `#<check character>`.
///
/// The opaque part carries 124 bits of entropy. The check character is the
/// Luhn mod N (N = 36) check character of the opaque part.
pub struct RandomUvciGenerator {
    prefix: String,
    checksum: bool,
}

impl RandomUvciGenerator {
    pub fn new(config: &UvciConfig) -> Self {
        Self {
            prefix: format!("urn:uvci:{}:{}:", config.version, config.country),
            checksum: config.checksum,
        }
    }

    fn opaque_part(&self) -> String {
        let mut rng = rand::thread_rng();
        (0..UVCI_OPAQUE_LENGTH)
            .map(|_| UVCI_ALPHABET[rng.gen_range(0..UVCI_ALPHABET.len())] as char)
            .collect()
    }
}

impl UvciGenerator for RandomUvciGenerator {
    fn generate(&self) -> String {
        let opaque = self.opaque_part();

        match (self.checksum, luhn_mod_n_check_character(&opaque)) {
            (true, Some(check)) => {
                format!("{}{opaque}{CHECKSUM_SEPARATOR}{check}", self.prefix)
            }
            _ => format!("{}{opaque}", self.prefix),
        }
    }
}

fn code_point(c: char) -> Option<usize> {
    UVCI_ALPHABET.iter().position(|&b| b as char == c)
}

/// Returns `None` when the input contains characters outside the alphabet.
pub(crate) fn luhn_mod_n_check_character(input: &str) -> Option<char> {
    let n = UVCI_ALPHABET.len();
    let mut factor = 2;
    let mut sum = 0;

    for c in input.chars().rev() {
        let mut addend = factor * code_point(c)?;
        factor = if factor == 2 { 1 } else { 2 };
        addend = addend / n + addend % n;
        sum += addend;
    }

    let check = (n - sum % n) % n;
    Some(UVCI_ALPHABET[check] as char)
}
