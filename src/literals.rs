//! Synthesized argument literals for generated test cases.
//!
//! The delegate-stub generators embed literal argument values directly in the
//! emitted text, so each generated test case is self-sufficient at its own
//! runtime. Values come from a [`LiteralSource`] passed explicitly into the
//! generator rather than from ambient global randomness, which lets tests swap
//! in a fixed sequence and make a whole pass reproducible.

use rand::Rng;

/// A source of raw argument values, one `u16` per draw.
///
/// The `u16` draw type bounds every synthesized value to `[0, 65536)`.
pub trait LiteralSource {
    fn draw(&mut self) -> u16;
}

/// Uniform draws from the full `u16` range via the thread-local RNG.
///
/// No seed control is exposed: successive runs of a stub generator are expected
/// to produce different argument data while keeping identical structure.
pub struct RandomLiterals;

impl LiteralSource for RandomLiterals {
    fn draw(&mut self) -> u16 {
        rand::thread_rng().gen()
    }
}

/// Replays a caller-supplied sequence, cycling when exhausted.
pub struct FixedLiterals {
    values: Vec<u16>,
    next: usize,
}

impl FixedLiterals {
    /// `values` must be non-empty.
    pub fn new(values: Vec<u16>) -> Self {
        assert!(!values.is_empty(), "FixedLiterals needs at least one value");
        Self { values, next: 0 }
    }
}

impl LiteralSource for FixedLiterals {
    fn draw(&mut self) -> u16 {
        let value = self.values[self.next % self.values.len()];
        self.next += 1;
        value
    }
}

/// Formats one draw as a lowercase hexadecimal literal token, e.g. `0x2adc`.
pub fn hex_token(value: u16) -> String {
    format!("{value:#x}")
}

/// Draws `n` independent values and joins their hex tokens with `", "`.
pub fn hex_args(literals: &mut dyn LiteralSource, n: usize) -> String {
    (0..n)
        .map(|_| hex_token(literals.draw()))
        .collect::<Vec<_>>()
        .join(", ")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hex_token_lowercase() {
        assert_eq!(hex_token(0x2adc), "0x2adc");
        assert_eq!(hex_token(0xBEEF), "0xbeef");
    }

    #[test]
    fn test_hex_token_zero() {
        assert_eq!(hex_token(0), "0x0");
    }

    #[test]
    fn test_hex_token_max() {
        assert_eq!(hex_token(u16::MAX), "0xffff");
    }

    #[test]
    fn test_fixed_literals_replay_in_order() {
        let mut src = FixedLiterals::new(vec![1, 2, 3]);
        assert_eq!(src.draw(), 1);
        assert_eq!(src.draw(), 2);
        assert_eq!(src.draw(), 3);
    }

    #[test]
    fn test_fixed_literals_cycle() {
        let mut src = FixedLiterals::new(vec![7, 8]);
        assert_eq!(src.draw(), 7);
        assert_eq!(src.draw(), 8);
        assert_eq!(src.draw(), 7);
    }

    #[test]
    #[should_panic]
    fn test_fixed_literals_rejects_empty() {
        let _ = FixedLiterals::new(vec![]);
    }

    #[test]
    fn test_hex_args_count_and_join() {
        let mut src = FixedLiterals::new(vec![0x10, 0x20, 0x30]);
        assert_eq!(hex_args(&mut src, 3), "0x10, 0x20, 0x30");
    }

    #[test]
    fn test_hex_args_single() {
        let mut src = FixedLiterals::new(vec![0xff]);
        assert_eq!(hex_args(&mut src, 1), "0xff");
    }

    #[test]
    fn test_hex_args_random_tokens_parse_in_range() {
        let mut src = RandomLiterals;
        let joined = hex_args(&mut src, 32);
        for token in joined.split(", ") {
            let raw = token.strip_prefix("0x").expect("hex prefix");
            let value = u32::from_str_radix(raw, 16).expect("hex digits");
            assert!(value < 1 << 16);
        }
    }
}
