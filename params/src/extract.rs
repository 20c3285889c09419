//! Extraction of raw constant literals from a generated Rust source file.
//!
//! The input grammar is fixed: every constant of interest appears as
//! `U256::from_limbs([0x…, 0x…, 0x…, 0x…])` with four little-endian 64-bit
//! hex words. A single-pass byte scanner over that one pattern is enough;
//! anything that does not match the full grammar is skipped.

use crate::error::GenError;
use crate::mont::Fr;

/// Minimum literal count the output schema needs:
/// 195 round constants plus 9 MDS matrix entries.
pub const SCHEMA_MIN: usize = 204;

const NEEDLE: &[u8] = b"U256::from_limbs(";

pub struct Extractor<'a> {
    source: &'a [u8],
    pos: usize,
}

impl<'a> Extractor<'a> {
    /// Scan `source` and return every matched literal, in source order.
    ///
    /// Order is load-bearing: position encodes which round constant or matrix
    /// cell a value is. Fails when fewer than [`SCHEMA_MIN`] literals match;
    /// a short table means the upstream source is stale or malformed and must
    /// not silently produce truncated output. Extra literals are tolerated.
    pub fn extract(source: &str) -> Result<Vec<Fr>, GenError> {
        let mut scanner = Extractor {
            source: source.as_bytes(),
            pos: 0,
        };
        let mut values = Vec::new();
        while let Some(start) = scanner.find_needle() {
            scanner.pos = start + NEEDLE.len();
            if let Some(limbs) = scanner.match_limb_array() {
                values.push(Fr::from_limbs(&limbs));
            }
        }
        if values.len() < SCHEMA_MIN {
            return Err(GenError::TableTooShort {
                expected: SCHEMA_MIN,
                found: values.len(),
            });
        }
        Ok(values)
    }

    fn find_needle(&self) -> Option<usize> {
        self.source[self.pos..]
            .windows(NEEDLE.len())
            .position(|w| w == NEEDLE)
            .map(|i| self.pos + i)
    }

    fn peek(&self) -> Option<u8> {
        self.source.get(self.pos).copied()
    }

    fn eat(&mut self, ch: u8) -> bool {
        if self.peek() == Some(ch) {
            self.pos += 1;
            true
        } else {
            false
        }
    }

    fn skip_whitespace(&mut self) {
        while matches!(self.peek(), Some(b' ' | b'\t' | b'\r' | b'\n')) {
            self.pos += 1;
        }
    }

    /// Match one `0x`-prefixed hex word of 1..=16 digits.
    fn match_hex_word(&mut self) -> Option<u64> {
        if !self.eat(b'0') || !self.eat(b'x') {
            return None;
        }
        let start = self.pos;
        while matches!(self.peek(), Some(c) if c.is_ascii_hexdigit()) {
            self.pos += 1;
        }
        let digits = &self.source[start..self.pos];
        if digits.is_empty() || digits.len() > 16 {
            return None;
        }
        // digits are ASCII by construction
        let s = std::str::from_utf8(digits).ok()?;
        u64::from_str_radix(s, 16).ok()
    }

    /// Match `[HEX, HEX, HEX, HEX])` after the needle, whitespace-tolerant,
    /// optional trailing comma.
    fn match_limb_array(&mut self) -> Option<[u64; 4]> {
        self.skip_whitespace();
        if !self.eat(b'[') {
            return None;
        }
        let mut limbs = [0u64; 4];
        for (i, limb) in limbs.iter_mut().enumerate() {
            self.skip_whitespace();
            *limb = self.match_hex_word()?;
            self.skip_whitespace();
            if i < 3 && !self.eat(b',') {
                return None;
            }
        }
        self.eat(b',');
        self.skip_whitespace();
        if !self.eat(b']') {
            return None;
        }
        self.skip_whitespace();
        if !self.eat(b')') {
            return None;
        }
        Some(limbs)
    }
}
