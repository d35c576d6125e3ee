//! Rule numbers and the transition tables they encode
//!
//! Wolfram's numbering stores one output bit per neighborhood pattern in the
//! binary digits of the rule. Rules above 255 carry more than eight bits, so
//! the neighborhood widens until every bit has a pattern to belong to.

use crate::io::configuration::{MAX_NEIGHBORHOOD_WIDTH, MIN_NEIGHBORHOOD_WIDTH};
use crate::io::error::{PosterError, Result, invalid_rule};
use bitvec::prelude::*;
use num_bigint::BigUint;
use num_traits::Zero;
use std::fmt;
use std::str::FromStr;

/// Non-negative rule number of unbounded size
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct Rule(BigUint);

impl Rule {
    /// Wrap an arbitrary rule number
    pub const fn new(number: BigUint) -> Self {
        Self(number)
    }

    /// The rule number itself
    pub const fn number(&self) -> &BigUint {
        &self.0
    }

    /// Number of consecutive cells consulted per transition
    ///
    /// Equals `max(3, ceil(log2(log2(rule + 1))))`. Computed on the bit length
    /// of the rule so that rules 0 and 1, where the logarithms degenerate,
    /// fall through to the 3-cell clamp.
    pub fn neighborhood_width(&self) -> usize {
        let bits = self.0.bits();
        let width = bits.next_power_of_two().trailing_zeros() as usize;
        width.max(MIN_NEIGHBORHOOD_WIDTH)
    }

    /// Whether this is one of the 256 classical 3-cell rules
    pub fn is_elementary(&self) -> bool {
        self.neighborhood_width() == MIN_NEIGHBORHOOD_WIDTH
    }

    /// Whether the rule maps every pattern to a dead cell
    pub fn is_zero(&self) -> bool {
        self.0.is_zero()
    }
}

impl From<u64> for Rule {
    fn from(number: u64) -> Self {
        Self(BigUint::from(number))
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl FromStr for Rule {
    type Err = PosterError;

    fn from_str(s: &str) -> Result<Self> {
        let trimmed = s.trim();
        if trimmed.starts_with('-') {
            return Err(invalid_rule(&trimmed, &"rule numbers cannot be negative"));
        }
        if trimmed.is_empty() || !trimmed.bytes().all(|b| b.is_ascii_digit()) {
            return Err(invalid_rule(&trimmed, &"expected a decimal integer"));
        }

        let number = trimmed
            .parse::<BigUint>()
            .map_err(|e| invalid_rule(&trimmed, &e))?;
        let rule = Self(number);

        if rule.neighborhood_width() > MAX_NEIGHBORHOOD_WIDTH {
            return Err(invalid_rule(
                &trimmed,
                &format!(
                    "needs a {}-cell neighborhood (max {MAX_NEIGHBORHOOD_WIDTH})",
                    rule.neighborhood_width()
                ),
            ));
        }

        Ok(rule)
    }
}

/// Output bit for every neighborhood pattern of a rule
///
/// Patterns are indexed by reading the neighborhood left to right as a
/// big-endian binary number, so index `k` holds bit `k` of the rule.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TransitionTable {
    neighborhood_width: usize,
    outputs: BitVec,
}

impl TransitionTable {
    /// Decode a rule number into its transition table
    ///
    /// The table has exactly `2^neighborhood_width` entries.
    ///
    /// # Errors
    ///
    /// Returns `InvalidRule` if the rule needs a neighborhood wider than
    /// `MAX_NEIGHBORHOOD_WIDTH`
    pub fn derive(rule: &Rule) -> Result<Self> {
        let neighborhood_width = rule.neighborhood_width();
        if neighborhood_width > MAX_NEIGHBORHOOD_WIDTH {
            return Err(invalid_rule(
                rule,
                &format!(
                    "needs a {neighborhood_width}-cell neighborhood (max {MAX_NEIGHBORHOOD_WIDTH})"
                ),
            ));
        }

        let entries = 1_u64 << neighborhood_width;
        let outputs = (0..entries).map(|k| rule.number().bit(k)).collect();

        Ok(Self {
            neighborhood_width,
            outputs,
        })
    }

    /// Number of cells in each pattern
    pub const fn neighborhood_width(&self) -> usize {
        self.neighborhood_width
    }

    /// Number of patterns in the table
    pub fn len(&self) -> usize {
        self.outputs.len()
    }

    /// Always false; every table holds at least the eight 3-cell patterns
    pub fn is_empty(&self) -> bool {
        self.outputs.is_empty()
    }

    /// Output for a pattern given as its big-endian index
    pub fn output(&self, pattern: usize) -> bool {
        debug_assert!(pattern < self.outputs.len(), "pattern outside table");
        self.outputs.get(pattern).as_deref() == Some(&true)
    }

    /// Output for a pattern given as a bit string such as `"110"`
    ///
    /// Returns `None` if the key has the wrong length or contains anything
    /// other than '0' and '1'.
    pub fn lookup(&self, key: &str) -> Option<bool> {
        if key.len() != self.neighborhood_width {
            return None;
        }
        let pattern = key.bytes().try_fold(0_usize, |acc, b| match b {
            b'0' => Some(acc << 1),
            b'1' => Some((acc << 1) | 1),
            _ => None,
        })?;
        Some(self.output(pattern))
    }

    /// All `(pattern, output)` pairs in ascending pattern order
    pub fn entries(&self) -> impl Iterator<Item = (String, bool)> + '_ {
        let width = self.neighborhood_width;
        self.outputs
            .iter()
            .by_vals()
            .enumerate()
            .map(move |(pattern, output)| (format!("{pattern:0width$b}"), output))
    }
}
