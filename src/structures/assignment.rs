/*!
A (total) assignment of truth values to variables, doubling as a binary counter.

The canonical representation of an assignment is a vector of booleans where index 0 is the *least* significant bit of the counter.
[increment](Assignment::increment) adds one with carry, and reports when the counter wraps back to all-zero --- so starting from [zeroed](Assignment::zeroed) and incrementing until a wrap visits every assignment of *n* variables exactly once, 2^*n* assignments in all.

# Variable order

Assignments print, and are read by variables, high index to low.
That is, variable `a` reads the *last* bit of the assignment, variable `b` the bit before, and so on --- the reversal which keeps the printed column for each variable aligned with the value evaluation uses.
[value_of_variable](Assignment::value_of_variable) owns this mapping; nothing else in the library reindexes.

```rust
# use ttable::structures::assignment::Assignment;
let mut assignment = Assignment::zeroed(2);

assert!(!assignment.increment()); // 0 1
assert!(!assignment.increment()); // 1 0
assert_eq!(assignment.value_of_variable(0), Some(true));
assert_eq!(assignment.value_of_variable(1), Some(false));
assert_eq!(format!("{assignment}"), "1 0");

assert!(!assignment.increment()); // 1 1
assert!(assignment.increment()); // 0 0, wrapped
```
*/

use crate::structures::token::Variable;

/// A total assignment of truth values to some contiguous count of variables.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Assignment {
    bits: Vec<bool>,
}

impl Assignment {
    /// The all-false assignment over the given count of variables.
    pub fn zeroed(variable_count: usize) -> Self {
        Assignment {
            bits: vec![false; variable_count],
        }
    }

    /// An assignment with the given bits, index 0 least significant.
    pub fn from_bits(bits: Vec<bool>) -> Self {
        Assignment { bits }
    }

    /// A count of the variables the assignment covers.
    pub fn variable_count(&self) -> usize {
        self.bits.len()
    }

    /// The bit at the given counter index, if within the assignment.
    pub fn value_of(&self, index: usize) -> Option<bool> {
        self.bits.get(index).copied()
    }

    /// The value of the given variable, reading variables high bit to low.
    ///
    /// Variable 0 (`a`) maps to the highest counter index, and so on down.
    pub fn value_of_variable(&self, variable: Variable) -> Option<bool> {
        let reversed = self
            .bits
            .len()
            .checked_sub(1 + variable as usize)?;
        self.bits.get(reversed).copied()
    }

    /// Advances the counter by one, with carry, returning true on a wrap to all-zero.
    pub fn increment(&mut self) -> bool {
        for bit in self.bits.iter_mut() {
            if !*bit {
                *bit = true;
                return false;
            }
            *bit = false;
        }
        true
    }

    /// The bits of the assignment, high counter index to low --- printed order.
    pub fn printed_bits(&self) -> impl Iterator<Item = bool> + '_ {
        self.bits.iter().rev().copied()
    }
}

impl std::fmt::Display for Assignment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for (index, bit) in self.printed_bits().enumerate() {
            if index > 0 {
                write!(f, " ")?;
            }
            write!(f, "{}", bit as u8)?;
        }
        Ok(())
    }
}
