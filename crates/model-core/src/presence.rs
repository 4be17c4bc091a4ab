//! Presence bitmask.

use std::fmt;

/// Set of "field was explicitly assigned" flags, one bit per declared field.
///
/// A bit is set only by a builder setter or by reading the field from JSON;
/// a field left at its default value never has its bit set, which is what
/// distinguishes "absent" from "present with a zero value".
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct FieldSet(u64);

impl FieldSet {
    pub const EMPTY: FieldSet = FieldSet(0);

    /// Largest number of bits a field set can hold.
    pub const CAPACITY: u32 = u64::BITS;

    pub const fn from_bits(bits: u64) -> Self {
        FieldSet(bits)
    }

    pub const fn bits(self) -> u64 {
        self.0
    }

    #[inline]
    pub const fn contains(self, bit: u32) -> bool {
        self.0 & (1 << bit) != 0
    }

    #[must_use]
    #[inline]
    pub const fn with(self, bit: u32) -> Self {
        FieldSet(self.0 | (1 << bit))
    }

    #[must_use]
    #[inline]
    pub const fn without(self, bit: u32) -> Self {
        FieldSet(self.0 & !(1 << bit))
    }

    /// Sets or clears `bit`.
    #[must_use]
    pub const fn set(self, bit: u32, on: bool) -> Self {
        if on {
            self.with(bit)
        } else {
            self.without(bit)
        }
    }

    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }

    /// Number of bits set.
    pub const fn len(self) -> u32 {
        self.0.count_ones()
    }

    /// Set bits in ascending order.
    pub fn iter(self) -> impl Iterator<Item = u32> {
        (0..Self::CAPACITY).filter(move |&bit| self.contains(bit))
    }
}

impl fmt::Debug for FieldSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

const fn str_eq(a: &str, b: &str) -> bool {
    let (a, b) = (a.as_bytes(), b.as_bytes());
    if a.len() != b.len() {
        return false;
    }
    let mut i = 0;
    while i < a.len() {
        if a[i] != b[i] {
            return false;
        }
        i += 1;
    }
    true
}

/// Bit assigned to the field declared as `name`: its position in `names`
/// plus `offset`.
///
/// Evaluated in constant context by the [`resource!`](crate::resource)
/// macro, so an unknown name or a type with too many fields fails the build.
pub const fn field_bit(names: &[&str], name: &str, offset: u32) -> u32 {
    let mut i = 0;
    while i < names.len() {
        if str_eq(names[i], name) {
            let bit = offset + i as u32;
            assert!(bit < FieldSet::CAPACITY, "too many fields for a FieldSet");
            return bit;
        }
        i += 1;
    }
    panic!("field name is not declared")
}
