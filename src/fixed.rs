use crate::iter::{Bits, IterOnes, IterZeros};
use crate::words::{self, DUMP_LINE_LEN, EMPTY_WORD, FULL_WORD, WORD_BITS, Word};
use alloc::string::String;
use core::array::from_fn;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{BitAnd, BitAndAssign, BitOr, BitOrAssign, BitXor, BitXorAssign, Not, Range};

#[allow(clippy::no_effect)]
#[allow(clippy::unnecessary_operation)]
pub(crate) const fn compile_assert_word_count(word_count: usize) {
    // This will cause a compile-time error if word_count == 0
    ["WORD_COUNT must be greater than zero."][(word_count == 0) as usize];
}

pub(crate) fn runtime_assert_word_count(word_count: usize) {
    assert_ne!(word_count, 0, "WORD_COUNT must be greater than zero.");
}

/// A bit vector of exactly `WORD_COUNT` words stored inline.
///
/// Holds `WORD_COUNT * 32` bits. There is no resize and no separate
/// allocation; the value owns its words directly and can live on the stack
/// or in a `static`.
///
/// # Examples
/// ```
/// use bitstring::FixedBitVector;
///
/// let mut bv = FixedBitVector::<2>::new();
/// assert_eq!(bv.bit_capacity(), 64);
/// bv.set(40);
/// assert_eq!(bv.first_set_bit(), Some(40));
/// assert_eq!(bv.leading_zero_count(), 23);
/// ```
#[derive(PartialEq, Eq, Hash, Clone, Copy)]
pub struct FixedBitVector<const WORD_COUNT: usize>(pub(crate) [Word; WORD_COUNT]);

impl<const WORD_COUNT: usize> FixedBitVector<WORD_COUNT> {
    /// Creates a new bit vector with all bits unset.
    ///
    /// # Panics
    /// Panics if `WORD_COUNT == 0`.
    pub fn new() -> Self {
        runtime_assert_word_count(WORD_COUNT);
        Self([EMPTY_WORD; WORD_COUNT])
    }

    /// Creates a new `const` bit vector with all bits unset.
    ///
    /// Equivalent to [`new`], but callable in const contexts. A zero
    /// `WORD_COUNT` fails to compile there.
    ///
    /// # Examples
    /// ```
    /// use bitstring::FixedBitVector;
    ///
    /// const EMPTY: FixedBitVector<4> = FixedBitVector::const_empty();
    /// assert_eq!(EMPTY.popcount(), 0);
    /// ```
    ///
    /// [`new`]: FixedBitVector::new
    pub const fn const_empty() -> Self {
        compile_assert_word_count(WORD_COUNT);
        Self([EMPTY_WORD; WORD_COUNT])
    }

    /// Creates a new `const` bit vector with all bits set.
    ///
    /// # Examples
    /// ```
    /// use bitstring::FixedBitVector;
    ///
    /// const FULL: FixedBitVector<1> = FixedBitVector::const_full();
    /// assert_eq!(FULL.popcount(), 32);
    /// ```
    pub const fn const_full() -> Self {
        compile_assert_word_count(WORD_COUNT);
        Self([FULL_WORD; WORD_COUNT])
    }

    /// Creates a new bit vector with all bits set.
    ///
    /// # Panics
    /// Panics if `WORD_COUNT == 0`.
    #[inline]
    pub fn with_all_set() -> Self {
        runtime_assert_word_count(WORD_COUNT);
        Self([FULL_WORD; WORD_COUNT])
    }

    /// Wraps existing storage words. Bit `b` is read from
    /// `words[b / 32] >> (b % 32)`.
    ///
    /// # Panics
    /// Panics if `WORD_COUNT == 0`.
    pub fn from_words(words: [Word; WORD_COUNT]) -> Self {
        runtime_assert_word_count(WORD_COUNT);
        Self(words)
    }

    /// The storage words, lowest bits first.
    #[inline]
    pub const fn words(&self) -> &[Word; WORD_COUNT] {
        &self.0
    }

    /// Number of storage words.
    #[inline]
    pub const fn capacity(&self) -> usize {
        WORD_COUNT
    }

    /// Number of addressable bits.
    #[inline]
    pub const fn bit_capacity(&self) -> usize {
        WORD_COUNT * WORD_BITS
    }

    /// Size of a buffer holding the [`Display`] rendering plus a terminator.
    #[inline]
    pub const fn to_string_buffer_size(&self) -> usize {
        self.bit_capacity() + 1
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `bit >= bit_capacity()`.
    #[inline]
    pub fn set(&mut self, bit: usize) {
        words::set(&mut self.0, bit);
    }

    /// Unsets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `bit >= bit_capacity()`.
    #[inline]
    pub fn clear(&mut self, bit: usize) {
        words::clear(&mut self.0, bit);
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `bit >= bit_capacity()`.
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        words::get(&self.0, bit)
    }

    /// Flips the bit at the given index and returns its previous value.
    ///
    /// # Examples
    /// ```
    /// use bitstring::FixedBitVector;
    ///
    /// let mut bv = FixedBitVector::<1>::new();
    /// assert!(!bv.toggle(4));
    /// assert!(bv.toggle(4));
    /// ```
    #[inline]
    pub fn toggle(&mut self, bit: usize) -> bool {
        words::toggle(&mut self.0, bit)
    }

    /// Sets or unsets the bit at the given index.
    #[inline]
    pub fn assign(&mut self, bit: usize, value: bool) {
        if value {
            self.set(bit)
        } else {
            self.clear(bit)
        }
    }

    /// Sets every bit if `value`, otherwise unsets every bit.
    #[inline]
    pub fn set_all(&mut self, value: bool) {
        words::fill(&mut self.0, value);
    }

    /// Sets all bits in the given range.
    ///
    /// # Panics
    /// Panics if `range.end > bit_capacity()`.
    ///
    /// # Examples
    /// ```
    /// use bitstring::FixedBitVector;
    ///
    /// let mut bv = FixedBitVector::<2>::new();
    /// bv.set_range(30..34);
    /// assert_eq!(bv.popcount(), 4);
    /// assert_eq!(bv.first_set_bit(), Some(30));
    /// ```
    pub fn set_range(&mut self, range: Range<usize>) {
        words::fill_range(&mut self.0, range, true);
    }

    /// Unsets all bits in the given range.
    ///
    /// # Panics
    /// Panics if `range.end > bit_capacity()`.
    pub fn clear_range(&mut self, range: Range<usize>) {
        words::fill_range(&mut self.0, range, false);
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn popcount(&self) -> usize {
        words::popcount(&self.0)
    }

    /// Returns the index of the lowest set bit, or `None` if no bit is set.
    pub fn first_set_bit(&self) -> Option<usize> {
        words::first_set_bit(&self.0)
    }

    /// Returns the index of the lowest unset bit, or `None` if every bit is
    /// set.
    pub fn first_unset_bit(&self) -> Option<usize> {
        words::first_unset_bit(&self.0)
    }

    /// Counts unset bits below the lowest set bit. Returns
    /// [`bit_capacity`](Self::bit_capacity) when no bit is set.
    pub fn trailing_zero_count(&self) -> usize {
        words::trailing_zero_count(&self.0)
    }

    /// Counts unset bits above the highest set bit. Returns
    /// [`bit_capacity`](Self::bit_capacity) when no bit is set.
    pub fn leading_zero_count(&self) -> usize {
        words::leading_zero_count(&self.0)
    }

    /// Returns the first set bit at or after `from`.
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        words::next_matching_bit(&self.0, from, true)
    }

    /// Returns the first unset bit at or after `from`.
    pub fn next_unset_bit(&self, from: usize) -> Option<usize> {
        words::next_matching_bit(&self.0, from, false)
    }

    /// Returns `true` if every bit is set.
    pub fn is_all_set(&self) -> bool {
        self.0.iter().all(|w| *w == FULL_WORD)
    }

    /// Returns `true` if no bit is set.
    pub fn is_all_clear(&self) -> bool {
        self.0.iter().all(|w| *w == EMPTY_WORD)
    }

    /// Returns an iterator over all bits as `bool`, from bit 0 upwards.
    #[inline]
    pub fn iter(&self) -> Bits<'_> {
        Bits::new(&self.0)
    }

    /// Returns an iterator over the indices of all set bits, ascending.
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes::new(&self.0)
    }

    /// Returns an iterator over the indices of all unset bits, ascending.
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_> {
        IterZeros::new(&self.0)
    }

    /// Renders storage word `line` as a labeled, byte-grouped binary string.
    ///
    /// # Panics
    /// Panics if `line >= capacity()`.
    ///
    /// # Examples
    /// ```
    /// use bitstring::FixedBitVector;
    ///
    /// let mut bv = FixedBitVector::<2>::new();
    /// bv.set(32);
    /// assert_eq!(bv.dump_line(1), "00000001: 00000000 00000000 00000000 00000001");
    /// ```
    pub fn dump_line(&self, line: usize) -> String {
        let mut out = String::with_capacity(DUMP_LINE_LEN);
        let _ = words::write_dump_line(&self.0, line, &mut out);
        out
    }

    /// Returns an iterator over the dump lines of every word.
    pub fn dump(&self) -> impl Iterator<Item = String> + '_ {
        (0..WORD_COUNT).map(move |line| self.dump_line(line))
    }

    /// Returns a new bit vector representing `self | other`.
    #[inline]
    pub fn bit_or(&self, other: &Self) -> Self {
        Self(from_fn(|i| self.0[i] | other.0[i]))
    }

    /// Performs an in-place bitwise OR with another bit vector.
    #[inline]
    pub fn in_place_bit_or(&mut self, other: &Self) {
        for (word, other_word) in self.0.iter_mut().zip(other.0.iter()) {
            *word |= other_word
        }
    }

    /// Returns a new bit vector representing `self & other`.
    #[inline]
    pub fn bit_and(&self, other: &Self) -> Self {
        Self(from_fn(|i| self.0[i] & other.0[i]))
    }

    /// Performs an in-place bitwise AND with another bit vector.
    #[inline]
    pub fn in_place_bit_and(&mut self, other: &Self) {
        for (word, other_word) in self.0.iter_mut().zip(other.0.iter()) {
            *word &= other_word
        }
    }

    /// Returns a new bit vector representing `self ^ other`.
    #[inline]
    pub fn bit_xor(&self, other: &Self) -> Self {
        Self(from_fn(|i| self.0[i] ^ other.0[i]))
    }

    /// Performs an in-place bitwise XOR with another bit vector.
    #[inline]
    pub fn in_place_bit_xor(&mut self, other: &Self) {
        for (word, other_word) in self.0.iter_mut().zip(other.0.iter()) {
            *word ^= other_word
        }
    }

    /// Returns a new bit vector with every bit inverted.
    #[inline]
    pub fn bit_not(&self) -> Self {
        Self(from_fn(|i| !self.0[i]))
    }

    /// Inverts every bit in place.
    #[inline]
    pub fn in_place_bit_not(&mut self) {
        for word in &mut self.0 {
            *word = !*word;
        }
    }
}

impl<const WORD_COUNT: usize> Default for FixedBitVector<WORD_COUNT> {
    fn default() -> Self {
        Self::new()
    }
}

impl<'a, const WORD_COUNT: usize> IntoIterator for &'a FixedBitVector<WORD_COUNT> {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders one `'0'`/`'1'` per bit, bit 0 first.
impl<const WORD_COUNT: usize> Display for FixedBitVector<WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        words::write_bits(&self.0, f)
    }
}

impl<const WORD_COUNT: usize> Debug for FixedBitVector<WORD_COUNT> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "FixedBitVector<{WORD_COUNT}> ")?;
        words::debug_dump(&self.0, f)
    }
}

impl<const WORD_COUNT: usize> BitAnd for FixedBitVector<WORD_COUNT> {
    type Output = Self;

    fn bitand(self, rhs: Self) -> Self::Output {
        self.bit_and(&rhs)
    }
}

impl<const WORD_COUNT: usize> BitAndAssign for FixedBitVector<WORD_COUNT> {
    fn bitand_assign(&mut self, rhs: Self) {
        self.in_place_bit_and(&rhs)
    }
}

impl<const WORD_COUNT: usize> BitOr for FixedBitVector<WORD_COUNT> {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self::Output {
        self.bit_or(&rhs)
    }
}

impl<const WORD_COUNT: usize> BitOrAssign for FixedBitVector<WORD_COUNT> {
    fn bitor_assign(&mut self, rhs: Self) {
        self.in_place_bit_or(&rhs)
    }
}

impl<const WORD_COUNT: usize> BitXor for FixedBitVector<WORD_COUNT> {
    type Output = Self;

    fn bitxor(self, rhs: Self) -> Self::Output {
        self.bit_xor(&rhs)
    }
}

impl<const WORD_COUNT: usize> BitXorAssign for FixedBitVector<WORD_COUNT> {
    fn bitxor_assign(&mut self, rhs: Self) {
        self.in_place_bit_xor(&rhs)
    }
}

impl<const WORD_COUNT: usize> Not for FixedBitVector<WORD_COUNT> {
    type Output = Self;

    fn not(self) -> Self::Output {
        self.bit_not()
    }
}
