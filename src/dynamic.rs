use crate::error::{Error, Result};
use crate::fixed::FixedBitVector;
use crate::iter::{Bits, IterOnes, IterZeros};
use crate::words::{self, DUMP_LINE_LEN, EMPTY_WORD, FULL_WORD, WORD_BITS, Word};
use alloc::string::String;
use alloc::vec::Vec;
use core::cmp::Ordering;
use core::fmt::{self, Debug, Display, Formatter};
use core::ops::{BitAndAssign, BitOrAssign, BitXorAssign, Range};
use tracing::{debug, trace, warn};

/// A heap-allocated, resizable bit vector.
///
/// Capacity is measured in 32-bit storage words; the vector addresses
/// `capacity() * 32` bits. Bits are packed little-endian within each word:
/// bit `b` is bit `b % 32` of word `b / 32`.
///
/// The storage is released when the vector is dropped.
///
/// # Examples
/// ```
/// use bitstring::BitVector;
///
/// let mut bv = BitVector::new(4)?;
/// assert_eq!(bv.bit_capacity(), 128);
/// bv.set(23);
/// assert!(bv.get(23));
///
/// bv.set_all(true);
/// assert_eq!(bv.popcount(), 128);
/// for bit in 0..4 {
///     bv.clear(bit);
/// }
/// assert_eq!(bv.first_set_bit(), Some(4));
/// assert_eq!(bv.first_unset_bit(), Some(0));
/// assert_eq!(bv.trailing_zero_count(), 4);
/// # Ok::<(), bitstring::Error>(())
/// ```
#[derive(PartialEq, Eq, Hash, Clone)]
pub struct BitVector {
    /// Exclusively owned storage; its length is the capacity in words.
    words: Vec<Word>,
}

/// Grows `words` to `target` zeroed words without aborting on allocation
/// failure. `words` is untouched on error.
fn grow_zeroed(words: &mut Vec<Word>, target: usize) -> Result<()> {
    let failed = || {
        warn!(words = target, "bit vector allocation failed");
        Error::AllocationFailed { words: target }
    };
    // every bit index must stay representable
    if target.checked_mul(WORD_BITS).is_none() {
        return Err(failed());
    }
    words
        .try_reserve_exact(target - words.len())
        .map_err(|_| failed())?;
    words.resize(target, EMPTY_WORD);
    Ok(())
}

impl BitVector {
    /// Creates a bit vector of `capacity` words with all bits unset.
    ///
    /// # Errors
    /// Returns [`Error::AllocationFailed`] if the storage cannot be
    /// allocated.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub fn new(capacity: usize) -> Result<Self> {
        assert_ne!(capacity, 0, "capacity must be greater than zero.");
        let mut words = Vec::new();
        grow_zeroed(&mut words, capacity)?;
        trace!(capacity, "created bit vector");
        Ok(Self { words })
    }

    /// Creates a bit vector of `capacity` words with all bits set.
    ///
    /// # Errors
    /// Returns [`Error::AllocationFailed`] if the storage cannot be
    /// allocated.
    ///
    /// # Panics
    /// Panics if `capacity == 0`.
    pub fn with_all_set(capacity: usize) -> Result<Self> {
        let mut bv = Self::new(capacity)?;
        bv.set_all(true);
        Ok(bv)
    }

    /// Takes ownership of existing storage words. Bit `b` is read from
    /// `words[b / 32] >> (b % 32)`.
    pub fn from_words(words: Vec<Word>) -> Self {
        Self { words }
    }

    /// The storage words, lowest bits first.
    #[inline]
    pub fn words(&self) -> &[Word] {
        &self.words
    }

    /// Changes the capacity to `capacity` words.
    ///
    /// Bits below `min(old, new) * 32` keep their values. Words added by
    /// growing are zeroed; words removed by shrinking are dropped. Resizing to
    /// the current capacity does nothing.
    ///
    /// # Errors
    /// Returns [`Error::AllocationFailed`] if growing cannot allocate. The
    /// vector is left exactly as it was.
    ///
    /// # Examples
    /// ```
    /// use bitstring::BitVector;
    ///
    /// let mut bv = BitVector::with_all_set(2)?;
    /// bv.resize(4)?;
    /// assert_eq!(bv.popcount(), 64);
    /// assert_eq!(bv.first_unset_bit(), Some(64));
    ///
    /// bv.resize(1)?;
    /// assert_eq!(bv.popcount(), 32);
    /// # Ok::<(), bitstring::Error>(())
    /// ```
    pub fn resize(&mut self, capacity: usize) -> Result<()> {
        let old = self.words.len();
        match capacity.cmp(&old) {
            Ordering::Equal => return Ok(()),
            Ordering::Greater => grow_zeroed(&mut self.words, capacity)?,
            Ordering::Less => {
                self.words.truncate(capacity);
                self.words.shrink_to_fit();
            }
        }
        debug!(old, new = capacity, "resized bit vector");
        Ok(())
    }

    /// Number of storage words.
    #[inline]
    pub fn capacity(&self) -> usize {
        self.words.len()
    }

    /// Number of addressable bits.
    #[inline]
    pub fn bit_capacity(&self) -> usize {
        self.words.len() * WORD_BITS
    }

    /// Size of a buffer holding the [`Display`] rendering plus a terminator.
    #[inline]
    pub fn to_string_buffer_size(&self) -> usize {
        self.bit_capacity() + 1
    }

    /// Sets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `bit >= bit_capacity()`.
    #[inline]
    pub fn set(&mut self, bit: usize) {
        words::set(&mut self.words, bit);
    }

    /// Unsets the bit at the given index.
    ///
    /// # Panics
    /// Panics if `bit >= bit_capacity()`.
    #[inline]
    pub fn clear(&mut self, bit: usize) {
        words::clear(&mut self.words, bit);
    }

    /// Returns `true` if the bit at the given index is set.
    ///
    /// # Panics
    /// Panics if `bit >= bit_capacity()`.
    #[inline]
    pub fn get(&self, bit: usize) -> bool {
        words::get(&self.words, bit)
    }

    /// Flips the bit at the given index and returns its previous value.
    #[inline]
    pub fn toggle(&mut self, bit: usize) -> bool {
        words::toggle(&mut self.words, bit)
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
        words::fill(&mut self.words, value);
    }

    /// Sets all bits in the given range.
    ///
    /// # Panics
    /// Panics if `range.end > bit_capacity()`.
    pub fn set_range(&mut self, range: Range<usize>) {
        words::fill_range(&mut self.words, range, true);
    }

    /// Unsets all bits in the given range.
    ///
    /// # Panics
    /// Panics if `range.end > bit_capacity()`.
    pub fn clear_range(&mut self, range: Range<usize>) {
        words::fill_range(&mut self.words, range, false);
    }

    /// Returns the number of set bits.
    #[inline]
    pub fn popcount(&self) -> usize {
        words::popcount(&self.words)
    }

    /// Returns the index of the lowest set bit, or `None` if no bit is set.
    pub fn first_set_bit(&self) -> Option<usize> {
        words::first_set_bit(&self.words)
    }

    /// Returns the index of the lowest unset bit, or `None` if every bit is
    /// set.
    pub fn first_unset_bit(&self) -> Option<usize> {
        words::first_unset_bit(&self.words)
    }

    /// Counts unset bits below the lowest set bit. Returns
    /// [`bit_capacity`](Self::bit_capacity) when no bit is set.
    pub fn trailing_zero_count(&self) -> usize {
        words::trailing_zero_count(&self.words)
    }

    /// Counts unset bits above the highest set bit. Returns
    /// [`bit_capacity`](Self::bit_capacity) when no bit is set.
    pub fn leading_zero_count(&self) -> usize {
        words::leading_zero_count(&self.words)
    }

    /// Returns the first set bit at or after `from`.
    ///
    /// # Examples
    /// ```
    /// use bitstring::BitVector;
    ///
    /// let mut bv = BitVector::new(2)?;
    /// bv.set(3);
    /// bv.set(40);
    /// assert_eq!(bv.next_set_bit(0), Some(3));
    /// assert_eq!(bv.next_set_bit(4), Some(40));
    /// assert_eq!(bv.next_set_bit(41), None);
    /// # Ok::<(), bitstring::Error>(())
    /// ```
    pub fn next_set_bit(&self, from: usize) -> Option<usize> {
        words::next_matching_bit(&self.words, from, true)
    }

    /// Returns the first unset bit at or after `from`.
    pub fn next_unset_bit(&self, from: usize) -> Option<usize> {
        words::next_matching_bit(&self.words, from, false)
    }

    /// Returns `true` if every bit is set.
    pub fn is_all_set(&self) -> bool {
        self.words.iter().all(|w| *w == FULL_WORD)
    }

    /// Returns `true` if no bit is set.
    pub fn is_all_clear(&self) -> bool {
        self.words.iter().all(|w| *w == EMPTY_WORD)
    }

    /// Returns an iterator over all bits as `bool`, from bit 0 upwards.
    #[inline]
    pub fn iter(&self) -> Bits<'_> {
        Bits::new(&self.words)
    }

    /// Returns an iterator over the indices of all set bits, ascending.
    #[inline]
    pub fn iter_ones(&self) -> IterOnes<'_> {
        IterOnes::new(&self.words)
    }

    /// Returns an iterator over the indices of all unset bits, ascending.
    #[inline]
    pub fn iter_zeros(&self) -> IterZeros<'_> {
        IterZeros::new(&self.words)
    }

    /// Renders storage word `line` as a labeled, byte-grouped binary string:
    /// the word index in hex, then its four bytes most significant bit first.
    ///
    /// # Panics
    /// Panics if `line >= capacity()`.
    pub fn dump_line(&self, line: usize) -> String {
        let mut out = String::with_capacity(DUMP_LINE_LEN);
        let _ = words::write_dump_line(&self.words, line, &mut out);
        out
    }

    /// Returns an iterator over the dump lines of every word.
    pub fn dump(&self) -> impl Iterator<Item = String> + '_ {
        (0..self.words.len()).map(move |line| self.dump_line(line))
    }

    fn assert_same_capacity(&self, other: &Self) {
        assert_eq!(
            self.words.len(),
            other.words.len(),
            "bit vectors must have the same capacity"
        );
    }
}

impl<const WORD_COUNT: usize> From<FixedBitVector<WORD_COUNT>> for BitVector {
    fn from(fixed: FixedBitVector<WORD_COUNT>) -> Self {
        Self::from_words(fixed.0.to_vec())
    }
}

impl<'a> IntoIterator for &'a BitVector {
    type Item = bool;
    type IntoIter = Bits<'a>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

/// Renders one `'0'`/`'1'` per bit, bit 0 first.
impl Display for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        words::write_bits(&self.words, f)
    }
}

impl Debug for BitVector {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "BitVector ")?;
        words::debug_dump(&self.words, f)
    }
}

/// # Panics
/// Panics if the capacities differ.
impl BitAndAssign<&BitVector> for BitVector {
    fn bitand_assign(&mut self, rhs: &BitVector) {
        self.assert_same_capacity(rhs);
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word &= other;
        }
    }
}

/// # Panics
/// Panics if the capacities differ.
impl BitOrAssign<&BitVector> for BitVector {
    fn bitor_assign(&mut self, rhs: &BitVector) {
        self.assert_same_capacity(rhs);
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word |= other;
        }
    }
}

/// # Panics
/// Panics if the capacities differ.
impl BitXorAssign<&BitVector> for BitVector {
    fn bitxor_assign(&mut self, rhs: &BitVector) {
        self.assert_same_capacity(rhs);
        for (word, other) in self.words.iter_mut().zip(&rhs.words) {
            *word ^= other;
        }
    }
}
