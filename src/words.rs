//! Bit algorithms over a slice of storage words.
//!
//! Both [`BitVector`](crate::BitVector) and
//! [`FixedBitVector`](crate::FixedBitVector) are thin facades over the
//! functions in this module. Bit `b` lives in word `b / WORD_BITS` at offset
//! `b % WORD_BITS`, with offset 0 being the least significant bit.

use core::fmt::{self, Write};
use core::ops::Range;

/// The storage granule for packed bits.
pub type Word = u32;

/// Number of bits in one [`Word`].
pub const WORD_BITS: usize = Word::BITS as usize;

/// Number of bytes in one [`Word`].
pub const BYTES_PER_WORD: usize = WORD_BITS / 8;

/// A word with every bit set.
pub(crate) const FULL_WORD: Word = Word::MAX;

/// A word with every bit unset.
pub(crate) const EMPTY_WORD: Word = 0;

/// Computes the number of words needed to store `bit_count` bits.
///
/// # Examples
/// ```
/// use bitstring::words_for_bits;
///
/// assert_eq!(words_for_bits(0), 0);
/// assert_eq!(words_for_bits(1), 1);
/// assert_eq!(words_for_bits(32), 1);
/// assert_eq!(words_for_bits(33), 2);
/// ```
pub const fn words_for_bits(bit_count: usize) -> usize {
    bit_count.div_ceil(WORD_BITS)
}

/// Maps a bit index to its `(word_index, offset)` pair.
#[inline]
pub(crate) const fn word_for_bit(bit: usize) -> (usize, usize) {
    (bit / WORD_BITS, bit % WORD_BITS)
}

/// Mask with `width` ones starting at `start`. `start + width <= WORD_BITS`.
pub(crate) const fn ones_mask(start: usize, width: usize) -> Word {
    if width >= WORD_BITS {
        FULL_WORD
    } else {
        ((1 << width) - 1) << start
    }
}

#[inline]
fn check_bit(words: &[Word], bit: usize) {
    #[cfg(feature = "bounds-check")]
    assert!(
        bit < words.len() * WORD_BITS,
        "Bit index {bit} out of bounds for {} bits",
        words.len() * WORD_BITS
    );
    #[cfg(not(feature = "bounds-check"))]
    let _ = (words, bit);
}

#[inline]
pub(crate) fn get(words: &[Word], bit: usize) -> bool {
    check_bit(words, bit);
    let (word, offset) = word_for_bit(bit);
    (words[word] >> offset) & 1 != 0
}

#[inline]
pub(crate) fn set(words: &mut [Word], bit: usize) {
    check_bit(words, bit);
    let (word, offset) = word_for_bit(bit);
    words[word] |= 1 << offset;
}

#[inline]
pub(crate) fn clear(words: &mut [Word], bit: usize) {
    check_bit(words, bit);
    let (word, offset) = word_for_bit(bit);
    words[word] &= !(1 << offset);
}

#[inline]
pub(crate) fn toggle(words: &mut [Word], bit: usize) -> bool {
    check_bit(words, bit);
    let (word, offset) = word_for_bit(bit);
    let previous = (words[word] >> offset) & 1 != 0;
    words[word] ^= 1 << offset;
    previous
}

#[inline]
pub(crate) fn fill(words: &mut [Word], value: bool) {
    words.fill(if value { FULL_WORD } else { EMPTY_WORD });
}

/// Sets (`value == true`) or clears every bit in `range`.
pub(crate) fn fill_range(words: &mut [Word], range: Range<usize>, value: bool) {
    let bit_capacity = words.len() * WORD_BITS;
    assert!(
        range.end <= bit_capacity,
        "Range end {} out of bounds for {bit_capacity} bits",
        range.end
    );
    if range.start >= range.end {
        return;
    }

    let (start_word, start_bit) = word_for_bit(range.start);
    let (end_word, end_bit) = word_for_bit(range.end - 1);

    let apply = |word: &mut Word, mask: Word| {
        if value {
            *word |= mask;
        } else {
            *word &= !mask;
        }
    };

    // all within one word
    if start_word == end_word {
        apply(&mut words[start_word], ones_mask(start_bit, end_bit - start_bit + 1));
        return;
    }

    apply(&mut words[start_word], FULL_WORD << start_bit);
    fill(&mut words[start_word + 1..end_word], value);
    apply(&mut words[end_word], ones_mask(0, end_bit + 1));
}

pub(crate) fn popcount(words: &[Word]) -> usize {
    words.iter().map(|w| w.count_ones() as usize).sum()
}

pub(crate) fn first_set_bit(words: &[Word]) -> Option<usize> {
    words
        .iter()
        .position(|w| *w != EMPTY_WORD)
        .map(|i| i * WORD_BITS + words[i].trailing_zeros() as usize)
}

pub(crate) fn first_unset_bit(words: &[Word]) -> Option<usize> {
    words
        .iter()
        .position(|w| *w != FULL_WORD)
        .map(|i| i * WORD_BITS + (!words[i]).trailing_zeros() as usize)
}

/// Zero words contribute `WORD_BITS` each; the first non-zero word ends the
/// scan.
pub(crate) fn trailing_zero_count(words: &[Word]) -> usize {
    let mut count = 0;
    for word in words {
        if *word != EMPTY_WORD {
            return count + word.trailing_zeros() as usize;
        }
        count += WORD_BITS;
    }
    count
}

/// Same as [`trailing_zero_count`] but scanning from the last word down.
pub(crate) fn leading_zero_count(words: &[Word]) -> usize {
    let mut count = 0;
    for word in words.iter().rev() {
        if *word != EMPTY_WORD {
            return count + word.leading_zeros() as usize;
        }
        count += WORD_BITS;
    }
    count
}

/// First index `>= from` whose bit equals `value`.
pub(crate) fn next_matching_bit(words: &[Word], from: usize, value: bool) -> Option<usize> {
    let (mut word_idx, offset) = word_for_bit(from);
    if word_idx >= words.len() {
        return None;
    }
    let load = |w: Word| if value { w } else { !w };

    // drop bits below `from` in the first word
    let mut current = load(words[word_idx]) & (FULL_WORD << offset);
    loop {
        if current != 0 {
            return Some(word_idx * WORD_BITS + current.trailing_zeros() as usize);
        }
        word_idx += 1;
        current = load(*words.get(word_idx)?);
    }
}

pub(crate) fn write_bits(words: &[Word], f: &mut impl Write) -> fmt::Result {
    for bit in 0..words.len() * WORD_BITS {
        f.write_char(if get(words, bit) { '1' } else { '0' })?;
    }
    Ok(())
}

/// Writes one labeled dump line: the word index in hex, then the word's bytes
/// most significant bit first.
pub(crate) fn write_dump_line(words: &[Word], line: usize, f: &mut impl Write) -> fmt::Result {
    #[cfg(feature = "bounds-check")]
    assert!(
        line < words.len(),
        "Dump line {line} out of bounds for {} words",
        words.len()
    );
    let word = words[line];
    write!(f, "{line:08x}:")?;
    for byte in (0..BYTES_PER_WORD).rev() {
        write!(f, " {:08b}", (word >> (byte * 8)) & 0xff)?;
    }
    Ok(())
}

/// Length of a rendered dump line.
pub(crate) const DUMP_LINE_LEN: usize = 9 + BYTES_PER_WORD * 9;

/// Formats as a single dump line of the wrapped words.
struct DumpLine<'a>(&'a [Word], usize);

impl fmt::Display for DumpLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_dump_line(self.0, self.1, f)
    }
}

impl fmt::Debug for DumpLine<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(self, f)
    }
}

/// Writes every dump line of `words` as a debug list.
pub(crate) fn debug_dump(words: &[Word], f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_list()
        .entries((0..words.len()).map(|line| DumpLine(words, line)))
        .finish()
}
