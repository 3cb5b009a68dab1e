use crate::words::{WORD_BITS, Word};
use core::iter::FusedIterator;

/// Iterator over all bits as `bool` values, starting from bit 0.
///
/// Returned by [`BitVector::iter()`](crate::BitVector::iter) and
/// [`FixedBitVector::iter()`](crate::FixedBitVector::iter).
#[derive(Clone, Copy)]
pub struct Bits<'a> {
    words: &'a [Word],
    word_idx: usize,
    offset: usize,
}

impl<'a> Bits<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            word_idx: 0,
            offset: 0,
        }
    }
}

impl Iterator for Bits<'_> {
    type Item = bool;

    fn next(&mut self) -> Option<Self::Item> {
        let word = *self.words.get(self.word_idx)?;
        let bit = (word >> self.offset) & 1 != 0;
        self.offset += 1;
        if self.offset == WORD_BITS {
            self.offset = 0;
            self.word_idx += 1;
        }
        Some(bit)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = (self.words.len() * WORD_BITS)
            .saturating_sub(self.word_idx * WORD_BITS + self.offset);
        (remaining, Some(remaining))
    }
}

impl ExactSizeIterator for Bits<'_> {}

impl FusedIterator for Bits<'_> {}

/// Iterator over the indices of set bits, in ascending order.
///
/// Runs in O(k + w) overall, where k is the number of set bits and w the
/// number of words.
#[derive(Clone, Copy)]
pub struct IterOnes<'a> {
    inner: Scan<'a, false>,
}

impl<'a> IterOnes<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            inner: Scan::new(words),
        }
    }
}

impl Iterator for IterOnes<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl FusedIterator for IterOnes<'_> {}

/// Iterator over the indices of unset bits, in ascending order.
#[derive(Clone, Copy)]
pub struct IterZeros<'a> {
    inner: Scan<'a, true>,
}

impl<'a> IterZeros<'a> {
    pub(crate) fn new(words: &'a [Word]) -> Self {
        Self {
            inner: Scan::new(words),
        }
    }
}

impl Iterator for IterZeros<'_> {
    type Item = usize;

    fn next(&mut self) -> Option<Self::Item> {
        self.inner.next()
    }
}

impl FusedIterator for IterZeros<'_> {}

/// Word-at-a-time scan yielding set bit indices, of the inverted words when
/// `INVERT` is true.
#[derive(Clone, Copy)]
struct Scan<'a, const INVERT: bool> {
    words: &'a [Word],
    word_idx: usize,
    current: Word,
}

impl<'a, const INVERT: bool> Scan<'a, INVERT> {
    fn new(words: &'a [Word]) -> Self {
        Self {
            words,
            word_idx: 0,
            current: words.first().map_or(0, |w| Self::load(*w)),
        }
    }

    #[inline]
    fn load(word: Word) -> Word {
        if INVERT { !word } else { word }
    }

    fn next(&mut self) -> Option<usize> {
        while self.word_idx < self.words.len() {
            if self.current != 0 {
                let tz = self.current.trailing_zeros() as usize;
                self.current &= self.current - 1; // unset LSB
                return Some(self.word_idx * WORD_BITS + tz);
            }
            self.word_idx += 1;
            self.current = self.words.get(self.word_idx).map_or(0, |w| Self::load(*w));
        }
        None
    }
}
