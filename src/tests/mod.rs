use super::*;
use crate::words::{DUMP_LINE_LEN, ones_mask, word_for_bit};

mod fixed;

#[test]
fn test_words_for_bits() {
    assert_eq!(words_for_bits(0), 0);
    assert_eq!(words_for_bits(1), 1);
    assert_eq!(words_for_bits(31), 1);
    assert_eq!(words_for_bits(32), 1);
    assert_eq!(words_for_bits(33), 2);
    assert_eq!(words_for_bits(128), 4);
    assert_eq!(words_for_bits(129), 5);
}

#[test]
fn test_word_for_bit() {
    assert_eq!(word_for_bit(0), (0, 0));
    assert_eq!(word_for_bit(31), (0, 31));
    assert_eq!(word_for_bit(32), (1, 0));
    assert_eq!(word_for_bit(23), (0, 23));
    assert_eq!(word_for_bit(100), (3, 4));
}

#[test]
fn test_ones_mask() {
    assert_eq!(ones_mask(0, 1), 0b1);
    assert_eq!(ones_mask(0, 4), 0b1111);
    assert_eq!(ones_mask(2, 3), 0b11100);
    assert_eq!(ones_mask(28, 4), 0xf000_0000);
    assert_eq!(ones_mask(0, 31), 0x7fff_ffff);
    assert_eq!(ones_mask(0, 32), Word::MAX);
}

#[test]
fn test_dump_line_len() {
    let bv = FixedBitVector::<1>::with_all_set();
    assert_eq!(bv.dump_line(0).len(), DUMP_LINE_LEN);
    assert_eq!(
        bv.dump_line(0),
        "00000000: 11111111 11111111 11111111 11111111"
    );
}

#[test]
fn test_scenario_from_word_capacity() {
    let mut bv = BitVector::new(4).unwrap();
    assert_eq!(bv.bit_capacity(), 128);
    bv.set(23);
    assert!(bv.get(23));
    bv.set_all(true);
    assert_eq!(bv.popcount(), 128);
    for bit in 0..4 {
        bv.clear(bit);
    }
    assert_eq!(bv.first_set_bit(), Some(4));
    assert_eq!(bv.first_unset_bit(), Some(0));
    assert_eq!(bv.trailing_zero_count(), 4);

    let mut fixed = FixedBitVector::<4>::new();
    assert_eq!(fixed.bit_capacity(), 128);
    fixed.set(23);
    assert!(fixed.get(23));
    fixed.set_all(true);
    assert_eq!(fixed.popcount(), 128);
    fixed.clear_range(0..4);
    assert_eq!(fixed.first_set_bit(), Some(4));
    assert_eq!(fixed.first_unset_bit(), Some(0));
    assert_eq!(fixed.trailing_zero_count(), 4);

    assert_eq!(bv.words(), fixed.words());
}

#[test]
fn test_fixed_into_dynamic() {
    let mut fixed = FixedBitVector::<3>::new();
    fixed.set(0);
    fixed.set(95);
    let bv = BitVector::from(fixed);
    assert_eq!(bv.capacity(), 3);
    assert_eq!(bv.iter_ones().collect::<alloc::vec::Vec<_>>(), [0, 95]);
}

#[test]
fn test_error_display() {
    use alloc::string::ToString;

    let err = Error::AllocationFailed { words: 12 };
    assert_eq!(err.to_string(), "failed to allocate storage for 12 words");
}
