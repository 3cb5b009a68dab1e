use super::*;
use alloc::string::ToString;
use alloc::vec::Vec;
use alloc::{format, vec};

#[test]
fn test_new() {
    macro_rules! test_new_by_word_count {
        ($($word_count:expr),+ $(,)?) => {
            $(
                {
                    const WORD_COUNT: usize = $word_count;
                    let bv = FixedBitVector::<WORD_COUNT>::new();
                    assert_eq!(bv.capacity(), WORD_COUNT);
                    assert_eq!(bv.bit_capacity(), WORD_COUNT * 32);
                    assert_eq!(bv.to_string_buffer_size(), WORD_COUNT * 32 + 1);
                    assert_eq!(bv.popcount(), 0, "Failed for WORD_COUNT = {}", WORD_COUNT);
                    assert!(bv.iter().all(|bit| !bit));
                    assert_eq!(bv, FixedBitVector::<WORD_COUNT>::default());
                }
            )+
        };
    }

    test_new_by_word_count!(1, 2, 3, 4, 7, 16, 33, 64);
}

#[test]
fn test_with_all_set() {
    macro_rules! test_with_all_set_by_word_count {
        ($($word_count:expr),+ $(,)?) => {
            $(
                {
                    const WORD_COUNT: usize = $word_count;
                    let bv = FixedBitVector::<WORD_COUNT>::with_all_set();
                    assert_eq!(bv.popcount(), WORD_COUNT * 32, "Failed for WORD_COUNT = {}", WORD_COUNT);
                    assert!(bv.is_all_set());
                    assert_eq!(bv, FixedBitVector::<WORD_COUNT>::const_full());
                }
            )+
        };
    }

    test_with_all_set_by_word_count!(1, 2, 3, 16, 63);
}

#[test]
fn test_const_empty() {
    const EMPTY: FixedBitVector<3> = FixedBitVector::const_empty();
    assert_eq!(EMPTY.popcount(), 0);
    assert!(EMPTY.is_all_clear());
    assert_eq!(EMPTY.first_set_bit(), None);
}

#[test]
fn test_const_full() {
    const FULL: FixedBitVector<3> = FixedBitVector::const_full();
    assert_eq!(FULL.popcount(), 96);
    assert_eq!(FULL.first_unset_bit(), None);
}

#[test]
fn test_cover_compile_assert() {
    crate::fixed::compile_assert_word_count(4);
}

#[test]
#[should_panic(expected = "WORD_COUNT must be greater than zero.")]
fn test_new_zero_words() {
    let _ = FixedBitVector::<0>::new();
}

#[test]
#[should_panic(expected = "WORD_COUNT must be greater than zero.")]
fn test_with_all_set_zero_words() {
    let _ = FixedBitVector::<0>::with_all_set();
}

#[test]
fn test_from_words() {
    let bv = FixedBitVector::<2>::from_words([0b1010, 1 << 31]);
    assert_eq!(bv.iter_ones().collect::<Vec<_>>(), [1, 3, 63]);
    assert_eq!(bv.words(), &[0b1010, 1 << 31]);
}

#[test]
fn test_set_get_clear() {
    let mut bv = FixedBitVector::<3>::new();
    for bit in 0..bv.bit_capacity() {
        bv.set(bit);
        assert!(bv.get(bit), "Bit {} should be set", bit);
        assert_eq!(bv.popcount(), 1);
        bv.set(bit);
        assert_eq!(bv.popcount(), 1, "set must be idempotent");

        bv.clear(bit);
        assert!(!bv.get(bit), "Bit {} should be unset", bit);
        bv.clear(bit);
        assert_eq!(bv.popcount(), 0);
    }
}

#[test]
fn test_set_linear_popcount() {
    let mut bv = FixedBitVector::<4>::new();
    for bit in 0..bv.bit_capacity() {
        bv.set(bit);
        assert_eq!(bv.popcount(), bit + 1);
    }
    assert!(bv.is_all_set());
}

#[test]
fn test_set_even_and_odd() {
    let mut even = FixedBitVector::<2>::new();
    let mut odd = FixedBitVector::<2>::new();
    for bit in 0..64 {
        if bit % 2 == 0 {
            even.set(bit);
        } else {
            odd.set(bit);
        }
    }
    assert_eq!(even.popcount(), 32);
    assert_eq!(odd.popcount(), 32);
    assert_eq!(even.words(), &[0x5555_5555; 2]);
    assert_eq!(odd.words(), &[0xaaaa_aaaa; 2]);
    assert_eq!(even.first_unset_bit(), Some(1));
    assert_eq!(odd.first_set_bit(), Some(1));
    assert_eq!(even | odd, FixedBitVector::with_all_set());
    assert_eq!(even & odd, FixedBitVector::new());
    assert_eq!(!even, odd);
}

#[test]
fn test_toggle_and_assign() {
    let mut bv = FixedBitVector::<1>::new();
    assert!(!bv.toggle(5));
    assert!(bv.get(5));
    assert!(bv.toggle(5));
    assert!(!bv.get(5));

    bv.assign(9, true);
    assert!(bv.get(9));
    bv.assign(9, false);
    assert!(!bv.get(9));
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_set_out_of_bounds() {
    let mut bv = FixedBitVector::<2>::new();
    bv.set(64); // one past the end
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_get_out_of_bounds() {
    let bv = FixedBitVector::<1>::new();
    let _ = bv.get(32);
}

#[test]
fn test_set_range() {
    let original = FixedBitVector::<3>::new();

    // over multiple words
    let mut bv = original;
    bv.set_range(3..70);
    let expected: Vec<_> = (0..96).map(|i| (3..70).contains(&i)).collect();
    assert_eq!(bv.iter().collect::<Vec<_>>(), expected);

    // within one word
    let mut bv = original;
    bv.set_range(34..40);
    assert_eq!(bv.iter_ones().collect::<Vec<_>>(), [34, 35, 36, 37, 38, 39]);

    // whole words
    let mut bv = original;
    bv.set_range(32..64);
    assert_eq!(bv.words(), &[0, Word::MAX, 0]);

    // empty
    let mut bv = original;
    bv.set_range(5..5);
    assert!(bv.is_all_clear());
}

#[test]
fn test_clear_range() {
    let original = FixedBitVector::<3>::with_all_set();

    let mut bv = original;
    bv.clear_range(3..70);
    let expected: Vec<_> = (0..96).map(|i| !(3..70).contains(&i)).collect();
    assert_eq!(bv.iter().collect::<Vec<_>>(), expected);

    let mut bv = original;
    bv.clear_range(0..96);
    assert!(bv.is_all_clear());
}

#[test]
#[should_panic(expected = "Range end")]
fn test_set_range_end_out_of_bounds() {
    let mut bv = FixedBitVector::<1>::new();
    bv.set_range(2..33);
}

#[test]
fn test_first_set_bit() {
    let mut bv = FixedBitVector::<4>::new();
    assert_eq!(bv.first_set_bit(), None);
    for bit in 0..bv.bit_capacity() {
        bv.set(bit);
        assert_eq!(bv.first_set_bit(), Some(bit));
        bv.clear(bit);
    }
}

#[test]
fn test_first_unset_bit() {
    let mut bv = FixedBitVector::<4>::with_all_set();
    assert_eq!(bv.first_unset_bit(), None);
    for bit in 0..bv.bit_capacity() {
        bv.clear(bit);
        assert_eq!(bv.first_unset_bit(), Some(bit));
        bv.set(bit);
    }
}

#[test]
fn test_trailing_zero_count() {
    let mut bv = FixedBitVector::<3>::new();
    assert_eq!(bv.trailing_zero_count(), bv.bit_capacity());
    bv.set_all(true);
    assert_eq!(bv.trailing_zero_count(), 0);
    bv.set_all(false);
    for bit in 0..bv.bit_capacity() {
        bv.set(bit);
        assert_eq!(bv.trailing_zero_count(), bit);
        bv.clear(bit);
    }
}

#[test]
fn test_leading_zero_count() {
    let mut bv = FixedBitVector::<3>::new();
    assert_eq!(bv.leading_zero_count(), bv.bit_capacity());
    bv.set_all(true);
    assert_eq!(bv.leading_zero_count(), 0);
    bv.set_all(false);
    for bit in 0..bv.bit_capacity() {
        bv.set(bit);
        assert_eq!(bv.leading_zero_count(), bv.bit_capacity() - bit - 1);
        bv.clear(bit);
    }
}

#[test]
fn test_scan_walkthrough() {
    let mut bv = FixedBitVector::<16>::new();
    bv.set_all(true);
    assert_eq!(bv.popcount(), bv.bit_capacity());

    let last = bv.bit_capacity() - 1;
    bv.clear(last);
    assert_eq!(bv.first_unset_bit(), Some(last));

    bv.clear(0);
    assert_eq!(bv.first_set_bit(), Some(1));

    bv.clear(last - 1);
    bv.clear(last - 2);
    assert_eq!(bv.leading_zero_count(), 3);
    assert_eq!(bv.trailing_zero_count(), 1);
}

#[test]
fn test_next_set_and_unset_bit() {
    let mut bv = FixedBitVector::<3>::new();
    bv.set(5);
    bv.set(31);
    bv.set(32);
    bv.set(90);

    assert_eq!(bv.next_set_bit(0), Some(5));
    assert_eq!(bv.next_set_bit(5), Some(5));
    assert_eq!(bv.next_set_bit(6), Some(31));
    assert_eq!(bv.next_set_bit(32), Some(32));
    assert_eq!(bv.next_set_bit(33), Some(90));
    assert_eq!(bv.next_set_bit(91), None);
    assert_eq!(bv.next_set_bit(96), None);
    assert_eq!(bv.next_set_bit(usize::MAX), None);

    assert_eq!(bv.next_unset_bit(5), Some(6));
    assert_eq!(bv.next_unset_bit(31), Some(33));

    let full = FixedBitVector::<2>::with_all_set();
    assert_eq!(full.next_unset_bit(0), None);
    assert_eq!(full.next_unset_bit(63), None);
}

#[test]
fn test_iter() {
    let bv = FixedBitVector::<1>::from_words([0b10_1010_0101]);

    let all: Vec<_> = bv.iter().take(10).collect();
    assert_eq!(
        all,
        [true, false, true, false, false, true, false, true, false, true]
    );
    assert_eq!(bv.iter().len(), 32);
    assert_eq!((&bv).into_iter().count(), 32);

    assert_eq!(bv.iter_ones().collect::<Vec<_>>(), [0, 2, 5, 7, 9]);
    let zeros: Vec<_> = bv.iter_zeros().collect();
    assert_eq!(zeros.len(), 27);
    assert_eq!(zeros[..5], [1, 3, 4, 6, 8]);
    assert_eq!(zeros.last(), Some(&31));
}

#[test]
fn test_fused_iter() {
    let bv = FixedBitVector::<2>::from_words([0b101, 0]);

    let mut iter = bv.iter();
    for _ in 0..64 {
        assert!(iter.next().is_some());
    }
    for _ in 0..30 {
        assert_eq!(iter.next(), None);
    }

    let mut ones_iter = bv.iter_ones();
    assert_eq!(ones_iter.next(), Some(0));
    assert_eq!(ones_iter.next(), Some(2));
    for _ in 0..30 {
        assert_eq!(ones_iter.next(), None);
    }

    let mut zeros_iter = bv.iter_zeros();
    for _ in 0..62 {
        assert!(zeros_iter.next().is_some());
    }
    for _ in 0..30 {
        assert_eq!(zeros_iter.next(), None);
    }
}

#[test]
fn test_to_string() {
    let mut bv = FixedBitVector::<2>::new();
    bv.set(0);
    bv.set(33);
    let rendered = bv.to_string();
    assert_eq!(rendered.len(), bv.bit_capacity());
    assert_eq!(rendered.len() + 1, bv.to_string_buffer_size());
    for (i, c) in rendered.chars().enumerate() {
        assert_eq!(c == '1', bv.get(i), "Mismatch at bit {}", i);
    }
    assert!(rendered.starts_with("10000"));
    assert_eq!(&rendered[32..35], "010");
}

#[test]
fn test_dump() {
    let mut bv = FixedBitVector::<2>::new();
    bv.set(0);
    bv.set(15);
    bv.set(63);
    assert_eq!(
        bv.dump().collect::<Vec<_>>(),
        vec![
            "00000000: 00000000 00000000 10000000 00000001",
            "00000001: 10000000 00000000 00000000 00000000",
        ]
    );
}

#[test]
#[should_panic(expected = "out of bounds")]
fn test_dump_line_out_of_bounds() {
    let bv = FixedBitVector::<2>::new();
    let _ = bv.dump_line(2);
}

#[test]
fn test_debug() {
    let mut bv = FixedBitVector::<2>::new();
    bv.set(1);
    assert_eq!(
        format!("{bv:?}"),
        "FixedBitVector<2> [00000000: 00000000 00000000 00000000 00000010, \
         00000001: 00000000 00000000 00000000 00000000]"
    );
}

#[test]
fn test_bitwise_ops() {
    let a = FixedBitVector::<1>::from_words([0b1100]);
    let b = FixedBitVector::<1>::from_words([0b1010]);

    assert_eq!((a & b).words(), &[0b1000]);
    assert_eq!((a | b).words(), &[0b1110]);
    assert_eq!((a ^ b).words(), &[0b0110]);
    assert_eq!((!a).words(), &[!0b1100]);

    let mut c = a;
    c &= b;
    assert_eq!(c, a.bit_and(&b));
    let mut c = a;
    c |= b;
    assert_eq!(c, a.bit_or(&b));
    let mut c = a;
    c ^= b;
    assert_eq!(c, a.bit_xor(&b));
    let mut c = a;
    c.in_place_bit_not();
    assert_eq!(c, a.bit_not());
}
