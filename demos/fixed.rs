use bitstring::FixedBitVector;
use tracing::{Level, info};

static EMPTY: FixedBitVector<16> = FixedBitVector::const_empty();

fn main() {
    tracing_subscriber::fmt().with_max_level(Level::INFO).init();

    let mut bv = EMPTY;
    assert_eq!(bv.capacity(), 16);
    assert_eq!(bv.bit_capacity(), 16 * 32);

    info!(buffer = bv.to_string_buffer_size(), "rendering");
    println!("{bv}");
    for line in bv.dump() {
        println!("{line}");
    }

    bv.set(0);
    assert!(bv.get(0));
    bv.clear(0);
    assert!(!bv.get(0));

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

    info!(popcount = bv.popcount(), "done");
}
