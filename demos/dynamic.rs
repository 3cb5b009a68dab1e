use bitstring::{BitVector, Error};
use tracing::Level;

fn main() -> Result<(), Error> {
    tracing_subscriber::fmt().with_max_level(Level::TRACE).init();

    let mut bv = BitVector::new(4)?;
    assert_eq!(bv.capacity(), 4);
    assert_eq!(bv.bit_capacity(), 128);

    println!("to_string ({} bytes with terminator):", bv.to_string_buffer_size());
    println!("{bv}");
    println!("dump:");
    for line in bv.dump() {
        println!("{line}");
    }

    bv.set(23);
    assert!(bv.get(23));

    bv.set_all(true);
    assert_eq!(bv.popcount(), bv.bit_capacity());

    for bit in 0..4 {
        bv.clear(bit);
    }
    assert_eq!(bv.first_set_bit(), Some(4));
    assert_eq!(bv.first_unset_bit(), Some(0));
    assert_eq!(bv.trailing_zero_count(), 4);

    bv.set_all(true);
    let last = bv.bit_capacity() - 1;
    bv.clear(last);
    bv.clear(last - 1);
    assert_eq!(bv.leading_zero_count(), 2);

    match bv.resize(32) {
        Ok(()) => println!("resized to {} words", bv.capacity()),
        // the vector keeps its previous storage
        Err(err) => eprintln!("{err}"),
    }
    assert_eq!(bv.popcount(), 126);

    Ok(())
}
