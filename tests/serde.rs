#![cfg(feature = "serde")]

use rand_bounded::mock::StepSource;
use rand_bounded::Bounded;

#[test]
fn test_bounded() {
    let dist = Bounded::new(1_000_003u32).unwrap();
    let bytes = bincode::serialize(&dist).expect("Could not serialize");
    let de: Bounded<u32> = bincode::deserialize(&bytes).expect("Could not deserialize");
    assert_eq!(de, dist);

    let mut a = StepSource::new(1, 0x9e37_79b9_7f4a_7c15);
    let mut b = a.clone();
    for _ in 0..16 {
        assert_eq!(dist.sample(&mut a), de.sample(&mut b));
    }
}

#[test]
fn test_narrow_bounded() {
    let dist = Bounded::with_width(5u16, 4).unwrap();
    let bytes = bincode::serialize(&dist).expect("Could not serialize");
    let de: Bounded<u16> = bincode::deserialize(&bytes).expect("Could not deserialize");
    assert_eq!((de.bound(), de.threshold(), de.bits()), (5, 1, 4));
}

#[test]
fn test_invalid_bounded_rejected() {
    // Fields in declaration order: n, threshold, bits.
    let de = |fields: (u32, u32, u32)| {
        let bytes = bincode::serialize(&fields).unwrap();
        bincode::deserialize::<Bounded<u32>>(&bytes)
    };

    assert_eq!(de((3, 1, 32)).unwrap(), Bounded::new(3u32).unwrap());
    assert_eq!(de((5, 1, 4)).unwrap(), Bounded::with_width(5u32, 4).unwrap());

    // Empty range
    assert!(de((0, 0, 32)).is_err());
    // 2^32 mod 3 == 1
    assert!(de((3, 0, 32)).is_err());
    assert!(de((3, 2, 32)).is_err());
    // Width outside the word, or too narrow for n
    assert!(de((3, 1, 40)).is_err());
    assert!(de((3, 1, 0)).is_err());
    assert!(de((20, 12, 4)).is_err());
}

#[test]
fn test_step_source() {
    use rand_bounded::UniformSource;

    let mut src = StepSource::new(7, 13);
    let _: u32 = src.next_word();
    let bytes = bincode::serialize(&src).expect("Could not serialize");
    let mut de: StepSource = bincode::deserialize(&bytes).expect("Could not deserialize");
    for _ in 0..16 {
        let x: u64 = src.next_word();
        assert_eq!(x, UniformSource::<u64>::next_word(&mut de));
    }
}
