//! Construction failures: fatal at the root, swallowed below it.

use crate::init_tracing;
use crate::models::{Holder, Locked};
use fixture_fill::fill_core::ConstructionError;
use fixture_fill::generators::SequentialGenerator;
use fixture_fill::RandomData;

#[test]
fn test_root_construction_failure_propagates() {
    init_tracing();

    let data = RandomData::new();
    let err = data.generate::<Locked>().unwrap_err();
    assert!(matches!(err, ConstructionError::NoDefault { .. }));
    assert!(err.to_string().contains("Locked"));

    assert!(data.generate_list::<Locked>(2).is_err());
    assert!(data.generate_list::<Locked>(0).unwrap().is_empty());
}

#[test]
fn test_nested_construction_failure_is_swallowed() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(3));

    let holder: Holder = data.generate().unwrap();
    assert!(holder.locked.is_none());
    assert!(holder.vault.iter().all(Option::is_none));
    // Siblings after the failing fields are still filled
    assert_eq!(holder.count, 3);
    assert_eq!(holder.note, "");
}

#[test]
fn test_existing_value_survives_failed_construction() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(1));

    let mut holder = Holder {
        locked: Some(Locked { secret: 0 }),
        ..Holder::default()
    };
    data.fill(&mut holder);

    // The field is reconstructed on fallback; failure keeps the old value
    assert_eq!(holder.locked.as_ref().map(|l| l.secret), Some(0));
}
