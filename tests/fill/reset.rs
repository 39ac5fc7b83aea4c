//! Resetting generators between runs.

use crate::init_tracing;
use crate::models::Address;
use fixture_fill::fill_core::{GeneratorExt, Matcher, Value};
use fixture_fill::generators::{CycleGenerator, PatternGenerator, SequentialGenerator};
use fixture_fill::RandomData;

#[test]
fn test_reset_restarts_sequences() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(100));
    data.add_generator(PatternGenerator::new("street-{index}"));

    let first: Vec<Address> = data.generate_list(3).unwrap();
    assert_eq!(first[0].zip, 100);
    assert_eq!(first[2].zip, 102);
    assert_eq!(first[2].street, "street-2");

    data.reset();

    let again: Address = data.generate().unwrap();
    assert_eq!(again.zip, first[0].zip);
    assert_eq!(again.street, first[0].street);
}

#[test]
fn test_reset_restarts_cycles() {
    init_tracing();

    let values = vec![Value::from("north"), Value::from("south")];
    let mut data = RandomData::new();
    data.add_generator(
        CycleGenerator::new(values)
            .unwrap()
            .with_matcher(Matcher::named("street")),
    );

    let streets: Vec<String> = data
        .generate_list::<Address>(3)
        .unwrap()
        .into_iter()
        .map(|a| a.street)
        .collect();
    assert_eq!(streets, vec!["north", "south", "north"]);

    data.reset();
    let again: Address = data.generate().unwrap();
    assert_eq!(again.street, "north");
}
