//! Traversal of records, arrays and sequences.

use crate::init_tracing;
use crate::models::{Address, Person, SimpleRecord, Team};
use fixture_fill::fill_core::{FillContext, FnGenerator, GeneratorExt, Matcher, Value};
use fixture_fill::generators::{
    BooleanGenerator, ConstantGenerator, PatternGenerator, SequentialGenerator,
};
use fixture_fill::{Priority, RandomData};

#[test]
fn test_simple_record_boolean_only() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(BooleanGenerator::always(true));

    let record: SimpleRecord = data.generate().unwrap();
    assert!(record.flag);
    assert_eq!(record.label, None);
}

#[test]
fn test_unmatched_leaves_keep_their_values() {
    init_tracing();

    let data = RandomData::new();
    let mut person = Person {
        name: "Ada".to_string(),
        age: 42,
        active: true,
        ..Person::default()
    };
    data.fill(&mut person);

    assert_eq!(person.name, "Ada");
    assert_eq!(person.age, 42);
    assert!(person.active);
    assert_eq!(person.email, "");
}

#[test]
fn test_unmatched_record_field_is_constructed_and_filled() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(PatternGenerator::new("{index} Main St").with_matcher(Matcher::named("street")));
    data.add_generator(SequentialGenerator::new(10000).with_matcher(Matcher::named("zip")));

    let person: Person = data.generate().unwrap();
    let address = person.address.expect("address should be constructed");
    assert_eq!(address.street, "0 Main St");
    assert_eq!(address.zip, 10000);
    assert_eq!(person.home.street, "1 Main St");
    assert_eq!(person.home.zip, 10001);
}

#[test]
fn test_array_slots_are_constructed() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(1).with_matcher(Matcher::named("zip")));

    let mut slots: [Option<Address>; 3] = Default::default();
    data.fill(&mut slots);

    let zips: Vec<u32> = slots.iter().map(|slot| slot.as_ref().unwrap().zip).collect();
    assert_eq!(zips, vec![1, 2, 3]);
}

#[test]
fn test_array_field_of_record() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(ConstantGenerator::new("Elm").with_matcher(Matcher::named("street")));

    let team: Team = data.generate().unwrap();
    assert!(team
        .slots
        .iter()
        .all(|slot| slot.as_ref().map(|a| a.street.as_str()) == Some("Elm")));
}

#[test]
fn test_sequence_elements_filled_without_growth() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(BooleanGenerator::always(true));

    let mut people = vec![Person::default(), Person::default()];
    data.fill(&mut people);
    assert_eq!(people.len(), 2);
    assert!(people.iter().all(|p| p.active));

    let mut empty: Vec<Person> = Vec::new();
    data.fill(&mut empty);
    assert!(empty.is_empty());

    let mut team = Team {
        members: vec![Person::default()],
        ..Team::default()
    };
    data.fill(&mut team);
    assert_eq!(team.members.len(), 1);
    assert!(team.members[0].active);
}

#[test]
fn test_generate_list_elements_are_independent() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(0).with_matcher(Matcher::named("zip")));

    let list: Vec<Address> = data.generate_list(3).unwrap();
    let array: Box<[Address]> = data.generate_array(2).unwrap();

    assert_eq!(list.iter().map(|a| a.zip).collect::<Vec<_>>(), vec![0, 1, 2]);
    assert_eq!(array.len(), 2);
    assert_eq!(array[1].zip, 4);
}

#[test]
fn test_rejected_value_falls_through_to_next_generator() {
    init_tracing();

    let mut data = RandomData::new();
    // 1000 does not fit in a u8
    data.add_generator_with_priority(
        FnGenerator::new(Matcher::named("age"), |_: &FillContext| Value::Int(1000)),
        Priority::Highest,
    );
    data.add_generator_with_priority(
        ConstantGenerator::new("yes").with_matcher(Matcher::named("active")),
        Priority::High,
    );
    data.add_generator(ConstantGenerator::new(30i64).with_matcher(Matcher::named("age")));
    data.add_generator(BooleanGenerator::always(true));

    let person: Person = data.generate().unwrap();
    assert_eq!(person.age, 30);
    assert!(person.active);
}

#[test]
fn test_all_rejected_leaves_field_unchanged() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(ConstantGenerator::new(-5i64).with_matcher(Matcher::named("age")));

    let mut person = Person {
        age: 7,
        ..Person::default()
    };
    data.fill(&mut person);
    assert_eq!(person.age, 7);
}

#[test]
fn test_null_generator_clears_nullable_fields() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator_with_priority(ConstantGenerator::null(), Priority::High);

    let mut person = Person {
        address: Some(Address::default()),
        ..Person::default()
    };
    data.fill(&mut person);
    assert_eq!(person.address, None);
}
