//! Generator ordering: priority first, registration order on ties.

use crate::init_tracing;
use crate::models::{Person, SimpleRecord};
use fixture_fill::fill_core::{FillContext, Generator, GeneratorExt, Matcher, Value};
use fixture_fill::generators::{BooleanGenerator, ConstantGenerator};
use fixture_fill::{Priority, RandomData};
use std::sync::Arc;

fn text(value: &str) -> ConstantGenerator {
    ConstantGenerator::new(value)
}

#[test]
fn test_higher_priority_wins() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(text("normal").with_matcher(Matcher::of_type::<String>()));
    data.add_generator_with_priority(
        text("high").with_matcher(Matcher::of_type::<String>()),
        Priority::High,
    );

    let person: Person = data.generate().unwrap();
    assert_eq!(person.name, "high");
    assert_eq!(person.email, "high");
    assert_eq!(person.home.street, "high");
}

#[test]
fn test_ties_keep_registration_order() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(text("first").with_matcher(Matcher::named("name")));
    data.add_generator(text("second").with_matcher(Matcher::named("name")));

    let person: Person = data.generate().unwrap();
    assert_eq!(person.name, "first");
}

#[test]
fn test_specific_binding_overrides_general_one() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator_with_priority(
        text("redacted").with_matcher(Matcher::with_attribute("pii")),
        Priority::Highest,
    );
    data.add_generator_with_priority(
        text("general").with_matcher(Matcher::of_type::<String>()),
        Priority::Low,
    );

    let person: Person = data.generate().unwrap();
    assert_eq!(person.email, "redacted");
    assert_eq!(person.name, "general");
}

#[test]
fn test_batch_registration() {
    init_tracing();

    let generators: Vec<Arc<dyn Generator>> = vec![
        Arc::new(BooleanGenerator::always(false)),
        Arc::new(BooleanGenerator::always(true)),
    ];
    let mut data = RandomData::new();
    data.add_generators(generators);
    data.add_generators_with_priority(
        vec![Arc::new(text("batch").with_matcher(Matcher::nullable())) as Arc<dyn Generator>],
        Priority::Low,
    );

    assert_eq!(data.registry().len(), 3);

    let record: SimpleRecord = data.generate().unwrap();
    assert!(!record.flag);
    assert_eq!(record.label.as_deref(), Some("batch"));
}

#[test]
fn test_registration_after_generation_is_seen() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(text("before").with_matcher(Matcher::named("name")));
    let first: Person = data.generate().unwrap();

    data.add_generator_with_priority(
        text("after").with_matcher(Matcher::named("name")),
        Priority::High,
    );
    let second: Person = data.generate().unwrap();

    assert_eq!(first.name, "before");
    assert_eq!(second.name, "after");
}

#[test]
fn test_shared_generator_at_two_priorities() {
    init_tracing();

    let shared: Arc<dyn Generator> = Arc::new(text("shared").with_matcher(Matcher::named("name")));
    let mut data = RandomData::new();
    data.add_shared(shared.clone(), Priority::Lowest);
    data.add_generator(text("normal").with_matcher(Matcher::named("name")));
    data.add_shared(shared.clone(), Priority::Highest);

    let person: Person = data.generate().unwrap();
    assert_eq!(person.name, "shared");
    assert_eq!(shared.next(&FillContext::new()), Value::from("shared"));
}
