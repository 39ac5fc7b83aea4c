//! Self-referential and mutually recursive types terminate.

use crate::init_tracing;
use crate::models::{Node, Parent};
use fixture_fill::fill_core::{ActiveRecord, FillContext, GeneratorExt, Matcher};
use fixture_fill::generators::{ConstantGenerator, SequentialGenerator};
use fixture_fill::RandomData;

#[test]
fn test_self_reference_stops_at_recursion_limit() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(1));

    let node: Node = data.generate().unwrap();
    assert_eq!(node.chain_len(), 2);
    assert_eq!(node.value, 1);

    let child = node.child.as_ref().unwrap();
    assert_eq!(child.value, 2);
    assert!(child.child.is_none());
}

#[test]
fn test_recursion_limit_is_configurable() {
    init_tracing();

    let shallow = RandomData::new().with_max_recursion(1);
    let node: Node = shallow.generate().unwrap();
    assert_eq!(node.chain_len(), 1);

    let deep = RandomData::new().with_max_recursion(5);
    let node: Node = deep.generate().unwrap();
    assert_eq!(node.chain_len(), 5);
}

#[test]
fn test_mutual_recursion_terminates() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(ConstantGenerator::new("x").with_matcher(Matcher::named("name")));

    let parent: Parent = data.generate().unwrap();
    let child = parent.child.as_ref().unwrap();
    let grandparent = child.parent.as_ref().unwrap();
    let grandchild = grandparent.child.as_ref().unwrap();

    assert!(grandchild.parent.is_none());
    assert_eq!(grandchild.name, "x");
    assert_eq!(grandparent.name, "x");
}

#[test]
fn test_array_of_self_referential_records() {
    init_tracing();

    let data = RandomData::new();
    let mut nodes: [Option<Node>; 2] = Default::default();
    data.fill(&mut nodes);

    for node in &nodes {
        assert_eq!(node.as_ref().unwrap().chain_len(), 2);
    }
}

#[test]
fn test_active_record_is_not_reentered() {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(9));

    let mut node = Node::default();
    let mut context = FillContext::new();
    let mut scope = context.enter(ActiveRecord::of(&node));
    data.fill_with_context(&mut node, &mut scope);

    assert_eq!(node.value, 0);
    assert!(node.child.is_none());
    assert_eq!(scope.depth(), 1);
}
