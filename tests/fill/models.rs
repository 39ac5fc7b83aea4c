//! Record types shared by the integration tests.

use fixture_fill::fill_core::{impl_record, ConstructionError};

#[derive(Debug, Default)]
pub struct SimpleRecord {
    pub flag: bool,
    pub label: Option<String>,
}

impl_record!(SimpleRecord { flag, label });

#[derive(Debug, Default, Clone, PartialEq)]
pub struct Address {
    pub street: String,
    pub zip: u32,
}

impl_record!(Address { street, zip });

#[derive(Debug, Default)]
pub struct Person {
    pub name: String,
    pub email: String,
    pub age: u8,
    pub active: bool,
    pub address: Option<Address>,
    pub home: Address,
}

impl_record!(Person { name, email @ "pii", age, active, address, home });

#[derive(Debug, Default)]
pub struct Team {
    pub members: Vec<Person>,
    pub slots: [Option<Address>; 3],
}

impl_record!(Team { members, slots });

#[derive(Debug, Default)]
pub struct Node {
    pub value: i32,
    pub child: Option<Box<Node>>,
}

impl_record!(Node { value, child });

impl Node {
    /// Number of nodes in the chain starting here.
    pub fn chain_len(&self) -> usize {
        1 + self.child.as_ref().map_or(0, |child| child.chain_len())
    }
}

#[derive(Debug, Default)]
pub struct Parent {
    pub name: String,
    pub child: Option<Child>,
}

#[derive(Debug, Default)]
pub struct Child {
    pub name: String,
    pub parent: Option<Box<Parent>>,
}

impl_record!(Parent { name, child });
impl_record!(Child { name, parent });

/// A type with no usable default constructor.
#[derive(Debug)]
pub struct Locked {
    pub secret: u64,
}

impl_record!(Locked { secret } construct = || Err(ConstructionError::no_default::<Locked>()));

#[derive(Debug, Default)]
pub struct Holder {
    pub count: u32,
    pub locked: Option<Locked>,
    pub vault: [Option<Locked>; 2],
    pub note: String,
}

impl_record!(Holder { count, locked, vault, note });
