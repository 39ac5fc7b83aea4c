//! Background fills on the worker pool.

use crate::init_tracing;
use crate::models::{Node, Person};
use fixture_fill::generators::{BooleanGenerator, SequentialGenerator};
use fixture_fill::RandomData;
use parking_lot::Mutex;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::oneshot;

#[test]
fn test_fill_async_invokes_callback() -> anyhow::Result<()> {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(BooleanGenerator::always(true));

    let target = Arc::new(Mutex::new(Person::default()));
    let (tx, rx) = oneshot::channel();
    data.fill_async(
        target.clone(),
        Some(Box::new(move || {
            let _ = tx.send(std::thread::current().name().map(str::to_string));
        })),
    )?;

    let worker = rx.blocking_recv()?;
    assert_eq!(worker.as_deref(), Some("fill-worker"));

    let person = target.lock();
    assert!(person.active);
    assert!(person.address.is_some());
    Ok(())
}

#[test]
fn test_fill_async_without_callback() -> anyhow::Result<()> {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(SequentialGenerator::new(5));

    let target = Arc::new(Mutex::new(Node::default()));
    data.fill_async(target.clone(), None)?;

    let deadline = Instant::now() + Duration::from_secs(10);
    while target.lock().value != 5 {
        anyhow::ensure!(Instant::now() < deadline, "background fill did not finish");
        std::thread::sleep(Duration::from_millis(10));
    }
    assert_eq!(target.lock().chain_len(), 2);
    Ok(())
}

#[test]
fn test_concurrent_fills_each_complete() -> anyhow::Result<()> {
    init_tracing();

    let mut data = RandomData::new();
    data.add_generator(BooleanGenerator::always(true));

    let mut pending = Vec::new();
    for _ in 0..8 {
        let target = Arc::new(Mutex::new(Person::default()));
        let (tx, rx) = oneshot::channel::<()>();
        data.fill_async(
            target.clone(),
            Some(Box::new(move || {
                let _ = tx.send(());
            })),
        )?;
        pending.push((target, rx));
    }

    for (target, rx) in pending {
        rx.blocking_recv()?;
        assert!(target.lock().home.street.is_empty());
        assert!(target.lock().active);
    }
    Ok(())
}
