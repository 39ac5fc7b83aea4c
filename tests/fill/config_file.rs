//! Building an engine from a YAML configuration file.

use crate::init_tracing;
use crate::models::{Node, Person};
use fixture_fill::{ConfigError, FillConfig, RandomData};
use std::io::Write;
use tempfile::NamedTempFile;

const CONFIG: &str = r#"
max_recursion: 1
generators:
  - match: { field: email }
    priority: high
    generator: { type: pattern, pattern: "user_{index}@example.com" }
  - match: { kind: text }
    generator: { type: static, value: filler }
  - match: { type: bool }
    generator: { type: weighted_bool, true_weight: 1.0 }
  - match: { field: age, declared_in: Person }
    generator: { type: int_range, min: 18, max: 80 }
"#;

#[test]
fn test_engine_from_config_file() -> anyhow::Result<()> {
    init_tracing();

    let mut file = NamedTempFile::new()?;
    file.write_all(CONFIG.as_bytes())?;

    let config = FillConfig::from_file(file.path())?;
    let data = RandomData::from_config(&config)?;
    assert_eq!(data.registry().len(), 4);

    let first: Person = data.generate()?;
    let second: Person = data.generate()?;
    assert_eq!(first.email, "user_0@example.com");
    assert_eq!(second.email, "user_1@example.com");
    assert_eq!(first.name, "filler");
    assert_eq!(first.home.street, "filler");
    assert!(first.active);
    assert!((18..=80).contains(&first.age));

    data.reset();
    let again: Person = data.generate()?;
    assert_eq!(again.email, "user_0@example.com");

    let node: Node = data.generate()?;
    assert_eq!(node.chain_len(), 1);
    Ok(())
}

#[test]
fn test_missing_file_is_io_error() {
    let err = FillConfig::from_file("/nonexistent/fixture-fill.yaml").unwrap_err();
    assert!(matches!(err, ConfigError::Io(_)));
}

#[test]
fn test_invalid_generator_rejected_when_building() {
    let config = FillConfig::from_yaml(
        r#"
generators:
  - match: { field: age }
    generator: { type: float_range, min: 2.0, max: 1.0 }
"#,
    )
    .unwrap();
    assert!(matches!(
        RandomData::from_config(&config),
        Err(ConfigError::Generator(_))
    ));
}
