//! Configuration deserialization tests.

use pretty_assertions::assert_eq;

use mipsim_core::Config;

#[test]
fn defaults_match_the_classic_memory_map() {
    let config = Config::default();
    assert_eq!(config.text_base, 496);
    assert_eq!(config.data_base, 600);
    assert_eq!(config.data_words, 32);
}

#[test]
fn empty_json_yields_the_defaults() {
    let config: Config = serde_json::from_str("{}").unwrap();
    assert_eq!(config.text_base, 496);
    assert_eq!(config.data_base, 600);
    assert_eq!(config.data_words, 32);
}

#[test]
fn fields_can_be_overridden_individually() {
    let config: Config = serde_json::from_str(r#"{"data_words": 64, "text_base": 0}"#).unwrap();
    assert_eq!(config.text_base, 0);
    assert_eq!(config.data_base, 600);
    assert_eq!(config.data_words, 64);
}
