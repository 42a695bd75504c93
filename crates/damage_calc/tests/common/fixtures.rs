//! Fixture data structures for damage calculation tests.
//!
//! These types are deserialized from `tests/fixtures/gen4.json`. A case is a
//! [`Scenario`] plus an id, a readable name and the expected damage.

use damage_calc::Scenario;
use serde::Deserialize;

/// Root structure for the damage fixture file.
#[derive(Deserialize)]
pub struct DamageFixture {
    pub meta: Option<serde_json::Value>,
    pub cases: Vec<DamageTestCase>,
}

/// A single damage calculation test case.
#[derive(Deserialize, Debug, Clone)]
pub struct DamageTestCase {
    pub id: String,
    #[serde(rename = "testName")]
    pub test_name: String,
    #[serde(flatten)]
    pub scenario: Scenario,
    pub expected: ExpectedResult,
}

/// Expected result: `null` for no damage, a number for fixed damage, 16 rolls
/// for a single hit, or one array of 16 rolls per hit.
#[derive(Deserialize, Debug, Clone)]
pub struct ExpectedResult {
    pub damage: serde_json::Value,
}

impl DamageFixture {
    /// Load fixture from the standard path.
    pub fn load() -> Result<Self, String> {
        Self::load_from(concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/gen4.json"))
    }

    /// Load fixture from a custom path.
    pub fn load_from(path: &str) -> Result<Self, String> {
        use std::fs::File;
        use std::io::BufReader;

        let file = File::open(path).map_err(|e| format!("Failed to open {}: {}", path, e))?;
        let reader = BufReader::new(file);
        serde_json::from_reader(reader).map_err(|e| format!("Failed to parse {}: {}", path, e))
    }
}
