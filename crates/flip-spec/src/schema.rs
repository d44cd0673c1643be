use serde_json::Value;

use crate::spec::unit::VideoUnit;

/// JSON schema of a unit content file (an array of units).
pub fn content_schema() -> Result<Value, serde_json::Error> {
    serde_json::to_value(schemars::schema_for!(Vec<VideoUnit>))
}
