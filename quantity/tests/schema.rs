/******************************************************************************
 * Copyright ContinuousC. Licensed under the "Elastic License 2.0".           *
 ******************************************************************************/

#[cfg(feature = "schemars")]
#[test]
fn unit_schema() {
    use quantity::Unit;
    use schemars::schema_for;
    use serde_json::json;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(Unit)).unwrap(),
    )
    .unwrap();

    #[cfg(feature = "serialize_as_string")]
    let examples = [json!("kB/s"), json!("°C"), json!("m⋅kg/s³")];
    #[cfg(not(feature = "serialize_as_string"))]
    let examples = [
        json!({ "Information": { "Byte": "Kilo" } }),
        json!({ "Length": "Mile" }),
    ];

    examples.iter().for_each(|example| {
        schema.validate(example).expect("schema validation failed");
    });
}

#[cfg(feature = "schemars")]
#[test]
fn config_schema() {
    use quantity::EngineConfig;
    use schemars::schema_for;
    use serde_json::json;

    let schema = jsonschema::validator_for(
        &serde_json::to_value(schema_for!(EngineConfig)).unwrap(),
    )
    .unwrap();

    let config = serde_json::to_value(EngineConfig::default()).unwrap();
    schema.validate(&config).expect("schema validation failed");
    schema
        .validate(&json!({ "backend": "fixed", "rounding": "half_even" }))
        .expect("schema validation failed");
    assert!(schema.validate(&json!({ "backend": "float" })).is_err());
}
