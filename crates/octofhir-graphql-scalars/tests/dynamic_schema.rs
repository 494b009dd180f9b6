//! Integration tests for registering the scalars into a dynamic schema.
//!
//! Builds an `async-graphql` schema whose fields echo an argument through a
//! scalar (parse, then serialize) and runs real requests against it.

use async_graphql::dynamic::{
    Field, FieldFuture, FieldValue, InputValue, Object, Schema, TypeRef,
};
use async_graphql::{Request, Value as ConstValue, Variables};
use octofhir_graphql_scalars::{
    CoercingContext, ScalarDefinition, ScalarRegistry, ScalarsConfig, Value, scalars,
};
use serde_json::json;
use time::macros::datetime;

// =============================================================================
// Schema fixture
// =============================================================================

/// `<name>(value: <Scalar>!): <Scalar>` returning the canonical form of `value`.
fn echo_field(name: &str, scalar: &ScalarDefinition) -> Field {
    let type_name = scalar.name().to_string();
    let scalar = scalar.clone();
    Field::new(name, TypeRef::named(&type_name), move |ctx| {
        let scalar = scalar.clone();
        FieldFuture::new(async move {
            let input = ctx.args.try_get("value")?.as_value().clone();
            let coercing_ctx = CoercingContext::new();
            let parsed = scalar.parse_value(&Value::from(input), &coercing_ctx)?;
            let wire = scalar.serialize(&parsed, &coercing_ctx)?;
            Ok(Some(FieldValue::value(ConstValue::from(wire))))
        })
    })
    .argument(InputValue::new("value", TypeRef::named_nn(&type_name)))
}

fn build_schema(registry: &ScalarRegistry, extra: Vec<Field>) -> Schema {
    let launched = Field::new("launched", TypeRef::named_nn("DateTime"), |_| {
        FieldFuture::new(async move {
            let wire = scalars::DATE_TIME.serialize(
                &Value::from(datetime!(1969-07-16 13:32 UTC)),
                &CoercingContext::new(),
            )?;
            Ok(Some(FieldValue::value(ConstValue::from(wire))))
        })
    });

    let mut query = Object::new("Query")
        .field(launched)
        .field(echo_field("date", &scalars::DATE))
        .field(echo_field("color", &scalars::HEX_COLOR_CODE))
        .field(echo_field("count", &scalars::POSITIVE_INT))
        .field(echo_field("id", &scalars::UUID))
        .field(echo_field("json", &scalars::JSON));
    for field in extra {
        query = query.field(field);
    }

    registry
        .register_scalars(Schema::build("Query", None, None))
        .register(query)
        .finish()
        .expect("schema builds")
}

fn schema() -> Schema {
    build_schema(&ScalarRegistry::extended(), Vec::new())
}

// =============================================================================
// Tests
// =============================================================================

#[tokio::test]
async fn test_output_is_serialized() {
    let response = schema().execute("{ launched }").await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "launched": "1969-07-16T13:32:00.000Z" })
    );
}

#[tokio::test]
async fn test_literal_arguments() {
    let response = schema()
        .execute(r##"{ date(value: "2024-02-29") color(value: "#FFF") count(value: 3) }"##)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "date": "2024-02-29", "color": "#ffffff", "count": 3 })
    );
}

#[tokio::test]
async fn test_invalid_literals_are_rejected() {
    let queries = vec![
        r#"{ date(value: "2023-02-29") }"#,
        r##"{ color(value: "#ziz") }"##,
        "{ count(value: 0) }",
        r#"{ id(value: "not-a-uuid") }"#,
    ];
    for query in queries {
        let response = schema().execute(query).await;
        assert!(!response.errors.is_empty(), "expected errors for {query}");
    }
}

#[tokio::test]
async fn test_variables() {
    let query = "query($d: Date!, $j: JSON!) { date(value: $d) json(value: $j) }";
    let request = Request::new(query).variables(Variables::from_json(json!({
        "d": "2000-01-01",
        "j": { "a": null, "b": [1, "x"] }
    })));
    let response = schema().execute(request).await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "date": "2000-01-01", "json": { "a": null, "b": [1, "x"] } })
    );

    let request = Request::new("query($d: Date!) { date(value: $d) }")
        .variables(Variables::from_json(json!({ "d": "2000-13-01" })));
    let response = schema().execute(request).await;
    assert!(!response.errors.is_empty());
}

#[tokio::test]
async fn test_introspection_metadata() {
    let response = schema()
        .execute(r#"{ __type(name: "DateTime") { name description specifiedByURL } }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "__type": {
                "name": "DateTime",
                "description": "An RFC-3339 compliant DateTime Scalar",
                "specifiedByURL": "https://scalars.graphql.org/andimarek/date-time"
            }
        })
    );
}

#[tokio::test]
async fn test_config_driven_registry() {
    let config: ScalarsConfig = toml::from_str(
        r#"
            [[regex]]
            name = "Sku"
            patterns = ['[A-Z]{3}-[0-9]{4}']

            [[aliases]]
            name = "ExternalId"
            description = "Partner identifier"
            target = "UUID"
        "#,
    )
    .unwrap();
    let registry = ScalarRegistry::from_config(&config).unwrap();
    let external_id = registry.get("ExternalId").unwrap();
    let sku = registry.get("Sku").unwrap();
    let schema = build_schema(
        &registry,
        vec![echo_field("externalId", external_id), echo_field("sku", sku)],
    );

    let response = schema
        .execute(r#"{ __type(name: "ExternalId") { name description } }"#)
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({ "__type": { "name": "ExternalId", "description": "Partner identifier" } })
    );

    let response = schema
        .execute(
            r#"{
                externalId(value: "123E4567-E89B-12D3-A456-426614174000")
                id(value: "123E4567-E89B-12D3-A456-426614174000")
                sku(value: "ABC-1234")
            }"#,
        )
        .await;
    assert!(response.errors.is_empty(), "{:?}", response.errors);
    assert_eq!(
        response.data.into_json().unwrap(),
        json!({
            "externalId": "123e4567-e89b-12d3-a456-426614174000",
            "id": "123e4567-e89b-12d3-a456-426614174000",
            "sku": "ABC-1234"
        })
    );

    for query in [
        r#"{ externalId(value: "not-a-uuid") }"#,
        r#"{ id(value: "not-a-uuid") }"#,
        r#"{ externalId(value: 42) }"#,
        r#"{ sku(value: "abc-1234") }"#,
    ] {
        let response = schema.execute(query).await;
        assert!(!response.errors.is_empty(), "expected errors for {query}");
    }
}
