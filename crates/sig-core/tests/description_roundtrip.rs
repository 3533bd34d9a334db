//! Serde roundtrip and JsonSchema validation tests for the description contract.

use schemars::schema_for;
use sig_core::responses::*;
use sig_core::*;

/// Validate a JSON value against a schemars-generated schema.
fn validate_against_schema(
    schema: &serde_json::Value,
    instance: &serde_json::Value,
) -> Vec<String> {
    let validator = jsonschema::validator_for(schema).expect("schema should be valid");
    validator
        .iter_errors(instance)
        .map(|e| format!("{e}"))
        .collect()
}

macro_rules! roundtrip_and_validate {
    ($name:ident, $ty:ty, $instance:expr) => {
        #[test]
        fn $name() {
            let val: $ty = $instance;

            let json_str = serde_json::to_string_pretty(&val).unwrap();
            let recovered: $ty = serde_json::from_str(&json_str).unwrap();
            assert_eq!(
                recovered,
                val,
                "serde roundtrip failed for {}",
                stringify!($ty)
            );

            let schema = serde_json::to_value(schema_for!($ty)).unwrap();
            let instance = serde_json::to_value(&val).unwrap();
            let errors = validate_against_schema(&schema, &instance);
            assert!(
                errors.is_empty(),
                "Schema validation failed for {}: {:?}",
                stringify!($ty),
                errors
            );
        }
    };
}

fn function_with_ref() -> MemberDescription {
    MemberDescription::Method(MethodDescription {
        name: "FunctionWithRef".into(),
        return_type: ReturnType::from_type_text("int"),
        visibility: Visibility::Normal,
        type_parameters: Vec::new(),
        parameters: vec![
            ParameterDescription::new("number", "int"),
            ParameterDescription::new("demoObject", "DemoClass"),
            ParameterDescription::new("dummy", "int").with_modifier("ref"),
        ],
    })
}

fn protected_property() -> MemberDescription {
    MemberDescription::Property(PropertyDescription {
        name: "ProtectedProperty".into(),
        type_name: "DemoClass".into(),
        visibility: Visibility::Restricted,
        getter_visibility: None,
        setter_visibility: None,
    })
}

roundtrip_and_validate!(method_roundtrip, MemberDescription, function_with_ref());

roundtrip_and_validate!(
    void_generic_method_roundtrip,
    MemberDescription,
    MemberDescription::Method(MethodDescription {
        name: "GenericProcedure".into(),
        return_type: ReturnType::Void,
        visibility: Visibility::Restricted,
        type_parameters: vec!["TParam".into()],
        parameters: vec![ParameterDescription::new("value", "TParam")],
    })
);

roundtrip_and_validate!(property_roundtrip, MemberDescription, protected_property());

roundtrip_and_validate!(
    property_with_accessor_override_roundtrip,
    MemberDescription,
    MemberDescription::Property(PropertyDescription {
        name: "Counter".into(),
        type_name: "long".into(),
        visibility: Visibility::Normal,
        getter_visibility: None,
        setter_visibility: Some(Visibility::Restricted),
    })
);

roundtrip_and_validate!(
    action_roundtrip,
    Action,
    Action::new(ActionKind::PropertySetter, protected_property()).unwrap()
);

roundtrip_and_validate!(
    member_summary_roundtrip,
    MemberSummary,
    MemberSummary {
        kind: "method".into(),
        name: "FunctionWithRef".into(),
        signature: function_with_ref().signature(),
        visibility: Visibility::Normal,
        line: Some(28),
    }
);

roundtrip_and_validate!(
    generate_response_roundtrip,
    GenerateResponse,
    GenerateResponse {
        action: ActionKind::MethodSetup,
        member: "ParameterlessProcedure".into(),
        delivered_to: "stdout".into(),
        snippet: "mock.Setup(m => m.ParameterlessProcedure())\n.Callback(() =>\n{\n});".into(),
    }
);

#[test]
fn schema_rejects_method_without_return_type() {
    let schema = serde_json::to_value(schema_for!(MemberDescription)).unwrap();
    let instance = serde_json::json!({
        "kind": "method",
        "name": "Broken",
        "parameters": []
    });
    let errors = validate_against_schema(&schema, &instance);
    assert!(!errors.is_empty(), "missing return_type should be rejected");
}
