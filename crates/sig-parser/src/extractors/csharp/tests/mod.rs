use sig_core::{MemberDescription, MethodDescription, PropertyDescription, Visibility};

use super::*;
use crate::parser::parse_source;


fn parse_and_extract(source: &str) -> Vec<ExtractedMember> {
    let root = parse_source(source);
    extract(&root).expect("extraction should succeed")
}

fn find_by_name<'a>(items: &'a [ExtractedMember], name: &str) -> &'a ExtractedMember {
    items
        .iter()
        .find(|i| i.member.name() == name)
        .unwrap_or_else(|| panic!("should find member named '{name}'"))
}

fn method<'a>(items: &'a [ExtractedMember], name: &str) -> &'a MethodDescription {
    match &find_by_name(items, name).member {
        MemberDescription::Method(method) => method,
        MemberDescription::Property(_) => panic!("'{name}' should be a method"),
    }
}

fn property<'a>(items: &'a [ExtractedMember], name: &str) -> &'a PropertyDescription {
    match &find_by_name(items, name).member {
        MemberDescription::Property(property) => property,
        MemberDescription::Method(_) => panic!("'{name}' should be a property"),
    }
}

fn fixture_items() -> Vec<ExtractedMember> {
    let source = include_str!("../../../../tests/fixtures/DemoClass.cs");
    parse_and_extract(source)
}
