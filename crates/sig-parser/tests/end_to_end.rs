//! From a cursor position to the delivered snippet.

use pretty_assertions::assert_eq;
use sig_core::{ActionKind, MemorySink};
use sig_engine::{SnippetStyle, run_action};
use sig_parser::{Position, actions_at, extract_members};

const DEMO: &str = include_str!("fixtures/DemoClass.cs");

#[test]
fn function_with_out_from_selection() {
    let actions = actions_at(DEMO, Position::line(34)).unwrap();
    let mut sink = MemorySink::new();
    let snippet = run_action(&actions[0], &SnippetStyle::default(), &mut sink).unwrap();

    assert_eq!(
        snippet,
        r"int dummy;
mock.Setup(m => m.FunctionWithOut(It.IsAny<int>(), It.IsAny<DemoClass>(), out dummy))
.Returns((int number, DemoClass demoObject, int pDummy) =>
{
    return default(int);
});"
    );
    assert_eq!(sink.delivered(), [snippet.clone()]);
}

#[test]
fn protected_property_setter_from_selection() {
    let actions = actions_at(DEMO, Position::line(61)).unwrap();
    let setter = actions
        .iter()
        .find(|a| a.kind == ActionKind::PropertySetter)
        .unwrap();
    let snippet = sig_engine::generate(setter, &SnippetStyle::default()).unwrap();

    assert_eq!(
        snippet,
        r#"mock.Protected().SetupSet<DemoClass>("ProtectedProperty", ItExpr.IsAny<DemoClass>())
.Callback((DemoClass value) =>
{
});"#
    );
}

#[test]
fn every_extracted_member_generates() {
    let members = extract_members(DEMO).unwrap();
    assert!(members.len() >= 15);
    for extracted in &members {
        let snippet = sig_engine::generate_default(&extracted.member, &SnippetStyle::default())
            .unwrap_or_else(|e| panic!("{} failed: {e}", extracted.member.name()));
        assert!(snippet.starts_with("mock.") || snippet.contains("\nmock."));
    }
}
