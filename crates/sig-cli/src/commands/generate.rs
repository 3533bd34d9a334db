use anyhow::{Context, bail};
use sig_config::Sig2MoqConfig;
use sig_core::{Action, ActionKind};

use crate::cli::GlobalFlags;
use crate::cli::root_commands::GenerateArgs;
use crate::commands::shared;

/// Handle `sig2moq generate`.
pub fn handle(args: &GenerateArgs, config: &Sig2MoqConfig, flags: &GlobalFlags) -> anyhow::Result<()> {
    let actions = shared::actions_at_selection(&args.selection)?;
    let action = choose_action(actions, args.action.map(ActionKind::from)).with_context(|| {
        format!(
            "at {}:{}",
            args.selection.file.display(),
            args.selection.line
        )
    })?;
    shared::deliver(&action, config, args.stdout, flags)
}

/// Pick the requested action, or the getter when a property offers two.
fn choose_action(mut actions: Vec<Action>, requested: Option<ActionKind>) -> anyhow::Result<Action> {
    if actions.is_empty() {
        bail!("no setup action is offered here; select a method, property, or accessor declaration");
    }

    if let Some(kind) = requested {
        let offered = actions
            .iter()
            .map(|action| action.kind.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        return actions
            .into_iter()
            .find(|action| action.kind == kind)
            .with_context(|| format!("action '{kind}' is not offered here (offered: {offered})"));
    }

    let index = actions
        .iter()
        .position(|action| action.kind == ActionKind::PropertyGetter)
        .unwrap_or(0);
    Ok(actions.swap_remove(index))
}

#[cfg(test)]
mod tests {
    use sig_core::{MemberDescription, MethodDescription, PropertyDescription, ReturnType};

    use super::*;

    fn property() -> MemberDescription {
        MemberDescription::Property(PropertyDescription {
            name: "Property".into(),
            type_name: "int".into(),
            visibility: sig_core::Visibility::Normal,
            getter_visibility: None,
            setter_visibility: None,
        })
    }

    fn method() -> MemberDescription {
        MemberDescription::Method(MethodDescription {
            name: "Run".into(),
            return_type: ReturnType::Void,
            visibility: sig_core::Visibility::Normal,
            type_parameters: Vec::new(),
            parameters: Vec::new(),
        })
    }

    #[test]
    fn property_defaults_to_getter() {
        let chosen = choose_action(Action::offered_for(&property()), None).unwrap();
        assert_eq!(chosen.kind, ActionKind::PropertyGetter);
    }

    #[test]
    fn requested_setter_is_honored() {
        let chosen = choose_action(
            Action::offered_for(&property()),
            Some(ActionKind::PropertySetter),
        )
        .unwrap();
        assert_eq!(chosen.kind, ActionKind::PropertySetter);
    }

    #[test]
    fn method_offers_its_single_action() {
        let chosen = choose_action(Action::offered_for(&method()), None).unwrap();
        assert_eq!(chosen.kind, ActionKind::MethodSetup);
    }

    #[test]
    fn unoffered_request_lists_alternatives() {
        let err = choose_action(Action::offered_for(&method()), Some(ActionKind::PropertyGetter))
            .unwrap_err();
        assert!(err.to_string().contains("offered: method_setup"));
    }

    #[test]
    fn nothing_offered_is_an_error() {
        assert!(choose_action(Vec::new(), None).is_err());
    }
}
