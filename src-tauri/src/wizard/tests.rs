//! Unit tests for step transitions, gating, and record mutation.

use super::*;

fn filled_machine() -> FormStateMachine {
    let mut m = FormStateMachine::new();
    m.edit("name", "Ana Paula".into()).unwrap();
    m.edit("whatsapp", "31 99999-0000".into()).unwrap();
    m.select_service(Service::IdentidadeVisual);
    m.edit("deadline", "30 dias".into()).unwrap();
    m.edit("investment", "R$ 2.500 - R$ 5.000".into()).unwrap();
    m
}

#[test]
fn walks_forward_through_all_steps() {
    let mut m = filled_machine();
    assert_eq!(m.step(), Step::Identification);
    assert_eq!(m.next().unwrap(), Step::BrandContext);
    assert_eq!(m.next().unwrap(), Step::ProjectScope);
    assert_eq!(m.next().unwrap(), Step::Aesthetics);
    assert_eq!(m.next().unwrap(), Step::Logistics);
    // Already at the last step: no further movement.
    assert_eq!(m.next().unwrap(), Step::Logistics);
}

#[test]
fn project_step_refuses_next_without_service() {
    let mut m = FormStateMachine::new();
    m.next().unwrap();
    m.next().unwrap();
    assert_eq!(m.step(), Step::ProjectScope);

    assert_eq!(m.next(), Err(WizardError::ServiceRequired));
    assert_eq!(m.step(), Step::ProjectScope);

    m.select_service(Service::SocialDesign);
    assert_eq!(m.record().service, "Social Design");
    assert_eq!(m.next().unwrap(), Step::Aesthetics);
}

#[test]
fn earlier_steps_carry_no_forward_gate() {
    // Step 1 and 2 advance even with a completely blank record.
    let mut m = FormStateMachine::new();
    assert_eq!(m.next().unwrap(), Step::BrandContext);
    assert_eq!(m.next().unwrap(), Step::ProjectScope);
}

#[test]
fn prev_saturates_at_first_step() {
    let mut m = FormStateMachine::new();
    assert_eq!(m.prev(), Step::Identification);
    m.next().unwrap();
    assert_eq!(m.prev(), Step::Identification);
}

#[test]
fn edits_are_keyed_by_form_name() {
    let mut m = FormStateMachine::new();
    m.edit("brandName", "Café Aurora".into()).unwrap();
    m.edit("isRedesign", "Criação do Zero".into()).unwrap();
    assert_eq!(m.record().brand_name, "Café Aurora");
    assert_eq!(m.record().is_redesign, "Criação do Zero");

    let err = m.edit("favoriteColor", "blue".into()).unwrap_err();
    assert_eq!(err, WizardError::UnknownField("favoriteColor".into()));
}

#[test]
fn edits_do_not_move_the_step() {
    let mut m = FormStateMachine::new();
    m.edit("history", "Nascemos em 2020...".into()).unwrap();
    assert_eq!(m.step(), Step::Identification);
}

#[test]
fn submission_only_from_logistics() {
    let m = filled_machine();
    assert_eq!(m.submission(), Err(WizardError::NotAtLogistics));
}

#[test]
fn submission_requires_deadline_and_investment() {
    let mut m = filled_machine();
    while m.step() != Step::Logistics {
        m.next().unwrap();
    }
    m.edit("deadline", String::new()).unwrap();
    assert_eq!(m.submission(), Err(WizardError::LogisticsIncomplete));

    m.edit("deadline", "até março".into()).unwrap();
    let record = m.submission().unwrap();
    assert_eq!(record.deadline, "até março");
    // The machine keeps its own copy untouched.
    assert_eq!(m.record().deadline, "até março");
}

#[test]
fn reset_discards_the_session() {
    let mut m = filled_machine();
    m.next().unwrap();
    m.reset();
    assert_eq!(m.step(), Step::Identification);
    assert_eq!(*m.record(), BriefingRecord::default());
}

#[test]
fn record_serializes_with_form_field_names() {
    let mut record = BriefingRecord::default();
    record.set_field("brandName", "Estúdio Sol".into()).unwrap();
    let json = serde_json::to_string(&record).unwrap();
    assert!(json.contains("\"brandName\":\"Estúdio Sol\""));
    assert!(json.contains("\"isRedesign\":\"\""));

    let back: BriefingRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(back, record);
}

#[test]
fn service_selection_by_code_matches_offering_list() {
    for (i, s) in Service::ALL.iter().enumerate() {
        assert_eq!(Service::select_service(i as u8).unwrap(), *s);
    }
    assert!(Service::select_service(6).is_err());
    assert_eq!(Service::IdentidadeVisual.label(), "Identidade Visual");
    assert_eq!(ProjectStatus::Redesign.label(), "Redesign / Modernização");
    assert_eq!(INVESTMENT_RANGES.len(), 4);
}
