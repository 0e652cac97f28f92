use super::*;
use ctorgen_core::{
    CancellationToken, Constructor, Member, TypeDescriptor, plan_constructors,
};

fn report_for(ty: &TypeDescriptor) -> PlanReport {
    PlanReport {
        type_name: ty.name.clone(),
        plans: plan_constructors(ty, &[], &CancellationToken::none()).expect("not cancelled"),
    }
}

fn person() -> TypeDescriptor {
    TypeDescriptor::class("Person")
        .with_member(Member::field("Name", "string", 0))
        .with_member(Member::field("Age", "int", 1))
        .with_constructor(
            Constructor::new(0)
                .with_parameter("name", "string")
                .assigning("Name"),
        )
}

#[test]
fn renders_plain_text() {
    let text = Reporter::new(false).render(&report_for(&person()));
    let expected = "\
Generate constructor 'Person(string, int)'
    Name = name
    Age = age
Generate delegating constructor 'Person(string, int)'
    this(name)  // constructor #0 (string)
    Age = age";
    assert_eq!(text, expected);
}

#[test]
fn renders_delegate_call_in_delegate_parameter_order() {
    let ty = TypeDescriptor::class("Person")
        .with_member(Member::field("Name", "string", 0))
        .with_member(Member::field("Age", "int", 1))
        .with_member(Member::field("Email", "string", 2))
        .with_constructor(
            Constructor::new(0)
                .with_parameter("age", "int")
                .with_parameter("name", "string")
                .assigning("Age")
                .assigning("Name"),
        );
    let text = Reporter::new(false).render(&report_for(&ty));
    assert!(
        text.contains("\n    this(age, name)  // constructor #0 (int, string)\n    Email = email"),
        "unexpected output:\n{text}"
    );
}

#[test]
fn renders_default_for_unbound_delegate_parameter() {
    let ty = TypeDescriptor::class("Person")
        .with_member(Member::field("Name", "string", 0))
        .with_member(Member::field("Age", "int", 1))
        .with_constructor(
            Constructor::new(0)
                .with_parameter("name", "string")
                .with_parameter("flags", "long")
                .assigning("Name"),
        );
    let text = Reporter::new(false).render(&report_for(&ty));
    assert!(
        text.contains("this(name, default)  // constructor #0 (string, long)"),
        "unexpected output:\n{text}"
    );
}

#[test]
fn renders_no_param_plan() {
    let text = Reporter::new(false).render(&report_for(&TypeDescriptor::class("Marker")));
    assert_eq!(text, "Generate constructor 'Marker()'");
}

#[test]
fn renders_empty_report() {
    let report = PlanReport {
        type_name: "Person".to_string(),
        plans: Vec::new(),
    };
    assert_eq!(
        Reporter::new(false).render(&report),
        "No constructors to generate for 'Person'."
    );
}

#[test]
fn renders_json_with_titles() {
    let json = render_json(&report_for(&person())).expect("json renders");
    let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");

    assert_eq!(value["typeName"], "Person");
    let plans = value["plans"].as_array().expect("plans array");
    assert_eq!(plans.len(), 2);
    assert_eq!(plans[0]["kind"], "fieldAssign");
    assert_eq!(plans[0]["title"], "Generate constructor 'Person(string, int)'");
    assert_eq!(plans[1]["kind"], "delegateThenAssign");
    assert_eq!(plans[1]["delegate"]["declarationOrder"], 0);
    assert_eq!(plans[1]["delegateArguments"][0]["position"], 0);
    assert_eq!(plans[1]["delegateArguments"][0]["delegateParameter"], "name");
    assert_eq!(plans[1]["delegateArguments"][0]["parameter"], "name");
    assert_eq!(plans[1]["residual"][0]["member"], "Age");
}
