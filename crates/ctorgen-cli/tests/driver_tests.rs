use super::*;
use crate::config::DEFAULT_CONFIG_FILE;
use clap::Parser;

const SNAPSHOT: &str = r#"
{
  "types": [
    {
      "name": "Person",
      "kind": "class",
      "members": [
        { "name": "Name", "type": "string", "kind": "property", "declarationOrder": 0 },
        { "name": "Age", "type": "int", "kind": "field", "declarationOrder": 1 }
      ],
      "constructors": [
        { "declarationOrder": 0, "parameters": [ { "name": "name", "type": "string" } ], "assignedMembers": ["Name"] }
      ]
    },
    { "name": "Tools", "kind": "class", "isStatic": true }
  ]
}
"#;

fn workspace() -> tempfile::TempDir {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("types.json"), SNAPSHOT).expect("write snapshot");
    dir
}

fn args(extra: &[&str]) -> CliArgs {
    let mut argv = vec!["ctorgen", "types.json"];
    argv.extend_from_slice(extra);
    CliArgs::try_parse_from(argv).expect("args should parse")
}

#[test]
fn plans_all_members_by_default() {
    let dir = workspace();
    let report = run(&args(&["--type", "Person"]), dir.path()).expect("run succeeds");

    assert_eq!(report.type_name, "Person");
    let kinds: Vec<&str> = report.plans.iter().map(Plan::kind).collect();
    assert_eq!(kinds, vec!["fieldAssign", "delegateThenAssign"]);
    assert_eq!(report.plans[0].parameter_names(), vec!["name", "age"]);
}

#[test]
fn explicit_members_keep_order() {
    let dir = workspace();
    let report = run(&args(&["-t", "Person", "-m", "Age", "-m", "Name"]), dir.path())
        .expect("run succeeds");
    assert_eq!(report.plans[0].parameter_names(), vec!["age", "name"]);
}

#[test]
fn exact_match_yields_empty_report() {
    let dir = workspace();
    let report = run(&args(&["-t", "Person", "-m", "Name"]), dir.path()).expect("run succeeds");
    assert!(report.plans.is_empty());
}

#[test]
fn static_type_yields_empty_report() {
    let dir = workspace();
    let report = run(&args(&["-t", "Tools"]), dir.path()).expect("run succeeds");
    assert!(report.plans.is_empty());
}

#[test]
fn config_file_in_cwd_is_applied() {
    let dir = workspace();
    std::fs::write(
        dir.path().join(DEFAULT_CONFIG_FILE),
        r#"{ "planner": { "offerDelegation": false } }"#,
    )
    .expect("write config");

    let report = run(&args(&["-t", "Person"]), dir.path()).expect("run succeeds");
    assert_eq!(report.plans.len(), 1);
}

#[test]
fn unknown_type_is_an_error() {
    let dir = workspace();
    let err = run(&args(&["-t", "Ghost"]), dir.path()).unwrap_err();
    let message = err.to_string();
    assert!(message.contains("type 'Ghost' not found"), "got {message}");
    assert!(message.contains("(available: Person, Tools)"), "got {message}");
}

#[test]
fn unknown_type_in_empty_catalog_lists_none() {
    let dir = tempfile::tempdir().expect("tempdir");
    std::fs::write(dir.path().join("types.json"), r#"{ "types": [] }"#).expect("write snapshot");
    let err = run(&args(&["-t", "Person"]), dir.path()).unwrap_err();
    assert!(err.to_string().contains("(available: none)"), "got {err}");
}

#[test]
fn unknown_member_is_an_error() {
    let dir = workspace();
    let err = run(&args(&["-t", "Person", "-m", "Nickname"]), dir.path()).unwrap_err();
    assert!(format!("{err:#}").contains("Nickname"), "got {err:#}");
}

#[test]
fn missing_snapshot_is_an_error() {
    let dir = tempfile::tempdir().expect("tempdir");
    let err = run(&args(&["-t", "Person"]), dir.path()).unwrap_err();
    assert!(err.to_string().contains("failed to read snapshot"), "got {err}");
}
