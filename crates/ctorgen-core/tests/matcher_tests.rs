use super::*;

fn selection(names: &[&str]) -> Selection {
    Selection::from_members(
        names
            .iter()
            .enumerate()
            .map(|(i, name)| Member::field(*name, "int", i as u32)),
    )
}

fn residual_names(result: &MatchResult<'_>) -> Vec<String> {
    match result {
        MatchResult::Delegatable { residual, .. } => {
            residual.iter().map(|m| m.name.clone()).collect()
        }
        other => panic!("expected delegation, got {other:?}"),
    }
}

#[test]
fn test_no_constructors_is_no_match() {
    let sel = selection(&["A", "B"]);
    let result = match_constructors(&sel, &[], &CancellationToken::none()).unwrap();
    assert_eq!(result, MatchResult::None);
}

#[test]
fn test_exact_match_ignores_order_and_duplicates() {
    let sel = selection(&["A", "B"]);
    let ctors = vec![Constructor::new(0).assigning("B").assigning("A").assigning("B")];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    assert_eq!(result, MatchResult::Exact(&ctors[0]));
    assert!(result.is_exact());
}

#[test]
fn test_exact_match_wins_over_earlier_delegation_candidate() {
    let sel = selection(&["A", "B"]);
    let ctors = vec![
        Constructor::new(0).assigning("A"),
        Constructor::new(1).assigning("A").assigning("B"),
    ];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    assert_eq!(result, MatchResult::Exact(&ctors[1]));
}

#[test]
fn test_delegates_to_largest_subset() {
    let sel = selection(&["A", "B", "C", "D"]);
    let ctors = vec![
        Constructor::new(0).assigning("A"),
        Constructor::new(1).assigning("B").assigning("C"),
        Constructor::new(2).assigning("D"),
    ];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    match &result {
        MatchResult::Delegatable { delegate, .. } => assert_eq!(*delegate, &ctors[1]),
        other => panic!("expected delegation, got {other:?}"),
    }
    assert_eq!(residual_names(&result), vec!["A", "D"]);
}

#[test]
fn test_tie_goes_to_earliest_declared_constructor() {
    let sel = selection(&["A", "B", "C"]);
    // Snapshot order differs from declaration order on purpose.
    let ctors = vec![
        Constructor::new(5).assigning("C"),
        Constructor::new(2).assigning("B"),
        Constructor::new(7).assigning("A"),
    ];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    match &result {
        MatchResult::Delegatable { delegate, .. } => assert_eq!(delegate.declaration_order, 2),
        other => panic!("expected delegation, got {other:?}"),
    }
    assert_eq!(residual_names(&result), vec!["A", "C"]);
}

#[test]
fn test_constructor_touching_unselected_member_is_ignored() {
    let sel = selection(&["A", "B"]);
    let ctors = vec![Constructor::new(0).assigning("A").assigning("Z")];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    assert_eq!(result, MatchResult::None);
}

#[test]
fn test_empty_assigned_set_never_delegates() {
    let sel = selection(&["A"]);
    let ctors = vec![Constructor::new(0).implicit()];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    assert_eq!(result, MatchResult::None);
}

#[test]
fn test_residual_follows_selection_order() {
    let sel = selection(&["C", "A", "B"]);
    let ctors = vec![Constructor::new(0).assigning("A")];
    let result = match_constructors(&sel, &ctors, &CancellationToken::none()).unwrap();
    assert_eq!(residual_names(&result), vec!["C", "B"]);
}

#[test]
fn test_cancelled_before_comparison() {
    let sel = selection(&["A", "B"]);
    let ctors = vec![Constructor::new(0).assigning("A")];
    let cancel = CancellationToken::new();
    cancel.cancel();
    assert_eq!(match_constructors(&sel, &ctors, &cancel), Err(Cancelled));
}
