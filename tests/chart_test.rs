//! Tests for OrgChart construction, inspection, and the move contract

use orgtree::{DomainError, EmployeeRecord, OrgChart};
use rstest::{fixture, rstest};

// 1 CEO
// ├── 2 CTO
// │   └── 4 Dev
// └── 3 CFO
#[fixture]
fn company() -> OrgChart {
    OrgChart::new(EmployeeRecord::new(1, "CEO").with_subordinates(vec![
        EmployeeRecord::new(2, "CTO").with_subordinates(vec![EmployeeRecord::new(4, "Dev")]),
        EmployeeRecord::new(3, "CFO"),
    ]))
}

fn subordinate_ids(chart: &OrgChart, id: u32) -> Vec<u32> {
    chart
        .subordinates(id)
        .unwrap()
        .iter()
        .map(|e| e.id)
        .collect()
}

// ============================================================
// Construction Tests
// ============================================================

#[rstest]
fn given_nested_record_when_constructing_then_indexes_every_employee(company: OrgChart) {
    assert_eq!(company.headcount(), 4);
    assert_eq!(company.depth(), 3);
    for id in [1, 2, 3, 4] {
        assert!(company.contains(id), "employee {} should be indexed", id);
    }
    assert!(!company.contains(9999));
}

#[rstest]
fn given_constructed_chart_when_reading_root_then_returns_top_of_hierarchy(company: OrgChart) {
    let root = company.root().unwrap();
    assert_eq!(root.id, 1);
    assert_eq!(root.name, "CEO");
}

#[rstest]
fn given_constructed_chart_when_iterating_then_visits_preorder_root_first(company: OrgChart) {
    let ids: Vec<u32> = company.iter().map(|e| e.id).collect();
    assert_eq!(ids, vec![1, 2, 4, 3]);
}

#[rstest]
fn given_constructed_chart_when_snapshotting_then_round_trips_the_input(company: OrgChart) {
    let expected = EmployeeRecord::new(1, "CEO").with_subordinates(vec![
        EmployeeRecord::new(2, "CTO").with_subordinates(vec![EmployeeRecord::new(4, "Dev")]),
        EmployeeRecord::new(3, "CFO"),
    ]);
    assert_eq!(company.to_record(), Some(expected));
}

#[test]
fn given_duplicate_ids_when_constructing_then_later_entry_shadows_earlier() {
    // Duplicate ids are not rejected; the index silently points at the
    // node visited later in the traversal
    let chart = OrgChart::new(EmployeeRecord::new(1, "CEO").with_subordinates(vec![
        EmployeeRecord::new(2, "first"),
        EmployeeRecord::new(2, "second"),
    ]));

    assert_eq!(chart.headcount(), 3);
    assert_eq!(chart.employee(2).unwrap().name, "second");
}

// ============================================================
// Supervisor Lookup Tests
// ============================================================

#[rstest]
fn given_nested_employee_when_looking_up_supervisor_then_returns_parent(company: OrgChart) {
    assert_eq!(company.supervisor(4).unwrap().id, 2);
    assert_eq!(company.supervisor(2).unwrap().id, 1);
    assert_eq!(company.supervisor(3).unwrap().id, 1);
}

#[rstest]
fn given_root_when_looking_up_supervisor_then_fails_not_part_of_organization(company: OrgChart) {
    assert_eq!(company.supervisor(1), Err(DomainError::NoSupervisor(1)));
}

#[rstest]
fn given_unknown_id_when_looking_up_supervisor_then_fails_not_found(company: OrgChart) {
    assert_eq!(
        company.supervisor(9999),
        Err(DomainError::EmployeeNotFound(9999))
    );
}

#[rstest]
fn given_chart_when_listing_subordinates_then_preserves_insertion_order(company: OrgChart) {
    assert_eq!(subordinate_ids(&company, 1), vec![2, 3]);
    assert_eq!(subordinate_ids(&company, 2), vec![4]);
    assert!(subordinate_ids(&company, 4).is_empty());
}

// ============================================================
// Move Tests
// ============================================================

#[rstest]
fn given_valid_ids_when_moving_then_relinks_employee(mut company: OrgChart) {
    company.move_employee(4, 3).unwrap();

    assert_eq!(subordinate_ids(&company, 2), Vec::<u32>::new());
    assert_eq!(subordinate_ids(&company, 3), vec![4]);
    assert_eq!(company.supervisor(4).unwrap().id, 3);
    assert_eq!(company.headcount(), 4);
}

#[rstest]
fn given_move_when_attaching_then_appends_to_end_of_reports(mut company: OrgChart) {
    company.move_employee(4, 1).unwrap();
    assert_eq!(subordinate_ids(&company, 1), vec![2, 3, 4]);
}

#[rstest]
#[case::unknown_employee(9999, 1)]
#[case::unknown_supervisor(4, 9999)]
fn given_unknown_id_when_moving_then_fails_and_tree_is_unchanged(
    mut company: OrgChart,
    #[case] employee: u32,
    #[case] supervisor: u32,
) {
    let before = company.to_record();

    let unknown = if company.contains(employee) {
        supervisor
    } else {
        employee
    };
    assert_eq!(
        company.move_employee(employee, supervisor),
        Err(DomainError::EmployeeNotFound(unknown))
    );
    assert_eq!(company.to_record(), before);
    assert!(!company.can_undo(), "failed move must not be recorded");
}

#[rstest]
fn given_root_when_moving_then_fails_and_tree_is_unchanged(mut company: OrgChart) {
    let before = company.to_record();

    assert_eq!(
        company.move_employee(1, 3),
        Err(DomainError::NoSupervisor(1))
    );
    assert_eq!(company.to_record(), before);
    assert!(!company.can_undo());
}

#[rstest]
fn given_self_move_when_moving_then_child_stays_exactly_once(mut company: OrgChart) {
    company.move_employee(4, 2).unwrap();

    let reports = subordinate_ids(&company, 2);
    assert_eq!(reports, vec![4], "no duplication on self-move");
    assert!(company.can_undo(), "self-move is still recorded");
}

#[rstest]
fn given_moved_subtree_when_moving_then_reports_move_along(mut company: OrgChart) {
    // Moving the CTO moves the whole subtree: Dev stays attached
    company.move_employee(2, 3).unwrap();

    assert_eq!(subordinate_ids(&company, 3), vec![2]);
    assert_eq!(subordinate_ids(&company, 2), vec![4]);
    assert_eq!(company.supervisor(4).unwrap().id, 2);
}
