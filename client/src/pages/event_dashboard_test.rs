use super::*;
use leptos::reactive::owner::Owner;

use crate::net::types::Assignment;

fn assignment(event_id: &str, role_id: &str, points: i64) -> Assignment {
    Assignment { id: None, event_id: event_id.to_owned(), role_id: role_id.to_owned(), points }
}

fn member(id: &str, name: &str, assignments: Vec<Assignment>) -> Faculty {
    Faculty { id: id.to_owned(), name: name.to_owned(), assignments }
}

fn role(id: &str, name: &str) -> EventRole {
    EventRole { id: id.to_owned(), name: name.to_owned() }
}

// =============================================================
// assignment_rows
// =============================================================

#[test]
fn rows_only_include_current_event() {
    let faculty = vec![
        member("f1", "Dr. Rao", vec![assignment("e1", "r1", 5), assignment("e2", "r1", 3)]),
        member("f2", "Dr. Iyer", vec![assignment("e2", "r2", 1)]),
    ];
    let rows = assignment_rows(&faculty, &[role("r1", "Judge")], "e1");
    assert_eq!(
        rows,
        vec![AssignmentRow {
            key: "f1-0".to_owned(),
            assignment_id: None,
            faculty_id: "f1".to_owned(),
            faculty_name: "Dr. Rao".to_owned(),
            role_id: "r1".to_owned(),
            role_label: "Judge".to_owned(),
            points: 5,
        }]
    );
}

#[test]
fn rows_fall_back_to_role_id_when_role_unknown() {
    let faculty = vec![member("f1", "Dr. Rao", vec![assignment("e1", "r9", 2)])];
    let rows = assignment_rows(&faculty, &[role("r1", "Judge")], "e1");
    assert_eq!(rows[0].role_label, "r9");
}

#[test]
fn rows_keep_multiple_assignments_per_member_with_distinct_keys() {
    let faculty = vec![member("f1", "Dr. Rao", vec![assignment("e1", "r1", 1), assignment("e1", "r2", 2)])];
    let rows = assignment_rows(&faculty, &[], "e1");
    let keys: Vec<_> = rows.iter().map(|r| r.key.as_str()).collect();
    assert_eq!(keys, ["f1-0", "f1-1"]);
}

#[test]
fn rows_empty_when_nobody_assigned() {
    let faculty = vec![member("f1", "Dr. Rao", Vec::new())];
    assert!(assignment_rows(&faculty, &[], "e1").is_empty());
}

// =============================================================
// Form helpers
// =============================================================

#[test]
fn parse_points_behaves_like_integer_field() {
    assert_eq!(parse_points("12"), 12);
    assert_eq!(parse_points(" 7 "), 7);
    assert_eq!(parse_points(""), 0);
    assert_eq!(parse_points("abc"), 0);
    assert_eq!(parse_points("-4"), 0);
}

#[test]
fn build_assignment_requires_faculty_and_role() {
    assert_eq!(build_assignment("", "r1", "3"), Err(MISSING_ASSIGNMENT_FIELDS_MESSAGE));
    assert_eq!(build_assignment("f1", "", "3"), Err(MISSING_ASSIGNMENT_FIELDS_MESSAGE));
    assert_eq!(
        build_assignment("f1", "r1", "3"),
        Ok(AssignmentRequest { faculty_id: "f1".to_owned(), role_id: "r1".to_owned(), points: 3 })
    );
}

#[test]
fn rows_carry_assignment_id_for_removal() {
    let mut stored = assignment("e1", "r1", 4);
    stored.id = Some("a9".to_owned());
    let rows = assignment_rows(&[member("f1", "Dr. Rao", vec![stored])], &[], "e1");
    assert_eq!(
        build_removal(&rows[0]),
        Some(RemoveAssignmentRequest { assignment_id: "a9".to_owned(), deduct_points: true })
    );
}

#[test]
fn rows_without_id_cannot_be_removed() {
    let rows = assignment_rows(&[member("f1", "Dr. Rao", vec![assignment("e1", "r1", 4)])], &[], "e1");
    assert_eq!(build_removal(&rows[0]), None);
}

#[test]
fn date_only_strips_time_component() {
    assert_eq!(date_only("2025-03-01T09:30:00Z"), "2025-03-01");
    assert_eq!(date_only("2025-03-01"), "2025-03-01");
    assert_eq!(date_only(""), "");
}

#[test]
fn second_request_is_refused_while_first_is_pending() {
    Owner::new().with(|| {
        let busy = RwSignal::new(false);
        assert!(begin_request(busy));
        assert!(busy.get_untracked());
        assert!(!begin_request(busy));

        busy.set(false);
        assert!(begin_request(busy));
    });
}
