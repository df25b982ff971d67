use super::*;

#[test]
fn build_new_event_trims_fields() {
    let event = build_new_event(" Expo ", " Annual expo ", "2025-03-01", " 2025-03-02 ").unwrap();
    assert_eq!(
        event,
        NewEvent {
            event_name: "Expo".to_owned(),
            event_description: "Annual expo".to_owned(),
            start_date: "2025-03-01".to_owned(),
            end_date: "2025-03-02".to_owned(),
        }
    );
}

#[test]
fn build_new_event_allows_blank_description() {
    assert!(build_new_event("Expo", "", "2025-03-01", "2025-03-02").is_ok());
}

#[test]
fn build_new_event_requires_name_and_dates() {
    assert_eq!(build_new_event(" ", "d", "2025-03-01", "2025-03-02"), Err(MISSING_EVENT_FIELDS_MESSAGE));
    assert_eq!(build_new_event("Expo", "d", "", "2025-03-02"), Err(MISSING_EVENT_FIELDS_MESSAGE));
    assert_eq!(build_new_event("Expo", "d", "2025-03-01", ""), Err(MISSING_EVENT_FIELDS_MESSAGE));
}
