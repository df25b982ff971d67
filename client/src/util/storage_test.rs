use super::*;

#[test]
fn helpers_are_inert_without_browser_storage() {
    save_raw("arena_console_test", "value");
    assert_eq!(load_raw("arena_console_test"), None);
    remove("arena_console_test");
    assert_eq!(load_raw("arena_console_test"), None);
}
