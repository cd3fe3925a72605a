use crate::Route;

#[test]
fn test_parse_drops_empty_segments() {
    assert_eq!(Route::parse("/schools/1/"), Route::parse("schools/1"));
    assert_eq!(Route::parse("//schools//1"), Route::parse("/schools/1"));
}

#[test]
fn test_path_round_trip() {
    let route = Route::parse("/schools/1/students");
    assert_eq!(route.path(), "/schools/1/students");
    assert_eq!(route.to_string(), "/schools/1/students");
}

#[test]
fn test_root_is_empty() {
    assert!(Route::root().segments().is_empty());
    assert_eq!(Route::root().path(), "/");
}

#[test]
fn test_named_routes() {
    assert_eq!(Route::login().path(), "/login");
    assert_eq!(Route::forbidden().path(), "/forbidden");
    assert_eq!(Route::schools().path(), "/schools");
    assert_eq!(Route::school_dashboard("7").path(), "/schools/7/dashboard");
}
