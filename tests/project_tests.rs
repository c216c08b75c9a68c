use std::fs;

use routegen::{add_route, scaffold_routes_file, AddRouteError, InsertOutcome, RouteConfig};

#[test]
fn test_scaffold_then_add_route() {
    let dir = tempfile::tempdir().unwrap();
    let routes_path = dir.path().join("internal/web/routes.go");

    scaffold_routes_file(&routes_path, "web", "example.com/app/internal/routes", false)
        .expect("scaffold routes file");

    let content = fs::read_to_string(&routes_path).unwrap();
    assert!(content.starts_with("package web\n"));
    assert!(content.contains("\"example.com/app/internal/routes\""));
    assert!(content.contains("\t/* insert new routes here */"));

    let config = RouteConfig::derive("get", "/users/:id");
    let outcome = add_route(&routes_path, &config).expect("add route");
    assert_eq!(outcome, InsertOutcome::Inserted);

    let content = fs::read_to_string(&routes_path).unwrap();
    assert!(content.contains("e.GET(\"/users/:id\", routes.Users).Name = \"users\";"));
}

#[test]
fn test_add_route_twice_is_a_noop() {
    let dir = tempfile::tempdir().unwrap();
    let routes_path = dir.path().join("routes.go");

    scaffold_routes_file(&routes_path, "web", "example.com/app/internal/routes", false).unwrap();

    let config = RouteConfig::derive("post", "/users");
    add_route(&routes_path, &config).unwrap();
    let after_first = fs::read_to_string(&routes_path).unwrap();

    let outcome = add_route(&routes_path, &config).unwrap();
    assert_eq!(outcome, InsertOutcome::AlreadyRegistered);
    assert_eq!(fs::read_to_string(&routes_path).unwrap(), after_first);
}

#[test]
fn test_add_route_without_marker_fails() {
    let dir = tempfile::tempdir().unwrap();
    let routes_path = dir.path().join("routes.go");
    fs::write(&routes_path, "package web\n\nfunc addRoutes(e *echo.Echo) {\n}\n").unwrap();

    let config = RouteConfig::derive("get", "/users");
    let err = add_route(&routes_path, &config).unwrap_err();
    let err = err.downcast::<AddRouteError>().expect("typed error");
    assert!(matches!(err, AddRouteError::MarkerNotFound { .. }));

    // Nothing was written back.
    let content = fs::read_to_string(&routes_path).unwrap();
    assert!(!content.contains("routes.Users"));
}

#[test]
fn test_add_route_with_param_only_path_fails() {
    let dir = tempfile::tempdir().unwrap();
    let routes_path = dir.path().join("routes.go");
    scaffold_routes_file(&routes_path, "web", "example.com/app/internal/routes", false).unwrap();

    let config = RouteConfig::derive("get", "/:id");
    let err = add_route(&routes_path, &config).unwrap_err();
    let err = err.downcast::<AddRouteError>().expect("typed error");
    assert_eq!(
        err,
        AddRouteError::MalformedPath {
            path: "/:id".to_string()
        }
    );
}

#[test]
fn test_scaffold_does_not_clobber_without_force() {
    let dir = tempfile::tempdir().unwrap();
    let routes_path = dir.path().join("routes.go");
    fs::write(&routes_path, "hand edited\n").unwrap();

    scaffold_routes_file(&routes_path, "web", "example.com/app/internal/routes", false).unwrap();
    assert_eq!(fs::read_to_string(&routes_path).unwrap(), "hand edited\n");

    scaffold_routes_file(&routes_path, "web", "example.com/app/internal/routes", true).unwrap();
    assert!(fs::read_to_string(&routes_path)
        .unwrap()
        .starts_with("package web\n"));
}
