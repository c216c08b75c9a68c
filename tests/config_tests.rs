use routegen::generator::to_pascal_case;
use routegen::RouteConfig;

#[test]
fn test_to_pascal_case() {
    assert_eq!(to_pascal_case("users"), "Users");
    assert_eq!(to_pascal_case("oauth-complete"), "OauthComplete");
    assert_eq!(to_pascal_case("my_segment"), "MySegment");
    assert_eq!(to_pascal_case(""), "");
}

#[test]
fn test_method_is_uppercased() {
    assert_eq!(RouteConfig::derive("get", "/users").method, "GET");
    assert_eq!(RouteConfig::derive("Post", "/users").method, "POST");
    assert_eq!(RouteConfig::derive("patch", "/users").method, "PATCH");
}

#[test]
fn test_get_with_param() {
    let config = RouteConfig::derive("get", "/users/:id");
    assert_eq!(config.method, "GET");
    assert_eq!(config.path, "/users/:id");
    assert_eq!(config.route_filename, "users.[id]");
    assert_eq!(config.func_name, "Users");
    assert_eq!(config.reverse_name, "users");
}

#[test]
fn test_post_suffixes() {
    let config = RouteConfig::derive("post", "/users");
    assert_eq!(config.route_filename, "users.POST");
    assert_eq!(config.func_name, "UsersCreate");
    assert_eq!(config.reverse_name, "users");
}

#[test]
fn test_delete_suffixes() {
    let config = RouteConfig::derive("delete", "/users/:id");
    assert_eq!(config.route_filename, "users.[id].DELETE");
    assert_eq!(config.func_name, "UsersDelete");
    assert_eq!(config.reverse_name, "users");
}

#[test]
fn test_nested_path_with_multiple_params() {
    let config = RouteConfig::derive("get", "/plugin/:hash/oauth/complete");
    assert_eq!(config.route_filename, "plugin.[hash].oauth.complete");
    assert_eq!(config.func_name, "PluginOauthComplete");
    assert_eq!(config.reverse_name, "plugin.oauth.complete");
}

#[test]
fn test_relative_path_is_equivalent() {
    // Exactly one leading slash is stripped before segmentation.
    let absolute = RouteConfig::derive("get", "/users/:id");
    let relative = RouteConfig::derive("get", "users/:id");
    assert_eq!(absolute.route_filename, relative.route_filename);
    assert_eq!(absolute.func_name, relative.func_name);
    assert_eq!(absolute.reverse_name, relative.reverse_name);
    // The original path is kept verbatim.
    assert_eq!(relative.path, "users/:id");
}

#[test]
fn test_unrecognized_method_gets_no_suffix() {
    let config = RouteConfig::derive("brew", "/coffee");
    assert_eq!(config.method, "BREW");
    assert_eq!(config.route_filename, "coffee");
    assert_eq!(config.func_name, "Coffee");
}

#[test]
fn test_param_only_path_is_degenerate_but_defined() {
    let config = RouteConfig::derive("get", "/:id");
    assert_eq!(config.route_filename, "[id]");
    assert_eq!(config.func_name, "");
    assert_eq!(config.reverse_name, "");
}

#[test]
fn test_empty_path() {
    let config = RouteConfig::derive("get", "");
    assert_eq!(config.method, "GET");
    assert_eq!(config.route_filename, "");
    assert_eq!(config.func_name, "");
    assert_eq!(config.reverse_name, "");
}

#[test]
fn test_config_serializes_to_json() {
    let config = RouteConfig::derive("post", "/users");
    let json = serde_json::to_value(&config).unwrap();
    assert_eq!(json["method"], "POST");
    assert_eq!(json["func_name"], "UsersCreate");
    assert_eq!(json["reverse_name"], "users");
}
