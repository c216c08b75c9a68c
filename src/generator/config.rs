use serde::Serialize;

/// Leading character marking a path segment as a path parameter (e.g. `:hash`).
pub const PARAM_SENTINEL: char = ':';

/// Route metadata derived from an HTTP method and a URL path pattern
///
/// Everything the scaffolding needs to name files, handler functions and
/// reverse-route lookups is computed up front from the two inputs. The value
/// is immutable once constructed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouteConfig {
    /// HTTP verb, always upper-cased (e.g. `GET`, `POST`)
    pub method: String,
    /// The path pattern exactly as supplied (e.g. `/plugin/:hash/oauth`)
    pub path: String,
    /// Dot-joined filename stem for the handler file (e.g. `plugin.[hash].oauth`)
    ///
    /// Parameter segments are rewritten from `:name` to `[name]`. POST and
    /// DELETE routes gain a `.POST` / `.DELETE` suffix so they do not collide
    /// with the GET handler for the same path.
    pub route_filename: String,
    /// Pascal-cased Go function name (e.g. `PluginOauth`, `UsersCreate`)
    pub func_name: String,
    /// Method-independent reverse-route name (e.g. `plugin.oauth`)
    pub reverse_name: String,
}

impl RouteConfig {
    /// Derive the full route config for a method and path pattern
    ///
    /// Total over its inputs: any method string is accepted (upper-cased as
    /// is), and degenerate paths produce degenerate but well-defined output.
    /// Callers that go on to write files should reject configs with an empty
    /// [`func_name`](Self::func_name); see `add_route`.
    ///
    /// # Example
    ///
    /// ```
    /// use routegen::RouteConfig;
    ///
    /// let config = RouteConfig::derive("get", "/users/:id");
    /// assert_eq!(config.method, "GET");
    /// assert_eq!(config.route_filename, "users.[id]");
    /// assert_eq!(config.func_name, "Users");
    /// assert_eq!(config.reverse_name, "users");
    /// ```
    pub fn derive(method: &str, path: &str) -> Self {
        let method = method.to_uppercase();
        let rel = path.strip_prefix('/').unwrap_or(path);
        let segments: Vec<&str> = rel.split('/').collect();

        let mut route_filename = segments
            .iter()
            .map(|seg| match seg.strip_prefix(PARAM_SENTINEL) {
                Some(name) => format!("[{name}]"),
                None => (*seg).to_string(),
            })
            .collect::<Vec<_>>()
            .join(".");

        let statics: Vec<&str> = segments
            .iter()
            .copied()
            .filter(|seg| !seg.starts_with(PARAM_SENTINEL))
            .collect();

        let mut func_name: String = statics.iter().map(|seg| to_pascal_case(seg)).collect();
        let reverse_name = statics.join(".");

        match method.as_str() {
            "POST" => {
                func_name.push_str("Create");
                route_filename.push_str(".POST");
            }
            "DELETE" => {
                func_name.push_str("Delete");
                route_filename.push_str(".DELETE");
            }
            // Unrecognized verbs pass through with no suffix.
            _ => {}
        }

        RouteConfig {
            method,
            path: path.to_string(),
            route_filename,
            func_name,
            reverse_name,
        }
    }
}

/// Convert a path segment to PascalCase
///
/// Non-alphanumeric characters act as word separators and are dropped.
///
/// # Example
///
/// ```rust,ignore
/// assert_eq!(to_pascal_case("oauth-complete"), "OauthComplete");
/// ```
pub fn to_pascal_case(s: &str) -> String {
    s.split(|c: char| !c.is_ascii_alphanumeric())
        .map(|w| {
            let mut chars = w.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
                None => String::new(),
            }
        })
        .collect()
}
