use super::config::RouteConfig;

/// Marker comment that routes files carry at the end of their registration
/// block. Matching is suffix-based because the file indents the comment.
pub const ROUTE_MARKER: &str = "/* insert new routes here */";

/// What `insert_route` did with the content
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InsertOutcome {
    /// One registration line was spliced in before the marker
    Inserted,
    /// A registration for this method+path already exists; content unchanged
    AlreadyRegistered,
    /// Neither an existing registration nor the marker was found
    MarkerNotFound,
}

/// Render the Echo registration line for a route config
///
/// The exact shape of this line is shared with the generated Go source
/// ecosystem and must not drift.
pub fn registration_line(config: &RouteConfig) -> String {
    format!(
        "e.{}(\"{}\", routes.{}).Name = \"{}\";",
        config.method, config.path, config.func_name, config.reverse_name
    )
}

/// Substring that identifies an existing registration for this method+path
pub fn registration_signature(config: &RouteConfig) -> String {
    format!("e.{}(\"{}\"", config.method, config.path)
}

/// Splice a registration line into a routes file's content
///
/// Scans the lines in order. If any line already contains the registration
/// signature for `config`, nothing is inserted. Otherwise the generated line
/// is emitted immediately before the first line ending in [`ROUTE_MARKER`].
/// At most one line is ever inserted, so the operation is idempotent.
///
/// All original lines are preserved in order. Every line (original and
/// generated) is newline-terminated on output, which adds a final newline to
/// content that lacked one.
pub fn insert_route(content: &str, config: &RouteConfig) -> (String, InsertOutcome) {
    let signature = registration_signature(config);
    let mut out = String::with_capacity(content.len() + 96);
    let mut already_registered = false;
    let mut inserted = false;

    for line in content.lines() {
        if line.contains(&signature) {
            already_registered = true;
        }
        if !already_registered && !inserted && line.ends_with(ROUTE_MARKER) {
            out.push_str(&registration_line(config));
            out.push('\n');
            inserted = true;
        }
        out.push_str(line);
        out.push('\n');
    }

    let outcome = if inserted {
        InsertOutcome::Inserted
    } else if already_registered {
        InsertOutcome::AlreadyRegistered
    } else {
        InsertOutcome::MarkerNotFound
    };
    (out, outcome)
}
