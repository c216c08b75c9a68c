use std::fmt;
use std::path::PathBuf;

/// Error adding a route registration to a routes file
///
/// Returned by `add_route` when the derived config cannot produce a valid
/// registration or the target file has nowhere to put one. Pure derivation
/// and splicing stay total; only the file-writing layer fails.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AddRouteError {
    /// The path has no static segments, so the handler function name is empty
    ///
    /// A registration line with an empty function name would not compile in
    /// the target source file, so it is rejected before writing.
    MalformedPath {
        /// The offending path pattern
        path: String,
    },
    /// The routes file does not contain the insertion marker comment
    MarkerNotFound {
        /// The file that was scanned
        file: PathBuf,
    },
}

impl fmt::Display for AddRouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AddRouteError::MalformedPath { path } => {
                write!(
                    f,
                    "Route path '{path}' has no static segments; the derived handler \
                    function name would be empty. Add at least one non-parameter segment."
                )
            }
            AddRouteError::MarkerNotFound { file } => {
                write!(
                    f,
                    "Routes file {file:?} does not contain the insertion marker \
                    '/* insert new routes here */'. Run `routegen init` to scaffold \
                    a routes file, or add the marker to the registration block."
                )
            }
        }
    }
}

impl std::error::Error for AddRouteError {}
