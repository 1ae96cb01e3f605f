//! Harness error type: wraps every lower layer's failure.

use crafter_kernel::carrier::catalog::CatalogError;
use crafter_kernel::operators::recipe::CompileFailure;
use crafter_search::error::SearchError;
use crafter_search::replay::ReplayFailure;

use crate::definition::DefinitionError;

/// Error during problem compilation or a planning run.
///
/// Running out of time is not an error; it is reported through the run's
/// termination reason.
#[derive(Debug)]
pub enum HarnessError {
    /// The definition could not be loaded or parsed.
    Definition(DefinitionError),
    /// The item catalog is malformed.
    Catalog(CatalogError),
    /// A recipe, goal, initial inventory or heuristic table failed to compile.
    Compile(CompileFailure),
    /// The search policy is invalid.
    Search(SearchError),
    /// A plan returned by the search failed replay (a search bug).
    Replay(ReplayFailure),
    /// `HeuristicInputV1::FromDefinition` on a definition without tables.
    MissingHeuristic,
}

impl std::fmt::Display for HarnessError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Definition(e) => write!(f, "{e}"),
            Self::Catalog(e) => write!(f, "catalog error: {e}"),
            Self::Compile(e) => write!(f, "compile error: {e}"),
            Self::Search(e) => write!(f, "search error: {e}"),
            Self::Replay(e) => write!(f, "plan failed replay: {e}"),
            Self::MissingHeuristic => {
                write!(f, "definition has no Heuristic section to build a pruning table from")
            }
        }
    }
}

impl std::error::Error for HarnessError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Definition(e) => Some(e),
            Self::Catalog(e) => Some(e),
            Self::Compile(e) => Some(e),
            Self::Search(e) => Some(e),
            Self::Replay(e) => Some(e),
            Self::MissingHeuristic => None,
        }
    }
}

impl From<DefinitionError> for HarnessError {
    fn from(e: DefinitionError) -> Self {
        Self::Definition(e)
    }
}

impl From<CatalogError> for HarnessError {
    fn from(e: CatalogError) -> Self {
        Self::Catalog(e)
    }
}

impl From<CompileFailure> for HarnessError {
    fn from(e: CompileFailure) -> Self {
        Self::Compile(e)
    }
}

impl From<SearchError> for HarnessError {
    fn from(e: SearchError) -> Self {
        Self::Search(e)
    }
}

impl From<ReplayFailure> for HarnessError {
    fn from(e: ReplayFailure) -> Self {
        Self::Replay(e)
    }
}
