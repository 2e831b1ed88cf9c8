pub mod commands;
pub mod handlers;
use crate::error::Error;

// Re-export commonly used items
pub use commands::GenerateArgs;
pub use handlers::handle_generate_command;

pub fn format_error(error: &Error) -> String {
    match error {
        Error::Io(err) => format!("IO error: {err}"),
        Error::Walk(err) => format!("Traversal error: {err}"),
        Error::Traversal { path, source } => {
            format!("Traversal error: {}: {source}", path.display())
        }
        Error::BrokenSymlink { path } => {
            format!("Traversal error: stat {}: broken symlink", path.display())
        }
        Error::ContextParse(msg) => format!("Context parse error: {msg}"),
        Error::Validation(msg) => format!("Validation error: {msg}"),
        Error::Serialization(msg) => format!("Serialization error: {msg}"),
        Error::Write { path, source } => {
            format!("Failed to write provenance to {}: {source}", path.display())
        }
        Error::InitializationError(msg) => format!("Initialization error: {msg}"),
    }
}
