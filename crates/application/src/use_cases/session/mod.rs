mod command;
mod handle_query;
mod reply;

pub use command::{CommandError, SessionCommand};
pub use handle_query::HandleQueryUseCase;
pub use reply::SessionReply;

/// Written once when a session opens.
pub const BANNER: &str = "\
------------------------------------------------------
| Welcome to the FATCAT DNS                          |
| We have the most secure DNS service of the world!  |
------------------------------------------------------";

pub const PROMPT: &str = "Provide a query in the form \"<domain> <record_type>\": ";

pub const FAREWELL: &str = "No input. Goodbye!";
