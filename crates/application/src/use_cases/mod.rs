pub mod session;

pub use session::{CommandError, HandleQueryUseCase, SessionCommand, SessionReply};
