mod answer;
mod record_kind;
mod response_status;

pub use answer::{Answer, MAX_TEXT_LEN};
pub use record_kind::RecordKind;
pub use response_status::ResponseStatus;
