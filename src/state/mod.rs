pub mod preferences;
pub mod request_seq;
pub mod session;

pub use preferences::Preferences;
pub use request_seq::RequestSeq;
pub use session::{Session, SessionAction};
