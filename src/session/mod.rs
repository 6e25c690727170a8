pub mod session;

pub use session::{Query, Session};
