pub mod recipe;
pub mod search_record;
pub mod suggestion_request;

pub use recipe::*;
pub use search_record::*;
pub use suggestion_request::*;
