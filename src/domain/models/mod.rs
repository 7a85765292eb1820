mod chat_model;
mod history;
mod prompt;
mod session;
mod turn;

pub use chat_model::*;
pub use history::*;
pub use prompt::*;
pub use session::*;
pub use turn::*;
