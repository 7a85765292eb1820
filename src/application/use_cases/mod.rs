mod ask_question;
mod render_transcript;
mod submit_prompt;

pub use ask_question::*;
pub use render_transcript::*;
pub use submit_prompt::*;
