use serde::Serialize;

use super::{Prompt, Role, Turn};

/// Ordered log of turns for one session.
///
/// The only way to grow a history is [`History::append_exchange`], which adds a
/// user turn and its assistant answer together, so the log is always a run of
/// complete user/assistant pairs in submission order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct History {
    turns: Vec<Turn>,
}

impl History {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn append_exchange(&mut self, prompt: &Prompt, answer: impl Into<String>) {
        self.turns.reserve(2);
        self.turns.push(Turn::user(prompt.as_str()));
        self.turns.push(Turn::assistant(answer));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    /// Number of completed user/assistant exchanges.
    pub fn exchanges(&self) -> usize {
        self.turns
            .iter()
            .filter(|turn| turn.role() == Role::User)
            .count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn append_exchange_adds_user_then_assistant() {
        let mut history = History::new();
        let prompt = Prompt::parse("hi").unwrap();

        history.append_exchange(&prompt, "hello");

        assert_eq!(history.len(), 2);
        assert_eq!(history.turns()[0], Turn::user("hi"));
        assert_eq!(history.turns()[1], Turn::assistant("hello"));
        assert_eq!(history.exchanges(), 1);
    }

    #[test]
    fn exchanges_keep_submission_order() {
        let mut history = History::new();
        history.append_exchange(&Prompt::parse("first").unwrap(), "one");
        history.append_exchange(&Prompt::parse("second").unwrap(), "two");

        let contents: Vec<&str> = history.turns().iter().map(|t| t.content()).collect();
        assert_eq!(contents, vec!["first", "one", "second", "two"]);
    }
}
