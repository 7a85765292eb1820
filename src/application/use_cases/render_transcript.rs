use crate::domain::History;

/// Render the history top to bottom, one line per turn, each prefixed with
/// the author's label (`You:` / `Assistant:`).
///
/// Pure: the output depends only on the history's contents.
pub fn render_transcript(history: &History) -> Vec<String> {
    history
        .turns()
        .iter()
        .map(|turn| format!("{}: {}", turn.role().label(), turn.content()))
        .collect()
}
