use std::io::Write;
use std::time::Duration;

use anyhow::Result;
use indicatif::{ProgressBar, ProgressStyle};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, BufReader};

use crate::{render_transcript, ChatModel, ChatSession};

use super::super::Container;

/// Terminal front-end over the same presenter cycle as the web page.
pub struct ChatController<'a> {
    container: &'a Container,
    show_spinner: bool,
}

impl<'a> ChatController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            container,
            show_spinner: true,
        }
    }

    pub fn without_spinner(mut self) -> Self {
        self.show_spinner = false;
        self
    }

    pub async fn chat(&self, model: String) -> Result<String> {
        let input = BufReader::new(tokio::io::stdin());
        let mut output = std::io::stdout();
        self.run(input, &mut output, model).await
    }

    /// Read prompts line by line until EOF or `/quit`.
    pub async fn run<R, W>(&self, input: R, output: &mut W, model: String) -> Result<String>
    where
        R: AsyncBufRead + Unpin,
        W: Write,
    {
        let model: ChatModel = model.parse()?;
        let use_case = self.container.submit_use_case();

        let mut session = ChatSession::new();
        session.set_selected_model(model);

        writeln!(
            output,
            "Groq Chat ({}). Type a question, /model <id> to switch, /quit to leave.",
            model
        )?;

        let mut lines = input.lines();
        loop {
            write!(output, "> ")?;
            output.flush()?;

            let Some(line) = lines.next_line().await? else {
                break;
            };

            let command = line.trim();
            if command == "/quit" || command == "/exit" {
                break;
            }
            if command == "/model" {
                writeln!(output, "Model: {}", session.selected_model())?;
                continue;
            }
            if let Some(id) = command.strip_prefix("/model ") {
                match id.parse::<ChatModel>() {
                    Ok(model) => {
                        session.set_selected_model(model);
                        writeln!(output, "Model: {}", model)?;
                    }
                    Err(e) => writeln!(output, "{}", e)?,
                }
                continue;
            }

            let model = session.selected_model();
            let Some(prompt) = use_case.begin(&mut session, &line, model) else {
                if let Some(banner) = session.banner() {
                    writeln!(output, "{}", banner.display_line())?;
                }
                continue;
            };

            let spinner = self.spinner();
            let result = use_case.finish(&mut session, &prompt).await;
            if let Some(spinner) = spinner {
                spinner.finish_and_clear();
            }
            result?;

            render(&session, output)?;
        }

        Ok(format!(
            "Goodbye. {} exchange(s) in this session.",
            session.history().exchanges()
        ))
    }

    fn spinner(&self) -> Option<ProgressBar> {
        if !self.show_spinner {
            return None;
        }
        let spinner = ProgressBar::new_spinner();
        spinner.set_style(
            ProgressStyle::with_template("{spinner} {msg}")
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        spinner.set_message("Thinking…");
        spinner.enable_steady_tick(Duration::from_millis(100));
        Some(spinner)
    }
}

/// Error banner (if any), then the whole transcript top to bottom.
fn render<W: Write>(session: &ChatSession, output: &mut W) -> std::io::Result<()> {
    if let Some(banner) = session.banner() {
        writeln!(output, "{}", banner.display_line())?;
    }

    if !session.history().is_empty() {
        writeln!(output, "\nConversation")?;
        for line in render_transcript(session.history()) {
            writeln!(output, "{}", line)?;
        }
        writeln!(output)?;
    }

    Ok(())
}
