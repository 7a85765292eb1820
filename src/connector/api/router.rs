use anyhow::Result;

use crate::Commands;

use super::container::Container;
use super::controller::{AskController, ChatController, ModelsController};

pub struct Router<'a> {
    ask_controller: AskController<'a>,
    chat_controller: ChatController<'a>,
    models_controller: ModelsController,
}

impl<'a> Router<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self {
            ask_controller: AskController::new(container),
            chat_controller: ChatController::new(container),
            models_controller: ModelsController::new(),
        }
    }

    pub async fn route(&self, command: Commands) -> Result<String> {
        match command {
            Commands::Ask { prompt, model } => self.ask_controller.ask(prompt, model).await,
            Commands::Chat { model } => self.chat_controller.chat(model).await,
            Commands::Models => Ok(self.models_controller.list()),
            Commands::Serve { .. } => unreachable!("Serve command is handled separately in main"),
        }
    }
}
