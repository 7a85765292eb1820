use anyhow::Result;

use crate::ChatModel;

use super::super::Container;

pub struct AskController<'a> {
    container: &'a Container,
}

impl<'a> AskController<'a> {
    pub fn new(container: &'a Container) -> Self {
        Self { container }
    }

    pub async fn ask(&self, prompt: String, model: String) -> Result<String> {
        let model: ChatModel = model.parse()?;
        let use_case = self.container.ask_use_case();
        let answer = use_case.ask(&prompt, model).await?;
        Ok(answer)
    }
}
