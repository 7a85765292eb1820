use crate::ChatModel;

pub struct ModelsController;

impl ModelsController {
    pub fn new() -> Self {
        Self
    }

    pub fn list(&self) -> String {
        let default = ChatModel::default();
        let mut output = String::from("Available models:\n");

        for model in ChatModel::all() {
            let marker = if *model == default { " (default)" } else { "" };
            output.push_str(&format!("  {}{}\n", model, marker));
        }

        output
    }
}

impl Default for ModelsController {
    fn default() -> Self {
        Self::new()
    }
}
