use clap::Subcommand;

#[derive(Subcommand)]
pub enum Commands {
    /// Serve the chat page over HTTP
    Serve {
        #[arg(short, long, default_value = "8501")]
        port: u16,

        /// Bind to 0.0.0.0 instead of 127.0.0.1, exposing the page on all network interfaces
        #[arg(long)]
        public: bool,
    },

    /// Ask a single question and print the answer
    Ask {
        prompt: String,

        #[arg(short, long, default_value = "llama-3.3-70b-versatile")]
        model: String,
    },

    /// Interactive chat in the terminal
    Chat {
        #[arg(short, long, default_value = "llama-3.3-70b-versatile")]
        model: String,
    },

    /// List the selectable models
    Models,
}
