//! Command-line and environment configuration.

use std::path::PathBuf;

use clap::{builder::BoolishValueParser, Parser};
use todo_core::ItemStore;

/// Runtime settings for the todo server.
#[derive(Debug, Clone, Parser)]
#[command(name = "todo-server", version, about = "In-memory todo list over HTTP")]
pub struct Config {
    /// Address to listen on
    #[arg(long, default_value = "127.0.0.1", env = "TODO_HOST")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, default_value_t = 3000, env = "PORT")]
    pub port: u16,

    /// Directory holding `index.html` for the landing page
    #[arg(long, default_value = "static", env = "TODO_STATIC_DIR")]
    pub static_dir: PathBuf,

    /// Start with an empty list instead of the three sample items
    /// (env accepts 1/0, yes/no, on/off, true/false)
    #[arg(long, env = "TODO_NO_SEED", value_parser = BoolishValueParser::new())]
    pub no_seed: bool,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// Builds the store this configuration asks for.
    pub fn store(&self) -> ItemStore {
        if self.no_seed {
            ItemStore::new()
        } else {
            ItemStore::seeded()
        }
    }
}
