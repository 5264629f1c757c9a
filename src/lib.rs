pub mod analysis;
pub mod cli;
pub mod config;
pub mod download;
pub mod filter;
pub mod loader;
pub mod model;
pub mod parser;
pub mod pipeline;
pub mod ui;
pub mod writer;

pub use cli::{Cli, Commands};
pub use loader::{EventSource, LocalDataset};
pub use pipeline::{analyze, run, Analysis};
pub use ui::{ConsoleUi, Phase, SilentUi, Ui, UiApp};
