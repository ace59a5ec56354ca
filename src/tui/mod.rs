pub mod app;
pub mod card;
pub mod colors;
pub mod list;
pub mod search;
pub mod ui;

use crate::config::AppConfig;

/// Entry point: take over the terminal and run the search UI until quit
pub fn run(config: &AppConfig) -> crate::Result<()> {
    let mut app = app::App::new(config)?;

    let mut terminal = ratatui::init();
    let result = app.run(&mut terminal);
    ratatui::restore();

    if let Err(e) = &result {
        tracing::error!(error = %e, "terminal UI stopped");
    }
    result
}
