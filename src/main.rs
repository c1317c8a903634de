use flashread::app::{App, AppEvent};
use flashread::engine::Config;
use flashread::ui::TuiManager;
use std::fs::File;

/// Path of the log file; logging is off when unset.
const LOG_FILE_ENV: &str = "FLASHREAD_LOG";
const LOG_LEVEL_ENV: &str = "FLASHREAD_LOG_LEVEL";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    init_logging()?;

    let config = Config::from_env();
    let mut app = App::new(config)?;

    // Words on the command line are preloaded into the text area
    let words: Vec<String> = std::env::args().skip(1).collect();
    if !words.is_empty() {
        app.handle_event(AppEvent::InsertText(words.join(" ")));
        app.handle_event(AppEvent::Load);
    }

    let mut tui = TuiManager::new()?;
    tui.run_event_loop(&mut app)?;

    Ok(())
}

// The terminal owns stdout/stderr while running, so logs only go to a file.
fn init_logging() -> Result<(), std::io::Error> {
    let Ok(path) = std::env::var(LOG_FILE_ENV) else {
        return Ok(());
    };
    let file = File::create(path)?;
    env_logger::Builder::from_env(env_logger::Env::default().filter_or(LOG_LEVEL_ENV, "info"))
        .target(env_logger::Target::Pipe(Box::new(file)))
        .init();
    Ok(())
}
