use clap::{error::ErrorKind, CommandFactory, Parser};
use crossterm::{
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use rand::{rngs::StdRng, SeedableRng};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
};

use typingtest::{
    app::{App, Flow},
    app_dirs::AppDirs,
    config::{ConfigStore, FileConfigStore},
    logging,
    runtime::{CrosstermEventSource, Runner, ThokEvent, ThokEventSource},
    sampler, TypingError,
};

/// terminal typing test: type a random passage, get wpm and accuracy
#[derive(Parser, Debug, Clone)]
#[clap(version, about)]
pub struct Cli {
    /// number of words to use in test
    #[clap(value_parser = parse_word_count)]
    number_of_words: Option<usize>,
}

fn parse_word_count(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be at least 1".to_string()),
        Ok(n) => Ok(n),
        Err(err) => Err(err.to_string()),
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if let Some(log_path) = AppDirs::log_path() {
        logging::init(&log_path);
    }

    let config = FileConfigStore::new().load();
    let number_of_words = cli.number_of_words.unwrap_or(config.number_of_words);

    let bank = match config.load_word_bank() {
        Ok(bank) => bank,
        Err(err) => Cli::command().error(ErrorKind::Io, err).exit(),
    };

    let mut rng = StdRng::from_entropy();
    let prompt = match sampler::sample(&bank, number_of_words, &mut rng) {
        Ok(prompt) => prompt,
        Err(err @ TypingError::WordBankTooSmall { .. }) => {
            tracing::error!("{err}");
            Cli::command().error(ErrorKind::ValueValidation, err).exit()
        }
        Err(err) => return Err(err.into()),
    };
    drop(bank);

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut app = App::new(prompt);
    let runner = Runner::new(CrosstermEventSource::new());
    let res = start_tui(&mut terminal, &mut app, &runner);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen,)?;
    terminal.show_cursor()?;

    res
}

fn start_tui<B: Backend, E: ThokEventSource>(
    terminal: &mut Terminal<B>,
    app: &mut App,
    runner: &Runner<E>,
) -> Result<(), Box<dyn Error>> {
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    // idle time before the first keystroke is part of the session
    app.start();
    terminal.draw(|f| f.render_widget(&*app, f.area()))?;

    while let Some(event) = runner.step() {
        match event {
            ThokEvent::Resize => {}
            ThokEvent::Key(key) => {
                if app.on_key(&key) == Flow::Exit {
                    break;
                }
            }
        }
        terminal.draw(|f| f.render_widget(&*app, f.area()))?;
    }

    Ok(())
}
