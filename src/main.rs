use clap::{error::ErrorKind, CommandFactory, Parser, ValueEnum};
use crossterm::{
    event::{KeyCode, KeyModifiers},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
    tty::IsTty,
};
use phraseur::{
    builder::{LoadError, Template},
    config::{Config, ConfigStore, FileConfigStore},
    generator::SentenceGenerator,
    runtime::{CrosstermEventSource, PracticeEvent, Runner},
    session::{PracticeSession, SECS_STEP},
    ui::PracticeView,
    TICK_RATE_MS,
};
use ratatui::{
    backend::{Backend, CrosstermBackend},
    Terminal,
};
use std::{
    error::Error,
    io::{self, stdin},
    time::Duration,
};

/// timed english-to-french practice over sentence builders
#[derive(Parser, Debug, Clone)]
#[clap(
    version,
    about,
    long_about = "A terminal quiz over French sentence builders: a randomly assembled English sentence appears, the countdown runs, and the French answer is revealed when it hits zero."
)]
pub struct Cli {
    /// sentence builder to practice
    #[clap(short = 'b', long, value_enum)]
    builder: Option<SupportedBuilder>,

    /// star difficulty to start at (1-3)
    #[clap(short = 'd', long, value_parser = clap::value_parser!(u8).range(1..=3))]
    difficulty: Option<u8>,

    /// seconds on the countdown before the answer is revealed
    #[clap(short = 's', long)]
    number_of_secs: Option<u64>,
}

#[derive(Debug, Copy, Clone, PartialEq, Eq, ValueEnum, strum_macros::Display)]
pub enum SupportedBuilder {
    Opinions,
    Routine,
}

impl SupportedBuilder {
    fn as_template(&self) -> Result<Template, LoadError> {
        Template::load(&self.to_string().to_lowercase())
    }

    fn from_name(name: &str) -> Option<Self> {
        SupportedBuilder::value_variants()
            .iter()
            .copied()
            .find(|b| b.to_string().to_lowercase() == name)
    }
}

#[derive(Debug)]
pub struct App {
    pub session: PracticeSession,
    pub error: Option<String>,
}

impl App {
    pub fn new(session: PracticeSession) -> Self {
        Self {
            session,
            error: None,
        }
    }

    /// Draw the next card; generation failures become an on-screen message
    /// instead of tearing the terminal down mid-session.
    pub fn next_card(&mut self) {
        if let Err(err) = self.session.next_card() {
            self.error = Some(err.to_string());
        }
    }
}

fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();

    if !stdin().is_tty() {
        let mut cmd = Cli::command();
        cmd.error(ErrorKind::Io, "stdin must be a tty").exit();
    }

    let store = FileConfigStore::new();
    let saved = store.load();

    let builder = cli
        .builder
        .or_else(|| SupportedBuilder::from_name(&saved.builder))
        .unwrap_or(SupportedBuilder::Opinions);
    let difficulty = cli.difficulty.unwrap_or(saved.difficulty).clamp(1, 3);
    let number_of_secs = cli.number_of_secs.unwrap_or(saved.number_of_secs).max(1);

    let generator = SentenceGenerator::new(builder.as_template()?);
    let mut app = App::new(PracticeSession::new(
        generator,
        difficulty,
        number_of_secs as f64,
    ));

    enable_raw_mode()?;

    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let result = run_practice(&mut terminal, &mut app);

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    // Persist whatever the user ended up with for the next run.
    let _ = store.save(&Config {
        builder: builder.to_string().to_lowercase(),
        difficulty: app.session.difficulty,
        number_of_secs: app.session.number_of_secs as u64,
    });

    result
}

fn run_practice<B: Backend>(
    terminal: &mut Terminal<B>,
    app: &mut App,
) -> Result<(), Box<dyn Error>> {
    let runner = Runner::new(
        CrosstermEventSource::new(),
        Duration::from_millis(TICK_RATE_MS),
    );

    app.next_card();

    loop {
        terminal.draw(|f| {
            let view = PracticeView {
                session: &app.session,
                error: app.error.as_deref(),
            };
            f.render_widget(&view, f.area());
        })?;

        match runner.step() {
            PracticeEvent::Tick => app.session.on_tick(),
            PracticeEvent::Resize => {}
            PracticeEvent::Key(key) => match key.code {
                KeyCode::Esc | KeyCode::Char('q') => break,
                KeyCode::Char('c') if key.modifiers.contains(KeyModifiers::CONTROL) => break,
                KeyCode::Char('n') | KeyCode::Char(' ') | KeyCode::Enter => app.next_card(),
                KeyCode::Char('r') => app.session.reveal(),
                KeyCode::Char(d @ '1'..='3') => app.session.set_difficulty(d as u8 - b'0'),
                KeyCode::Char('+') => app.session.bump_secs(SECS_STEP),
                KeyCode::Char('-') => app.session.bump_secs(-SECS_STEP),
                _ => {}
            },
        }
    }

    Ok(())
}
