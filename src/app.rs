use crate::{
    cli::Cli,
    config::Config,
    deck::Deck,
    event::{AppEvent, Event, EventHandler},
    persistence,
    player::Player,
    policy::WeightedPolicy,
    stats::ReviewStats,
};
use ratatui::{
    Terminal,
    backend::Backend,
    crossterm::event::{KeyCode, KeyEvent, KeyModifiers},
};
use tracing::{error, info};

#[derive(Debug, PartialEq)]
pub enum AppState {
    Playing,
    ErrorState(String),
}

/// Application.
pub struct App {
    pub running: bool,
    pub app_state: AppState,
    pub events: EventHandler,
    /// Playback state; absent when the deck failed to load.
    pub player: Option<Player>,
    pub help_visible: bool,
    pub deck_path: String,
}

impl App {
    /// Constructs a new instance of [`App`].
    pub fn new(args: Cli) -> Self {
        let config = Config::load(&args.config);
        if let Some(path) = config.get_path() {
            info!("Loaded config from {}", path);
        }

        let mut app = Self {
            running: true,
            app_state: AppState::Playing,
            events: EventHandler::new(),
            player: None,
            help_visible: false,
            deck_path: args.deck.clone(),
        };

        match Deck::load_from_file(&args.deck) {
            Ok(deck) => {
                let stats = if args.fresh {
                    ReviewStats::new()
                } else {
                    persistence::load_stats(&args.deck).unwrap_or_default()
                };
                let seed = args.seed.or(config.selection.seed);
                let policy = match seed {
                    Some(seed) => WeightedPolicy::new(seed, config.selection.unseen_bias),
                    None => WeightedPolicy::from_clock(config.selection.unseen_bias),
                };
                app.player = Some(Player::new(
                    deck,
                    Box::new(policy),
                    stats,
                    config.selection.avoid_recent,
                    config.flip_on_navigate,
                ));
            }
            Err(e) => {
                app.app_state = AppState::ErrorState(format!(
                    "Failed to load deck: {}\nError: {}",
                    args.deck, e
                ));
            }
        }

        app
    }

    /// Run the application's main loop.
    pub async fn run<B: Backend>(mut self, mut terminal: Terminal<B>) -> color_eyre::Result<()>
    where
        <B as Backend>::Error: std::error::Error + Send + Sync + 'static,
    {
        while self.running {
            terminal.draw(|frame| frame.render_widget(&self, frame.area()))?;
            match self.events.next().await? {
                Event::Tick => self.tick(),
                Event::Crossterm(event) => {
                    if let crossterm::event::Event::Key(key_event) = event {
                        self.handle_key_events(key_event)?;
                    }
                }
                Event::App(app_event) => match app_event {
                    AppEvent::Quit => self.quit(),
                    AppEvent::Flip => self.flip_card(),
                    AppEvent::NextCard => self.next_card(),
                    AppEvent::PreviousCard => self.previous_card(),
                    AppEvent::ToggleHelp => {
                        self.help_visible = !self.help_visible;
                    }
                },
            }
        }
        Ok(())
    }

    /// Handles the key events and updates the state of [`App`].
    pub fn handle_key_events(&mut self, key_event: KeyEvent) -> color_eyre::Result<()> {
        // Global keybindings
        match key_event.code {
            KeyCode::Char('c') if key_event.modifiers == KeyModifiers::CONTROL => {
                self.events.send(AppEvent::Quit);
                return Ok(());
            }
            KeyCode::Esc => {
                if self.help_visible {
                    self.events.send(AppEvent::ToggleHelp);
                } else {
                    self.events.send(AppEvent::Quit);
                }
                return Ok(());
            }
            _ => {}
        }

        match self.app_state {
            AppState::ErrorState(_) => {
                if let KeyCode::Char('q') = key_event.code {
                    self.events.send(AppEvent::Quit);
                }
            }

            AppState::Playing => match key_event.code {
                KeyCode::Char('q') => self.events.send(AppEvent::Quit),
                KeyCode::Right | KeyCode::Char('n') => self.events.send(AppEvent::NextCard),
                KeyCode::Left | KeyCode::Char('p') => self.events.send(AppEvent::PreviousCard),
                KeyCode::Char(' ') | KeyCode::Enter | KeyCode::Char('f') => {
                    self.events.send(AppEvent::Flip)
                }
                KeyCode::Char('h') | KeyCode::Char('?') => self.events.send(AppEvent::ToggleHelp),
                _ => {}
            },
        }
        Ok(())
    }

    fn flip_card(&mut self) {
        if self.help_visible {
            return;
        }
        if let Some(player) = &mut self.player {
            player.flip();
        }
    }

    fn next_card(&mut self) {
        if self.help_visible {
            return;
        }
        if let Some(player) = &mut self.player {
            if let Err(e) = player.go_forward() {
                error!("Forward navigation failed: {}", e);
            }
        }
    }

    fn previous_card(&mut self) {
        if self.help_visible {
            return;
        }
        if let Some(player) = &mut self.player {
            // The back affordance is disabled at the edge of retained
            // history; reaching the error here would be a bug.
            if !player.can_go_back() {
                return;
            }
            if let Err(e) = player.go_back() {
                error!("Backward navigation failed: {}", e);
            }
        }
    }

    /// Handles the tick event of the terminal.
    pub fn tick(&self) {}

    /// Persists review stats and stops the main loop.
    pub fn quit(&mut self) {
        if let Some(player) = self.player.take() {
            persistence::save_stats(&self.deck_path, player.into_stats());
        }
        self.running = false;
    }
}
