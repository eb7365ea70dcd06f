//! Play command implementation - Interactive TUI game.

// CLI play uses intentional casts for display and timing
#![allow(
    clippy::similar_names,
    clippy::needless_pass_by_value,
    clippy::cast_possible_truncation,
    clippy::cast_possible_wrap
)]

use super::CliError;
use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use imperium::game::{
    apply_command, Command, Coord, Faction, GameConfig, GameState, TargetMode, Turn,
};
use rand::rngs::SmallRng;
use rand::SeedableRng;
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
    Frame, Terminal,
};
use std::io::stdout;
use std::time::{Duration, Instant};

/// Execute the play command.
///
/// # Errors
///
/// Returns an error if the configuration is invalid or the TUI fails.
pub(crate) fn execute(
    grid_size: u16,
    gold: u32,
    army: u32,
    ai_delay: u64,
    seed: Option<u64>,
) -> Result<(), CliError> {
    // Generate seed if not provided
    let seed = seed.unwrap_or_else(|| {
        use std::time::{SystemTime, UNIX_EPOCH};
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|d| d.as_nanos() as u64)
            .unwrap_or(42)
    });

    let config = GameConfig {
        grid_size,
        initial_gold: gold,
        initial_army: army,
        ..GameConfig::default()
    };

    let state = GameState::new(config)
        .ok_or_else(|| CliError::new("grid size must be at least 2"))?;

    run_tui(state, config, seed, Duration::from_millis(ai_delay))
}

/// App state for the TUI.
struct App {
    state: GameState,
    config: GameConfig,
    rng: SmallRng,
    cursor: Coord,
    seed: u64,
    ai_delay: Duration,
    ai_due: Option<Instant>,
}

impl App {
    fn new(state: GameState, config: GameConfig, seed: u64, ai_delay: Duration) -> Self {
        Self {
            state,
            config,
            rng: SmallRng::seed_from_u64(seed),
            cursor: Coord::new(0, 0),
            seed,
            ai_delay,
            ai_due: None,
        }
    }

    fn issue(&mut self, command: Command) {
        apply_command(&mut self.state, command, &mut self.rng);
    }

    /// Arm the AI deadline when the turn passes to the opponent, and
    /// deliver the opponent turn once the deadline elapses.
    fn tick(&mut self) {
        match self.ai_due {
            Some(due) => {
                if Instant::now() >= due {
                    self.ai_due = None;
                    self.state.run_opponent_turn(&mut self.rng);
                }
            }
            None => {
                if self.state.turn == Turn::Opponent {
                    self.ai_due = Some(Instant::now() + self.ai_delay);
                }
            }
        }
    }

    fn new_game(&mut self) {
        if let Some(state) = GameState::new(self.config) {
            self.state = state;
        }
        self.seed = self.seed.wrapping_add(1);
        self.rng = SmallRng::seed_from_u64(self.seed);
        self.cursor = Coord::new(0, 0);
        self.ai_due = None;
    }

    fn move_up(&mut self) {
        self.cursor = Coord::new(self.cursor.row.saturating_sub(1), self.cursor.col);
    }

    fn move_down(&mut self) {
        let max = self.state.grid.size() - 1;
        self.cursor = Coord::new((self.cursor.row + 1).min(max), self.cursor.col);
    }

    fn move_left(&mut self) {
        self.cursor = Coord::new(self.cursor.row, self.cursor.col.saturating_sub(1));
    }

    fn move_right(&mut self) {
        let max = self.state.grid.size() - 1;
        self.cursor = Coord::new(self.cursor.row, (self.cursor.col + 1).min(max));
    }
}

fn run_tui(
    state: GameState,
    config: GameConfig,
    seed: u64,
    ai_delay: Duration,
) -> Result<(), CliError> {
    // Setup terminal
    enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend).map_err(|e| CliError::new(e.to_string()))?;

    let mut app = App::new(state, config, seed, ai_delay);

    loop {
        // Draw
        terminal.draw(|f| ui(f, &app)).map_err(|e| CliError::new(e.to_string()))?;

        // Run the pending AI turn once its delay elapses
        app.tick();

        // Handle input with timeout
        if event::poll(Duration::from_millis(50)).map_err(|e| CliError::new(e.to_string()))?
            && let Event::Key(key) = event::read().map_err(|e| CliError::new(e.to_string()))?
                && key.kind == KeyEventKind::Press {
                    match key.code {
                        KeyCode::Char('q') | KeyCode::Esc => break,
                        KeyCode::Up | KeyCode::Char('k') => app.move_up(),
                        KeyCode::Down | KeyCode::Char('j') => app.move_down(),
                        KeyCode::Left | KeyCode::Char('h') => app.move_left(),
                        KeyCode::Right | KeyCode::Char('l') => app.move_right(),
                        KeyCode::Char('r') => app.issue(Command::Recruit),
                        KeyCode::Char('e') => app.issue(Command::SelectExpand),
                        KeyCode::Char('b') => app.issue(Command::SelectBattle),
                        KeyCode::Enter => app.issue(Command::SelectCell(app.cursor)),
                        KeyCode::Char('t') => app.issue(Command::EndTurn),
                        KeyCode::Char('n') => app.new_game(),
                        _ => {}
                    }
                }
    }

    // Restore terminal
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;

    Ok(())
}

fn ui(f: &mut Frame, app: &App) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3), // Header
            Constraint::Min(10),   // Main content
            Constraint::Length(4), // Status and controls
        ])
        .split(f.area());

    // Header
    render_header(f, chunks[0], app);

    // Main content - grid and sidebar
    let main_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(60), Constraint::Percentage(40)])
        .split(chunks[1]);

    render_grid(f, main_chunks[0], app);
    render_sidebar(f, main_chunks[1], app);

    // Status and controls
    render_status(f, chunks[2], app);
}

fn render_header(f: &mut Frame, area: Rect, app: &App) {
    let turn_text = match app.state.turn {
        Turn::Player => "Your turn",
        Turn::Opponent => "AI thinking...",
        Turn::GameOver => "Game over",
    };

    let title = format!(" Empire Tactics | {} | Seed {} ", turn_text, app.seed);

    let header = Paragraph::new(title)
        .style(Style::default().fg(Color::Cyan).add_modifier(Modifier::BOLD))
        .block(Block::default().borders(Borders::ALL));

    f.render_widget(header, area);
}

fn render_grid(f: &mut Frame, area: Rect, app: &App) {
    let size = app.state.grid.size();

    let mut lines: Vec<Line> = Vec::new();

    // Each cell renders as a two-column block; clip to the visible area
    let visible_cols = ((area.width as usize).saturating_sub(2) / 2).min(size as usize);
    let visible_rows = (area.height as usize).saturating_sub(2).min(size as usize);

    for row in 0..visible_rows {
        let mut spans = Vec::new();
        for col in 0..visible_cols {
            let coord = Coord::new(row as u16, col as u16);
            let color = match app.state.grid.owner(coord) {
                Some(Faction::Player) => Color::Blue,
                Some(Faction::Opponent) => Color::Red,
                None => Color::DarkGray,
            };
            let mut style = Style::default().fg(color);
            if coord == app.cursor {
                style = style.add_modifier(Modifier::REVERSED);
            }
            spans.push(Span::styled("██", style));
        }
        lines.push(Line::from(spans));
    }

    let title = match app.state.pending {
        Some(TargetMode::Expand) => " Map - choose expansion target ",
        Some(TargetMode::Battle) => " Map - choose battle target ",
        None => " Map ",
    };

    let grid_widget = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(title));

    f.render_widget(grid_widget, area);
}

fn render_sidebar(f: &mut Frame, area: Rect, app: &App) {
    let config = &app.config;
    let mut lines = Vec::new();

    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "You",
        Style::default().fg(Color::Blue).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "  Territories: {}",
        app.state.grid.count_owned(Faction::Player)
    )));
    lines.push(Line::from(format!(
        "  Gold: {}  Army: {}",
        app.state.player.gold, app.state.player.army
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "AI",
        Style::default().fg(Color::Red).add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!(
        "  Territories: {}",
        app.state.grid.count_owned(Faction::Opponent)
    )));
    lines.push(Line::from(format!(
        "  Gold: {}  Army: {}",
        app.state.opponent.gold, app.state.opponent.army
    )));
    lines.push(Line::from(""));
    lines.push(Line::from(Span::styled(
        "Costs",
        Style::default().add_modifier(Modifier::BOLD),
    )));
    lines.push(Line::from(format!("  Recruit: {} gold", config.recruit_cost)));
    lines.push(Line::from(format!(
        "  Expand: {} gold + {} army",
        config.expand_gold_cost, config.expand_army_cost
    )));
    lines.push(Line::from(format!(
        "  Income: {} gold/territory",
        config.income_per_cell
    )));

    let sidebar = Paragraph::new(lines)
        .block(Block::default().borders(Borders::ALL).title(" Empire "))
        .wrap(Wrap { trim: false });

    f.render_widget(sidebar, area);
}

fn render_status(f: &mut Frame, area: Rect, app: &App) {
    let controls = if app.state.turn == Turn::GameOver {
        " [n] New game  [q] Quit "
    } else {
        " [hjkl/arrows] Move  [r] Recruit  [e] Expand  [b] Battle  [Enter] Select  [t] End turn  [n] New  [q] Quit "
    };

    let lines = vec![
        Line::from(Span::styled(
            app.state.status,
            Style::default().fg(Color::Yellow),
        )),
        Line::from(Span::styled(controls, Style::default().fg(Color::Gray))),
    ];

    let status = Paragraph::new(lines).block(Block::default().borders(Borders::ALL));

    f.render_widget(status, area);
}
