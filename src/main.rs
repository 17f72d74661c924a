use anyhow::Result;
use crossterm::{
    event::{self, Event, KeyCode, KeyEvent, KeyEventKind},
    execute,
    terminal::{self, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::{
    io::stdout,
    time::{Duration, Instant},
};

use blockfall::game::Game;
use blockfall::input::handle_input;
use blockfall::ui::ui;

fn main() -> Result<()> {
    // Setup terminal
    terminal::enable_raw_mode()?;
    let mut stdout = stdout();
    execute!(stdout, EnterAlternateScreen)?;

    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    let mut game = Game::new();

    // Game loop
    loop {
        // Render
        terminal.draw(|f| ui(f, &game))?;

        // Handle input
        if event::poll(Duration::from_millis(16))? {
            if let Event::Key(KeyEvent { code, kind, .. }) = event::read()? {
                match code {
                    KeyCode::Char('q') | KeyCode::Char('Q') => {
                        if kind == KeyEventKind::Press {
                            break;
                        }
                    }
                    _ => {
                        // Auto-repeat counts: holding an arrow keeps moving
                        if matches!(kind, KeyEventKind::Press | KeyEventKind::Repeat) {
                            handle_input(&mut game, code, Instant::now());
                        }
                    }
                }
            }
        }

        // Advance simulated time
        game.update(Instant::now());
    }

    // Cleanup
    terminal::disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
