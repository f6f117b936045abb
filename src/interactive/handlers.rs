use crossterm::{
    event::KeyCode,
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io;

use super::app::{AppMode, DashboardApp, NoticeKind};
use super::event::{Event, EventHandler};
use crate::logging::{log_debug, log_error, log_info};

pub async fn run_dashboard() -> Result<(), Box<dyn std::error::Error>> {
    log_info("Starting dashboard mode");

    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;
    log_debug("Terminal initialized");

    // One app per mounted dashboard; its refresh timer dies with it.
    let mut app = DashboardApp::new();
    app.orchestrator.fetch_snapshot(false).await;

    let events = EventHandler::new(100);

    loop {
        if let Err(e) = terminal.draw(|f| super::ui::draw(f, &app)) {
            log_error(&format!("Error drawing UI: {}", e));
            disable_raw_mode()?;
            execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
            return Err(Box::new(e));
        }

        match events.recv()? {
            Event::Key(key_event) => {
                match key_event.code {
                    KeyCode::Char('r') if app.mode == AppMode::Normal => {
                        log_debug("Manual refresh requested");
                        app.refresh_timer.rearm();
                        app.orchestrator.fetch_snapshot(true).await;
                    }
                    code => app.handle_key(code),
                }

                // The status picker queues the write after the optimistic
                // local overwrite has already landed.
                if let Some((issue_id, new_status)) = app.take_pending_status() {
                    log_info(&format!("Status update: {} -> {}", issue_id, new_status));
                    match app
                        .orchestrator
                        .client()
                        .update_status(&issue_id, new_status)
                        .await
                    {
                        Ok(_) => {
                            app.set_notice(
                                format!("{} → {}", issue_id, new_status),
                                NoticeKind::Success,
                            );
                        }
                        Err(e) => {
                            // Local overwrite stays; no reconciliation here
                            log_error(&format!("Status update failed: {}", e));
                            app.set_notice(e.user_message(), NoticeKind::Error);
                        }
                    }
                }
            }
            Event::Tick => {
                app.expire_notice();
                if app.refresh_timer.due() {
                    log_debug("Auto-refresh fired");
                    app.orchestrator.fetch_snapshot(true).await;
                }
            }
        }

        if app.should_quit {
            break;
        }
    }

    log_info("Exiting dashboard mode");

    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    Ok(())
}
