use anyhow::Context;
use ratatui::layout::Rect;
use tokio::sync::mpsc;
use tracing::info;

use crate::app::App;
use crate::config::Config;
use crate::events::{spawn_input_thread, AppEvent};
use crate::remote::{RemoteEngine, RemotePlayer};
use crate::ui::{draw, map_key, map_mouse, setup_terminal};

pub async fn run(config: Config) -> anyhow::Result<()> {
    let endpoint = config.endpoint_url()?;
    let engine = RemoteEngine::new(endpoint, config.connect_timeout())?;
    info!(endpoint = %engine.endpoint(), "starting");

    let (tx, mut rx) = mpsc::unbounded_channel();
    let mut remote = RemotePlayer::new(engine, tx.clone());
    let mut app = App::new(config.match_settings);

    let (cols, rows) = crossterm::terminal::size().context("failed to query terminal size")?;
    let mut viewport = Rect::new(0, 0, cols, rows);
    let (mut terminal, guard) = setup_terminal().context("failed to set up terminal")?;
    let input = spawn_input_thread(tx, config.tick_rate());

    for effect in app.start() {
        remote.apply(effect);
    }

    loop {
        terminal.draw(|frame| draw(frame, &app))?;
        if app.should_quit() {
            break;
        }

        let Some(event) = rx.recv().await else {
            break;
        };
        let intent = match event {
            AppEvent::Key(key) => map_key(key),
            AppEvent::Mouse(mouse) => map_mouse(mouse, viewport),
            AppEvent::Resize(cols, rows) => {
                viewport = Rect::new(0, 0, cols, rows);
                None
            }
            AppEvent::Tick => None,
            AppEvent::RemoteMove(remote_move) => Some(crate::app::Intent::Remote(remote_move)),
        };
        if let Some(intent) = intent {
            for effect in app.dispatch(intent) {
                remote.apply(effect);
            }
        }
    }

    if let Some(ticket) = remote.in_flight() {
        info!(game = ticket.game, ply = ticket.ply, "quitting with an engine request pending");
    }
    remote.cancel();
    input.stop();
    drop(terminal);
    drop(guard);
    info!("bye");
    Ok(())
}
