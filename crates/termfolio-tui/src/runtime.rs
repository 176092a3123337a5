//! Async event loop.
//!
//! Interprets the actions the core state machine produces: renders on
//! demand, spawns the one-shot content load and feeds its result back in as
//! an event, and stops on quit. All waiting happens in one select over the
//! crossterm event stream and the load-completion channel.

use std::sync::Arc;

use crossterm::event::{Event, EventStream, KeyEventKind};
use futures::StreamExt;
use ratatui::Terminal;
use termfolio_core::{App, AppAction, AppEvent, ContentError, ContentSource, ContentTable};
use tokio::sync::mpsc;

use crate::{
    keymap,
    terminal::{Backend, TerminalError},
    ui,
};

type LoadResult = Result<ContentTable, ContentError>;

/// Drives the core state machine against a real terminal.
pub struct Runtime<S> {
    app: App,
    source: Arc<S>,
}

impl<S: ContentSource + 'static> Runtime<S> {
    /// New runtime over a fresh or pre-seeded controller.
    pub fn new(app: App, source: S) -> Self {
        Self { app, source: Arc::new(source) }
    }

    /// Run until quit. The terminal is drawn once up front, then only when
    /// the core asks for a render.
    pub async fn run(mut self, terminal: &mut Terminal<Backend>) -> Result<(), TerminalError> {
        let mut events = EventStream::new();
        let (load_tx, mut load_rx) = mpsc::unbounded_channel::<LoadResult>();

        tracing::info!("starting terminal session");
        terminal.draw(|frame| ui::draw(frame, &self.app))?;

        loop {
            let app_event = tokio::select! {
                maybe_event = events.next() => {
                    let Some(event) = maybe_event else { break };
                    match event? {
                        Event::Key(key) if key.kind != KeyEventKind::Release => {
                            match keymap::map_key(key) {
                                Some(app_event) => app_event,
                                None => continue,
                            }
                        },
                        Event::Resize(_, _) => {
                            terminal.draw(|frame| ui::draw(frame, &self.app))?;
                            continue;
                        },
                        _ => continue,
                    }
                },
                Some(result) = load_rx.recv() => AppEvent::ContentLoaded(result),
            };

            let mut render = false;
            for action in self.app.handle(app_event) {
                match action {
                    AppAction::Render => render = true,
                    AppAction::LoadContent => self.spawn_load(&load_tx),
                    AppAction::Quit => {
                        tracing::info!("quit requested");
                        return Ok(());
                    },
                }
            }
            if render {
                terminal.draw(|frame| ui::draw(frame, &self.app))?;
            }
        }
        Ok(())
    }

    /// Fire the one-shot content load; the result comes back through the
    /// channel as a [`AppEvent::ContentLoaded`].
    fn spawn_load(&self, load_tx: &mpsc::UnboundedSender<LoadResult>) {
        let source = Arc::clone(&self.source);
        let load_tx = load_tx.clone();
        tracing::debug!("loading content source");
        tokio::spawn(async move {
            // A dropped receiver means the session already ended.
            let _ = load_tx.send(source.load().await);
        });
    }
}
