//! Controller state machine.
//!
//! [`App`] owns every piece of session state: the input line and history,
//! the screen, the theme flag, and the lazy content table. Each event maps
//! to zero or more declarative [`AppAction`]s for the runtime to execute,
//! so the same dispatch logic runs under the production TUI and under
//! deterministic tests.

use crate::{
    AppAction, AppEvent, Block, CommandKind, ContentError, ContentTable, InputEffect, InputState,
    Registry, Screen, Theme,
};

/// Lazy-load state of the content table.
///
/// The loaded state is only ever entered on success, so a failed load leaves
/// the next informational command free to retry.
#[derive(Debug)]
enum ContentState {
    Unloaded,
    /// A load is in flight; commands submitted meanwhile queue here and are
    /// answered from the single result.
    Loading { pending: Vec<String> },
    Loaded(ContentTable),
}

/// The terminal controller.
#[derive(Debug)]
pub struct App {
    registry: Registry,
    input: InputState,
    screen: Screen,
    theme: Theme,
    content: ContentState,
}

impl Default for App {
    fn default() -> Self {
        Self::new()
    }
}

impl App {
    /// Fresh controller with the built-in command set and the intro shown.
    pub fn new() -> Self {
        let registry = Registry::default();
        Self {
            registry,
            input: InputState::default(),
            screen: Screen::new(&registry),
            theme: Theme::default(),
            content: ContentState::Unloaded,
        }
    }

    /// Input-line state, for rendering.
    pub fn input(&self) -> &InputState {
        &self.input
    }

    /// Output model, for rendering.
    pub fn screen(&self) -> &Screen {
        &self.screen
    }

    /// Current theme.
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Process one event and return the actions it produced.
    pub fn handle(&mut self, event: AppEvent) -> Vec<AppAction> {
        match event {
            AppEvent::Key(key) => match self.input.handle_key(key, &self.registry) {
                Some(InputEffect::Submitted(raw)) => self.dispatch(&raw),
                Some(InputEffect::Edited) => vec![AppAction::Render],
                None => Vec::new(),
            },
            AppEvent::ClearScreen => {
                self.screen.reset();
                vec![AppAction::Render]
            },
            AppEvent::ToggleSection(index) => match self.screen.toggle_section(index) {
                Some(_) => vec![AppAction::Render],
                None => Vec::new(),
            },
            AppEvent::ContentLoaded(result) => self.finish_load(result),
            AppEvent::Quit => vec![AppAction::Quit],
        }
    }

    /// Dispatch a submitted line.
    ///
    /// Empty submissions only clear the input line. Everything else is
    /// lowercased, echoed after a fresh intro, and either executed or
    /// reported as unknown.
    fn dispatch(&mut self, raw: &str) -> Vec<AppAction> {
        let command = raw.trim().to_lowercase();
        if command.is_empty() {
            return vec![AppAction::Render];
        }

        self.screen.reset();
        self.screen.echo_command(&command);

        match self.registry.kind_of(&command) {
            None => {
                self.screen.push(Block::alert(format!("Command \"{command}\" not found.")));
                vec![AppAction::Render]
            },
            Some(CommandKind::Clear) => {
                self.screen.reset();
                vec![AppAction::Render]
            },
            Some(CommandKind::Light) => {
                if self.theme.is_light() {
                    self.screen.push_note("Already in Light Mode.");
                } else {
                    self.theme = Theme::Light;
                    self.screen.push_note("Switched to Light Mode.");
                }
                vec![AppAction::Render]
            },
            Some(CommandKind::Dark) => {
                if self.theme.is_light() {
                    self.theme = Theme::Dark;
                    self.screen.push_note("Switched to Dark Mode.");
                } else {
                    self.screen.push_note("Already in Dark Mode.");
                }
                vec![AppAction::Render]
            },
            Some(CommandKind::Info) => self.resolve_content(command),
        }
    }

    /// Answer an informational command from the table, or arrange for it to
    /// be answered once the table loads.
    fn resolve_content(&mut self, command: String) -> Vec<AppAction> {
        match &mut self.content {
            ContentState::Loaded(table) => {
                self.screen.push(Block::response(&command, table.get(&command).map(String::as_str)));
                vec![AppAction::Render]
            },
            ContentState::Loading { pending } => {
                pending.push(command);
                vec![AppAction::Render]
            },
            ContentState::Unloaded => {
                self.content = ContentState::Loading { pending: vec![command] };
                vec![AppAction::LoadContent, AppAction::Render]
            },
        }
    }

    /// Apply the content-load result to every command queued on it.
    fn finish_load(&mut self, result: Result<ContentTable, ContentError>) -> Vec<AppAction> {
        let pending = match std::mem::replace(&mut self.content, ContentState::Unloaded) {
            ContentState::Loading { pending } => pending,
            // Spurious completion; nothing was waiting.
            other => {
                self.content = other;
                return Vec::new();
            },
        };

        match result {
            Ok(table) => {
                for command in &pending {
                    self.screen
                        .push(Block::response(command, table.get(command).map(String::as_str)));
                }
                self.content = ContentState::Loaded(table);
            },
            Err(error) => {
                tracing::warn!(%error, "content source load failed");
                for _ in &pending {
                    self.screen.push(Block::alert("Error loading command content."));
                }
                // Stay unloaded so a later command retries the load.
            },
        }
        vec![AppAction::Render]
    }
}
