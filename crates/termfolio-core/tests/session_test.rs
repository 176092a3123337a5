//! End-to-end session test for the controller state machine.
//!
//! Drives the full flow a user would: tab completion, submission, history
//! recall, theme toggles, and lazy content resolution with a deterministic
//! fake table.

use termfolio_core::{App, AppAction, AppEvent, ContentTable, KeyInput, Line, Theme};

fn press(app: &mut App, key: KeyInput) -> Vec<AppAction> {
    app.handle(AppEvent::Key(key))
}

fn type_line(app: &mut App, line: &str) {
    for c in line.chars() {
        press(app, KeyInput::Char(c));
    }
}

fn screen_text(app: &App) -> String {
    let mut out = String::new();
    for block in app.screen().blocks() {
        for line in &block.lines {
            match line {
                Line::Prompt(t) | Line::Text(t) | Line::Bullet(t) => out.push_str(t),
                Line::Section(s) => out.push_str(&s.summary),
            }
            out.push('\n');
        }
    }
    out
}

fn fake_table() -> ContentTable {
    let mut table = ContentTable::new();
    table.insert("skills".to_owned(), "Skill list".to_owned());
    table.insert("experience".to_owned(), "+ First role\n  shipped things".to_owned());
    table
}

#[test]
fn completed_command_round_trip() {
    let mut app = App::new();

    // "sk" + Tab completes to "skills"; Enter submits and requests the load.
    type_line(&mut app, "sk");
    press(&mut app, KeyInput::Tab);
    assert_eq!(app.input().buffer(), "skills");
    let actions = press(&mut app, KeyInput::Enter);
    assert!(actions.contains(&AppAction::LoadContent));
    assert!(screen_text(&app).contains("➜ ~ skills"));

    app.handle(AppEvent::ContentLoaded(Ok(fake_table())));
    assert!(screen_text(&app).contains("Skill list"));

    // The loaded table also answers later commands without another load.
    type_line(&mut app, "experience");
    let actions = press(&mut app, KeyInput::Enter);
    assert!(!actions.contains(&AppAction::LoadContent));
    assert!(screen_text(&app).contains("First role"));
}

#[test]
fn history_recall_resubmits_previous_command() {
    let mut app = App::new();
    type_line(&mut app, "light");
    press(&mut app, KeyInput::Enter);
    type_line(&mut app, "dark");
    press(&mut app, KeyInput::Enter);

    // Up twice recalls "light"; "dark" reset the theme, so resubmitting the
    // recalled command switches back.
    press(&mut app, KeyInput::Up);
    press(&mut app, KeyInput::Up);
    assert_eq!(app.input().buffer(), "light");
    press(&mut app, KeyInput::Enter);
    assert_eq!(app.theme(), Theme::Light);
    assert!(screen_text(&app).contains("Switched to Light Mode."));
}

#[test]
fn expanded_section_state_survives_toggles_only_on_screen() {
    let mut app = App::new();
    type_line(&mut app, "experience");
    press(&mut app, KeyInput::Enter);
    app.handle(AppEvent::ContentLoaded(Ok(fake_table())));

    assert!(app.handle(AppEvent::ToggleSection(0)).contains(&AppAction::Render));

    // Dispatching another command resets the screen; the section is gone.
    type_line(&mut app, "clear");
    press(&mut app, KeyInput::Enter);
    assert!(app.handle(AppEvent::ToggleSection(0)).is_empty());
}
