//! View switching, the library browser and the simulation catalog driven
//! through key presses.

mod common;

use common::*;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use justicia::adapters::mock::MockReply;
use justicia::app::View;
use justicia::content::library::LIBRARY;
use justicia::content::scenarios::SCENARIOS;
use justicia::content::texts::SIMULATION_GREETING;

#[test]
fn test_tab_cycles_through_views() {
    let (mut app, _) = test_app();
    let mut seen = vec![app.view()];
    for _ in 0..4 {
        press(&mut app, KeyCode::Tab);
        seen.push(app.view());
    }
    assert_eq!(
        seen,
        vec![View::Home, View::Learn, View::Chat, View::Simulation, View::Home]
    );

    app.handle_key(KeyEvent::new(KeyCode::BackTab, KeyModifiers::SHIFT));
    assert_eq!(app.view(), View::Simulation);
}

#[test]
fn test_function_keys_jump_to_views() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::F(3));
    assert_eq!(app.view(), View::Chat);
    press(&mut app, KeyCode::F(2));
    assert_eq!(app.view(), View::Learn);
    press(&mut app, KeyCode::F(1));
    assert_eq!(app.view(), View::Home);
}

#[test]
fn test_ctrl_c_quits_from_any_view() {
    let (mut app, _) = test_app();
    app.set_view(View::Chat);
    app.handle_key(ctrl('c'));
    assert!(app.should_quit);
}

#[test]
fn test_home_cards_and_shortcut() {
    let (mut app, _) = test_app();
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.view(), View::Simulation);

    app.set_view(View::Home);
    press(&mut app, KeyCode::Char('t'));
    assert_eq!(app.view(), View::Learn);

    app.set_view(View::Home);
    press(&mut app, KeyCode::Char('2'));
    assert_eq!(app.view(), View::Chat);
}

#[test]
fn test_chat_session_survives_leaving_the_view() {
    let (mut app, backend) = test_app();
    app.set_view(View::Chat);
    let first = app.assistant_session().unwrap().id();
    app.set_view(View::Learn);
    app.set_view(View::Chat);
    assert_eq!(app.assistant_session().unwrap().id(), first);
    assert_eq!(backend.sessions().len(), 1);
}

#[test]
fn test_library_keys_move_selection() {
    let (mut app, _) = test_app();
    app.set_view(View::Learn);

    press(&mut app, KeyCode::Down);
    assert_eq!(app.library.current_topic().id, LIBRARY[0].topics[1].id);

    press(&mut app, KeyCode::Right);
    assert_eq!(app.library.current_category().id, LIBRARY[1].id);
    assert_eq!(app.library.current_topic().id, LIBRARY[1].topics[0].id);

    press(&mut app, KeyCode::PageDown);
    assert_eq!(app.library.scroll(), 10);
    press(&mut app, KeyCode::Home);
    assert_eq!(app.library.scroll(), 0);
}

#[test]
fn test_library_resets_after_leaving() {
    let (mut app, _) = test_app();
    app.set_view(View::Learn);
    press(&mut app, KeyCode::Right);
    app.set_view(View::Home);
    app.set_view(View::Learn);
    assert_eq!(app.library.current_category().id, LIBRARY[0].id);
}

#[test]
fn test_catalog_number_starts_scenario() {
    let (mut app, backend) = test_app();
    app.set_view(View::Simulation);
    assert!(app.simulation.in_catalog());

    press(&mut app, KeyCode::Char('3'));
    assert!(!app.simulation.in_catalog());
    assert_eq!(app.simulation.selected().unwrap().id, SCENARIOS[2].id);
    assert_eq!(backend.sessions()[0].1, SCENARIOS[2].system_instruction);
    assert_eq!(app.simulation.chat.messages()[0].text, SIMULATION_GREETING);
}

#[test]
fn test_catalog_ignores_out_of_range_number() {
    let (mut app, backend) = test_app();
    app.set_view(View::Simulation);
    press(&mut app, KeyCode::Char('9'));
    assert!(app.simulation.in_catalog());
    assert!(backend.sessions().is_empty());
}

#[test]
fn test_escape_returns_to_catalog() {
    let (mut app, _) = test_app();
    app.set_view(View::Simulation);
    press(&mut app, KeyCode::Enter);
    assert!(!app.simulation.in_catalog());
    press(&mut app, KeyCode::Esc);
    assert!(app.simulation.in_catalog());
}

#[test]
fn test_leaving_simulation_resets_it() {
    let (mut app, _) = test_app();
    app.set_view(View::Simulation);
    press(&mut app, KeyCode::Enter);
    app.set_view(View::Home);
    app.set_view(View::Simulation);
    assert!(app.simulation.in_catalog());
}

#[tokio::test]
async fn test_hearing_exchange_uses_judge_session() {
    let (mut app, backend) = test_app();
    backend.push_reply(MockReply::fragments(["Se califica de legal", " la detención."]));
    let mut rx = take_receiver(&mut app);
    app.set_view(View::Simulation);
    press(&mut app, KeyCode::Enter);
    type_text(&mut app, "Solicito se califique de legal");
    press(&mut app, KeyCode::Enter);
    pump_until_done(&mut app, &mut rx).await;

    let messages = app.simulation.chat.messages();
    assert_eq!(messages.len(), 3);
    assert_eq!(messages[2].text, "Se califica de legal la detención.");
    assert_eq!(backend.sends()[0].persona, SCENARIOS[0].system_instruction);
}

#[test]
fn test_typing_on_home_does_not_reach_chat() {
    let (mut app, _) = test_app();
    app.handle_paste("texto");
    type_text(&mut app, "x");
    assert!(app.assistant_chat.input().is_empty());
}
