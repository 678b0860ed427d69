use umg::config::GameConfig;
use umg::engine::Engine;
use umg::game::Platformer;
use umg::input::{FingerId, KeyCode, MOUSE_FINGER};
use umg::ui::Blend;
use winit::event::{MouseButton, TouchPhase};

fn setup() -> (Engine, Platformer) {
    let config = GameConfig::default();
    let game = Platformer::new(&config);
    (Engine::headless(config), game)
}

#[test]
fn engine_steps_at_fixed_rate() {
    let (mut engine, mut game) = setup();
    assert!((engine.dt() - 1.0 / 60.0).abs() < 1e-6);
    engine.step(&mut game);
    engine.step(&mut game);
    assert_eq!(engine.tick(), 2);
    assert!((engine.time() - 2.0 / 60.0).abs() < 1e-6);
}

#[test]
fn touch_on_stick_walks_player_right() {
    let (mut engine, mut game) = setup();
    let start = game.player.position.x;

    engine.touch(TouchPhase::Started, 7, 170.0, 680.0);
    engine.step(&mut game);

    assert_eq!(game.controls.joystick.owner(), Some(FingerId(7)));
    assert!((game.last_output().move_x - 50.0 / 60.0).abs() < 1e-5);
    assert!(game.player.position.x > start);

    engine.touch(TouchPhase::Ended, 7, 170.0, 680.0);
    engine.step(&mut game);
    assert!(!game.controls.joystick.is_active());
    assert_eq!(game.last_output().move_x, 0.0);
}

#[test]
fn jump_button_launches_player() {
    let (mut engine, mut game) = setup();
    engine.touch(TouchPhase::Started, 1, 360.0, 680.0);
    engine.step(&mut game);
    assert!(game.last_output().jump);
    assert!(!game.player.is_grounded());
}

#[test]
fn focus_loss_releases_controls() {
    let (mut engine, mut game) = setup();
    engine.touch(TouchPhase::Started, 1, 150.0, 680.0);
    engine.step(&mut game);
    assert!(game.controls.joystick.is_active());

    engine.focus_lost();
    engine.step(&mut game);
    assert!(!game.controls.joystick.is_active());
    assert_eq!(game.last_output().move_x, 0.0);
}

#[test]
fn left_mouse_button_acts_as_finger() {
    let (mut engine, mut game) = setup();
    engine.cursor_moved(150.0, 680.0);
    engine.mouse_button(MouseButton::Left, true);
    engine.step(&mut game);
    assert_eq!(game.controls.joystick.owner(), Some(MOUSE_FINGER));

    engine.cursor_moved(60.0, 680.0);
    engine.step(&mut game);
    assert!((game.last_output().move_x + 1.0).abs() < 1e-6);

    engine.mouse_button(MouseButton::Left, false);
    engine.step(&mut game);
    assert!(!game.controls.joystick.is_active());
}

#[test]
fn touches_are_scaled_to_logical_coordinates() {
    let (mut engine, mut game) = setup();
    engine.resized(960, 1600);
    engine.touch(TouchPhase::Started, 1, 300.0, 1360.0);
    engine.step(&mut game);
    assert_eq!(game.controls.joystick.owner(), Some(FingerId(1)));
}

#[test]
fn committed_text_reaches_open_chat() {
    let (mut engine, mut game) = setup();
    let input_box = game.controls.chat.layout().input_box.center();

    engine.touch(TouchPhase::Started, 1, input_box.x as f64, input_box.y as f64);
    engine.step(&mut game);
    engine.touch(TouchPhase::Ended, 1, input_box.x as f64, input_box.y as f64);
    engine.step(&mut game);
    assert!(game.controls.chat.is_open());

    engine.ime_commit("hello");
    engine.step(&mut game);
    assert_eq!(game.controls.chat.draft(), "hello");

    engine.key(KeyCode::Enter, true, None);
    engine.step(&mut game);
    assert!(!game.controls.chat.is_open());
    assert_eq!(game.controls.chat.sent(), "hello");
}

fn open_chat(engine: &mut Engine, game: &mut Platformer) {
    let input_box = game.controls.chat.layout().input_box.center();
    engine.touch(TouchPhase::Started, 1, input_box.x as f64, input_box.y as f64);
    engine.step(game);
    engine.touch(TouchPhase::Ended, 1, input_box.x as f64, input_box.y as f64);
    engine.step(game);
    assert!(game.controls.chat.is_open());
}

#[test]
fn commit_then_enter_in_one_step_sends_the_text() {
    let (mut engine, mut game) = setup();
    open_chat(&mut engine, &mut game);

    engine.ime_commit("hello");
    engine.key(KeyCode::Enter, true, Some("\r"));
    engine.step(&mut game);

    assert!(!game.controls.chat.is_open());
    assert_eq!(game.controls.chat.sent(), "hello");
    assert_eq!(game.controls.chat.draft(), "");
}

#[test]
fn keys_then_backspace_in_one_step_delete_the_last_letter() {
    let (mut engine, mut game) = setup();
    open_chat(&mut engine, &mut game);

    engine.key(KeyCode::KeyA, true, Some("a"));
    engine.key(KeyCode::KeyA, false, None);
    engine.key(KeyCode::KeyB, true, Some("b"));
    engine.key(KeyCode::KeyB, false, None);
    engine.key(KeyCode::Backspace, true, None);
    engine.step(&mut game);
    assert_eq!(game.controls.chat.draft(), "a");

    // Still held: no second deletion.
    engine.step(&mut game);
    engine.step(&mut game);
    assert_eq!(game.controls.chat.draft(), "a");
    assert!(!engine.input.is_key_pressed(KeyCode::Backspace));
}

#[test]
fn backspace_then_keys_in_one_step_keep_both_letters() {
    let (mut engine, mut game) = setup();
    open_chat(&mut engine, &mut game);
    engine.ime_commit("x");
    engine.step(&mut game);

    engine.key(KeyCode::Backspace, true, None);
    engine.ime_commit("ab");
    engine.step(&mut game);
    assert_eq!(game.controls.chat.draft(), "ab");
}

#[test]
fn night_render_uses_every_blend_mode() {
    let (mut engine, mut game) = setup();
    game.player.position.x = 3500.0;
    engine.step(&mut game);
    assert_eq!(game.daynight.night(), 1.0);
    engine.render(&mut game);

    assert!(!engine.draw.is_empty());
    let blends: Vec<Blend> = engine.draw.batches().iter().map(|b| b.blend).collect();
    assert!(blends.contains(&Blend::Multiply));
    assert!(blends.contains(&Blend::Additive));
    assert_eq!(blends.first(), Some(&Blend::Alpha));

    let before = engine.draw.vertex_count();
    engine.render(&mut game);
    assert_eq!(engine.draw.vertex_count(), before, "render rebuilds from scratch");
}
