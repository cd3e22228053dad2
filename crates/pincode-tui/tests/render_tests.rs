//! Full-screen rendering through the demo host

use std::time::{Duration, Instant};

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use pincode_tui::app::{DemoConfig, Screen};
use pincode_tui::ui;
use pincode_tui::App;
use ratatui::backend::TestBackend;
use ratatui::Terminal;
use rstest::rstest;

fn screen_text(terminal: &Terminal<TestBackend>) -> String {
    let buffer = terminal.backend().buffer();
    let mut text = String::new();
    for y in 0..buffer.area.height {
        for x in 0..buffer.area.width {
            text.push_str(buffer[(x, y)].symbol());
        }
        text.push('\n');
    }
    text
}

fn draw(app: &App, now: Instant) -> (String, bool) {
    let mut terminal = Terminal::new(TestBackend::new(70, 34)).unwrap();
    let mut has_layout = false;
    terminal
        .draw(|frame| has_layout = ui::render(frame, app, now).is_some())
        .unwrap();
    (screen_text(&terminal), has_layout)
}

fn type_code(app: &mut App, code: &str, now: Instant) {
    for c in code.chars() {
        app.handle_key(KeyEvent::new(KeyCode::Char(c), KeyModifiers::NONE), now);
    }
}

#[rstest]
#[case(4, "•  •  •  •")]
#[case(6, "•  •  •  •  •  •")]
fn test_choose_screen(#[case] length: usize, #[case] row: &str) {
    let app = App::new(DemoConfig {
        password_length: length,
        ..DemoConfig::default()
    })
    .unwrap();

    let (text, has_layout) = draw(&app, Instant::now() + Duration::from_secs(1));

    assert!(has_layout);
    assert!(text.contains("1 - Enter a PIN Code"));
    assert!(text.contains(row));
    assert!(text.contains("[Backspace] Delete"));
}

#[test]
fn test_confirm_screen_after_choosing() {
    let mut app = App::new(DemoConfig::default()).unwrap();
    let t0 = Instant::now();
    type_code(&mut app, "2580", t0);
    app.update(t0 + Duration::from_millis(900)).unwrap();

    assert_eq!(app.state.screen, Screen::Confirm);
    let (text, _) = draw(&app, t0 + Duration::from_secs(2));
    assert!(text.contains("2 - Confirm your PIN Code"));
}

#[test]
fn test_custom_texts_from_config() {
    let mut config = DemoConfig::default();
    config.texts.choose.title = "Pick a code".to_string();
    config.style.circle_empty = Some('o');
    let app = App::new(config).unwrap();

    let (text, _) = draw(&app, Instant::now() + Duration::from_secs(1));
    assert!(text.contains("Pick a code"));
    assert!(text.contains("o  o  o  o"));
}

#[test]
fn test_unlocked_screen_has_no_pad() {
    let mut app = App::new(DemoConfig::default()).unwrap();
    app.state.screen = Screen::Unlocked;

    let (text, has_layout) = draw(&app, Instant::now());
    assert!(!has_layout);
    assert!(text.contains("PIN accepted"));
    assert!(text.contains("[r] Lock"));
}
