use drill_core::SoundCue;

use crate::vm::{CORRECT_MESSAGE, TRY_AGAIN_MESSAGE};

use super::test_harness::setup_view_harness;

/// A typed sequence that is judged wrong as soon as it is complete.
fn wrong_input_for(answer: &str) -> String {
    if answer.len() == 1 {
        if answer == "1" { "2".into() } else { "1".into() }
    } else {
        "11".into()
    }
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_renders_question_and_keypad() {
    let mut harness = setup_view_harness();
    harness.rebuild();
    let html = harness.render();

    assert!(html.contains("趣味数字游戏"), "missing title in {html}");
    assert!(html.contains("= ?"), "missing question in {html}");
    assert!(html.contains("你的答案:"), "missing answer label in {html}");
    assert!(html.contains("得分:"), "missing score label in {html}");
    assert!(html.contains("使用键盘数字键也可以哦！"), "missing hint in {html}");
    for digit in 0..=9 {
        let id = format!("keypad-{digit}");
        assert!(html.contains(&id), "missing {id} in {html}");
    }
    assert!(!html.contains("drill-celebration"), "unexpected celebration in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_correct_answer_celebrates_then_advances() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    let answer = harness.expected_answer();
    harness.press_text(&answer);
    let html = harness.render();
    assert!(html.contains(CORRECT_MESSAGE), "missing praise in {html}");
    assert!(html.contains("drill-celebration"), "missing star in {html}");
    assert!(html.contains("keypad__button--bounce"), "missing bounce in {html}");
    assert_eq!(harness.score(), 1);

    // Celebration window: typing is ignored.
    harness.press_text("1");
    assert_eq!(harness.input_text(), answer);

    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains(CORRECT_MESSAGE), "praise should clear in {html}");
    assert!(!html.contains("drill-celebration"), "star should clear in {html}");
    assert_eq!(harness.input_text(), "");
    assert_eq!(harness.score(), 1);

    let played = harness.player.played();
    assert_eq!(played.last(), Some(&SoundCue::Correct));
}

#[tokio::test(flavor = "current_thread")]
async fn drill_view_smoke_wrong_answer_clears_and_keeps_question() {
    let mut harness = setup_view_harness();
    harness.rebuild();

    let answer = harness.expected_answer();
    let wrong = wrong_input_for(&answer);
    harness.press_text(&wrong);
    let html = harness.render();
    assert!(html.contains(TRY_AGAIN_MESSAGE), "missing retry message in {html}");
    assert_eq!(harness.input_text(), wrong);
    assert_eq!(harness.score(), 0);

    harness.settle().await;
    let html = harness.render();
    assert!(!html.contains(TRY_AGAIN_MESSAGE), "retry message should clear in {html}");
    assert_eq!(harness.input_text(), "");
    assert_eq!(harness.expected_answer(), answer);
    assert!(harness.player.played().contains(&SoundCue::Incorrect));
}
