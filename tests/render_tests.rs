//! Tests for the rendered line format.

use tickbar::bar::LINE_ENDING;
use tickbar::{BarChars, ProgressBar};

mod common;
use common::helpers::*;

#[test]
fn test_render_fresh_bar() {
    let (mut bar, _clock) = create_test_bar();
    assert_eq!(
        bar.render(),
        "0%    [>         ] 0/10  | Estimated time: Calculating...\r"
    );
}

#[test]
fn test_render_half_way() {
    let (mut bar, _clock) = create_test_bar();
    bar.add(5.0).unwrap();
    assert_eq!(
        bar.render(),
        "50%   [=====>    ] 5/10  | Estimated time: Calculating...\r"
    );
}

#[test]
fn test_render_complete_overflows_body() {
    let (mut bar, _clock) = create_test_bar();
    bar.add(10.0).unwrap();
    assert_eq!(
        bar.render(),
        "100%  [==========>] 10/10 | Estimated time: Calculating...\r"
    );
}

#[test]
#[allow(deprecated)]
fn test_render_set_completed_past_total() {
    let (mut bar, _clock) = create_test_bar();
    bar.set_completed(15.0).unwrap();
    let line = bar.render();

    assert_eq!(percent_label_of(&line), "100");
    assert_eq!(counter_field_of(&line), "10/10");
    assert!(body_of(&line).ends_with("=>"));
    assert_eq!(body_of(&line).len(), TEST_WIDTH + 1);
}

#[test]
fn test_render_is_idempotent() {
    let (mut bar, clock) = create_test_bar();
    bar.add(3.0).unwrap();
    let first = bar.render();
    clock.advance(1);
    let second = bar.render();
    assert_eq!(first, second);
}

#[test]
fn test_display_matches_render_without_refresh() {
    let (mut bar, clock) = create_test_bar();
    bar.add(5.0).unwrap();
    clock.set(5_000);

    // Display does not move the estimator, render does.
    assert_eq!(estimate_of(&bar.to_string()), CALCULATING);
    let rendered = bar.render();
    assert_eq!(estimate_of(&rendered), "4s Left");
    assert_eq!(bar.to_string(), rendered);
}

#[test]
fn test_render_rounds_half_away_from_zero() {
    let (mut bar, _clock) = create_mock_bar(8.0, 8);
    bar.add(1.0).unwrap();
    assert_eq!(
        bar.render(),
        "13%   [=>      ] 1/8 | Estimated time: Calculating...\r"
    );

    let (mut bar, _clock) = create_mock_bar(8.0, 8);
    bar.add(5.0).unwrap();
    assert_eq!(percent_label_of(&bar.render()), "63");
}

#[test]
fn test_render_rounded_hundred_without_overflow() {
    let (mut bar, _clock) = create_mock_bar(250.0, 10);
    bar.add(249.0).unwrap();
    let line = bar.render();

    assert_eq!(percent_label_of(&line), "100");
    assert_eq!(body_of(&line), "=========>");
    assert_eq!(counter_field_of(&line), "249/250");
}

#[test]
fn test_render_counter_padding() {
    let (mut bar, _clock) = create_mock_bar(1000.0, 5);
    bar.add(7.0).unwrap();
    assert_eq!(counter_field_of(&bar.render()), "7/1000   ");

    bar.add(993.0).unwrap();
    assert_eq!(counter_field_of(&bar.render()), "1000/1000");
}

#[test]
fn test_render_fractional_values_truncate() {
    let (mut bar, _clock) = create_mock_bar(10.5, 10);
    bar.add(2.9).unwrap();
    assert_eq!(counter_field_of(&bar.render()), "2/10 ");

    bar.add(8.0).unwrap();
    assert_eq!(counter_field_of(&bar.render()), "10/10");
}

#[test]
#[allow(deprecated)]
fn test_render_negative_completed() {
    let (mut bar, _clock) = create_test_bar();
    bar.remove(1.0).unwrap();
    assert_eq!(
        bar.render(),
        "-10%  [          ] -1/10 | Estimated time: Calculating...\r"
    );
}

#[test]
fn test_render_percent_field_width() {
    for (completed, label) in [(0.0, "0%   "), (1.0, "10%  "), (10.0, "100% ")] {
        let (mut bar, _clock) = create_test_bar();
        if completed > 0.0 {
            bar.add(completed).unwrap();
        }
        assert!(bar.render().starts_with(&format!("{label} [")));
    }
}

#[test]
fn test_render_width_one() {
    let (mut bar, _clock) = create_mock_bar(2.0, 1);
    assert_eq!(body_of(&bar.render()), ">");
    bar.add(1.0).unwrap();
    assert_eq!(body_of(&bar.render()), ">");
    bar.add(1.0).unwrap();
    assert_eq!(body_of(&bar.render()), "=>");
}

#[test]
fn test_render_custom_chars() {
    let mut bar = ProgressBar::builder(10.0, 10)
        .chars(BarChars::parse(BarChars::CHARS_HASH).unwrap())
        .clock(tickbar::MockClock::new())
        .build()
        .unwrap();
    bar.add(3.0).unwrap();
    assert_eq!(body_of(&bar.render()), "###>......");
}

#[test]
fn test_render_ends_with_single_carriage_return() {
    let (mut bar, _clock) = create_test_bar();
    let line = bar.render();
    assert!(line.ends_with('\r'));
    assert_eq!(line.matches('\r').count(), 1);
    assert!(!line.contains('\n'));
}

#[test]
fn test_print_to_appends_line_terminator() {
    let (mut bar, _clock) = create_test_bar();
    bar.add(5.0).unwrap();

    let mut buf = Vec::new();
    bar.print_to(&mut buf).unwrap();
    let out = String::from_utf8(buf).unwrap();

    assert_eq!(out, format!("{}{}", bar.render(), LINE_ENDING));
    if cfg!(windows) {
        assert!(out.ends_with("\r\r\n"));
    } else {
        assert!(out.ends_with("\r\n"));
    }
}
