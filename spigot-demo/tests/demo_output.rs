use spigot_core::StepSize;
use spigot_demo::Driver;
use uom::si::{f64::Time, time::second};

fn run_demo() -> String {
    let driver = Driver::new(
        StepSize::new::<second>(0.1).unwrap(),
        Time::new::<second>(1.0),
    );

    let mut out = Vec::new();
    driver.run(&mut out).unwrap();
    String::from_utf8(out).unwrap()
}

#[test]
fn every_tick_renders_all_three_objects() {
    let text = run_demo();

    // Eleven ticks of four lines each: the loop runs once past the
    // nominal end of the window.
    assert_eq!(text.lines().count(), 44);
    assert_eq!(text.matches("Tick at").count(), 11);
    assert_eq!(text.matches("Classic object position:").count(), 11);
    assert_eq!(text.matches("Value-source object position:").count(), 11);
    assert_eq!(
        text.matches("Reactive programming object position:").count(),
        11
    );
}

#[test]
fn all_three_styles_agree_on_the_first_tick() {
    let text = run_demo();
    let lines: Vec<&str> = text.lines().collect();

    assert_eq!(lines[0], "Tick at 0.1");
    assert_eq!(lines[1], "Classic object position: 1.40");
    assert_eq!(lines[2], "Value-source object position: 1.40");
    assert_eq!(lines[3], "Reactive programming object position: 1.40");
}

#[test]
fn the_overshoot_tick_shows_the_clamp() {
    let text = run_demo();
    let lines: Vec<&str> = text.lines().collect();

    // The stepped objects sail past the end of the window while the
    // interpolated sweep holds at its upper bound.
    assert_eq!(lines[40], "Tick at 1.1");
    assert_eq!(lines[41], "Classic object position: 5.40");
    assert_eq!(lines[42], "Value-source object position: 5.40");
    assert_eq!(lines[43], "Reactive programming object position: 5.00");
}

#[test]
fn the_stepped_styles_stay_in_lockstep_throughout() {
    let text = run_demo();

    for tick in text.lines().collect::<Vec<_>>().chunks(4) {
        let classic = tick[1].strip_prefix("Classic object position: ").unwrap();
        let sourced = tick[2]
            .strip_prefix("Value-source object position: ")
            .unwrap();
        assert_eq!(classic, sourced);
    }
}
