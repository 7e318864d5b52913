use super::{Color, Phase, CYCLE_DAYS};

#[test]
fn phase_boundaries_are_fixed() {
    assert_eq!(Phase::of_day(0), Phase::Menstrual);
    assert_eq!(Phase::of_day(4), Phase::Menstrual);
    assert_eq!(Phase::of_day(5), Phase::Follicular);
    assert_eq!(Phase::of_day(12), Phase::Follicular);
    assert_eq!(Phase::of_day(13), Phase::Ovulation);
    assert_eq!(Phase::of_day(15), Phase::Ovulation);
    assert_eq!(Phase::of_day(16), Phase::Luteal);
    assert_eq!(Phase::of_day(CYCLE_DAYS - 1), Phase::Luteal);
}

#[test]
fn lerp_stays_within_channel_bounds() {
    let start = Color::rgb(255, 182, 193);
    let end = Color::rgb(155, 82, 143);

    assert_eq!(start.lerp(end, 0.0), start);
    assert_eq!(start.lerp(end, 1.0), end);
    // 範囲外の比率は端へ丸める
    assert_eq!(start.lerp(end, -0.5), start);
    assert_eq!(start.lerp(end, 1.5), end);

    for i in 0..=100 {
        let c = start.lerp(end, i as f64 / 100.0);
        assert!((155..=255).contains(&c.r));
        assert!((82..=182).contains(&c.g));
        assert!((143..=193).contains(&c.b));
        assert_eq!(c.a, 255);
    }
}

#[test]
fn over_white_removes_alpha() {
    assert_eq!(
        Color::rgba(255, 255, 255, 0).over_white(),
        Color::rgb(255, 255, 255)
    );
    assert_eq!(Color::rgb(10, 20, 30).over_white(), Color::rgb(10, 20, 30));

    let mixed = Color::rgba(0, 0, 0, 128).over_white();
    assert_eq!(mixed.a, 255);
    assert!(0 < mixed.r && mixed.r < 255);
}
