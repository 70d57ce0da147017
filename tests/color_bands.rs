use pm_poster::viz::{AqiBand, pm25_color};
use plotters::style::RGBColor;

const PALETTE: [RGBColor; 5] = [
    RGBColor(0, 157, 224),
    RGBColor(0, 175, 80),
    RGBColor(255, 192, 0),
    RGBColor(255, 122, 0),
    RGBColor(237, 28, 36),
];

#[test]
fn boundaries_are_inclusive() {
    assert_eq!(pm25_color(15.0), RGBColor(0, 157, 224));
    assert_eq!(pm25_color(15.01), RGBColor(0, 175, 80));
    assert_eq!(pm25_color(25.0), RGBColor(0, 175, 80));
    assert_eq!(pm25_color(37.5), RGBColor(255, 192, 0));
    assert_eq!(pm25_color(75.0), RGBColor(255, 122, 0));
    assert_eq!(pm25_color(75.01), RGBColor(237, 28, 36));
}

#[test]
fn every_value_maps_to_the_palette() {
    for i in -100..=3000 {
        let v = i as f64 * 0.1;
        assert!(PALETTE.contains(&pm25_color(v)), "value {v} got an unknown color");
    }
    assert!(PALETTE.contains(&pm25_color(f64::MAX)));
    assert!(PALETTE.contains(&pm25_color(f64::NEG_INFINITY)));
}

#[test]
fn severity_never_decreases_as_value_grows() {
    let mut prev = AqiBand::classify(-1.0);
    for i in 0..=2000 {
        let v = i as f64 * 0.05;
        let band = AqiBand::classify(v);
        assert!(band >= prev, "band dropped from {prev:?} to {band:?} at {v}");
        prev = band;
    }
    assert_eq!(prev, AqiBand::Unhealthy);
}

#[test]
fn bands_are_listed_in_severity_order() {
    let all = AqiBand::all();
    assert!(all.windows(2).all(|w| w[0] < w[1]));
    let colors: Vec<RGBColor> = all.iter().map(|b| b.color()).collect();
    assert_eq!(colors, PALETTE.to_vec());
}
