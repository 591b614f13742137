use marcenaria::data::projects;
use marcenaria::models::{Audience, Category, ColorError, Rgb};
use marcenaria::services::audience::{AudienceStore, MemoryAudienceStore};
use marcenaria::services::color::{
    blend_color, complementary_color, hex_to_rgb, is_light_color, rgb_to_hex, with_alpha,
};
use marcenaria::services::portfolio::{featured, ProjectQuery, YearOrder};
use pretty_assertions::assert_eq;

fn channel_distance(a: &str, b: &str) -> u8 {
    let a = hex_to_rgb(a).unwrap().channels();
    let b = hex_to_rgb(b).unwrap().channels();
    a.iter().zip(b).map(|(x, y)| x.abs_diff(y)).max().unwrap_or(0)
}

#[test]
fn hex_round_trips_case_insensitively() {
    for hex in ["#000000", "#FFFFFF", "#D3A17E", "#0a0B0c", "#5b3a29", "#7F7F7F"] {
        let rgb = hex_to_rgb(hex).unwrap();
        let back = rgb_to_hex(i32::from(rgb.r), i32::from(rgb.g), i32::from(rgb.b));
        assert!(back.eq_ignore_ascii_case(hex), "{hex} -> {back}");
        assert_eq!(rgb.to_string(), back);
    }
}

#[test]
fn shorthand_matches_long_form() {
    assert_eq!(hex_to_rgb("#FFF"), hex_to_rgb("#FFFFFF"));
    assert_eq!("#fff".parse::<Rgb>(), Ok(Rgb::WHITE));
}

#[test]
fn blend_endpoints_within_rounding() {
    let pairs = [("#123456", "#fedcba"), ("#d3a17e", "#1f1a17"), ("#000", "#fff")];
    for (a, b) in pairs {
        assert!(channel_distance(&blend_color(a, b, 0.0).unwrap(), a) <= 1);
        assert!(channel_distance(&blend_color(a, b, 1.0).unwrap(), b) <= 1);
    }
    assert_eq!(blend_color("#000000", "#FFFFFF", 0.5).unwrap(), "#808080");
}

#[test]
fn documented_values() {
    assert_eq!(is_light_color("#FFFFFF"), Ok(true));
    assert_eq!(is_light_color("#000000"), Ok(false));
    assert!(complementary_color("#000000").unwrap().eq_ignore_ascii_case("#FFFFFF"));
    assert!(complementary_color("#FF0000").unwrap().eq_ignore_ascii_case("#00FFFF"));
    assert_eq!(with_alpha("#D3A17E", 0.5).unwrap(), "rgba(211, 161, 126, 0.5)");
}

#[test]
fn invalid_input_is_reported_not_masked() {
    let bad = "notacolor";
    let err = ColorError::InvalidHex(bad.to_string());
    assert_eq!(hex_to_rgb(bad), Err(err.clone()));
    assert_eq!(blend_color(bad, "#fff", 0.5), Err(err.clone()));
    assert_eq!(with_alpha(bad, 0.5), Err(err.clone()));
    assert_eq!(is_light_color(bad), Err(err.clone()));
    assert_eq!(complementary_color(bad), Err(err));
    // a real black is still distinguishable
    assert_eq!(hex_to_rgb("#000"), Ok(Rgb::BLACK));
}

#[test]
fn featured_and_sorted_views_of_the_portfolio() {
    let all = projects();

    let highlights = featured(&all);
    assert!(!highlights.is_empty());
    assert!(highlights.iter().all(|p| p.featured));
    assert_eq!(
        highlights.len(),
        all.iter().filter(|p| p.featured).count()
    );

    for order in YearOrder::all() {
        let sorted = ProjectQuery { category: None, order }.apply(&all);
        assert_eq!(sorted.len(), all.len());
        let mut ids: Vec<u32> = sorted.iter().map(|p| p.id).collect();
        ids.sort_unstable();
        let mut expected: Vec<u32> = all.iter().map(|p| p.id).collect();
        expected.sort_unstable();
        assert_eq!(ids, expected);

        let years: Vec<u16> = sorted.iter().map(|p| p.year).collect();
        let ordered = years.windows(2).all(|w| match order {
            YearOrder::Newest => w[0] >= w[1],
            YearOrder::Oldest => w[0] <= w[1],
        });
        assert!(ordered, "{order:?}: {years:?}");
    }

    let residential = ProjectQuery {
        category: Some(Category::Residential),
        order: YearOrder::Newest,
    }
    .apply(&all);
    assert!(residential.iter().all(|p| p.category == Category::Residential));
}

#[test]
fn audience_choice_persists_only_known_values() {
    let store = MemoryAudienceStore::with_raw("wholesale");
    assert_eq!(store.load(), None);

    store.save(Audience::B2c);
    assert_eq!(store.raw().as_deref(), Some("b2c"));
    assert_eq!(store.load(), Some(Audience::B2c));
}
