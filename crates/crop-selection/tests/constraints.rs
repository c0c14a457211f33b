//! Tests for the constraint geometry.
//!

use crop_selection::{
    Bounds, Config, Constraints, Dimensions, Direction, Handle, Point, Ratio, Rect,
    SelectionEngine, Sign,
    constrain::{Mode, apply_ratio, clamp_moving, clamp_to_bounds, constrain},
    gcd,
};

fn drag(config: Config, bounds: Bounds, from: Point, to: Point, square: bool) -> Rect {
    let mut engine = SelectionEngine::new(bounds, config);
    engine.begin_drag(from);
    engine.update(to, square).unwrap()
}

fn bounds() -> Bounds {
    Bounds::new(800, 600)
}

#[test]
fn ratio_is_reduced() {
    assert_eq!(gcd(12, 8), 4);
    assert_eq!(gcd(5, 0), 5);
    assert_eq!(Ratio::new(1920, 1080).reduced(), Ratio::new(16, 9));
    assert_eq!(Ratio::new(16, 0).reduced(), Ratio::default());
    assert_eq!(Ratio::new(-4, 3).reduced(), Ratio::default());
}

#[test]
fn negative_config_is_unconstrained() {
    let constraints = Constraints::from_config(&Config {
        min_width: -10,
        max_height: -3,
        ..Default::default()
    });

    assert_eq!(constraints.min, Dimensions::default());
    assert_eq!(constraints.max, Dimensions::default());
    assert!(!constraints.has_dimension_limits());
}

#[test]
fn fixed_flags() {
    let constraints = Constraints::from_config(&Config {
        min_width: 60,
        max_width: 50,
        min_height: 10,
        max_height: 20,
        ..Default::default()
    });

    assert!(constraints.fixed_width);
    assert!(!constraints.fixed_height);
}

#[test]
fn ratio_second_pass_positive() {
    let config = Config {
        ratio: Ratio::new(4, 3),
        ..Default::default()
    };

    let rect = drag(
        config,
        bounds(),
        Point::new(0, 400),
        Point::new(400, 500),
        false,
    );

    assert_eq!(rect, Rect::new(0, 400, 266, 600));
}

#[test]
fn ratio_second_pass_negative() {
    let config = Config {
        ratio: Ratio::new(4, 3),
        ..Default::default()
    };

    let rect = drag(
        config,
        bounds(),
        Point::new(800, 100),
        Point::new(400, 50),
        false,
    );

    assert_eq!(rect, Rect::new(667, 0, 800, 100));
}

#[test]
fn ratio_ignored_when_unset() {
    let rect = Rect::new(10, 10, 20, 90);
    let direction = Direction::default();

    assert_eq!(
        apply_ratio(rect, Ratio::default(), direction, None, bounds()),
        rect
    );
}

#[test]
fn min_width_pins_to_far_edge() {
    let config = Config {
        min_width: 50,
        ..Default::default()
    };
    let bounds = Bounds::new(100, 100);

    let rect = drag(config, bounds, Point::new(90, 10), Point::new(95, 20), false);
    assert_eq!(rect, Rect::new(50, 10, 100, 20));

    let rect = drag(config, bounds, Point::new(10, 10), Point::new(5, 20), false);
    assert_eq!(rect, Rect::new(0, 10, 50, 20));
}

#[test]
fn max_dimensions_follow_direction() {
    let config = Config {
        max_width: 200,
        max_height: 100,
        ..Default::default()
    };

    let rect = drag(
        config,
        bounds(),
        Point::new(100, 100),
        Point::new(500, 400),
        false,
    );
    assert_eq!(rect, Rect::new(100, 100, 300, 200));

    let rect = drag(
        config,
        bounds(),
        Point::new(500, 400),
        Point::new(100, 100),
        false,
    );
    assert_eq!(rect, Rect::new(300, 300, 500, 400));
}

#[test]
fn min_larger_than_image_is_capped() {
    let config = Config {
        min_width: 50,
        ..Default::default()
    };

    let rect = drag(
        config,
        Bounds::new(40, 40),
        Point::new(0, 0),
        Point::new(10, 10),
        false,
    );

    assert_eq!(rect, Rect::new(0, 0, 40, 10));
}

#[test]
fn square_modifier() {
    let rect = drag(
        Config::default(),
        bounds(),
        Point::new(100, 100),
        Point::new(300, 150),
        true,
    );

    assert_eq!(rect, Rect::new(100, 100, 300, 300));
}

#[test]
fn square_mirrors_single_minimum() {
    let config = Config {
        min_width: 80,
        ..Default::default()
    };

    let squared = drag(config, bounds(), Point::new(0, 0), Point::new(10, 10), true);
    assert_eq!(squared, Rect::new(0, 0, 80, 80));

    let free = drag(config, bounds(), Point::new(0, 0), Point::new(10, 10), false);
    assert_eq!(free, Rect::new(0, 0, 80, 10));
}

#[test]
fn square_uses_smaller_maximum() {
    let config = Config {
        max_width: 100,
        max_height: 60,
        ..Default::default()
    };
    let rect = drag(config, bounds(), Point::new(0, 0), Point::new(300, 300), true);
    assert_eq!(rect, Rect::new(0, 0, 60, 60));

    let config = Config {
        max_height: 50,
        ..Default::default()
    };
    let rect = drag(config, bounds(), Point::new(0, 0), Point::new(200, 100), true);
    assert_eq!(rect, Rect::new(0, 0, 50, 50));
}

#[test]
fn minimum_applies_after_ratio() {
    let config = Config {
        ratio: Ratio::new(2, 1),
        min_height: 100,
        ..Default::default()
    };

    let rect = drag(config, bounds(), Point::new(0, 0), Point::new(100, 10), false);

    assert_eq!(rect, Rect::new(0, 0, 100, 100));
}

#[test]
fn handle_visibility() {
    let visible = |config: Config| -> Vec<Handle> {
        SelectionEngine::new(bounds(), config)
            .visible_handles()
            .collect()
    };

    assert_eq!(visible(Config::default()), Handle::ALL.to_vec());

    let both = Config {
        min_width: 50,
        max_width: 50,
        min_height: 20,
        max_height: 20,
        ..Default::default()
    };
    assert!(visible(both).is_empty());

    let width = Config {
        min_width: 50,
        max_width: 50,
        ..Default::default()
    };
    assert_eq!(visible(width), vec![Handle::N, Handle::S]);

    let height = Config {
        min_height: 50,
        max_height: 50,
        ..Default::default()
    };
    assert_eq!(visible(height), vec![Handle::E, Handle::W]);
}

#[test]
fn clamp_to_bounds_is_idempotent() {
    let rect = Rect::new(-20, 30, 900, 700);

    let once = clamp_to_bounds(rect, bounds());
    assert_eq!(once, Rect::new(0, 30, 800, 600));
    assert_eq!(clamp_to_bounds(once, bounds()), once);
}

#[test]
fn constrain_is_idempotent_on_valid_selection() {
    let constraints = Constraints::from_config(&Config {
        min_width: 20,
        max_height: 300,
        ..Default::default()
    });
    let mode = Mode::Resizing {
        direction: Direction {
            x: Sign::Negative,
            y: Sign::Positive,
        },
        handle: Some(Handle::SW),
        square: false,
    };

    let rect = Rect::new(100, 100, 150, 350);
    let once = constrain(rect, bounds(), &constraints, mode);
    assert_eq!(once, Rect::new(100, 100, 150, 350));
    assert_eq!(constrain(once, bounds(), &constraints, mode), once);
}

#[test]
fn moving_keeps_size() {
    let rect = Rect::new(700, 550, 790, 590).translate(50, 50);

    let moved = clamp_moving(rect, bounds());

    assert_eq!(moved, Rect::new(710, 560, 800, 600));
    assert_eq!(moved.dimensions(), rect.dimensions());
}

#[test]
fn translate_saturates_without_resizing() {
    let rect = Rect::new(10, 10, 60, 60).translate(i32::MAX, i32::MIN);

    assert_eq!(rect, Rect::new(i32::MAX - 50, i32::MIN, i32::MAX, i32::MIN + 50));
    assert_eq!(clamp_moving(rect, bounds()), Rect::new(750, 0, 800, 50));
}
