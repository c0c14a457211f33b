//! Randomized gesture sequences checked against the engine's invariants.
//!

use crop_selection::{
    ArrowKey, Bounds, Config, Handle, Point, Ratio, Rect, SelectionEngine,
    constrain::clamp_to_bounds,
};
use rand::{Rng, SeedableRng, rngs::StdRng};

const SEQUENCES: usize = 200;
const STEPS: usize = 40;

fn random_point(rng: &mut StdRng, bounds: Bounds) -> Point {
    // Reach past the image so clamping is exercised.
    Point::new(
        rng.random_range(-50..=bounds.width + 50),
        rng.random_range(-50..=bounds.height + 50),
    )
}

fn random_config(rng: &mut StdRng, bounds: Bounds) -> Config {
    let mut config = Config::default();

    if rng.random_bool(0.5) {
        config.ratio = Ratio::new(rng.random_range(1..=20), rng.random_range(1..=20));
    }
    if rng.random_bool(0.3) {
        config.min_width = rng.random_range(1..=bounds.width + 20);
    }
    if rng.random_bool(0.3) {
        config.min_height = rng.random_range(1..=bounds.height + 20);
    }
    if rng.random_bool(0.3) {
        config.max_width = rng.random_range(1..=bounds.width + 20);
    }
    if rng.random_bool(0.3) {
        config.max_height = rng.random_range(1..=bounds.height + 20);
    }

    config
}

fn random_bounds(rng: &mut StdRng) -> Bounds {
    Bounds::new(rng.random_range(1..=400), rng.random_range(1..=400))
}

/// Runs a random mix of gestures, calling `check` after every change.
fn run(rng: &mut StdRng, engine: &mut SelectionEngine, mut check: impl FnMut(Rect, Rect)) {
    let bounds = engine.bounds();

    for _ in 0..STEPS {
        let before = engine.rect().unwrap_or_default();

        match rng.random_range(0..4) {
            0 => {
                engine.begin_drag(random_point(rng, bounds));
            }
            1 => {
                let handle = Handle::ALL[rng.random_range(0..Handle::ALL.len())];
                engine.begin_resize(handle, before);
            }
            2 => {
                engine.begin_move(random_point(rng, bounds));
            }
            _ => {
                let key = [ArrowKey::Left, ArrowKey::Up, ArrowKey::Right, ArrowKey::Down]
                    [rng.random_range(0..4)];
                if let Some(rect) = engine.nudge(key, rng.random_bool(0.5)) {
                    check(before, rect);
                }
                continue;
            }
        }

        for _ in 0..rng.random_range(0..5) {
            let previous = engine.rect().unwrap_or_default();
            let square = rng.random_bool(0.3);
            if let Some(rect) = engine.update(random_point(rng, bounds), square) {
                check(previous, rect);
            }
        }

        engine.end_gesture();
    }
}

#[test]
fn selection_stays_in_bounds() {
    let mut rng = StdRng::seed_from_u64(0x5e1ec7);

    for _ in 0..SEQUENCES {
        let bounds = random_bounds(&mut rng);
        let config = random_config(&mut rng, bounds);
        let mut engine = SelectionEngine::new(bounds, config);

        run(&mut rng, &mut engine, |_, rect| {
            assert!(
                rect.is_within(bounds),
                "{rect:?} escaped {bounds:?} with {config:?}"
            );
        });
    }
}

#[test]
fn fixed_width_never_changes() {
    let mut rng = StdRng::seed_from_u64(42);

    for _ in 0..SEQUENCES {
        let bounds = random_bounds(&mut rng);
        let width = rng.random_range(1..=bounds.width);
        // A smaller max height would win on both axes while squaring.
        let config = Config {
            min_width: width,
            max_width: width,
            max_height: 0,
            ..random_config(&mut rng, bounds)
        };
        let mut engine = SelectionEngine::new(bounds, config);

        run(&mut rng, &mut engine, |_, rect| {
            // A click without a drag leaves an empty selection that can still be nudged.
            if rect.is_empty() {
                return;
            }

            assert_eq!(rect.width(), width, "{rect:?} with {config:?}");
        });
    }
}

#[test]
fn ratio_holds_unless_clamped() {
    let mut rng = StdRng::seed_from_u64(7);

    for _ in 0..SEQUENCES {
        let bounds = random_bounds(&mut rng);
        let ratio = Ratio::new(rng.random_range(1..=16), rng.random_range(1..=16));
        let reduced = ratio.reduced();
        let config = Config {
            ratio,
            ..Default::default()
        };
        let mut engine = SelectionEngine::new(bounds, config);

        engine.begin_drag(random_point(&mut rng, bounds));
        let rect = engine
            .update(random_point(&mut rng, bounds), false)
            .unwrap();

        let derived_height = rect.width() * reduced.y / reduced.x;
        let touches_edge = rect.y1 == 0 || rect.y2 == bounds.height;

        if touches_edge && rect.height() != derived_height {
            // Second pass, the width was derived from the clamped height.
            assert_eq!(
                rect.width(),
                rect.height() * reduced.x / reduced.y,
                "{rect:?} with {ratio:?}"
            );
        } else {
            assert_eq!(rect.height(), derived_height, "{rect:?} with {ratio:?}");
        }
    }
}

#[test]
fn moving_never_resizes() {
    let mut rng = StdRng::seed_from_u64(99);

    for _ in 0..SEQUENCES {
        let bounds = random_bounds(&mut rng);
        let a = Point::new(
            rng.random_range(0..=bounds.width),
            rng.random_range(0..=bounds.height),
        );
        let b = Point::new(
            rng.random_range(0..=bounds.width),
            rng.random_range(0..=bounds.height),
        );
        let config = Config {
            initial: Some(crop_selection::Initial::Rect(Rect::from_points(a, b))),
            ..Default::default()
        };
        let mut engine = SelectionEngine::new(bounds, config);
        let dimensions = engine.rect().unwrap().dimensions();

        for _ in 0..STEPS {
            let rect = engine
                .move_by(
                    rng.random_range(-500..=500),
                    rng.random_range(-500..=500),
                )
                .unwrap();

            assert_eq!(rect.dimensions(), dimensions);
            assert!(rect.is_within(bounds));
        }
    }
}

#[test]
fn bounds_clamp_is_idempotent() {
    let mut rng = StdRng::seed_from_u64(3);

    for _ in 0..SEQUENCES {
        let bounds = random_bounds(&mut rng);
        let rect = Rect::from_points(
            random_point(&mut rng, bounds),
            random_point(&mut rng, bounds),
        );

        let once = clamp_to_bounds(rect, bounds);
        assert_eq!(clamp_to_bounds(once, bounds), once);
        assert!(once.is_within(bounds));
    }
}
