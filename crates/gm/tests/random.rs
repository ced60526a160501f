use gm::{random_number, seed, FloatRange, IntRange, Vec3f};

fn draw_sequence() -> (Vec<f32>, Vec<i32>, Vec3f) {
    let floats = (0..16)
        .map(|_| random_number(&FloatRange::new(-10.0, 10.0)))
        .collect();
    let ints = (0..16)
        .map(|_| random_number(&IntRange::new(-1000, 1000)))
        .collect();
    let vector = Vec3f::new(
        random_number(&FloatRange::new(0.0, 1.0)),
        random_number(&FloatRange::new(0.0, 1.0)),
        random_number(&FloatRange::new(0.0, 1.0)),
    );

    (floats, ints, vector)
}

// Single test: the seeded generator is global to the test binary.
#[test]
fn should_repeat_draws_after_reseeding() {
    seed(1234);
    let first = draw_sequence();

    seed(1234);
    let second = draw_sequence();

    assert_eq!(first, second);
    assert!(first.0.iter().all(|value| (-10.0..10.0).contains(value)));
    assert!(first.1.iter().all(|value| (-1000..=1000).contains(value)));
    assert!(first.0.windows(2).any(|pair| pair[0] != pair[1]));

    seed(4321);
    let other = draw_sequence();
    assert_ne!(first.1, other.1);
}
