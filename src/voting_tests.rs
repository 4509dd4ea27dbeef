use super::*;
use rand::rngs::StdRng;

fn flat(score: f64) -> Attributes {
    Attributes { taste: score, presentation: score, creativity: score, aroma: score, texture: score }
}

#[test]
fn test_equal_recipes_are_a_coin_flip() {
    let p = calculate_win_probability(&flat(7.5), &flat(7.5));
    assert!((p - 0.5).abs() < 1e-12);
}

#[test]
fn test_win_probability_is_symmetric() {
    let a = Attributes { taste: 8.2, presentation: 7.1, creativity: 6.9, aroma: 9.0, texture: 7.7 };
    let b = flat(7.6);

    let p_a = calculate_win_probability(&a, &b);
    let p_b = calculate_win_probability(&b, &a);

    assert!((p_a + p_b - 1.0).abs() < 1e-12);
    assert!(p_a > 0.0 && p_a < 1.0);
}

#[test]
fn test_stronger_recipe_is_favored() {
    // A total difference of one point
    let p = calculate_win_probability(&flat(8.2), &flat(8.0));
    assert!((p - 1.0 / (1.0 + f64::exp(-1.0))).abs() < 1e-9);
}

#[test]
fn test_votes_always_sum_to_total() {
    let mut rng = StdRng::seed_from_u64(3);

    for total in [0, 1, 95, 100, 105] {
        for _ in 0..200 {
            let (a, b) = generate_votes(&flat(7.0), &flat(7.3), total, 5.0, &mut rng).unwrap();
            assert_eq!(a + b, total);
            assert!(a <= total);
        }
    }
}

#[test]
fn test_lopsided_matchup_gives_lopsided_votes() {
    let mut rng = StdRng::seed_from_u64(3);

    let (strong, weak) = generate_votes(&flat(10.0), &flat(0.0), 100, 5.0, &mut rng).unwrap();
    assert!(strong > 70, "expected a blowout, got {strong}-{weak}");
}

#[test]
fn test_invalid_std_dev_is_an_error() {
    let mut rng = StdRng::seed_from_u64(3);
    assert!(generate_votes(&flat(7.0), &flat(7.0), 100, f64::NAN, &mut rng).is_err());
}

#[test]
fn test_create_upset_bounds() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..1000 {
        let (weak, strong) = create_upset(30, 70, DEFAULT_UPSET_MARGIN, &mut rng);

        assert!((51..=60).contains(&weak));
        assert!((40..=49).contains(&strong));
        assert!(weak > strong);
        assert_eq!(weak + strong, 100);
    }
}

#[test]
fn test_create_upset_odd_total() {
    let mut rng = StdRng::seed_from_u64(11);

    for _ in 0..200 {
        let (weak, strong) = create_upset(40, 61, 3, &mut rng);
        assert!(weak > strong);
        assert!((51..=53).contains(&weak));
    }
}

#[test]
fn test_create_upset_tiny_total() {
    let mut rng = StdRng::seed_from_u64(11);
    assert_eq!(create_upset(0, 1, 10, &mut rng), (1, 0));
}
