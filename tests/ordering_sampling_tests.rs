//! Ordering and sampling tests (sort, reverse, random, shuffle, Sampler)

use rand::rngs::StdRng;
use rand::SeedableRng;

use seqfold_ops::{
    random, random_with, reverse, shuffle, shuffle_with, sort, sort_by, Error, Order, SampleConfig,
    Sampler, Seed,
};

#[derive(Debug, Clone, PartialEq)]
struct Planet {
    name: &'static str,
    radius: i64,
}

const NEPTUNE: Planet = Planet {
    name: "Neptune",
    radius: 24_622_000,
};
const MARS: Planet = Planet {
    name: "Mars",
    radius: 3_389_500,
};
const JUPITER: Planet = Planet {
    name: "Jupiter",
    radius: 69_911_000,
};

const PLANETS: [&str; 8] = [
    "Mercury", "Venus", "Earth", "Mars", "Jupiter", "Saturn", "Uranus", "Neptune",
];

#[test]
fn test_sort_by_radius_both_directions() {
    let planets = vec![NEPTUNE, MARS, JUPITER];

    assert_eq!(
        sort_by(&planets, |p| p.radius, Order::Asc),
        vec![MARS, NEPTUNE, JUPITER]
    );
    assert_eq!(
        sort_by(&planets, |p| p.radius, Order::Desc),
        vec![JUPITER, NEPTUNE, MARS]
    );
    // Input untouched.
    assert_eq!(planets, vec![NEPTUNE, MARS, JUPITER]);
}

#[test]
fn test_sort_is_stable_in_both_directions() {
    let words = ["bb", "a", "cc", "d", "ee"];
    assert_eq!(
        sort_by(&words, |w| w.len(), Order::Asc),
        vec!["a", "d", "bb", "cc", "ee"]
    );
    assert_eq!(
        sort_by(&words, |w| w.len(), Order::Desc),
        vec!["bb", "cc", "ee", "a", "d"]
    );
}

#[test]
fn test_sort_plain_values() {
    let numbers = [6, 4, 8, 2, 1, 9, 4, 7, 5];
    assert_eq!(sort(&numbers, Order::Asc), vec![1, 2, 4, 4, 5, 6, 7, 8, 9]);
    assert_eq!(sort(&numbers, Order::Desc), vec![9, 8, 7, 6, 5, 4, 4, 2, 1]);
    assert_eq!(sort::<u8>(&[], Order::Asc), Vec::<u8>::new());
}

#[test]
fn test_sort_floats_with_nan_does_not_panic() {
    let readings = [2.0_f64, 1.0, 3.0];
    assert_eq!(sort(&readings, Order::Asc), vec![1.0, 2.0, 3.0]);

    let with_nan = [2.0_f64, f64::NAN, 1.0];
    let asc = sort(&with_nan, Order::Asc);
    assert_eq!(&asc[..2], &[1.0, 2.0]);
    assert!(asc[2].is_nan());

    let desc = sort(&with_nan, Order::Desc);
    assert!(desc[0].is_nan());
    assert_eq!(&desc[1..], &[2.0, 1.0]);

    let many: Vec<f64> = (0..200)
        .map(|i| if i % 7 == 0 { f64::NAN } else { f64::from(i % 13) })
        .collect();
    let sorted = sort(&many, Order::Asc);
    let numbers = sorted.iter().take_while(|v| !v.is_nan()).count();
    assert!(sorted[..numbers].windows(2).all(|w| w[0] <= w[1]));
    assert!(sorted[numbers..].iter().all(|v| v.is_nan()));
}

#[test]
fn test_reverse() {
    let expected = [
        "Neptune", "Uranus", "Saturn", "Jupiter", "Mars", "Earth", "Venus", "Mercury",
    ];
    assert_eq!(reverse(&PLANETS), expected.to_vec());
    assert_eq!(reverse::<u8>(&[]), Vec::<u8>::new());
}

#[test]
fn test_seeded_random_is_reproducible() {
    let first = random(&PLANETS, Some(42)).expect("non-empty");
    for _ in 0..10 {
        assert_eq!(random(&PLANETS, Some(42)).expect("non-empty"), first);
    }
    assert!(PLANETS.contains(first));
}

#[test]
fn test_seeded_shuffle_is_reproducible() {
    let first = shuffle(&PLANETS, Some(42));
    for _ in 0..10 {
        assert_eq!(shuffle(&PLANETS, Some(42)), first);
    }

    let mut sorted = first.clone();
    sorted.sort_unstable();
    let mut original = PLANETS.to_vec();
    original.sort_unstable();
    assert_eq!(sorted, original);
}

#[test]
fn test_unseeded_sampling_stays_in_bounds() {
    for _ in 0..20 {
        let pick = random(&PLANETS, None).expect("non-empty");
        assert!(PLANETS.contains(pick));
    }
    assert_eq!(shuffle(&PLANETS, None).len(), PLANETS.len());
}

#[test]
fn test_random_on_empty_sequence_fails() {
    let empty: [u8; 0] = [];
    assert_eq!(random(&empty, Some(1)), Err(Error::EmptyInput { op: "random" }));
    assert_eq!(random(&empty, None), Err(Error::EmptyInput { op: "random" }));
    assert!(Sampler::seeded(1).random(&empty).is_err());
}

#[test]
fn test_injected_generator_matches_seeded_call() {
    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(
        random_with(&PLANETS, &mut rng).expect("non-empty"),
        random(&PLANETS, Some(42)).expect("non-empty")
    );

    let mut rng = StdRng::seed_from_u64(42);
    assert_eq!(shuffle_with(&PLANETS, &mut rng), shuffle(&PLANETS, Some(42)));
}

#[test]
fn test_sampler_first_draw_matches_seeded_call() {
    let mut sampler = Sampler::seeded(42);
    assert_eq!(sampler.seed(), Some(Seed(42)));
    assert_eq!(sampler.shuffle(&PLANETS), shuffle(&PLANETS, Some(42)));
}

#[test]
fn test_sampler_from_config() {
    let cfg = SampleConfig::seeded(Seed::from_label("nightly-run"));
    let mut a = Sampler::from_config(&cfg);
    let mut b = Sampler::from_config(&cfg);
    assert_eq!(a.random(&PLANETS), b.random(&PLANETS));
    assert_eq!(a.shuffle(&PLANETS), b.shuffle(&PLANETS));

    let unseeded = Sampler::from_config(&SampleConfig::default());
    assert_eq!(unseeded.seed(), None);
}

#[test]
fn test_sampler_moves_across_threads() {
    let mut sampler = Sampler::seeded(9);
    let expected = Sampler::seeded(9).shuffle(&PLANETS);
    let got = std::thread::spawn(move || sampler.shuffle(&PLANETS))
        .join()
        .expect("thread panicked");
    assert_eq!(got, expected);
}
