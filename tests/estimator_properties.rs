use proptest::prelude::*;
use scrub_sizer::{estimate_chest, estimate_size, Gender, SizeLabel};

fn gender() -> impl Strategy<Value = Gender> {
    prop_oneof![Just(Gender::Male), Just(Gender::Female)]
}

proptest! {
    #[test]
    fn label_is_always_in_gender_scale(
        g in gender(),
        height in 120.0f64..=220.0,
        weight in 30.0f64..=200.0,
    ) {
        let label = estimate_size(g, height, weight);
        prop_assert!(g.has_size(label));
        match g {
            Gender::Male => prop_assert_ne!(label, SizeLabel::XXS),
            Gender::Female => prop_assert_ne!(label, SizeLabel::XXXL),
        }
    }

    #[test]
    fn taller_never_means_smaller(
        g in gender(),
        height in 120.0f64..=220.0,
        extra in 0.0f64..=100.0,
        weight in 30.0f64..=200.0,
    ) {
        let taller = (height + extra).min(220.0);
        prop_assert!(estimate_chest(g, taller, weight) >= estimate_chest(g, height, weight));
        prop_assert!(estimate_size(g, taller, weight) >= estimate_size(g, height, weight));
    }

    #[test]
    fn heavier_never_means_smaller(
        g in gender(),
        height in 120.0f64..=220.0,
        weight in 30.0f64..=200.0,
        extra in 0.0f64..=170.0,
    ) {
        let heavier = (weight + extra).min(200.0);
        prop_assert!(estimate_size(g, height, heavier) >= estimate_size(g, height, weight));
    }

    #[test]
    fn repeated_calls_agree(
        g in gender(),
        height in 120.0f64..=220.0,
        weight in 30.0f64..=200.0,
    ) {
        prop_assert_eq!(estimate_size(g, height, weight), estimate_size(g, height, weight));
    }

    #[test]
    fn any_finite_input_is_handled(
        g in gender(),
        height in -1.0e6f64..1.0e6,
        weight in -1.0e6f64..1.0e6,
    ) {
        let label = estimate_size(g, height, weight);
        prop_assert!(g.has_size(label));
    }
}

#[test]
fn documented_scenarios() {
    assert_eq!(estimate_size(Gender::Male, 170.0, 70.0), SizeLabel::M);
    assert_eq!(estimate_size(Gender::Female, 160.0, 55.0), SizeLabel::XXS);
    assert_eq!(estimate_size(Gender::Male, 220.0, 200.0), SizeLabel::XXXL);
    assert!((estimate_chest(Gender::Male, 220.0, 200.0) - 197.0).abs() < 1e-9);
}
