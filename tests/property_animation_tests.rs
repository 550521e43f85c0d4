use polygon_chart::core::{AnimationStep, RevealAnimation};
use proptest::prelude::*;

proptest! {
    #[test]
    fn progress_is_monotone_and_bounded(
        duration_ms in 0.0f64..5_000.0,
        deltas in proptest::collection::vec(0.0f64..250.0, 1..64),
    ) {
        let mut animation = RevealAnimation::new(duration_ms).expect("animation");
        animation.start();

        let mut previous = animation.progress();
        let mut completed = false;
        for delta in deltas {
            let step = animation.advance(delta).expect("tick");
            let progress = animation.progress();
            prop_assert!((0.0..=1.0).contains(&progress));
            prop_assert!(progress >= previous);
            if completed {
                prop_assert_eq!(step, AnimationStep::Inactive);
            }
            if step == AnimationStep::Completed {
                prop_assert_eq!(progress, 1.0);
                completed = true;
            }
            previous = progress;
        }
    }

    #[test]
    fn elapsing_the_full_duration_always_completes(
        duration_ms in 1.0f64..5_000.0,
        slices in 1usize..32,
    ) {
        let mut animation = RevealAnimation::new(duration_ms).expect("animation");
        animation.start();

        let slice = duration_ms / slices as f64;
        for _ in 0..slices {
            let _ = animation.advance(slice).expect("tick");
        }
        // Summing slices can land a hair below the duration.
        let _ = animation.advance(duration_ms * 1e-9).expect("tick");
        prop_assert!(!animation.is_running());
        prop_assert_eq!(animation.progress(), 1.0);
    }
}
