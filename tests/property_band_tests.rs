use chart_scale::core::{BandConfig, band};
use proptest::prelude::*;

proptest! {
    #[test]
    fn band_layout_covers_range_property(
        count in 1usize..200,
        r0 in -10_000.0f64..10_000.0,
        span in 0.001f64..10_000.0,
        padding in 0.0f64..0.99
    ) {
        let r1 = r0 + span;
        let config = BandConfig::new(vec![(); count], (r0, r1)).with_padding(padding);
        let layout = band(&config).expect("band layout");

        prop_assert_eq!(layout.band_range.len(), count);
        prop_assert!(layout.band_width >= 0.0);

        let last_end = layout.band_range[count - 1] + layout.band_width;
        let tolerance = r0.abs().max(r1.abs()).max(1.0) * 1e-9;
        prop_assert!((last_end + layout.interval() - r1).abs() <= tolerance);
        prop_assert!((layout.band_range[0] - layout.interval() - r0).abs() <= tolerance);
    }

    #[test]
    fn band_starts_are_evenly_spaced_property(
        count in 2usize..100,
        span in 1.0f64..10_000.0,
        padding in 0.0f64..0.99
    ) {
        let config = BandConfig::new(vec![0u8; count], (0.0, span)).with_padding(padding);
        let layout = band(&config).expect("band layout");

        for pair in layout.band_range.windows(2) {
            let gap = pair[1] - pair[0];
            prop_assert!((gap - layout.step).abs() <= span * 1e-12);
            prop_assert!(pair[0] + layout.band_width <= pair[1] + span * 1e-12);
        }
    }
}
