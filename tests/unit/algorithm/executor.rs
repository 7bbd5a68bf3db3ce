//! Tests for the run entry point

#[cfg(test)]
mod tests {
    use mandelgrid::algorithm::executor::run_with_progress;
    use mandelgrid::{RenderConfig, RenderError, Region, run};
    use std::sync::atomic::{AtomicUsize, Ordering};

    // Tests the small end-to-end region escapes at every corner
    // Verified by reversing the y axis
    #[test]
    fn test_run_three_by_three_corners_escape() {
        let config = RenderConfig {
            max_iter: 50,
            region: Region::new(-2.0, 1.0, -1.0, 1.0),
            resolution: 3,
            ..RenderConfig::default()
        };

        let grid = run(&config).unwrap();
        assert_eq!(grid.dim(), (3, 3));

        for (i, j) in [(0, 0), (0, 2), (2, 0), (2, 2)] {
            let count = grid.get(i, j).unwrap();
            assert!(count > 0 && count <= 5, "corner ({i}, {j}) gave {count}");
        }

        assert_eq!(grid.get(1, 1), Some(0), "(-0.5, 0) is in the set");
        assert_eq!(grid.max_iter(), 50);
    }

    // Tests run rejects configuration with every violation listed
    // Verified by returning after the first violation
    #[test]
    fn test_run_reports_all_violations() {
        let config = RenderConfig {
            max_iter: 0,
            resolution: 0,
            region: Region::new(1.0, -2.0, 1.0, 1.0),
            ..RenderConfig::default()
        };

        match run(&config) {
            Err(RenderError::Configuration { violations }) => {
                assert_eq!(violations.len(), 4, "{violations:?}");
            }
            other => unreachable!("expected configuration error, got {other:?}"),
        }
    }

    // Tests two identical runs give identical grids
    // Verified by perturbing the x axis on each call
    #[test]
    fn test_run_is_deterministic() {
        let config = RenderConfig {
            resolution: 30,
            max_iter: 100,
            ..RenderConfig::default()
        };
        assert_eq!(run(&config).unwrap(), run(&config).unwrap());
    }

    // Tests progress reaches one tick per column
    // Verified by dropping the callback in run_with_progress
    #[test]
    fn test_run_with_progress_reports_columns() {
        let config = RenderConfig {
            resolution: 21,
            max_iter: 20,
            ..RenderConfig::default()
        };
        let ticks = AtomicUsize::new(0);

        let grid = run_with_progress(&config, || {
            ticks.fetch_add(1, Ordering::Relaxed);
        })
        .unwrap();

        assert_eq!(ticks.load(Ordering::Relaxed), 21);
        assert_eq!(grid.dim(), (21, 21));
    }
}
