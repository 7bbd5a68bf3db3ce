//! Tests for palette parsing and color map interpolation

#[cfg(test)]
mod tests {
    use mandelgrid::io::palette::ColorMap;
    use mandelgrid::{Palette, RenderError};
    use std::str::FromStr;

    // Tests palette names parse case-insensitively
    // Verified by removing lowercase normalization
    #[test]
    fn test_palette_from_str() {
        assert_eq!(Palette::from_str("magma").unwrap(), Palette::Magma);
        assert_eq!(Palette::from_str("MAGMA").unwrap(), Palette::Magma);
        assert_eq!(Palette::from_str(" Viridis ").unwrap(), Palette::Viridis);
        assert_eq!(Palette::from_str("inferno").unwrap(), Palette::Inferno);
        assert_eq!(Palette::from_str("grayscale").unwrap(), Palette::Grayscale);
    }

    // Tests unknown names list the supported palettes
    // Verified by returning a generic message
    #[test]
    fn test_unknown_palette_error() {
        let error = Palette::from_str("plasma").unwrap_err();

        assert!(matches!(
            error,
            RenderError::InvalidArgument {
                parameter: "palette",
                ..
            }
        ));
        let message = error.to_string();
        for palette in Palette::ALL {
            assert!(message.contains(palette.name()), "{message}");
        }
    }

    // Tests display matches the parse name
    // Verified by capitalizing display output
    #[test]
    fn test_palette_display_round_trip() {
        for palette in Palette::ALL {
            assert_eq!(Palette::from_str(&palette.to_string()).unwrap(), palette);
        }
    }

    // Tests color map hits the control colors at the ends
    // Verified by offsetting the spline knots
    #[test]
    fn test_color_map_endpoints() {
        for palette in Palette::ALL {
            let map = ColorMap::new(palette).unwrap();
            let colors = palette.control_colors();

            assert_eq!(map.palette(), palette);
            assert_eq!(map.color_at(0.0).0, colors[0]);
            assert_eq!(map.color_at(1.0).0, colors[colors.len() - 1]);
        }
    }

    // Tests color map passes through interior control colors
    // Verified by fitting splines to the wrong channel
    #[test]
    fn test_color_map_interior_knots() {
        let map = ColorMap::new(Palette::Magma).unwrap();
        let colors = Palette::Magma.control_colors();
        let last = (colors.len() - 1) as f64;

        for (k, expected) in colors.iter().enumerate() {
            let color = map.color_at(k as f64 / last);
            for channel in 0..3 {
                let diff = i16::from(color.0[channel]) - i16::from(expected[channel]);
                assert!(diff.abs() <= 1, "knot {k} channel {channel}: {diff}");
            }
        }
    }

    // Tests out-of-range and NaN positions are clamped
    // Verified by removing the clamp
    #[test]
    fn test_color_map_clamps_input() {
        let map = ColorMap::new(Palette::Viridis).unwrap();

        assert_eq!(map.color_at(-3.0), map.color_at(0.0));
        assert_eq!(map.color_at(7.5), map.color_at(1.0));
        assert_eq!(map.color_at(f64::NAN), map.color_at(0.0));
    }

    // Tests grayscale is linear
    // Verified by using a nonlinear gray ramp
    #[test]
    fn test_grayscale_midpoint() {
        let map = ColorMap::new(Palette::Grayscale).unwrap();
        let mid = map.color_at(0.5).0;

        assert_eq!(mid[0], mid[1]);
        assert_eq!(mid[1], mid[2]);
        assert!((127..=128).contains(&mid[0]));
    }

    // Tests default palette
    // Verified by changing the default variant
    #[test]
    fn test_default_palette_is_magma() {
        assert_eq!(Palette::default(), Palette::Magma);
    }
}
