//! Tests for colors, palettes and grid line modes

#[cfg(test)]
mod tests {
    use caposters::render::palette::{ColorPair, ColorScheme, GridMode, Palette, Rgb};
    use std::collections::HashSet;

    // Tests hex parsing and display agree
    // Verified by formatting channels in decimal
    #[test]
    fn test_rgb_hex() {
        let color: Rgb = "#4B669b".parse().expect("valid hex");
        assert_eq!(color, Rgb::new(0x4b, 0x66, 0x9b));
        assert_eq!(color.to_string(), "#4b669b");
        assert_eq!(color.to_rgba(), [0x4b, 0x66, 0x9b, 0xff]);
    }

    // Tests malformed colors are rejected
    // Verified by accepting a missing hash
    #[test]
    fn test_rgb_rejects_malformed() {
        for input in ["4b669b", "#4b669", "#4b669bb", "#gggggg", "#ääää"] {
            assert!(input.parse::<Rgb>().is_err(), "input {input:?}");
        }
    }

    // Tests blending weights the first color by the ratio
    // Verified by swapping the blend operands
    #[test]
    fn test_blend() {
        assert_eq!(Rgb::WHITE.blend(Rgb::BLACK, 1.0), Rgb::WHITE);
        assert_eq!(Rgb::WHITE.blend(Rgb::BLACK, 0.0), Rgb::BLACK);
        assert_eq!(Rgb::WHITE.blend(Rgb::BLACK, 0.5), Rgb::new(128, 128, 128));
        assert_eq!(Rgb::WHITE.blend(Rgb::BLACK, 0.25), Rgb::new(64, 64, 64));
        assert_eq!(Rgb::WHITE.blend(Rgb::BLACK, 7.0), Rgb::WHITE);
    }

    // Tests every palette has a distinct name that parses back
    // Verified by duplicating a palette name
    #[test]
    fn test_palette_names() {
        let names: HashSet<_> = Palette::ALL.iter().map(|p| p.name()).collect();
        assert_eq!(names.len(), Palette::ALL.len());

        for palette in Palette::ALL {
            assert_eq!(
                palette.name().parse::<ColorScheme>().ok(),
                Some(ColorScheme::Named(palette))
            );
        }
        assert_eq!(
            "BLUE".parse::<ColorScheme>().ok(),
            Some(ColorScheme::Named(Palette::Blue))
        );
    }

    // Tests the blue palette colors
    // Verified by swapping living and dead
    #[test]
    fn test_blue_palette() {
        let colors = Palette::Blue.colors();
        assert_eq!(colors.living.to_string(), "#4b669b");
        assert_eq!(colors.dead.to_string(), "#c0d6ff");
    }

    // Tests explicit color pairs
    // Verified by reversing the pair order
    #[test]
    fn test_custom_scheme() {
        let scheme: ColorScheme = "#000000, #ffffff".parse().expect("valid pair");
        assert_eq!(
            scheme.colors(),
            ColorPair {
                living: Rgb::BLACK,
                dead: Rgb::WHITE,
            }
        );
        assert!("#000000".parse::<ColorScheme>().is_err());
        assert!("#000000,white".parse::<ColorScheme>().is_err());
        assert!("teal".parse::<ColorScheme>().is_err());
    }

    // Tests grid mode parsing
    // Verified by accepting ratios above one
    #[test]
    fn test_grid_mode_parse() {
        assert_eq!("living".parse().ok(), Some(GridMode::Living));
        assert_eq!("Dead".parse().ok(), Some(GridMode::Dead));
        assert_eq!("none".parse().ok(), Some(GridMode::Disabled));
        assert_eq!("off".parse().ok(), Some(GridMode::Disabled));
        assert_eq!("0.3".parse().ok(), Some(GridMode::Blend(0.3)));
        assert!("1.01".parse::<GridMode>().is_err());
        assert!("-0.5".parse::<GridMode>().is_err());
        assert!("dotted".parse::<GridMode>().is_err());
    }

    // Tests grid mode colors
    // Verified by returning the dead color for every mode
    #[test]
    fn test_grid_mode_color() {
        let colors = ColorPair {
            living: Rgb::WHITE,
            dead: Rgb::BLACK,
        };
        assert_eq!(GridMode::Living.color(&colors), Some(Rgb::WHITE));
        assert_eq!(GridMode::Dead.color(&colors), Some(Rgb::BLACK));
        assert_eq!(
            GridMode::Blend(0.5).color(&colors),
            Some(Rgb::new(128, 128, 128))
        );
        assert_eq!(GridMode::Disabled.color(&colors), None);
    }
}
