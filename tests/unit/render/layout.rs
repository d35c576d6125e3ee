//! Tests for grid dimensions and page placement

#[cfg(test)]
mod tests {
    use caposters::automaton::CellCoord;
    use caposters::io::configuration::Dimension;
    use caposters::render::layout::{Layout, PageGeometry, resolve_dimensions};

    const A4: PageGeometry = PageGeometry {
        width: 595.0,
        height: 842.0,
        angle: 0.0,
    };

    fn close(a: f64, b: f64) -> bool {
        (a - b).abs() < 1e-9
    }

    // Tests the covered extent matches the page when upright
    // Verified by ignoring the angle
    #[test]
    fn test_covered_extent() {
        assert_eq!(A4.covered_extent(), (595.0, 842.0));

        let (width, height) = PageGeometry { angle: 90.0, ..A4 }.covered_extent();
        assert!(close(width, 842.0) && close(height, 595.0));

        let (width, height) = PageGeometry { angle: 45.0, ..A4 }.covered_extent();
        let diagonal = (595.0 + 842.0) * std::f64::consts::FRAC_1_SQRT_2;
        assert!(close(width, diagonal) && close(height, diagonal));
    }

    // Tests page orientation helpers
    // Verified by comparing the angle without wrapping
    #[test]
    fn test_page_helpers() {
        assert!(close(A4.short_side(), 595.0));
        assert!(A4.is_upright());
        assert!(PageGeometry { angle: 360.0, ..A4 }.is_upright());
        assert!(PageGeometry { angle: -720.0, ..A4 }.is_upright());
        assert!(!PageGeometry { angle: 10.0, ..A4 }.is_upright());
    }

    // Tests automatic height fills the page
    // Verified by flooring the derived height
    #[test]
    fn test_auto_height() {
        let dims = resolve_dimensions(Dimension::Cells(280), Dimension::Auto, &A4, 0.0);
        assert_eq!(dims.ok(), Some((280, 397)));

        let shifted = resolve_dimensions(Dimension::Cells(280), Dimension::Auto, &A4, 0.5);
        assert_eq!(shifted.ok(), Some((280, 398)));
    }

    // Tests automatic width fits inside the page
    // Verified by rounding the derived width up
    #[test]
    fn test_auto_width() {
        let dims = resolve_dimensions(Dimension::Auto, Dimension::Cells(100), &A4, 0.0);
        assert_eq!(dims.ok(), Some((70, 100)));
    }

    // Tests explicit dimensions pass through untouched
    // Verified by adding the offset row to explicit heights
    #[test]
    fn test_explicit_dimensions() {
        let dims = resolve_dimensions(Dimension::Cells(7), Dimension::Cells(3), &A4, 0.5);
        assert_eq!(dims.ok(), Some((7, 3)));
    }

    // Tests impossible dimension combinations
    // Verified by defaulting both-auto to the default width
    #[test]
    fn test_invalid_dimensions() {
        assert!(resolve_dimensions(Dimension::Auto, Dimension::Auto, &A4, 0.0).is_err());
        assert!(resolve_dimensions(Dimension::Auto, Dimension::Cells(1), &A4, 0.0).is_err());
        assert!(
            resolve_dimensions(Dimension::Cells(100_001), Dimension::Cells(1), &A4, 0.0).is_err()
        );
    }

    // Tests cells tile the covered width
    // Verified by sizing cells from the page height
    #[test]
    fn test_cell_placement() {
        let layout = Layout::new(A4, 7, 0.0);
        assert!(close(layout.cell_size(), 85.0));

        let (x, y) = layout.cell_origin(CellCoord { column: 2, row: 3 });
        assert!(close(x, 170.0) && close(y, 255.0));
        assert_eq!(layout.row_span(4), (-0.0, 340.0));
    }

    // Tests the display offset shifts rows upwards
    // Verified by shifting rows downwards
    #[test]
    fn test_display_offset_shift() {
        let layout = Layout::new(A4, 7, 0.5);
        let (_, y) = layout.cell_origin(CellCoord { column: 0, row: 0 });
        assert!(close(y, -42.5));

        let (top, bottom) = layout.row_span(2);
        assert!(close(top, -42.5) && close(bottom, 127.5));
    }

    // Tests upright pages need no transform
    // Verified by always emitting a transform
    #[test]
    fn test_upright_transform() {
        let layout = Layout::new(A4, 10, 0.0);
        assert_eq!(layout.svg_transform(), None);
        assert_eq!(Layout::new(PageGeometry { angle: 360.0, ..A4 }, 10, 0.0).svg_transform(), None);
    }

    // Tests rotation is about the page center with the covered extent centered
    // Verified by rotating about the origin
    #[test]
    fn test_rotated_transform() {
        let layout = Layout::new(PageGeometry { angle: 90.0, ..A4 }, 10, 0.0);

        assert_eq!(
            layout.svg_transform().as_deref(),
            Some("translate(297.500 421.000) rotate(90.000) translate(-421.000 -297.500)")
        );
    }
}
