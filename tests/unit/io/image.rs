//! Tests for cover rendering and PNG export

#[cfg(test)]
mod tests {
    use image::Rgba;
    use tempfile::TempDir;
    use tilerects::CoverError;
    use tilerects::algorithm::cover::{OverlapPolicy, cover_source};
    use tilerects::io::image::{export_cover_png, render_cover};
    use tilerects::io::tilemap::parse_text;
    use tilerects::spatial::CellRect;

    // Tests image dimensions scale with cell size
    #[test]
    fn test_render_dimensions() {
        let source = parse_text("###\n#..").unwrap();
        let rects = cover_source(&source, OverlapPolicy::NotAllowed);
        let img = render_cover(&source, &rects, 4, 1).unwrap();

        assert_eq!(img.dimensions(), (12, 8));
    }

    // Tests empty cells stay transparent and covered cells are opaque
    #[test]
    fn test_render_cells() {
        // Bottom-right cell is empty; it is drawn in the image's bottom-right corner
        let source = parse_text("##\n#.").unwrap();
        let rects = cover_source(&source, OverlapPolicy::NotAllowed);
        let img = render_cover(&source, &rects, 4, 7).unwrap();

        assert_eq!(*img.get_pixel(6, 6), Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(1, 1)[3], 255);
        assert_eq!(img.get_pixel(1, 5)[3], 255);
        assert_eq!(img.get_pixel(5, 1)[3], 255);
    }

    // Tests identical seeds give identical images
    #[test]
    fn test_render_is_reproducible() {
        let source = parse_text("#.#\n###").unwrap();
        let rects = cover_source(&source, OverlapPolicy::Allowed);
        let first = render_cover(&source, &rects, 3, 9).unwrap();
        let second = render_cover(&source, &rects, 3, 9).unwrap();
        assert_eq!(first.as_raw(), second.as_raw());
    }

    // Tests zero-sized cells are rejected
    #[test]
    fn test_render_rejects_zero_cell_size() {
        let source = parse_text("#").unwrap();
        assert!(render_cover(&source, &[], 0, 0).is_err());
    }

    // Tests cell sizes whose image extent overflows are rejected instead of wrapping
    #[test]
    fn test_render_rejects_overflowing_cell_size() {
        let source = parse_text("##").unwrap();
        let result = render_cover(&source, &[], u32::MAX / 2 + 1, 0);
        assert!(matches!(
            result,
            Err(CoverError::InvalidParameter { parameter, .. }) if parameter == "cell_size"
        ));
    }

    // Tests rectangles reaching past the grid are clipped to the image
    #[test]
    fn test_render_clips_out_of_range_rectangles() {
        let source = parse_text("#.
..").unwrap();
        let rects = [CellRect::new(1, 0, usize::MAX, usize::MAX)];
        let img = render_cover(&source, &rects, 2, 3).unwrap();

        assert_eq!(img.dimensions(), (4, 4));
        assert_eq!(*img.get_pixel(0, 3), Rgba([0, 0, 0, 0]));
        assert_eq!(img.get_pixel(3, 3)[3], 255);
    }

    // Tests export writes a readable PNG
    #[test]
    fn test_export_cover_png() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("out/cover.png");
        let source = parse_text("##\n.#").unwrap();
        let rects = cover_source(&source, OverlapPolicy::NotAllowed);

        export_cover_png(&source, &rects, 2, 42, &path).unwrap();

        let reloaded = image::open(&path).unwrap();
        assert_eq!(reloaded.width(), 4);
        assert_eq!(reloaded.height(), 4);
    }
}
