use scribble_image::{ImageError, RasterSurface};

#[test]
fn test_new_validates_buffer_length() {
    let result = RasterSurface::new(2, 2, vec![0; 15]);
    assert!(matches!(result, Err(ImageError::InvalidSurface(_))));

    let surface = RasterSurface::new(2, 3, vec![0; 24]).unwrap();
    assert_eq!(surface.width(), 2);
    assert_eq!(surface.height(), 3);
}

#[test]
fn test_blank_is_transparent_black() {
    let surface = RasterSurface::blank(3, 3).unwrap();
    assert_eq!(surface.as_raw().len(), 36);
    assert!(surface.as_raw().iter().all(|&v| v == 0));
}

#[test]
fn test_zero_sized_surface_is_constructible() {
    let surface = RasterSurface::blank(0, 10).unwrap();
    assert!(surface.is_empty());
    assert_eq!(surface.width(), 0);
    assert_eq!(surface.height(), 10);
}

#[test]
fn test_put_and_read_pixel() {
    let mut surface = RasterSurface::blank(4, 2).unwrap();
    assert!(surface.put_pixel(3, 1, [10, 20, 30, 255]));
    assert_eq!(surface.pixel(3, 1), Some([10, 20, 30, 255]));
    assert_eq!(surface.pixel(2, 1), Some([0, 0, 0, 0]));

    // last pixel in row-major order
    assert_eq!(&surface.as_raw()[28..32], &[10, 20, 30, 255]);
}

#[test]
fn test_out_of_bounds_pixel_access() {
    let mut surface = RasterSurface::blank(4, 2).unwrap();
    assert!(!surface.put_pixel(4, 0, [255; 4]));
    assert!(!surface.put_pixel(0, 2, [255; 4]));
    assert_eq!(surface.pixel(4, 0), None);
}

#[test]
fn test_clear_resets_pixels() {
    let mut surface = RasterSurface::filled(5, 5, [255, 255, 255, 255]).unwrap();
    surface.clear();
    assert_eq!(surface, RasterSurface::blank(5, 5).unwrap());
}
