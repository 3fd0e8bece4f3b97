use crate::types::Pixel;

/// Channel average of two pixels, keeping the position of `a`
pub fn average_color(a: &Pixel, b: &Pixel) -> Pixel {
    Pixel::new(a.x, a.y, (a.argb + b.argb) / 2)
}

/// Unperturbed midpoint of two pixels. Position and channels use truncating division.
pub fn midpoint2(a: &Pixel, b: &Pixel) -> Pixel {
    Pixel::new((a.x + b.x) / 2, (a.y + b.y) / 2, (a.argb + b.argb) / 2)
}

/// Unperturbed midpoint of four pixels
pub fn midpoint4(a: &Pixel, b: &Pixel, c: &Pixel, d: &Pixel) -> Pixel {
    Pixel::new(
        (a.x + b.x + c.x + d.x) / 4,
        (a.y + b.y + c.y + d.y) / 4,
        (a.argb + b.argb + c.argb + d.argb) / 4,
    )
}
