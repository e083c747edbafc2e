use solar_roof::Polygon;

/// Named roof outlines as `(lat, lng)` rings.
pub fn all() -> Vec<(&'static str, Polygon)> {
    vec![
        (
            "rectangle",
            Polygon::from_lat_lng(&[
                (29.425_100, -98.493_000),
                (29.425_100, -98.492_800),
                (29.425_250, -98.492_800),
                (29.425_250, -98.493_000),
            ]),
        ),
        (
            "l-shape",
            Polygon::from_lat_lng(&[
                (29.426_000, -98.491_000),
                (29.426_000, -98.490_700),
                (29.426_100, -98.490_700),
                (29.426_100, -98.490_850),
                (29.426_250, -98.490_850),
                (29.426_250, -98.491_000),
            ]),
        ),
        (
            "hip",
            Polygon::from_lat_lng(&[
                (29.424_500, -98.494_000),
                (29.424_500, -98.493_750),
                (29.424_620, -98.493_800),
                (29.424_620, -98.493_950),
            ]),
        ),
    ]
}
