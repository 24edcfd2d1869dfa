use image::Rgb;

pub(crate) const WHITE: Rgb<u8> = Rgb([255, 255, 255]);
pub(crate) const BLACK: Rgb<u8> = Rgb([0, 0, 0]);
pub(crate) const AXIS: Rgb<u8> = Rgb([64, 64, 64]);
pub(crate) const GRID: Rgb<u8> = Rgb([210, 210, 210]);
pub(crate) const MUTED: Rgb<u8> = Rgb([110, 110, 110]);

/// Default categorical series colors
pub(crate) const SERIES_BLUE: Rgb<u8> = Rgb([31, 119, 180]);
pub(crate) const SERIES_ORANGE: Rgb<u8> = Rgb([255, 127, 14]);
pub(crate) const SERIES_GREEN: Rgb<u8> = Rgb([44, 160, 44]);
pub(crate) const SERIES_RED: Rgb<u8> = Rgb([214, 39, 40]);

pub(crate) const SERIES: [Rgb<u8>; 4] = [SERIES_BLUE, SERIES_ORANGE, SERIES_GREEN, SERIES_RED];

const BLUE_LIGHT: [f64; 3] = [74.0, 152.0, 201.0];
const BLUE_DARK: [f64; 3] = [8.0, 69.0, 148.0];

/// `n` blues from light to dark
pub(crate) fn blues(n: usize) -> Vec<Rgb<u8>> {
    (0..n)
        .map(|i| {
            let t = if n <= 1 {
                0.5
            } else {
                i as f64 / (n - 1) as f64
            };
            let channel = |c: usize| (BLUE_LIGHT[c] + (BLUE_DARK[c] - BLUE_LIGHT[c]) * t).round() as u8;
            Rgb([channel(0), channel(1), channel(2)])
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blues_go_light_to_dark() {
        let b = blues(3);
        assert_eq!(b.len(), 3);
        assert_eq!(b[0], Rgb([74, 152, 201]));
        assert_eq!(b[2], Rgb([8, 69, 148]));
        assert!(b[1].0[0] < b[0].0[0] && b[1].0[0] > b[2].0[0]);
    }

    #[test]
    fn blues_empty_and_single() {
        assert!(blues(0).is_empty());
        assert_eq!(blues(1).len(), 1);
    }
}
