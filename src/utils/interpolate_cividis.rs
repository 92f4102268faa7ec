use crate::models::Rgb;

fn channel(value: f64) -> u8 {
    value.round().clamp(0.0, 255.0) as u8
}

/// Polynomial approximation of the cividis colour map; `t` is clamped to `[0, 1]`.
pub fn interpolate_cividis(t: f64) -> Rgb {
    let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };

    Rgb {
        r: channel(
            -4.54 - t * (35.34 - t * (2381.73 - t * (6402.7 - t * (7024.72 - t * 2710.57)))),
        ),
        g: channel(
            32.49 + t * (170.73 + t * (52.82 - t * (131.46 - t * (176.58 - t * 67.37)))),
        ),
        b: channel(
            81.24 + t * (442.36 - t * (2482.43 - t * (6167.24 - t * (6614.94 - t * 2475.67)))),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoints() {
        assert_eq!(interpolate_cividis(0.0), Rgb { r: 0, g: 32, b: 81 });
        assert_eq!(interpolate_cividis(1.0), Rgb { r: 253, g: 234, b: 69 });
    }

    #[test]
    fn test_clamps_out_of_range() {
        assert_eq!(interpolate_cividis(-3.0), interpolate_cividis(0.0));
        assert_eq!(interpolate_cividis(42.0), interpolate_cividis(1.0));
    }
}
