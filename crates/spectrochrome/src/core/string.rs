use crate::error::{ColorFormatError, ColorFormatErrorKind};

/// Determine the largest value representable with the given number of
/// hexadecimal digits, saturating at `u32::MAX`.
fn hex_limit(digits: usize) -> u32 {
    if digits >= 8 {
        u32::MAX
    } else {
        (1_u32 << (4 * digits)) - 1
    }
}

/// Format integer RGB as a hashed hexadecimal string.
///
/// Each channel is clamped to the largest value representable with
/// `digits_per_channel` hexadecimal digits and then formatted in upper case
/// with exactly that many digits. The result has length `1 + 3 *
/// digits_per_channel`.
pub fn hex_from_irgb(irgb: &[u32; 3], digits_per_channel: usize) -> String {
    if digits_per_channel == 0 {
        return "#".to_string();
    }

    let limit = hex_limit(digits_per_channel);
    let [r, g, b] = [irgb[0].min(limit), irgb[1].min(limit), irgb[2].min(limit)];
    format!(
        "#{:0width$X}{:0width$X}{:0width$X}",
        r,
        g,
        b,
        width = digits_per_channel
    )
}

/// Parse a hashed hexadecimal string into integer RGB.
///
/// The string must start with `#`, followed by three equally long groups of at
/// least one hexadecimal digit each. Upper and lower case digits are both
/// accepted.
pub fn irgb_from_hex(s: &str) -> Result<[u32; 3], ColorFormatError> {
    let digits = s
        .strip_prefix('#')
        .ok_or_else(|| ColorFormatError::new(ColorFormatErrorKind::UnknownFormat, s))?;

    // Checking the characters first also ensures that byte offsets fall on
    // character boundaries below.
    if !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return Err(ColorFormatError::new(ColorFormatErrorKind::MalformedHex, s));
    } else if digits.is_empty() || digits.len() % 3 != 0 {
        return Err(ColorFormatError::new(
            ColorFormatErrorKind::UnexpectedLength,
            s,
        ));
    }

    let width = digits.len() / 3;
    let parse_coordinate = |index: usize| -> Result<u32, ColorFormatError> {
        let group = &digits[width * index..width * (index + 1)];
        u32::from_str_radix(group, 16)
            .map_err(|_| ColorFormatError::new(ColorFormatErrorKind::OversizedCoordinate, s))
    };

    Ok([parse_coordinate(0)?, parse_coordinate(1)?, parse_coordinate(2)?])
}

#[cfg(test)]
mod test {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_format() {
        assert_eq!(hex_from_irgb(&[255, 0, 128], 2), "#FF0080");
        assert_eq!(hex_from_irgb(&[300, 16, 1], 2), "#FF1001");
        assert_eq!(hex_from_irgb(&[0xabc, 0xd, 0xfff], 3), "#ABC00DFFF");
        assert_eq!(hex_from_irgb(&[0x1f, 0x8, 0x0], 1), "#F80");
        assert_eq!(hex_from_irgb(&[u32::MAX, 0, 1], 8), "#FFFFFFFF0000000000000001");
        assert_eq!(hex_from_irgb(&[1, 2, 3], 0), "#");
    }

    #[test]
    fn test_parse() {
        assert_eq!(irgb_from_hex("#AB13D2"), Ok([171, 19, 210]));
        assert_eq!(irgb_from_hex("#ab13d2"), Ok([171, 19, 210]));
        assert_eq!(irgb_from_hex("#F80"), Ok([15, 8, 0]));
        assert_eq!(irgb_from_hex("#ABC00DFFF"), Ok([0xabc, 0xd, 0xfff]));
    }

    #[test]
    fn test_parse_errors() {
        for (input, kind) in [
            ("AB13D2", ColorFormatErrorKind::UnknownFormat),
            ("", ColorFormatErrorKind::UnknownFormat),
            ("#", ColorFormatErrorKind::UnexpectedLength),
            ("#AB13D", ColorFormatErrorKind::UnexpectedLength),
            ("#AB13DG", ColorFormatErrorKind::MalformedHex),
            ("#+1+1+1", ColorFormatErrorKind::MalformedHex),
            ("#💩00", ColorFormatErrorKind::MalformedHex),
            ("#123456789123456789123456789", ColorFormatErrorKind::OversizedCoordinate),
        ] {
            let error = irgb_from_hex(input).unwrap_err();
            assert_eq!(error.kind(), kind, "parsing {:?}", input);
            assert_eq!(error.input(), input);
        }
    }

    proptest! {
        #[test]
        fn prop_hex_round_trip(r in 0u32..=255, g in 0u32..=255, b in 0u32..=255) {
            let irgb = [r, g, b];
            let hex = hex_from_irgb(&irgb, 2);
            prop_assert_eq!(hex.len(), 7);
            prop_assert_eq!(irgb_from_hex(&hex), Ok(irgb));
        }

        #[test]
        fn prop_hex_round_trip_clamps(r in any::<u32>(), g in any::<u32>(), b in any::<u32>(), digits in 1usize..=8) {
            let limit = hex_limit(digits);
            let hex = hex_from_irgb(&[r, g, b], digits);
            prop_assert_eq!(hex.len(), 1 + 3 * digits);
            prop_assert_eq!(irgb_from_hex(&hex), Ok([r.min(limit), g.min(limit), b.min(limit)]));
        }
    }
}
