use crate::common::*;

#[doc = r##"
    "#RRGGBB" 형식의 색상 문자열을 plotters 색상으로 변환하는 함수.

    앞의 '#'은 생략 가능하다.
"##]
pub fn parse_hex_color(hex: &str) -> anyhow::Result<RGBColor> {
    let digits: &str = hex.trim().trim_start_matches('#');

    if digits.len() != 6 || !digits.is_ascii() {
        return Err(anyhow!(
            "[parse_hex_color] '{}' is not a #RRGGBB color",
            hex
        ));
    }

    let channel = |range: std::ops::Range<usize>| -> anyhow::Result<u8> {
        u8::from_str_radix(&digits[range], 16)
            .with_context(|| format!("[parse_hex_color] '{}' has a non-hex channel", hex))
    };

    Ok(RGBColor(channel(0..2)?, channel(2..4)?, channel(4..6)?))
}

pub fn parse_hex_colors(hexes: &[String]) -> anyhow::Result<Vec<RGBColor>> {
    hexes.iter().map(|hex| parse_hex_color(hex)).collect()
}

pub const DARK_GREEN: RGBColor = RGBColor(0, 100, 0);
pub const ORANGE: RGBColor = RGBColor(255, 165, 0);
pub const NORMAL_GREEN: RGBColor = RGBColor(0, 128, 0);
pub const GRAY: RGBColor = RGBColor(128, 128, 128);
pub const LIGHT_BLUE: RGBColor = RGBColor(173, 216, 230);
pub const WHEAT: RGBColor = RGBColor(245, 222, 179);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_zone_colors() {
        assert_eq!(parse_hex_color("#FF6B6B").unwrap(), RGBColor(255, 107, 107));
        assert_eq!(parse_hex_color("4ecdc4").unwrap(), RGBColor(78, 205, 196));
    }

    #[test]
    fn rejects_malformed_colors() {
        assert!(parse_hex_color("#FFF").is_err());
        assert!(parse_hex_color("#GG0000").is_err());
        assert!(parse_hex_color("#FF6B6B00").is_err());
        assert!(parse_hex_color("#ÄÄÄ").is_err());
    }

    #[test]
    fn parses_a_whole_palette_or_fails() {
        let ok: Vec<String> = vec!["#FFB347".to_string(), "#77DD77".to_string()];
        assert_eq!(parse_hex_colors(&ok).unwrap().len(), 2);

        let bad: Vec<String> = vec!["#FFB347".to_string(), "nope".to_string()];
        assert!(parse_hex_colors(&bad).is_err());
    }
}
