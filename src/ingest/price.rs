use crate::quantity::price::MegawattHourPrice;

/// Parse a fixing price, accepting a comma as the decimal separator.
#[must_use]
pub fn parse_price(value: &str) -> Option<MegawattHourPrice> {
    value
        .trim()
        .replace(',', ".")
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
        .map(MegawattHourPrice::from)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decimal_comma() {
        assert_eq!(parse_price("123,45"), Some(MegawattHourPrice::from(123.45)));
    }

    #[test]
    fn test_decimal_point() {
        assert_eq!(parse_price(" 430.5 "), Some(MegawattHourPrice::from(430.5)));
        assert_eq!(parse_price("-12"), Some(MegawattHourPrice::from(-12.0)));
    }

    #[test]
    fn test_invalid() {
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("n/a"), None);
        assert_eq!(parse_price("NaN"), None);
        assert_eq!(parse_price("1,234,56"), None);
    }
}
