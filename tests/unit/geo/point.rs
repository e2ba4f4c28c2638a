//! Tests for decimal points including truncation and text formatting

#[cfg(test)]
mod tests {
    use geojson_art::ArtError;
    use geojson_art::geo::Point;
    use geojson_art::geo::point::{DEFAULT_SHIFT, parse_decimal, truncate};
    use rust_decimal::Decimal;

    fn point(longitude: &str, latitude: &str) -> Point {
        Point::parse(longitude, latitude).unwrap()
    }

    // Tests JSON form of the fixed origin
    // Verified by swapping longitude and latitude order
    #[test]
    fn test_as_json_origin() {
        assert_eq!(point("-104.945", "39.837").as_json(), [-104.945, 39.837]);
    }

    // Tests truncation rather than rounding on both signs
    // Verified by switching to midpoint rounding
    #[test]
    fn test_as_json_truncates() {
        assert_eq!(point("1.23456", "-1.23459").as_json(), [1.2345, -1.2345]);
        assert_eq!(point("0.99999", "-0.99999").as_json(), [0.9999, -0.9999]);
    }

    // Tests full precision is kept internally despite truncated output
    // Verified by truncating at construction
    #[test]
    fn test_full_precision_retained() {
        let p = point("1.23456789", "2.5");
        assert_eq!(p.longitude(), parse_decimal("1.23456789").unwrap());
        assert_eq!(truncate(p.longitude()), parse_decimal("1.2345").unwrap());
    }

    // Tests shifts subtract one cell without mutating the point
    // Verified by adding the shift instead
    #[test]
    fn test_shifted_coordinates() {
        let p = point("-104.945", "39.837");

        assert_eq!(p.shifted_longitude(), parse_decimal("-104.9451").unwrap());
        assert_eq!(p.shifted_latitude(), parse_decimal("39.8369").unwrap());
        assert_eq!(p.longitude(), parse_decimal("-104.945").unwrap());
        assert_eq!(p.latitude(), parse_decimal("39.837").unwrap());
    }

    // Tests custom shift amounts
    // Verified by ignoring the shift argument
    #[test]
    fn test_shifted_by_custom_amount() {
        let p = point("10", "20");
        let shift = parse_decimal("0.5").unwrap();

        assert_eq!(p.shifted_longitude_by(shift), parse_decimal("9.5").unwrap());
        assert_eq!(p.shifted_latitude_by(shift), parse_decimal("19.5").unwrap());
    }

    // Tests repeated subtraction stays exact
    // Verified by using f64 accumulation
    #[test]
    fn test_repeated_shift_is_exact() {
        let mut longitude = Decimal::ZERO;
        for _ in 0..10_000 {
            longitude = Point::new(longitude, Decimal::ZERO).shifted_longitude();
        }
        assert_eq!(longitude, Decimal::NEGATIVE_ONE);
    }

    // Tests default shift is one ten-thousandth of a degree
    // Verified by changing the scale of the constant
    #[test]
    fn test_default_shift_value() {
        assert_eq!(DEFAULT_SHIFT, parse_decimal("0.0001").unwrap());
    }

    // Tests bracketed text form
    // Verified by adding a space after the comma
    #[test]
    fn test_display_format() {
        assert_eq!(point("-104.945", "39.837").to_string(), "[-104.945,39.837]");
        assert_eq!(point("-104.94519", "39.83699").to_string(), "[-104.9451,39.8369]");
    }

    // Tests whole numbers keep one fractional digit
    // Verified by removing the ".0" suffix
    #[test]
    fn test_display_whole_numbers() {
        assert_eq!(point("39", "1.00005").to_string(), "[39.0,1.0]");
        assert_eq!(point("-7.5000", "0.10").to_string(), "[-7.5,0.1]");
    }

    // Tests no scientific notation for tiny values
    // Verified by formatting through f64
    #[test]
    fn test_display_small_values() {
        assert_eq!(point("0.0001", "-0.00019").to_string(), "[0.0001,-0.0001]");
    }

    // Tests malformed literals are rejected
    // Verified by defaulting invalid input to zero
    #[test]
    fn test_parse_invalid_literal() {
        let err = Point::parse("west", "39.837").unwrap_err();
        match err {
            ArtError::InvalidCoordinate { value, .. } => assert_eq!(value, "west"),
            _ => unreachable!("Expected InvalidCoordinate error type"),
        }

        assert!(Point::parse("-104.945", "").is_err());
    }

    // Tests surrounding whitespace is tolerated
    // Verified by removing trim from parsing
    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(point(" -104.945 ", "39.837\n"), point("-104.945", "39.837"));
    }
}
