//! Input checks for the guided service forms.

pub const EMPTY_INPUT: &str = "Please provide valid input.";
pub const INVALID_NUMBER: &str = "Please provide a valid number (e.g., 1500 sqft).";
pub const INVALID_LOCATION: &str = "Please provide a valid city/area name.";

/// Keeps every digit in the input, e.g. "1500 sqft" -> "1500".
pub fn number(input: &str) -> Result<String, &'static str> {
    let input = non_empty(input)?;
    let digits: String = input.chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        return Err(INVALID_NUMBER);
    }
    Ok(digits)
}

/// At least three characters after trimming, returned title-cased.
pub fn location(input: &str) -> Result<String, &'static str> {
    let input = non_empty(input)?;
    if input.chars().count() < 3 {
        return Err(INVALID_LOCATION);
    }
    Ok(title_case(input))
}

pub fn text(input: &str) -> Result<String, &'static str> {
    non_empty(input).map(str::to_string)
}

fn non_empty(input: &str) -> Result<&str, &'static str> {
    let trimmed = input.trim();
    if trimmed.is_empty() {
        Err(EMPTY_INPUT)
    } else {
        Ok(trimmed)
    }
}

/// Uppercases the first letter of every alphabetic run and lowercases the rest.
pub fn title_case(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut in_word = false;
    for c in input.chars() {
        if c.is_alphabetic() {
            if in_word {
                out.extend(c.to_lowercase());
            } else {
                out.extend(c.to_uppercase());
            }
            in_word = true;
        } else {
            out.push(c);
            in_word = false;
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_number_extracts_digits() {
        assert_eq!(number("1500 sqft").unwrap(), "1500");
        assert_eq!(number("about 2,000 sq ft").unwrap(), "2000");
        assert_eq!(number("abc"), Err(INVALID_NUMBER));
        assert_eq!(number("   "), Err(EMPTY_INPUT));
    }

    #[test]
    fn test_location_rules() {
        assert_eq!(location("ab"), Err(INVALID_LOCATION));
        assert_eq!(location("  ab  "), Err(INVALID_LOCATION));
        assert_eq!(location("delhi").unwrap(), "Delhi");
        assert_eq!(location(" new DELHI ").unwrap(), "New Delhi");
    }

    #[test]
    fn test_title_case() {
        assert_eq!(title_case("sector 15, chandigarh"), "Sector 15, Chandigarh");
        assert_eq!(title_case("o'brien road"), "O'Brien Road");
        assert_eq!(title_case("residential society"), "Residential Society");
    }

    #[test]
    fn test_text_requires_content() {
        assert_eq!(text("  fever and cough ").unwrap(), "fever and cough");
        assert_eq!(text(""), Err(EMPTY_INPUT));
    }
}
