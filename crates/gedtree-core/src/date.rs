//! Helpers for free-form GEDCOM dates (`1950`, `DEC 1973`, `13 DEC 1973`, `ABT 1900`).

/// Returns the first run of 4 consecutive ASCII digits.
pub fn extract_year(date: &str) -> Option<&str> {
    let bytes = date.as_bytes();
    let mut run_start = 0usize;
    let mut run_len = 0usize;
    for (i, b) in bytes.iter().enumerate() {
        if b.is_ascii_digit() {
            if run_len == 0 {
                run_start = i;
            }
            run_len += 1;
            if run_len == 4 {
                return date.get(run_start..run_start + 4);
            }
        } else {
            run_len = 0;
        }
    }
    None
}

pub fn year_number(date: &str) -> Option<i32> {
    extract_year(date)?.parse().ok()
}

/// `1950-2020`, `1950-` for the living, or an empty string without a birth year.
pub fn format_years(birth: Option<&str>, death: Option<&str>) -> String {
    let birth = birth.and_then(extract_year);
    let death = death.and_then(extract_year);
    match (birth, death) {
        (Some(b), Some(d)) => format!("{b}-{d}"),
        (Some(b), None) => format!("{b}-"),
        _ => String::new(),
    }
}

/// Two-letter initials for compact path breadcrumbs.
pub fn initials(name: &str) -> String {
    let parts: Vec<&str> = name.split_whitespace().collect();
    match parts.as_slice() {
        [] => "?".to_string(),
        [single] => single.chars().take(2).collect::<String>().to_uppercase(),
        [first, .., last] => {
            let mut out = String::new();
            out.extend(first.chars().next());
            out.extend(last.chars().next());
            out.to_uppercase()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extract_year_takes_first_four_digit_run() {
        assert_eq!(extract_year("1950"), Some("1950"));
        assert_eq!(extract_year("13 DEC 1973"), Some("1973"));
        assert_eq!(extract_year("ABT 12 1899"), Some("1899"));
        assert_eq!(extract_year("FROM 1900 TO 1910"), Some("1900"));
        assert_eq!(extract_year("12345"), Some("1234"));
        assert_eq!(extract_year("DEC 73"), None);
        assert_eq!(extract_year(""), None);
    }

    #[test]
    fn format_years_matches_tile_conventions() {
        assert_eq!(format_years(Some("1950"), Some("3 MAR 2020")), "1950-2020");
        assert_eq!(format_years(Some("JAN 1950"), None), "1950-");
        assert_eq!(format_years(None, Some("2020")), "");
        assert_eq!(format_years(Some("unknown"), None), "");
    }

    #[test]
    fn initials_handle_single_and_multi_word_names() {
        assert_eq!(initials("Martin Lee Porter"), "MP");
        assert_eq!(initials("martin"), "MA");
        assert_eq!(initials("   "), "?");
    }
}
