use chrono::NaiveDate;

/// `2024-03-11` becomes `Mar 11, 2024`
pub fn format_date(date: NaiveDate) -> String {
    date.format("%b %d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_date() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 11).unwrap();
        assert_eq!(format_date(date), "Mar 11, 2024");
    }
}
