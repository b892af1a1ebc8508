use chrono::{DateTime, Utc};

/// A matched name and its modification time, if one is known.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Find {
    pub name: String,
    pub modified: Option<DateTime<Utc>>,
}

impl Find {
    pub fn new(name: impl Into<String>, modified: Option<DateTime<Utc>>) -> Self {
        Self {
            name: name.into(),
            modified,
        }
    }

    /// `yyyy-mm-dd`
    pub fn date(&self) -> Option<String> {
        self.modified.as_ref().map(format_date)
    }
}

pub fn format_date(time: &DateTime<Utc>) -> String {
    time.format("%Y-%m-%d").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_date_format() {
        let time = Utc.with_ymd_and_hms(2023, 10, 1, 12, 30, 0).unwrap();
        let find = Find::new("file.txt", Some(time));
        assert_eq!(find.date().as_deref(), Some("2023-10-01"));
    }

    #[test]
    fn test_date_missing() {
        assert_eq!(Find::new("file.txt", None).date(), None);
    }
}
