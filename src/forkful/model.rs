use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Serialize};

/// A single dish record. Field order matches the persisted document.
///
/// `id` is the recipe's 1-based position in the collection, not a stable
/// key: deleting any recipe renumbers everything after it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Recipe {
    pub id: u32,
    pub title: String,
    pub category: String,
    pub ingredients: Vec<String>,
    pub instructions: Vec<String>,
    pub photos: Vec<String>,
    #[serde(with = "stamp")]
    pub created_at: NaiveDateTime,
    #[serde(with = "stamp")]
    pub updated_at: NaiveDateTime,
}

impl Recipe {
    pub fn new(
        id: u32,
        title: String,
        category: String,
        ingredients: &str,
        instructions: &str,
        photos: Vec<String>,
    ) -> Self {
        let now = stamp_now();
        Self {
            id,
            title,
            category,
            ingredients: split_lines(ingredients),
            instructions: split_lines(instructions),
            photos,
            created_at: now,
            updated_at: now,
        }
    }
}

/// Splits a multi-line form field into trimmed, non-blank lines.
pub fn split_lines(text: &str) -> Vec<String> {
    text.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(String::from)
        .collect()
}

/// Current local time truncated to the minute, matching the resolution of
/// the persisted timestamp format.
pub fn stamp_now() -> NaiveDateTime {
    let now = Local::now().naive_local();
    now.with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now)
}

/// Serde adapter for the `DD.MM.YYYY HH:MM` timestamps the recipe book
/// stores.
pub mod stamp {
    use chrono::NaiveDateTime;
    use serde::{self, Deserialize, Deserializer, Serializer};

    pub const FORMAT: &str = "%d.%m.%Y %H:%M";

    pub fn serialize<S>(stamp: &NaiveDateTime, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&stamp.format(FORMAT).to_string())
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<NaiveDateTime, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        NaiveDateTime::parse_from_str(&raw, FORMAT).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    fn fixed_stamp() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 2, 1)
            .unwrap()
            .and_hms_opt(10, 30, 0)
            .unwrap()
    }

    #[test]
    fn split_lines_drops_blanks_and_trims() {
        let text = "2 eggs\n\n  1 cup flour  \n   \nsalt";
        assert_eq!(split_lines(text), vec!["2 eggs", "1 cup flour", "salt"]);
    }

    #[test]
    fn split_lines_empty_field() {
        assert_eq!(split_lines(""), Vec::<String>::new());
        assert_eq!(split_lines("\n\n  \n"), Vec::<String>::new());
    }

    #[test]
    fn stamp_now_has_minute_resolution() {
        let now = stamp_now();
        assert_eq!(now.second(), 0);
        assert_eq!(now.nanosecond(), 0);
    }

    #[test]
    fn stamp_format_round_trips() {
        let original = fixed_stamp();
        let formatted = original.format(stamp::FORMAT).to_string();
        assert_eq!(formatted, "01.02.2024 10:30");
        let parsed = NaiveDateTime::parse_from_str(&formatted, stamp::FORMAT).unwrap();
        assert_eq!(parsed, original);
    }

    #[test]
    fn new_derives_lists_from_raw_fields() {
        let recipe = Recipe::new(
            1,
            "Pancakes".into(),
            "Breakfast".into(),
            "2 eggs\n\n1 cup flour\n",
            "Mix.\nFry.",
            vec![],
        );
        assert_eq!(recipe.ingredients, vec!["2 eggs", "1 cup flour"]);
        assert_eq!(recipe.instructions, vec!["Mix.", "Fry."]);
        assert_eq!(recipe.created_at, recipe.updated_at);
    }

    #[test]
    fn recipe_serializes_with_readable_timestamps() {
        let mut recipe = Recipe::new(
            1,
            "Soup".into(),
            "Dinner".into(),
            "water",
            "boil",
            vec!["photos/a.jpg".into()],
        );
        recipe.created_at = fixed_stamp();
        recipe.updated_at = fixed_stamp();

        let json = serde_json::to_string_pretty(&recipe).unwrap();
        assert!(json.contains("\"created_at\": \"01.02.2024 10:30\""));

        let back: Recipe = serde_json::from_str(&json).unwrap();
        assert_eq!(back, recipe);
    }
}
