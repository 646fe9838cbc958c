//! Rewrites the API's camelCase response keys into snake_case.
//!
//! The conversion is purely lexical: an underscore goes in front of every
//! uppercase letter except a leading one, then the whole key is lowercased.
//! Acronyms are therefore split per letter (`teamID` becomes `team_i_d`) and
//! digits stay attached to the word before them (`divisionL10Rank` becomes
//! `division_l10_rank`).

use serde_json::{Map, Value};

pub fn to_snake_case(value: &str) -> String {
    let mut out = String::with_capacity(value.len() + 4);
    for (i, c) in value.chars().enumerate() {
        if c.is_uppercase() && i > 0 {
            out.push('_');
        }
        out.extend(c.to_lowercase());
    }
    out
}

/// Returns a copy of `data` with every key converted by [`to_snake_case`].
///
/// Nested objects are converted recursively. Arrays and scalars are copied
/// as-is, including any objects inside arrays.
pub fn normalize_keys(data: &Map<String, Value>) -> Map<String, Value> {
    data.iter()
        .map(|(key, value)| {
            let value = match value {
                Value::Object(nested) => Value::Object(normalize_keys(nested)),
                other => other.clone(),
            };
            (to_snake_case(key), value)
        })
        .collect()
}

#[cfg(test)]
mod test {
    use serde_json::{json, Value};

    use super::{normalize_keys, to_snake_case};

    fn object(value: Value) -> serde_json::Map<String, Value> {
        value.as_object().cloned().unwrap()
    }

    #[test]
    fn test_to_snake_case() {
        let cases = [
            ("", ""),
            ("is_snake_case", "is_snake_case"),
            ("camelCase", "camel_case"),
            ("simpletextthatisalllower", "simpletextthatisalllower"),
            ("snake_thenCamelCase", "snake_then_camel_case"),
            ("camelCaseWithNums12345", "camel_case_with_nums12345"),
            ("divisionL10Rank", "division_l10_rank"),
            ("PascalCase", "pascal_case"),
            ("teamID", "team_i_d"),
        ];
        for (input, expected) in cases {
            assert_eq!(to_snake_case(input), expected, "input {input:?}");
        }
    }

    #[test]
    fn test_snake_case_is_idempotent() {
        for key in ["game_pk", "team_records", "a_b_c", "x"] {
            assert_eq!(to_snake_case(key), key);
            assert_eq!(to_snake_case(&to_snake_case(key)), key);
        }
    }

    #[test]
    fn test_one_underscore_per_inner_uppercase() {
        let input = "regularSeasonStartDate";
        let output = to_snake_case(input);
        assert!(!output.chars().any(char::is_uppercase));
        let inner_uppercase = input.chars().skip(1).filter(|c| c.is_uppercase()).count();
        assert_eq!(output.matches('_').count(), inner_uppercase);
    }

    #[test]
    fn test_normalize_flat_keys() {
        let input = object(json!({"helloWorld": null, "fine_world": 3, "teamName": "Oilers"}));
        let result = normalize_keys(&input);

        assert_eq!(result.len(), input.len());
        assert_eq!(
            Value::Object(result),
            json!({"hello_world": null, "fine_world": 3, "team_name": "Oilers"})
        );
    }

    #[test]
    fn test_normalize_empty() {
        assert!(normalize_keys(&serde_json::Map::new()).is_empty());
    }

    #[test]
    fn test_normalize_nested_objects_only() {
        let input = object(json!({
            "hiThere": {"nestedHiThere": {"deepKey": 1}, "nested_fine": null},
            "allPlays": [{"eventTypeId": "GOAL"}],
        }));

        assert_eq!(
            Value::Object(normalize_keys(&input)),
            json!({
                "hi_there": {"nested_hi_there": {"deep_key": 1}, "nested_fine": null},
                "all_plays": [{"eventTypeId": "GOAL"}],
            })
        );
    }
}
