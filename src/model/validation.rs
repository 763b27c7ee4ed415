/// Declarative field validation used by the Add Project form.
///
/// A field is valid when every rule specified for it passes. Length
/// rules apply to text values, `min`/`max` to numbers; `required` means
/// non-empty after trimming for text and is trivially satisfied by any
/// parsed number.
#[derive(Debug, Clone, Copy, Default)]
pub struct Rules {
    pub required: bool,
    pub min_length: Option<usize>,
    pub max_length: Option<usize>,
    pub min: Option<i64>,
    pub max: Option<i64>,
}

#[derive(Debug, Clone, Copy)]
pub enum FieldValue<'a> {
    Text(&'a str),
    Number(i64),
}

pub fn validate(value: FieldValue<'_>, rules: &Rules) -> bool {
    match value {
        FieldValue::Text(s) => {
            let trimmed = s.trim();
            if rules.required && trimmed.is_empty() {
                return false;
            }
            if let Some(floor) = rules.min_length {
                if s.chars().count() < floor {
                    return false;
                }
            }
            if let Some(ceil) = rules.max_length {
                if s.chars().count() > ceil {
                    return false;
                }
            }
            true
        }
        FieldValue::Number(n) => {
            if let Some(floor) = rules.min {
                if n < floor {
                    return false;
                }
            }
            if let Some(ceil) = rules.max {
                if n > ceil {
                    return false;
                }
            }
            true
        }
    }
}

// Hard-coded rule values for the form, matching the board's input
// constraints: title required; description required with a floor of 5;
// people between 1 and 5.

pub fn title_rules() -> Rules {
    Rules {
        required: true,
        ..Default::default()
    }
}

pub fn description_rules() -> Rules {
    Rules {
        required: true,
        min_length: Some(5),
        ..Default::default()
    }
}

pub fn people_rules() -> Rules {
    Rules {
        required: true,
        min: Some(1),
        max: Some(5),
        ..Default::default()
    }
}

/// Validated form input, ready to hand to the store.
#[derive(Debug, Clone, PartialEq)]
pub struct ProjectInput {
    pub title: String,
    pub description: String,
    pub people: u32,
}

/// Check all three form fields at once.
///
/// Returns the cleaned-up input on success, or one message per failing
/// field for the dialog to display. `people` arrives as free text so
/// that out-of-range and non-numeric entries are both caught here.
pub fn validate_project_input(
    title: &str,
    description: &str,
    people: &str,
) -> Result<ProjectInput, Vec<String>> {
    let mut errors = Vec::new();

    if !validate(FieldValue::Text(title), &title_rules()) {
        errors.push("Title must not be empty.".to_string());
    }
    if !validate(FieldValue::Text(description), &description_rules()) {
        errors.push("Description must be at least 5 characters.".to_string());
    }

    let people_value = match people.trim().parse::<i64>() {
        Ok(n) if validate(FieldValue::Number(n), &people_rules()) => Some(n as u32),
        Ok(_) => {
            errors.push("People must be between 1 and 5.".to_string());
            None
        }
        Err(_) => {
            errors.push("People must be a whole number between 1 and 5.".to_string());
            None
        }
    };

    match people_value {
        Some(people) if errors.is_empty() => Ok(ProjectInput {
            title: title.trim().to_string(),
            description: description.trim().to_string(),
            people,
        }),
        _ => Err(errors),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn required_rejects_empty_and_whitespace() {
        let rules = Rules {
            required: true,
            ..Default::default()
        };
        assert!(!validate(FieldValue::Text(""), &rules));
        assert!(!validate(FieldValue::Text("   "), &rules));
        assert!(validate(FieldValue::Text("x"), &rules));
    }

    #[test]
    fn min_length_is_an_inclusive_floor() {
        let rules = Rules {
            required: true,
            min_length: Some(5),
            ..Default::default()
        };
        assert!(!validate(FieldValue::Text("abcd"), &rules));
        assert!(validate(FieldValue::Text("abcde"), &rules));
    }

    #[test]
    fn max_length_is_an_inclusive_ceiling() {
        let rules = Rules {
            max_length: Some(3),
            ..Default::default()
        };
        assert!(validate(FieldValue::Text("abc"), &rules));
        assert!(!validate(FieldValue::Text("abcd"), &rules));
    }

    #[test]
    fn numeric_range_checks() {
        let rules = Rules {
            min: Some(1),
            max: Some(5),
            ..Default::default()
        };
        assert!(validate(FieldValue::Number(3), &rules));
        assert!(validate(FieldValue::Number(1), &rules));
        assert!(validate(FieldValue::Number(5), &rules));
        assert!(!validate(FieldValue::Number(0), &rules));
        assert!(!validate(FieldValue::Number(6), &rules));
    }

    #[test]
    fn form_accepts_a_valid_triple() {
        let input = validate_project_input("Build API", "Create REST endpoints", "3").unwrap();
        assert_eq!(
            input,
            ProjectInput {
                title: "Build API".to_string(),
                description: "Create REST endpoints".to_string(),
                people: 3,
            }
        );
    }

    #[test]
    fn form_collects_one_message_per_failing_field() {
        let errors = validate_project_input("", "abcd", "6").unwrap_err();
        assert_eq!(errors.len(), 3);
    }

    #[test]
    fn form_rejects_non_numeric_people() {
        let errors = validate_project_input("Build API", "Create REST endpoints", "two").unwrap_err();
        assert_eq!(errors.len(), 1);
        assert!(errors[0].contains("whole number"));
    }

    #[test]
    fn form_trims_text_fields() {
        let input = validate_project_input("  Build API  ", " Create REST endpoints ", " 3 ").unwrap();
        assert_eq!(input.title, "Build API");
        assert_eq!(input.description, "Create REST endpoints");
    }
}
