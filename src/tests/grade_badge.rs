//! The grade → visual-category lookup is total and pure: the five letter
//! grades each map to their own category and everything else lands on the
//! single neutral fallback.

use proptest::prelude::*;

use crate::models::GradeCategory;

#[test]
fn letter_grades_map_to_their_categories() {
    assert_eq!(GradeCategory::from_grade("A"), GradeCategory::Positive);
    assert_eq!(GradeCategory::from_grade("B"), GradeCategory::Informational);
    assert_eq!(GradeCategory::from_grade("C"), GradeCategory::Caution);
    assert_eq!(GradeCategory::from_grade("D"), GradeCategory::Warning);
    assert_eq!(GradeCategory::from_grade("F"), GradeCategory::Severe);
}

#[test]
fn everything_else_is_neutral() {
    for grade in ["E", "A+", "a", "", "pass", "101"] {
        assert_eq!(GradeCategory::from_grade(grade), GradeCategory::Neutral);
    }
}

#[test]
fn categories_have_distinct_css_classes() {
    let classes = [
        GradeCategory::Positive.css_class(),
        GradeCategory::Informational.css_class(),
        GradeCategory::Caution.css_class(),
        GradeCategory::Warning.css_class(),
        GradeCategory::Severe.css_class(),
        GradeCategory::Neutral.css_class(),
    ];
    for (i, a) in classes.iter().enumerate() {
        for b in classes.iter().skip(i + 1) {
            assert_ne!(a, b);
        }
    }
}

proptest! {
    // No input other than the five letter grades produces anything but the
    // fallback category.
    #[test]
    fn arbitrary_grades_fall_back_to_neutral(grade in "\\PC*") {
        prop_assume!(!matches!(grade.as_str(), "A" | "B" | "C" | "D" | "F"));
        prop_assert_eq!(GradeCategory::from_grade(&grade), GradeCategory::Neutral);
    }

    // The mapping is pure: repeated calls agree.
    #[test]
    fn mapping_is_deterministic(grade in "\\PC*") {
        prop_assert_eq!(
            GradeCategory::from_grade(&grade),
            GradeCategory::from_grade(&grade)
        );
    }
}
