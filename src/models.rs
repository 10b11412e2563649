use serde::{Deserialize, Serialize};

/// Role carried inside the cached user profile. Unknown values fall back to
/// `Unknown` instead of failing the whole identity parse - the backend owns
/// this vocabulary and may grow it.
#[derive(Clone, Copy, Serialize, Deserialize, PartialEq, Debug)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Teacher,
    Student,
    #[serde(other)]
    Unknown,
}

/// CurrentUser is the signed-in user's profile as cached by the login flow.
/// It is read once at mount and never re-fetched while the view lives.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct CurrentUser {
    pub id: u32,
    pub username: String,
    pub email: String,
    pub role: UserRole,
    pub full_name: String,
}

/// One term's scholastic outcome record, exactly as the backend returns it.
/// `subjects` stays a serialized JSON string; the dashboards never unpack it.
#[derive(Clone, Serialize, Deserialize, Debug, PartialEq)]
pub struct StudentResult {
    pub id: u32,
    pub student_id: String,
    pub student_name: String,
    pub class_name: String,
    pub session: String,
    pub term: String,
    pub subjects: String,
    pub total_score: f64,
    pub average_score: f64,
    pub grade: String,
    pub position: Option<String>,
    pub remarks: Option<String>,
}

impl StudentResult {
    /// Row heading, e.g. `"2023/2024 - First Term"`.
    pub fn title(&self) -> String {
        format!("{} - {}", self.session, self.term)
    }
}

/// Visual category backing the grade badge. The mapping is a fixed lookup on
/// the letter grade - there is no numeric derivation.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GradeCategory {
    Positive,
    Informational,
    Caution,
    Warning,
    Severe,
    Neutral,
}

impl GradeCategory {
    pub fn from_grade(grade: &str) -> Self {
        match grade {
            "A" => GradeCategory::Positive,
            "B" => GradeCategory::Informational,
            "C" => GradeCategory::Caution,
            "D" => GradeCategory::Warning,
            "F" => GradeCategory::Severe,
            _ => GradeCategory::Neutral,
        }
    }

    /// CSS modifier class used on badge elements.
    pub fn css_class(&self) -> &'static str {
        match self {
            GradeCategory::Positive => "grade-positive",
            GradeCategory::Informational => "grade-informational",
            GradeCategory::Caution => "grade-caution",
            GradeCategory::Warning => "grade-warning",
            GradeCategory::Severe => "grade-severe",
            GradeCategory::Neutral => "grade-neutral",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn user_profile_round_trips() {
        let json = r#"{
            "id": 7,
            "username": "STU001",
            "email": "ada@example.edu",
            "role": "student",
            "full_name": "Ada Lovelace"
        }"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.username, "STU001");
        assert_eq!(user.role, UserRole::Student);
    }

    #[test]
    fn unknown_role_falls_back_instead_of_failing() {
        let json = r#"{
            "id": 1,
            "username": "x",
            "email": "x@example.edu",
            "role": "bursar",
            "full_name": "X"
        }"#;
        let user: CurrentUser = serde_json::from_str(json).unwrap();
        assert_eq!(user.role, UserRole::Unknown);
    }

    #[test]
    fn result_parses_without_optional_fields() {
        let json = r#"{
            "id": 3,
            "student_id": "STU001",
            "student_name": "Ada Lovelace",
            "class_name": "Primary 5",
            "session": "2023/2024",
            "term": "First Term",
            "subjects": "[]",
            "total_score": 450,
            "average_score": 90.0,
            "grade": "A"
        }"#;
        let result: StudentResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.title(), "2023/2024 - First Term");
        assert_eq!(result.position, None);
        assert_eq!(result.remarks, None);
    }
}
