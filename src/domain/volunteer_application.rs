use serde::Serialize;

#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct VolunteerApplication {
    pub name: String,
    pub phone: String,
    pub skills: Vec<String>,
    pub location: String,
    pub availability: String,
    #[serde(rename = "appliedNGO")]
    pub applied_ngo: String,
}

/// Splits a comma separated skill list and trims every entry. Empty entries are kept.
pub fn parse_skills(skills: &str) -> Vec<String> {
    skills.split(',').map(|skill| skill.trim().to_string()).collect()
}
