// Display helpers shared by presentation layers.

use strum::{Display, EnumIter, EnumString, IntoStaticStr};

use crate::validation::parse_date;

/// Render an optional ISO date as `"June 2020"`; a missing end date reads
/// as `"Present"`. Unparseable input is returned as-is.
pub fn format_month_year(date: Option<&str>) -> String {
    match date.map(str::trim).filter(|d| !d.is_empty()) {
        None => "Present".to_owned(),
        Some(raw) => parse_date(raw).map_or_else(
            || raw.to_owned(),
            |day| day.format("%B %Y").to_string(),
        ),
    }
}

/// `"June 2020 - Present"` style range.
pub fn format_period(start: &str, end: Option<&str>) -> String {
    format!(
        "{} - {}",
        format_month_year(Some(start)),
        format_month_year(end)
    )
}

/// Skill categories offered by pickers. The wire field stays a free string.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumString, EnumIter, IntoStaticStr,
)]
pub enum SkillType {
    Technical,
    #[strum(serialize = "Soft Skills")]
    SoftSkills,
    Languages,
    Tools,
    Frameworks,
    Other,
}
