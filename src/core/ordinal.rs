/// Ordinal scales for degree levels and experience levels
///
/// Both scales are encoded as enums with a defined index order so that
/// proximity logic is index subtraction, never ad hoc string comparison.
/// Parsing from the free-form strings stored on profiles and postings is
/// lenient: case-insensitive, trimmed, and keyed on the distinctive word of
/// each level ("bachelor", "senior", ...).

/// Degree levels from lowest to highest
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum DegreeLevel {
    HighSchool,
    Associate,
    Bachelors,
    Masters,
    Phd,
}

impl DegreeLevel {
    pub const ORDER: [DegreeLevel; 5] = [
        DegreeLevel::HighSchool,
        DegreeLevel::Associate,
        DegreeLevel::Bachelors,
        DegreeLevel::Masters,
        DegreeLevel::Phd,
    ];

    /// Position on the ordinal scale, 0 = High School
    #[inline]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Parse a stored degree string, e.g. "Bachelor's Degree" or "PhD"
    pub fn parse(raw: &str) -> Option<DegreeLevel> {
        let norm = raw.trim().to_lowercase();
        if norm.is_empty() {
            return None;
        }
        if norm.contains("high school") || norm.contains("highschool") {
            Some(DegreeLevel::HighSchool)
        } else if norm.contains("associate") {
            Some(DegreeLevel::Associate)
        } else if norm.contains("bachelor") {
            Some(DegreeLevel::Bachelors)
        } else if norm.contains("master") {
            Some(DegreeLevel::Masters)
        } else if norm.contains("phd") || norm.contains("doctorate") {
            Some(DegreeLevel::Phd)
        } else {
            None
        }
    }
}

/// True if the posting's degree requirement is the explicit "Not Required"
/// sentinel rather than a real level.
#[inline]
pub fn degree_not_required(raw: &str) -> bool {
    let norm = raw.trim().to_lowercase();
    norm.contains("not required") || norm.contains("none")
}

/// Experience levels from most junior to most senior
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ExperienceLevel {
    Entry,
    Mid,
    Senior,
    LeadManager,
    Executive,
}

impl ExperienceLevel {
    pub const ORDER: [ExperienceLevel; 5] = [
        ExperienceLevel::Entry,
        ExperienceLevel::Mid,
        ExperienceLevel::Senior,
        ExperienceLevel::LeadManager,
        ExperienceLevel::Executive,
    ];

    /// Position on the ordinal scale, 0 = Entry
    #[inline]
    pub fn rank(self) -> usize {
        self as usize
    }

    /// Parse a stored level string, e.g. "Mid Level" or "Lead/Manager"
    pub fn parse(raw: &str) -> Option<ExperienceLevel> {
        let norm = raw.trim().to_lowercase();
        if norm.is_empty() {
            return None;
        }
        if norm.contains("entry") || norm.contains("junior") {
            Some(ExperienceLevel::Entry)
        } else if norm.contains("mid") {
            Some(ExperienceLevel::Mid)
        } else if norm.contains("senior") {
            Some(ExperienceLevel::Senior)
        } else if norm.contains("lead") || norm.contains("manager") {
            Some(ExperienceLevel::LeadManager)
        } else if norm.contains("executive") {
            Some(ExperienceLevel::Executive)
        } else {
            None
        }
    }

    /// Ordinal distance between two levels
    #[inline]
    pub fn distance(self, other: ExperienceLevel) -> usize {
        self.rank().abs_diff(other.rank())
    }
}
