use std::fmt;

use serde::{Deserialize, Serialize};

/// Options for the generation engine.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct GenerateOptions {
    /// Seed override; takes precedence over the configured seed.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

/// Entity counts and timing of one run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GenerationSummary {
    /// Host part of the namespace.
    pub authority: String,
    pub universities: u64,
    pub colleges: u64,
    pub departments: u64,
    pub people: u64,
    pub works: u64,
    pub projects: u64,
    pub grants: u64,
    pub equipment: u64,
    pub conferences: u64,
    pub events: u64,
    pub courses: u64,
    pub authorships: u64,
    pub facts: u64,
    /// Primary language tag.
    pub language: String,
    pub duration_ms: u64,
}

impl GenerationSummary {
    pub fn elapsed_seconds(&self) -> f64 {
        self.duration_ms as f64 / 1000.0
    }
}

impl fmt::Display for GenerationSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} University; {} colleges; {} departments; {} people; {} works; \
             {} projects; {} grants; {} units of equipment; {} triples in language {} \
             {:.2} seconds",
            self.authority,
            self.universities,
            self.colleges,
            self.departments,
            self.people,
            self.works,
            self.projects,
            self.grants,
            self.equipment,
            self.facts,
            self.language,
            self.elapsed_seconds()
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn summary_line_matches_report_format() {
        let summary = GenerationSummary {
            authority: "vivo.mydomain.edu".to_string(),
            universities: 1,
            colleges: 3,
            departments: 9,
            people: 120,
            works: 800,
            projects: 20,
            grants: 15,
            equipment: 10,
            conferences: 3,
            events: 18,
            courses: 12,
            authorships: 3200,
            facts: 91234,
            language: "en".to_string(),
            duration_ms: 4321,
        };
        assert_eq!(
            summary.to_string(),
            "vivo.mydomain.edu 1 University; 3 colleges; 9 departments; 120 people; \
             800 works; 20 projects; 15 grants; 10 units of equipment; 91234 triples \
             in language en 4.32 seconds"
        );
    }
}
