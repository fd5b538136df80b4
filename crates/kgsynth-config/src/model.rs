use std::collections::BTreeMap;

use kgsynth_core::WorkType;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

/// Inclusive integer range `[min, max]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CountRange {
    pub min: u32,
    pub max: u32,
}

impl CountRange {
    pub const fn new(min: u32, max: u32) -> Self {
        Self { min, max }
    }

    pub const fn exactly(value: u32) -> Self {
        Self::new(value, value)
    }

    pub fn is_valid(&self) -> bool {
        self.min <= self.max
    }
}

impl Default for CountRange {
    fn default() -> Self {
        Self::exactly(0)
    }
}

/// Full generator configuration, as read from the parameter file.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Seed for the random source; omitted means a fresh seed per run.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
    pub site: SiteConfig,
    pub content: ContentConfig,
    pub vocabulary: VocabularyConfig,
    pub shape: ShapeConfig,
    pub works: WorkConfig,
    #[serde(default)]
    pub coauthors: CoauthorConfig,
    #[serde(default)]
    pub activities: ActivityConfig,
    #[serde(default)]
    pub events: EventConfig,
}

/// Target site identity.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct SiteConfig {
    /// Prefix for every minted identifier, e.g. `http://vivo.example.edu/individual/`.
    pub namespace: String,
    pub university_name: String,
    /// Primary language tag for single-language literals.
    pub lang: String,
}

/// Placeholder text corpora and synthesized text shapes.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ContentConfig {
    /// Content language tags, in emission order.
    pub languages: Vec<String>,
    /// Placeholder text per language tag.
    pub corpus: BTreeMap<String, String>,
    #[serde(default = "default_title_length")]
    pub title_length: CountRange,
    #[serde(default = "default_description_length")]
    pub description_length: CountRange,
    /// Drop the first character of every synthesized text before capitalizing.
    #[serde(default)]
    pub legacy_first_char_drop: bool,
}

/// Name vocabularies and reference entity labels.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct VocabularyConfig {
    pub first_names: Vec<String>,
    pub last_names: Vec<String>,
    pub titles: Vec<String>,
    #[serde(default)]
    pub concepts: Vec<String>,
    #[serde(default)]
    pub journals: Vec<String>,
    /// College names per language tag; lists are index-aligned translations.
    pub college_names: BTreeMap<String, Vec<String>>,
    /// Department names per language tag; lists are index-aligned translations.
    pub department_names: BTreeMap<String, Vec<String>>,
}

/// Organizational hierarchy and productivity shape.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ShapeConfig {
    pub colleges_per_university: CountRange,
    pub departments_per_college: CountRange,
    pub faculty_per_department: CountRange,
    /// `min` is the floor on works per person. `max` caps the heavy-tailed
    /// spread `a`, not the count: a person gets `[min, min + a - 1]` works,
    /// so the count can reach `min + max - 1`.
    pub works_per_faculty: CountRange,
    #[serde(default)]
    pub productivity: ProductivityConfig,
    #[serde(default = "default_years")]
    pub years: CountRange,
}

/// Exponents of the two heavy-tailed draws summed into a work count.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProductivityConfig {
    pub shape_a: f64,
    pub shape_b: f64,
}

impl Default for ProductivityConfig {
    fn default() -> Self {
        Self {
            shape_a: 1.8,
            shape_b: 1.7,
        }
    }
}

/// Relative frequency of one document kind.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct WorkTypeWeight {
    pub kind: WorkType,
    pub weight: f64,
}

/// Bibliographic shape of generated works.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct WorkConfig {
    pub types: Vec<WorkTypeWeight>,
    #[serde(default = "default_volume")]
    pub volume: CountRange,
    #[serde(default = "default_issue")]
    pub issue: CountRange,
    #[serde(default = "default_start_page")]
    pub start_page: CountRange,
    #[serde(default = "default_page_span")]
    pub page_span: CountRange,
}

/// Co-author wiring.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct CoauthorConfig {
    /// Mean of the Poisson-distributed number of university co-authors.
    pub mean: f64,
}

impl Default for CoauthorConfig {
    fn default() -> Self {
        Self { mean: 3.0 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ActivityConfig {
    #[serde(default)]
    pub projects: ProjectConfig,
    #[serde(default)]
    pub grants: GrantConfig,
    #[serde(default)]
    pub equipment: EquipmentConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct ProjectConfig {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub participants: CountRange,
    #[serde(default)]
    pub produced_works: CountRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct GrantConfig {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub administering_colleges: CountRange,
    #[serde(default)]
    pub funded_projects: CountRange,
    #[serde(default)]
    pub supported_works: CountRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EquipmentConfig {
    #[serde(default)]
    pub count: u32,
    #[serde(default)]
    pub equipped_colleges: CountRange,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct EventConfig {
    #[serde(default)]
    pub conferences: u32,
    #[serde(default)]
    pub invited_talks_per_conference: u32,
    #[serde(default)]
    pub presentations_per_conference: u32,
    #[serde(default)]
    pub courses: u32,
    #[serde(default)]
    pub participants: CountRange,
}

impl GeneratorConfig {
    /// Localized name list for `language`, falling back to the primary language.
    pub fn localized<'a>(
        &'a self,
        names: &'a BTreeMap<String, Vec<String>>,
        language: &str,
    ) -> Option<&'a [String]> {
        names
            .get(language)
            .or_else(|| names.get(&self.site.lang))
            .map(Vec::as_slice)
    }
}

fn default_title_length() -> CountRange {
    CountRange::new(10, 100)
}

fn default_description_length() -> CountRange {
    CountRange::new(100, 1000)
}

fn default_years() -> CountRange {
    CountRange::new(1979, 2018)
}

fn default_volume() -> CountRange {
    CountRange::new(1, 400)
}

fn default_issue() -> CountRange {
    CountRange::new(1, 48)
}

fn default_start_page() -> CountRange {
    CountRange::new(1, 500)
}

fn default_page_span() -> CountRange {
    CountRange::new(1, 50)
}
