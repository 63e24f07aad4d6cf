//! Catalog record data models
//!
//! These types mirror the nested JSON shape of a work record as supplied by
//! the publishing catalog's API (camelCase field names). Records are
//! read-only inputs to the sync flow and are never mutated or written back.

use chrono::NaiveDate;
use serde::Deserialize;
use std::fmt;

/// Subject scheme code marking a free-text keyword subject.
const KEYWORD_SUBJECT_TYPE: &str = "KEYWORD";

/// Prefix the catalog puts in front of bare DOI values.
const DOI_URL_PREFIX: &str = "https://doi.org/";

/// A work record from the publishing catalog
///
/// Carries the bibliographic core of a written work plus its contributor
/// list, subject classifications, and the publications (editions) issued
/// for it.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogWork {
    /// Work title, also used as the entity label
    pub title: String,
    /// Optional subtitle
    #[serde(default)]
    pub subtitle: Option<String>,
    /// Place of publication as free text, possibly comma-separated
    pub place: String,
    /// Imprint carrying the publisher
    pub imprint: Imprint,
    /// Date of first publication
    pub publication_date: NaiveDate,
    /// Page count across the work
    pub page_count: u32,
    /// Library of Congress Control Number, when assigned
    #[serde(default)]
    pub lccn: Option<String>,
    /// Public landing page for the work
    pub landing_page: String,
    /// DOI, usually in URL form
    pub doi: String,
    /// Contributors in catalog insertion order
    #[serde(default)]
    pub contributions: Vec<Contribution>,
    /// Subject classifications in catalog insertion order
    #[serde(default)]
    pub subjects: Vec<Subject>,
    /// Publications (editions) issued for this work
    #[serde(default)]
    pub publications: Vec<CatalogPublication>,
}

impl CatalogWork {
    /// Returns the publisher name from the nested imprint
    pub fn publisher_name(&self) -> &str {
        &self.imprint.publisher.publisher_name
    }

    /// Returns the DOI with the catalog's URL prefix stripped
    ///
    /// The target store's DOI property holds bare identifiers such as
    /// `10.1234/xyz`, not the resolver URL form.
    pub fn bare_doi(&self) -> &str {
        self.doi.strip_prefix(DOI_URL_PREFIX).unwrap_or(&self.doi)
    }

    /// Returns the first-comma segment of the place of publication
    ///
    /// Catalog place fields often read "City, Country"; only the city is
    /// useful as a search query against the target store.
    pub fn place_search_term(&self) -> &str {
        self.place.split(',').next().unwrap_or(&self.place).trim()
    }

    /// Returns the primary keyword subject, if the record has one
    ///
    /// The primary keyword is the `KEYWORD`-scheme subject with ordinal 1.
    pub fn primary_keyword(&self) -> Option<&Subject> {
        self.subjects
            .iter()
            .find(|s| s.subject_type == KEYWORD_SUBJECT_TYPE && s.subject_ordinal == 1)
    }
}

/// Imprint a work was published under
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Imprint {
    /// Publisher owning the imprint
    pub publisher: Publisher,
}

/// Publishing house
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Publisher {
    /// Publisher display name
    pub publisher_name: String,
}

/// A single publication (edition) of a work
///
/// Each publication belongs to exactly one work and carries its own
/// publication-level identifiers.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPublication {
    /// Publication format code, e.g. `PAPERBACK`, `HARDBACK`, `PDF`
    pub publication_type: String,
    /// ISBN-13 assigned to this publication, when present
    #[serde(default)]
    pub isbn: Option<String>,
}

impl CatalogPublication {
    /// Returns the format code lowercased for human-readable text
    pub fn format_label(&self) -> String {
        self.publication_type.to_lowercase()
    }
}

/// A person's contribution to a work
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Contribution {
    /// Role the person played
    pub contribution_type: ContributionRole,
    /// The contributing person, flattened into the contribution record
    #[serde(flatten)]
    pub person: CatalogPerson,
}

/// Person fields carried on a contribution record
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CatalogPerson {
    /// Full display name, used as the entity label
    pub full_name: String,
    /// Given name, when the catalog splits the name
    #[serde(default)]
    pub first_name: Option<String>,
    /// Family name, when the catalog splits the name
    #[serde(default)]
    pub last_name: Option<String>,
}

/// Contribution role, as a closed enumeration
///
/// The catalog distinguishes many role codes; the target store only has
/// dedicated properties for authors, editors, and translators, so every
/// other role maps to the generic contributor relationship.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize)]
#[serde(from = "String")]
pub enum ContributionRole {
    /// `AUTHOR` role code
    Author,
    /// `EDITOR` role code
    Editor,
    /// `TRANSLATOR` role code
    Translator,
    /// Any other role code
    Contributor,
}

impl From<String> for ContributionRole {
    fn from(code: String) -> Self {
        match code.as_str() {
            "AUTHOR" => Self::Author,
            "EDITOR" => Self::Editor,
            "TRANSLATOR" => Self::Translator,
            _ => Self::Contributor,
        }
    }
}

impl fmt::Display for ContributionRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            Self::Author => "author",
            Self::Editor => "editor",
            Self::Translator => "translator",
            Self::Contributor => "contributor",
        };
        write!(f, "{label}")
    }
}

/// A subject classification attached to a work
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Subject {
    /// Classification scheme, e.g. `KEYWORD`, `BIC`, `THEMA`
    pub subject_type: String,
    /// Code or term within the scheme
    pub subject_code: String,
    /// Position within the scheme's ordering
    pub subject_ordinal: u32,
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    fn sample_record() -> &'static str {
        r#"{
            "title": "Open Access Futures",
            "subtitle": "Essays on Scholarly Publishing",
            "place": "Cambridge, UK",
            "imprint": {
                "publisher": {
                    "publisherName": "Meadow Press"
                }
            },
            "publicationDate": "2020-05-01",
            "pageCount": 244,
            "lccn": null,
            "landingPage": "https://books.example.org/oa-futures",
            "doi": "https://doi.org/10.1234/xyz",
            "contributions": [
                {
                    "contributionType": "AUTHOR",
                    "fullName": "Jane Example",
                    "firstName": "Jane",
                    "lastName": "Example"
                },
                {
                    "contributionType": "ILLUSTRATOR",
                    "fullName": "R. Sketcher"
                }
            ],
            "subjects": [
                { "subjectType": "BIC", "subjectCode": "KNTP1", "subjectOrdinal": 1 },
                { "subjectType": "KEYWORD", "subjectCode": "open access", "subjectOrdinal": 1 },
                { "subjectType": "KEYWORD", "subjectCode": "publishing", "subjectOrdinal": 2 }
            ],
            "publications": [
                { "publicationType": "PAPERBACK", "isbn": "978-1-234-56789-0" },
                { "publicationType": "PDF", "isbn": null }
            ]
        }"#
    }

    #[test]
    fn test_work_deserializes_from_catalog_json() {
        let work: CatalogWork = serde_json::from_str(sample_record()).unwrap();

        assert_eq!(work.title, "Open Access Futures");
        assert_eq!(
            work.subtitle.as_deref(),
            Some("Essays on Scholarly Publishing")
        );
        assert_eq!(work.publisher_name(), "Meadow Press");
        assert_eq!(
            work.publication_date,
            NaiveDate::from_ymd_opt(2020, 5, 1).unwrap()
        );
        assert_eq!(work.page_count, 244);
        assert_eq!(work.lccn, None);
        assert_eq!(work.contributions.len(), 2);
        assert_eq!(work.publications.len(), 2);
    }

    #[test]
    fn test_unknown_role_maps_to_contributor() {
        let work: CatalogWork = serde_json::from_str(sample_record()).unwrap();

        assert_eq!(
            work.contributions[0].contribution_type,
            ContributionRole::Author
        );
        assert_eq!(
            work.contributions[1].contribution_type,
            ContributionRole::Contributor
        );
    }

    #[test]
    fn test_person_fields_flatten_from_contribution() {
        let work: CatalogWork = serde_json::from_str(sample_record()).unwrap();

        let person = &work.contributions[0].person;
        assert_eq!(person.full_name, "Jane Example");
        assert_eq!(person.first_name.as_deref(), Some("Jane"));
        assert_eq!(person.last_name.as_deref(), Some("Example"));

        let name_only = &work.contributions[1].person;
        assert_eq!(name_only.full_name, "R. Sketcher");
        assert_eq!(name_only.first_name, None);
        assert_eq!(name_only.last_name, None);
    }

    #[test]
    fn test_bare_doi_strips_url_prefix() {
        let work: CatalogWork = serde_json::from_str(sample_record()).unwrap();
        assert_eq!(work.bare_doi(), "10.1234/xyz");
    }

    #[test]
    fn test_bare_doi_passes_through_unprefixed_values() {
        let mut work: CatalogWork = serde_json::from_str(sample_record()).unwrap();
        work.doi = "10.5555/abc".to_string();
        assert_eq!(work.bare_doi(), "10.5555/abc");
    }

    #[test_case("Cambridge, UK", "Cambridge" ; "comma separated")]
    #[test_case("Marseille", "Marseille" ; "no comma")]
    #[test_case("London, Ontario, Canada", "London" ; "two commas")]
    fn test_place_search_term(place: &str, expected: &str) {
        let mut work: CatalogWork = serde_json::from_str(sample_record()).unwrap();
        work.place = place.to_string();
        assert_eq!(work.place_search_term(), expected);
    }

    #[test]
    fn test_primary_keyword_requires_keyword_scheme_and_first_ordinal() {
        let work: CatalogWork = serde_json::from_str(sample_record()).unwrap();
        let subject = work.primary_keyword().unwrap();
        assert_eq!(subject.subject_code, "open access");
    }

    #[test]
    fn test_primary_keyword_absent_when_no_keyword_subjects() {
        let mut work: CatalogWork = serde_json::from_str(sample_record()).unwrap();
        work.subjects.retain(|s| s.subject_type != "KEYWORD");
        assert!(work.primary_keyword().is_none());
    }

    #[test]
    fn test_format_label_lowercases_type_code() {
        let publication = CatalogPublication {
            publication_type: "HARDBACK".to_string(),
            isbn: None,
        };
        assert_eq!(publication.format_label(), "hardback");
    }

    #[test]
    fn test_role_display_is_lowercase() {
        assert_eq!(ContributionRole::Author.to_string(), "author");
        assert_eq!(ContributionRole::Translator.to_string(), "translator");
    }
}
