//! Request and response models for the Wikibase Action API.
//!
//! Covers the payload posted by `wbeditentity`, the value shapes accepted
//! by `wbcreateclaim`, and the response bodies of the read and write
//! actions the sync pipeline uses.

use std::collections::{HashMap, HashSet};

use chrono::NaiveDate;
use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::domain::{EntityId, PropertyId};

/// Language code applied to every label, description, alias, and
/// monolingual value the pipeline produces.
pub const DEFAULT_LANGUAGE: &str = "en";

/// Calendar model URI for dates in the proleptic Gregorian calendar.
pub const GREGORIAN_CALENDAR: &str = "http://www.wikidata.org/entity/Q1985727";

/// A single language-tagged text value.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LanguageValue {
    pub language: String,
    pub value: String,
}

impl LanguageValue {
    /// Creates a value tagged with the default language.
    pub fn english(value: impl Into<String>) -> Self {
        Self {
            language: DEFAULT_LANGUAGE.to_string(),
            value: value.into(),
        }
    }
}

/// The item document posted to `wbeditentity` when creating an entity.
///
/// Sections that hold no values are omitted from the serialized form, so
/// a payload built from a bare name serializes to its labels alone.
///
/// # Examples
///
/// ```
/// use colophon::adapters::wikibase::EntityPayload;
///
/// let payload = EntityPayload::new()
///     .with_label("The Meadow")
///     .with_description("written work published by Meadow Press");
///
/// assert_eq!(payload.label(), Some("The Meadow"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct EntityPayload {
    pub labels: HashMap<String, LanguageValue>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub descriptions: HashMap<String, LanguageValue>,
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub aliases: HashMap<String, Vec<LanguageValue>>,
}

impl EntityPayload {
    /// Creates an empty payload.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the label in the default language.
    pub fn with_label(mut self, value: impl Into<String>) -> Self {
        self.labels
            .insert(DEFAULT_LANGUAGE.to_string(), LanguageValue::english(value));
        self
    }

    /// Sets the description in the default language.
    pub fn with_description(mut self, value: impl Into<String>) -> Self {
        self.descriptions
            .insert(DEFAULT_LANGUAGE.to_string(), LanguageValue::english(value));
        self
    }

    /// Appends an alias in the default language.
    pub fn with_alias(mut self, value: impl Into<String>) -> Self {
        self.aliases
            .entry(DEFAULT_LANGUAGE.to_string())
            .or_default()
            .push(LanguageValue::english(value));
        self
    }

    /// Returns the default-language label, if one has been set.
    pub fn label(&self) -> Option<&str> {
        self.labels
            .get(DEFAULT_LANGUAGE)
            .map(|entry| entry.value.as_str())
    }
}

/// How an entity creation request was resolved.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CreateOutcome {
    /// A new item was created under this identifier.
    Created(EntityId),
    /// The target already held an item with the same label and
    /// description; this is its identifier.
    Existing(EntityId),
}

impl CreateOutcome {
    /// The identifier the caller should use from here on, regardless of
    /// whether the item is new.
    pub fn id(&self) -> &EntityId {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }

    /// Consumes the outcome, returning the identifier.
    pub fn into_id(self) -> EntityId {
        match self {
            Self::Created(id) | Self::Existing(id) => id,
        }
    }

    /// True when the request created a new item.
    pub fn was_created(&self) -> bool {
        matches!(self, Self::Created(_))
    }
}

/// The set of properties for which an entity already holds statements.
///
/// Seeded from a `wbgetclaims` read and kept current by inserting each
/// property as its statement is written, so membership reflects every
/// write of the session, not just the state at the initial read.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ClaimSet {
    properties: HashSet<PropertyId>,
}

impl ClaimSet {
    /// Creates an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the entity already holds a statement for `property`.
    pub fn contains(&self, property: &PropertyId) -> bool {
        self.properties.contains(property)
    }

    /// Records that a statement now exists for `property`.
    pub fn insert(&mut self, property: PropertyId) {
        self.properties.insert(property);
    }

    /// Number of distinct properties with statements.
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// True when the entity holds no statements at all.
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl FromIterator<PropertyId> for ClaimSet {
    fn from_iter<I: IntoIterator<Item = PropertyId>>(iter: I) -> Self {
        Self {
            properties: iter.into_iter().collect(),
        }
    }
}

/// Claim value pointing at another item.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ItemValue {
    #[serde(rename = "entity-type")]
    pub entity_type: String,
    #[serde(rename = "numeric-id")]
    pub numeric_id: u64,
}

impl ItemValue {
    /// Builds the value shape for a claim targeting `target`.
    pub fn new(target: &EntityId) -> Self {
        Self {
            entity_type: "item".to_string(),
            numeric_id: target.numeric(),
        }
    }
}

/// Claim value for a point in time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TimeValue {
    pub time: String,
    pub timezone: i32,
    pub before: u32,
    pub after: u32,
    pub precision: u8,
    pub calendarmodel: String,
}

impl TimeValue {
    /// Builds a day-precision Gregorian value for the given date.
    ///
    /// # Examples
    ///
    /// ```
    /// use chrono::NaiveDate;
    /// use colophon::adapters::wikibase::TimeValue;
    ///
    /// let date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
    /// let value = TimeValue::day_precision(date);
    /// assert_eq!(value.time, "+2020-05-01T00:00:00Z");
    /// assert_eq!(value.precision, 11);
    /// ```
    pub fn day_precision(date: NaiveDate) -> Self {
        Self {
            time: format!("+{}T00:00:00Z", date.format("%Y-%m-%d")),
            timezone: 0,
            before: 0,
            after: 0,
            precision: 11,
            calendarmodel: GREGORIAN_CALENDAR.to_string(),
        }
    }
}

/// Claim value for a dimensionless quantity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuantityValue {
    pub amount: String,
    pub unit: String,
}

impl QuantityValue {
    /// Builds a unitless count, e.g. a page count.
    pub fn count(value: u32) -> Self {
        Self {
            amount: format!("+{}", value),
            unit: "1".to_string(),
        }
    }
}

/// Claim value for text in a specific language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MonolingualText {
    pub text: String,
    pub language: String,
}

impl MonolingualText {
    /// Creates a value tagged with the default language.
    pub fn english(text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            language: DEFAULT_LANGUAGE.to_string(),
        }
    }
}

/// A structured claim value, serialized as the bare inner shape the API
/// expects.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum StructuredValue {
    Time(TimeValue),
    Quantity(QuantityValue),
    Monolingual(MonolingualText),
}

impl From<TimeValue> for StructuredValue {
    fn from(value: TimeValue) -> Self {
        Self::Time(value)
    }
}

impl From<QuantityValue> for StructuredValue {
    fn from(value: QuantityValue) -> Self {
        Self::Quantity(value)
    }
}

impl From<MonolingualText> for StructuredValue {
    fn from(value: MonolingualText) -> Self {
        Self::Monolingual(value)
    }
}

/// Error object embedded in an API response body.
#[derive(Debug, Clone, Deserialize)]
pub struct ApiError {
    pub code: String,
    pub info: String,
}

/// Response body of `wbeditentity`.
#[derive(Debug, Deserialize)]
pub struct EditEntityResponse {
    #[serde(default)]
    pub entity: Option<CreatedEntity>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// The entity section of a successful `wbeditentity` response.
#[derive(Debug, Deserialize)]
pub struct CreatedEntity {
    pub id: EntityId,
}

/// Response body of `wbgetclaims`.
///
/// The statement bodies under each property are irrelevant to the sync
/// pipeline; only the property keys matter.
#[derive(Debug, Deserialize)]
pub struct ClaimsResponse {
    #[serde(default)]
    pub claims: HashMap<PropertyId, serde_json::Value>,
}

impl ClaimsResponse {
    /// Reduces the response to the set of properties with statements.
    pub fn into_claim_set(self) -> ClaimSet {
        self.claims.into_keys().collect()
    }
}

/// Response body of `wbsearchentities`.
#[derive(Debug, Deserialize)]
pub struct SearchResponse {
    #[serde(default)]
    pub search: Vec<SearchHit>,
}

/// A single hit in a `wbsearchentities` response.
#[derive(Debug, Deserialize)]
pub struct SearchHit {
    pub id: EntityId,
    #[serde(default)]
    pub label: Option<String>,
}

/// Response body of a `meta=tokens` query.
#[derive(Debug, Deserialize)]
pub struct TokenResponse {
    pub query: TokenQuery,
}

#[derive(Debug, Deserialize)]
pub struct TokenQuery {
    pub tokens: TokenSet,
}

/// The tokens section of a `meta=tokens` response; which field is
/// populated depends on the requested token type.
#[derive(Debug, Deserialize)]
pub struct TokenSet {
    #[serde(default)]
    pub logintoken: Option<String>,
    #[serde(default)]
    pub csrftoken: Option<String>,
}

/// Response body of `action=login`.
#[derive(Debug, Deserialize)]
pub struct LoginResponse {
    pub login: LoginOutcome,
}

#[derive(Debug, Deserialize)]
pub struct LoginOutcome {
    pub result: String,
    #[serde(default)]
    pub reason: Option<String>,
}

/// Response body of `wbcreateclaim`.
#[derive(Debug, Deserialize)]
pub struct CreateClaimResponse {
    #[serde(default)]
    pub success: Option<u8>,
    #[serde(default)]
    pub error: Option<ApiError>,
}

/// Extracts the identifier of an existing item from a duplicate-edit
/// error message.
///
/// Wikibase rejects an edit that duplicates another item's label and
/// description with an `info` string embedding a wiki link to the
/// clashing item, e.g. `Item [[Q123|Q123]] already has label "..."`.
/// Returns `None` when the message carries no such link.
pub fn extract_entity_id(info: &str) -> Option<EntityId> {
    let link = Regex::new(r"\[\[(Q\d+)\|").unwrap();
    let captured = link.captures(info)?.get(1)?.as_str();
    EntityId::new(captured).ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_minimal_payload_serializes_labels_only() {
        let payload = EntityPayload::new().with_label("Ursula Example");
        let json = serde_json::to_string(&payload).unwrap();

        assert!(json.contains("\"labels\""));
        assert!(!json.contains("descriptions"));
        assert!(!json.contains("aliases"));
    }

    #[test]
    fn test_full_payload_serializes_all_sections() {
        let payload = EntityPayload::new()
            .with_label("The Meadow")
            .with_description("written work published by Meadow Press")
            .with_alias("The Meadow: A Field Guide");
        let json: serde_json::Value =
            serde_json::to_value(&payload).unwrap();

        assert_eq!(json["labels"]["en"]["value"], "The Meadow");
        assert_eq!(json["labels"]["en"]["language"], "en");
        assert_eq!(
            json["descriptions"]["en"]["value"],
            "written work published by Meadow Press"
        );
        assert_eq!(json["aliases"]["en"][0]["value"], "The Meadow: A Field Guide");
    }

    #[test]
    fn test_payload_label_accessor() {
        let payload = EntityPayload::new().with_label("The Meadow");
        assert_eq!(payload.label(), Some("The Meadow"));
        assert_eq!(EntityPayload::new().label(), None);
    }

    #[test]
    fn test_item_value_wire_shape() {
        let id = EntityId::new("Q937").unwrap();
        let json = serde_json::to_string(&ItemValue::new(&id)).unwrap();

        assert_eq!(json, r#"{"entity-type":"item","numeric-id":937}"#);
    }

    #[test]
    fn test_time_value_day_precision() {
        let date = NaiveDate::from_ymd_opt(2020, 5, 1).unwrap();
        let value = TimeValue::day_precision(date);

        assert_eq!(value.time, "+2020-05-01T00:00:00Z");
        assert_eq!(value.timezone, 0);
        assert_eq!(value.before, 0);
        assert_eq!(value.after, 0);
        assert_eq!(value.precision, 11);
        assert_eq!(value.calendarmodel, GREGORIAN_CALENDAR);
    }

    #[test]
    fn test_time_value_pads_short_components() {
        let date = NaiveDate::from_ymd_opt(987, 1, 9).unwrap();
        let value = TimeValue::day_precision(date);

        assert_eq!(value.time, "+0987-01-09T00:00:00Z");
    }

    #[test]
    fn test_quantity_value_count() {
        let value = QuantityValue::count(244);

        assert_eq!(value.amount, "+244");
        assert_eq!(value.unit, "1");
    }

    #[test]
    fn test_structured_value_serializes_untagged() {
        let value = StructuredValue::from(MonolingualText::english("The Meadow"));
        let json = serde_json::to_string(&value).unwrap();

        assert_eq!(json, r#"{"text":"The Meadow","language":"en"}"#);
    }

    #[test]
    fn test_extract_entity_id_from_duplicate_error() {
        let body = r#"{"error":{"code":"modification-failed","info":"Item [[Q123|Q123]] already has label \"The Meadow\" associated with language code en, using the same description text."}}"#;
        let parsed: EditEntityResponse = serde_json::from_str(body).unwrap();
        let error = parsed.error.unwrap();

        let id = extract_entity_id(&error.info).unwrap();
        assert_eq!(id.as_str(), "Q123");
    }

    #[test]
    fn test_extract_entity_id_takes_first_link() {
        let info = "Item [[Q55|Q55]] already has label, see also [[Q99|Q99]]";
        let id = extract_entity_id(info).unwrap();

        assert_eq!(id.as_str(), "Q55");
    }

    #[test]
    fn test_extract_entity_id_without_link() {
        assert_eq!(extract_entity_id("The save has failed."), None);
        assert_eq!(extract_entity_id("Item [[sandbox|sandbox]] exists"), None);
    }

    #[test]
    fn test_extract_entity_id_ignores_out_of_range_digits() {
        let info = "Item [[Q99999999999999999999999|Q99999999999999999999999]] already has label";
        assert_eq!(extract_entity_id(info), None);
    }

    #[test]
    fn test_claims_response_reduces_to_property_keys() {
        let body = r#"{"claims":{"P31":[{"mainsnak":{}}],"P50":[{"mainsnak":{}},{"mainsnak":{}}]}}"#;
        let parsed: ClaimsResponse = serde_json::from_str(body).unwrap();
        let claims = parsed.into_claim_set();

        assert_eq!(claims.len(), 2);
        assert!(claims.contains(&PropertyId::new("P31").unwrap()));
        assert!(claims.contains(&PropertyId::new("P50").unwrap()));
        assert!(!claims.contains(&PropertyId::new("P1476").unwrap()));
    }

    #[test]
    fn test_claims_response_with_no_claims() {
        let parsed: ClaimsResponse = serde_json::from_str(r#"{"claims":{}}"#).unwrap();
        assert!(parsed.into_claim_set().is_empty());
    }

    #[test]
    fn test_claim_set_tracks_inserts() {
        let mut claims = ClaimSet::new();
        let property = PropertyId::new("P1476").unwrap();

        assert!(!claims.contains(&property));
        claims.insert(property.clone());
        assert!(claims.contains(&property));
        assert_eq!(claims.len(), 1);
    }

    #[test]
    fn test_create_outcome_accessors() {
        let created = CreateOutcome::Created(EntityId::new("Q100").unwrap());
        let existing = CreateOutcome::Existing(EntityId::new("Q200").unwrap());

        assert!(created.was_created());
        assert!(!existing.was_created());
        assert_eq!(created.id().as_str(), "Q100");
        assert_eq!(existing.into_id().as_str(), "Q200");
    }

    #[test]
    fn test_search_response_parses_top_hit() {
        let body = r#"{"searchinfo":{"search":"Cambridge"},"search":[{"id":"Q350","label":"Cambridge"}]}"#;
        let parsed: SearchResponse = serde_json::from_str(body).unwrap();

        assert_eq!(parsed.search[0].id.as_str(), "Q350");
        assert_eq!(parsed.search[0].label.as_deref(), Some("Cambridge"));
    }

    #[test]
    fn test_search_response_with_no_hits() {
        let parsed: SearchResponse =
            serde_json::from_str(r#"{"searchinfo":{"search":"xyzzy"},"search":[]}"#).unwrap();
        assert!(parsed.search.is_empty());
    }

    #[test]
    fn test_search_response_rejects_out_of_range_id() {
        let body = r#"{"search":[{"id":"Q99999999999999999999999","label":"stray"}]}"#;
        assert!(serde_json::from_str::<SearchResponse>(body).is_err());
    }
}
