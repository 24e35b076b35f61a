//! The fact store: the fixed boolean answer schema and its validator.
//!
//! The schema is closed. Validation is exhaustive: a single pass reports
//! every missing field, unknown field, and non-boolean value, so a caller
//! can fix the whole answers document at once.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use thiserror::Error;

/// Identifier for one fact in the schema.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord)]
pub enum FactId {
    CollectsHealthInfo,
    HasIdentifiableHealthInfo,
    IsHealthPlan,
    IsHealthcareProvider,
    OffersCertifiedHit,
    EnablesEhiExchange,
    RequiresPrescription,
    WorksForCoveredEntity,
    IntendedForMedicalUse,
    IsAdministrativeOrLifestyleOnly,
    IsLowRisk,
    HasFdaRegulatedFunction,
    IsConsumerFacing,
    InteractsWithPhr,
    IntendedForChildren,
    HasChildOrientedFeatures,
    ChildrenUsingApp,
    OffersSubstanceUseTreatment,
}

/// The answer schema in questionnaire order. Field names appear verbatim
/// in the answers document and in validation messages.
pub const SCHEMA_FIELDS: &[(&str, FactId)] = &[
    ("collects_health_info", FactId::CollectsHealthInfo),
    ("has_identifiable_health_info", FactId::HasIdentifiableHealthInfo),
    ("is_health_plan", FactId::IsHealthPlan),
    ("is_healthcare_provider", FactId::IsHealthcareProvider),
    ("offers_certified_hit", FactId::OffersCertifiedHit),
    ("enables_ehi_exchange", FactId::EnablesEhiExchange),
    ("requires_prescription", FactId::RequiresPrescription),
    ("works_for_covered_entity", FactId::WorksForCoveredEntity),
    ("intended_for_medical_use", FactId::IntendedForMedicalUse),
    (
        "is_administrative_or_lifestyle_only",
        FactId::IsAdministrativeOrLifestyleOnly,
    ),
    ("is_low_risk", FactId::IsLowRisk),
    ("has_fda_regulated_function", FactId::HasFdaRegulatedFunction),
    ("is_consumer_facing", FactId::IsConsumerFacing),
    ("interacts_with_phr", FactId::InteractsWithPhr),
    ("intended_for_children", FactId::IntendedForChildren),
    ("has_child_oriented_features", FactId::HasChildOrientedFeatures),
    ("children_using_app", FactId::ChildrenUsingApp),
    (
        "offers_substance_use_treatment",
        FactId::OffersSubstanceUseTreatment,
    ),
];

/// Immutable mapping from question to boolean answer.
///
/// Constructed once per evaluation run via [`FactStore::from_value`];
/// rule predicates read it through [`FactStore::get`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize, JsonSchema)]
#[serde(deny_unknown_fields)]
pub struct FactStore {
    pub collects_health_info: bool,
    pub has_identifiable_health_info: bool,
    pub is_health_plan: bool,
    pub is_healthcare_provider: bool,
    pub offers_certified_hit: bool,
    pub enables_ehi_exchange: bool,
    pub requires_prescription: bool,
    pub works_for_covered_entity: bool,
    pub intended_for_medical_use: bool,
    pub is_administrative_or_lifestyle_only: bool,
    pub is_low_risk: bool,
    pub has_fda_regulated_function: bool,
    pub is_consumer_facing: bool,
    pub interacts_with_phr: bool,
    pub intended_for_children: bool,
    pub has_child_oriented_features: bool,
    pub children_using_app: bool,
    pub offers_substance_use_treatment: bool,
}

/// One problem found while validating an answers document.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum Problem {
    /// Schema mismatch: a required field is absent.
    #[error("missing field: {field}")]
    MissingField { field: String },

    /// Schema mismatch: a key outside the fixed schema is present.
    #[error("unknown field: {field}")]
    UnknownField { field: String },

    /// Type mismatch: the value is not strictly boolean.
    #[error("field {field} must be a boolean, found {found}")]
    NotABoolean { field: String, found: &'static str },
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum AnswersError {
    #[error("answers document must be a JSON object")]
    NotAnObject,

    #[error("invalid answers document ({} problem{})", .problems.len(), if .problems.len() == 1 { "" } else { "s" })]
    Invalid { problems: Vec<Problem> },
}

impl AnswersError {
    /// All problems found, in deterministic order.
    pub fn problems(&self) -> &[Problem] {
        match self {
            AnswersError::NotAnObject => &[],
            AnswersError::Invalid { problems } => problems,
        }
    }
}

impl FactStore {
    /// Validate an untyped mapping against the fixed schema.
    ///
    /// Problems are reported in schema order, with unknown keys (sorted)
    /// last. Values are never coerced: `"true"`, `1`, and `null` are all
    /// type mismatches.
    pub fn from_value(value: &Value) -> Result<FactStore, AnswersError> {
        let Some(map) = value.as_object() else {
            return Err(AnswersError::NotAnObject);
        };

        let mut facts = FactStore::default();
        let mut problems = Vec::new();

        for &(name, id) in SCHEMA_FIELDS {
            match map.get(name) {
                None => problems.push(Problem::MissingField {
                    field: name.to_string(),
                }),
                Some(Value::Bool(b)) => facts.set(id, *b),
                Some(other) => problems.push(Problem::NotABoolean {
                    field: name.to_string(),
                    found: json_type_name(other),
                }),
            }
        }

        let mut unknown: Vec<&String> = map
            .keys()
            .filter(|k| SCHEMA_FIELDS.iter().all(|(name, _)| *name != k.as_str()))
            .collect();
        unknown.sort();
        for key in unknown {
            problems.push(Problem::UnknownField { field: key.clone() });
        }

        if problems.is_empty() {
            Ok(facts)
        } else {
            Err(AnswersError::Invalid { problems })
        }
    }

    pub fn get(&self, id: FactId) -> bool {
        match id {
            FactId::CollectsHealthInfo => self.collects_health_info,
            FactId::HasIdentifiableHealthInfo => self.has_identifiable_health_info,
            FactId::IsHealthPlan => self.is_health_plan,
            FactId::IsHealthcareProvider => self.is_healthcare_provider,
            FactId::OffersCertifiedHit => self.offers_certified_hit,
            FactId::EnablesEhiExchange => self.enables_ehi_exchange,
            FactId::RequiresPrescription => self.requires_prescription,
            FactId::WorksForCoveredEntity => self.works_for_covered_entity,
            FactId::IntendedForMedicalUse => self.intended_for_medical_use,
            FactId::IsAdministrativeOrLifestyleOnly => self.is_administrative_or_lifestyle_only,
            FactId::IsLowRisk => self.is_low_risk,
            FactId::HasFdaRegulatedFunction => self.has_fda_regulated_function,
            FactId::IsConsumerFacing => self.is_consumer_facing,
            FactId::InteractsWithPhr => self.interacts_with_phr,
            FactId::IntendedForChildren => self.intended_for_children,
            FactId::HasChildOrientedFeatures => self.has_child_oriented_features,
            FactId::ChildrenUsingApp => self.children_using_app,
            FactId::OffersSubstanceUseTreatment => self.offers_substance_use_treatment,
        }
    }

    pub(crate) fn set(&mut self, id: FactId, value: bool) {
        match id {
            FactId::CollectsHealthInfo => self.collects_health_info = value,
            FactId::HasIdentifiableHealthInfo => self.has_identifiable_health_info = value,
            FactId::IsHealthPlan => self.is_health_plan = value,
            FactId::IsHealthcareProvider => self.is_healthcare_provider = value,
            FactId::OffersCertifiedHit => self.offers_certified_hit = value,
            FactId::EnablesEhiExchange => self.enables_ehi_exchange = value,
            FactId::RequiresPrescription => self.requires_prescription = value,
            FactId::WorksForCoveredEntity => self.works_for_covered_entity = value,
            FactId::IntendedForMedicalUse => self.intended_for_medical_use = value,
            FactId::IsAdministrativeOrLifestyleOnly => {
                self.is_administrative_or_lifestyle_only = value
            }
            FactId::IsLowRisk => self.is_low_risk = value,
            FactId::HasFdaRegulatedFunction => self.has_fda_regulated_function = value,
            FactId::IsConsumerFacing => self.is_consumer_facing = value,
            FactId::InteractsWithPhr => self.interacts_with_phr = value,
            FactId::IntendedForChildren => self.intended_for_children = value,
            FactId::HasChildOrientedFeatures => self.has_child_oriented_features = value,
            FactId::ChildrenUsingApp => self.children_using_app = value,
            FactId::OffersSubstanceUseTreatment => self.offers_substance_use_treatment = value,
        }
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn all_false_answers() -> Value {
        let mut map = serde_json::Map::new();
        for (name, _) in SCHEMA_FIELDS {
            map.insert(name.to_string(), Value::Bool(false));
        }
        Value::Object(map)
    }

    #[test]
    fn complete_answers_validate() {
        let facts = FactStore::from_value(&all_false_answers()).expect("valid answers");
        assert_eq!(facts, FactStore::default());
    }

    #[test]
    fn fields_round_trip_through_get() {
        let mut answers = all_false_answers();
        answers["interacts_with_phr"] = json!(true);
        answers["is_low_risk"] = json!(true);

        let facts = FactStore::from_value(&answers).expect("valid answers");
        assert!(facts.get(FactId::InteractsWithPhr));
        assert!(facts.get(FactId::IsLowRisk));
        assert!(!facts.get(FactId::CollectsHealthInfo));
    }

    #[test]
    fn missing_field_is_named() {
        let mut answers = all_false_answers();
        answers
            .as_object_mut()
            .expect("object")
            .remove("is_health_plan");

        let err = FactStore::from_value(&answers).expect_err("must fail");
        assert_eq!(
            err.problems(),
            &[Problem::MissingField {
                field: "is_health_plan".to_string()
            }]
        );
    }

    #[test]
    fn unknown_field_is_named() {
        let mut answers = all_false_answers();
        answers["collects_pii"] = json!(false);

        let err = FactStore::from_value(&answers).expect_err("must fail");
        assert_eq!(
            err.problems(),
            &[Problem::UnknownField {
                field: "collects_pii".to_string()
            }]
        );
    }

    #[test]
    fn truthy_values_are_not_coerced() {
        let mut answers = all_false_answers();
        answers["collects_health_info"] = json!("true");
        answers["is_low_risk"] = json!(1);
        answers["interacts_with_phr"] = json!(null);

        let err = FactStore::from_value(&answers).expect_err("must fail");
        assert_eq!(
            err.problems(),
            &[
                Problem::NotABoolean {
                    field: "collects_health_info".to_string(),
                    found: "string"
                },
                Problem::NotABoolean {
                    field: "is_low_risk".to_string(),
                    found: "number"
                },
                Problem::NotABoolean {
                    field: "interacts_with_phr".to_string(),
                    found: "null"
                },
            ]
        );
    }

    #[test]
    fn all_problems_reported_in_one_pass() {
        let mut answers = all_false_answers();
        let map = answers.as_object_mut().expect("object");
        map.remove("coppa_applies"); // no-op, not in schema
        map.remove("is_health_plan");
        map.remove("children_using_app");
        map.insert("extra_b".to_string(), json!(true));
        map.insert("extra_a".to_string(), json!(true));
        map.insert("is_low_risk".to_string(), json!("yes"));

        let err = FactStore::from_value(&answers).expect_err("must fail");
        let problems = err.problems();
        // Schema order first, then unknown keys sorted.
        assert_eq!(
            problems,
            &[
                Problem::MissingField {
                    field: "is_health_plan".to_string()
                },
                Problem::NotABoolean {
                    field: "is_low_risk".to_string(),
                    found: "string"
                },
                Problem::MissingField {
                    field: "children_using_app".to_string()
                },
                Problem::UnknownField {
                    field: "extra_a".to_string()
                },
                Problem::UnknownField {
                    field: "extra_b".to_string()
                },
            ]
        );
    }

    #[test]
    fn non_object_input_rejected() {
        let err = FactStore::from_value(&json!([true, false])).expect_err("must fail");
        assert_eq!(err, AnswersError::NotAnObject);
        assert!(err.problems().is_empty());
    }

    #[test]
    fn problem_display_names_the_field() {
        let p = Problem::NotABoolean {
            field: "is_low_risk".to_string(),
            found: "string",
        };
        assert_eq!(p.to_string(), "field is_low_risk must be a boolean, found string");
    }
}
