//! Stable identifiers for rules.
//!
//! A rule id is a dotted namespace: `law.*` for applicable-law
//! determinations, `warn.*` for risk warnings. IDs appear verbatim in
//! report artifacts and must never be renamed without a schema bump.

// Applicable-law rules
pub const RULE_HIPAA: &str = "law.hipaa";
pub const RULE_FTC_BREACH: &str = "law.ftc_breach_notification";
pub const RULE_FDA_DEVICE: &str = "law.fda_device";
pub const RULE_INFO_BLOCKING: &str = "law.info_blocking";
pub const RULE_COPPA: &str = "law.coppa";
pub const RULE_SUBSTANCE_USE: &str = "law.substance_use";

// Warning rules
pub const WARN_CONSUMER_PHR: &str = "warn.consumer_phr";
pub const WARN_FDA_FUNCTION: &str = "warn.fda_function";
pub const WARN_CHILDRENS_DATA: &str = "warn.childrens_data";
