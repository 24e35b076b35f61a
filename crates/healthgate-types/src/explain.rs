//! Explanation registry for rules.
//!
//! Maps rule IDs to human-readable compliance guidance: what the rule
//! detects, the obligations that follow when it triggers, and official
//! resources. This text is informational guidance, not legal advice.

use crate::ids;

/// Guidance entry for a rule.
#[derive(Debug, Clone)]
pub struct Explanation {
    /// Short name of the regulation or risk.
    pub title: &'static str,
    /// What the rule detects and why it exists.
    pub description: &'static str,
    /// Obligations that follow when the rule triggers.
    pub obligations: &'static [&'static str],
    /// Official resources: (label, url).
    pub resources: &'static [(&'static str, &'static str)],
}

/// Look up guidance by rule id.
///
/// Returns `None` if the identifier is not recognized.
pub fn lookup_explanation(identifier: &str) -> Option<Explanation> {
    match identifier {
        ids::RULE_HIPAA => Some(explain_hipaa()),
        ids::RULE_FTC_BREACH => Some(explain_ftc_breach()),
        ids::RULE_FDA_DEVICE => Some(explain_fda_device()),
        ids::RULE_INFO_BLOCKING => Some(explain_info_blocking()),
        ids::RULE_COPPA => Some(explain_coppa()),
        ids::RULE_SUBSTANCE_USE => Some(explain_substance_use()),
        ids::WARN_CONSUMER_PHR => Some(explain_consumer_phr()),
        ids::WARN_FDA_FUNCTION => Some(explain_fda_function()),
        ids::WARN_CHILDRENS_DATA => Some(explain_childrens_data()),
        _ => None,
    }
}

/// List all known rule IDs, laws first.
pub fn all_rule_ids() -> &'static [&'static str] {
    &[
        ids::RULE_HIPAA,
        ids::RULE_FTC_BREACH,
        ids::RULE_FDA_DEVICE,
        ids::RULE_INFO_BLOCKING,
        ids::RULE_COPPA,
        ids::RULE_SUBSTANCE_USE,
        ids::WARN_CONSUMER_PHR,
        ids::WARN_FDA_FUNCTION,
        ids::WARN_CHILDRENS_DATA,
    ]
}

fn explain_hipaa() -> Explanation {
    Explanation {
        title: "HIPAA Rules",
        description: "\
Applies when the tool handles individually identifiable health information \
for a HIPAA covered entity (health plan or health care provider), or when \
the developer builds or operates the tool on behalf of a covered entity as \
a business associate or subcontractor.",
        obligations: &[
            "Covered entities must comply with the HIPAA Privacy, Security, and \
Breach Notification Rules for all Protected Health Information (PHI).",
            "Business associates must sign a Business Associate Agreement (BAA) \
and comply with the same Privacy, Security, and Breach Notification Rules.",
        ],
        resources: &[
            ("HIPAA", "https://www.hhs.gov/hipaa/index.html"),
            (
                "HIPAA for Mobile Apps",
                "https://www.hhs.gov/hipaa/for-professionals/special-topics/health-apps/index.html",
            ),
        ],
    }
}

fn explain_ftc_breach() -> Explanation {
    Explanation {
        title: "FTC Health Breach Notification Rule",
        description: "\
Applies to tools outside HIPAA's reach that collect health information and \
interact with personal health records. HIPAA-covered data is carved out of \
this rule, so HIPAA applicability suppresses it.",
        obligations: &[
            "Notify consumers, the FTC, and in some cases the media following any \
unauthorized access to or acquisition of unsecured identifiable health \
information.",
            "Failure to provide required notifications can result in significant \
civil penalties from the FTC.",
        ],
        resources: &[(
            "Health Breach Notification Rule",
            "https://www.ftc.gov/legal-library/browse/rules/health-breach-notification-rule",
        )],
    }
}

fn explain_fda_device() -> Explanation {
    Explanation {
        title: "Federal Food, Drug, and Cosmetic Act (FD&C Act)",
        description: "\
Applies when the tool contains a device software function that is the focus \
of FDA oversight, or is a prescription-gated tool intended for the \
diagnosis, cure, mitigation, treatment, or prevention of disease. Tools \
that are solely administrative or lifestyle support, or that pose a low \
risk to patients, fall outside FDA enforcement focus.",
        obligations: &[
            "Comply with FDA medical device regulations; pre-market review, \
registration, and ongoing compliance may be required.",
        ],
        resources: &[
            (
                "FDA Digital Health",
                "https://www.fda.gov/medical-devices/digital-health-center-excellence",
            ),
            (
                "FDA Policy Navigator",
                "https://www.fda.gov/medical-devices/digital-health-center-excellence/digital-health-policy-navigator",
            ),
        ],
    }
}

fn explain_info_blocking() -> Explanation {
    Explanation {
        title: "21st Century Cures Act - Information Blocking Regulations",
        description: "\
Applies to health care providers, developers of certified health IT, and \
health information networks or exchanges that move electronic health \
information among unaffiliated parties.",
        obligations: &[
            "Do not engage in practices that interfere with access, exchange, or \
use of Electronic Health Information (EHI) unless covered by a regulatory \
exception.",
            "Certified health IT must meet the ASTP/ONC Certification Program's \
privacy and security requirements, including public attestations.",
        ],
        resources: &[(
            "Information Blocking",
            "https://www.healthit.gov/topic/information-blocking",
        )],
    }
}

fn explain_coppa() -> Explanation {
    Explanation {
        title: "Children's Online Privacy Protection Act (COPPA)",
        description: "\
Applies when the tool is intended for children, uses child-oriented \
activities, incentives, design, or music, or when the operator has actual \
knowledge that children under 13 are using it.",
        obligations: &[
            "Provide clear notice to parents about what information is collected \
from children under 13.",
            "Obtain verifiable parental consent before collecting children's \
personal information.",
            "Establish reasonable procedures to protect children's information.",
        ],
        resources: &[(
            "COPPA",
            "https://www.ftc.gov/business-guidance/privacy-security/childrens-privacy",
        )],
    }
}

fn explain_substance_use() -> Explanation {
    Explanation {
        title: "Substance Use Confidentiality (42 CFR Part 2 / OARFPA)",
        description: "\
Applies when the tool offers a substance use disorder treatment service or \
product. The FTC can seek civil penalties for unfair or deceptive acts or \
practices related to substance use disorder treatment.",
        obligations: &[
            "Ensure all claims about treatment efficacy are truthful and not \
misleading; enhanced scrutiny applies.",
            "Keep substance use treatment records confidential per 42 CFR Part 2.",
        ],
        resources: &[(
            "FTC Health Privacy",
            "https://www.ftc.gov/business-guidance/privacy-security/health-privacy",
        )],
    }
}

fn explain_consumer_phr() -> Explanation {
    Explanation {
        title: "Consumer-facing PHR exposure",
        description: "\
A consumer-facing tool interacting with personal health records outside \
HIPAA carries breach-notification exposure under the FTC rule. This \
warning flags the combination even before a breach occurs.",
        obligations: &[
            "Prepare a breach response plan covering consumer, FTC, and media \
notification timelines.",
        ],
        resources: &[(
            "Health Breach Notification Rule",
            "https://www.ftc.gov/legal-library/browse/rules/health-breach-notification-rule",
        )],
    }
}

fn explain_fda_function() -> Explanation {
    Explanation {
        title: "FDA-regulated device software function",
        description: "\
The tool includes a device software function that is the focus of FDA \
oversight. Pre-market review, registration, and ongoing compliance may be \
required regardless of other exemptions claimed.",
        obligations: &["Engage FDA early; confirm classification via the Policy Navigator."],
        resources: &[(
            "FDA Digital Health",
            "https://www.fda.gov/medical-devices/digital-health-center-excellence",
        )],
    }
}

fn explain_childrens_data() -> Explanation {
    Explanation {
        title: "Children's data exposure",
        description: "\
Tools intended for children, or known to be used by children, face strict \
requirements for data collected from users under 13. Consult legal counsel \
familiar with COPPA.",
        obligations: &["Audit all data collection paths for children's personal information."],
        resources: &[(
            "COPPA",
            "https://www.ftc.gov/business-guidance/privacy-security/childrens-privacy",
        )],
    }
}
