//! Per-category asset/threat/vulnerability tables.

use crate::model::risk::RiskCategory;

/// Attribute pools for one risk category.
#[derive(Debug)]
pub struct CategoryTable {
    pub category: RiskCategory,
    pub assets: &'static [&'static str],
    pub threats: &'static [&'static str],
    pub vulnerabilities: &'static [&'static str],
}

/// Category tables in `RiskCategory::ALL` order.
pub static CATEGORY_TABLES: [CategoryTable; 6] = [
    CategoryTable {
        category: RiskCategory::Infrastructure,
        assets: &[
            "Policy Administration Server",
            "Claims Processing Database",
            "VMware Cluster",
            "Backup Storage Array",
            "On-Prem Data Center Power Systems",
            "Enterprise File Server",
        ],
        threats: &[
            "hardware failure",
            "ransomware encryption",
            "unauthorized configuration change",
            "capacity exhaustion",
            "fire or environmental damage",
        ],
        vulnerabilities: &[
            "single points of failure",
            "unsupported operating system",
            "insufficient patch management",
            "lack of immutable backups",
            "inadequate environmental monitoring",
        ],
    },
    CategoryTable {
        category: RiskCategory::Iam,
        assets: &[
            "Active Directory",
            "Okta SSO",
            "Privileged Access Workstations",
            "Service Account Vault",
            "HR Joiner/Mover/Leaver Workflow",
            "Password Reset Portal",
        ],
        threats: &[
            "credential stuffing",
            "privilege escalation",
            "insider misuse",
            "orphaned accounts",
            "phishing-based account takeover",
        ],
        vulnerabilities: &[
            "weak MFA enforcement",
            "over-privileged role assignments",
            "manual access reviews",
            "inconsistent deprovisioning",
            "shared administrative credentials",
        ],
    },
    CategoryTable {
        category: RiskCategory::Network,
        assets: &[
            "Core Firewall",
            "Remote Access VPN Gateway",
            "MPLS Connectivity",
            "Branch Office Network",
            "DNS Infrastructure",
            "Load Balancer Cluster",
        ],
        threats: &[
            "DDoS attack",
            "man-in-the-middle interception",
            "route hijacking",
            "malware propagation",
            "unauthorized network access",
        ],
        vulnerabilities: &[
            "insufficient network segmentation",
            "outdated firmware",
            "misconfigured firewall rules",
            "lack of anomaly monitoring",
            "unencrypted administrative access",
        ],
    },
    CategoryTable {
        category: RiskCategory::Cloud,
        assets: &[
            "Azure Active Directory",
            "Azure Storage Accounts",
            "Azure Kubernetes Service",
            "Azure Key Vault",
            "Azure SQL Database",
            "Azure API Management",
        ],
        threats: &[
            "cloud misconfiguration",
            "data exfiltration",
            "token compromise",
            "service outage",
            "malicious container image",
        ],
        vulnerabilities: &[
            "publicly exposed storage",
            "excessive permissions",
            "insufficient logging",
            "unreviewed infrastructure as code",
            "stale access keys",
        ],
    },
    CategoryTable {
        category: RiskCategory::ThirdParty,
        assets: &[
            "TPA Claims Processor",
            "Credit Scoring Vendor",
            "Email Marketing Platform",
            "Payment Processing Gateway",
            "Managed SOC",
            "Document Imaging Vendor",
        ],
        threats: &[
            "vendor data breach",
            "service-level agreement failure",
            "data mishandling",
            "subprocessor security incident",
            "unexpected service termination",
        ],
        vulnerabilities: &[
            "limited vendor oversight",
            "incomplete contract security clauses",
            "lack of continuous monitoring",
            "insufficient exit planning",
            "infrequent assurance reviews",
        ],
    },
    CategoryTable {
        category: RiskCategory::Privacy,
        assets: &[
            "Customer PII Repository",
            "GDPR Consent Records",
            "Call Center Recordings",
            "Claims Imaging Archive",
            "Analytics Data Lake",
            "Policyholder Portal",
        ],
        threats: &[
            "unauthorized access",
            "accidental disclosure",
            "data retention violation",
            "data subject request mishandling",
            "cross-border transfer non-compliance",
        ],
        vulnerabilities: &[
            "insufficient data classification",
            "manual redaction processes",
            "inconsistent retention schedules",
            "limited access monitoring",
            "incomplete privacy impact assessments",
        ],
    },
];

/// Returns the attribute table for `category`.
pub fn category_table(category: RiskCategory) -> &'static CategoryTable {
    match category {
        RiskCategory::Infrastructure => &CATEGORY_TABLES[0],
        RiskCategory::Iam => &CATEGORY_TABLES[1],
        RiskCategory::Network => &CATEGORY_TABLES[2],
        RiskCategory::Cloud => &CATEGORY_TABLES[3],
        RiskCategory::ThirdParty => &CATEGORY_TABLES[4],
        RiskCategory::Privacy => &CATEGORY_TABLES[5],
    }
}
