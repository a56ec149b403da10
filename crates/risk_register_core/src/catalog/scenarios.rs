//! Pre-authored scenario pool sampled without replacement.

use crate::model::risk::RiskCategory;
use crate::model::risk::RiskCategory::{Cloud, Iam, Infrastructure, Network, Privacy, ThirdParty};

/// One pre-authored risk scenario.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Scenario {
    pub name: &'static str,
    pub category: RiskCategory,
    pub asset: &'static str,
    pub threat: &'static str,
    pub vulnerability: &'static str,
}

const fn scenario(
    name: &'static str,
    category: RiskCategory,
    asset: &'static str,
    threat: &'static str,
    vulnerability: &'static str,
) -> Scenario {
    Scenario {
        name,
        category,
        asset,
        threat,
        vulnerability,
    }
}

/// Fixed scenario pool. Names are unique.
pub static SCENARIO_POOL: [Scenario; 49] = [
    // Infrastructure
    scenario(
        "Ransomware outage of policy administration platform",
        Infrastructure,
        "Policy Administration Server",
        "Ransomware encrypts policy servers and halts quoting",
        "Flat server network with unpatched hypervisors",
    ),
    scenario(
        "Claims database corruption after failed storage upgrade",
        Infrastructure,
        "Claims Processing Database",
        "Storage firmware upgrade corrupts claims tables",
        "No tested rollback plan for storage changes",
    ),
    scenario(
        "Backup restore failure during disaster recovery",
        Infrastructure,
        "Backup Storage Array",
        "Backups cannot be restored within recovery time objective",
        "Restore tests not performed in the last twelve months",
    ),
    scenario(
        "Data center power loss",
        Infrastructure,
        "On-Prem Data Center Power Systems",
        "Extended utility outage exhausts UPS capacity",
        "Generator maintenance contract lapsed",
    ),
    scenario(
        "Legacy mainframe end of support",
        Infrastructure,
        "Policy Administration Server",
        "Vendor withdraws support for legacy policy mainframe",
        "No funded migration roadmap",
    ),
    scenario(
        "VMware cluster capacity exhaustion",
        Infrastructure,
        "VMware Cluster",
        "Quarter-end batch load exhausts compute capacity",
        "No capacity forecasting for seasonal peaks",
    ),
    scenario(
        "Unauthorized change to file server permissions",
        Infrastructure,
        "Enterprise File Server",
        "Administrator grants broad share access outside change control",
        "File share permissions not reviewed",
    ),
    scenario(
        "Unpatched operating systems in claims tier",
        Infrastructure,
        "Claims Processing Database",
        "Exploitation of known OS vulnerabilities",
        "Patch cycle exceeds ninety days",
    ),
    // IAM
    scenario(
        "Credential stuffing against agent portal",
        Iam,
        "Okta SSO",
        "Automated login attempts with breached credentials",
        "MFA not enforced for broker accounts",
    ),
    scenario(
        "Domain admin privilege escalation",
        Iam,
        "Active Directory",
        "Attacker escalates to domain admin via Kerberoasting",
        "Service accounts with weak passwords and SPNs",
    ),
    scenario(
        "Orphaned accounts after employee departures",
        Iam,
        "HR Joiner/Mover/Leaver Workflow",
        "Former employees retain active access",
        "Manual deprovisioning dependent on email tickets",
    ),
    scenario(
        "Shared administrator credentials in operations team",
        Iam,
        "Privileged Access Workstations",
        "Misuse of shared admin accounts without attribution",
        "No privileged access management tooling",
    ),
    scenario(
        "Service account secret leakage",
        Iam,
        "Service Account Vault",
        "Hard-coded service credentials exposed in scripts",
        "Secrets not rotated after personnel changes",
    ),
    scenario(
        "Help desk social engineering for password resets",
        Iam,
        "Password Reset Portal",
        "Caller impersonates an adjuster to reset credentials",
        "Weak caller identity verification",
    ),
    scenario(
        "Excessive underwriting system entitlements",
        Iam,
        "Active Directory",
        "Users accumulate entitlements across role changes",
        "Access reviews completed by rubber-stamp approvals",
    ),
    scenario(
        "Phishing-based takeover of executive mailbox",
        Iam,
        "Okta SSO",
        "MFA fatigue attack against senior executives",
        "Push-based MFA without number matching",
    ),
    // Network
    scenario(
        "DDoS attack on policyholder portal",
        Network,
        "Load Balancer Cluster",
        "Volumetric attack saturates internet links",
        "No upstream DDoS scrubbing service",
    ),
    scenario(
        "VPN gateway exploitation",
        Network,
        "Remote Access VPN Gateway",
        "Exploitation of a public VPN appliance vulnerability",
        "Firmware updates delayed by change freeze",
    ),
    scenario(
        "Lateral movement through flat branch network",
        Network,
        "Branch Office Network",
        "Malware spreads from branch workstation to core systems",
        "No segmentation between branches and data center",
    ),
    scenario(
        "Firewall rule base drift",
        Network,
        "Core Firewall",
        "Overly permissive rules expose internal services",
        "No periodic firewall rule recertification",
    ),
    scenario(
        "DNS hijacking of customer domains",
        Network,
        "DNS Infrastructure",
        "Registrar account compromise redirects customer traffic",
        "Registrar lock and DNSSEC not enabled",
    ),
    scenario(
        "MPLS provider outage",
        Network,
        "MPLS Connectivity",
        "Carrier outage isolates regional claims offices",
        "Single carrier without diverse routing",
    ),
    scenario(
        "Unencrypted network device management",
        Network,
        "Core Firewall",
        "Interception of administrative sessions",
        "Telnet and HTTP management interfaces still enabled",
    ),
    scenario(
        "Undetected command-and-control traffic",
        Network,
        "DNS Infrastructure",
        "Malware beacons over DNS tunnelling",
        "No network anomaly monitoring",
    ),
    // Cloud
    scenario(
        "Public exposure of claims documents in cloud storage",
        Cloud,
        "Azure Storage Accounts",
        "Anonymous access to claim attachments",
        "Storage containers created without policy guardrails",
    ),
    scenario(
        "Kubernetes cluster compromise via malicious image",
        Cloud,
        "Azure Kubernetes Service",
        "Deployment of a backdoored container image",
        "No image signing or admission control",
    ),
    scenario(
        "Key Vault access policy misconfiguration",
        Cloud,
        "Azure Key Vault",
        "Broad principals can read encryption keys",
        "Access policies managed manually in the portal",
    ),
    scenario(
        "Cloud tenant token theft",
        Cloud,
        "Azure Active Directory",
        "Stolen refresh tokens used to access the tenant",
        "Conditional access not applied to legacy clients",
    ),
    scenario(
        "Azure SQL data exfiltration",
        Cloud,
        "Azure SQL Database",
        "Bulk export of policyholder data by compromised identity",
        "Database auditing disabled",
    ),
    scenario(
        "API management gateway misconfiguration",
        Cloud,
        "Azure API Management",
        "Unauthenticated access to internal quoting APIs",
        "Infrastructure as code changes not peer reviewed",
    ),
    scenario(
        "Regional cloud service outage",
        Cloud,
        "Azure Kubernetes Service",
        "Provider region outage disables digital claims intake",
        "Workloads deployed to a single region",
    ),
    scenario(
        "Stale cloud access keys",
        Cloud,
        "Azure Storage Accounts",
        "Long-lived shared keys reused by departed contractors",
        "No key rotation schedule",
    ),
    // Third Party
    scenario(
        "Third-party administrator data breach",
        ThirdParty,
        "TPA Claims Processor",
        "Breach at claims TPA exposes claimant data",
        "Limited security assurance over TPA",
    ),
    scenario(
        "Credit scoring vendor service failure",
        ThirdParty,
        "Credit Scoring Vendor",
        "Vendor outage blocks new business underwriting",
        "No fallback scoring provider",
    ),
    scenario(
        "Email marketing platform data mishandling",
        ThirdParty,
        "Email Marketing Platform",
        "Vendor uses policyholder data beyond contract scope",
        "Contract lacks data use restrictions",
    ),
    scenario(
        "Payment gateway compromise",
        ThirdParty,
        "Payment Processing Gateway",
        "Card skimming script injected at payment provider",
        "No continuous monitoring of payment page integrity",
    ),
    scenario(
        "Managed SOC missed detection",
        ThirdParty,
        "Managed SOC",
        "Provider fails to escalate a confirmed intrusion",
        "SLA lacks detection quality metrics",
    ),
    scenario(
        "Document imaging vendor termination",
        ThirdParty,
        "Document Imaging Vendor",
        "Vendor exits the market with short notice",
        "No documented exit plan or data return clause",
    ),
    scenario(
        "Subprocessor incident at claims vendor",
        ThirdParty,
        "TPA Claims Processor",
        "Unknown subprocessor suffers ransomware attack",
        "Subprocessor inventory not maintained",
    ),
    scenario(
        "Outdated vendor security assessments",
        ThirdParty,
        "Credit Scoring Vendor",
        "Control weaknesses at vendor go unnoticed",
        "Assurance reviews performed only at onboarding",
    ),
    // Privacy
    scenario(
        "Unauthorized access to customer PII repository",
        Privacy,
        "Customer PII Repository",
        "Employees browse policyholder records without need",
        "No user activity monitoring on PII stores",
    ),
    scenario(
        "Accidental disclosure of medical claims data",
        Privacy,
        "Claims Imaging Archive",
        "Claim files emailed to the wrong recipient",
        "Manual redaction and no data loss prevention",
    ),
    scenario(
        "Retention schedule violation for call recordings",
        Privacy,
        "Call Center Recordings",
        "Recordings kept beyond the permitted period",
        "Retention rules not enforced technically",
    ),
    scenario(
        "Mishandled data subject access requests",
        Privacy,
        "Policyholder Portal",
        "Statutory deadlines missed for access requests",
        "Requests tracked in spreadsheets",
    ),
    scenario(
        "Cross-border transfer without safeguards",
        Privacy,
        "Analytics Data Lake",
        "Replication of EU data to non-adequate region",
        "Transfer impact assessments not performed",
    ),
    scenario(
        "Consent records inconsistency",
        Privacy,
        "GDPR Consent Records",
        "Marketing sent to customers who withdrew consent",
        "Consent not synchronized across systems",
    ),
    scenario(
        "Re-identification in analytics data lake",
        Privacy,
        "Analytics Data Lake",
        "Pseudonymised data linked back to individuals",
        "Insufficient data classification and masking",
    ),
    scenario(
        "Privacy impact assessment gaps for new products",
        Privacy,
        "Policyholder Portal",
        "New telematics features launched without review",
        "Incomplete privacy impact assessments",
    ),
    scenario(
        "Excessive staff access to call center recordings",
        Privacy,
        "Call Center Recordings",
        "Recordings containing card data replayed by staff",
        "Limited access monitoring",
    ),
];
