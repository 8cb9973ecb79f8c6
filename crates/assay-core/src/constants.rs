/// Assay library version.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Business-process vocabulary matched against pattern descriptions.
/// Multi-word entries match as phrases, single words as whole tokens.
pub const BUSINESS_PROCESS_KEYWORDS: &[&str] = &[
    "approval",
    "audit",
    "authentication",
    "billing",
    "booking",
    "claim",
    "compliance",
    "contract",
    "customer",
    "data entry",
    "document",
    "email",
    "escalation",
    "expense",
    "forecast",
    "hiring",
    "integration",
    "inventory",
    "invoice",
    "lead",
    "migration",
    "monitoring",
    "notification",
    "onboarding",
    "order",
    "payment",
    "payroll",
    "procurement",
    "reconciliation",
    "refund",
    "report",
    "review",
    "scheduling",
    "shipping",
    "support",
    "survey",
    "ticket",
    "triage",
    "verification",
    "workflow",
];

/// Decimal places kept on composite scores.
pub const COMPOSITE_PRECISION: i32 = 6;
