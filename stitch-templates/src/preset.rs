//! Curated module bundles.
//!
//! Presets are static token lists, not resolved module references; each is
//! evaluated lazily against whatever catalog is active, so a preset naming a
//! module the library does not ship simply fails resolution at use time.

/// A named bundle of module tokens.
#[derive(Debug, Clone, Copy)]
pub struct Preset {
    pub id: &'static str,
    pub label: &'static str,
    pub summary: &'static str,
    pub modules: &'static [&'static str],
}

/// The built-in preset catalog, in display order.
pub const PRESETS: &[Preset] = &[
    Preset {
        id: "ott-platform",
        label: "OTT Platform",
        summary: "Catalog, playlists, tracking, monetization and OTT entitlements",
        modules: &[
            "core/auth",
            "core/rbac",
            "core/identity",
            "core/saas-multitenant",
            "core/audit-log",
            "streaming/ott-content",
            "streaming/ott-playlists",
            "streaming/ott-progress",
            "streaming/ott-entitlements",
            "streaming/ott-ads",
            "commerce/billing-subscriptions",
            "commerce/payments",
            "commerce/invoicing",
            "infra/api-keys",
            "infra/webhooks",
        ],
    },
    Preset {
        id: "b2b-saas",
        label: "B2B SaaS Suite",
        summary: "Organizations, projects, tasks and recurring revenue",
        modules: &[
            "core/auth",
            "core/rbac",
            "core/saas-multitenant",
            "core/audit-log",
            "core/feature-flags",
            "business/organizations",
            "business/projects",
            "business/tasks",
            "commerce/billing-subscriptions",
            "commerce/invoicing",
            "commerce/payments",
            "infra/api-keys",
            "infra/webhooks",
            "engagement/notifications",
        ],
    },
    Preset {
        id: "content-network",
        label: "Content Network",
        summary: "Full CMS with social interaction and moderation",
        modules: &[
            "core/auth",
            "core/rbac",
            "core/identity",
            "content/cms-content",
            "content/blog",
            "content/documentation",
            "content/knowledge-base",
            "content/media-library",
            "engagement/comments",
            "engagement/reactions",
            "engagement/moderation",
            "engagement/notifications",
            "infra/webhooks",
        ],
    },
    Preset {
        id: "marketplace-hub",
        label: "Marketplace Hub",
        summary: "Multi-vendor marketplace with catalog, orders and payments",
        modules: &[
            "core/auth",
            "core/rbac",
            "core/identity",
            "commerce/marketplace",
            "commerce/ecommerce",
            "commerce/payments",
            "commerce/billing-subscriptions",
            "commerce/invoicing",
            "commerce/credits-usage",
            "infra/api-keys",
            "infra/rate-limit",
            "infra/webhooks",
        ],
    },
    Preset {
        id: "creator-economy",
        label: "Creator Economy",
        summary: "Premium content, community and creator payouts",
        modules: &[
            "core/auth",
            "core/rbac",
            "content/blog",
            "content/media-library",
            "content/cms-content",
            "commerce/billing-subscriptions",
            "commerce/payments",
            "engagement/social",
            "engagement/comments",
            "engagement/reactions",
            "engagement/notifications",
            "infra/webhooks",
        ],
    },
    Preset {
        id: "knowledge-hub",
        label: "Knowledge Hub",
        summary: "Documentation, knowledge base and LMS",
        modules: &[
            "core/auth",
            "core/rbac",
            "content/documentation",
            "content/knowledge-base",
            "content/lms-elearning",
            "content/cms-content",
            "engagement/comments",
            "engagement/reactions",
            "engagement/analytics-events",
            "infra/webhooks",
        ],
    },
    Preset {
        id: "support-ops",
        label: "Support Ops",
        summary: "Help desk with CRM, workflows and auditing",
        modules: &[
            "core/auth",
            "core/rbac",
            "core/identity",
            "core/audit-log",
            "business/crm",
            "business/organizations",
            "business/tasks",
            "operations/support-ticketing",
            "engagement/notifications",
        ],
    },
    Preset {
        id: "booking-platform",
        label: "Booking Platform",
        summary: "Reservations, availability and recurring charges",
        modules: &[
            "core/auth",
            "core/rbac",
            "business/organizations",
            "business/projects",
            "operations/booking",
            "commerce/payments",
            "commerce/billing-subscriptions",
            "engagement/notifications",
            "infra/webhooks",
        ],
    },
    Preset {
        id: "iot-fleet",
        label: "IoT Fleet",
        summary: "IoT device management, telemetry and alerting",
        modules: &[
            "core/auth",
            "core/rbac",
            "core/audit-log",
            "infra/devices-iot",
            "infra/telemetry",
            "infra/api-keys",
            "infra/rate-limit",
            "infra/webhooks",
            "engagement/notifications",
        ],
    },
    Preset {
        id: "social-community",
        label: "Social Community",
        summary: "Social community with graph, reactions and moderation",
        modules: &[
            "core/auth",
            "core/identity",
            "engagement/social",
            "engagement/comments",
            "engagement/reactions",
            "engagement/moderation",
            "engagement/notifications",
            "engagement/ab-testing",
        ],
    },
    Preset {
        id: "education-lms",
        label: "Education LMS",
        summary: "Education platform with courses, media and community",
        modules: &[
            "core/auth",
            "core/rbac",
            "content/lms-elearning",
            "content/cms-content",
            "content/media-library",
            "streaming/ott-progress",
            "engagement/comments",
            "engagement/reactions",
            "engagement/notifications",
            "infra/webhooks",
        ],
    },
];
