//! Static copy and catalogue data for the agency site.

pub const AGENCY_NAME: &str = "Momentum Media";
pub const TAGLINE: &str = "Create Connect Acquire";
pub const LOGO_URL: &str = "https://api.dicebear.com/9.x/initials/svg?seed=MM&backgroundColor=A3E635&textColor=0B1120";
pub const FOUNDER_IMAGE_URL: &str = "https://picsum.photos/600/800?grayscale";
pub const CONTACT_PHONE: &str = "+91 98765 43210";
pub const CONTACT_EMAIL: &str = "hello@momentummedia.com";

/// Icons a service card can show. Closed set, resolved through [`ServiceIcon::glyph`].
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ServiceIcon {
    BarChart,
    Search,
    Users,
    Monitor,
    Megaphone,
    Globe,
    PenTool,
}

impl ServiceIcon {
    pub fn glyph(self) -> &'static str {
        match self {
            ServiceIcon::BarChart => "📊",
            ServiceIcon::Search => "🔍",
            ServiceIcon::Users => "👥",
            ServiceIcon::Monitor => "🖥️",
            ServiceIcon::Megaphone => "📣",
            ServiceIcon::Globe => "🌐",
            ServiceIcon::PenTool => "✒️",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            ServiceIcon::BarChart => "Bar chart",
            ServiceIcon::Search => "Search",
            ServiceIcon::Users => "Users",
            ServiceIcon::Monitor => "Monitor",
            ServiceIcon::Megaphone => "Megaphone",
            ServiceIcon::Globe => "Globe",
            ServiceIcon::PenTool => "Pen",
        }
    }
}

#[derive(Clone, Debug, PartialEq)]
pub struct ServiceItem {
    pub id: &'static str,
    pub title: &'static str,
    pub description: &'static str,
    pub icon: ServiceIcon,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PricingPackage {
    pub id: &'static str,
    pub title: &'static str,
    pub price: &'static str,
    pub features: &'static [&'static str],
    pub recommended: bool,
}

pub const SERVICES: &[ServiceItem] = &[
    ServiceItem {
        id: "perf-marketing",
        title: "Performance Marketing",
        description: "Data-driven campaigns focused on ROI and measurable results across all channels.",
        icon: ServiceIcon::BarChart,
    },
    ServiceItem {
        id: "seo",
        title: "SEO Optimization",
        description: "Rank higher on search engines and drive organic traffic with technical and content SEO.",
        icon: ServiceIcon::Search,
    },
    ServiceItem {
        id: "lead-gen",
        title: "Lead Generation",
        description: "High-quality lead acquisition strategies to fuel your sales pipeline.",
        icon: ServiceIcon::Users,
    },
    ServiceItem {
        id: "web-design",
        title: "Web Design",
        description: "Premium, responsive, and conversion-optimized websites that represent your brand.",
        icon: ServiceIcon::Monitor,
    },
    ServiceItem {
        id: "meta-ads",
        title: "Meta Ads",
        description: "Targeted advertising on Facebook and Instagram to reach your ideal audience.",
        icon: ServiceIcon::Megaphone,
    },
    ServiceItem {
        id: "google-ads",
        title: "Google Ads",
        description: "Capture intent with precision-targeted Search, Display, and Video campaigns.",
        icon: ServiceIcon::Globe,
    },
    ServiceItem {
        id: "content",
        title: "Content Creation",
        description: "Engaging storytelling and visual content that connects with your customers.",
        icon: ServiceIcon::PenTool,
    },
];

pub const PACKAGES: &[PricingPackage] = &[
    PricingPackage {
        id: "pkg-1",
        title: "Starter Momentum",
        price: "₹10,000",
        features: &[
            "6 Ad Sets & Creatives",
            "Complete Account Setup",
            "GMB Setup & Optimization",
            "Monthly Performance Report",
            "Basic Support",
        ],
        recommended: false,
    },
    PricingPackage {
        id: "pkg-2",
        title: "Growth Accelerator",
        price: "₹20,000",
        features: &[
            "8 Ad Sets & Creatives",
            "SEO Optimization (Basic)",
            "Advanced Audience Targeting",
            "Bi-Weekly Reporting",
            "Priority Support",
        ],
        recommended: true,
    },
    PricingPackage {
        id: "pkg-3",
        title: "Market Dominator",
        price: "₹30,000",
        features: &[
            "12 Ad Sets & Creatives",
            "Full SEO Optimization",
            "Lead Generation Funnel",
            "Weekly Strategy Calls",
            "Dedicated Account Manager",
        ],
        recommended: false,
    },
];

pub const MARQUEE_ITEMS: &[&str] = &[
    "SEO",
    "Content Marketing",
    "Meta Ads",
    "Google Ads",
    "Web Design",
    "Lead Generation",
    "Brand Strategy",
    "Email Marketing",
    "Analytics",
];

// Choices offered by the proposal wizard, step 2
pub const PROPOSAL_SERVICES: &[&str] = &[
    "Performance Marketing",
    "SEO Optimization",
    "Social Media Management",
    "Content Creation",
    "Web Design & Dev",
    "Lead Generation",
    "Email Marketing",
    "Brand Strategy",
];

pub const BUDGET_RANGES: &[&str] = &[
    "₹20k - ₹50k",
    "₹50k - ₹1 Lakh",
    "₹1 Lakh - ₹3 Lakhs",
    "₹3 Lakhs+",
];

// "Service Interest" options of the contact form
pub const CONTACT_SERVICE_INTERESTS: &[&str] = &["Performance Marketing", "SEO", "Web Design"];

/// (label, section id) pairs for the navigation bar.
pub const NAV_ITEMS: &[(&str, &str)] = &[
    ("Home", "hero"),
    ("About", "about"),
    ("Services", "services"),
    ("Packages", "packages"),
    ("Contact", "contact"),
];

pub const SOCIAL_LINKS: &[(&str, &str)] = &[
    ("Instagram", "https://instagram.com"),
    ("Facebook", "https://facebook.com"),
    ("LinkedIn", "https://linkedin.com"),
];

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_service_ids_are_unique() {
        let ids: HashSet<_> = SERVICES.iter().map(|s| s.id).collect();
        assert_eq!(ids.len(), SERVICES.len());
    }

    #[test]
    fn test_at_most_one_recommended_package() {
        let recommended = PACKAGES.iter().filter(|p| p.recommended).count();
        assert!(recommended <= 1);
        let flagged = PACKAGES.iter().find(|p| p.recommended).map(|p| p.id);
        assert_eq!(flagged, Some("pkg-2"));
    }

    #[test]
    fn test_every_service_icon_has_a_glyph() {
        for service in SERVICES {
            assert!(!service.icon.glyph().is_empty(), "{} has no glyph", service.id);
        }
    }

    #[test]
    fn test_nav_targets_are_section_ids() {
        let targets: Vec<_> = NAV_ITEMS.iter().map(|(_, id)| *id).collect();
        assert_eq!(targets, vec!["hero", "about", "services", "packages", "contact"]);
    }

    #[test]
    fn test_contact_interests_name_offered_services() {
        assert_eq!(CONTACT_SERVICE_INTERESTS.first(), Some(&"Performance Marketing"));
        for interest in CONTACT_SERVICE_INTERESTS {
            assert!(
                SERVICES.iter().any(|s| s.title.starts_with(interest)),
                "{} is not a listed service",
                interest
            );
        }
    }

    #[test]
    fn test_wizard_choices_have_no_duplicates() {
        let services: HashSet<_> = PROPOSAL_SERVICES.iter().collect();
        assert_eq!(services.len(), PROPOSAL_SERVICES.len());
        let budgets: HashSet<_> = BUDGET_RANGES.iter().collect();
        assert_eq!(budgets.len(), BUDGET_RANGES.len());
    }
}
