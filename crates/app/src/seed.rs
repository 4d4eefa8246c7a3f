//! Seeder: loads the fixed storefront catalog into an empty store.
//!
//! Runs once, before the HTTP listener is bound. It is not idempotent:
//! running it twice inserts every record twice, so the composition root
//! must call it exactly once per store.

use homecare_domain::catalog::{NewService, NewServiceCategory};
use homecare_domain::error::HomecareError;
use homecare_domain::id::CategoryId;
use homecare_domain::money::Cents;
use homecare_domain::plan::NewSubscriptionPlan;

use crate::ports::{CategoryRepository, PlanRepository, ServiceRepository};
use crate::services::catalog_service::CatalogService;
use crate::services::plan_service::PlanService;

struct CategorySeed {
    name: &'static str,
    description: &'static str,
    icon: &'static str,
}

struct ServiceSeed {
    category: u32,
    name: &'static str,
    description: &'static str,
    price: u32,
    image: &'static str,
    featured: bool,
    tag: Option<&'static str>,
}

struct PlanSeed {
    name: &'static str,
    description: &'static str,
    price: u32,
    popular: bool,
    features: &'static [&'static str],
}

const IMAGE_QUERY: &str = "?ixlib=rb-1.2.1&auto=format&fit=crop&w=600&q=80";

const CATEGORIES: &[CategorySeed] = &[
    CategorySeed {
        name: "Cleaning Services",
        description: "Professional cleaning for your home or business",
        icon: "fa-broom",
    },
    CategorySeed {
        name: "Maintenance Services",
        description: "Regular maintenance to keep your property in top condition",
        icon: "fa-tools",
    },
    CategorySeed {
        name: "Repair Services",
        description: "Expert repair services for your home and appliances",
        icon: "fa-hammer",
    },
];

const SERVICES: &[ServiceSeed] = &[
    ServiceSeed {
        category: 1,
        name: "Home Cleaning",
        description: "Professional cleaning services for your entire home, including dusting, vacuuming, and sanitizing.",
        price: 9900,
        image: "photo-1581578731548-c64695cc6952",
        featured: true,
        tag: Some("Popular"),
    },
    ServiceSeed {
        category: 2,
        name: "Lawn Care",
        description: "Regular lawn maintenance including mowing, edging, fertilizing, and seasonal clean-up.",
        price: 12_900,
        image: "photo-1556911220-bff31c812dba",
        featured: true,
        tag: Some("Seasonal"),
    },
    ServiceSeed {
        category: 3,
        name: "Appliance Repair",
        description: "Expert repair services for all major home appliances with priority scheduling for subscribers.",
        price: 14_900,
        image: "photo-1621905251189-08b45d6a269e",
        featured: true,
        tag: Some("On-Demand"),
    },
    ServiceSeed {
        category: 1,
        name: "Deep Cleaning",
        description: "Thorough cleaning of your entire home, including hard-to-reach areas and detailed attention.",
        price: 19_900,
        image: "photo-1563453392212-326f5e854473",
        featured: false,
        tag: Some("Thorough"),
    },
    ServiceSeed {
        category: 1,
        name: "Carpet Cleaning",
        description: "Professional carpet cleaning to remove stains, dirt, and allergens.",
        price: 12_900,
        image: "photo-1558317374-067fb5f30001",
        featured: false,
        tag: None,
    },
    ServiceSeed {
        category: 2,
        name: "HVAC Maintenance",
        description: "Regular maintenance to keep your heating and cooling systems running efficiently.",
        price: 14_900,
        image: "photo-1621905252507-b35492cc74b4",
        featured: false,
        tag: Some("Essential"),
    },
    ServiceSeed {
        category: 2,
        name: "Plumbing Maintenance",
        description: "Preventative maintenance to avoid costly plumbing emergencies.",
        price: 13_900,
        image: "photo-1607472586893-edb57bdc0e39",
        featured: false,
        tag: None,
    },
    ServiceSeed {
        category: 3,
        name: "Electrical Repairs",
        description: "Professional solutions for your electrical issues, from minor fixes to major repairs.",
        price: 15_900,
        image: "photo-1621905251918-48416bd8575a",
        featured: false,
        tag: Some("Emergency"),
    },
];

const PLANS: &[PlanSeed] = &[
    PlanSeed {
        name: "Basic Plan",
        description: "Perfect for small homes and apartments",
        price: 9900,
        popular: false,
        features: &[
            "Monthly cleaning service (3 hours)",
            "Quarterly HVAC filter replacement",
            "Annual home maintenance inspection",
            "Priority scheduling for additional services",
        ],
    },
    PlanSeed {
        name: "Plus Plan",
        description: "Ideal for medium-sized homes",
        price: 19_900,
        popular: true,
        features: &[
            "Bi-weekly cleaning service (4 hours)",
            "Quarterly HVAC filter replacement",
            "Semi-annual home maintenance",
            "Basic appliance maintenance",
            "Monthly lawn mowing (Apr-Oct)",
        ],
    },
    PlanSeed {
        name: "Premium Plan",
        description: "Complete care for larger homes",
        price: 34_900,
        popular: false,
        features: &[
            "Weekly cleaning service (5 hours)",
            "Quarterly HVAC service & filter replacement",
            "Quarterly home maintenance",
            "Complete appliance maintenance",
            "Weekly lawn care & gardening",
            "Unlimited service calls",
        ],
    },
];

/// How many records a seeding run inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SeedReport {
    pub categories: usize,
    pub services: usize,
    pub plans: usize,
}

/// Insert the fixed catalog: categories first, then services, then plans,
/// each in listed order so ids come out as `1..=N`.
///
/// # Errors
///
/// Returns the first validation or storage error hit. Records inserted
/// before the failure stay in the store.
pub async fn seed<CR, SR, PR>(
    catalog: &CatalogService<CR, SR>,
    plans: &PlanService<PR>,
) -> Result<SeedReport, HomecareError>
where
    CR: CategoryRepository,
    SR: ServiceRepository,
    PR: PlanRepository,
{
    for seed in CATEGORIES {
        let category = NewServiceCategory::builder()
            .name(seed.name)
            .description(seed.description)
            .icon(seed.icon)
            .build()?;
        catalog.create_service_category(category).await?;
    }

    for seed in SERVICES {
        let mut builder = NewService::builder()
            .category_id(CategoryId::new(seed.category))
            .name(seed.name)
            .description(seed.description)
            .price(Cents::new(seed.price))
            .image_url(format!(
                "https://images.unsplash.com/{}{IMAGE_QUERY}",
                seed.image
            ))
            .featured(seed.featured);
        if let Some(tag) = seed.tag {
            builder = builder.tag(tag);
        }
        catalog.create_service(builder.build()?).await?;
    }

    for seed in PLANS {
        let plan = NewSubscriptionPlan::builder()
            .name(seed.name)
            .description(seed.description)
            .price(Cents::new(seed.price))
            .popular(seed.popular)
            .features(seed.features.iter().copied())
            .build()?;
        let created = plans.create_subscription_plan(plan).await?;
        tracing::debug!(plan = %created.name, price = %created.price, "plan seeded");
    }

    let report = SeedReport {
        categories: CATEGORIES.len(),
        services: SERVICES.len(),
        plans: PLANS.len(),
    };
    tracing::info!(
        categories = report.categories,
        services = report.services,
        plans = report.plans,
        "catalog seeded"
    );
    Ok(report)
}
