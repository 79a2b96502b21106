//! The built-in sample catalog served when no catalog file is configured.

use crate::model::{ContentItem, ContentKind};

const SCALABLE_SAAS: &str = r#"
## Introduction
Building a scalable SaaS architecture is one of the most critical decisions a founder makes. Early choices decide whether the application handles ten users or ten million.

## Principles
This guide covers what separates platforms that grow from the ones that crumble under load, from service boundaries to database sharding.

## Horizontal Scalability
Design for horizontal scalability from day one: add servers instead of upgrading them. It is cheaper and tolerates faults better.

## Database Design
Proper indexing, read replicas and eventual consistency let payment platforms process millions of transactions a day.

## Caching & Performance
Redis, CDNs and application-level caches can cut database load by an order of magnitude.

## Monitoring & Observability
You can't scale what you can't measure. Logging, metrics and alerting surface bottlenecks before users do.
"#;

const PRODUCT_LED_GROWTH: &str = r#"
## Product-Led Growth
Product-led growth puts the product at the center of acquisition, activation and expansion.

## Aha Moment
Create a product so good that it sells itself. That takes a deep understanding of how users behave.

## Onboarding
You have minutes, not hours, to demonstrate value. The best onboarding flows get users to their aha moment fast.

## Freemium Models
The free tier must deliver real value while leaving a natural upgrade path.

## Viral Loops
Sharing built into the core workflow turns every user into an acquisition channel.
"#;

const STACK_BUILDER: &str = r#"
## Stack Builder
Stack Builder helps founders pick a technology stack for their project. The right choice early saves months of rewrites.

## Recommendations
It weighs project requirements, team expertise, scalability needs and budget, then recommends a combination of technologies.

## Features
- Frontend frameworks
- Backend runtimes
- Databases and caches
- Cloud providers and deployment

## Collaboration
Save stack configurations, share them with your team and track decisions over time.
"#;

const DESIGN_SYSTEMS: &str = r#"
## Design Systems
Consistent, maintainable design languages are hard to keep as teams grow. This guide covers building and scaling a design system.

## Consistency
Create a single source of truth for components and patterns.

## Tooling
Design files, component workbenches and how to wire them into your workflow.
"#;

const NO_CODE_MVP: &str = r#"
## No-Code MVP Builder
Launch your MVP in days, not weeks, using the latest no-code tools.

### Why No-Code?
No-code platforms let founders validate ideas without engineering resources.

### Top Tools
- Webflow
- Bubble
- Glide
- Softr

### Case Study
How one indie app launched in two weeks and reached 1,000 users.
"#;

const MARKETING_TOOLKIT: &str = r#"
## Maker Marketing Toolkit
Essential marketing tools for indie makers.

### What's Inside
- Email marketing
- Landing page builders
- Analytics
- Social media automation

### Success Story
How MakerStack grew to 10,000 subscribers in 6 months.
"#;

const FOUNDER_MINDSET: &str = r#"
## The Indie Founder's Mindset
How to stay resilient, creative and focused as a solo founder.

### Key Lessons
- Embrace failure
- Build in public
- Community over competition
"#;

const PRICING_GUIDE: &str = r#"
## Ultimate SaaS Pricing Guide
Find the right pricing model for your SaaS.

### Models
- Freemium
- Tiered
- Usage-based

### Real-World Examples
How top SaaS companies price for growth.
"#;

/// Eight items covering every content kind, ids `1` through `8`.
pub fn sample_catalog() -> Vec<ContentItem> {
    vec![
        ContentItem::new("1", "Building Scalable SaaS Architecture", ContentKind::Article)
            .with_description("Modern patterns for building resilient, scalable applications")
            .with_body(SCALABLE_SAAS)
            .with_author("Marcus Johnson")
            .with_category("Development")
            .with_published("Dec 12, 2024", "12 min read")
            .with_image("https://images.unsplash.com/photo-1555066931-4365d14bab8c?w=1200&h=600&fit=crop"),
        ContentItem::new("2", "Product-Led Growth Strategies", ContentKind::Article)
            .with_description("How to build products that sell themselves")
            .with_body(PRODUCT_LED_GROWTH)
            .with_author("Sarah Chen")
            .with_category("Product")
            .with_published("Dec 10, 2024", "15 min read")
            .with_image("https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=1200&h=600&fit=crop"),
        ContentItem::new("3", "Stack Builder Tool", ContentKind::Tool)
            .with_description("Choose the perfect tech stack for your project")
            .with_body(STACK_BUILDER)
            .with_author("MakerStack Team")
            .with_category("Development")
            .with_published("Dec 14, 2024", "8 min read")
            .with_image("https://images.unsplash.com/photo-1517077304055-6e89abbf09b0?w=1200&h=600&fit=crop"),
        ContentItem::new("4", "Design Systems at Scale", ContentKind::Article)
            .with_description("Creating consistent, maintainable design languages for growing teams")
            .with_body(DESIGN_SYSTEMS)
            .with_author("Emma Rodriguez")
            .with_category("Design")
            .with_published("Dec 8, 2024", "10 min read")
            .with_image("https://images.unsplash.com/photo-1558655146-9f40138edfeb?w=1200&h=600&fit=crop"),
        ContentItem::new("5", "No-Code MVP Builder", ContentKind::Playbook)
            .with_description("Build and launch MVPs without writing code")
            .with_body(NO_CODE_MVP)
            .with_author("David Kim")
            .with_category("No-Code")
            .with_published("Dec 5, 2024", "8 min read")
            .with_image("https://images.unsplash.com/photo-1506744038136-46273834b3fb?w=1200&h=600&fit=crop"),
        ContentItem::new("6", "Maker Marketing Toolkit", ContentKind::Tool)
            .with_description("Essential marketing tools for indie makers")
            .with_body(MARKETING_TOOLKIT)
            .with_author("Lisa Park")
            .with_category("Marketing")
            .with_published("Dec 2, 2024", "7 min read")
            .with_image("https://images.unsplash.com/photo-1519125323398-675f0ddb6308?w=1200&h=600&fit=crop"),
        ContentItem::new("7", "The Indie Founder's Mindset", ContentKind::Featured)
            .with_description("How to stay resilient, creative, and focused as a solo founder")
            .with_body(FOUNDER_MINDSET)
            .with_author("Sarah Chen")
            .with_category("Founders")
            .with_published("Nov 28, 2024", "6 min read")
            .with_image("https://images.unsplash.com/photo-1465101046530-73398c7f28ca?w=1200&h=600&fit=crop"),
        ContentItem::new("8", "Ultimate SaaS Pricing Guide", ContentKind::Playbook)
            .with_description("Find the perfect pricing model for your SaaS")
            .with_body(PRICING_GUIDE)
            .with_author("Marcus Johnson")
            .with_category("Business")
            .with_published("Nov 20, 2024", "9 min read")
            .with_image("https://images.unsplash.com/photo-1504384308090-c894fdcc538d?w=1200&h=600&fit=crop"),
    ]
}

/// Distinct categories in first-seen order, preceded by the "All" facet.
pub fn categories(items: &[ContentItem]) -> Vec<String> {
    let mut out = vec![crate::filter::ALL_CATEGORIES.to_string()];
    for item in items {
        if !item.category.is_empty() && !out.contains(&item.category) {
            out.push(item.category.clone());
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::document::Document;

    #[test]
    fn test_ids_are_unique_and_sequential() {
        let ids: Vec<_> = sample_catalog().into_iter().map(|i| i.id).collect();
        assert_eq!(ids, vec!["1", "2", "3", "4", "5", "6", "7", "8"]);
    }

    #[test]
    fn test_every_kind_is_represented() {
        let items = sample_catalog();
        for kind in ContentKind::all() {
            assert!(items.iter().any(|i| i.kind == *kind), "no {:?} item", kind);
        }
    }

    #[test]
    fn test_bodies_have_tables_of_contents() {
        for item in sample_catalog() {
            let body = item.full_body.as_deref().unwrap_or_default();
            assert!(!Document::parse(body).toc().is_empty(), "{} has no headings", item.id);
        }
    }

    #[test]
    fn test_categories_start_with_all() {
        let cats = categories(&sample_catalog());
        assert_eq!(cats[0], "All");
        assert_eq!(cats[1], "Development");
        assert_eq!(cats.iter().filter(|c| *c == "Development").count(), 1);
    }
}
