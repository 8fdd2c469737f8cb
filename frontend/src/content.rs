//! Static copy for the landing page.

pub const BUSINESS_NAME: &str = "Jefferis Software Solutions";
pub const SUBHEADING: &str = "Empowering Local Businesses with Cost-Effective Software";
pub const CALENDLY_URL: &str = "https://calendly.com/finnjefferis/30min";

pub const WINS: &[&str] = &[
    "Slashed manual data entry for a local firm by integrating a bespoke C# MVC dashboard straight into Zoho CRM.",
    "Redesigned a Carbon Calculator application, improving speed, mobile usability and ensured results were synced to the client’s CRM in real-time.",
    "Refactored legacy code for a local e-commerce business, vastly improving SEO, trimming page-load seconds and lifting organic traffic.",
];

pub const TOOLSET: &str = "React / Next.js • TypeScript • Tailwind • .NET • Laravel • Python • REST & GraphQL • PostgreSQL / MySQL • Azure CI/CD";

pub struct Service {
    pub title: &'static str,
    pub icon: &'static str,
    pub accent: &'static str,
    pub pitch: &'static str,
    pub benefits: &'static [&'static str],
}

pub const SERVICES: &[Service] = &[
    Service {
        title: "Build & Launch",
        icon: "</>",
        accent: "blue",
        pitch: "New marketing site, e-commerce store or bespoke app, finished, live and ready to earn.",
        benefits: &[
            "Full-stack dev (Next.js, .NET)",
            "SEO & core-web-vitals ready",
            "CRM / payment integrations",
        ],
    },
    Service {
        title: "Fix & Grow",
        icon: "⚙",
        accent: "emerald",
        pitch: "Own a site already? I optimise, troubleshoot and add revenue-boosting features.",
        benefits: &[
            "Speed & SEO audits",
            "WordPress / Squarespace rescue",
            "Ongoing care & feature dev",
        ],
    },
];

pub struct Project {
    pub title: &'static str,
    pub image: &'static str,
    pub alt: &'static str,
    pub summary: &'static str,
}

pub const PROJECTS: &[Project] = &[
    Project {
        title: "Toolbox for Beyond Procurement",
        image: "/assets/toolbox.png",
        alt: "Toolbox for Beyond Procurement",
        summary: "A comprehensive toolbox to streamline procurement processes for local businesses.",
    },
    Project {
        title: "Carbon Calculator for Beyond Procurement",
        image: "/assets/carbon.png",
        alt: "Carbon Calculator",
        summary: "React rebuild that boosted mobile UX and synced results to the client CRM in real-time.",
    },
    Project {
        title: "Portfolio Platform",
        image: "/assets/portfolio2.png",
        alt: "Portfolio Platform",
        summary: "A blazing-fast Next.js landing page showcasing creative layouts and selected personal projects.",
    },
];

/// Long-form copy shown in the modal under the title.
pub struct Detail {
    pub image: Option<&'static str>,
    pub body: &'static str,
}

const DETAILS: &[(&str, Detail)] = &[(
    "Toolbox for Beyond Procurement",
    Detail {
        image: Some("/assets/toolbox.png"),
        body: "Toolbox is a bespoke web platform created in C# .NET that lets clients upload their bills to easily identify opportunities for both cost savings and carbon reduction.",
    },
)];

/// Titles without an entry open a title-only modal.
pub fn detail_for(title: &str) -> Option<&'static Detail> {
    DETAILS
        .iter()
        .find(|(key, _)| *key == title)
        .map(|(_, detail)| detail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toolbox_has_image_and_body() {
        let detail = detail_for("Toolbox for Beyond Procurement").expect("detail");
        assert_eq!(detail.image, Some("/assets/toolbox.png"));
        assert!(detail.body.contains("C# .NET"));
    }

    #[test]
    fn other_cards_open_title_only() {
        assert!(detail_for("Portfolio Platform").is_none());
        assert!(detail_for("Build & Launch").is_none());
        assert!(detail_for("").is_none());
    }

    #[test]
    fn every_project_has_an_image() {
        assert_eq!(PROJECTS.len(), 3);
        assert!(PROJECTS.iter().all(|p| p.image.starts_with("/assets/")));
    }
}
