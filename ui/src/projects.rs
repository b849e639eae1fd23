//! The fixed, ordered project list shown in the carousel.
//!
//! Links, images and tech tags are locale-independent and live here; titles,
//! descriptions and status labels come from the active [`Strings`] table.

use crate::i18n::Strings;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProjectMeta {
    pub id: u32,
    pub slug: &'static str,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
}

pub const PROJECTS: [ProjectMeta; 3] = [
    ProjectMeta {
        id: 1,
        slug: "carvalho",
        tech: &["TypeScript", "CSS", "JavaScript", "Supabase"],
        image: "/projetos/carvalho.png",
        link: "https://carvalho-moveis.vercel.app/",
    },
    ProjectMeta {
        id: 2,
        slug: "waterguardian",
        tech: &["TypeScript", "JavaScript", "Python", "CSS", "Supabase"],
        image: "/projetos/waterguardian.png",
        link: "https://waterguardian.vercel.app/",
    },
    ProjectMeta {
        id: 3,
        slug: "devduo",
        tech: &["React", "TypeScript", "Node.js", "Supabase"],
        image: "/projetos/devduo.jpeg",
        link: "https://devduom.vercel.app/",
    },
];

/// A project entry as displayed: static metadata plus localized copy.
#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    pub id: u32,
    pub title: String,
    pub description: String,
    pub tech: &'static [&'static str],
    pub image: &'static str,
    pub link: &'static str,
    pub status: String,
}

/// Resolve the display list for one locale, in carousel order.
pub fn catalog(strings: &Strings) -> Vec<Project> {
    PROJECTS
        .iter()
        .map(|meta| {
            let copy = strings
                .projects
                .entries
                .iter()
                .find(|entry| entry.slug == meta.slug);
            Project {
                id: meta.id,
                title: copy.map(|c| c.title.clone()).unwrap_or_else(|| meta.slug.to_string()),
                description: copy.map(|c| c.description.clone()).unwrap_or_default(),
                tech: meta.tech,
                image: meta.image,
                link: meta.link,
                status: copy.map(|c| c.status.clone()).unwrap_or_default(),
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::Locale;

    #[test]
    fn catalog_keeps_display_order() {
        let ids: Vec<u32> = catalog(Locale::Pt.strings()).iter().map(|p| p.id).collect();
        assert_eq!(ids, vec![1, 2, 3]);
    }

    #[test]
    fn every_project_has_localized_copy() {
        for locale in Locale::ALL {
            let strings = locale.strings();
            for meta in PROJECTS {
                assert!(
                    strings.projects.entries.iter().any(|e| e.slug == meta.slug),
                    "{locale}: no copy for project {}",
                    meta.slug
                );
            }
        }
    }

    #[test]
    fn localized_fields_follow_locale_and_static_fields_do_not() {
        let pt = catalog(Locale::Pt.strings());
        let en = catalog(Locale::En.strings());

        assert_eq!(pt[0].status, "Em Produção");
        assert_eq!(en[0].status, "In Production");
        assert_eq!(en[1].title, "WaterGuardian - IoT Water Consumption Monitor");
        for (p, e) in pt.iter().zip(&en) {
            assert_eq!(p.link, e.link);
            assert_eq!(p.image, e.image);
            assert_eq!(p.tech, e.tech);
        }
    }

    #[test]
    fn links_are_absolute_https() {
        for meta in PROJECTS {
            assert!(meta.link.starts_with("https://"), "{}", meta.link);
            assert!(meta.image.starts_with('/'), "{}", meta.image);
            assert!(!meta.tech.is_empty());
        }
    }
}
