//! Static profile data: identity, contact channels and skills.

pub const OWNER_NAME: &str = "Brenno Oliveira";

pub const HERO_PORTRAIT: &str = "/brenno-profcie.jpeg";
pub const ABOUT_PORTRAIT: &str = "/profissional.jpeg";

pub const EMAIL: &str = "BrennoOliveira@outlook.com";
pub const PHONE_DISPLAY: &str = "(61) 99859-0309";
/// International form (country + area code + number) for click-to-chat links.
pub const PHONE_DIGITS: &str = "5561998590309";

pub const LINKEDIN_URL: &str = "https://www.linkedin.com/in/brenno-oliveira-5264b9265/";
pub const LINKEDIN_HANDLE: &str = "@brenno-oliveira";
pub const INSTAGRAM_URL: &str = "https://www.instagram.com/br_oliveira30/";
pub const INSTAGRAM_HANDLE: &str = "@br_oliveira30";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Skill {
    pub name: &'static str,
    pub percentage: u8,
}

const fn skill(name: &'static str, percentage: u8) -> Skill {
    Skill { name, percentage }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SkillCategory {
    Frontend,
    Backend,
    Database,
}

impl SkillCategory {
    pub const ALL: [SkillCategory; 3] = [
        SkillCategory::Frontend,
        SkillCategory::Backend,
        SkillCategory::Database,
    ];

    pub fn skills(self) -> &'static [Skill] {
        match self {
            SkillCategory::Frontend => FRONTEND_SKILLS,
            SkillCategory::Backend => BACKEND_SKILLS,
            SkillCategory::Database => DATABASE_SKILLS,
        }
    }

    /// Position of the first bar of this category in the page-wide stagger:
    /// the number of bars in the categories listed before it.
    pub fn stagger_offset(self) -> usize {
        Self::ALL
            .iter()
            .take_while(|&&category| category != self)
            .map(|category| category.skills().len())
            .sum()
    }

    pub fn css_modifier(self) -> &'static str {
        match self {
            SkillCategory::Frontend => "skills__group--frontend",
            SkillCategory::Backend => "skills__group--backend",
            SkillCategory::Database => "skills__group--database",
        }
    }
}

const FRONTEND_SKILLS: &[Skill] = &[
    skill("JavaScript", 75),
    skill("TypeScript", 70),
    skill("React", 60),
    skill("Next.js", 50),
];

const BACKEND_SKILLS: &[Skill] = &[
    skill("Node.js", 50),
    skill("Python", 70),
    skill("Django", 70),
    skill("Jest/Testing", 85),
    skill("Git", 90),
];

const DATABASE_SKILLS: &[Skill] = &[skill("PostgreSQL", 70), skill("Supabase", 65)];
