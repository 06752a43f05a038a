//! The site's section content.

/// Static content of one section.
#[derive(Debug)]
pub struct SectionContent {
    pub id: &'static str,
    /// Label used in the side nav and menu.
    pub label: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    /// Lines shown inside the content card once it is revealed.
    pub body: &'static [&'static str],
}

pub static SITE: &[SectionContent] = &[
    SectionContent {
        id: "landing-id",
        label: "Home",
        title: "Hi, I build things for the terminal.",
        tagline: "Systems programmer · tinkerer · occasional writer",
        body: &[
            "Scroll, drag, or use the arrow keys to look around.",
            "",
            "Everything here is rendered in your terminal.",
        ],
    },
    SectionContent {
        id: "about-id",
        label: "About",
        title: "About",
        tagline: "A little background",
        body: &[
            "I've spent most of my career on developer tooling:",
            "compilers, build systems and the glue in between.",
            "",
            "These days I mostly write Rust, and I care a lot about",
            "small, sharp tools that stay out of your way.",
        ],
    },
    SectionContent {
        id: "skills-id",
        label: "Skills",
        title: "Skills",
        tagline: "Things I reach for",
        body: &[
            "Languages   Rust · TypeScript · C · Python",
            "Systems     async runtimes · parsers · storage engines",
            "Tooling     CI pipelines · profiling · observability",
            "Interfaces  terminal UIs · the web, when I must",
        ],
    },
    SectionContent {
        id: "contact-id",
        label: "Contact",
        title: "Contact",
        tagline: "Say hello",
        body: &[
            "email    hello@example.com",
            "github   github.com/example",
            "",
            "I read everything, and answer most of it.",
        ],
    },
];

/// Content for a section id.  `None` if the id has no content.
pub fn find(id: &str) -> Option<&'static SectionContent> {
    SITE.iter().find(|c| c.id == id)
}

/// Content for each of `ids`, in order, skipping ids with none.
pub fn resolve(ids: &[&str]) -> Vec<&'static SectionContent> {
    ids.iter()
        .filter_map(|id| {
            let found = find(id);
            if found.is_none() {
                tracing::warn!("section `{id}` has no content, skipping");
            }
            found
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::section::SITE_SECTION_IDS;

    #[test]
    fn every_site_section_has_content() {
        for id in SITE_SECTION_IDS {
            assert!(find(id).is_some(), "{id}");
        }
        assert!(find("blog-id").is_none());
    }

    #[test]
    fn resolve_keeps_order_and_skips_missing() {
        let ids: Vec<_> = resolve(&["contact-id", "blog-id", "about-id"])
            .iter()
            .map(|c| c.id)
            .collect();
        assert_eq!(ids, vec!["contact-id", "about-id"]);
    }
}
