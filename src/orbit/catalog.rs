use yew::prelude::*;

/// One of the three concentric rings of the display. Membership is fixed for
/// the lifetime of a widget instance.
#[derive(Clone, Copy, PartialEq, Eq, Debug)]
pub enum OrbitRing {
    Inner,
    Middle,
    Outer,
}

impl OrbitRing {
    pub const ALL: [OrbitRing; 3] = [OrbitRing::Inner, OrbitRing::Middle, OrbitRing::Outer];

    /// Pixel distance from the container center.
    pub fn radius(self) -> f64 {
        match self {
            OrbitRing::Inner => 110.0,
            OrbitRing::Middle => 175.0,
            OrbitRing::Outer => 240.0,
        }
    }

    /// Seconds per full revolution. Outer rings turn slower.
    pub fn period_secs(self) -> f64 {
        match self {
            OrbitRing::Inner => 30.0,
            OrbitRing::Middle => 40.0,
            OrbitRing::Outer => 50.0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            OrbitRing::Inner => 0,
            OrbitRing::Middle => 1,
            OrbitRing::Outer => 2,
        }
    }
}

#[derive(Clone, PartialEq, Debug)]
pub struct TechStats {
    pub projects: u32,
    pub years: u32,
}

/// A catalog entry for one technology we build with. The `icon` is an opaque
/// piece of markup the widget forwards into the DOM and never inspects.
#[derive(Clone, PartialEq)]
pub struct Technology {
    pub name: String,
    pub icon: Html,
    pub color: String,
    pub description: String,
    pub reasons: Vec<String>,
    pub stats: TechStats,
    pub link: Option<String>,
    pub ring: OrbitRing,
}

fn glyph(label: &str, color: &str) -> Html {
    html! {
        <span class="tech-glyph" style={format!("color: {};", color)}>{label}</span>
    }
}

#[allow(clippy::too_many_arguments)]
fn tech(
    name: &str,
    label: &str,
    color: &str,
    ring: OrbitRing,
    description: &str,
    reasons: [&str; 3],
    projects: u32,
    years: u32,
    link: &str,
) -> Technology {
    Technology {
        name: name.to_string(),
        icon: glyph(label, color),
        color: color.to_string(),
        description: description.to_string(),
        reasons: reasons.iter().map(|r| r.to_string()).collect(),
        stats: TechStats { projects, years },
        link: Some(link.to_string()),
        ring,
    }
}

/// The stack we actually ship with, shown when the caller doesn't supply one.
pub fn default_technologies() -> Vec<Technology> {
    vec![
        tech(
            "React",
            "Re",
            "#61DAFB",
            OrbitRing::Inner,
            "Component-based UI library that lets us assemble complex interfaces \
             from small, reusable pieces.",
            [
                "Largest ecosystem in the industry",
                "Virtual DOM keeps interactions fast",
                "Components carry over between projects",
            ],
            45,
            5,
            "https://react.dev",
        ),
        tech(
            "Next.js",
            "N",
            "#000000",
            OrbitRing::Inner,
            "Full-stack React framework with server rendering, static generation \
             and API routes in one toolchain.",
            [
                "Server rendering keeps SEO strong",
                "Built-in image and asset optimization",
                "Zero-friction deployments",
            ],
            35,
            4,
            "https://nextjs.org",
        ),
        tech(
            "TypeScript",
            "TS",
            "#3178C6",
            OrbitRing::Inner,
            "JavaScript with static types, catching mistakes before they reach \
             production.",
            [
                "Type safety cuts runtime errors",
                "Autocomplete that actually helps",
                "Refactoring without fear",
            ],
            50,
            5,
            "https://www.typescriptlang.org",
        ),
        tech(
            "Node.js",
            "No",
            "#339933",
            OrbitRing::Middle,
            "Server-side JavaScript runtime for building APIs and services \
             quickly.",
            [
                "One language across the stack",
                "Huge package ecosystem",
                "Non-blocking I/O under load",
            ],
            40,
            5,
            "https://nodejs.org",
        ),
        tech(
            "Tailwind CSS",
            "Tw",
            "#06B6D4",
            OrbitRing::Middle,
            "Utility-first CSS framework that keeps styling fast and consistent \
             across a whole project.",
            [
                "UI work ships several times faster",
                "Tiny bundles after purging",
                "Responsive design comes for free",
            ],
            40,
            3,
            "https://tailwindcss.com",
        ),
        tech(
            "Prisma",
            "Pr",
            "#2D3748",
            OrbitRing::Middle,
            "Modern ORM with end-to-end type safety and a pleasant developer \
             experience.",
            [
                "Types generated from the schema",
                "Safe, reviewable migrations",
                "Readable query builder",
            ],
            25,
            3,
            "https://www.prisma.io",
        ),
        tech(
            "PostgreSQL",
            "Pg",
            "#4169E1",
            OrbitRing::Outer,
            "Battle-tested relational database with JSON, full-text search and \
             serious extension support.",
            [
                "ACID guarantees protect the data",
                "Excellent performance with indexing",
                "Scales with the project",
            ],
            30,
            5,
            "https://www.postgresql.org",
        ),
        tech(
            "MongoDB",
            "M",
            "#47A248",
            OrbitRing::Outer,
            "Flexible document database, a good fit for unstructured data and \
             fast prototyping.",
            [
                "Schema flexibility for quick MVPs",
                "Straightforward horizontal scaling",
                "Documents map naturally to code",
            ],
            20,
            4,
            "https://www.mongodb.com",
        ),
        tech(
            "Docker",
            "Dk",
            "#2496ED",
            OrbitRing::Outer,
            "Containers that make an application run the same way on every \
             machine it touches.",
            [
                "Identical dev and prod environments",
                "Deploys and scales without surprises",
                "Clean isolation between services",
            ],
            35,
            4,
            "https://www.docker.com",
        ),
        tech(
            "AWS",
            "A",
            "#FF9900",
            OrbitRing::Outer,
            "Cloud platform covering everything from compute and storage to \
             managed AI services.",
            [
                "A service for every workload",
                "Scales from zero to millions of users",
                "Strong security and compliance story",
            ],
            25,
            4,
            "https://aws.amazon.com",
        ),
    ]
}
