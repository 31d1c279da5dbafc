//! Project records shown on the cards and detail pages.
//!
//! Read-only fixtures; nothing here is constructed at runtime.

use crate::iso::{grova_wireframe, project_stack, tradeos_wireframe, zero_wireframe, Illustration, Rgb};

/// Suffix selecting a project's detail-page drawing, as in `"grova-wireframe"`.
pub const WIREFRAME_SUFFIX: &str = "-wireframe";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ArchLayer {
    pub name: &'static str,
    pub detail: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Architecture {
    pub overview: &'static str,
    pub layers: &'static [ArchLayer],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Problem {
    pub title: &'static str,
    pub description: &'static str,
    pub points: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct StackGroup {
    pub category: &'static str,
    pub items: &'static [&'static str],
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Link {
    pub label: &'static str,
    pub url: &'static str,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Project {
    pub slug: &'static str,
    pub id: &'static str,
    pub title: &'static str,
    pub tagline: &'static str,
    pub thesis: &'static str,
    /// `#rrggbb`
    pub color: &'static str,
    pub tech: &'static [&'static str],
    pub architecture: Architecture,
    pub problem: Problem,
    pub stack: &'static [StackGroup],
    pub links: &'static [Link],
}

impl Project {
    /// Accent colour; malformed fixtures fall back to copper.
    pub fn accent(&self) -> Rgb {
        Rgb::from_hex(self.color).unwrap_or(Rgb::COPPER)
    }
}

pub fn find(slug: &str) -> Option<&'static Project> {
    PROJECTS.iter().find(|p| p.slug == slug)
}

/// Detail-page wireframe for `slug`, if that project has one.
pub fn wireframe(slug: &str, accent: Rgb) -> Option<Illustration> {
    match slug {
        "tradeos" => Some(tradeos_wireframe(accent)),
        "grova" => Some(grova_wireframe(accent)),
        "zero" => Some(zero_wireframe(accent)),
        _ => None,
    }
}

/// Resolve an illustration key: `"{slug}-wireframe"` for a detail drawing or
/// a bare slug for the card stack. Unknown slugs get the default stack in
/// copper.
pub fn illustration(kind: &str) -> Illustration {
    let accent_of = |slug: &str| find(slug).map(Project::accent).unwrap_or(Rgb::COPPER);
    if let Some(slug) = kind.strip_suffix(WIREFRAME_SUFFIX) {
        if let Some(art) = wireframe(slug, accent_of(slug)) {
            return art;
        }
        log::warn!("no wireframe for {slug:?}, drawing its stack");
        return project_stack(slug, accent_of(slug));
    }
    project_stack(kind, accent_of(kind))
}

pub static PROJECTS: [Project; 3] = [
    Project {
        slug: "tradeos",
        id: "SYS.01",
        title: "TradeOS",
        tagline: "Process Over Outcome",
        thesis: "An institutional-grade behavioral verification engine. TradeOS functions as an external prefrontal cortex — converting trading from a reactive environment into a deliberate, process-focused practice.",
        color: "#ff6a00",
        tech: &["React 19", "FastAPI", "Schwab OAuth", "Framer Motion"],
        architecture: Architecture {
            overview: "Schwab OAuth pipeline feeds real transactions through a local FastAPI backend into a React frontend with a FIFO trade-pairing engine, process analytics, and localStorage persistence.",
            layers: &[
                ArchLayer {
                    name: "Broker Integration",
                    detail: "OAuth 2.0 Authorization Code flow with Schwab Individual Trader API. Token storage server-side, never browser.",
                },
                ArchLayer {
                    name: "Trade Pairing Engine",
                    detail: "FIFO matching of opening/closing transactions to compute realized P/L per round-trip. Event classification separates TRADE vs EXPIRATION.",
                },
                ArchLayer {
                    name: "Process Analytics",
                    detail: "Time-of-day analysis, holding duration, trade spacing, risk alignment. Observational, not prescriptive.",
                },
                ArchLayer {
                    name: "Journal Layer",
                    detail: "Structured per-trade journaling: emotion tags, confidence scoring, rule adherence, pre-trade intent capture with invalidation criteria.",
                },
            ],
        },
        problem: Problem {
            title: "The Behavioral Gap",
            description: "Retail traders lose not because of bad strategies, but because of undisciplined execution. There is no system that measures decision quality independently of financial outcome.",
            points: &[
                "A correct trade that loses money is valued over a sloppy trade that profits",
                "Friction as feature: the Planned Trade screen requires invalidation criteria before saving",
                "Mirror, not coach — it records, it does not advise",
                "Zero gamification: no badges, no streaks, no notifications urging trading",
            ],
        },
        stack: &[
            StackGroup {
                category: "Frontend",
                items: &["React 19", "Vite", "Tailwind CSS 4", "Framer Motion 12"],
            },
            StackGroup {
                category: "Backend",
                items: &["Python 3.11", "FastAPI", "Uvicorn", "httpx"],
            },
            StackGroup {
                category: "Data",
                items: &["localStorage", "Schwab API", "FIFO Engine"],
            },
            StackGroup {
                category: "Design",
                items: &["Premium Dark Glass", "Glassmorphism", "Muted Palette"],
            },
        ],
        links: &[
            Link {
                label: "GitHub",
                url: "https://github.com/0x0nice/tos-trade-journal",
            },
        ],
    },
    Project {
        slug: "grova",
        id: "SYS.02",
        title: "Grova",
        tagline: "Signal Through the Noise",
        thesis: "AI-powered feedback triage. Grova separates meaningful signal from noise using Claude Haiku to autonomously score, categorize, and surface the feedback that deserves immediate attention.",
        color: "#00c87a",
        tech: &["Node.js", "Express", "Claude Haiku", "Supabase"],
        architecture: Architecture {
            overview: "Embeddable widget collects feedback → Express API processes and stores → Claude Haiku scores on weighted dimensions → Dashboard surfaces prioritized inbox with Smart Actions.",
            layers: &[
                ArchLayer {
                    name: "Ingestion Layer",
                    detail: "Public widget endpoint with rate limiting, screenshot validation, and monthly plan enforcement. Fire-and-forget async triage.",
                },
                ArchLayer {
                    name: "Triage Engine",
                    detail: "Persona-aware prompt construction. Developer mode scores on actionability, severity, specificity. Business mode adds revenue proximity and public visibility risk.",
                },
                ArchLayer {
                    name: "Smart Actions",
                    detail: "AI-suggested responses: recovery emails, thank-you + review redirects, internal flags, escalation alerts, scheduled follow-ups.",
                },
                ArchLayer {
                    name: "Billing & Orgs",
                    detail: "Stripe subscriptions with checkout sessions, customer portal. Multi-user organizations with owner/admin/member roles.",
                },
            ],
        },
        problem: Problem {
            title: "The Feedback Flood",
            description: "Product teams and small businesses drown in unstructured feedback. No existing tool separates actionable signal from noise at the point of ingestion.",
            points: &[
                "Dual-persona architecture: developer mode vs business mode with different scoring dimensions",
                "1.0–10.0 weighted scoring with anchors from 'Noise/Spam' to 'Drop Everything'",
                "AI as triage assistant, not decision maker — humans approve, deny, and send",
                "Graceful degradation: missing columns retried, missing API keys skip rather than crash",
            ],
        },
        stack: &[
            StackGroup {
                category: "Backend",
                items: &["Node.js 20", "Express 4", "Pino Logging"],
            },
            StackGroup {
                category: "AI",
                items: &["Claude Haiku 4.5", "Anthropic SDK", "Prompt Engineering"],
            },
            StackGroup {
                category: "Database",
                items: &["Supabase", "PostgreSQL", "Row Level Security"],
            },
            StackGroup {
                category: "Infra",
                items: &["Railway", "Docker", "Stripe", "Resend", "PostHog"],
            },
        ],
        links: &[
            Link {
                label: "Platform",
                url: "https://grova.dev",
            },
            Link {
                label: "Documentation",
                url: "https://docs.grova.dev",
            },
        ],
    },
    Project {
        slug: "zero",
        id: "SYS.03",
        title: "ZERO",
        tagline: "Tactical Cleaning Operations",
        thesis: "Household operations, gamified but disciplined. ZERO reframes cleaning as a tactical operation with on-device computer vision measuring real-time spatial chaos reduction.",
        color: "#00F5D4",
        tech: &["Alpine.js", "TensorFlow.js", "OpenCV.js", "Web Audio"],
        architecture: Architecture {
            overview: "Single-file PWA architecture. Alpine.js reactive state drives mission planning → timer execution → optional ZERO Engine vision analysis. All data persists in IndexedDB and localStorage.",
            layers: &[
                ArchLayer {
                    name: "Mission Planner",
                    detail: "Select duration (5–60 min) and room sectors. System generates time-boxed task plan eliminating decision fatigue.",
                },
                ArchLayer {
                    name: "ZERO Engine v3.3",
                    detail: "OpenCV Canny edge detection measures visual complexity. Floor region color variance computes clutter index. 60/40 weighted chaos score.",
                },
                ArchLayer {
                    name: "Vision Alignment",
                    detail: "ORB feature matching verifies before/after photos are taken from same angle. TensorFlow COCO-SSD counts objects via camera feed.",
                },
                ArchLayer {
                    name: "Progression System",
                    detail: "XP and rank from 'Dust Cadet' (Lv.1) through 'Domestic Operator' (Lv.30) to 'Zero Elite' (Lv.50). Co-op mode for shared accountability.",
                },
            ],
        },
        problem: Problem {
            title: "The Domestic Paralysis",
            description: "Cleaning is the most universally procrastinated task. The problem is never knowledge — it's activation energy and decision fatigue about where to start.",
            points: &[
                "Zero decision fatigue: the system decides what to clean and for how long",
                "Zero cloud, zero tracking: all data lives 100% on-device",
                "Visual accountability: before/after photos with algorithmic chaos scoring",
                "Six visual themes from retro-terminal to minimalist to Bauhaus",
            ],
        },
        stack: &[
            StackGroup {
                category: "Frontend",
                items: &["Alpine.js", "Tailwind CSS", "Web Audio API"],
            },
            StackGroup {
                category: "Vision",
                items: &["TensorFlow.js", "COCO-SSD", "OpenCV.js", "ORB Descriptors"],
            },
            StackGroup {
                category: "Storage",
                items: &["IndexedDB", "localStorage", "Zero Cloud"],
            },
            StackGroup {
                category: "Deploy",
                items: &["Netlify", "PWA", "Single-File Architecture"],
            },
        ],
        links: &[
            Link {
                label: "GitHub",
                url: "https://github.com/0x0nice/projectZero",
            },
        ],
    },
];
