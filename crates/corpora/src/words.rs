//! Bundled word lists.
//!
//! Each list holds at least 50 unique lower-case words of 1 to 50 characters.

/// Latin-like lorem ipsum vocabulary.
pub const CLASSIC: &[&str] = &[
    "lorem", "ipsum", "dolor", "sit", "amet", "consectetur", "adipiscing", "elit", "sed", "do",
    "eiusmod", "tempor", "incididunt", "ut", "labore", "et", "dolore", "magna", "aliqua",
    "enim", "ad", "minim", "veniam", "quis", "nostrud", "exercitation", "ullamco", "laboris",
    "nisi", "aliquip", "ex", "ea", "commodo", "consequat", "duis", "aute", "irure", "in",
    "reprehenderit", "voluptate", "velit", "esse", "cillum", "fugiat", "nulla", "pariatur",
    "excepteur", "sint", "occaecat", "cupidatat", "non", "proident", "sunt", "culpa", "qui",
    "officia", "deserunt", "mollit", "anim", "id", "est", "laborum", "curabitur", "pretium",
    "lacus", "nunc", "viverra", "imperdiet",
];

/// Programming and infrastructure terms.
pub const TECH: &[&str] = &[
    "function", "api", "async", "await", "variable", "constant", "array", "object", "string",
    "integer", "boolean", "promise", "callback", "closure", "module", "package", "compiler",
    "runtime", "server", "client", "database", "query", "index", "cache", "thread", "process",
    "kernel", "memory", "pointer", "buffer", "stream", "socket", "protocol", "request",
    "response", "endpoint", "middleware", "router", "handler", "schema", "migration", "deploy",
    "container", "cluster", "pipeline", "commit", "branch", "merge", "refactor", "debug",
    "lambda", "iterator", "generator", "interface", "struct", "trait", "enum", "macro",
];

/// Startup and business buzzwords.
pub const STARTUP: &[&str] = &[
    "synergy", "disrupt", "leverage", "pivot", "scale", "growth", "hacking", "unicorn",
    "runway", "traction", "ecosystem", "paradigm", "innovate", "agile", "lean", "mvp",
    "stakeholder", "bandwidth", "alignment", "roadmap", "vertical", "monetize", "platform",
    "engagement", "funnel", "conversion", "retention", "churn", "valuation", "seed", "series",
    "venture", "founder", "vision", "mission", "culture", "empower", "optimize", "streamline",
    "holistic", "scalable", "actionable", "deliverable", "metrics", "kpi", "onboarding",
    "blockchain", "marketplace", "freemium", "bootstrap", "accelerator", "incubator", "iterate",
    "ideate", "moonshot", "exit", "acquisition",
];

/// Short, common English words.
pub const CONCISE: &[&str] = &[
    "the", "is", "and", "a", "an", "of", "to", "in", "it", "on", "at", "by", "for", "with",
    "as", "be", "are", "was", "or", "but", "not", "this", "that", "from", "have", "has", "had",
    "we", "you", "they", "he", "she", "i", "my", "your", "our", "all", "can", "will", "do",
    "so", "if", "no", "up", "out", "go", "get", "one", "new", "now",
];

/// Rockets, electric cars, and other frontier-tech vocabulary.
pub const MUSK: &[&str] = &[
    "mars", "rocket", "tesla", "spacex", "starship", "falcon", "dragon", "neuralink", "boring",
    "tunnel", "hyperloop", "electric", "battery", "autopilot", "gigafactory", "solar", "orbit",
    "launch", "booster", "landing", "reusable", "multiplanetary", "civilization", "colony",
    "engine", "raptor", "merlin", "thrust", "payload", "satellite", "starlink", "internet",
    "meme", "doge", "first", "principles", "physics", "engineering", "production", "ramp",
    "cybertruck", "roadster", "model", "plaid", "ludicrous", "mode", "humanity", "future",
    "consciousness", "sustainable", "energy", "vehicle", "factory", "robot", "optimus",
];
