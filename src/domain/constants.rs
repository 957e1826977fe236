//! Process-wide constant data: field placeholders, the skill vocabulary
//! and the user-agent pool.
//!
//! All of this is immutable configuration loaded once at startup, never
//! mutable global state.

/// Placeholder text substituted when a card is missing the title element.
pub const TITLE_NOT_FOUND: &str = "Title not found";

/// Placeholder text substituted when a card is missing the company element.
pub const COMPANY_NOT_SPECIFIED: &str = "Company not specified";

/// Placeholder text substituted when a card is missing the location element.
pub const LOCATION_NOT_SPECIFIED: &str = "Location not specified";

/// Placeholder text substituted when a card is missing the salary element.
pub const SALARY_NOT_SPECIFIED: &str = "Salary not specified";

/// Placeholder text substituted when a card is missing the posting date.
pub const DATE_NOT_SPECIFIED: &str = "Date not specified";

/// Placeholder text substituted when a card is missing the snippet element.
pub const SNIPPET_NOT_AVAILABLE: &str = "Snippet not available";

/// Fixed skill vocabulary, in reporting order.
///
/// Terms are lowercase and matched against snippets as whole words, so
/// "sql" never matches inside "nosql". Multi-word terms ("power bi")
/// match across their internal space.
pub const SKILL_VOCABULARY: &[&str] = &[
    "sql",
    "nosql",
    "python",
    "excel",
    "tableau",
    "power bi",
    "looker",
    "spark",
    "snowflake",
];

/// Pool of desktop browser user agents; one is chosen uniformly at random
/// per network request.
pub const USER_AGENTS: &[&str] = &[
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64; rv:121.0) Gecko/20100101 Firefox/121.0",
    "Mozilla/5.0 (Macintosh; Intel Mac OS X 10_15_7) AppleWebKit/605.1.15 (KHTML, like Gecko) Version/17.1 Safari/605.1.15",
    "Mozilla/5.0 (Windows NT 10.0; Win64; x64) AppleWebKit/537.36 (KHTML, like Gecko) Chrome/120.0.0.0 Safari/537.36 Edg/120.0.0.0",
];
