use serde::Deserialize;

use crate::product::ProductType;

/// Main configuration structure for Bookrags-Index
#[derive(Debug, Clone, Deserialize)]
pub struct SiteConfig {
    #[serde(default)]
    pub site: SiteSection,
    #[serde(default)]
    pub endpoints: EndpointConfig,
    #[serde(default)]
    pub http: HttpConfig,
    #[serde(default = "default_classify")]
    pub classify: Vec<ClassifyRule>,
}

/// Where the site lives and how the session presents itself
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct SiteSection {
    /// Landing page; also the scope of the layout cookie
    #[serde(rename = "base-url")]
    pub base_url: String,

    /// Host pattern for links that belong to the site (e.g. "*.bookrags.com")
    pub domain: String,

    /// Value of the `layout` cookie
    pub layout: String,
}

impl Default for SiteSection {
    fn default() -> Self {
        Self {
            base_url: "https://www.bookrags.com/".to_string(),
            domain: "*.bookrags.com".to_string(),
            layout: "desktop".to_string(),
        }
    }
}

/// Account endpoint paths, joined onto the base URL
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct EndpointConfig {
    /// Primes the session cookies before login
    pub session: String,

    /// Receives the login form
    pub login: String,

    /// Only reachable while logged in
    pub account: String,

    pub logout: String,
}

impl Default for EndpointConfig {
    fn default() -> Self {
        Self {
            session: "/session/".to_string(),
            login: "/login/".to_string(),
            account: "/account/".to_string(),
            logout: "/logout/".to_string(),
        }
    }
}

/// HTTP client settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    #[serde(rename = "user-agent")]
    pub user_agent: String,

    /// Whole-request timeout in seconds
    #[serde(rename = "timeout-secs")]
    pub timeout_secs: u64,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            user_agent: format!("bookrags-index/{}", env!("CARGO_PKG_VERSION")),
            timeout_secs: 30,
        }
    }
}

/// Maps a URL path prefix to the product type it denotes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ClassifyRule {
    pub prefix: String,

    #[serde(rename = "product-type")]
    pub product_type: ProductType,
}

impl ClassifyRule {
    pub fn new(prefix: &str, product_type: ProductType) -> Self {
        Self {
            prefix: prefix.to_string(),
            product_type,
        }
    }
}

/// Classification rules for the live site, checked in order
fn default_classify() -> Vec<ClassifyRule> {
    vec![
        ClassifyRule::new("/lessonplan/", ProductType::LessonPlan),
        ClassifyRule::new("/studyguide-", ProductType::StudyGuide),
        ClassifyRule::new("/lens/", ProductType::Lens),
        ClassifyRule::new("/research/", ProductType::Encyclopedia),
        ClassifyRule::new("/ebooks/", ProductType::Ebook),
        ClassifyRule::new("/biography-", ProductType::Biography),
        ClassifyRule::new("/essay-", ProductType::Essay),
    ]
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            site: SiteSection::default(),
            endpoints: EndpointConfig::default(),
            http: HttpConfig::default(),
            classify: default_classify(),
        }
    }
}

impl SiteConfig {
    /// Default configuration pointed at another base URL and host pattern
    ///
    /// Handy for staging mirrors and local mock servers.
    pub fn for_base_url(base_url: &str, domain: &str) -> Self {
        Self {
            site: SiteSection {
                base_url: base_url.to_string(),
                domain: domain.to_string(),
                ..SiteSection::default()
            },
            ..Self::default()
        }
    }
}
