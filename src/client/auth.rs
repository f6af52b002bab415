//! The logged-in site client
//!
//! `BookRags` owns the session. Logging in is a fixed sequence: prime the
//! session cookies, then post the login form once. Success is not verified;
//! use [`BookRags::is_logged_in`] for that.

use crate::client::{Credentials, Session};
use crate::config::SiteConfig;
use crate::lens::{extract_upsell_link, Lens};
use crate::product::{PathResolver, Product, ProductType, TypeResolver};
use crate::{BookRagsError, Result};

/// Client for one logged-in account
#[derive(Debug)]
pub struct BookRags<R = PathResolver> {
    session: Session,
    config: SiteConfig,
    credentials: Credentials,
    resolver: R,
}

impl BookRags<PathResolver> {
    /// Logs in, classifying links with the configured path rules
    ///
    /// # Example
    ///
    /// ```no_run
    /// use bookrags_index::{BookRags, Credentials, SiteConfig};
    ///
    /// # async fn example() -> bookrags_index::Result<()> {
    /// let credentials = Credentials::new("alice@example.com", "hunter2");
    /// let client = BookRags::login(SiteConfig::default(), credentials).await?;
    /// if let Some(lens) = client
    ///     .resolve_study_plan("https://www.bookrags.com/studyguide-hamlet/")
    ///     .await?
    /// {
    ///     for product in lens.study_pack() {
    ///         println!("{} {}", product.product_type(), product.link());
    ///     }
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub async fn login(config: SiteConfig, credentials: Credentials) -> Result<Self> {
        let resolver = PathResolver::from_config(&config);
        Self::with_resolver(config, credentials, resolver).await
    }
}

impl<R: TypeResolver> BookRags<R> {
    /// Logs in, classifying links with `resolver`
    pub async fn with_resolver(
        config: SiteConfig,
        credentials: Credentials,
        resolver: R,
    ) -> Result<Self> {
        let session = Session::new(&config)?;
        let client = Self {
            session,
            config,
            credentials,
            resolver,
        };

        client.prime_session().await?;
        client.submit_login().await?;

        Ok(client)
    }

    /// Visits the landing page and session endpoint to collect cookies
    async fn prime_session(&self) -> Result<()> {
        let landing = self.session.base_url().to_string();
        self.session.get_text(&landing).await?;

        let session_url = self.session.url_for(&self.config.endpoints.session)?;
        self.session.get_text(session_url.as_str()).await?;

        Ok(())
    }

    async fn submit_login(&self) -> Result<()> {
        let login_url = self.session.url_for(&self.config.endpoints.login)?;
        self.session
            .post_form(login_url.as_str(), &self.credentials.form())
            .await?;

        tracing::info!("Submitted login for {}", self.credentials.username());
        Ok(())
    }

    /// Checks whether the session is logged in
    ///
    /// The account page is fetched without following redirects. Logged-out
    /// sessions get an empty redirect response, so any body at all counts
    /// as logged in.
    pub async fn is_logged_in(&self) -> Result<bool> {
        let account_url = self.session.url_for(&self.config.endpoints.account)?;
        let body = self.session.probe_text(account_url.as_str()).await?;
        Ok(!body.is_empty())
    }

    /// Ends the server-side login; the local session stays usable
    pub async fn logout(&self) -> Result<()> {
        let logout_url = self.session.url_for(&self.config.endpoints.logout)?;
        self.session.get_text(logout_url.as_str()).await?;

        tracing::info!("Logged out {}", self.credentials.username());
        Ok(())
    }

    /// Resolves `link` into a product
    ///
    /// Returns `None` for unknown links, lesson plans and lenses.
    pub fn resolve_product(&self, link: &str) -> Option<Product<'_>> {
        let product_type = self.resolver.resolve_type(link);

        if !product_type.is_generic_product() {
            tracing::debug!("{} is not a product ({})", link, product_type);
            return None;
        }

        Some(Product::new(&self.session, link, product_type))
    }

    /// Resolves `link` into the lens of its study plan
    ///
    /// A lens link is used as-is. Any other known link is fetched and the
    /// lens link is read from the page's upsell box.
    ///
    /// # Errors
    ///
    /// `BookRagsError::Markup` if the page has no upsell link.
    pub async fn resolve_study_plan(&self, link: &str) -> Result<Option<Lens<'_>>> {
        let product_type = self.resolver.resolve_type(link);

        if !product_type.is_study_plan_source() {
            tracing::debug!("{} does not lead to a study plan", link);
            return Ok(None);
        }

        if product_type == ProductType::Lens {
            return Lens::fetch(&self.session, link).await.map(Some);
        }

        let page = self.session.get_text(link).await?;
        let lens_link = extract_upsell_link(&page).ok_or_else(|| BookRagsError::Markup {
            url: link.to_string(),
            what: "missing study plan link in contentSPUpsellBlock",
        })?;

        tracing::debug!("{} leads to study plan {}", link, lens_link);
        Lens::fetch(&self.session, lens_link).await.map(Some)
    }

    /// Site search is not supported; always returns no results
    pub fn search(&self, query: &str) -> Vec<Product<'_>> {
        tracing::debug!("Search is not supported, ignoring query {:?}", query);
        Vec::new()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn config(&self) -> &SiteConfig {
        &self.config
    }

    pub fn username(&self) -> &str {
        self.credentials.username()
    }
}
