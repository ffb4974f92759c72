//! Link creation, retrieval and deletion service.

use std::sync::Arc;

use crate::domain::entities::{Link, NewLink};
use crate::domain::repositories::LinkRepository;
use crate::error::AppError;
use crate::utils::code_generator::{DEFAULT_CODE_LENGTH, generate_code, validate_code};
use tracing::{debug, info, warn};

/// Default number of generated candidates tried before giving up.
pub const DEFAULT_GENERATION_ATTEMPTS: usize = 5;

/// Service for creating and managing shortened links.
///
/// Owns code selection: custom codes are validated and checked once, generated
/// codes are retried on collision. The repository's unique constraint remains
/// the final arbiter; the existence check only avoids a doomed insert.
pub struct LinkService {
    link_repository: Arc<dyn LinkRepository>,
    code_length: usize,
    max_attempts: usize,
}

impl LinkService {
    /// Creates a new link service with default code length and retry budget.
    pub fn new(link_repository: Arc<dyn LinkRepository>) -> Self {
        Self {
            link_repository,
            code_length: DEFAULT_CODE_LENGTH,
            max_attempts: DEFAULT_GENERATION_ATTEMPTS,
        }
    }

    /// Overrides the length of generated codes.
    pub fn with_code_length(mut self, code_length: usize) -> Self {
        self.code_length = code_length;
        self
    }

    /// Overrides the number of generated candidates tried per creation.
    pub fn with_max_attempts(mut self, max_attempts: usize) -> Self {
        self.max_attempts = max_attempts.max(1);
        self
    }

    /// Creates a short link.
    ///
    /// The URL is stored verbatim. `custom_code` is trimmed; a blank custom
    /// code is treated as absent.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] if the code is longer than 32 characters.
    ///
    /// Returns [`AppError::Conflict`] if the custom code already exists.
    ///
    /// Returns [`AppError::Internal`] on database errors or if every generated
    /// candidate collided.
    pub async fn create_link(
        &self,
        url: String,
        custom_code: Option<String>,
    ) -> Result<Link, AppError> {
        let custom_code = custom_code
            .map(|c| c.trim().to_string())
            .filter(|c| !c.is_empty());

        let link = match custom_code {
            Some(code) => self.create_with_custom_code(url, code).await?,
            None => self.create_with_generated_code(url).await?,
        };

        info!(code = %link.code, "Link created");
        Ok(link)
    }

    /// Retrieves a link by its code.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn get_link(&self, code: &str) -> Result<Link, AppError> {
        self.link_repository
            .find_by_code(code)
            .await?
            .ok_or_else(|| AppError::not_found("Not found"))
    }

    /// Lists all links, newest first.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn list_links(&self) -> Result<Vec<Link>, AppError> {
        self.link_repository.list().await
    }

    /// Permanently deletes a link.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::NotFound`] if no link matches the code.
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn delete_link(&self, code: &str) -> Result<(), AppError> {
        if !self.link_repository.delete(code).await? {
            return Err(AppError::not_found("Not found"));
        }

        info!(code = %code, "Link deleted");
        Ok(())
    }

    /// Returns `(total links, total clicks)`.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] on database errors.
    pub async fn totals(&self) -> Result<(i64, i64), AppError> {
        self.link_repository.totals().await
    }

    /// Checks that the backing store answers queries.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] if the store is unreachable.
    pub async fn ping(&self) -> Result<(), AppError> {
        self.link_repository.ping().await
    }

    async fn create_with_custom_code(&self, url: String, code: String) -> Result<Link, AppError> {
        validate_code(&code)?;

        if self.link_repository.find_by_code(&code).await?.is_some() {
            return Err(AppError::conflict("Code exists"));
        }

        self.link_repository.create(NewLink { code, url }).await
    }

    /// Generates candidates until one inserts cleanly.
    ///
    /// A collision is either seen by the existence check or reported by the
    /// insert itself when a concurrent request took the same code.
    async fn create_with_generated_code(&self, url: String) -> Result<Link, AppError> {
        for attempt in 1..=self.max_attempts {
            let code = generate_code(self.code_length);
            validate_code(&code)?;

            if self.link_repository.find_by_code(&code).await?.is_some() {
                debug!(code = %code, attempt, "Generated code already taken");
                continue;
            }

            match self
                .link_repository
                .create(NewLink {
                    code: code.clone(),
                    url: url.clone(),
                })
                .await
            {
                Ok(link) => return Ok(link),
                Err(AppError::Conflict { .. }) => {
                    warn!(code = %code, attempt, "Generated code collided on insert");
                }
                Err(e) => return Err(e),
            }
        }

        Err(AppError::internal(format!(
            "Failed to generate unique code after {} attempts",
            self.max_attempts
        )))
    }
}
