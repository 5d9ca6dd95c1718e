use log::debug;

use crate::{
    Acceptance, AcceptanceState, ConsistencyViolation, DiffError, DiffSpan, EditScript,
    Granularity, OperationId, apply_accepted, compute_diff,
};

/// An interactive review of the changes between an original and an updated
/// text.
///
/// Holds one edit script and the reviewer's decisions about its operations.
/// Every decision re-applies the accepted operations and returns the
/// candidate text, so the caller never has to keep the two in sync.
///
/// ```
/// use suggestion_diff::{Granularity, OperationId, Review};
///
/// let mut review = Review::new("Merging is hard!", "Merging is easy!", Granularity::Word);
///
/// assert_eq!(review.text().unwrap(), "Merging is hard!");
/// assert_eq!(review.accept(OperationId::new(0)).unwrap(), "Merging is easy!");
/// assert_eq!(review.commit().unwrap(), "Merging is easy!");
/// ```
#[derive(Debug, Clone)]
pub struct Review {
    original: String,
    updated: String,
    granularity: Granularity,
    script: EditScript,
    acceptance: AcceptanceState,
}

impl Review {
    #[must_use]
    pub fn new(original: &str, updated: &str, granularity: Granularity) -> Self {
        let script = compute_diff(original, updated, granularity);
        let acceptance = AcceptanceState::new(&script);

        Review {
            original: original.to_owned(),
            updated: updated.to_owned(),
            granularity,
            script,
            acceptance,
        }
    }

    #[must_use]
    pub fn original(&self) -> &str { &self.original }

    #[must_use]
    pub fn updated(&self) -> &str { &self.updated }

    #[must_use]
    pub fn granularity(&self) -> Granularity { self.granularity }

    #[must_use]
    pub fn script(&self) -> &EditScript { &self.script }

    #[must_use]
    pub fn acceptance(&self) -> &AcceptanceState { &self.acceptance }

    /// The decision recorded for `id`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` if the script has no such operation.
    pub fn status(&self, id: OperationId) -> Result<Acceptance, DiffError> {
        self.ensure_known(id)?;
        Ok(self.acceptance.get(id))
    }

    /// Records the decision about `id` and returns the reconciled text.
    ///
    /// # Errors
    ///
    /// Returns `UnknownOperation` if the script has no such operation; the
    /// state is left untouched in that case.
    pub fn set(&mut self, id: OperationId, acceptance: Acceptance) -> Result<String, DiffError> {
        self.ensure_known(id)?;

        let previous = self.acceptance.set(id, acceptance);
        debug!("{id}: {previous} -> {acceptance}");

        self.text()
    }

    /// # Errors
    ///
    /// See [`Review::set`].
    pub fn accept(&mut self, id: OperationId) -> Result<String, DiffError> {
        self.set(id, Acceptance::Accepted)
    }

    /// # Errors
    ///
    /// See [`Review::set`].
    pub fn reject(&mut self, id: OperationId) -> Result<String, DiffError> {
        self.set(id, Acceptance::Rejected)
    }

    /// # Errors
    ///
    /// See [`Review::set`].
    pub fn reset(&mut self, id: OperationId) -> Result<String, DiffError> {
        self.set(id, Acceptance::Pending)
    }

    /// # Errors
    ///
    /// See [`Review::set`].
    pub fn toggle(&mut self, id: OperationId) -> Result<String, DiffError> {
        let toggled = self.status(id)?.toggled();
        self.set(id, toggled)
    }

    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if applying fails.
    pub fn accept_all(&mut self) -> Result<String, DiffError> {
        self.acceptance.accept_all(&self.script);
        self.text()
    }

    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if applying fails.
    pub fn reject_all(&mut self) -> Result<String, DiffError> {
        self.acceptance.reject_all(&self.script);
        self.text()
    }

    /// The original text with the accepted operations applied.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if applying fails.
    pub fn text(&self) -> Result<String, DiffError> {
        apply_accepted(&self.original, &self.script, &self.acceptance)
    }

    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if rendering fails.
    pub fn spans(&self) -> Result<Vec<DiffSpan>, DiffError> {
        self.script.spans(&self.original, &self.acceptance)
    }

    /// Replaces the updated text, e.g. after the suggestion was revised. The
    /// script is recomputed against the same original and every decision is
    /// dropped, as the old ids don't refer to the new operations.
    pub fn supersede(&mut self, updated: &str) {
        self.script = compute_diff(&self.original, updated, self.granularity);
        self.acceptance = AcceptanceState::new(&self.script);
        self.updated = updated.to_owned();

        debug!("Superseded the updated text, {} operation(s) to review", self.script.len());
    }

    /// Ends the review, returning the reconciled text.
    ///
    /// # Errors
    ///
    /// Returns `DiffError::ConsistencyViolation` if applying fails.
    pub fn commit(self) -> Result<String, DiffError> { self.text() }

    fn ensure_known(&self, id: OperationId) -> Result<(), DiffError> {
        if self.script.contains(id) {
            Ok(())
        } else {
            Err(ConsistencyViolation::UnknownOperation { operation: id }.into())
        }
    }
}
