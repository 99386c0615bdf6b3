use crate::domain::model::FieldCheck;
use crate::utils::error::Result;

/// A form whose required fields can be checked and normalized for saving.
pub trait FormSnapshot {
    type Payload;

    fn fields(&self) -> Vec<FieldCheck<'_>>;

    /// Normalized values for the persistence collaborator. Fails with the
    /// first invalid field.
    fn to_payload(&self) -> Result<Self::Payload>;
}

/// Create operation supplied by the caller (category, product, cycle stores).
pub trait Persistence<P> {
    fn persist(&self, payload: P) -> Result<()>;
}
