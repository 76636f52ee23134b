use crate::errors::VeilResult;
use crate::models::EntityType;

/// Substitution rule applied to one accepted span.
///
/// Must be deterministic and free of side effects.
pub trait IOperator: Send + Sync {
    fn name(&self) -> &str;

    fn operate(&self, original: &str, entity_type: &EntityType) -> VeilResult<String>;
}
