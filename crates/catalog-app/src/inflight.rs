//! Per-record mutation tokens.

use std::collections::HashMap;

use catalog_core::ProductId;

use crate::error::{ControllerError, MutationKind};

/// Proof that the holder owns the pending mutation of one record.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) struct MutationToken {
    id: ProductId,
    serial: u64,
}

/// Records with a mutation awaiting the gateway.
#[derive(Debug, Default)]
pub(crate) struct InFlight {
    pending: HashMap<ProductId, (u64, MutationKind)>,
    next_serial: u64,
}

impl InFlight {
    /// Claim a record. Fails if another mutation already holds it.
    pub fn begin(
        &mut self,
        id: ProductId,
        kind: MutationKind,
    ) -> Result<MutationToken, ControllerError> {
        if let Some((_, held)) = self.pending.get(&id) {
            return Err(ControllerError::MutationInFlight { id, kind: *held });
        }
        self.next_serial += 1;
        self.pending.insert(id, (self.next_serial, kind));
        Ok(MutationToken {
            id,
            serial: self.next_serial,
        })
    }

    /// Release a claim. Stale tokens are ignored.
    pub fn finish(&mut self, token: MutationToken) {
        if matches!(self.pending.get(&token.id), Some((serial, _)) if *serial == token.serial) {
            self.pending.remove(&token.id);
        }
    }

    pub fn holds(&self, id: ProductId) -> Option<MutationKind> {
        self.pending.get(&id).map(|(_, kind)| *kind)
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_claim_rejected() {
        let mut inflight = InFlight::default();
        let id = ProductId::new(1);
        let token = inflight.begin(id, MutationKind::Update).unwrap();

        let err = inflight.begin(id, MutationKind::Delete).unwrap_err();
        assert_eq!(
            err,
            ControllerError::MutationInFlight {
                id,
                kind: MutationKind::Update
            }
        );

        inflight.finish(token);
        assert!(inflight.begin(id, MutationKind::Delete).is_ok());
    }

    #[test]
    fn test_distinct_records_independent() {
        let mut inflight = InFlight::default();
        inflight.begin(ProductId::new(1), MutationKind::Update).unwrap();
        inflight.begin(ProductId::new(2), MutationKind::Delete).unwrap();
        assert_eq!(inflight.len(), 2);
        assert_eq!(inflight.holds(ProductId::new(2)), Some(MutationKind::Delete));
        assert_eq!(inflight.holds(ProductId::new(3)), None);
    }

    #[test]
    fn test_stale_token_ignored() {
        let mut inflight = InFlight::default();
        let id = ProductId::new(1);
        let stale = inflight.begin(id, MutationKind::Update).unwrap();
        inflight.finish(stale);
        let _current = inflight.begin(id, MutationKind::Update).unwrap();

        inflight.finish(stale);
        assert_eq!(inflight.holds(id), Some(MutationKind::Update));
    }
}
