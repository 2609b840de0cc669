use crate::config::SlotPolicy;
use crate::error::{Result, SearchError};
use defscope_api::DefinitionData;
use tracing::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreOutcome {
    /// The slot was empty.
    Stored,
    /// An earlier definition was replaced.
    Replaced,
    /// An earlier definition was kept and the new one dropped.
    Kept,
}

/// Holds the definition captured by a search.
///
/// Starts empty; stays empty when nothing matches. What a second match
/// does is decided by the [`SlotPolicy`].
#[derive(Debug, Clone, Default)]
pub struct DefinitionSlot {
    value: Option<DefinitionData>,
    policy: SlotPolicy,
    writes: usize,
}

impl DefinitionSlot {
    pub fn new(policy: SlotPolicy) -> Self {
        Self {
            value: None,
            policy,
            writes: 0,
        }
    }

    /// Change what later matches do. The current contents are untouched.
    pub fn set_policy(&mut self, policy: SlotPolicy) {
        self.policy = policy;
    }

    pub fn store(&mut self, definition: DefinitionData) -> Result<StoreOutcome> {
        let outcome = match (&self.value, self.policy) {
            (None, _) => StoreOutcome::Stored,
            (Some(_), SlotPolicy::LastWins) => {
                warn!(
                    replacing = %definition.qualified_name,
                    "definition already captured, overwriting"
                );
                StoreOutcome::Replaced
            }
            (Some(_), SlotPolicy::FirstWins) => return Ok(StoreOutcome::Kept),
            (Some(existing), SlotPolicy::RejectConflict) => {
                if *existing == definition {
                    return Ok(StoreOutcome::Kept);
                }
                return Err(SearchError::ConflictingDefinition {
                    existing: existing.qualified_name.clone(),
                    incoming: definition.qualified_name,
                });
            }
        };
        self.value = Some(definition);
        self.writes += 1;
        Ok(outcome)
    }

    pub fn get(&self) -> Option<&DefinitionData> {
        self.value.as_ref()
    }

    pub fn take(&mut self) -> Option<DefinitionData> {
        self.value.take()
    }

    pub fn is_empty(&self) -> bool {
        self.value.is_none()
    }

    /// Number of times the slot contents were written.
    pub fn writes(&self) -> usize {
        self.writes
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use defscope_api::{DefinitionLocation, Range};
    use std::path::PathBuf;

    fn definition(name: &str) -> DefinitionData {
        DefinitionData {
            qualified_name: name.to_string(),
            location: DefinitionLocation {
                path: PathBuf::from("a.cpp"),
                range: Range {
                    start_line: 1,
                    start_col: 0,
                    end_line: 3,
                    end_col: 1,
                },
            },
            code: format!("void {}() {{}}", name),
        }
    }

    #[test]
    fn test_last_wins_overwrites() {
        let mut slot = DefinitionSlot::new(SlotPolicy::LastWins);
        assert_eq!(slot.store(definition("first")).unwrap(), StoreOutcome::Stored);
        assert_eq!(slot.store(definition("second")).unwrap(), StoreOutcome::Replaced);
        assert_eq!(slot.get().unwrap().qualified_name, "second");
        assert_eq!(slot.writes(), 2);
    }

    #[test]
    fn test_first_wins_keeps_earlier() {
        let mut slot = DefinitionSlot::new(SlotPolicy::FirstWins);
        slot.store(definition("first")).unwrap();
        assert_eq!(slot.store(definition("second")).unwrap(), StoreOutcome::Kept);
        assert_eq!(slot.get().unwrap().qualified_name, "first");
        assert_eq!(slot.writes(), 1);
    }

    #[test]
    fn test_reject_conflict_errors_on_different_definition() {
        let mut slot = DefinitionSlot::new(SlotPolicy::RejectConflict);
        slot.store(definition("first")).unwrap();
        assert_eq!(slot.store(definition("first")).unwrap(), StoreOutcome::Kept);
        let err = slot.store(definition("second")).unwrap_err();
        assert!(matches!(
            err,
            SearchError::ConflictingDefinition { ref existing, ref incoming }
                if existing == "first" && incoming == "second"
        ));
        assert_eq!(slot.get().unwrap().qualified_name, "first");
    }

    #[test]
    fn test_set_policy_applies_to_later_stores() {
        let mut slot = DefinitionSlot::default();
        slot.store(definition("first")).unwrap();
        slot.set_policy(SlotPolicy::RejectConflict);
        assert!(slot.store(definition("second")).is_err());
        assert_eq!(slot.get().unwrap().qualified_name, "first");
    }

    #[test]
    fn test_take_empties_slot() {
        let mut slot = DefinitionSlot::default();
        assert!(slot.is_empty());
        slot.store(definition("f")).unwrap();
        assert_eq!(slot.take().unwrap().qualified_name, "f");
        assert!(slot.is_empty());
    }
}
