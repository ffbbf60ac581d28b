use crate::{AccountBundle, DroppedRecords};

use std::collections::HashMap;

/// Ordered account bundles produced from one snapshot of the record store.
///
/// Current-game bundles come first, most recently used first, followed by
/// bundles of identities that never played the current game. The owner of a
/// player record is a lookup rebuilt on every pass, never stored on the
/// record itself.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Reconciliation {
    bundles: Vec<AccountBundle>,
    current_game_count: usize,
    owners: HashMap<String, usize>,
    dropped: DroppedRecords,
}

impl Reconciliation {
    pub(crate) fn new(
        bundles: Vec<AccountBundle>,
        current_game_count: usize,
        dropped: DroppedRecords,
    ) -> Self {
        let mut owners = HashMap::new();
        for (index, bundle) in bundles.iter().enumerate() {
            for player in &bundle.player_accounts {
                owners.insert(player.id.clone(), index);
            }
        }

        Self {
            bundles,
            current_game_count,
            owners,
            dropped,
        }
    }

    pub fn bundles(&self) -> &[AccountBundle] {
        &self.bundles
    }

    pub fn into_bundles(self) -> Vec<AccountBundle> {
        self.bundles
    }

    pub fn current_game(&self) -> &[AccountBundle] {
        &self.bundles[..self.current_game_count]
    }

    pub fn other_games(&self) -> &[AccountBundle] {
        &self.bundles[self.current_game_count..]
    }

    pub fn recent(&self) -> Option<&AccountBundle> {
        self.bundles.iter().find(|b| b.is_recent)
    }

    /// Identity bundle owning the player record `player_id`.
    pub fn owner_of(&self, player_id: &str) -> Option<&AccountBundle> {
        self.owners.get(player_id).map(|&index| &self.bundles[index])
    }

    pub fn dropped(&self) -> DroppedRecords {
        self.dropped
    }

    pub fn len(&self) -> usize {
        self.bundles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.bundles.is_empty()
    }

    /// Unmarks every bundle so that no account is recent.
    pub fn clear_recent(&mut self) {
        for bundle in &mut self.bundles {
            bundle.is_recent = false;
        }
    }
}
