//! Grouping of raw per-(player, game) records into identity bundles.

use crate::{
    AccountBundle, AccountPayload, Credential, DroppedRecords, NativeRecord, PlayerRecord,
    Reconciliation, User,
};

use std::cmp::Ordering;
use std::collections::{HashMap, HashSet};

use log::{debug, warn};

struct IdentityGroup {
    user: User,
    credential: Credential,
    last_used: i64,
    /// Player id of the record that supplied `user` and `credential`
    source_player_id: String,
    players: Vec<(PlayerRecord, i64)>,
}

impl IdentityGroup {
    /// True when a record updated at `at` for `player_id` should supply the
    /// identity. Equal timestamps go to the lower player id.
    fn is_superseded_by(&self, at: i64, player_id: &str) -> bool {
        at > self.last_used
            || (at == self.last_used && player_id < self.source_player_id.as_str())
    }
}

/// Reconciles `records` into account bundles for the game `current_bundle_id`.
///
/// - Malformed payloads are dropped and logged, the batch continues.
/// - The first record seen for a player id wins over later duplicates.
/// - Guest records of other games are skipped.
/// - Records are grouped by identity; identity and credential come from the
///   group's newest record, the lower player id winning equal timestamps.
/// - A bundle's current-game player is its newest record for the game.
/// - The newest current-game bundle is the recent account.
///
/// Once duplicate player ids are removed, the result does not depend on the
/// order of `records`.
pub fn reconcile(records: &[NativeRecord], current_bundle_id: &str) -> Reconciliation {
    let mut dropped = DroppedRecords::default();
    let mut seen_players: HashSet<String> = HashSet::new();
    let mut groups: Vec<IdentityGroup> = Vec::new();
    let mut group_index: HashMap<String, usize> = HashMap::new();

    for record in records {
        let payload = match AccountPayload::decode(record) {
            Ok(payload) => payload,
            Err(e) => {
                warn!("Dropping account record {}: {e}", record.key());
                dropped.malformed += 1;
                continue;
            }
        };

        if !seen_players.insert(payload.player.id.clone()) {
            debug!("Skipping duplicate record for player {}", payload.player.id);
            dropped.duplicate += 1;
            continue;
        }

        if payload.credential.is_guest() && payload.player.bundle_id != current_bundle_id {
            debug!(
                "Skipping guest player {} of bundle {}",
                payload.player.id, payload.player.bundle_id
            );
            dropped.foreign_guest += 1;
            continue;
        }

        let AccountPayload {
            user,
            player,
            credential,
        } = payload;

        match group_index.get(&user.id) {
            Some(&index) => {
                let group = &mut groups[index];
                if group.is_superseded_by(record.last_updated_at, &player.id) {
                    group.user = user;
                    group.credential = credential;
                    group.last_used = record.last_updated_at;
                    group.source_player_id = player.id.clone();
                }
                group.players.push((player, record.last_updated_at));
            }
            None => {
                group_index.insert(user.id.clone(), groups.len());
                groups.push(IdentityGroup {
                    user,
                    credential,
                    last_used: record.last_updated_at,
                    source_player_id: player.id.clone(),
                    players: vec![(player, record.last_updated_at)],
                });
            }
        }
    }

    let mut current_game_users = Vec::new();
    let mut other_game_users = Vec::new();

    for group in groups {
        let bundle = into_bundle(group, current_bundle_id);

        if bundle.is_guest && bundle.player.is_none() {
            debug!(
                "Excluding guest identity {} without a {} record",
                bundle.user.id, current_bundle_id
            );
            continue;
        }

        if bundle.player.is_some() {
            current_game_users.push(bundle);
        } else {
            other_game_users.push(bundle);
        }
    }

    current_game_users.sort_by(most_recent_first);
    other_game_users.sort_by(most_recent_first);

    if let Some(head) = current_game_users.first_mut() {
        head.is_recent = true;
    }

    let current_game_count = current_game_users.len();
    let mut bundles = current_game_users;
    bundles.append(&mut other_game_users);

    debug!(
        "Reconciled {} records into {} accounts for {} ({} dropped)",
        records.len(),
        bundles.len(),
        current_bundle_id,
        dropped.total()
    );

    Reconciliation::new(bundles, current_game_count, dropped)
}

fn into_bundle(group: IdentityGroup, current_bundle_id: &str) -> AccountBundle {
    let IdentityGroup {
        mut user,
        credential,
        last_used,
        mut players,
        ..
    } = group;

    // Persisted guest flags are never trusted.
    let is_guest = credential.is_guest();
    user.is_guest = is_guest;

    players.sort_by(|(a, _), (b, _)| a.id.cmp(&b.id));
    let player = players
        .iter()
        .filter(|(p, _)| p.bundle_id == current_bundle_id)
        .max_by(|(a, a_at), (b, b_at)| a_at.cmp(b_at).then_with(|| b.id.cmp(&a.id)))
        .map(|(p, _)| p.clone());
    let players: Vec<PlayerRecord> = players.into_iter().map(|(p, _)| p).collect();

    AccountBundle {
        user,
        credential,
        player,
        player_accounts: players,
        last_used,
        is_guest,
        is_recent: false,
    }
}

/// Newest first; equal timestamps fall back to identity id so the order does
/// not depend on storage enumeration order.
fn most_recent_first(a: &AccountBundle, b: &AccountBundle) -> Ordering {
    b.last_used
        .cmp(&a.last_used)
        .then_with(|| a.user.id.cmp(&b.user.id))
}
