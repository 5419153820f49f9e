//! `repl::npc` module
//!
//! Talking to characters, and the per-turn NPC movement pass.

use crate::error::GameError;
use crate::random::RandomSource;
use crate::repl::{ReplControl, report_progress};
use crate::view::{View, ViewItem};
use crate::world::World;

/// Hear the next line from someone in the room.
///
/// # Errors
/// - `CharacterNotPresent` if nobody by that name is here
pub fn talk_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let report = world.talk_to(params.first().copied().unwrap_or_default())?;
    match report.line {
        Some(quote) => view.push(ViewItem::NpcSpeech {
            speaker: report.npc,
            quote,
        }),
        None => view.push(ViewItem::NpcSilent { speaker: report.npc }),
    }
    report_progress(view, report.progress);
    Ok(ReplControl::Continue)
}

/// Let every NPC wander, reporting anyone who leaves or enters the player's room.
pub fn npc_pass(world: &mut World, view: &mut View, rng: &mut dyn RandomSource) {
    let here = world.player.location;
    for step in world.advance_npcs(rng) {
        let npc_name = world.npc(step.npc).name.clone();
        if step.from == here {
            view.push(ViewItem::NpcLeft { npc_name });
        } else if step.to == here {
            view.push(ViewItem::NpcEntered { npc_name });
        }
    }
}
