//! `repl::quest` module
//!
//! Handlers for listing, inspecting and activating quests, and for the rewards they pay.

use crate::error::GameError;
use crate::repl::ReplControl;
use crate::view::{ObjectiveLine, QuestLine, View, ViewItem};
use crate::world::World;

/// Quest titles may contain spaces, so every parameter is part of the title.
fn title_param(params: &[&str]) -> String {
    params.join(" ")
}

/// List every quest with its status.
///
/// # Errors
/// Never fails; shares the handler signature.
pub fn quests_handler(world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    let quests = world
        .player
        .quests
        .quests()
        .iter()
        .map(|quest| QuestLine {
            title: quest.title.clone(),
            status: quest.status(),
        })
        .collect();
    view.push(ViewItem::QuestList(quests));
    Ok(ReplControl::Continue)
}

/// Show one quest's description, objectives with progress, and reward.
///
/// # Errors
/// - `UnknownQuestTitle` if no quest has that title
pub fn quest_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let title = title_param(params);
    let quest = world
        .player
        .quests
        .quest(&title)
        .ok_or(GameError::UnknownQuestTitle(title))?;
    view.push(ViewItem::QuestDetail {
        title: quest.title.clone(),
        description: quest.description.clone(),
        status: quest.status(),
        objectives: quest
            .objectives
            .iter()
            .map(|objective| ObjectiveLine {
                description: objective.description.clone(),
                complete: objective.is_complete(),
                counter: objective.counter_progress(),
            })
            .collect(),
        reward: quest.reward.clone(),
    });
    Ok(ReplControl::Continue)
}

/// Start tracking a quest.
///
/// # Errors
/// - `UnknownQuestTitle` if no quest has that title
/// - `QuestAlreadyActive` if it's already being tracked
pub fn activate_handler(world: &mut World, view: &mut View, params: &[&str]) -> Result<ReplControl, GameError> {
    let quest = world.player.quests.activate_quest(&title_param(params))?;
    view.push(ViewItem::QuestActivated {
        title: quest.title.clone(),
        description: quest.description.clone(),
    });
    Ok(ReplControl::Continue)
}

/// List earned rewards in the order they were granted.
///
/// # Errors
/// Never fails; shares the handler signature.
pub fn rewards_handler(world: &mut World, view: &mut View, _params: &[&str]) -> Result<ReplControl, GameError> {
    view.push(ViewItem::RewardList(
        world.player.rewards.iter().map(String::from).collect(),
    ));
    Ok(ReplControl::Continue)
}
