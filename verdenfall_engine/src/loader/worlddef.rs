//! WorldDef loader and conversion helpers.
//!
//! Converts the serialized `WorldDef` data model into runtime engine structs.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result, anyhow};

use verdenfall_data::{ExitDef, ObjectiveDef, QuestDef, WorldDef};

use crate::quest::{ActionVerb, Objective, ObjectiveKind, Quest};
use crate::room::{Direction, Exit};
use crate::world::{TerminalRule, World};

/// Load a `WorldDef` from a TOML file.
///
/// # Errors
/// - if the file can't be read or isn't a valid world document
pub fn load_worlddef(path: &Path) -> Result<WorldDef> {
    let text = fs::read_to_string(path).with_context(|| format!("reading worlddef from '{}'", path.display()))?;
    parse_worlddef(&text).with_context(|| format!("parsing worlddef TOML from '{}'", path.display()))
}

/// Parse a `WorldDef` from TOML text.
///
/// # Errors
/// - on malformed TOML or a document that doesn't match the schema
pub fn parse_worlddef(text: &str) -> Result<WorldDef> {
    Ok(toml::from_str(text)?)
}

/// Convert a validated `WorldDef` into a `World` with rooms, exits, NPCs and quests.
/// Items and the player are placed separately.
///
/// # Errors
/// - on references that don't resolve (normally caught by validation first)
pub fn build_world_from_def(def: &WorldDef) -> Result<World> {
    let mut world = World::new(def.game.title.clone(), def.game.intro.clone());

    for room_def in &def.rooms {
        world.add_room(room_def.id.clone(), room_def.name.clone(), room_def.desc.clone());
    }
    for room_def in &def.rooms {
        let here = room_id(&world, &room_def.id)?;
        for (key, exit_def) in &room_def.exits {
            let direction: Direction = key
                .parse()
                .map_err(|_| anyhow!("room '{}' has an exit under unknown direction '{key}'", room_def.id))?;
            let exit = match exit_def {
                ExitDef::To(target) => Exit::Room(room_id(&world, target)?),
                ExitDef::NoDoor => Exit::NoDoor,
                ExitDef::Blocked => Exit::Blocked,
            };
            world.room_mut(here).set_exit(direction, exit);
        }
    }

    for npc_def in &def.npcs {
        let location = room_id(&world, &npc_def.location)?;
        world.add_npc(
            npc_def.id.clone(),
            npc_def.name.clone(),
            npc_def.description.clone(),
            location,
            npc_def.dialogue.clone(),
        );
    }

    for quest_def in &def.quests {
        let quest = quest_from_def(&world, def, quest_def)?;
        let title = quest.title.clone();
        if !world.player.quests.add_quest(quest) {
            return Err(anyhow!("duplicate quest title '{title}'"));
        }
        if quest_def.active {
            world.player.quests.activate_quest(&title)?;
        }
    }

    if let Some(terminal) = &def.game.terminal {
        world.terminal = Some(TerminalRule {
            item: terminal.item.clone(),
            room: room_id(&world, &terminal.room)?,
            win_text: terminal.win_text.clone(),
            lose_text: terminal.lose_text.clone(),
        });
    }

    Ok(world)
}

fn room_id(world: &World, symbol: &str) -> Result<crate::room::RoomId> {
    world
        .room_by_symbol(symbol)
        .with_context(|| format!("room id '{symbol}' not found"))
}

fn quest_from_def(world: &World, def: &WorldDef, quest_def: &QuestDef) -> Result<Quest> {
    let objectives = quest_def
        .objectives
        .iter()
        .map(|objective| objective_from_def(world, def, objective))
        .collect::<Result<Vec<_>>>()
        .with_context(|| format!("building objectives for quest '{}'", quest_def.title))?;
    Ok(Quest::new(
        quest_def.title.clone(),
        quest_def.description.clone(),
        objectives,
        quest_def.reward.clone(),
    ))
}

fn objective_from_def(world: &World, def: &WorldDef, objective: &ObjectiveDef) -> Result<Objective> {
    let (kind, description) = match objective {
        ObjectiveDef::Action {
            verb,
            target,
            description,
        } => {
            let verb: ActionVerb = verb.parse().map_err(|e: String| anyhow!(e))?;
            (
                ObjectiveKind::Action {
                    verb,
                    target: canonical_target(def, verb, target),
                },
                description,
            )
        },
        ObjectiveDef::Visit { room, description } => {
            let id = room_id(world, room)?;
            (
                ObjectiveKind::Visit {
                    room: world.room(id).name.clone(),
                },
                description,
            )
        },
        ObjectiveDef::Counter {
            counter,
            threshold,
            description,
        } => (
            ObjectiveKind::Counter {
                counter: counter.clone(),
                threshold: *threshold,
            },
            description,
        ),
    };
    let objective = Objective::new(kind);
    Ok(match description {
        Some(text) => objective.with_description(text.clone()),
        None => objective,
    })
}

/// Talk-to targets may name an NPC by id; events carry the NPC's display name.
fn canonical_target(def: &WorldDef, verb: ActionVerb, target: &str) -> String {
    if verb == ActionVerb::TalkTo
        && let Some(npc) = def.npcs.iter().find(|npc| npc.id == target)
    {
        return npc.name.clone();
    }
    target.to_string()
}
