use std::collections::HashSet;

use thiserror::Error;

use crate::*;

/// Validation error for malformed or missing references in a `WorldDef`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("duplicate {kind} id '{id}'")]
    DuplicateId { kind: &'static str, id: String },
    #[error("missing {kind} '{id}' ({context})")]
    MissingReference {
        kind: &'static str,
        id: String,
        context: String,
    },
    #[error("invalid value ({context})")]
    InvalidValue { context: String },
}

/// Validate cross-references and basic invariants in a `WorldDef`.
///
/// ```
/// use verdenfall_data::{GameDef, PlayerDef, RoomDef, WorldDef, validate_world};
///
/// let world = WorldDef {
///     game: GameDef {
///         title: "Demo".into(),
///         intro: "Intro".into(),
///         player: PlayerDef {
///             name: "Player".into(),
///             description: "A hero".into(),
///             start_room: "start".into(),
///         },
///         terminal: None,
///     },
///     rooms: vec![RoomDef {
///         id: "start".into(),
///         name: "Start".into(),
///         desc: "in a room.".into(),
///         exits: Default::default(),
///     }],
///     ..WorldDef::default()
/// };
/// assert!(validate_world(&world).is_empty());
/// ```
pub fn validate_world(world: &WorldDef) -> Vec<ValidationError> {
    let mut errors = Vec::new();

    let mut rooms = HashSet::new();
    let mut room_names = HashSet::new();
    let mut items = HashSet::new();
    let mut npcs = HashSet::new();
    let mut npc_names = HashSet::new();
    let mut quests = HashSet::new();

    track_ids("room", world.rooms.iter().map(|r| r.id.as_str()), &mut rooms, &mut errors);
    track_ids(
        "room name",
        world.rooms.iter().map(|r| r.name.as_str()),
        &mut room_names,
        &mut errors,
    );
    track_ids("item", world.items.iter().map(|i| i.name.to_lowercase()), &mut items, &mut errors);
    track_ids("npc", world.npcs.iter().map(|n| n.id.as_str()), &mut npcs, &mut errors);
    // item names, quest titles and npc names are matched case-insensitively at runtime
    track_ids(
        "npc name",
        world.npcs.iter().map(|n| n.name.to_lowercase()),
        &mut npc_names,
        &mut errors,
    );
    track_ids(
        "quest",
        world.quests.iter().map(|q| q.title.to_lowercase()),
        &mut quests,
        &mut errors,
    );

    let player = &world.game.player;
    if player.start_room.trim().is_empty() {
        errors.push(ValidationError::InvalidValue {
            context: "game player start room missing".to_string(),
        });
    } else {
        check_ref("room", &player.start_room, &rooms, "game player start room", &mut errors);
    }

    if let Some(terminal) = &world.game.terminal {
        check_ref("item", &terminal.item.to_lowercase(), &items, "game terminal item", &mut errors);
        check_ref("room", &terminal.room, &rooms, "game terminal room", &mut errors);
    }

    for room in &world.rooms {
        let mut directions = HashSet::new();
        for (dir, exit) in &room.exits {
            if !directions.insert(dir.to_ascii_uppercase()) {
                errors.push(ValidationError::DuplicateId {
                    kind: "exit direction",
                    id: format!("{} {dir}", room.id),
                });
            }
            if !DIRECTION_KEYS.iter().any(|key| key.eq_ignore_ascii_case(dir)) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("room '{}' has exit in unknown direction '{dir}'", room.id),
                });
            }
            if let ExitDef::To(to) = exit {
                check_ref("room", to, &rooms, &format!("room '{}' exit {dir}", room.id), &mut errors);
            }
        }
    }

    for item in &world.items {
        if !item.weight.is_finite() || item.weight < 0.0 {
            errors.push(ValidationError::InvalidValue {
                context: format!("item '{}' weight must be a non-negative number ({})", item.name, item.weight),
            });
        }
        if item.name.split_whitespace().count() != 1 {
            errors.push(ValidationError::InvalidValue {
                context: format!("item name '{}' must be a single word", item.name),
            });
        }
        if let LocationDef::Room(room_id) = &item.location {
            check_ref("room", room_id, &rooms, &format!("item '{}' location", item.name), &mut errors);
        }
    }

    for npc in &world.npcs {
        check_ref("room", &npc.location, &rooms, &format!("npc '{}' location", npc.id), &mut errors);
    }

    for quest in &world.quests {
        if quest.objectives.is_empty() {
            errors.push(ValidationError::InvalidValue {
                context: format!("quest '{}' has no objectives", quest.title),
            });
        }
        for objective in &quest.objectives {
            validate_objective(quest, objective, &rooms, &items, (&npcs, &npc_names), &mut errors);
        }
    }

    errors
}

fn validate_objective(
    quest: &QuestDef,
    objective: &ObjectiveDef,
    rooms: &HashSet<String>,
    items: &HashSet<String>,
    (npc_ids, npc_names): (&HashSet<String>, &HashSet<String>),
    errors: &mut Vec<ValidationError>,
) {
    let context = format!("quest '{}' objective", quest.title);
    match objective {
        ObjectiveDef::Action { verb, target, .. } => {
            let verb = verb.to_lowercase();
            if !ACTION_VERBS.contains(&verb.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: unknown verb '{verb}'"),
                });
            } else if verb == "talk-to" {
                // talk targets may name the npc by display name or by id
                if !npc_names.contains(&target.to_lowercase()) && !npc_ids.contains(target) {
                    errors.push(ValidationError::MissingReference {
                        kind: "npc name",
                        id: target.clone(),
                        context,
                    });
                }
            } else if !items.iter().any(|name| name.eq_ignore_ascii_case(target)) {
                errors.push(ValidationError::MissingReference {
                    kind: "item",
                    id: target.clone(),
                    context,
                });
            }
        },
        ObjectiveDef::Visit { room, .. } => check_ref("room", room, rooms, &context, errors),
        ObjectiveDef::Counter { counter, threshold, .. } => {
            if !COUNTERS.contains(&counter.as_str()) {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: unknown counter '{counter}'"),
                });
            }
            if *threshold == 0 {
                errors.push(ValidationError::InvalidValue {
                    context: format!("{context}: counter threshold must be at least 1"),
                });
            }
        },
    }
}

fn track_ids<I, S>(kind: &'static str, ids: I, seen: &mut HashSet<String>, errors: &mut Vec<ValidationError>)
where
    I: IntoIterator<Item = S>,
    S: Into<String>,
{
    for id in ids {
        let id = id.into();
        if !seen.insert(id.clone()) {
            errors.push(ValidationError::DuplicateId { kind, id });
        }
    }
}

fn check_ref(kind: &'static str, id: &str, known: &HashSet<String>, context: &str, errors: &mut Vec<ValidationError>) {
    if !known.contains(id) {
        errors.push(ValidationError::MissingReference {
            kind,
            id: id.to_string(),
            context: context.to_string(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn room(id: &str, exits: &[(&str, ExitDef)]) -> RoomDef {
        RoomDef {
            id: id.into(),
            name: format!("Room {id}"),
            desc: format!("in room {id}."),
            exits: exits
                .iter()
                .map(|(dir, exit)| ((*dir).to_string(), exit.clone()))
                .collect::<BTreeMap<_, _>>(),
        }
    }

    fn base_world() -> WorldDef {
        WorldDef {
            game: GameDef {
                title: "Test".into(),
                intro: String::new(),
                player: PlayerDef {
                    name: "Tester".into(),
                    description: String::new(),
                    start_room: "a".into(),
                },
                terminal: None,
            },
            rooms: vec![
                room("a", &[("N", ExitDef::To("b".into()))]),
                room("b", &[("S", ExitDef::NoDoor)]),
            ],
            ..WorldDef::default()
        }
    }

    #[test]
    fn valid_world_has_no_errors() {
        assert!(validate_world(&base_world()).is_empty());
    }

    #[test]
    fn detects_duplicate_rooms_and_bad_exit_target() {
        let mut world = base_world();
        world.rooms.push(room("a", &[("E", ExitDef::To("nowhere".into()))]));
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "room",
            id: "a".into()
        }));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::MissingReference { kind: "room", id, .. } if id == "nowhere"
        )));
    }

    #[test]
    fn rejects_unknown_direction_key() {
        let mut world = base_world();
        world.rooms[0].exits.insert("NW".into(), ExitDef::NoDoor);
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(errors[0].to_string().contains("unknown direction 'NW'"));
    }

    #[test]
    fn rejects_direction_keys_differing_only_in_case() {
        let mut world = base_world();
        world.rooms[0].exits.insert("n".into(), ExitDef::NoDoor);
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 1);
        assert!(matches!(
            &errors[0],
            ValidationError::DuplicateId { kind: "exit direction", id } if id.starts_with("a ")
        ));
    }

    #[test]
    fn item_names_differing_only_in_case_are_duplicates() {
        let mut world = base_world();
        for (name, weight) in [("Sword", 5.0), ("sword", 2.0)] {
            world.items.push(ItemDef {
                name: name.into(),
                description: "a blade".into(),
                weight,
                location: LocationDef::Room("a".into()),
            });
        }
        world.game.terminal = Some(TerminalDef {
            item: "SWORD".into(),
            room: "b".into(),
            win_text: String::new(),
            lose_text: String::new(),
        });
        let errors = validate_world(&world);
        assert_eq!(
            errors,
            vec![ValidationError::DuplicateId {
                kind: "item",
                id: "sword".into()
            }]
        );
    }

    #[test]
    fn rejects_negative_weight_and_multiword_names() {
        let mut world = base_world();
        world.items.push(ItemDef {
            name: "rusty sword".into(),
            description: "old".into(),
            weight: -1.0,
            location: LocationDef::Room("a".into()),
        });
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 2);
    }

    #[test]
    fn checks_objective_references() {
        let mut world = base_world();
        world.quests.push(QuestDef {
            title: "Broken".into(),
            description: "Nothing lines up.".into(),
            reward: None,
            active: false,
            objectives: vec![
                ObjectiveDef::Action {
                    verb: "take".into(),
                    target: "ghost".into(),
                    description: None,
                },
                ObjectiveDef::Action {
                    verb: "juggle".into(),
                    target: "ghost".into(),
                    description: None,
                },
                ObjectiveDef::Visit {
                    room: "zzz".into(),
                    description: None,
                },
                ObjectiveDef::Counter {
                    counter: "moves".into(),
                    threshold: 0,
                    description: None,
                },
            ],
        });
        let errors = validate_world(&world);
        assert_eq!(errors.len(), 4);
    }

    #[test]
    fn rejects_quest_without_objectives_and_duplicate_titles() {
        let mut world = base_world();
        let quest = QuestDef {
            title: "Idle".into(),
            description: "Do nothing.".into(),
            objectives: Vec::new(),
            reward: None,
            active: false,
        };
        world.quests.push(quest.clone());
        world.quests.push(QuestDef {
            title: "IDLE".into(),
            ..quest
        });
        let errors = validate_world(&world);
        assert!(errors.contains(&ValidationError::DuplicateId {
            kind: "quest",
            id: "idle".into()
        }));
        assert_eq!(
            errors
                .iter()
                .filter(|e| matches!(e, ValidationError::InvalidValue { .. }))
                .count(),
            2
        );
    }
}
