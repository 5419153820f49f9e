//! Quests, objectives and the manager that routes world events to them.
//!
//! The world reports three kinds of event: an action on a target ("take
//! sword"), a room being entered, and a named counter reaching a new value.
//! [`QuestManager`] hands each event to every objective of every active,
//! unfinished quest. Objectives are monotonic: once complete they stay complete,
//! so a quest finishes (and pays out its reward) exactly once.

use std::fmt::{self, Display};
use std::str::FromStr;

use log::info;
use variantly::Variantly;

use crate::error::GameError;
use crate::player::Rewards;

/// Verbs the world reports to action objectives.
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub enum ActionVerb {
    Take,
    Drop,
    TalkTo,
    Use,
}
impl ActionVerb {
    pub fn as_str(self) -> &'static str {
        match self {
            ActionVerb::Take => "take",
            ActionVerb::Drop => "drop",
            ActionVerb::TalkTo => "talk-to",
            ActionVerb::Use => "use",
        }
    }
}
impl Display for ActionVerb {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
impl FromStr for ActionVerb {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "take" => Ok(ActionVerb::Take),
            "drop" => Ok(ActionVerb::Drop),
            "talk-to" | "talk" => Ok(ActionVerb::TalkTo),
            "use" => Ok(ActionVerb::Use),
            other => Err(format!("unknown action verb '{other}'")),
        }
    }
}

/// Name of the counter bumped on every successful move.
pub const MOVES_COUNTER: &str = "moves";

/// Something that happened in the world which objectives may care about.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestEvent<'a> {
    Action { verb: ActionVerb, target: &'a str },
    RoomVisited(&'a str),
    Counter { name: &'a str, value: u32 },
}

/// The completion rule of an objective.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ObjectiveKind {
    /// Complete on the first matching verb and (case-insensitive) target.
    Action { verb: ActionVerb, target: String },
    /// Complete on the first visit to the named room.
    Visit { room: String },
    /// Complete once the named counter reaches `threshold`.
    Counter { counter: String, threshold: u32 },
}
impl ObjectiveKind {
    /// Default player-facing wording for this objective.
    pub fn describe(&self) -> String {
        match self {
            ObjectiveKind::Action { verb, target } => match verb {
                ActionVerb::TalkTo => format!("Talk to {target}"),
                ActionVerb::Take => format!("Take the {target}"),
                ActionVerb::Drop => format!("Drop the {target}"),
                ActionVerb::Use => format!("Use the {target}"),
            },
            ObjectiveKind::Visit { room } => format!("Visit {room}"),
            ObjectiveKind::Counter { counter, threshold } if counter == MOVES_COUNTER => {
                format!("Move {threshold} times")
            },
            ObjectiveKind::Counter { counter, threshold } => format!("Reach {threshold} {counter}"),
        }
    }
}

/// Progress of a single objective.
#[derive(Debug, Copy, Clone, Default, PartialEq, Eq, Variantly)]
pub enum ObjectiveProgress {
    #[default]
    NotStarted,
    InProgress { count: u32 },
    Complete,
}

/// An atomic, monotonic unit of quest progress.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Objective {
    pub kind: ObjectiveKind,
    pub description: String,
    progress: ObjectiveProgress,
}
impl Objective {
    pub fn new(kind: ObjectiveKind) -> Objective {
        let description = kind.describe();
        Objective {
            kind,
            description,
            progress: ObjectiveProgress::NotStarted,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Objective {
        self.description = description.into();
        self
    }

    pub fn progress(&self) -> ObjectiveProgress {
        self.progress
    }

    pub fn is_complete(&self) -> bool {
        self.progress.is_complete()
    }

    /// Counter objectives report `(current, threshold)`.
    pub fn counter_progress(&self) -> Option<(u32, u32)> {
        match &self.kind {
            ObjectiveKind::Counter { threshold, .. } => {
                let current = match self.progress {
                    ObjectiveProgress::NotStarted => 0,
                    ObjectiveProgress::InProgress { count } => count,
                    ObjectiveProgress::Complete => *threshold,
                };
                Some((current, *threshold))
            },
            _ => None,
        }
    }

    /// Feed an event to the objective. Returns `true` only on the event that completes it.
    pub fn observe(&mut self, event: &QuestEvent<'_>) -> bool {
        if self.is_complete() {
            return false;
        }
        match (&self.kind, event) {
            (ObjectiveKind::Action { verb, target }, QuestEvent::Action { verb: v, target: t })
                if verb == v && target.to_lowercase() == t.to_lowercase() =>
            {
                self.progress = ObjectiveProgress::Complete;
            },
            (ObjectiveKind::Visit { room }, QuestEvent::RoomVisited(visited)) if room.to_lowercase() == visited.to_lowercase() => {
                self.progress = ObjectiveProgress::Complete;
            },
            (ObjectiveKind::Counter { counter, threshold }, QuestEvent::Counter { name, value }) if counter == name => {
                self.progress = if value >= threshold {
                    ObjectiveProgress::Complete
                } else {
                    ObjectiveProgress::InProgress { count: *value }
                };
            },
            _ => {},
        }
        self.is_complete()
    }
}

/// Where a quest stands from the player's point of view.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum QuestStatus {
    Inactive,
    Active,
    Complete,
}

/// A named group of objectives with one reward.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Quest {
    pub title: String,
    pub description: String,
    pub objectives: Vec<Objective>,
    pub reward: Option<String>,
    active: bool,
}
impl Quest {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        objectives: Vec<Objective>,
        reward: Option<String>,
    ) -> Quest {
        Quest {
            title: title.into(),
            description: description.into(),
            objectives,
            reward,
            active: false,
        }
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    /// True iff every objective is complete.
    pub fn is_completed(&self) -> bool {
        self.objectives.iter().all(Objective::is_complete)
    }

    pub fn status(&self) -> QuestStatus {
        if self.is_completed() {
            QuestStatus::Complete
        } else if self.active {
            QuestStatus::Active
        } else {
            QuestStatus::Inactive
        }
    }

    pub fn matches_title(&self, title: &str) -> bool {
        self.title.to_lowercase() == title.trim().to_lowercase()
    }
}

/// A noteworthy change produced while routing an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum QuestProgress {
    ObjectiveComplete { quest: String, objective: String },
    QuestComplete { quest: String },
    RewardGranted { quest: String, reward: String },
}

/// Owns one player's quests and routes world events to them.
#[derive(Debug, Clone, Default)]
pub struct QuestManager {
    quests: Vec<Quest>,
}
impl QuestManager {
    pub fn new() -> QuestManager {
        QuestManager::default()
    }

    /// Register a quest. Refuses a title that is already taken.
    pub fn add_quest(&mut self, quest: Quest) -> bool {
        if self.quests.iter().any(|q| q.matches_title(&quest.title)) {
            return false;
        }
        self.quests.push(quest);
        true
    }

    /// Quests in declaration order.
    pub fn quests(&self) -> &[Quest] {
        &self.quests
    }

    pub fn quest(&self, title: &str) -> Option<&Quest> {
        self.quests.iter().find(|q| q.matches_title(title))
    }

    pub fn active_quests(&self) -> impl Iterator<Item = &Quest> {
        self.quests.iter().filter(|q| q.active)
    }

    pub fn all_completed(&self) -> bool {
        self.quests.iter().all(Quest::is_completed)
    }

    /// Start tracking a quest.
    ///
    /// # Errors
    /// - `UnknownQuestTitle` if no quest has that title
    /// - `QuestAlreadyActive` if it is already being tracked
    ///
    /// Neither failure changes any state.
    pub fn activate_quest(&mut self, title: &str) -> Result<&Quest, GameError> {
        let quest = self
            .quests
            .iter_mut()
            .find(|q| q.matches_title(title))
            .ok_or_else(|| GameError::UnknownQuestTitle(title.to_string()))?;
        if quest.active {
            return Err(GameError::QuestAlreadyActive(quest.title.clone()));
        }
        quest.active = true;
        info!("quest \"{}\" activated", quest.title);
        Ok(quest)
    }

    pub fn check_action_objectives(&mut self, verb: ActionVerb, target: &str, rewards: &mut Rewards) -> Vec<QuestProgress> {
        self.route(&QuestEvent::Action { verb, target }, rewards)
    }

    pub fn check_room_objectives(&mut self, room_name: &str, rewards: &mut Rewards) -> Vec<QuestProgress> {
        self.route(&QuestEvent::RoomVisited(room_name), rewards)
    }

    pub fn check_counter_objectives(&mut self, counter: &str, value: u32, rewards: &mut Rewards) -> Vec<QuestProgress> {
        self.route(&QuestEvent::Counter { name: counter, value }, rewards)
    }

    /// Hand `event` to every incomplete objective of every active, incomplete quest.
    fn route(&mut self, event: &QuestEvent<'_>, rewards: &mut Rewards) -> Vec<QuestProgress> {
        let mut progress = Vec::new();
        for quest in self.quests.iter_mut().filter(|q| q.active && !q.is_completed()) {
            let mut advanced = false;
            for objective in &mut quest.objectives {
                if objective.observe(event) {
                    advanced = true;
                    info!(
                        "objective \"{}\" of quest \"{}\" complete",
                        objective.description, quest.title
                    );
                    progress.push(QuestProgress::ObjectiveComplete {
                        quest: quest.title.clone(),
                        objective: objective.description.clone(),
                    });
                }
            }
            if advanced && quest.is_completed() {
                info!("quest \"{}\" complete", quest.title);
                progress.push(QuestProgress::QuestComplete {
                    quest: quest.title.clone(),
                });
                if let Some(reward) = &quest.reward
                    && rewards.grant(reward)
                {
                    progress.push(QuestProgress::RewardGranted {
                        quest: quest.title.clone(),
                        reward: reward.clone(),
                    });
                }
            }
        }
        progress
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn travel_quest() -> Quest {
        Quest::new(
            "Great Traveller",
            "Move 10 times between places.",
            vec![Objective::new(ObjectiveKind::Counter {
                counter: MOVES_COUNTER.into(),
                threshold: 10,
            })],
            Some("Traveller's boots".into()),
        )
    }

    fn souls_quest() -> Quest {
        let take = |target: &str| {
            Objective::new(ObjectiveKind::Action {
                verb: ActionVerb::Take,
                target: target.into(),
            })
        };
        Quest::new(
            "Recover the Souls",
            "Collect the three lost souls.",
            vec![take("soul_miner"), take("soul_fisher"), take("soul_lord")],
            Some("Power of the souls".into()),
        )
    }

    fn manager_with(quests: Vec<Quest>) -> QuestManager {
        let mut qm = QuestManager::new();
        for quest in quests {
            assert!(qm.add_quest(quest));
        }
        qm
    }

    #[test]
    fn counter_quest_completes_on_threshold_and_rewards_once() {
        let mut qm = manager_with(vec![travel_quest()]);
        let mut rewards = Rewards::default();
        qm.activate_quest("Great Traveller").unwrap();
        for moves in 1..10 {
            assert!(qm.check_counter_objectives(MOVES_COUNTER, moves, &mut rewards).is_empty());
        }
        let quest = qm.quest("great traveller").unwrap();
        assert!(!quest.is_completed());
        assert_eq!(quest.objectives[0].counter_progress(), Some((9, 10)));

        let progress = qm.check_counter_objectives(MOVES_COUNTER, 10, &mut rewards);
        assert_eq!(progress.len(), 3);
        assert!(matches!(progress[1], QuestProgress::QuestComplete { .. }));
        assert!(qm.quest("Great Traveller").unwrap().is_completed());
        assert_eq!(rewards.iter().collect::<Vec<_>>(), ["Traveller's boots"]);

        assert!(qm.check_counter_objectives(MOVES_COUNTER, 11, &mut rewards).is_empty());
        assert_eq!(rewards.len(), 1);
    }

    #[test]
    fn inactive_quests_ignore_events() {
        let mut qm = manager_with(vec![souls_quest()]);
        let mut rewards = Rewards::default();
        assert!(qm
            .check_action_objectives(ActionVerb::Take, "soul_miner", &mut rewards)
            .is_empty());
        let quest = qm.quest("Recover the Souls").unwrap();
        assert!(quest.objectives.iter().all(|o| o.progress().is_not_started()));
        assert_eq!(quest.status(), QuestStatus::Inactive);
    }

    #[test]
    fn action_target_matches_case_insensitively_but_verb_must_match() {
        let mut qm = manager_with(vec![souls_quest()]);
        let mut rewards = Rewards::default();
        qm.activate_quest("Recover the Souls").unwrap();
        assert!(qm
            .check_action_objectives(ActionVerb::Drop, "soul_miner", &mut rewards)
            .is_empty());
        let progress = qm.check_action_objectives(ActionVerb::Take, "SOUL_MINER", &mut rewards);
        assert_eq!(
            progress,
            vec![QuestProgress::ObjectiveComplete {
                quest: "Recover the Souls".into(),
                objective: "Take the soul_miner".into(),
            }]
        );
    }

    #[test]
    fn quest_completes_only_when_every_objective_does() {
        let mut qm = manager_with(vec![souls_quest()]);
        let mut rewards = Rewards::default();
        qm.activate_quest("Recover the Souls").unwrap();
        qm.check_action_objectives(ActionVerb::Take, "soul_miner", &mut rewards);
        qm.check_action_objectives(ActionVerb::Take, "soul_lord", &mut rewards);
        assert!(!qm.quest("Recover the Souls").unwrap().is_completed());
        assert!(rewards.is_empty());

        let progress = qm.check_action_objectives(ActionVerb::Take, "soul_fisher", &mut rewards);
        assert!(progress.contains(&QuestProgress::RewardGranted {
            quest: "Recover the Souls".into(),
            reward: "Power of the souls".into(),
        }));
        assert_eq!(qm.quest("Recover the Souls").unwrap().status(), QuestStatus::Complete);
    }

    #[test]
    fn completed_objectives_never_revert() {
        let mut qm = manager_with(vec![souls_quest()]);
        let mut rewards = Rewards::default();
        qm.activate_quest("Recover the Souls").unwrap();
        qm.check_action_objectives(ActionVerb::Take, "soul_miner", &mut rewards);
        qm.check_action_objectives(ActionVerb::Drop, "soul_miner", &mut rewards);
        qm.check_room_objectives("Mireval", &mut rewards);
        qm.check_counter_objectives(MOVES_COUNTER, 0, &mut rewards);
        assert!(qm.quest("Recover the Souls").unwrap().objectives[0].is_complete());
    }

    #[test]
    fn visit_objective_matches_room_name() {
        let quest = Quest::new(
            "Reach Verdenfall",
            "Find your way to Verdenfall.",
            vec![Objective::new(ObjectiveKind::Visit {
                room: "Verdenfall".into(),
            })],
            None,
        );
        let mut qm = manager_with(vec![quest]);
        let mut rewards = Rewards::default();
        qm.activate_quest("Reach Verdenfall").unwrap();
        assert!(qm.check_room_objectives("Sangrun", &mut rewards).is_empty());
        let progress = qm.check_room_objectives("Verdenfall", &mut rewards);
        // no reward configured, so no grant event
        assert_eq!(progress.len(), 2);
        assert!(rewards.is_empty());
    }

    #[test]
    fn activation_failures_leave_state_untouched() {
        let mut qm = manager_with(vec![travel_quest()]);
        assert_eq!(
            qm.activate_quest("Nope").unwrap_err(),
            GameError::UnknownQuestTitle("Nope".into())
        );
        assert!(!qm.quest("Great Traveller").unwrap().is_active());

        qm.activate_quest("Great Traveller").unwrap();
        let before = qm.quests().to_vec();
        assert_eq!(
            qm.activate_quest("great traveller").unwrap_err(),
            GameError::QuestAlreadyActive("Great Traveller".into())
        );
        assert_eq!(qm.quests(), before.as_slice());
    }

    #[test]
    fn duplicate_titles_are_refused() {
        let mut qm = manager_with(vec![travel_quest()]);
        assert!(!qm.add_quest(travel_quest()));
        assert_eq!(qm.quests().len(), 1);
    }

    #[test]
    fn shared_reward_is_granted_once() {
        let mut first = travel_quest();
        first.reward = Some("Map".into());
        let mut second = souls_quest();
        second.reward = Some("Map".into());
        second.objectives.truncate(1);
        let mut qm = manager_with(vec![first, second]);
        let mut rewards = Rewards::default();
        qm.activate_quest("Great Traveller").unwrap();
        qm.activate_quest("Recover the Souls").unwrap();
        qm.check_counter_objectives(MOVES_COUNTER, 10, &mut rewards);
        let progress = qm.check_action_objectives(ActionVerb::Take, "soul_miner", &mut rewards);
        assert!(progress.iter().all(|p| !matches!(p, QuestProgress::RewardGranted { .. })));
        assert_eq!(rewards.len(), 1);
        assert!(qm.all_completed());
    }

    #[test]
    fn objective_descriptions() {
        let talk = Objective::new(ObjectiveKind::Action {
            verb: ActionVerb::TalkTo,
            target: "Messenger".into(),
        });
        assert_eq!(talk.description, "Talk to Messenger");
        let custom = Objective::new(ObjectiveKind::Visit { room: "Sangrun".into() }).with_description("Enter the cave");
        assert_eq!(custom.description, "Enter the cave");
        assert_eq!("talk".parse::<ActionVerb>(), Ok(ActionVerb::TalkTo));
    }
}
