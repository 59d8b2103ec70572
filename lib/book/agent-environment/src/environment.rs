/*
 * Copyright (C) 2023 Asim Ihsan
 * SPDX-License-Identifier: AGPL-3.0-only
 *
 * This program is free software: you can redistribute it and/or modify it under
 * the terms of the GNU Affero General Public License as published by the Free
 * Software Foundation, version 3.
 *
 * This program is distributed in the hope that it will be useful, but WITHOUT ANY
 * WARRANTY; without even the implied warranty of MERCHANTABILITY or FITNESS FOR A
 * PARTICULAR PURPOSE. See the GNU Affero General Public License for more details.
 *
 * You should have received a copy of the GNU Affero General Public License along
 * with this program. If not, see <https://www.gnu.org/licenses/>
 */

use std::fmt::Debug;

use slotmap::SlotMap;

use crate::config::EnvironmentConfig;
use crate::entity::{AgentKey, EntityKey, JudgeKey, ThingKey};
use crate::error::EnvironmentError;
use crate::observer::Observer;
use crate::score::ScoreTable;
use crate::space::{Location, Space};
use crate::world::World;
use crate::{Agent, HashMap, Judge, Rng, Score};

/// A Task binds the generic Environment to one concrete problem, e.g. the vacuum world. It
/// decides what an agent perceives and what an action actually does to the world.
///
/// Percepts, actions and changes are closed per-task types, so the step loop and the task
/// always agree on what they exchange.
pub trait Task {
    /// What an agent senses.
    type Percept: Debug;
    /// What an agent does.
    type Action: Debug;
    /// What a judge senses: a change to the environment caused by an action.
    type Change: Debug;
    /// Inert objects that can be placed in the world, e.g. dirt.
    type Thing: Debug;

    /// Create the percept seen by this agent at its current location.
    ///
    /// Fails with [`EnvironmentError::AgentNotPlaced`] if the agent has no location.
    fn percept_seen_by(
        &self,
        world: &World<Self::Thing>,
        agent: AgentKey,
    ) -> Result<Self::Percept, EnvironmentError>;

    /// Alter the world according to the action just taken by the agent and return the list of
    /// changes it actually caused. These are the percepts seen by judges.
    fn execute_action(
        &mut self,
        world: &mut World<Self::Thing>,
        agent: AgentKey,
        action: &Self::Action,
    ) -> Result<Vec<Self::Change>, EnvironmentError>;
}

type BoxedAgent<T> = Box<dyn Agent<Percept = <T as Task>::Percept, Action = <T as Task>::Action>>;
type BoxedJudge<T> = Box<dyn Judge<Percept = <T as Task>::Change>>;

struct AgentSlot<T: Task> {
    agent: BoxedAgent<T>,
    alive: bool,
}

struct JudgeSlot<T: Task> {
    judge: BoxedJudge<T>,
    registered: bool,
}

/// An Environment runs any number of agents and judges in discrete time steps.
///
/// At each step every live agent, in the order it was added, is given the percept its task
/// synthesizes, maps it to an action, and the task applies that action. Every judge registered
/// for the agent scores each resulting change and the scores accumulate in a [`ScoreTable`].
/// Observers hear about every action afterwards.
///
/// Entities are created in the Environment's arenas first, which hands out their identity, and
/// then added with [`Environment::add_object`]. The `add_*` helpers do both.
pub struct Environment<T: Task> {
    task: T,
    world: World<T::Thing>,
    agents: SlotMap<AgentKey, AgentSlot<T>>,
    judges: SlotMap<JudgeKey, JudgeSlot<T>>,
    present: Vec<AgentKey>,
    scores: ScoreTable,
    observers: Vec<Box<dyn Observer<T>>>,
    rng: Rng,
    tick: u64,
}

impl<T: Task> Environment<T> {
    pub fn new(space: Space, task: T) -> Self {
        Self::with_config(space, task, EnvironmentConfig::default())
    }

    pub fn with_config(space: Space, task: T, config: EnvironmentConfig) -> Self {
        Self::with_rng(space, task, config.rng())
    }

    pub fn with_rng(space: Space, task: T, rng: Rng) -> Self {
        Self {
            task,
            world: World::new(space),
            agents: SlotMap::with_key(),
            judges: SlotMap::with_key(),
            present: Vec::new(),
            scores: ScoreTable::new(),
            observers: Vec::new(),
            rng,
            tick: 0,
        }
    }

    pub fn space(&self) -> &Space {
        self.world.space()
    }

    pub fn world(&self) -> &World<T::Thing> {
        &self.world
    }

    pub fn task(&self) -> &T {
        &self.task
    }

    /// Number of completed steps.
    pub fn tick(&self) -> u64 {
        self.tick
    }

    /// Agents currently in the environment, in the order they take their turns.
    pub fn agents(&self) -> &[AgentKey] {
        &self.present
    }

    pub fn create_agent<A>(&mut self, agent: A) -> AgentKey
    where
        A: Agent<Percept = T::Percept, Action = T::Action> + 'static,
    {
        self.agents.insert(AgentSlot {
            agent: Box::new(agent),
            alive: true,
        })
    }

    pub fn create_judge<J>(&mut self, judge: J) -> JudgeKey
    where
        J: Judge<Percept = T::Change> + 'static,
    {
        self.judges.insert(JudgeSlot {
            judge: Box::new(judge),
            registered: false,
        })
    }

    pub fn create_thing(&mut self, thing: T::Thing) -> ThingKey {
        self.world.insert_thing(thing)
    }

    /// Add an object to the environment, optionally specifying its location. If no location is
    /// provided a random one is drawn from the space.
    ///
    /// Judges do not go on the gameboard. Instead a judge is registered, with a score of zero,
    /// against every agent already present, and the location is ignored.
    ///
    /// There is only one of each object: adding an object that is already present does nothing.
    pub fn add_object(
        &mut self,
        entity: impl Into<EntityKey>,
        location: Option<Location>,
    ) -> Result<(), EnvironmentError> {
        match entity.into() {
            EntityKey::Judge(judge) => self.register_judge(judge),
            EntityKey::Agent(agent) => self.place_agent(agent, location),
            EntityKey::Thing(thing) => self.place_thing(thing, location),
        }
    }

    pub fn add_agent<A>(
        &mut self,
        agent: A,
        location: Option<Location>,
    ) -> Result<AgentKey, EnvironmentError>
    where
        A: Agent<Percept = T::Percept, Action = T::Action> + 'static,
    {
        let key = self.create_agent(agent);
        self.add_object(key, location)?;
        Ok(key)
    }

    pub fn add_judge<J>(&mut self, judge: J) -> Result<JudgeKey, EnvironmentError>
    where
        J: Judge<Percept = T::Change> + 'static,
    {
        let key = self.create_judge(judge);
        self.add_object(key, None)?;
        Ok(key)
    }

    pub fn add_thing(
        &mut self,
        thing: T::Thing,
        location: Option<Location>,
    ) -> Result<ThingKey, EnvironmentError> {
        let key = self.create_thing(thing);
        self.add_object(key, location)?;
        Ok(key)
    }

    /// Take an object out of the environment. A removed agent loses its score row, a removed
    /// judge disappears from every row. The object keeps its identity and can be added again.
    ///
    /// Returns whether the object was present.
    pub fn remove_object(&mut self, entity: impl Into<EntityKey>) -> Result<bool, EnvironmentError> {
        let entity = entity.into();
        let removed = match entity {
            EntityKey::Judge(judge) => {
                let slot = self
                    .judges
                    .get_mut(judge)
                    .ok_or(EnvironmentError::UnknownEntity(entity))?;
                let was_registered = slot.registered;
                slot.registered = false;
                self.scores.unregister_judge(judge);
                was_registered
            }
            EntityKey::Agent(agent) => {
                if !self.agents.contains_key(agent) {
                    return Err(EnvironmentError::UnknownEntity(entity));
                }
                let was_placed = self.world.unplace(entity).is_some();
                self.scores.remove_agent(agent);
                self.present.retain(|present| *present != agent);
                was_placed
            }
            EntityKey::Thing(thing) => {
                if !self.world.contains_thing(thing) {
                    return Err(EnvironmentError::UnknownEntity(entity));
                }
                self.world.unplace(entity).is_some()
            }
        };
        if removed {
            log::debug!("T{}\tremoved {:?}", self.tick, entity);
        }
        Ok(removed)
    }

    /// Return all placed objects along with their location, either at `location` or, if no
    /// location is provided, from the entire environment.
    pub fn get_objects(&self, location: Option<&Location>) -> HashMap<EntityKey, Location> {
        self.world.objects_at(location)
    }

    /// Snapshot of the agent's cumulative score per judge, or None if the agent is not in the
    /// environment.
    pub fn get_scores(&self, agent: AgentKey) -> Option<HashMap<JudgeKey, Score>> {
        self.scores.row(agent).cloned()
    }

    pub fn scores(&self) -> &ScoreTable {
        &self.scores
    }

    pub fn add_observer<O>(&mut self, observer: O)
    where
        O: Observer<T> + 'static,
    {
        self.observers.push(Box::new(observer));
    }

    /// Dead agents stay in the environment but no longer take turns.
    pub fn set_alive(&mut self, agent: AgentKey, alive: bool) -> Result<(), EnvironmentError> {
        let slot = self
            .agents
            .get_mut(agent)
            .ok_or(EnvironmentError::UnknownEntity(agent.into()))?;
        slot.alive = alive;
        Ok(())
    }

    pub fn is_alive(&self, agent: AgentKey) -> Option<bool> {
        self.agents.get(agent).map(|slot| slot.alive)
    }

    /// True iff no agent in the environment is alive.
    pub fn is_done(&self) -> bool {
        !self
            .present
            .iter()
            .any(|agent| self.agents.get(*agent).map_or(false, |slot| slot.alive))
    }

    /// Move the clock forward one tick.
    pub fn step(&mut self) -> Result<(), EnvironmentError> {
        let present = self.present.clone();
        for agent in present {
            let slot = match self.agents.get_mut(agent) {
                Some(slot) if slot.alive => slot,
                _ => continue,
            };

            // Synthesize a percept and ask the agent to map it to an action.
            let percept = self.task.percept_seen_by(&self.world, agent)?;
            let action = slot.agent.execute(&percept);

            // Map the action onto actual changes to the environment, then let every judge of
            // this agent score each change.
            let changes = self.task.execute_action(&mut self.world, agent, &action)?;
            log::debug!(
                "T{}\t{:?} perceived {:?}, did {:?}, changes {:?}",
                self.tick,
                agent,
                percept,
                action,
                changes
            );

            let judges = &self.judges;
            for change in &changes {
                self.scores.accrue(agent, |judge| {
                    let score = judges
                        .get(judge)
                        .map_or(0.0, |slot| slot.judge.execute(change));
                    log::trace!("\t{:?} scored {:?} as {}", judge, change, score);
                    score
                });
            }

            for observer in self.observers.iter_mut() {
                observer.agent_acted(agent, &percept, &action);
            }
        }
        self.tick += 1;
        Ok(())
    }

    /// Move the clock forward by `count` ticks.
    pub fn step_n(&mut self, count: usize) -> Result<(), EnvironmentError> {
        for _ in 0..count {
            self.step()?;
        }
        Ok(())
    }

    /// Step until no agent is alive, or until `max_ticks` ticks have run. Returns the number of
    /// ticks run.
    pub fn step_until_done(&mut self, max_ticks: usize) -> Result<usize, EnvironmentError> {
        let mut ticks = 0;
        while ticks < max_ticks && !self.is_done() {
            self.step()?;
            ticks += 1;
        }
        Ok(ticks)
    }

    fn register_judge(&mut self, judge: JudgeKey) -> Result<(), EnvironmentError> {
        let slot = self
            .judges
            .get_mut(judge)
            .ok_or(EnvironmentError::UnknownEntity(judge.into()))?;
        if slot.registered {
            return Ok(());
        }
        slot.registered = true;
        self.scores.register_judge(judge);
        log::debug!(
            "T{}\tregistered {:?} for {} agents",
            self.tick,
            judge,
            self.scores.len()
        );
        Ok(())
    }

    fn place_agent(
        &mut self,
        agent: AgentKey,
        location: Option<Location>,
    ) -> Result<(), EnvironmentError> {
        if !self.agents.contains_key(agent) {
            return Err(EnvironmentError::UnknownEntity(agent.into()));
        }
        if self.world.is_placed(agent) {
            return Ok(());
        }
        let location = self.resolve_location(location)?;
        self.world.place(agent.into(), location.clone());
        self.scores.insert_agent(agent);
        self.present.push(agent);
        for observer in self.observers.iter_mut() {
            observer.agent_added(agent, &location);
        }
        log::debug!("T{}\tadded {:?} at {}", self.tick, agent, location);
        Ok(())
    }

    fn place_thing(
        &mut self,
        thing: ThingKey,
        location: Option<Location>,
    ) -> Result<(), EnvironmentError> {
        if !self.world.contains_thing(thing) {
            return Err(EnvironmentError::UnknownEntity(thing.into()));
        }
        if self.world.is_placed(thing) {
            return Ok(());
        }
        let location = self.resolve_location(location)?;
        log::debug!("T{}\tadded {:?} at {}", self.tick, thing, location);
        self.world.place(thing.into(), location);
        Ok(())
    }

    fn resolve_location(&mut self, location: Option<Location>) -> Result<Location, EnvironmentError> {
        let location = match location {
            Some(location) => location,
            None => self
                .world
                .space()
                .random_location(&mut self.rng)
                .ok_or_else(|| EnvironmentError::NoRandomLocation(self.world.space().to_string()))?,
        };
        if !self.world.space().contains(&location) {
            log::warn!(
                "placing object at {} outside of space {}",
                location,
                self.world.space()
            );
        }
        Ok(location)
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::fmt::{Display, Formatter};
    use std::rc::Rc;

    use approx::assert_abs_diff_eq;

    use super::*;
    use crate::observer::ActionTracker;

    // A one-dimensional corridor. Walkers always try to go forward and stop at the far wall.
    #[derive(Debug, Clone, PartialEq)]
    struct CorridorPercept {
        location: Location,
        markers: usize,
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum CorridorAction {
        Forward,
        Wait,
    }

    impl Display for CorridorAction {
        fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
            match self {
                CorridorAction::Forward => write!(f, "forward"),
                CorridorAction::Wait => write!(f, "wait"),
            }
        }
    }

    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    enum CorridorChange {
        Advanced,
        Blocked,
        Waited,
    }

    #[derive(Debug)]
    struct Marker;

    struct Corridor;

    impl Task for Corridor {
        type Percept = CorridorPercept;
        type Action = CorridorAction;
        type Change = CorridorChange;
        type Thing = Marker;

        fn percept_seen_by(
            &self,
            world: &World<Marker>,
            agent: AgentKey,
        ) -> Result<CorridorPercept, EnvironmentError> {
            let location = world.agent_location(agent)?;
            Ok(CorridorPercept {
                location: location.clone(),
                markers: world.things_at(location).len(),
            })
        }

        fn execute_action(
            &mut self,
            world: &mut World<Marker>,
            agent: AgentKey,
            action: &CorridorAction,
        ) -> Result<Vec<CorridorChange>, EnvironmentError> {
            match action {
                CorridorAction::Wait => Ok(vec![CorridorChange::Waited]),
                CorridorAction::Forward => {
                    let location = world.agent_location(agent)?;
                    match location.offset(0, 1) {
                        Some(next) if world.space().contains(&next) => {
                            world.relocate(agent, next)?;
                            Ok(vec![CorridorChange::Advanced])
                        }
                        _ => Ok(vec![CorridorChange::Blocked]),
                    }
                }
            }
        }
    }

    struct Walker;

    impl Agent for Walker {
        type Percept = CorridorPercept;
        type Action = CorridorAction;

        fn execute(&mut self, _percept: &CorridorPercept) -> CorridorAction {
            CorridorAction::Forward
        }
    }

    // Waits on markers, otherwise walks. Remembers how many percepts it has seen.
    #[derive(Default)]
    struct Counter {
        seen: Rc<RefCell<usize>>,
    }

    impl Agent for Counter {
        type Percept = CorridorPercept;
        type Action = CorridorAction;

        fn execute(&mut self, percept: &CorridorPercept) -> CorridorAction {
            *self.seen.borrow_mut() += 1;
            if percept.markers > 0 {
                CorridorAction::Wait
            } else {
                CorridorAction::Forward
            }
        }
    }

    struct DistanceJudge;

    impl Judge for DistanceJudge {
        type Percept = CorridorChange;

        fn execute(&self, percept: &CorridorChange) -> Score {
            match percept {
                CorridorChange::Advanced => 1.0,
                CorridorChange::Blocked => -1.0,
                CorridorChange::Waited => 0.0,
            }
        }
    }

    struct FlatJudge;

    impl Judge for FlatJudge {
        type Percept = CorridorChange;

        fn execute(&self, _percept: &CorridorChange) -> Score {
            0.5
        }
    }

    #[derive(Default)]
    struct TurnRecorder {
        added: Vec<AgentKey>,
        acted: Vec<AgentKey>,
    }

    impl Observer<Corridor> for TurnRecorder {
        fn agent_added(&mut self, agent: AgentKey, _location: &Location) {
            self.added.push(agent);
        }

        fn agent_acted(&mut self, agent: AgentKey, _percept: &CorridorPercept, _action: &CorridorAction) {
            self.acted.push(agent);
        }
    }

    fn corridor(length: i32) -> Environment<Corridor> {
        let _ = env_logger::builder().is_test(true).try_init();
        Environment::with_config(
            Space::new(vec![0..length]).unwrap(),
            Corridor,
            EnvironmentConfig::seeded(42),
        )
    }

    #[test]
    fn test_add_object_is_idempotent() {
        let mut env = corridor(3);
        let walker = env.create_agent(Walker);
        let marker = env.create_thing(Marker);
        let judge = env.create_judge(DistanceJudge);

        env.add_object(walker, Some(Location::from([0]))).unwrap();
        env.add_object(marker, Some(Location::from([1]))).unwrap();
        env.add_object(judge, None).unwrap();
        assert_eq!(env.get_objects(None).len(), 2);

        env.add_object(walker, Some(Location::from([2]))).unwrap();
        env.add_object(marker, None).unwrap();
        env.add_object(judge, None).unwrap();
        assert_eq!(env.get_objects(None).len(), 2);
        assert_eq!(env.agents().len(), 1);
        assert_eq!(env.world().location_of(walker), Some(&Location::from([0])));
        assert_eq!(env.get_scores(walker).unwrap().len(), 1);
    }

    #[test]
    fn test_judges_are_not_placed() {
        let mut env = corridor(3);
        env.add_judge(DistanceJudge).unwrap();
        assert!(env.get_objects(None).is_empty());
    }

    #[test]
    fn test_get_objects_at_location() {
        let mut env = corridor(3);
        let walker = env.add_agent(Walker, Some(Location::from([1]))).unwrap();
        let marker = env.add_thing(Marker, Some(Location::from([1]))).unwrap();
        env.add_thing(Marker, Some(Location::from([2]))).unwrap();

        let at_one = env.get_objects(Some(&Location::from([1])));
        assert_eq!(at_one.len(), 2);
        assert!(at_one.contains_key(&EntityKey::Agent(walker)));
        assert!(at_one.contains_key(&EntityKey::Thing(marker)));
        assert!(env.get_objects(Some(&Location::from([0]))).is_empty());
    }

    #[test]
    fn test_step_scores_every_change() {
        let mut env = corridor(3);
        let walker = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        let judge = env.add_judge(DistanceJudge).unwrap();

        env.step_n(4).unwrap();

        // Two advances then two bumps into the far wall.
        assert_abs_diff_eq!(env.get_scores(walker).unwrap()[&judge], 0.0);
        assert_eq!(env.world().location_of(walker), Some(&Location::from([2])));
        assert_eq!(env.tick(), 4);
    }

    #[test]
    fn test_scores_only_change_on_step() {
        let mut env = corridor(5);
        let walker = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        let judge = env.add_judge(DistanceJudge).unwrap();

        env.step().unwrap();
        let before = env.get_scores(walker).unwrap();
        env.add_thing(Marker, None).unwrap();
        env.add_judge(FlatJudge).unwrap();
        assert_abs_diff_eq!(env.get_scores(walker).unwrap()[&judge], before[&judge]);

        env.step().unwrap();
        assert_abs_diff_eq!(env.get_scores(walker).unwrap()[&judge], 2.0);
    }

    #[test]
    fn test_judge_registered_only_for_agents_already_present() {
        let mut env = corridor(5);
        let early = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        let judge = env.add_judge(DistanceJudge).unwrap();
        let late = env.add_agent(Walker, Some(Location::from([1]))).unwrap();

        env.step().unwrap();

        assert_abs_diff_eq!(env.get_scores(early).unwrap()[&judge], 1.0);
        assert!(env.get_scores(late).unwrap().is_empty());
    }

    #[test]
    fn test_every_judge_scores_independently() {
        let mut env = corridor(2);
        let walker = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        let distance = env.add_judge(DistanceJudge).unwrap();
        let flat = env.add_judge(FlatJudge).unwrap();

        env.step_n(3).unwrap();

        let scores = env.get_scores(walker).unwrap();
        assert_abs_diff_eq!(scores[&distance], -1.0);
        assert_abs_diff_eq!(scores[&flat], 1.5);
    }

    #[test]
    fn test_get_scores_for_unknown_agent_is_none() {
        let mut env = corridor(3);
        let created_only = env.create_agent(Walker);
        assert!(env.get_scores(created_only).is_none());
    }

    #[test]
    fn test_unknown_entity_is_rejected() {
        let mut other = corridor(3);
        let foreign = other.create_agent(Walker);

        let mut env = corridor(3);
        assert_eq!(
            env.add_object(foreign, None),
            Err(EnvironmentError::UnknownEntity(foreign.into()))
        );
        assert_eq!(
            env.remove_object(foreign),
            Err(EnvironmentError::UnknownEntity(foreign.into()))
        );
    }

    #[test]
    fn test_random_placement_stays_inside_space() {
        let mut env = corridor(4);
        for _ in 0..10 {
            env.add_thing(Marker, None).unwrap();
        }
        let walker = env.add_agent(Walker, None).unwrap();
        for location in env.get_objects(None).values() {
            assert!(env.space().contains(location));
        }
        assert!(env.world().location_of(walker).is_some());
    }

    #[test]
    fn test_no_random_location_in_empty_interval() {
        let mut env = Environment::new(Space::new(vec![0..0]).unwrap(), Corridor);
        assert_eq!(
            env.add_thing(Marker, None),
            Err(EnvironmentError::NoRandomLocation("(0..0)".to_string()))
        );
    }

    #[test]
    fn test_agents_take_turns_in_insertion_order() {
        let mut env = corridor(10);
        let recorder = Rc::new(RefCell::new(TurnRecorder::default()));
        env.add_observer(Rc::clone(&recorder));

        let first = env.add_agent(Walker, Some(Location::from([5]))).unwrap();
        let second = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        env.step_n(2).unwrap();

        let recorder = recorder.borrow();
        assert_eq!(recorder.added, vec![first, second]);
        assert_eq!(recorder.acted, vec![first, second, first, second]);
    }

    #[test]
    fn test_action_tracker_records_actions() {
        let mut env = corridor(5);
        let tracker = Rc::new(RefCell::new(ActionTracker::new()));
        env.add_observer(Rc::clone(&tracker));
        env.add_thing(Marker, Some(Location::from([2]))).unwrap();
        env.add_agent(Counter::default(), Some(Location::from([0])))
            .unwrap();

        env.step_n(4).unwrap();

        assert_eq!(tracker.borrow().actions(), "forward, forward, wait, wait");
        assert_eq!(tracker.borrow().len(), 4);
    }

    #[test]
    fn test_dead_agents_do_not_act() {
        let mut env = corridor(5);
        let seen = Rc::new(RefCell::new(0));
        let counter = env
            .add_agent(
                Counter {
                    seen: Rc::clone(&seen),
                },
                Some(Location::from([0])),
            )
            .unwrap();
        let judge = env.add_judge(DistanceJudge).unwrap();

        env.step().unwrap();
        env.set_alive(counter, false).unwrap();
        env.step_n(3).unwrap();

        assert_eq!(*seen.borrow(), 1);
        assert_eq!(env.is_alive(counter), Some(false));
        assert_abs_diff_eq!(env.get_scores(counter).unwrap()[&judge], 1.0);
        assert!(env.is_done());
    }

    #[test]
    fn test_step_until_done() {
        let mut env = corridor(5);
        assert!(env.is_done());
        assert_eq!(env.step_until_done(10).unwrap(), 0);

        let walker = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        assert!(!env.is_done());
        assert_eq!(env.step_until_done(3).unwrap(), 3);

        env.set_alive(walker, false).unwrap();
        assert_eq!(env.step_until_done(3).unwrap(), 0);
    }

    #[test]
    fn test_remove_agent_drops_its_scores() {
        let mut env = corridor(5);
        let walker = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        env.add_judge(DistanceJudge).unwrap();
        env.step().unwrap();

        assert_eq!(env.remove_object(walker), Ok(true));
        assert_eq!(env.remove_object(walker), Ok(false));
        assert!(env.get_scores(walker).is_none());
        assert!(env.get_objects(None).is_empty());
        assert!(env.agents().is_empty());

        // Coming back starts from an empty row.
        env.add_object(walker, Some(Location::from([0]))).unwrap();
        assert!(env.get_scores(walker).unwrap().is_empty());
    }

    #[test]
    fn test_remove_judge_and_thing() {
        let mut env = corridor(5);
        let walker = env.add_agent(Walker, Some(Location::from([0]))).unwrap();
        let judge = env.add_judge(DistanceJudge).unwrap();
        let marker = env.add_thing(Marker, Some(Location::from([3]))).unwrap();

        assert_eq!(env.remove_object(judge), Ok(true));
        assert_eq!(env.remove_object(judge), Ok(false));
        assert!(env.get_scores(walker).unwrap().is_empty());

        assert_eq!(env.remove_object(marker), Ok(true));
        assert_eq!(env.get_objects(None).len(), 1);
    }
}
