use std::fmt::Debug;
use std::time::Duration;

use super::Sequence;

/// A named animation channel with at most one live [`Sequence`].
///
/// A track owns every sequence that may write its render channel (e.g. the
/// icon motions, or the ripple/emit-point effect), keyed by `K`. Playing a
/// sequence cancels whichever sequence currently occupies the track, so two
/// sequences never write the same geometry fields in the same frame.
pub struct Track<K, G> {
    name: &'static str,
    slots: Vec<(K, Sequence<G>)>,
    occupant: Option<K>,
}

impl<K: Copy + Eq + Debug, G> Track<K, G> {
    pub fn new(name: &'static str) -> Self {
        Self {
            name,
            slots: Vec::new(),
            occupant: None,
        }
    }

    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Register `sequence` under `key`, replacing (and returning) any previous
    /// one. A replaced sequence that was running is halted without hooks.
    pub fn insert(&mut self, key: K, sequence: Sequence<G>) -> Option<Sequence<G>> {
        if let Some(slot) = self.slots.iter_mut().find(|(k, _)| *k == key) {
            let mut previous = std::mem::replace(&mut slot.1, sequence);
            if previous.halt() {
                self.occupant = None;
            }
            return Some(previous);
        }
        self.slots.push((key, sequence));
        None
    }

    pub fn contains(&self, key: K) -> bool {
        self.slots.iter().any(|(k, _)| *k == key)
    }

    pub fn get(&self, key: K) -> Option<&Sequence<G>> {
        self.slots.iter().find(|(k, _)| *k == key).map(|(_, s)| s)
    }

    fn get_mut(&mut self, key: K) -> Option<&mut Sequence<G>> {
        self.slots.iter_mut().find(|(k, _)| *k == key).map(|(_, s)| s)
    }

    /// The key of the running sequence, if any
    pub fn occupant(&self) -> Option<K> {
        self.occupant
            .filter(|key| self.get(*key).is_some_and(Sequence::is_running))
    }

    pub fn is_running(&self) -> bool {
        self.occupant().is_some()
    }

    pub fn is_playing(&self, key: K) -> bool {
        self.occupant() == Some(key)
    }

    /// Start the sequence registered under `key`, cancelling the current
    /// occupant first. Returns false if no such sequence is registered.
    pub fn play(&mut self, key: K, target: &mut G) -> bool {
        if !self.contains(key) {
            log::debug!("{}: no sequence registered for {:?}", self.name, key);
            return false;
        }
        self.cancel(target);
        self.occupant = Some(key);
        if let Some(sequence) = self.get_mut(key) {
            sequence.start(target);
        }
        true
    }

    /// Cancel the running occupant. Returns whether anything was cancelled.
    pub fn cancel(&mut self, target: &mut G) -> bool {
        let Some(key) = self.occupant.take() else {
            return false;
        };
        self.get_mut(key)
            .is_some_and(|sequence| sequence.cancel(target))
    }

    /// Stop the running occupant without firing its hooks
    pub fn halt(&mut self) -> bool {
        let Some(key) = self.occupant.take() else {
            return false;
        };
        self.get_mut(key).is_some_and(Sequence::halt)
    }

    /// Advance the occupant by `dt`. Returns true while it is still running.
    pub fn tick(&mut self, dt: Duration, target: &mut G) -> bool {
        let Some(key) = self.occupant else {
            return false;
        };
        let running = self
            .get_mut(key)
            .is_some_and(|sequence| sequence.tick(dt, target));
        if !running {
            self.occupant = None;
        }
        running
    }
}

impl<K: Debug, G> Debug for Track<K, G> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Track")
            .field("name", &self.name)
            .field("occupant", &self.occupant)
            .field("slots", &self.slots.len())
            .finish()
    }
}
