//! Turn clock and the food counter that consumes it.
//!
//! The clock only emits [`GameEvent::TurnAdvanced`]. [`FoodSupply`] is one
//! subscriber: it spends food every turn and reports the new total.

use crate::config::FoodSupplyParams;
use crate::events::{EventQueue, GameEvent};
use tracing::{debug, info};

/// Counts player turns
#[derive(Debug, Clone, Default)]
pub struct TurnClock {
    pub turn: u64,
}

impl TurnClock {
    pub fn new() -> Self {
        Self { turn: 0 }
    }

    /// Advance one turn and announce it
    pub fn advance(&mut self, events: &mut EventQueue) {
        self.turn += 1;
        events.push(GameEvent::TurnAdvanced { turn: self.turn });
    }
}

/// The player's single consumable counter
#[derive(Debug, Clone)]
pub struct FoodSupply {
    food: i32,
    per_turn: i32,
    points_per_variant: Vec<i32>,
    starved: bool,
}

impl FoodSupply {
    pub fn new(params: &FoodSupplyParams) -> Self {
        Self {
            food: params.start,
            per_turn: params.per_turn,
            points_per_variant: params.points_per_variant.clone(),
            starved: params.start <= 0,
        }
    }

    pub fn food(&self) -> i32 {
        self.food
    }

    pub fn is_starved(&self) -> bool {
        self.starved
    }

    /// React to one event, returning the events it causes
    pub fn apply(&mut self, event: &GameEvent) -> Vec<GameEvent> {
        match *event {
            GameEvent::TurnAdvanced { turn } => self.spend(turn),
            _ => Vec::new(),
        }
    }

    fn spend(&mut self, turn: u64) -> Vec<GameEvent> {
        if self.starved || self.per_turn == 0 {
            return Vec::new();
        }
        self.food -= self.per_turn;
        let mut out = vec![GameEvent::FoodChanged {
            food: self.food,
            delta: -self.per_turn,
        }];
        if self.food <= 0 {
            info!(turn, "food ran out");
            self.starved = true;
            out.push(GameEvent::Starved { turn });
        }
        out
    }

    /// Eat a food item of the given variant. Unknown variants restore the last listed amount.
    pub fn pick_up(&mut self, variant: usize) -> GameEvent {
        let points = self
            .points_per_variant
            .get(variant)
            .or(self.points_per_variant.last())
            .copied()
            .unwrap_or(0);
        self.food += points;
        if self.food > 0 {
            self.starved = false;
        }
        debug!(variant, points, food = self.food, "picked up food");
        GameEvent::FoodChanged {
            food: self.food,
            delta: points,
        }
    }

    /// Drain the queue through the counter. Returns every drained event, each
    /// followed by the events it caused.
    pub fn pump(&mut self, events: &mut EventQueue) -> Vec<GameEvent> {
        let pending: Vec<GameEvent> = events.drain().collect();
        let mut out = Vec::with_capacity(pending.len() * 2);
        for event in pending {
            let caused = self.apply(&event);
            out.push(event);
            out.extend(caused);
        }
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params(start: i32) -> FoodSupplyParams {
        FoodSupplyParams {
            start,
            per_turn: 1,
            points_per_variant: vec![10, 20],
        }
    }

    #[test]
    fn test_clock_emits_turn_events() {
        let mut clock = TurnClock::new();
        let mut events = EventQueue::new();
        clock.advance(&mut events);
        clock.advance(&mut events);
        let drained: Vec<_> = events.drain().collect();
        assert_eq!(
            drained,
            vec![GameEvent::TurnAdvanced { turn: 1 }, GameEvent::TurnAdvanced { turn: 2 }]
        );
    }

    #[test]
    fn test_food_drops_each_turn() {
        let mut supply = FoodSupply::new(&params(5));
        let out = supply.apply(&GameEvent::TurnAdvanced { turn: 1 });
        assert_eq!(out, vec![GameEvent::FoodChanged { food: 4, delta: -1 }]);
        assert!(supply.apply(&GameEvent::LevelStarted { level: 1, board_size: 5 }).is_empty());
        assert_eq!(supply.food(), 4);
    }

    #[test]
    fn test_starving_is_reported_once() {
        let mut supply = FoodSupply::new(&params(1));
        let out = supply.apply(&GameEvent::TurnAdvanced { turn: 3 });
        assert!(out.contains(&GameEvent::Starved { turn: 3 }));
        assert!(supply.is_starved());
        assert!(supply.apply(&GameEvent::TurnAdvanced { turn: 4 }).is_empty());
    }

    #[test]
    fn test_pick_up_by_variant() {
        let mut supply = FoodSupply::new(&params(0));
        assert!(supply.is_starved());
        assert_eq!(supply.pick_up(1), GameEvent::FoodChanged { food: 20, delta: 20 });
        assert!(!supply.is_starved());
        // unknown variant uses the last listed amount
        assert_eq!(supply.pick_up(7), GameEvent::FoodChanged { food: 40, delta: 20 });
    }

    #[test]
    fn test_pump_runs_clock_events_through_supply() {
        let mut clock = TurnClock::new();
        let mut supply = FoodSupply::new(&params(10));
        let mut events = EventQueue::new();
        for _ in 0..3 {
            clock.advance(&mut events);
        }
        let processed = supply.pump(&mut events);
        assert_eq!(supply.food(), 7);
        assert!(events.is_empty());
        assert_eq!(processed.len(), 6);
        assert_eq!(processed[4], GameEvent::TurnAdvanced { turn: 3 });
        assert_eq!(processed[5], GameEvent::FoodChanged { food: 7, delta: -1 });

        // already-processed turns are not charged twice
        assert!(supply.pump(&mut events).is_empty());
        assert_eq!(supply.food(), 7);
    }
}
