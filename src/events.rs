//! Game event system for decoupled communication between systems.
//!
//! The level director and the turn clock emit events; consumers such as the
//! food supply or a UI label binding react without tight coupling.

/// Game events that systems can emit and subscribe to
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum GameEvent {
    /// A level finished generating
    LevelStarted { level: u32, board_size: usize },
    /// The previous level's occupants were released
    LevelCleared { level: u32, destroyed: usize },
    /// The turn clock ticked
    TurnAdvanced { turn: u64 },
    /// The food counter changed
    FoodChanged { food: i32, delta: i32 },
    /// Food ran out
    Starved { turn: u64 },
}

/// Simple event queue - events are pushed during update, processed at end of frame
#[derive(Debug, Default)]
pub struct EventQueue {
    events: Vec<GameEvent>,
}

impl EventQueue {
    pub fn new() -> Self {
        Self { events: Vec::new() }
    }

    /// Push an event to be processed later
    pub fn push(&mut self, event: GameEvent) {
        self.events.push(event);
    }

    /// Drain all events for processing
    pub fn drain(&mut self) -> impl Iterator<Item = GameEvent> + '_ {
        self.events.drain(..)
    }

    /// Check if there are pending events
    pub fn is_empty(&self) -> bool {
        self.events.is_empty()
    }

    pub fn len(&self) -> usize {
        self.events.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_drain_empties_queue_in_push_order() {
        let mut queue = EventQueue::new();
        queue.push(GameEvent::TurnAdvanced { turn: 1 });
        queue.push(GameEvent::Starved { turn: 1 });
        assert_eq!(queue.len(), 2);

        let drained: Vec<_> = queue.drain().collect();
        assert_eq!(drained[0], GameEvent::TurnAdvanced { turn: 1 });
        assert_eq!(drained[1], GameEvent::Starved { turn: 1 });
        assert!(queue.is_empty());
    }
}
