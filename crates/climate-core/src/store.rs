//! Authoritative per-room readings.
//!
//! [`RoomStore`] holds the canonical values for the three rooms. Every
//! successful [`RoomStore::set_room`] publishes one [`RoomEvent`] for the
//! room that changed, so a display can refresh that room and leave the
//! others alone.
//!
//! The event channel is a `tokio::sync::broadcast` channel used without a
//! runtime: `send` and `try_recv` never block.

use tokio::sync::broadcast::{self, error::TryRecvError};
use tracing::{debug, warn};

use climate_types::{ROOM_COUNT, RoomId, RoomReadings};

use crate::error::{Error, Result};

/// Default capacity of the change channel.
const EVENT_CAPACITY: usize = 16;

/// Notification published after a room update.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoomEvent {
    /// All four parameters of `room` were overwritten.
    Updated {
        room: RoomId,
        readings: RoomReadings,
    },
}

impl RoomEvent {
    /// Room the event refers to.
    pub fn room(&self) -> RoomId {
        match self {
            RoomEvent::Updated { room, .. } => *room,
        }
    }
}

/// Receiving side of a store subscription.
#[derive(Debug)]
pub struct RoomSubscription {
    receiver: broadcast::Receiver<RoomEvent>,
}

impl RoomSubscription {
    /// Take every pending event without waiting.
    ///
    /// If the subscriber fell behind and events were dropped, the lagged
    /// rooms cannot be identified. The pending events are discarded and
    /// exactly one `Updated` event per room is reported from `store`
    /// instead, so a lagged subscriber treats every room as updated.
    pub fn drain(&mut self, store: &RoomStore) -> Vec<RoomEvent> {
        let mut events = Vec::new();
        let mut lagged = false;
        loop {
            match self.receiver.try_recv() {
                Ok(event) => events.push(event),
                Err(TryRecvError::Empty) | Err(TryRecvError::Closed) => break,
                Err(TryRecvError::Lagged(skipped)) => {
                    warn!("Room subscriber lagged by {} events, resyncing", skipped);
                    lagged = true;
                }
            }
        }

        if lagged {
            return store
                .rooms()
                .map(|(room, readings)| RoomEvent::Updated {
                    room,
                    readings: *readings,
                })
                .collect();
        }
        events
    }
}

/// Canonical readings for the three fixed rooms.
#[derive(Debug)]
pub struct RoomStore {
    rooms: [RoomReadings; ROOM_COUNT],
    events: broadcast::Sender<RoomEvent>,
}

impl RoomStore {
    /// Create a store holding the startup defaults.
    pub fn new() -> Self {
        Self::with_rooms(RoomId::ALL.map(RoomReadings::startup))
    }

    /// Create a store with explicit initial readings, in room order.
    pub fn with_rooms(rooms: [RoomReadings; ROOM_COUNT]) -> Self {
        let (events, _) = broadcast::channel(EVENT_CAPACITY);
        Self { rooms, events }
    }

    /// Read one room's parameters.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3.
    pub fn get_room(&self, index: usize) -> Result<RoomReadings> {
        let room = room_id(index)?;
        Ok(self.rooms[room.slot()])
    }

    /// Overwrite all four parameters of one room.
    ///
    /// No range validation is done. Subscribers receive exactly one event
    /// for `index` on success; on error nothing changes and nothing is sent.
    ///
    /// # Errors
    ///
    /// [`crate::Error::InvalidIndex`] when `index` is not 1, 2 or 3.
    pub fn set_room(&mut self, index: usize, readings: RoomReadings) -> Result<()> {
        let room = room_id(index)?;
        self.rooms[room.slot()] = readings;
        debug!(
            "Room {} set to {} °C, {} %, {} Pa, airflow {:?}",
            room, readings.temperature, readings.humidity, readings.pressure, readings.airflow
        );
        // No receivers is fine
        let _ = self.events.send(RoomEvent::Updated { room, readings });
        Ok(())
    }

    /// Readings of a known room.
    pub fn room(&self, room: RoomId) -> &RoomReadings {
        &self.rooms[room.slot()]
    }

    /// Iterate rooms in index order.
    pub fn rooms(&self) -> impl Iterator<Item = (RoomId, &RoomReadings)> {
        RoomId::ALL.into_iter().zip(self.rooms.iter())
    }

    /// Subscribe to room updates made after this call.
    pub fn subscribe(&self) -> RoomSubscription {
        RoomSubscription {
            receiver: self.events.subscribe(),
        }
    }
}

/// Resolve a 1-based room index.
pub(crate) fn room_id(index: usize) -> Result<RoomId> {
    RoomId::try_from(index).map_err(|_| Error::InvalidIndex(index))
}

impl Default for RoomStore {
    fn default() -> Self {
        Self::new()
    }
}
