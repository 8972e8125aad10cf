use crate::room::room::Room;
use crate::room::room_command::{Outbox, RoomCommand};
use crate::room::room_registry::RoomRegistry;
use coderoom_core::{ClientEvent, ConnectionId, RoomId, ServerEvent};
use dashmap::DashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use tokio::time::{Instant, MissedTickBehavior};
use tracing::{debug, error, info};

struct RoomHandle {
    commands: mpsc::UnboundedSender<RoomCommand>,
    members: usize,
    last_active: Instant,
}

impl RoomHandle {
    fn send(&mut self, cmd: RoomCommand) -> bool {
        self.last_active = Instant::now();
        self.commands.send(cmd).is_ok()
    }
}

struct GatewayInner {
    registry: Arc<RoomRegistry>,
    rooms: DashMap<RoomId, RoomHandle>,
    bindings: DashMap<ConnectionId, RoomId>,
}

/// Publish/subscribe hub between connections and room tasks.
///
/// Commands are queued while the room's map entry is held, so the order in
/// which the gateway accepts events for a room is the order its task applies them.
#[derive(Clone)]
pub struct SyncGateway {
    inner: Arc<GatewayInner>,
}

impl SyncGateway {
    pub fn new(registry: Arc<RoomRegistry>) -> Self {
        Self {
            inner: Arc::new(GatewayInner {
                registry,
                rooms: DashMap::new(),
                bindings: DashMap::new(),
            }),
        }
    }

    pub fn registry(&self) -> &Arc<RoomRegistry> {
        &self.inner.registry
    }

    /// Routes one decoded client frame.
    pub fn handle_event(&self, connection_id: ConnectionId, event: ClientEvent, outbox: &Outbox) {
        match event {
            ClientEvent::JoinRoom { room_id } => self.join(connection_id, room_id, outbox.clone()),
            ClientEvent::CodeChange { room_id, code } => {
                self.dispatch(
                    &room_id,
                    RoomCommand::CodeChange {
                        connection_id,
                        code,
                    },
                );
            }
            ClientEvent::LanguageChange { room_id, language } => {
                self.dispatch(
                    &room_id,
                    RoomCommand::LanguageChange {
                        connection_id,
                        language,
                    },
                );
            }
            ClientEvent::OutputChange { room_id, output } => {
                self.dispatch(
                    &room_id,
                    RoomCommand::OutputChange {
                        connection_id,
                        output,
                    },
                );
            }
        }
    }

    /// Binds the connection to `room_id`, creating the room on first join.
    /// A connection bound elsewhere is unsubscribed from its previous room first.
    pub fn join(&self, connection_id: ConnectionId, room_id: RoomId, outbox: Outbox) {
        let rejoin = match self.inner.bindings.insert(connection_id, room_id.clone()) {
            Some(previous) if previous == room_id => true,
            Some(previous) => {
                debug!("{} switching from '{}' to '{}'", connection_id, previous, room_id);
                self.leave_room(connection_id, &previous);
                false
            }
            None => false,
        };

        let mut handle = self
            .inner
            .rooms
            .entry(room_id.clone())
            .or_insert_with(|| self.spawn_room(&room_id));

        if !rejoin {
            handle.members += 1;
        }
        if !handle.send(RoomCommand::Join {
            connection_id,
            outbox,
        }) {
            error!("Room '{}' task is gone, join of {} lost", room_id, connection_id);
        }
    }

    /// Releases the connection's binding, if any.
    pub fn disconnect(&self, connection_id: ConnectionId) {
        if let Some((_, room_id)) = self.inner.bindings.remove(&connection_id) {
            self.leave_room(connection_id, &room_id);
        }
    }

    /// Delivers `event` to every member of the room. Returns false if the room does not exist.
    pub fn broadcast(&self, room_id: &RoomId, event: ServerEvent) -> bool {
        self.dispatch(room_id, RoomCommand::Broadcast { event })
    }

    pub fn bound_room(&self, connection_id: ConnectionId) -> Option<RoomId> {
        self.inner
            .bindings
            .get(&connection_id)
            .map(|room| room.clone())
    }

    pub fn member_count(&self, room_id: &RoomId) -> usize {
        self.inner
            .rooms
            .get(room_id)
            .map(|handle| handle.members)
            .unwrap_or(0)
    }

    pub fn room_count(&self) -> usize {
        self.inner.rooms.len()
    }

    /// Drops rooms that have had no members and no traffic for `ttl`.
    /// Their tasks stop once the queued commands drain.
    pub fn evict_idle(&self, ttl: Duration) -> usize {
        let registry = &self.inner.registry;
        let mut evicted = 0;

        self.inner.rooms.retain(|room_id, handle| {
            let idle = handle.members == 0 && handle.last_active.elapsed() >= ttl;
            if idle {
                registry.remove(room_id);
                evicted += 1;
                info!("Evicting idle room '{}'", room_id);
            }
            !idle
        });

        evicted
    }

    pub fn spawn_idle_sweeper(&self, ttl: Duration) -> JoinHandle<()> {
        let gateway = self.clone();
        let period = (ttl / 2).max(Duration::from_secs(1));

        tokio::spawn(async move {
            let mut ticker = tokio::time::interval(period);
            ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

            loop {
                ticker.tick().await;
                let evicted = gateway.evict_idle(ttl);
                if evicted > 0 {
                    debug!("Idle sweep removed {} rooms", evicted);
                }
            }
        })
    }

    fn spawn_room(&self, room_id: &RoomId) -> RoomHandle {
        info!("Creating new room: {}", room_id);
        let (tx, rx) = mpsc::unbounded_channel();

        let room = Room::new(room_id.clone(), self.inner.registry.clone(), rx);
        tokio::spawn(room.run());

        RoomHandle {
            commands: tx,
            members: 0,
            last_active: Instant::now(),
        }
    }

    fn leave_room(&self, connection_id: ConnectionId, room_id: &RoomId) {
        let Some(mut handle) = self.inner.rooms.get_mut(room_id) else {
            return;
        };
        handle.members = handle.members.saturating_sub(1);
        handle.send(RoomCommand::Leave { connection_id });
    }

    fn dispatch(&self, room_id: &RoomId, cmd: RoomCommand) -> bool {
        let Some(mut handle) = self.inner.rooms.get_mut(room_id) else {
            debug!("Dropping command for unknown room '{}'", room_id);
            return false;
        };
        handle.send(cmd)
    }
}
