use crate::room::room_command::{Outbox, RoomCommand};
use crate::room::room_registry::RoomRegistry;
use coderoom_core::{ConnectionId, RoomId, ServerEvent};
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::mpsc;
use tracing::{debug, info, warn};

/// Task that owns one room's membership and applies its commands in order.
///
/// Registry writes and the matching relay happen inside a single command, so
/// every member sees edits in the order the registry accepted them.
pub struct Room {
    room_id: RoomId,
    registry: Arc<RoomRegistry>,
    members: HashMap<ConnectionId, Outbox>,
    command_rx: mpsc::UnboundedReceiver<RoomCommand>,
}

impl Room {
    pub fn new(
        room_id: RoomId,
        registry: Arc<RoomRegistry>,
        command_rx: mpsc::UnboundedReceiver<RoomCommand>,
    ) -> Self {
        Self {
            room_id,
            registry,
            members: HashMap::new(),
            command_rx,
        }
    }

    pub async fn run(mut self) {
        info!("Room '{}' event loop started", self.room_id);

        while let Some(cmd) = self.command_rx.recv().await {
            self.handle_command(cmd);
        }

        info!("Command channel closed. Room '{}' shut down.", self.room_id);
    }

    fn handle_command(&mut self, cmd: RoomCommand) {
        match cmd {
            RoomCommand::Join {
                connection_id,
                outbox,
            } => {
                let state = self.registry.get_or_create(&self.room_id);
                info!("{} joined room '{}'", connection_id, self.room_id);

                let sync = ServerEvent::Sync {
                    code: state.code,
                    language: state.language,
                };
                if outbox.send(sync).is_err() {
                    warn!("{} left before sync was delivered", connection_id);
                }
                self.members.insert(connection_id, outbox);
            }

            RoomCommand::Leave { connection_id } => {
                if self.members.remove(&connection_id).is_some() {
                    info!("{} left room '{}'", connection_id, self.room_id);
                }
            }

            RoomCommand::CodeChange {
                connection_id,
                code,
            } => {
                self.registry.set_code(&self.room_id, code.clone());
                self.relay(Some(connection_id), ServerEvent::CodeChange(code));
            }

            RoomCommand::LanguageChange {
                connection_id,
                language,
            } => {
                self.registry.set_language(&self.room_id, language.clone());
                self.relay(Some(connection_id), ServerEvent::LanguageChange(language));
            }

            RoomCommand::OutputChange {
                connection_id,
                output,
            } => {
                self.relay(Some(connection_id), ServerEvent::OutputChange(output));
            }

            RoomCommand::Broadcast { event } => {
                self.relay(None, event);
            }
        }
    }

    /// Sends `event` to every member except `sender`.
    fn relay(&self, sender: Option<ConnectionId>, event: ServerEvent) {
        for (connection_id, outbox) in &self.members {
            if Some(*connection_id) == sender {
                continue;
            }
            // A closed outbox means the socket is going away; its Leave is queued behind us.
            if outbox.send(event.clone()).is_err() {
                debug!("Skipping closed connection {}", connection_id);
            }
        }
    }
}
