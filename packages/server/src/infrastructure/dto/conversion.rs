//! Conversion logic between DTOs and domain types.

use crate::domain::{CanvasPoint, ClientEvent, Color, Nickname, Participant, ServerEvent};
use crate::infrastructure::dto::websocket as dto;

// ========================================
// DTO → Domain
// ========================================

impl From<dto::ClientFrame> for ClientEvent {
    fn from(frame: dto::ClientFrame) -> Self {
        match frame {
            dto::ClientFrame::Login { nickname } => ClientEvent::Login {
                nickname: Nickname::new(nickname),
            },
            dto::ClientFrame::SendMessage { message } => ClientEvent::SendMessage { message },
            dto::ClientFrame::Moving { x, y } => ClientEvent::Moving(CanvasPoint::new(x, y)),
            dto::ClientFrame::Painting { x, y } => ClientEvent::Painting(CanvasPoint::new(x, y)),
            dto::ClientFrame::Filling { color } => ClientEvent::Filling {
                color: Color::new(color),
            },
            dto::ClientFrame::Ping => ClientEvent::PresencePing,
        }
    }
}

// ========================================
// Domain → DTO
// ========================================

impl From<Participant> for dto::ParticipantInfo {
    fn from(model: Participant) -> Self {
        Self {
            id: model.connection_id.to_string(),
            nickname: model.nickname.into_string(),
            points: model.points,
        }
    }
}

impl From<ServerEvent> for dto::ServerFrame {
    fn from(event: ServerEvent) -> Self {
        match event {
            ServerEvent::NewUser { nickname } => dto::ServerFrame::NewUser {
                nickname: nickname.into_string(),
            },
            ServerEvent::ReceiveMessage { message, nickname } => dto::ServerFrame::ReceiveMessage {
                message,
                nickname: nickname.into_string(),
            },
            ServerEvent::Disconnected { nickname } => dto::ServerFrame::Disconnected {
                nickname: nickname.into_string(),
            },
            ServerEvent::Moved(CanvasPoint { x, y }) => dto::ServerFrame::Moved { x, y },
            ServerEvent::Painted(CanvasPoint { x, y }) => dto::ServerFrame::Painted { x, y },
            ServerEvent::Filled { color } => dto::ServerFrame::Filled {
                color: color.into_string(),
            },
            ServerEvent::Pong { sockets } => dto::ServerFrame::Pong {
                sockets: sockets.into_iter().map(Into::into).collect(),
            },
        }
    }
}
