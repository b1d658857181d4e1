use actix::prelude::*;
use dashmap::DashMap;
use uuid::Uuid;

/// Pre-serialized frame delivered to every member of a match group.
#[derive(Message, Clone)]
#[rtype(result = "()")]
pub struct Deliver {
    pub payload: String,
}

/// Registry of live observer connections, grouped by match identifier.
///
/// Delivery is fire-and-forget: a slow or dead member never blocks the
/// action that triggered the broadcast.
#[derive(Default)]
pub struct WsRegistry {
    groups: DashMap<String, DashMap<Uuid, Recipient<Deliver>>>,
}

impl WsRegistry {
    pub fn new() -> Self {
        Self {
            groups: DashMap::new(),
        }
    }

    /// Subscribe a connection to a match group. The returned token is what
    /// `leave` needs to remove it again.
    pub fn join(&self, match_id: &str, recipient: Recipient<Deliver>) -> Uuid {
        let token = Uuid::new_v4();
        let group = self
            .groups
            .entry(match_id.to_string())
            .or_insert_with(DashMap::new);
        group.insert(token, recipient);
        token
    }

    pub fn leave(&self, match_id: &str, token: Uuid) {
        let now_empty = match self.groups.get(match_id) {
            Some(group) => {
                group.remove(&token);
                group.is_empty()
            }
            None => return,
        };
        if now_empty {
            self.groups.remove_if(match_id, |_, members| members.is_empty());
        }
    }

    /// Fan a frame out to every member of the match group.
    pub fn broadcast(&self, match_id: &str, payload: &str) {
        if let Some(group) = self.groups.get(match_id) {
            for member in group.iter() {
                let _ = member.value().do_send(Deliver {
                    payload: payload.to_string(),
                });
            }
        }
    }

    /// Number of live members in a match group.
    pub fn group_len(&self, match_id: &str) -> usize {
        self.groups.get(match_id).map_or(0, |group| group.len())
    }
}
