use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::marker::PhantomData;
use thiserror::Error;
use uuid::Uuid;

#[derive(Error, Debug, PartialEq)]
pub enum PlayerMapError {
    #[error("Player {0} is declared more than once")]
    DuplicatePlayer(PlayerId),
}

#[derive(Serialize, Deserialize, Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PlayerId(Uuid);

impl PlayerId {
    pub fn new(uuid: Uuid) -> Self {
        PlayerId(uuid)
    }

    pub fn uuid(&self) -> Uuid {
        self.0
    }
}

impl From<Uuid> for PlayerId {
    fn from(uuid: Uuid) -> Self {
        PlayerId(uuid)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

// Player-keyed values kept in the order the players were declared. The first
// declared player wins ties, so a hashed map can't be used here.
#[derive(Clone, Debug, PartialEq)]
pub struct PlayerMap<T>(Vec<(PlayerId, T)>);

impl<T> PlayerMap<T> {
    pub fn new(entries: Vec<(PlayerId, T)>) -> Result<Self, PlayerMapError> {
        for (i, (id, _)) in entries.iter().enumerate() {
            if entries[..i].iter().any(|(other, _)| other == id) {
                return Err(PlayerMapError::DuplicatePlayer(*id));
            }
        }
        Ok(PlayerMap(entries))
    }

    pub fn get(&self, player: &PlayerId) -> Option<&T> {
        self.0
            .iter()
            .find(|(id, _)| id == player)
            .map(|(_, value)| value)
    }

    pub fn contains(&self, player: &PlayerId) -> bool {
        self.get(player).is_some()
    }

    pub fn players(&self) -> impl Iterator<Item = PlayerId> + '_ {
        self.0.iter().map(|(id, _)| *id)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&PlayerId, &T)> {
        self.0.iter().map(|(id, value)| (id, value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    // Same key set, ignoring declaration order
    pub fn same_players<U>(&self, other: &PlayerMap<U>) -> bool {
        self.len() == other.len() && self.players().all(|id| other.contains(&id))
    }
}

impl<T: Serialize> Serialize for PlayerMap<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (id, value) in &self.0 {
            map.serialize_entry(id, value)?;
        }
        map.end()
    }
}

struct PlayerMapVisitor<T>(PhantomData<T>);

impl<'de, T: Deserialize<'de>> Visitor<'de> for PlayerMapVisitor<T> {
    type Value = PlayerMap<T>;

    fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "a map keyed by player UUIDs")
    }

    fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
        let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(2));
        while let Some((id, value)) = access.next_entry::<PlayerId, T>()? {
            entries.push((id, value));
        }
        PlayerMap::new(entries).map_err(serde::de::Error::custom)
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for PlayerMap<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        deserializer.deserialize_map(PlayerMapVisitor(PhantomData))
    }
}
