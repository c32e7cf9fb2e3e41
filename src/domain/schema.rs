//! Entity kinds and the schema table driving the generic CRUD service.
//!
//! Every resource exposed by the API follows the exact same five-operation
//! contract; the only differences are which body fields are required on
//! create, which fields an update may not touch, and whether the resource is
//! nested under a parent. Those differences live here, as data, so the CRUD
//! logic exists exactly once.

use std::fmt;

/// The six entity kinds managed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    State,
    City,
    Amenity,
    Place,
    Review,
    User,
}

impl EntityKind {
    /// All kinds, in the order `/stats` reports them.
    pub const ALL: [EntityKind; 6] = [
        EntityKind::Amenity,
        EntityKind::City,
        EntityKind::Place,
        EntityKind::Review,
        EntityKind::State,
        EntityKind::User,
    ];

    /// Canonical kind name, used as the storage-key prefix in the file store.
    pub fn as_str(self) -> &'static str {
        match self {
            EntityKind::State => "State",
            EntityKind::City => "City",
            EntityKind::Amenity => "Amenity",
            EntityKind::Place => "Place",
            EntityKind::Review => "Review",
            EntityKind::User => "User",
        }
    }

    /// Parses a canonical kind name. Inverse of [`EntityKind::as_str`].
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "State" => Some(EntityKind::State),
            "City" => Some(EntityKind::City),
            "Amenity" => Some(EntityKind::Amenity),
            "Place" => Some(EntityKind::Place),
            "Review" => Some(EntityKind::Review),
            "User" => Some(EntityKind::User),
            _ => None,
        }
    }
}

impl fmt::Display for EntityKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A required foreign-key relation to a parent entity.
///
/// Nested creates verify the parent exists (404 otherwise) and inject
/// `foreign_key` from the path parameter; nested lists filter on it.
#[derive(Debug, Clone, Copy)]
pub struct ParentRelation {
    pub kind: EntityKind,
    pub foreign_key: &'static str,
}

/// Per-kind CRUD descriptor.
///
/// `id`, `created_at`, and `updated_at` are implicitly immutable for every
/// kind; `immutable_fields` lists only the kind-specific additions (foreign
/// keys, and `email` for users).
#[derive(Debug)]
pub struct EntitySchema {
    pub kind: EntityKind,
    pub required_fields: &'static [&'static str],
    pub immutable_fields: &'static [&'static str],
    pub parent: Option<ParentRelation>,
}

pub static STATE: EntitySchema = EntitySchema {
    kind: EntityKind::State,
    required_fields: &["name"],
    immutable_fields: &[],
    parent: None,
};

pub static CITY: EntitySchema = EntitySchema {
    kind: EntityKind::City,
    required_fields: &["name"],
    immutable_fields: &["state_id"],
    parent: Some(ParentRelation {
        kind: EntityKind::State,
        foreign_key: "state_id",
    }),
};

pub static AMENITY: EntitySchema = EntitySchema {
    kind: EntityKind::Amenity,
    required_fields: &["name"],
    immutable_fields: &[],
    parent: None,
};

pub static USER: EntitySchema = EntitySchema {
    kind: EntityKind::User,
    required_fields: &["email", "password"],
    immutable_fields: &["email"],
    parent: None,
};

// user_id is required in the body but its referent is not verified; only the
// parent relation from the path is checked.
pub static PLACE: EntitySchema = EntitySchema {
    kind: EntityKind::Place,
    required_fields: &["user_id", "name"],
    immutable_fields: &["user_id", "city_id"],
    parent: Some(ParentRelation {
        kind: EntityKind::City,
        foreign_key: "city_id",
    }),
};

pub static REVIEW: EntitySchema = EntitySchema {
    kind: EntityKind::Review,
    required_fields: &["user_id", "text"],
    immutable_fields: &["user_id", "place_id"],
    parent: Some(ParentRelation {
        kind: EntityKind::Place,
        foreign_key: "place_id",
    }),
};
