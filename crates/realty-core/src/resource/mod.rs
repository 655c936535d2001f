//! Resource types managed by the client.
//!
//! Each of the three entity types (agencies, realtors, properties) is a flat
//! record with a server-assigned id. The [`Resource`] trait ties a record to
//! its request body ([`Resource::Draft`]) and its editable form
//! ([`Resource::Form`]) so panels, the REST client and the CLI can all be
//! written once and instantiated per type.

mod agency;
mod property;
mod realtor;

pub use agency::{Agency, AgencyDraft, AgencyForm};
pub use property::{Property, PropertyDraft, PropertyForm};
pub use realtor::{Realtor, RealtorDraft, RealtorForm};

use crate::error::FormError;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Server-assigned record identity.
pub type RecordId = i64;

/// The closed set of resource collections exposed by the API.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum ResourceKind {
    #[default]
    Agencies,
    Realtors,
    Properties,
}

impl ResourceKind {
    pub const ALL: [ResourceKind; 3] = [
        ResourceKind::Agencies,
        ResourceKind::Realtors,
        ResourceKind::Properties,
    ];

    /// Collection path segment, e.g. `agencies` in `/api/agencies`.
    pub fn path(self) -> &'static str {
        match self {
            ResourceKind::Agencies => "agencies",
            ResourceKind::Realtors => "realtors",
            ResourceKind::Properties => "properties",
        }
    }

    /// Lowercase singular noun used in messages ("agency").
    pub fn singular(self) -> &'static str {
        match self {
            ResourceKind::Agencies => "agency",
            ResourceKind::Realtors => "realtor",
            ResourceKind::Properties => "property",
        }
    }

    /// Lowercase plural noun used in messages ("agencies").
    pub fn plural(self) -> &'static str {
        self.path()
    }

    /// Capitalized singular noun ("Agency").
    pub fn noun(self) -> &'static str {
        match self {
            ResourceKind::Agencies => "Agency",
            ResourceKind::Realtors => "Realtor",
            ResourceKind::Properties => "Property",
        }
    }

    /// Tab label ("Agencies").
    pub fn label(self) -> &'static str {
        match self {
            ResourceKind::Agencies => "Agencies",
            ResourceKind::Realtors => "Realtors",
            ResourceKind::Properties => "Properties",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            ResourceKind::Agencies => "🏢",
            ResourceKind::Realtors => "👤",
            ResourceKind::Properties => "🏘️",
        }
    }
}

impl fmt::Display for ResourceKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.path())
    }
}

impl FromStr for ResourceKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "agencies" | "agency" => Ok(ResourceKind::Agencies),
            "realtors" | "realtor" => Ok(ResourceKind::Realtors),
            "properties" | "property" => Ok(ResourceKind::Properties),
            other => Err(format!(
                "unknown resource '{}' (expected agencies, realtors or properties)",
                other
            )),
        }
    }
}

/// How a form field is edited.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputKind {
    Text,
    Number,
}

/// Static description of one editable field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FieldSpec {
    pub key: &'static str,
    pub label: &'static str,
    pub input: InputKind,
}

/// Raw, user-editable form contents for one resource type.
///
/// Values are kept as text exactly as typed; conversion to a request body
/// happens in [`ResourceForm::to_draft`].
pub trait ResourceForm: Clone + Default + PartialEq + fmt::Debug + 'static {
    type Draft;

    /// Fields in display order.
    const FIELDS: &'static [FieldSpec];

    /// Current text of a field. Unknown keys read as empty.
    fn value(&self, key: &str) -> &str;

    /// Replace the text of a field. Unknown keys are ignored.
    fn set_value(&mut self, key: &str, value: String);

    fn to_draft(&self) -> Result<Self::Draft, FormError>;
}

/// A persisted record of one of the managed collections.
pub trait Resource: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned + 'static {
    const KIND: ResourceKind;

    /// Request body for create and update: the record without its id.
    type Draft: Clone + PartialEq + fmt::Debug + Serialize + DeserializeOwned;

    type Form: ResourceForm<Draft = Self::Draft>;

    fn id(&self) -> RecordId;

    /// Form prefilled from this record, used when editing.
    fn to_form(&self) -> Self::Form;

    /// Headline for list cards.
    fn title(&self) -> String;

    /// Extra lines shown on list cards below the id.
    fn card_details(&self) -> Vec<(&'static str, String)>;

    /// All data fields, formatted for display, in declaration order.
    fn fields(&self) -> Vec<(&'static str, String)>;
}
