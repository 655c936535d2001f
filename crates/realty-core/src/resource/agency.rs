use super::{FieldSpec, InputKind, RecordId, Resource, ResourceForm, ResourceKind};
use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// A real-estate agency.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Agency {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub address: String,
}

/// Create/update body for [`Agency`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgencyDraft {
    pub name: String,
    pub address: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct AgencyForm {
    pub name: String,
    pub address: String,
}

impl ResourceForm for AgencyForm {
    type Draft = AgencyDraft;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            key: "name",
            label: "Name",
            input: InputKind::Text,
        },
        FieldSpec {
            key: "address",
            label: "Address",
            input: InputKind::Text,
        },
    ];

    fn value(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            "address" => &self.address,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "name" => self.name = value,
            "address" => self.address = value,
            _ => {}
        }
    }

    fn to_draft(&self) -> Result<AgencyDraft, FormError> {
        Ok(AgencyDraft {
            name: self.name.clone(),
            address: self.address.clone(),
        })
    }
}

impl Resource for Agency {
    const KIND: ResourceKind = ResourceKind::Agencies;
    type Draft = AgencyDraft;
    type Form = AgencyForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> AgencyForm {
        AgencyForm {
            name: self.name.clone(),
            address: self.address.clone(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn card_details(&self) -> Vec<(&'static str, String)> {
        vec![("Address", self.address.clone())]
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("Name", self.name.clone()), ("Address", self.address.clone())]
    }
}
