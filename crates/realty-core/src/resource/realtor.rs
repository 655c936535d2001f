use super::{FieldSpec, InputKind, RecordId, Resource, ResourceForm, ResourceKind};
use crate::error::FormError;
use serde::{Deserialize, Serialize};

/// An individual realtor.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Realtor {
    pub id: RecordId,
    #[serde(default)]
    pub name: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RealtorDraft {
    pub name: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct RealtorForm {
    pub name: String,
}

impl ResourceForm for RealtorForm {
    type Draft = RealtorDraft;

    const FIELDS: &'static [FieldSpec] = &[FieldSpec {
        key: "name",
        label: "Name",
        input: InputKind::Text,
    }];

    fn value(&self, key: &str) -> &str {
        match key {
            "name" => &self.name,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        if key == "name" {
            self.name = value;
        }
    }

    fn to_draft(&self) -> Result<RealtorDraft, FormError> {
        Ok(RealtorDraft {
            name: self.name.clone(),
        })
    }
}

impl Resource for Realtor {
    const KIND: ResourceKind = ResourceKind::Realtors;
    type Draft = RealtorDraft;
    type Form = RealtorForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> RealtorForm {
        RealtorForm {
            name: self.name.clone(),
        }
    }

    fn title(&self) -> String {
        self.name.clone()
    }

    fn card_details(&self) -> Vec<(&'static str, String)> {
        Vec::new()
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![("Name", self.name.clone())]
    }
}
