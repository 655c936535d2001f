use super::{FieldSpec, InputKind, RecordId, Resource, ResourceForm, ResourceKind};
use crate::error::FormError;
use crate::format::format_price;
use serde::{Deserialize, Serialize};

/// A listed property.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Property {
    pub id: RecordId,
    #[serde(default)]
    pub city: String,
    #[serde(default)]
    pub price: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PropertyDraft {
    pub city: String,
    pub price: f64,
}

/// Property form. `price` stays as typed until [`ResourceForm::to_draft`].
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PropertyForm {
    pub city: String,
    pub price: String,
}

impl ResourceForm for PropertyForm {
    type Draft = PropertyDraft;

    const FIELDS: &'static [FieldSpec] = &[
        FieldSpec {
            key: "city",
            label: "City",
            input: InputKind::Text,
        },
        FieldSpec {
            key: "price",
            label: "Price",
            input: InputKind::Number,
        },
    ];

    fn value(&self, key: &str) -> &str {
        match key {
            "city" => &self.city,
            "price" => &self.price,
            _ => "",
        }
    }

    fn set_value(&mut self, key: &str, value: String) {
        match key {
            "city" => self.city = value,
            "price" => self.price = value,
            _ => {}
        }
    }

    /// Rejects prices that are not finite numbers. Range checks (e.g. price
    /// must be positive) are left to the server so its message is shown.
    fn to_draft(&self) -> Result<PropertyDraft, FormError> {
        let price = self
            .price
            .trim()
            .parse::<f64>()
            .ok()
            .filter(|p| p.is_finite())
            .ok_or(FormError::InvalidNumber { field: "Price" })?;

        Ok(PropertyDraft {
            city: self.city.clone(),
            price,
        })
    }
}

impl Resource for Property {
    const KIND: ResourceKind = ResourceKind::Properties;
    type Draft = PropertyDraft;
    type Form = PropertyForm;

    fn id(&self) -> RecordId {
        self.id
    }

    fn to_form(&self) -> PropertyForm {
        PropertyForm {
            city: self.city.clone(),
            price: self.price.to_string(),
        }
    }

    fn title(&self) -> String {
        format!("Property in {}", self.city)
    }

    fn card_details(&self) -> Vec<(&'static str, String)> {
        self.fields()
    }

    fn fields(&self) -> Vec<(&'static str, String)> {
        vec![
            ("City", self.city.clone()),
            ("Price", format!("${}", format_price(self.price))),
        ]
    }
}
