use serde::{Deserialize, Serialize};

use crate::slice::{Entity, NormalizedCollection, Resource};

/// A billable line owed by a member.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Invoice {
    pub id: String,
    pub name: String,
    pub description: String,
    /// Decimal amount as the server formats it, e.g. "65.00".
    pub amount: String,
    pub quantity: u32,
    pub member_id: String,
    pub settled: bool,
    pub past_due: bool,
    /// ISO date the invoice is due.
    pub due_date: String,
}

impl Entity for Invoice {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for Invoice {
    const PATH: &'static str = "/api/admin/invoices";
}

/// A purchasable billing option (membership term, rental term) offered when
/// creating an invoice.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvoiceOption {
    pub id: String,
    pub name: String,
    pub description: String,
    pub amount: String,
    pub quantity: u32,
    pub disabled: bool,
    /// Promotional options render in their own group and win the default.
    pub is_promotion: bool,
}

impl Entity for InvoiceOption {
    fn id(&self) -> &str {
        &self.id
    }
}

impl Resource for InvoiceOption {
    const PATH: &'static str = "/api/admin/invoice-options";
}

/// Invoice options partitioned for the create-invoice view.
#[derive(Debug, Clone, PartialEq)]
pub struct InvoiceOptionCatalog {
    pub promotions: Vec<InvoiceOption>,
    pub standard: Vec<InvoiceOption>,
    /// Preselected option: first enabled promotion, else first enabled
    /// standard option.
    pub default_option: Option<InvoiceOption>,
}

/// Partition the option collection for rendering. Pure over the snapshot, so
/// it composes with [`crate::slice::Derived`] for memoized access.
pub fn invoice_option_catalog(
    collection: &NormalizedCollection<InvoiceOption>,
) -> InvoiceOptionCatalog {
    let mut promotions = Vec::new();
    let mut standard = Vec::new();
    for option in collection.iter() {
        if option.is_promotion {
            promotions.push(option.clone());
        } else {
            standard.push(option.clone());
        }
    }
    let default_option = promotions
        .iter()
        .chain(standard.iter())
        .find(|option| !option.disabled)
        .cloned();
    InvoiceOptionCatalog {
        promotions,
        standard,
        default_option,
    }
}
