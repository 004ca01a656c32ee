//! Domain entity types managed by the data layer.
//!
//! One file per entity kind. Each type implements [`Entity`] (stable id)
//! and [`Resource`] (its collection endpoint), which is all the generic
//! slice/transaction machinery needs to know about it.
//!
//! [`Entity`]: crate::slice::Entity
//! [`Resource`]: crate::slice::Resource

mod earned_membership;
mod invoice;
mod member;
mod payment;
mod rental;
mod report;
mod subscription;

pub use earned_membership::{EarnedMembership, Requirement};
pub use invoice::{invoice_option_catalog, Invoice, InvoiceOption, InvoiceOptionCatalog};
pub use member::{Member, MemberStatus};
pub use payment::{PaymentStatus, PaymentTransaction};
pub use rental::Rental;
pub use report::{Report, ReportRequirement};
pub use subscription::{Subscription, SubscriptionStatus};
