//! The built-in regulatory rule set, one module per rule family.
//!
//! Declaration order is laws first, then warnings; the graph may reorder
//! within topological constraints but in practice this order stands.

use crate::graph::RuleDef;

mod breach_notification;
mod coppa;
mod fda_device;
mod hipaa;
mod info_blocking;
mod substance_use;

pub fn all() -> Vec<RuleDef> {
    vec![
        hipaa::law(),
        breach_notification::law(),
        fda_device::law(),
        info_blocking::law(),
        coppa::law(),
        substance_use::law(),
        breach_notification::consumer_phr_warning(),
        fda_device::function_warning(),
        coppa::childrens_data_warning(),
    ]
}
