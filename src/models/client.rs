//! Clients that receive invoices.

use crate::macros::record_transformer;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Client {
    pub id: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub company: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vat_number: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub address: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub archived: Option<bool>,
}

#[derive(Deserialize)]
struct ClientWire {
    id: u64,
    name: Option<String>,
    email: Option<String>,
    company: Option<String>,
    vat_number: Option<String>,
    address: Option<String>,
    archived: Option<bool>,
}

impl From<ClientWire> for Client {
    fn from(wire: ClientWire) -> Self {
        Self {
            id: wire.id,
            name: wire.name,
            email: wire.email,
            company: wire.company,
            vat_number: wire.vat_number,
            address: wire.address,
            archived: wire.archived,
        }
    }
}

record_transformer!(
    ClientTransformer,
    "client",
    ClientWire => Client,
    transform_client_response
);
