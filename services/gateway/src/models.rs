use catalog::event::{AddOn, TicketType};
use serde::Serialize;

#[derive(Debug, Clone, Serialize)]
pub struct ServiceInfo {
    pub message: String,
    pub version: String,
}

#[derive(Debug, Clone, Serialize)]
pub struct TicketListResponse {
    pub tickets: Vec<TicketType>,
}

#[derive(Debug, Clone, Serialize)]
pub struct AddOnListResponse {
    pub addons: Vec<AddOn>,
}
