use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddSoinRequest {
    pub type_soin: String,
    pub prix: f64,
    pub departement: String,
}

#[derive(Deserialize)]
pub struct SearchSoinRequest {
    pub type_soin: Option<String>,
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct DeleteSoinRequest {
    pub id_soin: u64,
}
