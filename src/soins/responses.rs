use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchSoinItem {
    pub id_soin: u64,
    pub type_soin: String,
    pub prix: f64,
    pub departement: String,
}

#[derive(Default, Serialize)]
pub struct SearchSoinResponse {
    pub success: bool,
    pub err: String,
    pub soins: Vec<SearchSoinItem>,
}

crate::impl_err_response! {
    SearchSoinResponse,
}
