use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchSalaireItem {
    pub id_salaire: u64,
    pub salaire_brute: f64,
    pub inps: f64,
    pub amo: f64,
}

#[derive(Default, Serialize)]
pub struct SearchSalaireResponse {
    pub success: bool,
    pub err: String,
    pub salaires: Vec<SearchSalaireItem>,
}

#[derive(Default, Serialize)]
pub struct ViewSalaireResponse {
    pub success: bool,
    pub err: String,
    pub id_salaire: u64,
    pub salaire_brute: f64,
    pub inps: f64,
    pub amo: f64,
}

#[derive(Default, Serialize)]
pub struct ViewAvanceResponse {
    pub success: bool,
    pub err: String,
    pub avance: f64,
}

#[derive(Default, Serialize)]
pub struct PayResponse {
    pub success: bool,
    pub err: String,
    pub net: f64,
    pub fiche_paie: String,
}

crate::impl_err_response! {
    SearchSalaireResponse,
    ViewSalaireResponse,
    ViewAvanceResponse,
    PayResponse,
}
