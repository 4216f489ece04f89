use serde::Deserialize;

#[derive(Deserialize)]
pub struct SearchSalaireRequest {
    pub first_index: Option<i64>,
    pub limit: Option<i64>,
}

#[derive(Deserialize)]
pub struct ViewSalaireRequest {
    pub id_admin: u64,
}

#[derive(Deserialize)]
pub struct ModifySalaireRequest {
    pub id_salaire: u64,
    pub salaire_brute: Option<f64>,
    pub inps: Option<f64>,
    pub amo: Option<f64>,
}

#[derive(Deserialize)]
pub struct AddAvanceRequest {
    pub id_admin: u64,
    pub montant_avance: f64,
    pub date_avance: String,
}

#[derive(Deserialize)]
pub struct ViewAvanceRequest {
    pub id_admin: u64,
}

#[derive(Deserialize)]
pub struct PayRequest {
    pub id_admin: u64,
    pub salaire_brute: f64,
    pub sur_salaire: f64,
    pub prime: f64,
    pub its: f64,
}
