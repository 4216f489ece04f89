use serde::Deserialize;

#[derive(Deserialize)]
pub struct AddChargeRequest {
    pub charge: String,
    pub credit: f64,
    pub description: Option<String>,
    pub date: String,
}

/// Toutes les consultations comptables portent sur un mois civil.
#[derive(Deserialize)]
pub struct MonthRequest {
    pub annee: i32,
    pub mois: u32,
}
