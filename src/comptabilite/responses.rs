use serde::Serialize;

#[derive(Default, Serialize)]
pub struct SearchChargeItem {
    pub id_charge: u64,
    pub charge: String,
    pub credit: f64,
    pub description: String,
    pub date: String,
}

#[derive(Default, Serialize)]
pub struct SearchChargeResponse {
    pub success: bool,
    pub err: String,
    pub charges: Vec<SearchChargeItem>,
}

/// Agrégat mensuel : somme des montants et date de la dernière écriture du
/// mois, vide quand aucune écriture n'existe.
#[derive(Default, Serialize)]
pub struct TotalResponse {
    pub success: bool,
    pub err: String,
    pub total: f64,
    pub derniere_date: String,
}

crate::impl_err_response! {
    SearchChargeResponse,
    TotalResponse,
}
