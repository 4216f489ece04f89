use crate::schema::salaire;

/// Parts salariales retenues sur le brut à la création d'une tranche.
pub const TAUX_INPS: f64 = 0.036;
pub const TAUX_AMO: f64 = 0.0306;

#[derive(Queryable)]
pub struct SalaireData {
    pub id_salaire: u64,
    pub salaire_brute: f64,
    pub inps: f64,
    pub amo: f64,
}

#[derive(Insertable)]
#[table_name = "salaire"]
pub struct NewSalaire {
    pub salaire_brute: f64,
    pub inps: f64,
    pub amo: f64,
}

#[derive(AsChangeset, Default)]
#[table_name = "salaire"]
pub struct UpdateSalaire {
    pub salaire_brute: Option<f64>,
    pub inps: Option<f64>,
    pub amo: Option<f64>,
}
