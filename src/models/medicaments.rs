use crate::schema::medicaments;

#[derive(Queryable)]
pub struct MedicamentData {
    pub id_medicament: u64,
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub posologie: String,
}

#[derive(Insertable)]
#[table_name = "medicaments"]
pub struct NewMedicament {
    pub nom: String,
    pub forme: String,
    pub dosage: String,
    pub posologie: String,
}
