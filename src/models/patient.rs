use crate::schema::patient;

#[derive(Queryable)]
pub struct PatientData {
    pub id_patient: u64,
    pub telephone: String,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub ethnie: String,
    pub localite: String,
    pub tension: String,
    pub type_soin: String,
    pub code_admin: String,
}

#[derive(Insertable)]
#[table_name = "patient"]
pub struct NewPatient {
    pub telephone: String,
    pub nom: String,
    pub prenom: String,
    pub age: i32,
    pub sexe: String,
    pub ethnie: String,
    pub localite: String,
    pub tension: String,
    pub type_soin: String,
    pub code_admin: String,
}
