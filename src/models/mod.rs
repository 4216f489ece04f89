pub mod administration;
pub mod agenda;
pub mod avance_salaire;
pub mod comptabilite;
pub mod consultation;
pub mod departements;
pub mod detaille_vente;
pub mod historique_achats;
pub mod medicaments;
pub mod paiement;
pub mod patient;
pub mod recu;
pub mod salaire;
pub mod soins;
pub mod stock_medicaments;
pub mod vente;

pub mod connexions;
