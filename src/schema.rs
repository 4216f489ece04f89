table! {
    administration (id_admin) {
        id_admin -> Unsigned<Bigint>,
        nom -> Varchar,
        prenom -> Varchar,
        age -> Integer,
        sexe -> Char,
        situation -> Varchar,
        telephone -> Varchar,
        mail -> Varchar,
        id_departement -> Unsigned<Bigint>,
        code_admin -> Char,
        diplome -> Varchar,
        date_e -> Date,
        id_salaire -> Unsigned<Bigint>,
        nombre_consultation -> Integer,
        profil -> Nullable<Varchar>,
        identite -> Nullable<Varchar>,
    }
}

table! {
    agenda (id_agenda) {
        id_agenda -> Unsigned<Bigint>,
        id_patient -> Unsigned<Bigint>,
        nom -> Varchar,
        prenom -> Varchar,
        age -> Integer,
        sexe -> Char,
        ethnie -> Varchar,
        telephone -> Varchar,
        localite -> Varchar,
        tension -> Varchar,
        type_soin -> Varchar,
        diagnostique -> Varchar,
        prescription -> Varchar,
        id_admin -> Unsigned<Bigint>,
        date -> Date,
        heure -> Varchar,
    }
}

table! {
    avance_salaire (id_avance) {
        id_avance -> Unsigned<Bigint>,
        id_admin -> Unsigned<Bigint>,
        montant_avance -> Double,
        date_avance -> Date,
    }
}

table! {
    comptabilite (id_charge) {
        id_charge -> Unsigned<Bigint>,
        charge -> Varchar,
        credit -> Double,
        description -> Nullable<Varchar>,
        date -> Date,
    }
}

table! {
    connexions (token, id_admin, date_connexion) {
        token -> Char,
        id_admin -> Unsigned<Bigint>,
        date_connexion -> Datetime,
    }
}

table! {
    consultation (id_consultation) {
        id_consultation -> Unsigned<Bigint>,
        id_patient -> Unsigned<Bigint>,
        nom -> Varchar,
        prenom -> Varchar,
        age -> Integer,
        sexe -> Char,
        ethnie -> Varchar,
        telephone -> Varchar,
        localite -> Varchar,
        tension -> Varchar,
        type_soin -> Varchar,
        diagnostique -> Varchar,
        prescription -> Varchar,
        montant -> Double,
        id_admin -> Unsigned<Bigint>,
        date -> Datetime,
    }
}

table! {
    departements (id_departement) {
        id_departement -> Unsigned<Bigint>,
        departement -> Varchar,
    }
}

table! {
    detaille_vente (id_vente_detail) {
        id_vente_detail -> Unsigned<Bigint>,
        id_vente -> Unsigned<Bigint>,
        id_medicament -> Unsigned<Bigint>,
        nom -> Varchar,
        forme -> Varchar,
        dosage -> Varchar,
        quantite_vendue -> Integer,
        prix_unitaire -> Double,
    }
}

table! {
    historique_achats (id_achat) {
        id_achat -> Unsigned<Bigint>,
        id_medicament -> Unsigned<Bigint>,
        quantite -> Integer,
        prix_achat -> Double,
        date_achat -> Date,
        fournisseur -> Varchar,
        num_fournisseur -> Varchar,
    }
}

table! {
    medicaments (id_medicament) {
        id_medicament -> Unsigned<Bigint>,
        nom -> Varchar,
        forme -> Varchar,
        dosage -> Varchar,
        posologie -> Varchar,
    }
}

table! {
    paiement (id_paiement) {
        id_paiement -> Unsigned<Bigint>,
        id_salaire -> Unsigned<Bigint>,
        id_admin -> Unsigned<Bigint>,
        sur_salaire -> Double,
        prime -> Double,
        inps -> Double,
        amo -> Double,
        its -> Double,
        avance -> Double,
        net -> Double,
        date_paiement -> Datetime,
    }
}

table! {
    patient (id_patient) {
        id_patient -> Unsigned<Bigint>,
        telephone -> Varchar,
        nom -> Varchar,
        prenom -> Varchar,
        age -> Integer,
        sexe -> Char,
        ethnie -> Varchar,
        localite -> Varchar,
        tension -> Varchar,
        type_soin -> Varchar,
        code_admin -> Char,
    }
}

table! {
    recu (id_recu) {
        id_recu -> Unsigned<Bigint>,
        id_patient -> Unsigned<Bigint>,
        type_soin -> Varchar,
        id_soin -> Unsigned<Bigint>,
        montant -> Double,
    }
}

table! {
    salaire (id_salaire) {
        id_salaire -> Unsigned<Bigint>,
        salaire_brute -> Double,
        inps -> Double,
        amo -> Double,
    }
}

table! {
    soins (id_soin) {
        id_soin -> Unsigned<Bigint>,
        type_soin -> Varchar,
        prix -> Double,
        id_departement -> Unsigned<Bigint>,
    }
}

table! {
    stock_medicaments (id_stock) {
        id_stock -> Unsigned<Bigint>,
        id_medicament -> Unsigned<Bigint>,
        stock_courant -> Integer,
        prix_achat -> Double,
        prix_unitaire -> Double,
        date_achat -> Date,
        date_peremption -> Date,
    }
}

table! {
    vente (id_vente) {
        id_vente -> Unsigned<Bigint>,
        montant_total -> Double,
        code_admin -> Char,
        mode_paiement -> Varchar,
        date -> Datetime,
    }
}

allow_tables_to_appear_in_same_query!(
    administration,
    agenda,
    avance_salaire,
    comptabilite,
    connexions,
    consultation,
    departements,
    detaille_vente,
    historique_achats,
    medicaments,
    paiement,
    patient,
    recu,
    salaire,
    soins,
    stock_medicaments,
    vente,
);
