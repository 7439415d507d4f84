//! Word datasets for the chair-or-swear game. Both lists are uppercase the
//! way the card displays them, unique, and disjoint, which the dataset tests
//! enforce.

/// IKEA chair and armchair model names.
pub const CHAIR_WORDS: &[&str] = &[
    "POÄNG", "PELLO", "STRANDMON", "MARKUS", "JÄRVFJÄLLET", "HATTEFJÄLL",
    "FLINTAN", "MILLBERGET", "RENBERGET", "LÅNGFJÄLL", "ALEFJÄLL", "ODGER",
    "JANINGE", "TOBIAS", "INGOLF", "STEFAN", "KAUSTBY", "NORRNÄS",
    "EKEDALEN", "NORDVIKEN", "LISABO", "RÖNNINGE", "ADDE", "TEODORES",
    "NILSOVE", "FANBYN", "SAKARIAS", "BERGMUND", "HENRIKSDAL", "NOLMYRA",
    "MUREN", "EKENÄSET", "KOARP", "GISTAD", "EKERÖ", "FRÖSET",
];

/// Swedish swear words and insults, mild oaths included.
pub const SWEAR_WORDS: &[&str] = &[
    "FAN", "JÄVLAR", "HELVETE", "SKIT", "FÖRBANNAT", "FÖRBASKAT",
    "JÄKLAR", "TUSAN", "SJUTTON", "ATTANS", "FASEN", "KATTEN",
    "JÖSSES", "HERREGUD", "RACKARNS", "BÖVELEN", "DUMBOM", "FÅNTRATT",
    "SKITSTÖVEL", "KRÄK", "DRUMMEL", "SLYNGEL", "TÖNT", "TOKSTOLLE",
    "KNASBOLL", "FJANT", "DUMSKALLE", "TRÄSKALLE",
];
