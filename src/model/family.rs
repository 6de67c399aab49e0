use serde::{Deserialize, Serialize};

/// Parents, siblings, current partner and children of one person, by name.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImmediateFamily {
    pub parents: Vec<String>,
    pub siblings: Vec<String>,
    pub partner: Option<String>,
    pub children: Vec<String>,
}

/// Relatives reached through the parents' siblings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtendedFamily {
    pub aunts: Vec<String>,
    pub uncles: Vec<String>,
    pub cousins: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Grandparents {
    /// Parents of the mother.
    pub maternal: Vec<String>,
    /// Parents of the father.
    pub paternal: Vec<String>,
    /// Parents of any parent recorded with `Other` gender.
    pub other: Vec<String>,
}
