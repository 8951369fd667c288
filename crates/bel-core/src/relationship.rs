//! The closed set of BEL relationships.
//!
//! Each relationship has a long keyword (`directlyIncreases`), and some also
//! have a symbolic form (`=>`) or an abbreviated keyword (`pos`). All forms
//! are accepted when parsing; rendering prefers the symbol, then the keyword.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RelationshipType {
    Increases,
    Decreases,
    DirectlyIncreases,
    DirectlyDecreases,
    CausesNoChange,
    PositiveCorrelation,
    NegativeCorrelation,
    Association,
    BiomarkerFor,
    PrognosticBiomarkerFor,
    Orthologous,
    TranscribedTo,
    TranslatedTo,
    RateLimitingStepOf,
    SubProcessOf,
    HasMember,
    HasMembers,
    HasComponent,
    HasComponents,
    IsA,
    HasVariant,
    HasProduct,
    HasModification,
    HasReactant,
    ActsIn,
    Includes,
    Translocates,
    Analogous,
}

use RelationshipType::*;

impl RelationshipType {
    pub const ALL: [RelationshipType; 28] = [
        Increases,
        Decreases,
        DirectlyIncreases,
        DirectlyDecreases,
        CausesNoChange,
        PositiveCorrelation,
        NegativeCorrelation,
        Association,
        BiomarkerFor,
        PrognosticBiomarkerFor,
        Orthologous,
        TranscribedTo,
        TranslatedTo,
        RateLimitingStepOf,
        SubProcessOf,
        HasMember,
        HasMembers,
        HasComponent,
        HasComponents,
        IsA,
        HasVariant,
        HasProduct,
        HasModification,
        HasReactant,
        ActsIn,
        Includes,
        Translocates,
        Analogous,
    ];

    pub fn keyword(self) -> &'static str {
        match self {
            Increases => "increases",
            Decreases => "decreases",
            DirectlyIncreases => "directlyIncreases",
            DirectlyDecreases => "directlyDecreases",
            CausesNoChange => "causesNoChange",
            PositiveCorrelation => "positiveCorrelation",
            NegativeCorrelation => "negativeCorrelation",
            Association => "association",
            BiomarkerFor => "biomarkerFor",
            PrognosticBiomarkerFor => "prognosticBiomarkerFor",
            Orthologous => "orthologous",
            TranscribedTo => "transcribedTo",
            TranslatedTo => "translatedTo",
            RateLimitingStepOf => "rateLimitingStepOf",
            SubProcessOf => "subProcessOf",
            HasMember => "hasMember",
            HasMembers => "hasMembers",
            HasComponent => "hasComponent",
            HasComponents => "hasComponents",
            IsA => "isA",
            HasVariant => "hasVariant",
            HasProduct => "hasProduct",
            HasModification => "hasModification",
            HasReactant => "hasReactant",
            ActsIn => "actsIn",
            Includes => "includes",
            Translocates => "translocates",
            Analogous => "analogous",
        }
    }

    /// Symbolic operator, e.g. `->` for `increases`.
    pub fn symbol(self) -> Option<&'static str> {
        match self {
            Increases => Some("->"),
            Decreases => Some("-|"),
            DirectlyIncreases => Some("=>"),
            DirectlyDecreases => Some("=|"),
            Association => Some("--"),
            TranscribedTo => Some(":>"),
            TranslatedTo => Some(">>"),
            _ => None,
        }
    }

    /// Short keyword accepted in place of the long one.
    pub fn abbreviation(self) -> Option<&'static str> {
        match self {
            CausesNoChange => Some("cnc"),
            PositiveCorrelation => Some("pos"),
            NegativeCorrelation => Some("neg"),
            _ => None,
        }
    }

    pub fn from_symbol(symbol: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|r| r.symbol() == Some(symbol))
    }

    /// Looks up a long keyword or its abbreviation. Case-sensitive.
    pub fn from_keyword(word: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|r| r.keyword() == word || r.abbreviation() == Some(word))
    }

    /// Increases/decreases family, including the direct variants.
    pub fn is_causal(self) -> bool {
        matches!(
            self,
            Increases
                | Decreases
                | DirectlyIncreases
                | DirectlyDecreases
                | CausesNoChange
                | RateLimitingStepOf
        )
    }

    pub fn is_correlative(self) -> bool {
        matches!(self, PositiveCorrelation | NegativeCorrelation | Association)
    }
}

impl fmt::Display for RelationshipType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol().unwrap_or_else(|| self.keyword()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown relationship `{0}`")]
pub struct ParseRelationshipError(pub String);

impl FromStr for RelationshipType {
    type Err = ParseRelationshipError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_symbol(s)
            .or_else(|| Self::from_keyword(s))
            .ok_or_else(|| ParseRelationshipError(s.to_owned()))
    }
}
