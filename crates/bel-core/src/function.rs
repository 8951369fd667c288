//! BEL 1.0 function table.
//!
//! Terms keep their function name verbatim; this table only resolves the
//! long and short spellings to a shared identity.

use serde::{Deserialize, Serialize};

/// What a function's term denotes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ReturnType {
    Abundance,
    Activity,
    Process,
    Transformation,
    Modification,
    List,
}

macro_rules! functions {
    ($($variant:ident => $long:literal, $short:literal, $ret:ident;)*) => {
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(rename_all = "camelCase")]
        pub enum Function {
            $($variant,)*
        }

        impl Function {
            pub const ALL: &'static [Function] = &[$(Function::$variant,)*];

            pub fn long_name(self) -> &'static str {
                match self {
                    $(Function::$variant => $long,)*
                }
            }

            pub fn short_name(self) -> &'static str {
                match self {
                    $(Function::$variant => $short,)*
                }
            }

            pub fn return_type(self) -> ReturnType {
                match self {
                    $(Function::$variant => ReturnType::$ret,)*
                }
            }
        }
    };
}

functions! {
    Abundance => "abundance", "a", Abundance;
    BiologicalProcess => "biologicalProcess", "bp", Process;
    CatalyticActivity => "catalyticActivity", "cat", Activity;
    CellSecretion => "cellSecretion", "sec", Transformation;
    CellSurfaceExpression => "cellSurfaceExpression", "surf", Transformation;
    ChaperoneActivity => "chaperoneActivity", "chap", Activity;
    ComplexAbundance => "complexAbundance", "complex", Abundance;
    CompositeAbundance => "compositeAbundance", "composite", Abundance;
    Degradation => "degradation", "deg", Transformation;
    Fusion => "fusion", "fus", Modification;
    GeneAbundance => "geneAbundance", "g", Abundance;
    GtpBoundActivity => "gtpBoundActivity", "gtp", Activity;
    KinaseActivity => "kinaseActivity", "kin", Activity;
    List => "list", "list", List;
    MicroRnaAbundance => "microRNAAbundance", "m", Abundance;
    MolecularActivity => "molecularActivity", "act", Activity;
    Pathology => "pathology", "path", Process;
    PeptidaseActivity => "peptidaseActivity", "pep", Activity;
    PhosphataseActivity => "phosphataseActivity", "phos", Activity;
    Products => "products", "products", List;
    ProteinAbundance => "proteinAbundance", "p", Abundance;
    ProteinModification => "proteinModification", "pmod", Modification;
    Reactants => "reactants", "reactants", List;
    Reaction => "reaction", "rxn", Transformation;
    RibosylationActivity => "ribosylationActivity", "ribo", Activity;
    RnaAbundance => "rnaAbundance", "r", Abundance;
    Substitution => "substitution", "sub", Modification;
    TranscriptionalActivity => "transcriptionalActivity", "tscript", Activity;
    Translocation => "translocation", "tloc", Transformation;
    TransportActivity => "transportActivity", "tport", Activity;
    Truncation => "truncation", "trunc", Modification;
}

impl Function {
    /// Resolves either spelling. Case-sensitive, as in BEL.
    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL
            .iter()
            .copied()
            .find(|f| f.long_name() == name || f.short_name() == name)
    }
}

impl std::fmt::Display for Function {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.short_name())
    }
}
