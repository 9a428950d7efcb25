//! Human-readable selector text for logs and diagnostics.

use crate::{LuminanceMode, NeighbourDirection, Selector};
use core::fmt;

impl fmt::Display for Selector {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Type(ty) => write!(formatter, "{ty}"),
            Self::Class(class) => write!(formatter, ".{class}"),
            Self::Pseudo(pseudo) => write!(formatter, ":{pseudo}"),
            Self::Compound(parts) if parts.is_empty() => formatter.write_str("*"),
            Self::Compound(parts) => parts.iter().try_for_each(|part| write!(formatter, "{part}")),
            Self::Child { ancestor, target } => write!(formatter, "{ancestor} {target}"),
            Self::Neighbour {
                base,
                other,
                distance,
                direction,
            } => {
                let relation = match direction {
                    NeighbourDirection::Above => "above",
                    NeighbourDirection::Below => "below",
                    NeighbourDirection::Either => "near",
                };
                write!(formatter, "{base}:{relation}({distance}, {other})")
            }
            Self::Luminance {
                inner,
                threshold,
                mode,
            } => {
                let comparison = match mode {
                    LuminanceMode::GreaterThan => ">=",
                    LuminanceMode::LessThan => "<=",
                };
                write!(formatter, "{inner}:bg({comparison}{threshold})")
            }
        }
    }
}
