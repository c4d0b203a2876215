//! Closed enumerations: colour, size, condition, currency.
//!
//! Every enum has a fixed member set. The textual form (serde and
//! `Display`/`FromStr`) is the lowerCamelCase tag, e.g. `extraSmall`.

use core::str::FromStr;
use serde::{Deserialize, Serialize};

use upcycle_core::DomainError;

macro_rules! closed_enum_text {
    ($t:ident, $kind:literal, { $($variant:ident => $tag:literal),+ $(,)? }) => {
        impl $t {
            /// Every member, in declaration order.
            pub const ALL: &'static [$t] = &[$($t::$variant),+];

            pub fn as_str(&self) -> &'static str {
                match self {
                    $($t::$variant => $tag),+
                }
            }
        }

        impl core::fmt::Display for $t {
            fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl FromStr for $t {
            type Err = DomainError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                match s {
                    $($tag => Ok($t::$variant),)+
                    other => Err(DomainError::invalid_enum($kind, other)),
                }
            }
        }
    };
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Colour {
    Black,
    White,
    Red,
    Green,
    Blue,
    Orange,
    Yellow,
    Pink,
    Purple,
    Brown,
    Grey,
}

closed_enum_text!(Colour, "colour", {
    Black => "black",
    White => "white",
    Red => "red",
    Green => "green",
    Blue => "blue",
    Orange => "orange",
    Yellow => "yellow",
    Pink => "pink",
    Purple => "purple",
    Brown => "brown",
    Grey => "grey",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Size {
    ExtraSmall,
    Small,
    Medium,
    Large,
    ExtraLarge,
}

closed_enum_text!(Size, "size", {
    ExtraSmall => "extraSmall",
    Small => "small",
    Medium => "medium",
    Large => "large",
    ExtraLarge => "extraLarge",
});

/// Condition of a second-hand item. Always required on an item.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ItemCondition {
    New,
    Used,
    Vintage,
}

closed_enum_text!(ItemCondition, "item condition", {
    New => "new",
    Used => "used",
    Vintage => "vintage",
});

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Currency {
    Usd,
    Aud,
    Gbp,
    Cad,
    Eur,
}

impl Currency {
    /// ISO 4217 code, as expected by external rate services.
    pub fn code(&self) -> &'static str {
        match self {
            Currency::Usd => "USD",
            Currency::Aud => "AUD",
            Currency::Gbp => "GBP",
            Currency::Cad => "CAD",
            Currency::Eur => "EUR",
        }
    }

    /// Parse a currency tag ignoring ASCII case (`usd`, `USD`, `Usd`).
    pub fn parse_code(s: &str) -> Result<Self, DomainError> {
        s.to_ascii_lowercase()
            .parse()
            .map_err(|_| DomainError::invalid_enum("currency", s))
    }
}

closed_enum_text!(Currency, "currency", {
    Usd => "usd",
    Aud => "aud",
    Gbp => "gbp",
    Cad => "cad",
    Eur => "eur",
});
