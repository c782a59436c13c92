//! Backend code enumerations
//!
//! Every enumeration serializes as its backend code string, parses from it
//! with [`FromStr`](std::str::FromStr), and displays as it.

use crate::error::UnknownCode;
use serde::{Deserialize, Serialize};

/// Declare an enumeration backed by fixed code strings
macro_rules! code_enum {
    (
        $(#[$meta:meta])*
        $vis:vis enum $name:ident {
            $(
                $(#[$variant_meta:meta])*
                $variant:ident => $code:literal,
            )+
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
        $vis enum $name {
            $(
                $(#[$variant_meta])*
                #[serde(rename = $code)]
                $variant,
            )+
        }

        impl $name {
            /// Backend code of this value
            #[must_use]
            pub const fn as_str(self) -> &'static str {
                match self {
                    $(Self::$variant => $code,)+
                }
            }
        }

        impl std::fmt::Display for $name {
            fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
                f.write_str(self.as_str())
            }
        }

        impl std::str::FromStr for $name {
            type Err = UnknownCode;

            fn from_str(code: &str) -> Result<Self, Self::Err> {
                match code {
                    $($code => Ok(Self::$variant),)+
                    other => Err(UnknownCode {
                        kind: stringify!($name),
                        code: other.to_string(),
                    }),
                }
            }
        }
    };
}

code_enum! {
    /// Result envelope status
    pub enum ResultStatus {
        /// Normal completion
        Success => "N000",
        /// Backend-side critical error
        CriticalError => "E000",
    }
}

code_enum! {
    /// Which ticket information purchase-number authentication returns
    pub enum InformationTypeCode {
        /// Valid tickets only
        Valid => "1",
        /// Invalid tickets only
        Invalid => "2",
        /// Both valid and invalid tickets
        All => "3",
    }
}

code_enum! {
    /// Why a purchase number failed authentication
    pub enum PurchaseInvalidityReason {
        /// Purchase number does not exist
        NoExistence => "01",
        /// PIN code required
        PinCodeRequired => "02",
        /// PIN code did not match
        PinCodeError => "03",
        /// Film does not match
        FilmDiscrepancy => "04",
        /// Not activated
        Unactivated => "05",
        /// Not eligible for the selected exhibitor
        NotEligibleForSelection => "06",
        /// Expired
        Expired => "07",
        /// Outside the seat reservation period
        OutsideSeatingReservationPeriod => "08",
        /// Other
        Other => "09",
        /// Seat reservation has not started yet
        BeforeTheSeatReservationStarts => "11",
        /// Redeemed purchase number count mismatch
        TemporaryRedemptionNumberPurchaseNumberMismatch => "12",
    }
}

code_enum! {
    /// Seat sync registration or cancellation
    pub enum DeleteFlag {
        /// Register the seats
        False => "0",
        /// Cancel the seats
        True => "1",
    }
}

code_enum! {
    /// Outcome of a seat reservation sync
    pub enum ReservationResult {
        /// Reservation succeeded
        Success => "01",
        /// Failed: invalid tickets present
        FailureInvalid => "02",
        /// Failed: purchase number sent more than once
        FailureOverlap => "03",
        /// Failed: requested ticket type does not exist
        FailureNotExist => "04",
        /// Failed: other
        FailureOther => "09",
        /// Cancellation succeeded
        CancelSuccess => "11",
        /// Cancellation failed
        CancelFailure => "19",
    }
}

code_enum! {
    /// Why a purchase number was rejected by seat sync
    pub enum InvalidityCategory {
        /// Purchase number does not exist
        NotFound => "01",
        /// No PIN code given
        NoInputOfPinCode => "02",
        /// PIN code is wrong
        IncorrectPinCode => "03",
        /// Film of the purchase number differs from the requested film
        FilmNotMatch => "04",
        /// Not activated
        NotActivated => "05",
        /// Theater voucher of another exhibitor
        OtherEntertainmentTheaterVouchers => "06",
        /// Expired (unused by the backend)
        Expired => "07",
        /// Other
        Other => "09",
        /// Seats cannot be designated yet for this card ticket
        CanNotDesignateASeatYet => "11",
        /// Redeemed purchase number count differs from the request
        NotMatchThePurchaseNumber => "12",
    }
}

code_enum! {
    /// Device the reservation was made from
    pub enum ReserveDeviceType {
        /// MVTK site (unused)
        MvtkSite => "01",
        /// Exhibitor site, PC
        EntertainerSitePc => "02",
        /// Exhibitor site, smartphone
        EntertainerSiteSp => "03",
        /// Theater box office PC
        TheaterPc => "04",
        /// Ticket vending machine
        TicketMachine => "05",
        /// MVTK ticketing terminal (unused)
        MvtkTicketMachine => "06",
    }
}

impl ReservationResult {
    /// Whether this code is a terminal success (`Success` or `CancelSuccess`)
    #[must_use]
    pub const fn is_success(self) -> bool {
        matches!(self, Self::Success | Self::CancelSuccess)
    }
}
