//! # MVTK Reserve Service Client
//!
//! Rust client for the MVTK reserve service SOAP API: purchase-number
//! authentication and seat-info synchronization.
//!
//! ## Example
//!
//! ```no_run
//! use mvtk_reserve::{
//!     InformationTypeCode, KnyknrNoInfoIn, PurchaseNumberAuthIn, ReserveConfig,
//!     purchase_number_auth,
//! };
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     // Base endpoint from MVTK_RESERVE_ENDPOINT
//!     let config = ReserveConfig::from_env()?;
//!
//!     let args = PurchaseNumberAuthIn {
//!         kgygish_cd: "SSK000".to_string(),
//!         jhshbts_cd: InformationTypeCode::All,
//!         knyknr_no_info_in: vec![KnyknrNoInfoIn {
//!             knyknr_no: "3472695908".to_string(),
//!             pin_cd: "7648".to_string(),
//!         }],
//!         skhn_cd: "1622100".to_string(),
//!         st_cd: "18".to_string(),
//!         jei_ymd: "2017/02/16".to_string(),
//!     };
//!
//!     let result = purchase_number_auth(&config, &args).await?;
//!     println!("Valid tickets: {}", result.ykknmi_num_sum);
//!     Ok(())
//! }
//! ```
//!
//! ## Errors
//!
//! Failures come back as [`ReserveError`]:
//! - `Transport`: the remote call itself failed (message unmodified)
//! - `BackendStatus`: the result envelope carried a non-success status
//! - `ReservationResult`: seat sync succeeded at the envelope level but the
//!   reservation result is not `Success`/`CancelSuccess`

pub mod auth;
pub mod config;
pub mod enums;
pub mod error;
pub mod seat;
pub mod service;

// Re-export main types for convenience
pub use auth::{
    InvalidTicket, KnyknrNoInfoIn, PurchaseNumberAuthIn, PurchaseNumberAuthResult,
    PurchaseNumberInfo, ValidTicket, purchase_number_auth,
};
pub use config::{ENDPOINT_ENV, ReserveConfig};
pub use enums::{
    DeleteFlag, InformationTypeCode, InvalidityCategory, PurchaseInvalidityReason,
    ReservationResult, ReserveDeviceType, ResultStatus,
};
pub use error::{MappingError, ReserveError, UnknownCode};
pub use mvtk_soap::{BasicAuth, ClientOptions, SoapError};
pub use seat::{
    InvalidPurchaseNumberInfo, InvalidTicketDetailInfo, InvalidTicketTypeInfo, KnshInfo,
    KnyknrNoInfo, SeatInfoSyncIn, SeatInfoSyncResult, ZskInfo, seat_info_sync,
};
pub use service::ResultInfo;
