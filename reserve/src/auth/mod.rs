//! Purchase-number authentication
//!
//! Authenticates purchase-management numbers and their PIN codes against a
//! film, site and screening date, returning valid and invalid ticket details.

pub mod wire;

use crate::config::ReserveConfig;
use crate::enums::InformationTypeCode;
use crate::error::ReserveError;
use crate::service::{self, ResultInfo};
use serde::{Deserialize, Serialize};
use wire::PurchaseNumberAuthRequest;

/// Service description path under the base endpoint
pub const SERVICE_PATH: &str = "/Auth/PurchaseNumberAuthSvc.svc?singleWsdl";

const OPERATION: &str = "PurchaseNumberAuth";

/// Purchase number and PIN code to authenticate
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct KnyknrNoInfoIn {
    /// Purchase-management number
    pub knyknr_no: String,
    /// PIN code
    pub pin_cd: String,
}

/// Purchase-number authentication input
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseNumberAuthIn {
    /// Exhibitor company code
    pub kgygish_cd: String,
    /// Information type code
    pub jhshbts_cd: InformationTypeCode,
    /// Purchase numbers to authenticate (non-empty, in order)
    pub knyknr_no_info_in: Vec<KnyknrNoInfoIn>,
    /// Film code
    pub skhn_cd: String,
    /// Site code
    pub st_cd: String,
    /// Screening date (`YYYY/MM/DD`)
    pub jei_ymd: String,
}

/// Valid ticket details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValidTicket {
    /// Valid ticket type
    pub ykknsh_typ: String,
    /// Projection method type
    pub eishhshk_typ: String,
    /// Count per valid ticket type
    pub ykkn_knshbtsmi_num: String,
    /// Ticket sales unit price
    pub knshknhmbi_unip: String,
    /// Booked unit price
    pub kij_unip: String,
}

/// Invalid ticket details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InvalidTicket {
    /// Invalid ticket type
    pub mkknsh_typ: String,
    /// Count per invalid ticket type
    pub mkkn_knshbtsmi_num: String,
    /// Invalidity reason type
    pub mkjy_typ: String,
    /// Reservation date and time
    pub yyk_dt: String,
    /// Screening date and time the ticket was used for
    pub shy_jei_dt: String,
    /// Site code the ticket was used at
    pub shy_st_cd: String,
    /// Screen code the ticket was used at
    pub shy_scrn_cd: String,
    /// Film code the ticket was used for
    pub shy_skhn_cd: String,
    /// Film name the ticket was used for
    pub shy_skhn_nm: String,
}

/// Per-purchase-number authentication details
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseNumberInfo {
    /// Purchase-management number
    pub knyknr_no: String,
    /// Invalidity reason code, see [`PurchaseInvalidityReason`](crate::PurchaseInvalidityReason)
    pub knyknr_no_mkujyu_cd: String,
    /// Gift ticket purchase date
    pub kgygftknkny_ymd: String,
    /// Gift ticket validity period
    pub kgygftknyk_tm: String,
    /// Electronic ticket type
    pub dnsh_km_typ: String,
    /// Nationwide / theater ticket type
    pub znkkkytskn_gkjkn_typ: String,
    /// Valid ticket count
    pub ykknmi_num: String,
    /// Invalid ticket count
    pub mkknmi_num: String,
    /// Valid tickets
    pub ykkn_info: Vec<ValidTicket>,
    /// Invalid tickets
    pub mkkn_info: Vec<InvalidTicket>,
}

/// Purchase-number authentication output
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PurchaseNumberAuthResult {
    /// Result envelope
    pub result_info: ResultInfo,
    /// Total valid ticket count
    pub ykknmi_num_sum: u32,
    /// Total invalid ticket count
    pub mkknmi_num_sum: u32,
    /// Details per purchase number
    pub knyknr_no_info_out: Vec<PurchaseNumberInfo>,
}

/// Authenticate purchase numbers
///
/// # Errors
///
/// - `ReserveError::Transport` if the service description or the call fails
/// - `ReserveError::BackendStatus` if the result envelope is not a success
#[tracing::instrument(skip_all, name = "purchase_number_auth")]
pub async fn purchase_number_auth(
    config: &ReserveConfig,
    args: &PurchaseNumberAuthIn,
) -> Result<PurchaseNumberAuthResult, ReserveError> {
    tracing::debug!(count = args.knyknr_no_info_in.len(), "Authenticating purchase numbers");

    let parameters = PurchaseNumberAuthRequest::from(args).into_parameters();
    let (result, info) = service::invoke(config, SERVICE_PATH, OPERATION, parameters).await?;

    Ok(wire::decode_result(&result, info)?)
}
